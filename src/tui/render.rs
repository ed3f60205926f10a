use super::state::{AppState, RunState, FIELD_COUNT, FIELD_LABELS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::borrow::Cow;

const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

pub fn draw(f: &mut Frame, state: &AppState, spinner_frame: u8) {
    let mut constraints = Vec::with_capacity(FIELD_COUNT + 4);
    constraints.push(Constraint::Length(3)); // header
    for _ in 0..FIELD_COUNT {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Min(5)); // log
    constraints.push(Constraint::Length(3)); // banner
    constraints.push(Constraint::Length(1)); // footer

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    draw_header(f, chunks[0]);
    for i in 0..FIELD_COUNT {
        draw_field(f, state, i, chunks[1 + i]);
    }
    draw_logs(f, state, chunks[1 + FIELD_COUNT]);
    draw_banner(f, state, chunks[2 + FIELD_COUNT], spinner_frame);
    draw_footer(f, state, chunks[3 + FIELD_COUNT]);
}

fn draw_header(f: &mut Frame, area: Rect) {
    let para = Paragraph::new(Line::from(Span::styled(
        "Hugo blog bootstrap & deploy",
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(para, area);
}

fn draw_field(f: &mut Frame, state: &AppState, index: usize, area: Rect) {
    let focused = state.focus == index;
    let editable = state.run_state == RunState::Idle;

    let border_style = if focused && editable {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let inner_width = area.width.saturating_sub(2) as usize;
    let cursor_width = if focused && editable { 1 } else { 0 };
    let value = truncate_left(&state.inputs[index], inner_width.saturating_sub(cursor_width + 1));

    let mut spans = vec![Span::raw(" "), Span::raw(value.into_owned())];
    if focused && editable {
        spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
    }

    let block = Block::default()
        .title(FIELD_LABELS[index])
        .borders(Borders::ALL)
        .border_style(border_style);
    let para = Paragraph::new(Line::from(spans)).block(block);
    f.render_widget(para, area);
}

fn draw_logs(f: &mut Frame, state: &AppState, area: Rect) {
    let max_width = area.width.saturating_sub(2) as usize;
    let visible_lines = area.height.saturating_sub(2) as usize;

    let total = state.logs.len();
    let offset = state
        .log_scroll_offset
        .min(total.saturating_sub(visible_lines));

    let lines: Vec<Line> = state
        .logs
        .iter()
        .rev()
        .skip(offset)
        .take(visible_lines)
        .map(|l| {
            let color = match l.level.as_str() {
                "ERROR" => Color::Red,
                "DONE" => Color::Green,
                _ => Color::DarkGray,
            };
            let prefix = format!(" {} ", l.time);
            let msg_max = max_width.saturating_sub(prefix.chars().count());
            let msg = truncate_with_ellipsis(&l.message, msg_max);
            Line::from(vec![
                Span::styled(prefix, Style::default().fg(color)),
                Span::raw(msg.into_owned()),
            ])
        })
        .collect();

    let block = Block::default().title(" 🖥️ Log ").borders(Borders::ALL);
    let para = Paragraph::new(lines).block(block);
    f.render_widget(para, area);
}

/// Modal-equivalent outcome area: running status with a spinner, the success
/// or failure message, or a validation warning.
fn draw_banner(f: &mut Frame, state: &AppState, area: Rect, spinner_frame: u8) {
    let max_width = area.width.saturating_sub(4) as usize;

    let (line, border_color) = match &state.run_state {
        RunState::Running => {
            let ch = SPINNER_FRAMES[(spinner_frame as usize) % SPINNER_FRAMES.len()];
            (
                Line::from(Span::styled(
                    format!("{ch} Deploying... {}", state.elapsed()),
                    Style::default().fg(Color::Cyan),
                )),
                Color::Cyan,
            )
        }
        RunState::Succeeded(message) => (
            Line::from(Span::styled(
                truncate_with_ellipsis(message, max_width).into_owned(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            Color::Green,
        ),
        RunState::Failed(message) => (
            Line::from(Span::styled(
                truncate_with_ellipsis(message, max_width).into_owned(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Color::Red,
        ),
        RunState::Idle => match &state.warning {
            Some(warning) => (
                Line::from(Span::styled(
                    format!("⚠ {}", truncate_with_ellipsis(warning, max_width)),
                    Style::default().fg(Color::Yellow),
                )),
                Color::Yellow,
            ),
            None => (
                Line::from(Span::styled(
                    "Ready",
                    Style::default().fg(Color::DarkGray),
                )),
                Color::DarkGray,
            ),
        },
    };

    let title = match &state.run_state {
        RunState::Running => " Status ",
        RunState::Succeeded(_) => " Done ",
        RunState::Failed(_) => " Error ",
        RunState::Idle => " Status ",
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let para = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(para, area);
}

fn draw_footer(f: &mut Frame, state: &AppState, area: Rect) {
    let line = match &state.run_state {
        RunState::Running => Line::from(Span::styled(
            "  deployment in progress — input disabled",
            Style::default().fg(Color::DarkGray),
        )),
        RunState::Succeeded(_) | RunState::Failed(_) => Line::from(vec![
            Span::styled("  [any key]", Style::default().fg(Color::Yellow)),
            Span::raw(" dismiss"),
        ]),
        RunState::Idle => Line::from(vec![
            Span::styled("  [Tab/↑↓]", Style::default().fg(Color::Yellow)),
            Span::raw(" field  "),
            Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
            Span::raw(" deploy  "),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" quit  "),
        ]),
    };
    f.render_widget(Paragraph::new(line), area);
}

fn truncate_with_ellipsis(s: &str, max_width: usize) -> Cow<'_, str> {
    let char_count = s.chars().count();
    if char_count <= max_width {
        Cow::Borrowed(s)
    } else if max_width <= 3 {
        Cow::Owned(".".repeat(max_width))
    } else {
        let end = s
            .char_indices()
            .nth(max_width - 3)
            .map(|(i, _)| i)
            .unwrap_or(s.len());
        Cow::Owned(format!("{}...", &s[..end]))
    }
}

/// Keep the tail of the value visible while typing long paths and URLs.
fn truncate_left(s: &str, max_width: usize) -> Cow<'_, str> {
    let char_count = s.chars().count();
    if char_count <= max_width {
        Cow::Borrowed(s)
    } else {
        let skip = char_count - max_width;
        Cow::Owned(s.chars().skip(skip).collect())
    }
}
