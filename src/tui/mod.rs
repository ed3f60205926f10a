pub mod render;
pub mod state;

use crate::config::Config;
use crate::deploy::{self, DeployEvent, Tools};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use state::{AppState, RunState};
use std::io::stdout;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the terminal UI until the operator quits.
pub async fn run_tui(config: Config, tools: Tools) -> Result<()> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let result = tui_loop(&mut terminal, AppState::new(&config), tools).await;

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

async fn tui_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    mut state: AppState,
    tools: Tools,
) -> Result<()> {
    let (events_tx, mut events_rx) = mpsc::unbounded_channel::<DeployEvent>();
    let mut spinner_frame: u8 = 0;

    loop {
        while let Ok(ev) = events_rx.try_recv() {
            apply_event(&mut state, ev);
        }

        spinner_frame = spinner_frame.wrapping_add(1);
        terminal.draw(|f| render::draw(f, &state, spinner_frame))?;

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && !handle_key(&mut state, key, &tools, &events_tx)
                {
                    return Ok(());
                }
            }
        }
    }
}

fn apply_event(state: &mut AppState, event: DeployEvent) {
    match event {
        DeployEvent::Progress(message) => state.push_log("STEP", message),
        DeployEvent::Finished { ok, message } => {
            state.started_at = None;
            if ok {
                state.push_log("DONE", message.clone());
                state.run_state = RunState::Succeeded(message);
            } else {
                state.push_log("ERROR", message.clone());
                state.run_state = RunState::Failed(message);
            }
        }
    }
}

/// Returns false when the operator asked to quit.
fn handle_key(
    state: &mut AppState,
    key: KeyEvent,
    tools: &Tools,
    events_tx: &mpsc::UnboundedSender<DeployEvent>,
) -> bool {
    match state.run_state {
        // No cancellation once a run has started; the run always proceeds to
        // completion or its first failure.
        RunState::Running => return true,
        RunState::Succeeded(_) | RunState::Failed(_) => {
            state.run_state = RunState::Idle;
            return true;
        }
        RunState::Idle => {}
    }

    match key.code {
        KeyCode::Esc => return false,
        KeyCode::Tab | KeyCode::Down => state.focus_next(),
        KeyCode::BackTab | KeyCode::Up => state.focus_prev(),
        KeyCode::Backspace => state.pop_char(),
        KeyCode::Enter => start_run(state, tools, events_tx),
        KeyCode::Char(c) => state.push_char(c),
        _ => {}
    }
    true
}

fn start_run(state: &mut AppState, tools: &Tools, events_tx: &mpsc::UnboundedSender<DeployEvent>) {
    state.warning = None;
    let cfg = state.deploy_config();

    if let Err(e) = deploy::validate(&cfg) {
        state.warning = Some(e.to_string());
        return;
    }

    state.logs.clear();
    state.log_scroll_offset = 0;
    state.run_state = RunState::Running;
    state.started_at = Some(std::time::Instant::now());
    tracing::info!(path = %cfg.path.display(), repo = %cfg.repo_url, "deployment started");

    let tools = tools.clone();
    let events_tx = events_tx.clone();
    // Each pipeline stage blocks on a subprocess, so the run gets a blocking
    // thread of its own. The UI only hears from it over the channel.
    tokio::task::spawn_blocking(move || {
        let (ok, message) = match deploy::run(&cfg, &tools, &events_tx) {
            Ok(()) => (true, "✅ 모든 작업이 성공적으로 완료되었습니다!".to_string()),
            Err(e) => {
                tracing::error!("deployment failed: {e:#}");
                (false, format!("❌ 에러 발생: {e:#}"))
            }
        };
        let _ = events_tx.send(DeployEvent::Finished { ok, message });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::state::FIELD_REPO_URL;
    use std::path::PathBuf;

    fn fixture() -> (AppState, Tools, mpsc::UnboundedSender<DeployEvent>) {
        let (tx, _rx) = mpsc::unbounded_channel();
        (
            AppState::new(&Config::default()),
            Tools {
                hugo: PathBuf::from("hugo"),
                git: PathBuf::from("git"),
            },
            tx,
        )
    }

    #[test]
    fn test_invalid_url_warns_without_starting() {
        let (mut state, tools, tx) = fixture();
        state.inputs[FIELD_REPO_URL] = "https://example.com/u/r.git".to_string();

        start_run(&mut state, &tools, &tx);

        assert_eq!(state.run_state, RunState::Idle);
        assert!(state.warning.is_some());
    }

    #[test]
    fn test_keys_ignored_while_running() {
        let (mut state, tools, tx) = fixture();
        state.run_state = RunState::Running;
        let before = state.inputs.clone();

        let key = KeyEvent::from(KeyCode::Char('x'));
        assert!(handle_key(&mut state, key, &tools, &tx));
        let enter = KeyEvent::from(KeyCode::Enter);
        assert!(handle_key(&mut state, enter, &tools, &tx));

        assert_eq!(state.inputs, before);
        assert_eq!(state.run_state, RunState::Running);
    }

    #[test]
    fn test_any_key_dismisses_outcome() {
        let (mut state, tools, tx) = fixture();
        state.run_state = RunState::Failed("boom".to_string());

        let key = KeyEvent::from(KeyCode::Char('x'));
        assert!(handle_key(&mut state, key, &tools, &tx));
        assert_eq!(state.run_state, RunState::Idle);
    }

    #[test]
    fn test_finished_event_updates_run_state() {
        let (mut state, _tools, _tx) = fixture();
        state.run_state = RunState::Running;

        apply_event(
            &mut state,
            DeployEvent::Progress("1. Hugo 사이트 초기화 중...".to_string()),
        );
        assert_eq!(state.logs.len(), 1);

        apply_event(
            &mut state,
            DeployEvent::Finished {
                ok: true,
                message: "done".to_string(),
            },
        );
        assert_eq!(state.run_state, RunState::Succeeded("done".to_string()));
    }
}
