use crate::config::Config;
use crate::deploy::DeployConfig;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::Instant;

pub const FIELD_TITLE: usize = 0;
pub const FIELD_SUBTITLE: usize = 1;
pub const FIELD_REPO_URL: usize = 2;
pub const FIELD_PATH: usize = 3;
pub const FIELD_COUNT: usize = 4;

pub const FIELD_LABELS: [&str; FIELD_COUNT] = [
    " 📝 Blog title ",
    " 💡 Subtitle ",
    " 🔗 GitHub repository URL ",
    " 📂 Local path ",
];

/// Per-run lifecycle: idle -> running -> (succeeded | failed) -> idle.
/// At most one run is in flight; input is ignored while `Running`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Succeeded(String),
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub inputs: [String; FIELD_COUNT],
    pub focus: usize,
    pub run_state: RunState,
    /// Validation warning shown in the banner; never starts a run.
    pub warning: Option<String>,
    pub logs: VecDeque<LogEntry>,
    pub log_scroll_offset: usize,
    pub started_at: Option<Instant>,
}

#[derive(Debug, Clone)]
pub struct LogEntry {
    pub time: String,
    pub level: String,
    pub message: String,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            inputs: [
                config.form.title.clone(),
                config.form.subtitle.clone(),
                config.form.repo_url.clone(),
                config.default_path(),
            ],
            focus: FIELD_TITLE,
            run_state: RunState::Idle,
            warning: None,
            logs: VecDeque::with_capacity(200),
            log_scroll_offset: 0,
            started_at: None,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % FIELD_COUNT;
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + FIELD_COUNT - 1) % FIELD_COUNT;
    }

    pub fn push_char(&mut self, c: char) {
        self.inputs[self.focus].push(c);
    }

    pub fn pop_char(&mut self) {
        self.inputs[self.focus].pop();
    }

    pub fn push_log(&mut self, level: &str, message: String) {
        let time = chrono::Local::now().format("%H:%M:%S").to_string();
        if self.logs.len() >= 200 {
            self.logs.pop_front();
        }
        self.logs.push_back(LogEntry {
            time,
            level: level.to_string(),
            message,
        });
    }

    /// Snapshot the form into the immutable record handed to the pipeline.
    pub fn deploy_config(&self) -> DeployConfig {
        DeployConfig {
            title: self.inputs[FIELD_TITLE].trim().to_string(),
            subtitle: self.inputs[FIELD_SUBTITLE].trim().to_string(),
            repo_url: self.inputs[FIELD_REPO_URL].trim().to_string(),
            path: PathBuf::from(self.inputs[FIELD_PATH].trim()),
        }
    }

    pub fn elapsed(&self) -> String {
        let secs = self
            .started_at
            .map(|t| t.elapsed().as_secs())
            .unwrap_or(0);
        format!("{}m {:02}s", secs / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(&Config::default())
    }

    #[test]
    fn test_focus_wraps_both_directions() {
        let mut s = state();
        assert_eq!(s.focus, FIELD_TITLE);
        s.focus_prev();
        assert_eq!(s.focus, FIELD_PATH);
        s.focus_next();
        assert_eq!(s.focus, FIELD_TITLE);
    }

    #[test]
    fn test_editing_targets_focused_field() {
        let mut s = state();
        s.inputs[FIELD_TITLE].clear();
        s.push_char('a');
        s.push_char('b');
        s.pop_char();
        assert_eq!(s.inputs[FIELD_TITLE], "a");

        s.focus = FIELD_REPO_URL;
        s.inputs[FIELD_REPO_URL].clear();
        s.push_char('x');
        assert_eq!(s.inputs[FIELD_REPO_URL], "x");
        assert_eq!(s.inputs[FIELD_TITLE], "a");
    }

    #[test]
    fn test_deploy_config_trims_whitespace() {
        let mut s = state();
        s.inputs[FIELD_TITLE] = "  T ".to_string();
        s.inputs[FIELD_REPO_URL] = " https://github.com/u/r.git ".to_string();
        let cfg = s.deploy_config();
        assert_eq!(cfg.title, "T");
        assert_eq!(cfg.repo_url, "https://github.com/u/r.git");
    }

    #[test]
    fn test_log_capacity_is_capped() {
        let mut s = state();
        for i in 0..250 {
            s.push_log("STEP", format!("line {i}"));
        }
        assert_eq!(s.logs.len(), 200);
        assert_eq!(s.logs.front().unwrap().message, "line 50");
    }
}
