//! Deployment pipeline: scaffold a Hugo blog and push it to GitHub.
//!
//! The ordered stages run on a background worker, each shelling out to `hugo`
//! or `git` or writing a rendered document. The pipeline knows nothing about
//! the UI; it emits [`DeployEvent`]s over a channel and reports its outcome
//! through the returned `Result`. The first failure aborts the rest of the
//! run with no cleanup or rollback.

pub mod templates;

use crate::exec::Cmd;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;

pub const THEME_REPO_URL: &str = "https://github.com/CaiJimmy/hugo-theme-stack.git";
pub const THEME_SUBMODULE_PATH: &str = "themes/hugo-theme-stack";
pub const COMMIT_MESSAGE: &str = "Initial commit: Hugo Stack Theme Optimized";

pub const HUGO_CONFIG_PATH: &str = "config/_default/hugo.toml";
pub const WELCOME_POST_PATH: &str = "content/post/welcome/index.md";
pub const WORKFLOW_PATH: &str = ".github/workflows/hugo.yml";

/// One run's worth of operator input. Built once from the form, immutable
/// afterwards, discarded when the run finishes.
#[derive(Debug, Clone)]
pub struct DeployConfig {
    pub title: String,
    pub subtitle: String,
    pub repo_url: String,
    pub path: PathBuf,
}

/// Resolved paths of the external tools the pipeline invokes.
#[derive(Debug, Clone)]
pub struct Tools {
    pub hugo: PathBuf,
    pub git: PathBuf,
}

/// Worker-to-UI notifications. Single producer, single consumer.
#[derive(Debug, Clone)]
pub enum DeployEvent {
    /// Human-readable progress line, emitted before each stage.
    Progress(String),
    /// Terminal outcome; sent exactly once by the spawner after `run` returns.
    Finished { ok: bool, message: String },
}

/// Pre-flight check performed before the pipeline starts. A repository URL
/// without a recognizable GitHub host never reaches the worker.
pub fn validate(cfg: &DeployConfig) -> Result<()> {
    if !cfg.repo_url.contains("github.com") {
        anyhow::bail!("올바른 GitHub URL을 입력해주세요.");
    }
    Ok(())
}

/// Execute the full deployment against `cfg.path`. Every stage must succeed
/// for the run to succeed; on failure the target directory is left as-is,
/// possibly partially initialized.
pub fn run(
    cfg: &DeployConfig,
    tools: &Tools,
    events: &mpsc::UnboundedSender<DeployEvent>,
) -> Result<()> {
    let root = &cfg.path;

    progress(events, format!("🚀 작업을 시작합니다: {}", root.display()));
    if !root.exists() {
        fs::create_dir_all(root)
            .with_context(|| format!("failed to create target directory {}", root.display()))?;
    }

    progress(events, "1. Hugo 사이트 초기화 중...".to_string());
    Cmd::new(&tools.hugo)
        .args(["new", "site", ".", "--force"])
        .cwd(root)
        .run()?;

    progress(
        events,
        "2. Git 설정 및 테마 다운로드 중 (시간이 소요될 수 있습니다)...".to_string(),
    );
    Cmd::new(&tools.git).arg("init").cwd(root).run()?;
    Cmd::new(&tools.git)
        .args(["submodule", "add", THEME_REPO_URL, THEME_SUBMODULE_PATH])
        .cwd(root)
        .run()?;

    progress(events, "3. 한국어 최적화 설정 적용 중...".to_string());
    write_doc(
        root,
        HUGO_CONFIG_PATH,
        &templates::hugo_config(&cfg.title, &cfg.subtitle, &cfg.repo_url),
    )?;

    progress(events, "4. 환영 인사 포스트 생성 중...".to_string());
    write_doc(
        root,
        WELCOME_POST_PATH,
        &templates::welcome_post(&cfg.title, &cfg.subtitle),
    )?;

    progress(events, "5. 자동 배포 기능(GitHub Actions) 설정 중...".to_string());
    write_doc(root, WORKFLOW_PATH, templates::workflow())?;

    progress(events, "6. GitHub에 업로드 및 배포 중...".to_string());
    Cmd::new(&tools.git).args(["add", "."]).cwd(root).run()?;
    Cmd::new(&tools.git)
        .args(["commit", "-m", COMMIT_MESSAGE])
        .cwd(root)
        .run()?;
    Cmd::new(&tools.git).args(["branch", "-M", "main"]).cwd(root).run()?;
    Cmd::new(&tools.git)
        .args(["remote", "add", "origin", &cfg.repo_url])
        .cwd(root)
        .run()?;
    Cmd::new(&tools.git)
        .args(["push", "-u", "origin", "main", "--force"])
        .cwd(root)
        .run()?;

    Ok(())
}

/// Write a rendered document at a path relative to the site root, creating
/// parent directories as needed. Overwrites any previous content.
fn write_doc(root: &Path, relative: &str, content: &str) -> Result<()> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    fs::write(&path, content).with_context(|| format!("failed to write {}", path.display()))
}

fn progress(events: &mpsc::UnboundedSender<DeployEvent>, message: String) {
    tracing::info!(%message, "pipeline progress");
    // Receiver gone means the UI quit; the run still finishes on its own.
    let _ = events.send(DeployEvent::Progress(message));
}
