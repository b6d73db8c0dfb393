//! Shared test utilities: environment isolation for config lookups and a
//! preconfigured command for the CLI binary.

use std::path::Path;
use std::process::Command;
use std::sync::Mutex;
use tempfile::TempDir;

/// Serializes HOME / XDG_CONFIG_HOME mutation across tests in this binary.
static HOME_ENV_MUTEX: Mutex<()> = Mutex::new(());

struct EnvState {
    home: Option<String>,
    xdg_config_home: Option<String>,
}

impl EnvState {
    fn capture() -> Self {
        Self {
            home: std::env::var("HOME").ok(),
            xdg_config_home: std::env::var("XDG_CONFIG_HOME").ok(),
        }
    }

    fn restore(self) {
        match self.home {
            Some(orig) => std::env::set_var("HOME", orig),
            None => std::env::remove_var("HOME"),
        }
        match self.xdg_config_home {
            Some(orig) => std::env::set_var("XDG_CONFIG_HOME", orig),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
    }
}

/// Run `f` with HOME and XDG_CONFIG_HOME pointed into a fresh temp dir.
/// The closure receives the temp root; XDG_CONFIG_HOME is `<root>/config`.
pub fn with_isolated_home<F, R>(f: F) -> R
where
    F: FnOnce(&Path) -> R,
{
    let _guard = HOME_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("home");
    let config_home = temp.path().join("config");
    std::fs::create_dir_all(&home).unwrap();
    std::fs::create_dir_all(&config_home).unwrap();

    let original = EnvState::capture();
    std::env::set_var("HOME", &home);
    std::env::set_var("XDG_CONFIG_HOME", &config_home);

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| f(temp.path())));
    original.restore();
    match result {
        Ok(value) => value,
        Err(panic) => std::panic::resume_unwind(panic),
    }
}

/// `compgen --quiet --workspace <workspace>` with an isolated environment under `root`.
pub fn compgen_command(root: &Path, workspace: &Path) -> Command {
    let home = root.join("home");
    let config_home = root.join("config");
    let state_home = root.join("state");
    for dir in [&home, &config_home, &state_home, &workspace.to_path_buf()] {
        std::fs::create_dir_all(dir).unwrap();
    }
    let mut command = Command::new(env!("CARGO_BIN_EXE_compgen"));
    command
        .env("HOME", &home)
        .env("XDG_CONFIG_HOME", &config_home)
        .env("XDG_STATE_HOME", &state_home)
        .env_remove("COMPGEN_ENV")
        .env_remove("COMPGEN_LOG")
        .arg("--quiet")
        .arg("--workspace")
        .arg(workspace);
    command
}
