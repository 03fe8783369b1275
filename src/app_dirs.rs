use directories::ProjectDirs;
use std::path::PathBuf;

pub const APP_NAME: &str = "clatter";

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    fn project() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", APP_NAME)
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::project().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// `~/.local/state/clatter/clatter.log`, or the local data dir without `HOME`
    pub fn log_path() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            let state_dir = PathBuf::from(home)
                .join(".local")
                .join("state")
                .join(APP_NAME);
            Some(state_dir.join(format!("{APP_NAME}.log")))
        } else {
            Self::project().map(|dirs| dirs.data_local_dir().join(format!("{APP_NAME}.log")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_is_named_after_the_app() {
        if let Some(path) = AppDirs::log_path() {
            assert_eq!(path.file_name().unwrap(), "clatter.log");
        }
    }

    #[test]
    fn config_file_is_json() {
        if let Some(path) = AppDirs::config_path() {
            assert_eq!(path.file_name().unwrap(), "config.json");
        }
    }
}
