use std::env;
use std::fmt;
use std::path::PathBuf;

/// Filesystem layout and logging defaults for a benchmark run.
///
/// Values come from the environment (a `.env` file is honored) with sensible
/// defaults; command-line flags may override individual paths afterwards.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub rubric_path: PathBuf,
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let rubric_path = env_path("BGATE_RUBRIC", "rubric/bgate_rubric.json")?;
        let data_dir = env_path("BGATE_DATA_DIR", "data")?;
        let output_dir = env_path("BGATE_OUTPUT_DIR", "outputs")?;
        let log_level = env::var("BGATE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            rubric_path,
            data_dir,
            output_dir,
            telemetry: TelemetryConfig { log_level },
        })
    }

    pub fn scenarios_path(&self) -> PathBuf {
        self.data_dir.join("scenarios.csv")
    }

    pub fn scores_dir(&self) -> PathBuf {
        self.output_dir.join("scores")
    }

    pub fn scores_path(&self) -> PathBuf {
        self.scores_dir().join("bgate_scores.csv")
    }

    pub fn reports_dir(&self) -> PathBuf {
        self.output_dir.join("reports")
    }
}

fn env_path(name: &'static str, default: &str) -> Result<PathBuf, ConfigError> {
    match env::var(name) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::EmptyVar { name }),
        Ok(value) => Ok(PathBuf::from(value)),
        Err(_) => Ok(PathBuf::from(default)),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyVar { name: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyVar { name } => {
                write!(f, "{name} is set but empty; unset it or provide a path")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("BGATE_RUBRIC");
        env::remove_var("BGATE_DATA_DIR");
        env::remove_var("BGATE_OUTPUT_DIR");
        env::remove_var("BGATE_LOG_LEVEL");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.rubric_path, PathBuf::from("rubric/bgate_rubric.json"));
        assert_eq!(config.scenarios_path(), PathBuf::from("data/scenarios.csv"));
        assert_eq!(
            config.scores_path(),
            PathBuf::from("outputs/scores/bgate_scores.csv")
        );
        assert_eq!(config.reports_dir(), PathBuf::from("outputs/reports"));
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn env_overrides_take_effect() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("BGATE_DATA_DIR", "bench/data");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.scenarios_path(), PathBuf::from("bench/data/scenarios.csv"));
        reset_env();
    }

    #[test]
    fn empty_override_is_rejected() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("BGATE_RUBRIC", "  ");
        let err = AppConfig::load().expect_err("blank override rejected");
        assert!(err.to_string().contains("BGATE_RUBRIC"));
        reset_env();
    }
}
