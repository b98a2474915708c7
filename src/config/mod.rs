use std::path::Path;
use std::time::Duration;

use crate::domain::{default_sources, SourceDescriptor};
use crate::errors::{TrendingError, TrendingResult};

pub const DEFAULT_USER_AGENT: &str = "trending-bot/0.1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub user_agent: String,
    pub timeout: Duration,
    pub sources: Vec<SourceDescriptor>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            sources: default_sources(),
        }
    }
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> TrendingResult<Self> {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        let user_agent = std::env::var("TRENDING_USER_AGENT")
            .ok()
            .filter(|ua| !ua.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        let timeout = match std::env::var("TRENDING_TIMEOUT_SECS") {
            Ok(value) => Self::parse_timeout(&value)?,
            Err(_) => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let sources = match std::env::var("TRENDING_SOURCES_FILE") {
            Ok(path) => Self::load_sources(Path::new(&path))?,
            Err(_) => default_sources(),
        };

        Ok(Self {
            user_agent,
            timeout,
            sources,
        })
    }

    fn parse_timeout(value: &str) -> TrendingResult<Duration> {
        let secs: u64 = value.trim().parse().map_err(|_| {
            TrendingError::Config(format!("TRENDING_TIMEOUT_SECS is not a number: {}", value))
        })?;

        if secs == 0 {
            return Err(TrendingError::Config(
                "TRENDING_TIMEOUT_SECS must be at least 1".to_string(),
            ));
        }

        Ok(Duration::from_secs(secs))
    }

    /// Read a JSON array of source descriptors
    pub fn load_sources(path: &Path) -> TrendingResult<Vec<SourceDescriptor>> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TrendingError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::parse_sources(&content)
    }

    pub fn parse_sources(content: &str) -> TrendingResult<Vec<SourceDescriptor>> {
        let sources: Vec<SourceDescriptor> = serde_json::from_str(content)
            .map_err(|e| TrendingError::Config(format!("invalid sources file: {}", e)))?;

        if sources.is_empty() {
            return Err(TrendingError::Config("sources file lists no sources".to_string()));
        }

        for source in &sources {
            source.validate()?;
        }

        Ok(sources)
    }
}
