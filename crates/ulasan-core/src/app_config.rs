use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Directory scanned for `*.txt` comment files.
    pub data_dir: PathBuf,
    /// Optional lexicon YAML override. `None` means the built-in lexicons.
    pub lexicons_path: Option<PathBuf>,
    pub bind_addr: SocketAddr,
    /// Maximum number of search results rendered by presentation layers.
    pub display_limit: usize,
}
