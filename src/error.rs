use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load env file {}: {}", .path.display(), .source)]
    EnvFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
