use std::fmt;

/// Deployment environment, selected from `NODE_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnv {
    Production,
    Staging,
    Test,
    #[default]
    Development,
}

impl AppEnv {
    /// Exact, case-sensitive match. Anything unrecognised (or unset) is development.
    pub fn from_node_env(value: Option<&str>) -> Self {
        match value {
            Some("production") => AppEnv::Production,
            Some("staging") => AppEnv::Staging,
            Some("test") => AppEnv::Test,
            _ => AppEnv::Development,
        }
    }

    pub fn env_file_name(self) -> &'static str {
        match self {
            AppEnv::Production => ".env.production",
            AppEnv::Staging => ".env.staging",
            AppEnv::Test => ".env.test",
            AppEnv::Development => ".env.development",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AppEnv::Production => "production",
            AppEnv::Staging => "staging",
            AppEnv::Test => "test",
            AppEnv::Development => "development",
        }
    }
}

impl fmt::Display for AppEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
