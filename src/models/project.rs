use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The only backend the platform is configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DatabaseType {
    #[default]
    #[serde(rename = "postgres")]
    Postgres,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SslOptions {
    #[serde(rename = "rejectUnauthorized")]
    pub reject_unauthorized: bool,
}

/// Extra driver options passed straight to the database client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseExtra {
    pub ssl: SslOptions,
}

impl Default for DatabaseExtra {
    /// TLS certificate verification is off.
    fn default() -> Self {
        Self {
            ssl: SslOptions {
                reject_unauthorized: false,
            },
        }
    }
}

/// Project-level settings read by the commerce platform at boot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub redis_url: String,
    pub database_url: String,
    pub database_type: DatabaseType,
    /// Comma-separated origin list, passed through unvalidated.
    pub store_cors: String,
    pub admin_cors: String,
    pub database_extra: DatabaseExtra,
}

/// A plugin entry: either a bare package name or a name with options.
///
/// Serializes as `"name"` or `{ "resolve": "name", "options": { ... } }`.
/// Option keys keep their declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Plugin {
    Name(String),
    Configured {
        resolve: String,
        options: IndexMap<String, Value>,
    },
}

impl Plugin {
    pub fn name(resolve: impl Into<String>) -> Self {
        Plugin::Name(resolve.into())
    }

    pub fn with_options<K, V, I>(resolve: impl Into<String>, options: I) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        Plugin::Configured {
            resolve: resolve.into(),
            options: options
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Package identifier the platform resolves.
    pub fn resolve(&self) -> &str {
        match self {
            Plugin::Name(name) => name,
            Plugin::Configured { resolve, .. } => resolve,
        }
    }

    pub fn options(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Plugin::Name(_) => None,
            Plugin::Configured { options, .. } => Some(options),
        }
    }
}

/// Everything handed to the platform bootstrap, in the shape it expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedusaConfig {
    pub project_config: ProjectConfig,
    /// Load order matters.
    pub plugins: Vec<Plugin>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ProjectConfig {
        ProjectConfig {
            redis_url: "redis://cache:6379".to_string(),
            database_url: "postgresql://u:p@db/shop".to_string(),
            database_type: DatabaseType::Postgres,
            store_cors: "http://a.test, ,http://b.test".to_string(),
            admin_cors: String::new(),
            database_extra: DatabaseExtra::default(),
        }
    }

    #[test]
    fn project_config_serializes_platform_shape() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["database_type"], "postgres");
        assert_eq!(
            value["database_extra"],
            json!({ "ssl": { "rejectUnauthorized": false } })
        );
        assert_eq!(value["redis_url"], "redis://cache:6379");
    }

    #[test]
    fn bare_plugin_serializes_as_string() {
        let value = serde_json::to_value(Plugin::name("medusa-payment-manual")).unwrap();
        assert_eq!(value, json!("medusa-payment-manual"));
    }

    #[test]
    fn configured_plugin_serializes_resolve_and_options() {
        let plugin = Plugin::with_options("medusa-file-local", [("upload_dir", "uploads")]);
        let value = serde_json::to_value(&plugin).unwrap();
        assert_eq!(
            value,
            json!({ "resolve": "medusa-file-local", "options": { "upload_dir": "uploads" } })
        );
        assert_eq!(plugin.resolve(), "medusa-file-local");
    }

    #[test]
    fn plugin_options_keep_declaration_order() {
        let plugin = Plugin::with_options(
            "x",
            [("zeta", Value::from(1)), ("alpha", Value::from(2)), ("mid", Value::from(3))],
        );
        let keys: Vec<&str> = plugin.options().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn medusa_config_uses_camel_case_top_level_keys() {
        let cfg = MedusaConfig {
            project_config: sample(),
            plugins: vec![Plugin::name("a")],
        };
        let value = serde_json::to_value(&cfg).unwrap();
        assert!(value.get("projectConfig").is_some());
        assert_eq!(value["plugins"], json!(["a"]));
    }
}
