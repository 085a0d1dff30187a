use config::{Config, ConfigError, Environment, Map};
use serde::Deserialize;

pub const DEFAULT_NAME: &str = "world";

/// The only variable consulted. Matched case-sensitively.
pub const NAME_VAR: &str = "NAME";

/// Settings read once at startup and passed down by reference.
///
/// `name` comes from the `NAME` environment variable. The default only
/// applies when the variable is absent; a set-but-empty value is kept.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub name: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        // Only NAME is read; the rest of the environment may hold non-UTF-8 data.
        let mut vars = Map::new();
        if let Some(value) = std::env::var_os(NAME_VAR) {
            vars.insert(NAME_VAR.to_string(), value.to_string_lossy().into_owned());
        }

        Self::from_env_map(vars)
    }

    /// Same as [`AppConfig::load`], but reads `vars` instead of the process environment.
    /// Every key other than `NAME` is dropped before it reaches the config source.
    pub fn from_env_map(vars: Map<String, String>) -> Result<Self, ConfigError> {
        let vars: Map<String, String> = vars
            .into_iter()
            .filter(|(key, _)| key == NAME_VAR)
            .collect();

        Self::build(Environment::default().source(Some(vars)))
    }

    fn build(env: Environment) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("name", DEFAULT_NAME)?
            .add_source(env)
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        tracing::debug!("Loaded configuration: {:?}", app_config);

        Ok(app_config)
    }
}
