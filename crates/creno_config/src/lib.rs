// --- File: crates/creno_config/src/lib.rs ---
use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;

pub mod models;
pub use models::*;

/// Loads the application configuration.
///
/// Sources, later layers overriding earlier ones:
/// 1. `config/default` (any format the `config` crate understands)
/// 2. `config/{RUN_ENV}` (defaults to `debug`)
/// 3. Environment variables prefixed `CRENO`, `__`-separated
///    (e.g. `CRENO__BACKEND__BASE_URL`)
///
/// Both file layers are optional so a bare environment still boots with the
/// built-in defaults.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());

    let builder = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{}", run_env)).required(false))
        .add_source(Environment::with_prefix("CRENO").separator("__"));

    builder.build()?.try_deserialize()
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// The file path can be overridden with `DOTENV_OVERRIDE`; otherwise `.env`
/// in the working directory is used. Loading happens at most once per process.
pub fn ensure_dotenv_loaded() {
    let dotenv_path = env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });
}
