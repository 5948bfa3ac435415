use shared_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Environment variable that overrides `[nucleus] base_url`.
pub const BASE_URL_ENV: &str = "NUCLEUS_BASE_URL";

/// Read `config.toml` and the environment, and store the result in the
/// global `OnceLock`. Only the first call reads anything.
///
/// If the file is missing or unparseable, defaults are used.
pub fn load_config() {
    let config = app_config();
    eprintln!(
        "[config] Citation service base URL: {}",
        config.nucleus.base_url
    );
}

/// Get the loaded configuration, loading it on first access.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        let contents = match std::fs::read_to_string(CONFIG_PATH) {
            Ok(contents) => Some(contents),
            Err(e) => {
                eprintln!("[config] {CONFIG_PATH} not found ({e}), using defaults");
                None
            }
        };
        let override_url = std::env::var(BASE_URL_ENV).ok();
        parse_config(contents.as_deref(), override_url.as_deref())
    })
}

/// Build the effective configuration from the file contents (if any) and an
/// optional base URL override.
pub fn parse_config(contents: Option<&str>, override_url: Option<&str>) -> AppConfig {
    let file_config = match contents {
        Some(contents) => toml::from_str(contents).unwrap_or_else(|e| {
            eprintln!("[config] Failed to parse {CONFIG_PATH}: {e}; using defaults");
            AppConfig::default()
        }),
        None => AppConfig::default(),
    };
    file_config.with_base_url_override(override_url)
}
