use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8086,
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for a TCP listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Translation engine configuration
#[derive(Debug, Clone)]
pub struct I18nConfig {
    /// Directory with `<code>.json` tables; bundled tables are used when unset
    pub locales_dir: Option<PathBuf>,
    /// JSON file backing the key-value store for the locale preference
    pub preferences_path: PathBuf,
    /// Whether locale changes are persisted at all
    pub persist_locale: bool,
    /// Maximum number of resolved translations kept in the cache
    pub cache_max_entries: usize,
    /// Explicit locale hint; the OS locale is consulted when unset
    pub locale_hint: Option<String>,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            locales_dir: None,
            preferences_path: PathBuf::from("./storage/preferences.json"),
            persist_locale: true,
            cache_max_entries: 10_000,
            locale_hint: None,
        }
    }
}

/// Global application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,
    /// Translation engine configuration
    pub i18n: I18nConfig,
}

fn parse_var<T: FromStr>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid value {:?} for {}", raw, name);
            default
        }),
        Err(_) => default,
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

impl AppConfig {
    /// Loads configuration from `FEEDFIND_*` environment variables, falling
    /// back to the defaults for anything unset or unparsable
    pub fn from_env() -> Self {
        let defaults = AppConfig::default();

        Self {
            server: ServerConfig {
                host: non_empty_var("FEEDFIND_HOST").unwrap_or(defaults.server.host),
                port: parse_var("FEEDFIND_PORT", defaults.server.port),
            },
            i18n: I18nConfig {
                locales_dir: non_empty_var("FEEDFIND_LOCALES_DIR").map(PathBuf::from),
                preferences_path: non_empty_var("FEEDFIND_PREFERENCES_PATH")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.i18n.preferences_path),
                persist_locale: parse_var("FEEDFIND_PERSIST_LOCALE", defaults.i18n.persist_locale),
                cache_max_entries: parse_var("FEEDFIND_CACHE_MAX_ENTRIES", defaults.i18n.cache_max_entries),
                locale_hint: non_empty_var("FEEDFIND_LOCALE"),
            },
        }
    }
}
