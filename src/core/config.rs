use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DatabaseConfig {
    pub name: String,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub storage_path: String,
    pub db_path: String,
    pub default_user_id: Option<String>,
    pub databases: Vec<DatabaseConfig>,
    pub gcal_client_id: String,
    pub gcal_client_secret: String,
    pub gcal_redirect_uri: String,
    pub gcal_calendar_id: String,
    pub google_api_url: String,
    pub google_oauth_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let storage_path = env::var("LABBOOK_STORAGE_PATH").unwrap_or("./".to_string());
        let db_path = env::var("LABBOOK_DB_PATH")
            .unwrap_or_else(|_| format!("{}/labbook.sqlite3", storage_path));
        let default_user_id = env::var("LABBOOK_DEFAULT_USER_ID").ok();
        // Comma separated, first one wins when no database is requested
        let databases = env::var("LABBOOK_DATABASES")
            .map(|names| {
                names
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(|name| DatabaseConfig {
                        name: name.to_string(),
                    })
                    .collect()
            })
            .unwrap_or_default();
        let gcal_client_id = env::var("LABBOOK_GCAL_CLIENT_ID").unwrap_or_default();
        let gcal_client_secret = env::var("LABBOOK_GCAL_CLIENT_SECRET").unwrap_or_default();
        let gcal_redirect_uri = env::var("LABBOOK_GCAL_REDIRECT_URI")
            .unwrap_or_else(|_| "urn:ietf:wg:oauth:2.0:oob".to_string());
        let gcal_calendar_id =
            env::var("LABBOOK_GCAL_CALENDAR_ID").unwrap_or_else(|_| "primary".to_string());
        let google_api_url = env::var("LABBOOK_GOOGLE_API_URL")
            .unwrap_or_else(|_| "https://www.googleapis.com".to_string());
        let google_oauth_url = env::var("LABBOOK_GOOGLE_OAUTH_URL")
            .unwrap_or_else(|_| "https://oauth2.googleapis.com".to_string());

        Self {
            storage_path,
            db_path,
            default_user_id,
            databases,
            gcal_client_id,
            gcal_client_secret,
            gcal_redirect_uri,
            gcal_calendar_id,
            google_api_url,
            google_oauth_url,
        }
    }
}

/// Settings shared by the whole group, kept next to the database.
#[derive(Debug, Default, Deserialize)]
struct RunControl {
    #[serde(default)]
    databases: Vec<DatabaseConfig>,
    default_user_id: Option<String>,
}

/// Per-user settings, usually just who "me" is.
#[derive(Debug, Default, Deserialize)]
struct UserConfig {
    default_user_id: Option<String>,
}

impl AppConfig {
    /// Environment defaults, then the run control file, then the user
    /// config. Later sources only fill in or override what they set.
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        let rc_path = Path::new(&config.storage_path).join("labbookrc.json");
        if let Some(rc) = read_json::<RunControl>(&rc_path)? {
            config.apply_run_control(rc);
        }

        if let Some(user_path) = user_config_path()
            && let Some(user) = read_json::<UserConfig>(&user_path)?
            && user.default_user_id.is_some()
        {
            config.default_user_id = user.default_user_id;
        }

        Ok(config)
    }

    fn apply_run_control(&mut self, rc: RunControl) {
        if !rc.databases.is_empty() {
            self.databases = rc.databases;
        }
        if rc.default_user_id.is_some() {
            self.default_user_id = rc.default_user_id;
        }
    }

    /// The database to write to: the one asked for, else the first
    /// configured one.
    pub fn resolve_database(&self, requested: Option<&str>) -> Result<String> {
        if let Some(name) = requested {
            return Ok(name.to_string());
        }
        self.databases
            .first()
            .map(|db| db.name.clone())
            .ok_or(anyhow!(
                "No database specified and none configured. Pass --database or add one to labbookrc.json"
            ))
    }
}

fn user_config_path() -> Option<PathBuf> {
    if let Ok(path) = env::var("LABBOOK_USER_CONFIG") {
        return Some(PathBuf::from(path));
    }
    env::var("HOME")
        .ok()
        .map(|home| Path::new(&home).join(".config/labbook/user.json"))
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let parsed = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(Some(parsed))
}
