use std::{collections::HashMap, fs, path::Path};

use anyhow::Context;
use tracing::warn;
use url::Url;

use crate::error::LoadError;

pub const SETTINGS_FILE: &str = "directory.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub users_path: String,
    pub posts_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "https://jsonplaceholder.typicode.com".into(),
            users_path: "users".into(),
            posts_path: "posts".into(),
        }
    }
}

impl Settings {
    pub fn users_url(&self) -> Result<Url, LoadError> {
        join_endpoint("users", &self.api_base_url, &self.users_path)
    }

    pub fn posts_url(&self) -> Result<Url, LoadError> {
        join_endpoint("posts", &self.api_base_url, &self.posts_path)
    }
}

fn join_endpoint(resource: &'static str, base: &str, path: &str) -> Result<Url, LoadError> {
    let invalid = |source| LoadError::InvalidEndpoint {
        resource,
        base: base.to_string(),
        path: path.to_string(),
        source,
    };
    // Without the trailing slash `Url::join` would replace the last segment.
    let base_url = Url::parse(&format!("{}/", base.trim_end_matches('/'))).map_err(invalid)?;
    base_url.join(path.trim_start_matches('/')).map_err(invalid)
}

/// Defaults, then `directory.toml` in the working directory, then env.
pub fn load_settings() -> Settings {
    let file_raw = match read_settings_file(Path::new(SETTINGS_FILE)) {
        Ok(raw) => raw,
        Err(err) => {
            warn!(error = %err, "ignoring unreadable settings file");
            None
        }
    };
    layered_settings(file_raw.as_deref(), |key| std::env::var(key).ok())
}

fn layered_settings(file_raw: Option<&str>, var: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();
    if let Some(raw) = file_raw {
        apply_file_overrides(&mut settings, raw);
    }
    apply_env_overrides(&mut settings, var);
    settings
}

fn read_settings_file(path: &Path) -> anyhow::Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
    Ok(Some(raw))
}

fn apply_file_overrides(settings: &mut Settings, raw: &str) {
    let file_cfg = match toml::from_str::<HashMap<String, String>>(raw) {
        Ok(file_cfg) => file_cfg,
        Err(err) => {
            warn!(error = %err, "ignoring malformed settings file");
            return;
        }
    };

    if let Some(v) = file_cfg.get("api_base_url") {
        settings.api_base_url = v.clone();
    }
    if let Some(v) = file_cfg.get("users_path") {
        settings.users_path = v.clone();
    }
    if let Some(v) = file_cfg.get("posts_path") {
        settings.posts_path = v.clone();
    }
}

fn apply_env_overrides(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("DIRECTORY_API_BASE_URL") {
        settings.api_base_url = v;
    }
    if let Some(v) = var("APP__API_BASE_URL") {
        settings.api_base_url = v;
    }
    if let Some(v) = var("APP__USERS_PATH") {
        settings.users_path = v;
    }
    if let Some(v) = var("APP__POSTS_PATH") {
        settings.posts_path = v;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
