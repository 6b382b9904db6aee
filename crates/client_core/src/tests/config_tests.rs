use std::{
    env,
    time::{SystemTime, UNIX_EPOCH},
};

use super::*;

#[test]
fn default_settings_point_at_fixed_endpoints() {
    let settings = Settings::default();
    assert_eq!(
        settings.users_url().expect("users url").as_str(),
        "https://jsonplaceholder.typicode.com/users"
    );
    assert_eq!(
        settings.posts_url().expect("posts url").as_str(),
        "https://jsonplaceholder.typicode.com/posts"
    );
}

#[test]
fn base_url_with_path_prefix_keeps_prefix() {
    let settings = Settings {
        api_base_url: "http://127.0.0.1:8080/api/v1/".into(),
        users_path: "/people".into(),
        ..Settings::default()
    };
    assert_eq!(
        settings.users_url().expect("users url").as_str(),
        "http://127.0.0.1:8080/api/v1/people"
    );
}

#[test]
fn unparseable_base_url_is_reported_per_resource() {
    let settings = Settings {
        api_base_url: "not a url".into(),
        ..Settings::default()
    };
    let err = settings.posts_url().expect_err("invalid base");
    assert!(matches!(err, LoadError::InvalidEndpoint { .. }));
    assert_eq!(err.resource(), "posts");
}

#[test]
fn file_overrides_known_keys_only() {
    let mut settings = Settings::default();
    apply_file_overrides(
        &mut settings,
        "api_base_url = \"http://localhost:3000\"\nunrelated = \"x\"\n",
    );
    assert_eq!(settings.api_base_url, "http://localhost:3000");
    assert_eq!(settings.users_path, "users");
}

#[test]
fn malformed_file_leaves_settings_untouched() {
    let mut settings = Settings::default();
    apply_file_overrides(&mut settings, "api_base_url = [");
    assert_eq!(settings, Settings::default());
}

#[test]
fn app_prefixed_env_wins_over_legacy_name() {
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings, |key| match key {
        "DIRECTORY_API_BASE_URL" => Some("http://legacy".into()),
        "APP__API_BASE_URL" => Some("http://preferred".into()),
        "APP__POSTS_PATH" => Some("articles".into()),
        _ => None,
    });
    assert_eq!(settings.api_base_url, "http://preferred");
    assert_eq!(settings.posts_path, "articles");
    assert_eq!(settings.users_path, "users");
}

#[test]
fn missing_settings_file_reads_as_none() {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("directory_missing_{suffix}.toml"));
    assert!(read_settings_file(&path).expect("read").is_none());
}

#[test]
fn env_overrides_file_which_overrides_defaults() {
    let file = "api_base_url = \"http://from-file\"\nusers_path = \"members\"\n";
    let settings = layered_settings(Some(file), |key| match key {
        "APP__API_BASE_URL" => Some("http://from-env".into()),
        _ => None,
    });

    assert_eq!(settings.api_base_url, "http://from-env");
    assert_eq!(settings.users_path, "members");
    assert_eq!(settings.posts_path, "posts");
}

#[test]
fn no_file_and_no_env_gives_defaults() {
    assert_eq!(layered_settings(None, |_| None), Settings::default());
}
