use std::collections::HashMap;

use super::*;

fn from_vars(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let vars: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    ServerConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = from_vars(&[]).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.port, 3000);
    assert_eq!(cfg.history_limit, 50);
    assert_eq!(cfg.default_thread, "mental_health_session");
    assert_eq!(cfg.summary_turns, 6);
    assert_eq!(cfg.max_threads, 1000);
}

#[test]
fn parses_overrides() {
    let cfg = from_vars(&[
        ("PORT", "8080"),
        ("CHAT_HISTORY_LIMIT", "10"),
        ("CHAT_DEFAULT_THREAD", " evening "),
        ("CHAT_SUMMARY_TURNS", "2"),
        ("CHAT_MAX_THREADS", "25"),
    ])
    .unwrap();
    assert_eq!(
        cfg,
        ServerConfig {
            port: 8080,
            history_limit: 10,
            default_thread: "evening".into(),
            summary_turns: 2,
            max_threads: 25,
        }
    );
}

#[test]
fn rejects_bad_port() {
    assert_eq!(
        from_vars(&[("PORT", "eighty")]),
        Err(ConfigError::Parse { key: "PORT", value: "eighty".into() })
    );
    assert!(from_vars(&[("PORT", "70000")]).is_err());
}

#[test]
fn rejects_zero_limits() {
    assert_eq!(
        from_vars(&[("CHAT_HISTORY_LIMIT", "0")]),
        Err(ConfigError::Zero { key: "CHAT_HISTORY_LIMIT" })
    );
    assert_eq!(
        from_vars(&[("CHAT_SUMMARY_TURNS", "0")]),
        Err(ConfigError::Zero { key: "CHAT_SUMMARY_TURNS" })
    );
    assert_eq!(
        from_vars(&[("CHAT_MAX_THREADS", "0")]),
        Err(ConfigError::Zero { key: "CHAT_MAX_THREADS" })
    );
}

#[test]
fn unparseable_values_fall_back_to_defaults() {
    let cfg = from_vars(&[("CHAT_SUMMARY_TURNS", "lots"), ("CHAT_DEFAULT_THREAD", "   ")]).unwrap();
    assert_eq!(cfg.summary_turns, DEFAULT_SUMMARY_TURNS);
    assert_eq!(cfg.default_thread, DEFAULT_THREAD_ID);
}

#[test]
fn error_messages_name_the_variable() {
    assert_eq!(ConfigError::Zero { key: "CHAT_SUMMARY_TURNS" }.to_string(), "CHAT_SUMMARY_TURNS must be greater than zero");
}
