use std::time::Duration;

use redfish_power::config::{ClientConfig, ConfigError, Credentials};

const ENDPOINT: &str = "https://10.0.0.12";

const ALL_VARS: [&str; 6] = [
    "REDFISH_ENDPOINT",
    "REDFISH_USERNAME",
    "REDFISH_PASSWORD",
    "REDFISH_INSECURE",
    "REDFISH_TIMEOUT_SECS",
    "REDFISH_FETCH_WORKERS",
];

fn with_env<R>(vars: &[(&str, &str)], f: impl FnOnce() -> R) -> R {
    let mut env: Vec<(&str, Option<&str>)> = ALL_VARS.iter().map(|k| (*k, None)).collect();
    for &(key, value) in vars {
        env.retain(|(k, _)| *k != key);
        env.push((key, Some(value)));
    }
    temp_env::with_vars(env, f)
}

#[test]
fn test_defaults() {
    let config = with_env(&[("REDFISH_ENDPOINT", ENDPOINT)], ClientConfig::from_env).unwrap();
    assert_eq!(config, ClientConfig::new(ENDPOINT));
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.fetch_workers, 1);
    assert!(!config.insecure);
    assert!(config.credentials.is_none());
}

#[test]
fn test_full_config() {
    let config = with_env(
        &[
            ("REDFISH_ENDPOINT", ENDPOINT),
            ("REDFISH_USERNAME", "admin"),
            ("REDFISH_PASSWORD", "secret"),
            ("REDFISH_INSECURE", "true"),
            ("REDFISH_TIMEOUT_SECS", "5"),
            ("REDFISH_FETCH_WORKERS", "8"),
        ],
        ClientConfig::from_env,
    )
    .unwrap();

    assert_eq!(
        config.credentials,
        Some(Credentials {
            username: "admin".into(),
            password: "secret".into(),
        })
    );
    assert!(config.insecure);
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(config.fetch_workers, 8);
}

#[test]
fn test_missing_endpoint() {
    assert_eq!(
        with_env(&[], ClientConfig::from_env),
        Err(ConfigError::Missing("REDFISH_ENDPOINT"))
    );
    assert_eq!(
        with_env(&[("REDFISH_ENDPOINT", "")], ClientConfig::from_env),
        Err(ConfigError::Missing("REDFISH_ENDPOINT"))
    );
}

#[test]
fn test_bad_values() {
    let res = with_env(
        &[("REDFISH_ENDPOINT", ENDPOINT), ("REDFISH_TIMEOUT_SECS", "soon")],
        ClientConfig::from_env,
    );
    assert_eq!(
        res,
        Err(ConfigError::Invalid {
            var: "REDFISH_TIMEOUT_SECS",
            value: "soon".into()
        })
    );

    let res = with_env(
        &[("REDFISH_ENDPOINT", ENDPOINT), ("REDFISH_INSECURE", "sometimes")],
        ClientConfig::from_env,
    );
    assert!(matches!(res, Err(ConfigError::Invalid { var: "REDFISH_INSECURE", .. })));
}

#[test]
fn test_zero_workers_means_one() {
    let config = with_env(
        &[("REDFISH_ENDPOINT", ENDPOINT), ("REDFISH_FETCH_WORKERS", "0")],
        ClientConfig::from_env,
    )
    .unwrap();
    assert_eq!(config.fetch_workers, 1);
}
