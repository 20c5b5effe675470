use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;

use crude_server::config::{ConcurrencyMode, Config};

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn test_config_defaults() {
    let cfg = Config::load_with(env(&[])).unwrap();

    assert_eq!(cfg.server.host, "127.0.0.1");
    assert_eq!(cfg.server.port, 8888);
    assert_eq!(cfg.server.backlog, 5);
    assert_eq!(cfg.server.read_buffer_size, 1024);
    assert_eq!(cfg.server.concurrency, ConcurrencyMode::Sequential);
    assert_eq!(cfg.static_files.root, PathBuf::from("."));
    assert_eq!(cfg.static_files.index, "index.html");
    assert_eq!(cfg.server.listen_addr(), "127.0.0.1:8888");
}

#[test]
fn test_config_env_overrides() {
    let cfg = Config::load_with(env(&[
        ("CRUDE_HOST", "0.0.0.0"),
        ("CRUDE_PORT", "3000"),
        ("CRUDE_ROOT", "/srv/www"),
    ]))
    .unwrap();

    assert_eq!(cfg.server.listen_addr(), "0.0.0.0:3000");
    assert_eq!(cfg.static_files.root, PathBuf::from("/srv/www"));
}

#[test]
fn test_config_invalid_port() {
    let err = Config::load_with(env(&[("CRUDE_PORT", "eighty")])).unwrap_err();

    assert!(err.to_string().contains("CRUDE_PORT"));
}

#[test]
fn test_config_from_yaml_partial() {
    let cfg = Config::from_yaml(
        "server:\n  port: 9000\n  concurrency: per_connection\nstatic_files:\n  index: home.html\n",
    )
    .unwrap();

    assert_eq!(cfg.server.port, 9000);
    assert_eq!(cfg.server.host, "127.0.0.1");
    assert_eq!(cfg.server.concurrency, ConcurrencyMode::PerConnection);
    assert_eq!(cfg.static_files.index, "home.html");
    assert_eq!(cfg.static_files.root, PathBuf::from("."));
}

#[test]
fn test_config_from_empty_yaml() {
    let cfg = Config::from_yaml("").unwrap();

    assert_eq!(cfg.server.port, 8888);
}

#[test]
fn test_config_from_yaml_rejects_bad_values() {
    assert!(Config::from_yaml("server:\n  port: not-a-port\n").is_err());
    assert!(Config::from_yaml("server:\n  concurrency: threaded\n").is_err());
}

#[test]
fn test_config_file_then_env() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "server:\n  host: localhost\n  port: 7000\n  backlog: 16").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let cfg = Config::load_with(env(&[("CRUDE_CONFIG", path.as_str()), ("CRUDE_PORT", "7001")])).unwrap();

    assert_eq!(cfg.server.host, "localhost");
    assert_eq!(cfg.server.port, 7001);
    assert_eq!(cfg.server.backlog, 16);
}

#[test]
fn test_config_missing_file() {
    let result = Config::load_with(env(&[("CRUDE_CONFIG", "/definitely/not/here.yaml")]));

    assert!(result.is_err());
}

#[test]
fn test_config_clone() {
    let cfg1 = Config::default();
    let cfg2 = cfg1.clone();
    assert_eq!(cfg1.server.listen_addr(), cfg2.server.listen_addr());
}
