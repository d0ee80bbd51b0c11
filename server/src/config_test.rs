use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.addr, SocketAddr::new(DEFAULT_BIND_ADDR, DEFAULT_PORT));
}

#[test]
fn parses_port_and_bind_addr_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "8080"), ("BIND_ADDR", "127.0.0.1")])).unwrap();
    assert_eq!(cfg.addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("BIND_ADDR", "")])).unwrap();
    assert_eq!(cfg.addr.port(), DEFAULT_PORT);
    assert_eq!(cfg.addr.ip(), DEFAULT_BIND_ADDR);
}

#[test]
fn accepts_ipv6_bind_addr() {
    let cfg = ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "::1")])).unwrap();
    assert!(cfg.addr.is_ipv6());
}

#[test]
fn rejects_non_numeric_port() {
    assert_eq!(parse_port(Some("http")), Err(ConfigError::Port("http".to_owned())));
}

#[test]
fn rejects_zero_and_out_of_range_port() {
    assert_eq!(parse_port(Some("0")), Err(ConfigError::Port("0".to_owned())));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::Port("70000".to_owned())));
}

#[test]
fn rejects_bad_bind_addr() {
    let err = ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost")])).unwrap_err();
    assert_eq!(err, ConfigError::BindAddr("localhost".to_owned()));
    assert!(err.to_string().contains("BIND_ADDR"));
}
