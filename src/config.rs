use serde::{Deserialize, Serialize};
use tracing::warn;

/// One game server to watch. Loaded once at startup, immutable afterwards.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Target {
    pub name: String,
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub listen_port: u16,
    pub targets: Vec<Target>,
}

fn default_listen_port() -> u16 { 3000 }

fn default_targets() -> Vec<Target> {
    let host = "quake.pklan.net";
    vec![
        Target { name: "FFA".into(), host: host.into(), port: 27960 },
        Target { name: "CTF".into(), host: host.into(), port: 27961 },
        Target { name: "Q3TA".into(), host: host.into(), port: 27962 },
    ]
}

impl AppConfig {
    /// Reads `PORT` and `SERVERS_JSON` from the environment. Bad values are
    /// never fatal: they are logged and replaced by the defaults.
    pub fn from_env() -> Self {
        let listen_port = match std::env::var("PORT") {
            Ok(raw) => parse_listen_port(&raw),
            Err(_) => default_listen_port(),
        };
        let targets = match std::env::var("SERVERS_JSON") {
            Ok(raw) => parse_targets(&raw),
            Err(_) => default_targets(),
        };
        Self { listen_port, targets }
    }
}

fn parse_listen_port(raw: &str) -> u16 {
    match raw.parse() {
        Ok(port) => port,
        Err(_) => {
            warn!("Invalid PORT {:?} provided. Falling back to {}.", raw, default_listen_port());
            default_listen_port()
        }
    }
}

fn parse_targets(raw: &str) -> Vec<Target> {
    match serde_json::from_str::<Vec<Target>>(raw) {
        Ok(targets) => targets,
        Err(e) => {
            warn!("Invalid SERVERS_JSON provided. Falling back to defaults. {}", e);
            default_targets()
        }
    }
}
