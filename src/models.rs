use serde::{Deserialize, Serialize};

use crate::config::Target;
use crate::protocol::ServerStatus;

/// Outcome of probing one target. Either a complete online record or a
/// complete offline record with an error description, never a mix; the
/// constructors below are the only way these get built.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResult {
    pub name: String,
    pub host: String,
    pub port: u16,
    pub online: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub players: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_players: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motd: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StatusResult {
    pub fn online(target: &Target, status: &ServerStatus) -> Self {
        Self {
            name: target.name.clone(),
            host: target.host.clone(),
            port: target.port,
            online: true,
            hostname: Some(
                status
                    .hostname
                    .clone()
                    .unwrap_or_else(|| target.name.clone()),
            ),
            map: Some(status.map.clone()),
            players: Some(status.players.len() as u32),
            max_players: Some(status.max_players),
            motd: Some(status.rules.get("g_motd").cloned().unwrap_or_default()),
            error: None,
        }
    }

    pub fn offline(target: &Target, error: impl Into<String>) -> Self {
        Self {
            name: target.name.clone(),
            host: target.host.clone(),
            port: target.port,
            online: false,
            hostname: None,
            map: None,
            players: None,
            max_players: None,
            motd: None,
            error: Some(error.into()),
        }
    }
}
