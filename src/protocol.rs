//! Quake 3 `getstatus` query client.
//!
//! One UDP datagram out, one back: the server answers `statusResponse` with
//! an info string of `\key\value` pairs followed by one line per connected
//! player. Exactly one attempt against exactly the given port.

use std::collections::HashMap;
use std::time::Duration;

use thiserror::Error;
use tokio::net::UdpSocket;
use tokio::time::timeout;

const GETSTATUS: &[u8] = b"\xff\xff\xff\xffgetstatus\n";
const RESPONSE_HEADER: &[u8] = b"\xff\xff\xff\xffstatusResponse\n";

// Q3 caps packets at 16 KiB; leave headroom for servers that don't.
const MAX_PACKET: usize = 0x10000;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("No response within {}ms", .0.as_millis())]
    TimedOut(Duration),
    #[error("Socket error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed response: {0}")]
    Malformed(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub name: String,
    pub score: i32,
    pub ping: i32,
}

/// Parsed `statusResponse`. `rules` keeps the full info string so callers
/// can pick at optional fields like `g_motd`.
#[derive(Debug, Clone)]
pub struct ServerStatus {
    pub hostname: Option<String>,
    pub map: String,
    pub max_players: u32,
    pub players: Vec<Player>,
    pub rules: HashMap<String, String>,
}

/// Queries `host:port` once, bounded by `deadline`.
pub async fn get_status(host: &str, port: u16, deadline: Duration) -> Result<ServerStatus, QueryError> {
    let socket = UdpSocket::bind("0.0.0.0:0").await?;
    socket.connect((host, port)).await?;
    socket.send(GETSTATUS).await?;

    let mut buf = vec![0u8; MAX_PACKET];
    let len = match timeout(deadline, socket.recv(&mut buf)).await {
        Ok(received) => received?,
        Err(_) => return Err(QueryError::TimedOut(deadline)),
    };

    parse_status(&buf[..len])
}

fn parse_status(packet: &[u8]) -> Result<ServerStatus, QueryError> {
    let body = packet
        .strip_prefix(RESPONSE_HEADER)
        .ok_or(QueryError::Malformed("missing statusResponse header"))?;
    let text = String::from_utf8_lossy(body);
    let mut lines = text.lines();

    let info = lines.next().ok_or(QueryError::Malformed("missing info string"))?;
    let rules = parse_info_string(info);

    let hostname = rules
        .get("sv_hostname")
        .map(|raw| strip_color_codes(raw))
        .filter(|name| !name.is_empty());
    let map = rules.get("mapname").cloned().unwrap_or_default();
    let max_players = rules
        .get("sv_maxclients")
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(0);
    let players = lines.filter_map(parse_player_line).collect();

    Ok(ServerStatus { hostname, map, max_players, players, rules })
}

/// `\key\value\key\value...`; a trailing key without a value is dropped.
fn parse_info_string(info: &str) -> HashMap<String, String> {
    let mut rules = HashMap::new();
    let mut parts = info.split('\\').skip(1);
    while let (Some(key), Some(value)) = (parts.next(), parts.next()) {
        rules.insert(key.to_string(), value.to_string());
    }
    rules
}

/// `<score> <ping> "<name>"`. Lines that don't fit are skipped, not errors.
fn parse_player_line(line: &str) -> Option<Player> {
    let mut parts = line.splitn(3, ' ');
    let score = parts.next()?.parse().ok()?;
    let ping = parts.next()?.parse().ok()?;
    let name = parts.next()?.trim().trim_matches('"');
    Some(Player { name: strip_color_codes(name), score, ping })
}

/// Drops `^N` color escapes from names and hostnames.
fn strip_color_codes(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c == '^' {
            chars.next();
        } else {
            cleaned.push(c);
        }
    }
    cleaned
}
