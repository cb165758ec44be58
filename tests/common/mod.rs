//! Localhost UDP responders standing in for real game servers.

use std::net::SocketAddr;

use arena_status::config::Target;
use tokio::net::UdpSocket;

pub const FULL_STATUS: &[u8] = b"\xff\xff\xff\xffstatusResponse\n\\sv_hostname\\Mock Arena\\mapname\\q3dm17\\sv_maxclients\\8\\g_motd\\Welcome home\n4 25 \"keel\"\n9 60 \"anarki\"\n";

pub const EMPTY_STATUS: &[u8] =
    b"\xff\xff\xff\xffstatusResponse\n\\sv_hostname\\Quiet Arena\\mapname\\dm6\\sv_maxclients\\16\n";

pub const GARBAGE: &[u8] = b"\xff\xff\xff\xffdisconnect\n";

/// Answers every `getstatus` with the given canned packet.
pub async fn spawn_responder(response: &'static [u8]) -> SocketAddr {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let addr = socket.local_addr().unwrap();
    tokio::spawn(async move {
        let mut buf = [0u8; 1024];
        loop {
            let Ok((n, peer)) = socket.recv_from(&mut buf).await else {
                break;
            };
            if buf[..n].starts_with(b"\xff\xff\xff\xffgetstatus") {
                let _ = socket.send_to(response, peer).await;
            }
        }
    });
    addr
}

/// Accepts queries and never answers, so probes run into their timeout.
pub async fn spawn_silent_responder() -> SocketAddr {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let addr = socket.local_addr().unwrap();
    tokio::spawn(async move {
        let mut buf = [0u8; 1024];
        while socket.recv_from(&mut buf).await.is_ok() {}
    });
    addr
}

pub fn target(name: &str, addr: SocketAddr) -> Target {
    Target {
        name: name.into(),
        host: addr.ip().to_string(),
        port: addr.port(),
    }
}
