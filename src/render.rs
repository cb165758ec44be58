//! HTML presenter. A pure function from probe results to the themed landing
//! page; the JSON side needs no presenter because `StatusResult` serializes
//! straight through serde.

use crate::models::StatusResult;

const PAGE_HEAD: &str = r##"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8" />
<title>QUAKE:PKLAN:NET</title>
<meta name="viewport" content="width=device-width, initial-scale=1" />
<style>
  body {
    margin: 0;
    font-family: 'Verdana', 'Geneva', sans-serif;
    background-color: #000;
    background-image: url('data:image/svg+xml,%3Csvg xmlns="http://www.w3.org/2000/svg" width="64" height="64" viewBox="0 0 64 64"%3E%3Crect width="64" height="64" fill="%23000000"/%3E%3Cpath d="M0 32h64v1H0zm32-32h1v64h-1z" fill="%230b0b0b"/%3E%3C/svg%3E');
    color: #f9f9f9;
  }
  .scanlines {
    position: fixed;
    inset: 0;
    background-image: linear-gradient(rgba(0,0,0,0) 50%, rgba(0,0,0,0.2) 50%);
    background-size: 100% 2px;
    pointer-events: none;
    opacity: 0.35;
  }
  .wrapper {
    max-width: 960px;
    margin: 40px auto;
    padding: 16px;
    background: rgba(10, 10, 10, 0.85);
    border: 4px double #ffae00;
    box-shadow: 0 0 40px rgba(0,0,0,0.8);
  }
  h1 {
    font-size: 48px;
    text-align: center;
    letter-spacing: 6px;
    color: #ffae00;
    text-shadow: 0 0 12px rgba(255, 174, 0, 0.7);
    margin-bottom: 6px;
  }
  .subtitle {
    text-align: center;
    font-size: 12px;
    letter-spacing: 0.6em;
    color: #aaa;
    margin-bottom: 24px;
  }
  table {
    width: 100%;
    border-collapse: collapse;
  }
</style>
</head>
<body>
<div class="scanlines"></div>
<div class="wrapper">
  <h1>QUAKE:PKLAN:NET</h1>
  <div class="subtitle">MULTI-SERVER CONTROL MATRIX</div>
  <table>
    <tbody>"##;

const PAGE_TAIL: &str = r#"
    </tbody>
  </table>
</div>
</body>
</html>"#;

pub fn render_html(statuses: &[StatusResult]) -> String {
    let mut page = String::from(PAGE_HEAD);
    for (index, status) in statuses.iter().enumerate() {
        page.push_str(&render_row(index, status));
    }
    page.push_str(PAGE_TAIL);
    page
}

fn render_row(index: usize, status: &StatusResult) -> String {
    let zebra = if index % 2 == 0 { "#1a1a1a" } else { "#111" };
    let (badge_color, badge_text) = if status.online {
        ("#5dfc5d", "ONLINE")
    } else {
        ("#ff5e5e", "OFFLINE")
    };
    let detail = escape_html(&detail_text(status));

    format!(
        r#"
        <tr style="background:{zebra};">
          <td style="padding:12px 16px; border:1px solid #333;">
            <div style="font-weight:bold; letter-spacing:2px; color:#ffdd57;">{name}</div>
            <div style="font-size:12px; color:#aaa;">{host}:{port}</div>
          </td>
          <td style="padding:12px 16px; border:1px solid #333; color:#ddd;">
            {detail}
          </td>
          <td style="padding:12px 16px; border:1px solid #333; text-align:center;">
            <span style="display:inline-block; padding:6px 12px; border:1px solid #333; background:{badge_color}; color:#111; font-weight:bold; min-width:90px;">{badge_text}</span>
          </td>
        </tr>"#,
        zebra = zebra,
        name = escape_html(&status.name),
        host = escape_html(&status.host),
        port = status.port,
        detail = detail,
        badge_color = badge_color,
        badge_text = badge_text,
    )
}

fn detail_text(status: &StatusResult) -> String {
    if status.online {
        format!(
            "{}/{} players — Map: {}",
            status.players.unwrap_or(0),
            status.max_players.unwrap_or(0),
            status.map.as_deref().unwrap_or(""),
        )
    } else {
        status.error.clone().unwrap_or_else(|| "No response".into())
    }
}

/// Server-supplied text (names, maps, error strings) goes through here
/// before it is embedded in markup.
fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
