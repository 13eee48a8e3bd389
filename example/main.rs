use codec_proto::{Role, h2, negotiate};
use std::io;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Protocols this server is willing to upgrade to, most preferred first.
const SERVER_UPGRADE: &str = "h2c, websocket";

const MAX_HEAD: usize = 8 * 1024;

#[tokio::main]
async fn main() -> io::Result<()> {
    env_logger::init();

    let io = TcpListener::bind("0.0.0.0:3000").await?;
    log::info!("listening in {}", io.local_addr()?);

    loop {
        let (stream, addr) = io.accept().await?;
        tokio::spawn(async move {
            if let Err(err) = handle(stream).await {
                log::error!("{addr}: {err}");
            }
        });
    }
}

async fn handle(mut stream: TcpStream) -> io::Result<()> {
    let mut buf = Vec::with_capacity(1024);
    let head_len = loop {
        if let Some(n) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break n + 4;
        }
        if buf.len() > MAX_HEAD {
            return Err(io::Error::new(io::ErrorKind::InvalidData, "excessive request head"));
        }
        if stream.read_buf(&mut buf).await? == 0 {
            return Ok(());
        }
    };

    let head = String::from_utf8_lossy(&buf[..head_len]);
    let mut lines = head.split("\r\n");
    log::info!("> {}", lines.next().unwrap_or_default());

    let mut offer = "";
    let mut h2_settings = false;
    for line in lines {
        let Some((name, value)) = line.split_once(':') else { continue };
        if name.eq_ignore_ascii_case("upgrade") {
            offer = value;
        } else if name.eq_ignore_ascii_case(h2::SETTINGS_HEADER) {
            h2_settings = true;
        }
    }

    let upgrade = negotiate(offer, SERVER_UPGRADE, Role::Server)
        .filter(|upgrade| !upgrade.protocol().is_http2() || h2_settings);

    let Some(upgrade) = upgrade else {
        let body = "http/1.1\n";
        let res = format!(
            "HTTP/1.1 200 OK\r\ncontent-type: text/plain\r\ncontent-length: {}\r\n\r\n{body}",
            body.len(),
        );
        return stream.write_all(res.as_bytes()).await;
    };

    log::info!("< 101 {} ({})", upgrade.token(), upgrade.protocol());
    let res = format!(
        "HTTP/1.1 101 Switching Protocols\r\nconnection: upgrade\r\nupgrade: {}\r\n\r\n",
        upgrade.token(),
    );
    stream.write_all(res.as_bytes()).await?;

    if upgrade.protocol().is_http2() {
        let mut preface = buf.split_off(head_len);
        while preface.len() < h2::PREFACE.len() {
            if stream.read_buf(&mut preface).await? == 0 {
                return Ok(());
            }
        }
        if !preface.starts_with(h2::PREFACE) {
            return Err(io::Error::new(io::ErrorKind::InvalidData, "invalid preface bytes"));
        }
        log::info!("h2 preface received, parallel streams: {}", upgrade.protocol().is_parallel());
    }

    Ok(())
}
