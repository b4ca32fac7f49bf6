//! src/platforms/twitch_irc/client.rs
//!
//! Low-level IRC client: TLS connect, PASS/NICK/CAP handshake, PING/PONG,
//! and a line parser that surfaces PRIVMSG/JOIN/PART plus the 001 welcome.
//! Reconnection policy lives with the operator, not here.

use std::io;

use tokio::io::{split, AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use tokio_native_tls::native_tls;
use tokio_native_tls::TlsConnector;
use tracing::{debug, error, info};

const TWITCH_IRC_HOST: &str = "irc.chat.twitch.tv";
const TWITCH_IRC_PORT: u16 = 6697;

/// One parsed IRC line.
#[derive(Debug, Clone)]
pub struct IrcLine {
    pub tags: Option<String>,
    pub prefix: Option<String>,
    pub command: String,
    pub params: Vec<String>,
    pub trailing: Option<String>,
}

impl IrcLine {
    pub fn parse(line: &str) -> Self {
        let mut rest = line.trim();
        let mut tags = None;
        let mut prefix = None;

        if rest.starts_with('@') {
            match rest.find(' ') {
                Some(pos) => {
                    tags = Some(rest[..pos].to_string());
                    rest = &rest[pos + 1..];
                }
                None => {
                    return Self {
                        tags: Some(rest.to_string()),
                        prefix: None,
                        command: String::new(),
                        params: vec![],
                        trailing: None,
                    };
                }
            }
        }

        if rest.starts_with(':') {
            match rest.find(' ') {
                Some(pos) => {
                    prefix = Some(rest[..pos].trim_start_matches(':').to_string());
                    rest = &rest[pos + 1..];
                }
                None => {
                    return Self {
                        tags,
                        prefix: Some(rest.trim_start_matches(':').to_string()),
                        command: String::new(),
                        params: vec![],
                        trailing: None,
                    };
                }
            }
        }

        let mut parts = rest.splitn(2, ' ');
        let command = parts.next().unwrap_or("").to_string();
        rest = parts.next().unwrap_or("");

        let mut params = Vec::new();
        let mut trailing = None;
        if let Some(idx) = rest.find(" :") {
            trailing = Some(rest[idx + 2..].to_string());
            let before = rest[..idx].trim();
            if !before.is_empty() {
                params.extend(before.split_whitespace().map(str::to_string));
            }
        } else if rest.starts_with(':') {
            trailing = Some(rest[1..].to_string());
        } else {
            params.extend(rest.split_whitespace().map(str::to_string));
        }

        Self { tags, prefix, command, params, trailing }
    }

    /// The nick part of `nick!user@host`, lowercased by Twitch already.
    pub fn prefix_login(&self) -> Option<String> {
        let prefix = self.prefix.as_ref()?;
        match prefix.find('!') {
            Some(excl) => Some(prefix[..excl].to_string()),
            None => None,
        }
    }
}

/// Higher-level event from the read loop.
#[derive(Debug, Clone)]
pub struct IrcIncomingEvent {
    pub command: String,
    pub channel: Option<String>,
    pub login: Option<String>,
    pub text: Option<String>,
}

/// Clonable handle for outbound lines; lives independently of the client so
/// the reply channel can be handed around without the connection itself.
#[derive(Clone)]
pub struct IrcSender {
    pub(crate) raw_outgoing: mpsc::UnboundedSender<String>,
}

impl IrcSender {
    pub fn send_raw_line(&self, line: &str) {
        let _ = self.raw_outgoing.send(line.to_string());
    }

    pub fn send_privmsg(&self, channel: &str, text: &str) {
        self.send_raw_line(&format!("PRIVMSG {} :{}", channel, text));
    }

    pub fn join_channel(&self, channel: &str) {
        self.send_raw_line(&format!("JOIN {}", channel));
    }

    pub fn part_channel(&self, channel: &str) {
        self.send_raw_line(&format!("PART {}", channel));
    }
}

/// TLS IRC client for `irc.chat.twitch.tv:6697`.
pub struct TwitchIrcClient {
    sender: IrcSender,

    /// Stored as an `Option` so the runtime can `take()` it.
    pub incoming: Option<mpsc::UnboundedReceiver<IrcIncomingEvent>>,

    read_task: JoinHandle<()>,
    write_task: JoinHandle<()>,
}

impl TwitchIrcClient {
    /// Connects, authenticates with PASS/NICK, requests the membership and
    /// tags capabilities (JOIN/PART events need membership), and spawns the
    /// read/write tasks.
    pub async fn connect(username: &str, oauth_token: &str) -> io::Result<Self> {
        let tcp = TcpStream::connect((TWITCH_IRC_HOST, TWITCH_IRC_PORT))
            .await
            .map_err(|e| io::Error::other(format!("TCP connect error: {e}")))?;

        let native_connector = native_tls::TlsConnector::new()
            .map_err(|e| io::Error::other(format!("TlsConnector::new() => {e}")))?;
        let connector = TlsConnector::from(native_connector);

        let tls_stream = connector
            .connect(TWITCH_IRC_HOST, tcp)
            .await
            .map_err(|e| io::Error::other(format!("TLS connect() => {e}")))?;

        let (read_half, write_half) = split(tls_stream);

        let (tx_outgoing, rx_outgoing) = mpsc::unbounded_channel::<String>();
        let (tx_incoming, rx_incoming) = mpsc::unbounded_channel::<IrcIncomingEvent>();

        let write_task = tokio::spawn(Self::writer_loop(write_half, rx_outgoing));

        tx_outgoing.send(format!("PASS {}", oauth_token)).ok();
        tx_outgoing.send(format!("NICK {}", username)).ok();
        tx_outgoing
            .send("CAP REQ :twitch.tv/commands twitch.tv/tags twitch.tv/membership".to_string())
            .ok();

        let read_task = tokio::spawn(Self::reader_loop(read_half, tx_incoming, tx_outgoing.clone()));

        Ok(Self {
            sender: IrcSender { raw_outgoing: tx_outgoing },
            incoming: Some(rx_incoming),
            read_task,
            write_task,
        })
    }

    pub fn sender(&self) -> IrcSender {
        self.sender.clone()
    }

    pub fn shutdown(&self) {
        self.read_task.abort();
        self.write_task.abort();
    }

    async fn reader_loop<R>(
        read_half: R,
        tx_incoming: mpsc::UnboundedSender<IrcIncomingEvent>,
        tx_outgoing: mpsc::UnboundedSender<String>,
    ) where
        R: tokio::io::AsyncRead + Unpin,
    {
        let mut reader = BufReader::new(read_half);
        let mut line_buffer = String::new();

        loop {
            line_buffer.clear();
            match reader.read_line(&mut line_buffer).await {
                Ok(0) => {
                    info!("(TwitchIrcClient) read loop => EOF");
                    break;
                }
                Ok(_) => {
                    let line = line_buffer.trim_end();
                    if line.is_empty() {
                        continue;
                    }
                    debug!("<< {}", line);

                    let parsed = IrcLine::parse(line);
                    let command = parsed.command.to_uppercase();

                    if command == "PING" {
                        if let Some(trail) = &parsed.trailing {
                            tx_outgoing.send(format!("PONG :{}", trail)).ok();
                        }
                        continue;
                    }

                    let evt = match command.as_str() {
                        "PRIVMSG" | "JOIN" | "PART" => IrcIncomingEvent {
                            command: command.clone(),
                            channel: parsed.params.first().cloned(),
                            login: parsed.prefix_login(),
                            text: parsed.trailing.clone(),
                        },
                        "001" => IrcIncomingEvent {
                            command,
                            channel: None,
                            login: None,
                            text: None,
                        },
                        _ => continue,
                    };

                    let _ = tx_incoming.send(evt);
                }
                Err(e) => {
                    error!("(TwitchIrcClient) read error => {:?}", e);
                    break;
                }
            }
        }

        info!("(TwitchIrcClient) reader loop ended.");
    }

    async fn writer_loop<W>(mut write_half: W, mut rx_outgoing: mpsc::UnboundedReceiver<String>)
    where
        W: tokio::io::AsyncWrite + Unpin,
    {
        let mut writer = BufWriter::new(&mut write_half);

        while let Some(line) = rx_outgoing.recv().await {
            debug!(">> {}", line);
            if let Err(e) = writer.write_all(line.as_bytes()).await {
                error!("writer error => {:?}", e);
                break;
            }
            if let Err(e) = writer.write_all(b"\r\n").await {
                error!("writer error => {:?}", e);
                break;
            }
            if let Err(e) = writer.flush().await {
                error!("writer flush error => {:?}", e);
                break;
            }
        }

        info!("(TwitchIrcClient) writer loop ended.");
    }
}
