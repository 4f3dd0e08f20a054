//! Playback control session.
//!
//! [`PlayerControl`] is the seam between dispatch and the music daemon.
//! [`MpdSession`] implements it over the MPD text protocol: one command line
//! per request, answered by `key: value` lines terminated by `OK`, or by a
//! single `ACK [error@command_listNum] {command} message` line.

use crate::config::MpdConfig;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::net::{TcpStream, ToSocketAddrs};
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("MPD I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("MPD protocol error: {0}")]
    Protocol(String),
    #[error("MPD error: {0}")]
    Ack(String),
}

/// Operations the dispatcher can trigger on the playback session.
pub trait PlayerControl {
    fn play(&mut self) -> Result<(), SessionError>;
    fn pause(&mut self) -> Result<(), SessionError>;
    fn play_pause(&mut self) -> Result<(), SessionError>;
    fn stop(&mut self) -> Result<(), SessionError>;
    fn next_track(&mut self) -> Result<(), SessionError>;
    fn prev_track(&mut self) -> Result<(), SessionError>;
    fn volume_up(&mut self) -> Result<(), SessionError>;
    fn volume_down(&mut self) -> Result<(), SessionError>;
    fn toggle_mute(&mut self) -> Result<(), SessionError>;
    fn seek_forward(&mut self) -> Result<(), SessionError>;
    fn seek_backward(&mut self) -> Result<(), SessionError>;
    fn toggle_random(&mut self) -> Result<(), SessionError>;
    fn toggle_repeat(&mut self) -> Result<(), SessionError>;
}

/// Response body of a successful command, in server order.
pub type Response = Vec<(String, String)>;

fn field<'a>(response: &'a Response, key: &str) -> Option<&'a str> {
    response
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

struct Connection {
    reader: BufReader<TcpStream>,
    writer: BufWriter<TcpStream>,
}

impl Connection {
    fn open(cfg: &MpdConfig) -> Result<(Self, String), SessionError> {
        let addr = (cfg.host.as_str(), cfg.port)
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| {
                SessionError::Protocol(format!("cannot resolve {}:{}", cfg.host, cfg.port))
            })?;
        let stream = TcpStream::connect_timeout(&addr, cfg.timeout)?;
        stream.set_read_timeout(Some(cfg.timeout))?;
        stream.set_write_timeout(Some(cfg.timeout))?;
        stream.set_nodelay(true)?;

        let mut conn = Connection {
            reader: BufReader::new(stream.try_clone()?),
            writer: BufWriter::new(stream),
        };
        let greeting = conn.read_line()?;
        let version = greeting
            .strip_prefix("OK MPD ")
            .ok_or_else(|| SessionError::Protocol(format!("unexpected greeting '{greeting}'")))?
            .to_string();
        Ok((conn, version))
    }

    fn read_line(&mut self) -> Result<String, SessionError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "connection closed by MPD").into());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn command(&mut self, command: &str) -> Result<Response, Failure> {
        debug!(command, "MPD request");
        writeln!(self.writer, "{command}")
            .and_then(|()| self.writer.flush())
            .map_err(Failure::NotDelivered)?;

        let mut response = Response::new();
        loop {
            let line = match self.read_line() {
                Ok(line) => line,
                // A peer that hung up before answering never ran the command.
                Err(SessionError::Io(e)) if response.is_empty() && is_hangup(&e) => {
                    return Err(Failure::NotDelivered(e));
                }
                Err(e) => return Err(Failure::Broken(e)),
            };
            if line == "OK" {
                return Ok(response);
            }
            if let Some(message) = line.strip_prefix("ACK ") {
                return Err(Failure::Ack(message.to_string()));
            }
            match line.split_once(": ") {
                Some((key, value)) => response.push((key.to_string(), value.to_string())),
                None => {
                    return Err(Failure::Broken(SessionError::Protocol(format!(
                        "malformed line '{line}'"
                    ))))
                }
            }
        }
    }
}

/// How a command failed, which decides whether it may be sent again.
enum Failure {
    /// The server cannot have executed the command.
    NotDelivered(io::Error),
    /// The server answered with an error; the connection stays in sync.
    Ack(String),
    /// The command may have run, and the stream position is unknown.
    Broken(SessionError),
}

impl From<Failure> for SessionError {
    fn from(failure: Failure) -> Self {
        match failure {
            Failure::NotDelivered(e) => SessionError::Io(e),
            Failure::Ack(message) => SessionError::Ack(message),
            Failure::Broken(e) => e,
        }
    }
}

fn is_hangup(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::UnexpectedEof
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::BrokenPipe
    )
}

/// Connection to an MPD (or Mopidy-MPD) server.
pub struct MpdSession {
    config: MpdConfig,
    conn: Option<Connection>,
    muted_volume: Option<u8>,
}

impl MpdSession {
    /// Connects and authenticates. Fails if the server is unreachable or
    /// does not greet with `OK MPD`.
    pub fn connect(config: &MpdConfig) -> Result<Self, SessionError> {
        let mut session = MpdSession {
            config: config.clone(),
            conn: None,
            muted_volume: None,
        };
        session.reconnect()?;
        Ok(session)
    }

    fn reconnect(&mut self) -> Result<(), SessionError> {
        self.conn = None;
        let (mut conn, version) = Connection::open(&self.config)?;
        if let Some(password) = &self.config.password {
            conn.command(&format!("password {}", quote(password)))
                .map_err(SessionError::from)?;
        }
        info!(host = %self.config.host, port = self.config.port, %version, "Connected to MPD");
        self.conn = Some(conn);
        Ok(())
    }

    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    /// Sends one command. A command that never reached the server (MPD
    /// closes idle clients) is sent once more on a fresh connection. After
    /// a timeout or a garbled reply the connection is dropped without
    /// resending, and the next command reconnects.
    pub fn command(&mut self, command: &str) -> Result<Response, SessionError> {
        if let Some(conn) = self.conn.as_mut() {
            match conn.command(command) {
                Ok(response) => return Ok(response),
                Err(Failure::NotDelivered(e)) => {
                    warn!(error = %e, command, "MPD connection lost, reconnecting");
                }
                Err(failure) => return Err(self.settle(failure)),
            }
        }
        self.reconnect()?;
        let result = match self.conn.as_mut() {
            Some(conn) => conn.command(command),
            None => return Err(SessionError::Protocol("not connected".to_string())),
        };
        result.map_err(|failure| self.settle(failure))
    }

    /// Drops the connection unless the failure left it in sync.
    fn settle(&mut self, failure: Failure) -> SessionError {
        if !matches!(failure, Failure::Ack(_)) {
            debug!("Dropping MPD connection");
            self.conn = None;
        }
        failure.into()
    }

    fn status(&mut self) -> Result<Response, SessionError> {
        self.command("status")
    }

    fn current_volume(&mut self) -> Result<u8, SessionError> {
        let status = self.status()?;
        let raw = field(&status, "volume")
            .ok_or_else(|| SessionError::Protocol("status has no volume".to_string()))?;
        match raw.parse::<i32>() {
            Ok(v) if (0..=100).contains(&v) => Ok(v as u8),
            Ok(_) => Err(SessionError::Protocol("MPD has no mixer (volume -1)".to_string())),
            Err(_) => Err(SessionError::Protocol(format!("invalid volume '{raw}'"))),
        }
    }

    fn set_volume(&mut self, volume: u8) -> Result<(), SessionError> {
        self.command(&format!("setvol {}", volume.min(100)))?;
        Ok(())
    }

    fn change_volume(&mut self, delta: i16) -> Result<(), SessionError> {
        let current = i16::from(self.current_volume()?);
        let target = (current + delta).clamp(0, 100) as u8;
        self.muted_volume = None;
        self.set_volume(target)
    }

    fn toggle_flag(&mut self, flag: &str) -> Result<(), SessionError> {
        let status = self.status()?;
        let enabled = field(&status, flag) == Some("1");
        self.command(&format!("{flag} {}", if enabled { 0 } else { 1 }))?;
        Ok(())
    }

    /// Releases the connection. Errors are logged, not returned.
    pub fn close(&mut self) {
        if let Some(mut conn) = self.conn.take() {
            let result = writeln!(conn.writer, "close").and_then(|()| conn.writer.flush());
            if let Err(e) = result {
                debug!(error = %e, "Failed to send close to MPD");
            }
            info!("Disconnected from MPD");
        }
    }
}

impl Drop for MpdSession {
    fn drop(&mut self) {
        self.close();
    }
}

impl PlayerControl for MpdSession {
    fn play(&mut self) -> Result<(), SessionError> {
        self.command("play").map(drop)
    }

    fn pause(&mut self) -> Result<(), SessionError> {
        self.command("pause 1").map(drop)
    }

    fn play_pause(&mut self) -> Result<(), SessionError> {
        let status = self.status()?;
        let command = match field(&status, "state") {
            Some("play") => "pause 1",
            Some("pause") => "pause 0",
            _ => "play",
        };
        self.command(command).map(drop)
    }

    fn stop(&mut self) -> Result<(), SessionError> {
        self.command("stop").map(drop)
    }

    fn next_track(&mut self) -> Result<(), SessionError> {
        self.command("next").map(drop)
    }

    fn prev_track(&mut self) -> Result<(), SessionError> {
        self.command("previous").map(drop)
    }

    fn volume_up(&mut self) -> Result<(), SessionError> {
        self.change_volume(i16::from(self.config.volume_step))
    }

    fn volume_down(&mut self) -> Result<(), SessionError> {
        self.change_volume(-i16::from(self.config.volume_step))
    }

    fn toggle_mute(&mut self) -> Result<(), SessionError> {
        match self.muted_volume.take() {
            Some(previous) => self.set_volume(previous),
            None => {
                let current = self.current_volume()?;
                self.set_volume(0)?;
                self.muted_volume = Some(current);
                Ok(())
            }
        }
    }

    fn seek_forward(&mut self) -> Result<(), SessionError> {
        let step = self.config.seek_step;
        self.command(&format!("seekcur +{step}")).map(drop)
    }

    fn seek_backward(&mut self) -> Result<(), SessionError> {
        let step = self.config.seek_step;
        self.command(&format!("seekcur -{step}")).map(drop)
    }

    fn toggle_random(&mut self) -> Result<(), SessionError> {
        self.toggle_flag("random")
    }

    fn toggle_repeat(&mut self) -> Result<(), SessionError> {
        self.toggle_flag("repeat")
    }
}

/// Quotes a command argument per the MPD protocol.
fn quote(arg: &str) -> String {
    let escaped = arg.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}
