//! STOMP Client Framing
//!
//! The minimal slice of STOMP 1.2 the notification session speaks:
//! CONNECT/CONNECTED for the handshake, SUBSCRIBE for the single queue
//! subscription, MESSAGE and ERROR inbound. One frame per WebSocket
//! text message; a message holding only EOLs is a heart-beat.
//!
//! Wire form:
//!
//! ```text
//! COMMAND
//! header:value
//! header:value
//!
//! body^@
//! ```
//!
//! Header names and values are escaped (`\\`, `\n`, `\r`, `\c`) on
//! every frame except CONNECT/CONNECTED, as the protocol requires.

use crate::shared::error::ClientError;

/// Frame commands the session sends or understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Connect,
    Connected,
    Subscribe,
    Message,
    Error,
    Receipt,
    Disconnect,
}

impl Command {
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Connect => "CONNECT",
            Command::Connected => "CONNECTED",
            Command::Subscribe => "SUBSCRIBE",
            Command::Message => "MESSAGE",
            Command::Error => "ERROR",
            Command::Receipt => "RECEIPT",
            Command::Disconnect => "DISCONNECT",
        }
    }

    fn from_str(value: &str) -> Option<Self> {
        match value {
            "CONNECT" => Some(Command::Connect),
            "CONNECTED" => Some(Command::Connected),
            "SUBSCRIBE" => Some(Command::Subscribe),
            "MESSAGE" => Some(Command::Message),
            "ERROR" => Some(Command::Error),
            "RECEIPT" => Some(Command::Receipt),
            "DISCONNECT" => Some(Command::Disconnect),
            _ => None,
        }
    }
}

/// A single STOMP frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub command: Command,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Frame {
    pub fn new(command: Command) -> Self {
        Self {
            command,
            headers: Vec::new(),
            body: String::new(),
        }
    }

    /// Append a header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the body
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// First header with the given name, if any
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// CONNECT frame for the handshake; attaches the bearer credential
    /// when one is present
    pub fn connect(host: &str, token: Option<&str>) -> Self {
        let mut frame = Frame::new(Command::Connect)
            .header("accept-version", "1.2")
            .header("host", host)
            .header("heart-beat", "0,0");
        if let Some(token) = token {
            frame = frame.header("Authorization", format!("Bearer {}", token));
        }
        frame
    }

    /// SUBSCRIBE frame for a destination
    pub fn subscribe(id: &str, destination: &str) -> Self {
        Frame::new(Command::Subscribe)
            .header("id", id)
            .header("destination", destination)
            .header("ack", "auto")
    }

    /// Whether a WebSocket text message is a STOMP heart-beat (EOLs only)
    pub fn is_heartbeat(text: &str) -> bool {
        !text.is_empty() && text.chars().all(|c| c == '\n' || c == '\r')
    }

    /// Encode to the wire form, NUL-terminated
    pub fn encode(&self) -> String {
        // CONNECT and CONNECTED carry unescaped headers per the protocol
        let escape = !matches!(self.command, Command::Connect | Command::Connected);
        let mut out = String::with_capacity(64 + self.body.len());
        out.push_str(self.command.as_str());
        out.push('\n');
        for (name, value) in &self.headers {
            if escape {
                push_escaped(&mut out, name);
                out.push(':');
                push_escaped(&mut out, value);
            } else {
                out.push_str(name);
                out.push(':');
                out.push_str(value);
            }
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&self.body);
        out.push('\0');
        out
    }

    /// Parse a frame from a WebSocket text message
    pub fn parse(input: &str) -> Result<Self, ClientError> {
        let input = input.trim_end_matches(['\n', '\r']);
        let input = input.strip_suffix('\0').unwrap_or(input);
        // split at the earliest blank line, whichever EOL convention the
        // broker uses; later matches may sit inside the body
        // head keeps its final EOL so `lines()` strips CR/LF uniformly
        let (head, body) = match (input.find("\n\n"), input.find("\n\r\n")) {
            (Some(lf), Some(crlf)) if crlf < lf => (&input[..crlf + 1], &input[crlf + 3..]),
            (Some(lf), _) => (&input[..lf + 1], &input[lf + 2..]),
            (None, Some(crlf)) => (&input[..crlf + 1], &input[crlf + 3..]),
            (None, None) => (input, ""),
        };

        let mut lines = head.lines();
        let command_line = lines
            .next()
            .filter(|line| !line.is_empty())
            .ok_or_else(|| ClientError::parse("empty frame"))?;
        let command = Command::from_str(command_line)
            .ok_or_else(|| ClientError::parse(format!("unknown STOMP command: {}", command_line)))?;

        let unescape_headers = !matches!(command, Command::Connect | Command::Connected);
        let mut headers = Vec::new();
        for line in lines {
            if line.is_empty() {
                continue;
            }
            let (name, value) = line
                .split_once(':')
                .ok_or_else(|| ClientError::parse(format!("malformed header: {}", line)))?;
            if unescape_headers {
                headers.push((unescape(name)?, unescape(value)?));
            } else {
                headers.push((name.to_string(), value.to_string()));
            }
        }

        Ok(Frame {
            command,
            headers,
            body: body.to_string(),
        })
    }
}

fn push_escaped(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\r' => out.push_str("\\r"),
            '\n' => out.push_str("\\n"),
            ':' => out.push_str("\\c"),
            other => out.push(other),
        }
    }
}

fn unescape(value: &str) -> Result<String, ClientError> {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('r') => out.push('\r'),
            Some('n') => out.push('\n'),
            Some('c') => out.push(':'),
            other => {
                return Err(ClientError::parse(format!(
                    "invalid header escape: \\{}",
                    other.map(String::from).unwrap_or_default()
                )))
            }
        }
    }
    Ok(out)
}
