//! REPL Module
//!
//! The interactive prompt: reads a line, dispatches it to a [`Command`] and
//! prints the result. Input and output are generic so the loop runs equally
//! on stdin/stdout and on in-memory buffers.

pub mod commands;
pub mod session;

use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::api::PokeApiClient;
use crate::error::CommandError;

pub use commands::{Command, Flow};
pub use session::Session;

/// Printed before every line of input.
pub const PROMPT: &str = "Pokedex > ";

/// Lowercases `text` and splits it into words.
pub fn clean_input(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

pub(crate) async fn write_line<W>(out: &mut W, line: &str) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    out.write_all(line.as_bytes()).await?;
    out.write_all(b"\n").await
}

/// An interactive Pokedex session bound to a PokeAPI client.
#[derive(Debug)]
pub struct Repl {
    client: PokeApiClient,
    session: Session,
}

impl Repl {
    pub fn new(client: PokeApiClient) -> Self {
        Self::with_session(client, Session::new())
    }

    pub fn with_session(client: PokeApiClient, session: Session) -> Self {
        Self { client, session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    // == Run ==
    /// Prompts and executes lines until `exit` or end of input.
    ///
    /// Command failures are printed and the loop goes on; only I/O errors on
    /// `input` or `out` end it early. Bytes that are not valid UTF-8 are
    /// replaced rather than treated as an error.
    pub async fn run<R, W>(&mut self, mut input: R, out: &mut W) -> io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buf = Vec::new();

        loop {
            out.write_all(PROMPT.as_bytes()).await?;
            out.flush().await?;

            buf.clear();
            if input.read_until(b'\n', &mut buf).await? == 0 {
                // EOF: finish the prompt line
                out.write_all(b"\n").await?;
                break;
            }

            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
            if self.execute_line(line, out).await? == Flow::Exit {
                break;
            }
        }

        out.flush().await
    }

    // == Execute Line ==
    /// Runs a single line of input.
    pub async fn execute_line<W>(&mut self, line: &str, out: &mut W) -> io::Result<Flow>
    where
        W: AsyncWrite + Unpin,
    {
        let words = clean_input(line);
        let Some((name, args)) = words.split_first() else {
            return Ok(Flow::Continue);
        };

        let Some(command) = Command::parse(name) else {
            write_line(out, &format!("Unknown command: {}", name)).await?;
            return Ok(Flow::Continue);
        };

        match command
            .execute(args, &mut self.session, &self.client, out)
            .await
        {
            Ok(flow) => Ok(flow),
            Err(CommandError::Io(err)) => Err(err),
            Err(err) => {
                debug!(command = command.name(), error = %err, "Command failed");
                write_line(out, &format!("Error: {}", err)).await?;
                Ok(Flow::Continue)
            }
        }
    }
}
