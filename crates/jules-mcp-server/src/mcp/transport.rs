use anyhow::Result;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader, Stdin};

use crate::mcp::{McpMessage, McpProtocol};

/// A transport for sending and receiving MCP messages over stdio.
///
/// The reader is held for the lifetime of the transport; a fresh
/// `BufReader` per message could drop bytes it had already read ahead.
pub struct StdioTransport {
    reader: BufReader<Stdin>,
}

impl StdioTransport {
    pub fn new() -> Self {
        Self {
            reader: BufReader::new(io::stdin()),
        }
    }

    /// Reads a single MCP message from stdin. `None` on EOF.
    pub async fn read_message(&mut self) -> Result<Option<McpMessage>> {
        let mut buffer = String::new();
        match self.reader.read_line(&mut buffer).await {
            Ok(0) => Ok(None), // EOF
            Ok(_) => {
                let msg = McpProtocol::deserialize(&buffer)?;
                Ok(Some(msg))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Writes a single MCP message to stdout as one line.
    pub async fn write_message(message: &McpMessage) -> Result<()> {
        let mut stdout = io::stdout();
        let mut buffer = McpProtocol::serialize(message)?;
        buffer.push('\n');
        // One write per message keeps concurrent responses from interleaving.
        stdout.write_all(buffer.as_bytes()).await?;
        stdout.flush().await?;
        Ok(())
    }
}

impl Default for StdioTransport {
    fn default() -> Self {
        Self::new()
    }
}
