//! Reads a streaming endpoint's newline-delimited JSON.
//!
//! A [`StreamReader`] pulls chunks from the connection, cuts them into lines with a
//! [`LineBuffer`] and calls back with a [`StreamContent`] per line.  Blank keep-alive lines
//! are skipped.  Any [`StreamHandle`] (each `StreamContent` carries one) closes the stream;
//! the reader stops as soon as it notices, even while it is waiting for bytes.  Lost
//! connections are not reopened.
mod line_buffer;
mod message;

pub use line_buffer::{Feed, LineBuffer};
pub use message::{
    Control, Delete, DeletedStatus, Disconnect, Limit, ScrubGeo, StatusWithheld, StreamEvent,
    StreamMessage, UserWithheld, Warning,
};

use crate::net::TwitterErr;

use bytes::Bytes;
use futures::stream::{Stream, StreamExt};
use std::convert::TryFrom;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;


/// Closes the stream it was handed out by.
#[derive(Debug, Clone)]
pub struct StreamHandle {
    tx: Arc<watch::Sender<bool>>,
}

impl StreamHandle {
    pub fn close(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_closed(&self) -> bool {
        *self.tx.borrow()
    }
}

/// One message read from a stream.
#[derive(Debug, Clone)]
pub struct StreamContent {
    /// The raw JSON line
    pub content: String,
    pub message: StreamMessage,
    handle: StreamHandle,
}

impl StreamContent {
    pub fn close_stream(&self) {
        self.handle.close()
    }

    pub fn handle(&self) -> &StreamHandle {
        &self.handle
    }
}

#[derive(Debug)]
pub struct StreamReader {
    buffer: LineBuffer,
    handle: StreamHandle,
    closed: watch::Receiver<bool>,
}

enum Next {
    Chunk(Option<Result<Bytes, TwitterErr>>),
    /// The close signal changed; `false` if every handle is gone
    Signal(bool),
}

impl Default for StreamReader {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamReader {
    pub fn new() -> Self {
        let (tx, closed) = watch::channel(false);
        Self {
            buffer: LineBuffer::new(),
            handle: StreamHandle { tx: Arc::new(tx) },
            closed,
        }
    }

    /// A handle that closes this reader's stream from outside the callback.
    pub fn handle(&self) -> StreamHandle {
        self.handle.clone()
    }

    /// Reads `bytes` until it ends, the stream is closed or a line is not JSON.  Answers with
    /// the number of messages delivered.
    pub async fn read<S, F, Fut>(mut self, mut bytes: S, mut callback: F) -> Result<usize, TwitterErr>
    where
        S: Stream<Item = Result<Bytes, TwitterErr>> + Unpin,
        F: FnMut(StreamContent) -> Fut,
        Fut: Future<Output = ()>,
    {
        let mut delivered = 0;
        while !self.handle.is_closed() {
            let next = tokio::select! {
                changed = self.closed.changed() => Next::Signal(changed.is_ok()),
                chunk = bytes.next() => Next::Chunk(chunk),
            };

            let chunk = match next {
                Next::Signal(true) => continue,
                Next::Signal(false) | Next::Chunk(None) => break,
                Next::Chunk(Some(chunk)) => chunk?,
            };

            let Feed {
                lines,
                end_of_stream,
            } = self.buffer.feed(&chunk);
            for line in lines {
                if line.trim().is_empty() {
                    log::trace!("stream keep-alive");
                    continue;
                }
                let message = StreamMessage::try_from(line.as_str())?;
                callback(StreamContent {
                    content: line,
                    message,
                    handle: self.handle.clone(),
                })
                .await;
                delivered += 1;
                if self.handle.is_closed() {
                    break;
                }
            }
            if end_of_stream {
                break;
            }
        }
        log::debug!(
            "stream finished after {} messages ({} bytes unread)",
            delivered,
            self.buffer.pending()
        );
        Ok(delivered)
    }
}
