/// Splits streamed bytes into lines.
///
/// CR bytes are dropped, LF ends a line and `0xFF` (never valid UTF-8) marks the end of the
/// stream.  A line cut off at the end of one chunk is completed by the next.
#[derive(Debug, Default)]
pub struct LineBuffer {
    partial: Vec<u8>,
}

/// The lines completed by one chunk.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Feed {
    pub lines: Vec<String>,
    pub end_of_stream: bool,
}

const END_OF_STREAM: u8 = 0xFF;

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, chunk: &[u8]) -> Feed {
        let mut feed = Feed::default();
        for &byte in chunk {
            match byte {
                b'\r' => (),
                b'\n' => feed.lines.push(self.take_line()),
                END_OF_STREAM => {
                    feed.end_of_stream = true;
                    break;
                }
                byte => self.partial.push(byte),
            }
        }
        feed
    }

    /// Bytes waiting for their line to end.
    pub fn pending(&self) -> usize {
        self.partial.len()
    }

    fn take_line(&mut self) -> String {
        let line = String::from_utf8_lossy(&self.partial).into_owned();
        self.partial.clear();
        line
    }
}
