/// A complete server-sent event from the chat stream
#[derive(Debug, Clone, PartialEq)]
pub enum SseFrame {
    /// Payload of the `data:` lines
    Data(String),
    /// The `[DONE]` end marker
    Done,
}

/// Incremental SSE decoder.
///
/// Bytes are buffered until a blank line closes an event, so chunk boundaries from the
/// network (including ones that split a UTF-8 sequence) never corrupt a payload.
#[derive(Debug, Default)]
pub struct SseDecoder {
    buffer: Vec<u8>,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed bytes, returning every event completed by them
    pub fn push(&mut self, bytes: &[u8]) -> Vec<SseFrame> {
        self.buffer.extend_from_slice(bytes);

        let mut frames = Vec::new();
        while let Some((end, separator_len)) = find_event_end(&self.buffer) {
            let event: Vec<u8> = self.buffer.drain(..end + separator_len).take(end).collect();
            if let Some(frame) = parse_event(&String::from_utf8_lossy(&event)) {
                frames.push(frame);
            }
        }
        frames
    }

    /// Flush a trailing event the server closed without a blank line
    pub fn finish(&mut self) -> Option<SseFrame> {
        if self.buffer.is_empty() {
            return None;
        }
        let event = std::mem::take(&mut self.buffer);
        parse_event(&String::from_utf8_lossy(&event))
    }
}

fn find_event_end(buffer: &[u8]) -> Option<(usize, usize)> {
    let lf = buffer.windows(2).position(|w| w == b"\n\n").map(|i| (i, 2));
    let crlf = buffer.windows(4).position(|w| w == b"\r\n\r\n").map(|i| (i, 4));
    match (lf, crlf) {
        (Some(a), Some(b)) => Some(if a.0 <= b.0 { a } else { b }),
        (a, b) => a.or(b),
    }
}

fn parse_event(event: &str) -> Option<SseFrame> {
    let data: Vec<&str> = event
        .lines()
        .filter_map(|line| line.strip_prefix("data:"))
        .map(|rest| rest.strip_prefix(' ').unwrap_or(rest))
        .collect();

    if data.is_empty() {
        return None;
    }

    let payload = data.join("\n");
    if payload.trim() == "[DONE]" {
        Some(SseFrame::Done)
    } else {
        Some(SseFrame::Data(payload))
    }
}
