//! Upstream collaborators: the data source and the stream demultiplexer.

/// Demultiplexer channel a track is fed from.
///
/// The values carry the MPEG PES stream ids the demuxer routes on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamChannel {
    /// First video elementary stream.
    Video1,
    /// First audio elementary stream.
    Audio1,
}

impl StreamChannel {
    /// PES stream id for this channel.
    pub fn stream_id(self) -> u8 {
        match self {
            StreamChannel::Video1 => 0xE0,
            StreamChannel::Audio1 => 0xC0,
        }
    }
}

/// A connected data source feeding the demuxer (network stream, file, ...).
///
/// Connection handling, buffering and retry policy all live inside the
/// implementation; the controller only polls readiness and progress.
pub trait Source {
    /// Begin fetching data.
    fn start(&mut self);
    /// True once enough data has arrived that decoding can begin.
    fn established(&self) -> bool;
    /// Connection/buffering progress in `0.0..=1.0`.
    fn progress(&self) -> f32;
    /// Release the connection and any buffered data.
    fn destroy(&mut self);
}

/// Stream demultiplexer sitting between the source and the decoders.
///
/// Routing of demuxed payloads to the decoders is internal to the
/// implementation; `connect` only declares which channels are consumed.
/// Called once per attached track at pipeline setup, never on the tick path.
pub trait Demuxer {
    fn connect(&mut self, channel: StreamChannel);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_ids() {
        assert_eq!(StreamChannel::Video1.stream_id(), 0xE0);
        assert_eq!(StreamChannel::Audio1.stream_id(), 0xC0);
    }
}
