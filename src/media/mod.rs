//! Capability traits for the collaborators driven by the playback
//! controller: source, demuxer, decodable tracks, renderer and audio sink.
//!
//! The controller is written against these traits only; concrete decoder,
//! renderer and transport implementations are injected at construction.

pub mod output;
pub mod source;
pub mod track;

pub use output::{AudioSink, Renderer};
pub use source::{Demuxer, Source, StreamChannel};
pub use track::Track;
