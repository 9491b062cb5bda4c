//! Beat map document format library
//!
//! Defines the JSON document consumed by the game client, plus helpers to
//! read, write and cache it on disk.

pub mod format;
pub mod reader;
pub mod store;
pub mod writer;

pub use format::{BeatMap, BeatMapMetadata, NoteEvent};
pub use reader::BeatMapReader;
pub use store::BeatMapStore;
pub use writer::BeatMapWriter;
