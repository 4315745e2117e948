mod format;

pub use format::{ScoreLogEvent, StructuredLogger};
