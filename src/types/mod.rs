pub mod digest;
pub mod timestamp;
pub mod topic;

pub use digest::EventDigest;
pub use timestamp::{EventTimestamp, TimestampError};
pub use topic::{Topic, UnknownTopic};
