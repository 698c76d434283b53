//! Record sink seam.

use crate::types::RecordPair;

/// Failures while durably appending or reading back record pairs.
#[derive(thiserror::Error, Debug)]
pub enum SinkError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Append-only persistence of completed record pairs.
///
/// An append must be durable before it returns; the controller treats a
/// successful return as permission to advance to the next target.
pub trait RecordSink {
    fn append_pair(&mut self, pair: &RecordPair) -> Result<(), SinkError>;
}
