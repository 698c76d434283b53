//! Data model and hardware seams for dual-arm pixel-to-robot calibration
//! capture.
//!
//! This crate is intentionally small: the shared record types, the traits
//! the session controller drives (robot arms, the operator gate, the
//! record sink), and the overlay rendering that shows the operator which
//! marker to line an arm up with. It does *not* talk to any concrete
//! robot driver or display.

mod feed;
mod logger;
mod overlay;
mod rig;
mod sink;
mod types;

pub use feed::{FeedError, TargetFeed};
pub use overlay::{render_target_overlay, OverlayStyle};
pub use rig::{Arm, ArmError, GateError, OperatorGate};
pub use sink::{RecordSink, SinkError};
pub use types::{CorrespondenceRecord, MarkerTarget, Orientation, Pose, RecordPair};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
