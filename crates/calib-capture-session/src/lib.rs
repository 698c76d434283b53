//! Human-in-the-loop session controller for dual-arm calibration capture.
//!
//! The controller drives one full pass over a target feed: for every
//! marker, each arm in turn is presented to the operator, sampled on
//! acknowledgment, and sent home, and the resulting record pair is
//! durably appended before the next target begins.

mod controller;

pub use controller::{run_session, SessionError, SessionSummary};
