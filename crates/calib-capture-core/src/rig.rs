//! Seams between the session controller and the physical rig.
//!
//! The robot driver and the display/key-wait primitives live outside this
//! repository. The controller only needs the capability set below; tests
//! and the rehearsal harness provide simulated implementations.

use image::RgbImage;

use crate::types::Pose;

/// Failures reported by a robot arm driver.
#[derive(thiserror::Error, Debug)]
pub enum ArmError {
    /// The arm could not reach its canonical rest pose.
    #[error("arm `{arm}` failed to reach home: {reason}")]
    Homing { arm: String, reason: String },

    /// The driver could not report a current pose.
    #[error("arm `{arm}` could not report a pose: {reason}")]
    PoseRead { arm: String, reason: String },
}

/// Failures reported by the operator display/acknowledgment gate.
#[derive(thiserror::Error, Debug)]
pub enum GateError {
    #[error("failed to present calibration view: {reason}")]
    Present { reason: String },

    #[error("acknowledgment channel failed: {reason}")]
    Acknowledge { reason: String },
}

/// One manipulator arm of the rig.
pub trait Arm {
    /// Driver-level arm name (e.g. `PSM1`), used in logs and errors.
    fn name(&self) -> &str;

    /// Move to the canonical rest pose, blocking until the motion
    /// completes.
    fn home(&mut self) -> Result<(), ArmError>;

    /// Read the current end-effector pose synchronously.
    fn current_pose(&mut self) -> Result<Pose, ArmError>;
}

/// The human-in-the-loop display gate.
///
/// `wait_for_ack` blocks indefinitely: there is no timeout, and exactly
/// one pose sample follows each acknowledgment.
pub trait OperatorGate {
    /// Show an annotated calibration view to the operator.
    fn present(&mut self, view: &RgbImage) -> Result<(), GateError>;

    /// Block until the operator signals that the arm is in position.
    fn wait_for_ack(&mut self) -> Result<(), GateError>;
}
