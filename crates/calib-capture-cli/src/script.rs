//! Scripted arms for rehearsal runs.
//!
//! A rehearsal script carries the pose sequence each arm will report, so
//! the full capture flow can be exercised without a robot. Running out of
//! scripted poses surfaces as a pose-read failure, the same way a real
//! driver fault would.

use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use calib_capture_core::{Arm, ArmError, Pose};

#[derive(thiserror::Error, Debug)]
pub enum ScriptError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Pose sequences for both arms of a rehearsal run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RehearsalScript {
    pub arm1: Vec<Pose>,
    pub arm2: Vec<Pose>,
}

impl RehearsalScript {
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// An arm that replays a scripted pose sequence.
pub struct ScriptedArm {
    name: String,
    poses: VecDeque<Pose>,
}

impl ScriptedArm {
    pub fn new(name: impl Into<String>, poses: Vec<Pose>) -> Self {
        Self {
            name: name.into(),
            poses: poses.into(),
        }
    }
}

impl Arm for ScriptedArm {
    fn name(&self) -> &str {
        &self.name
    }

    fn home(&mut self) -> Result<(), ArmError> {
        log::debug!("{} homed (scripted)", self.name);
        Ok(())
    }

    fn current_pose(&mut self) -> Result<Pose, ArmError> {
        self.poses.pop_front().ok_or_else(|| ArmError::PoseRead {
            arm: self.name.clone(),
            reason: "rehearsal script exhausted".into(),
        })
    }
}
