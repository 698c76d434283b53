//! Console operator gate.
//!
//! Presents each calibration view by writing it out as a PNG and reads
//! acknowledgments from stdin. `AckMode::Auto` skips the wait so scripted
//! rehearsals can run unattended.

use std::io::BufRead;
use std::path::PathBuf;

use clap::ValueEnum;
use image::RgbImage;

use calib_capture_core::{GateError, OperatorGate};

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum AckMode {
    /// Wait for Enter on stdin before sampling.
    Enter,
    /// Acknowledge immediately (unattended rehearsals).
    Auto,
}

pub struct ConsoleGate {
    preview_dir: PathBuf,
    mode: AckMode,
    shown: usize,
}

impl ConsoleGate {
    pub fn new(preview_dir: PathBuf, mode: AckMode) -> Self {
        Self {
            preview_dir,
            mode,
            shown: 0,
        }
    }
}

impl OperatorGate for ConsoleGate {
    fn present(&mut self, view: &RgbImage) -> Result<(), GateError> {
        let path = self.preview_dir.join(format!("view_{:03}.png", self.shown));
        view.save(&path).map_err(|err| GateError::Present {
            reason: format!("could not write {}: {err}", path.display()),
        })?;
        self.shown += 1;
        log::info!("calibration view written to {}", path.display());
        Ok(())
    }

    fn wait_for_ack(&mut self) -> Result<(), GateError> {
        match self.mode {
            AckMode::Auto => Ok(()),
            AckMode::Enter => {
                eprintln!("move the arm over the marked target, then press Enter");
                let mut line = String::new();
                let read = std::io::stdin()
                    .lock()
                    .read_line(&mut line)
                    .map_err(|err| GateError::Acknowledge {
                        reason: err.to_string(),
                    })?;
                if read == 0 {
                    return Err(GateError::Acknowledge {
                        reason: "stdin closed".into(),
                    });
                }
                Ok(())
            }
        }
    }
}
