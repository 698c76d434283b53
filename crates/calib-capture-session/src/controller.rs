use image::RgbImage;
use log::{debug, info};

use calib_capture_core::{
    render_target_overlay, Arm, ArmError, CorrespondenceRecord, GateError, MarkerTarget,
    OperatorGate, OverlayStyle, RecordPair, RecordSink, SinkError,
};

/// Errors that abort a calibration session.
///
/// Every failure here is fatal: the session stops where it is and must be
/// restarted from the beginning of the target feed. Pairs appended before
/// the failure remain in the sink; no pair is ever written for the target
/// that failed.
#[derive(thiserror::Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Arm(#[from] ArmError),

    #[error("operator gate failed at target {index}: {source}")]
    Gate {
        index: usize,
        #[source]
        source: GateError,
    },

    #[error("failed to persist record pair for target {index}: {source}")]
    Sink {
        index: usize,
        #[source]
        source: SinkError,
    },
}

/// Outcome of a completed session.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SessionSummary {
    /// Number of record pairs appended, one per target.
    pub pairs_appended: usize,
}

/// Drive one full calibration pass over `targets` with both arms.
///
/// Both arms are homed before the first target. Then, per target in feed
/// order, each arm in turn is walked through present → wait for operator
/// acknowledgment → sample pose → home, and the resulting record pair is
/// durably appended to `sink` before the next target begins. Both arms
/// are calibrated against the same displayed image coordinate.
///
/// Homing after every sample restores a known starting posture and keeps
/// the sampled arm from obstructing the operator's view of the next
/// target.
///
/// # Errors
///
/// Any homing, pose-read, gate, or store failure aborts the session (see
/// [`SessionError`]). There are no retries and no resume: pairs already
/// appended stay in the sink, and a rerun starts over from the first
/// target.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "info", skip_all, fields(targets = targets.len()))
)]
pub fn run_session<A1, A2, G, S>(
    targets: &[MarkerTarget],
    reference: &RgbImage,
    arm1: &mut A1,
    arm2: &mut A2,
    gate: &mut G,
    sink: &mut S,
) -> Result<SessionSummary, SessionError>
where
    A1: Arm,
    A2: Arm,
    G: OperatorGate,
    S: RecordSink,
{
    let style = OverlayStyle::default();

    info!(
        "starting capture session: {} targets, arms {} and {}",
        targets.len(),
        arm1.name(),
        arm2.name()
    );

    arm1.home()?;
    arm2.home()?;

    let mut pairs_appended = 0;
    for (index, target) in targets.iter().enumerate() {
        info!(
            "target {}/{} at ({}, {})",
            index + 1,
            targets.len(),
            target.image_x,
            target.image_y
        );

        let first = capture_arm_sample(index, target, reference, &style, arm1, gate)?;
        let second = capture_arm_sample(index, target, reference, &style, arm2, gate)?;

        let pair = RecordPair {
            arm1: first,
            arm2: second,
        };
        sink.append_pair(&pair)
            .map_err(|source| SessionError::Sink { index, source })?;
        pairs_appended += 1;
    }

    info!("capture session complete: {pairs_appended} record pairs");
    Ok(SessionSummary { pairs_appended })
}

/// Walk one arm through a single target: present the annotated view, wait
/// for the operator, sample the pose, and send the arm home.
fn capture_arm_sample<A, G>(
    index: usize,
    target: &MarkerTarget,
    reference: &RgbImage,
    style: &OverlayStyle,
    arm: &mut A,
    gate: &mut G,
) -> Result<CorrespondenceRecord, SessionError>
where
    A: Arm,
    G: OperatorGate,
{
    // Fresh overlay per arm, rendered and presented in the same step as
    // the sample so what the operator saw is what gets recorded.
    let view = render_target_overlay(reference, target, style);
    gate.present(&view)
        .map_err(|source| SessionError::Gate { index, source })?;
    gate.wait_for_ack()
        .map_err(|source| SessionError::Gate { index, source })?;

    let pose = arm.current_pose()?;
    debug!(
        "sampled {} at ({:.4}, {:.4}, {:.4})",
        arm.name(),
        pose.position.x,
        pose.position.y,
        pose.position.z
    );
    arm.home()?;

    Ok(CorrespondenceRecord::new(pose, target))
}
