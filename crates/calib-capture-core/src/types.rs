use nalgebra::{Point2, Point3, Rotation3, UnitQuaternion};
use serde::{Deserialize, Serialize};

/// One physical marker to calibrate against.
///
/// Produced by the external contour-detection step; the session controller
/// treats it as immutable input and copies the center coordinate into
/// every record sampled against it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkerTarget {
    /// Marker-center pixel column in the reference image.
    pub image_x: i32,
    /// Marker-center pixel row in the reference image.
    pub image_y: i32,
    /// Marker outline, used for visual annotation only.
    pub boundary: Vec<Point2<f32>>,
    /// Arc length of the outline. Carried through, not consumed here.
    pub perimeter: f32,
}

/// Tait-Bryan angles of an end-effector, in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    pub yaw_deg: f64,
    pub pitch_deg: f64,
    pub roll_deg: f64,
}

impl Orientation {
    /// Derive yaw/pitch/roll degrees from a rotation matrix.
    pub fn from_rotation(rotation: &Rotation3<f64>) -> Self {
        let (roll, pitch, yaw) = rotation.euler_angles();
        Self {
            yaw_deg: yaw.to_degrees(),
            pitch_deg: pitch.to_degrees(),
            roll_deg: roll.to_degrees(),
        }
    }

    /// Derive yaw/pitch/roll degrees from a driver-reported quaternion.
    pub fn from_quaternion(rotation: &UnitQuaternion<f64>) -> Self {
        Self::from_rotation(&rotation.to_rotation_matrix())
    }
}

/// A robot arm's spatial state at a sampling instant.
///
/// Read synchronously from the driver when the operator acknowledges a
/// target; never cached or reused across targets.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// End-effector position in the robot's reference frame.
    pub position: Point3<f64>,
    pub orientation: Orientation,
}

impl Pose {
    pub fn new(position: Point3<f64>, orientation: Orientation) -> Self {
        Self {
            position,
            orientation,
        }
    }
}

/// One completed calibration sample: the pose an arm reached paired with
/// the image coordinate that was displayed to the operator.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CorrespondenceRecord {
    pub pose: Pose,
    pub image_x: i32,
    pub image_y: i32,
}

impl CorrespondenceRecord {
    /// Pair a sampled pose with the target it was sampled against.
    ///
    /// The image coordinate is copied verbatim from the target.
    pub fn new(pose: Pose, target: &MarkerTarget) -> Self {
        Self {
            pose,
            image_x: target.image_x,
            image_y: target.image_y,
        }
    }
}

/// Records for both arms at one target, in arm order.
///
/// Both records carry the same image coordinate: the arms are calibrated
/// against a single displayed view of the shared calibration surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordPair {
    pub arm1: CorrespondenceRecord,
    pub arm2: CorrespondenceRecord,
}
