use crate::Point;

/// Kinematic pair type of a joint.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum JointKind {
    /// Pin connection, one rotational DOF
    Revolute,
    /// Sliding connection along an axis, one translational DOF
    Prismatic,
    /// Rolling/sliding contact, two DOF
    Cam,
    /// Pin captured in a slot, two DOF
    PinInSlot,
}

impl std::fmt::Display for JointKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl JointKind {
    /// Connectivity `f_i` of the pair.
    pub const fn connectivity(&self) -> u8 {
        match self {
            Self::Revolute | Self::Prismatic => 1,
            Self::Cam | Self::PinInSlot => 2,
        }
    }

    /// Short symbol used in mechanism notation.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Revolute => "R",
            Self::Prismatic => "P",
            Self::Cam => "Cam",
            Self::PinInSlot => "PinSlot",
        }
    }

    /// Return true if the pair is a higher pair (line or point contact).
    pub const fn is_higher(&self) -> bool {
        matches!(self, Self::Cam | Self::PinInSlot)
    }
}

/// A kinematic pair instance.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Joint {
    /// Unique key in the mechanism
    pub id: String,
    /// Pair type
    pub kind: JointKind,
    /// Current position
    pub pos: Point,
    /// Fixed to the frame
    pub ground: bool,
    /// Degrees of freedom permitted by the pair (`f_i`)
    pub connectivity: u8,
    /// Local frame rotation of cams and slots
    pub orientation: Option<f64>,
    /// Slide direction of prismatic pairs
    pub slide_axis: Option<f64>,
    /// The externally actuated input
    pub driver: bool,
}

impl Joint {
    /// Create a joint with the default connectivity of its kind.
    pub fn new(id: impl Into<String>, kind: JointKind, pos: Point) -> Self {
        Self {
            id: id.into(),
            kind,
            pos,
            ground: false,
            connectivity: kind.connectivity(),
            orientation: None,
            slide_axis: None,
            driver: false,
        }
    }

    /// Create a revolute joint.
    pub fn revolute(id: impl Into<String>, pos: Point) -> Self {
        Self::new(id, JointKind::Revolute, pos)
    }

    /// Create a prismatic joint sliding along `axis`.
    pub fn prismatic(id: impl Into<String>, pos: Point, axis: f64) -> Self {
        Self::new(id, JointKind::Prismatic, pos).with_slide_axis(axis)
    }

    /// Create a cam joint.
    pub fn cam(id: impl Into<String>, pos: Point) -> Self {
        Self::new(id, JointKind::Cam, pos)
    }

    /// Create a pin-in-slot joint.
    pub fn pin_in_slot(id: impl Into<String>, pos: Point) -> Self {
        Self::new(id, JointKind::PinInSlot, pos)
    }

    /// Build as a ground joint.
    pub fn ground(self) -> Self {
        Self { ground: true, ..self }
    }

    /// Build as the driver joint.
    pub fn driver(self) -> Self {
        Self { driver: true, ..self }
    }

    /// Build with an overridden connectivity.
    pub fn with_connectivity(self, connectivity: u8) -> Self {
        Self { connectivity, ..self }
    }

    /// Build with an orientation.
    pub fn with_orientation(self, a: f64) -> Self {
        Self { orientation: Some(a), ..self }
    }

    /// Build with a slide axis.
    pub fn with_slide_axis(self, a: f64) -> Self {
        Self { slide_axis: Some(a), ..self }
    }

    /// Return true if the joint counts as a kinematic pair.
    pub fn is_pair(&self) -> bool {
        self.connectivity > 0
    }

    pub(crate) fn apply(&mut self, pose: &Pose) {
        self.pos = pose.pos;
        if let Some(a) = pose.orientation {
            self.orientation = Some(a);
        }
        if let Some(a) = pose.slide_axis {
            self.slide_axis = Some(a);
        }
    }
}

/// Solved position of a joint, with optional side outputs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pose {
    /// New position
    pub pos: Point,
    /// New orientation
    pub orientation: Option<f64>,
    /// New slide axis
    pub slide_axis: Option<f64>,
}

impl From<Point> for Pose {
    fn from(pos: Point) -> Self {
        Self::new(pos)
    }
}

impl Pose {
    /// Create a pose that only moves the joint.
    pub const fn new(pos: Point) -> Self {
        Self { pos, orientation: None, slide_axis: None }
    }

    /// Build with an orientation.
    pub const fn orient(self, a: f64) -> Self {
        Self { orientation: Some(a), ..self }
    }

    /// Build with a slide axis.
    pub const fn slide(self, a: f64) -> Self {
        Self { slide_axis: Some(a), ..self }
    }
}

/// Output of one solve step: the poses of the moved joints.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Poses(Vec<(&'static str, Pose)>);

impl Poses {
    /// Create an empty output with capacity.
    pub fn with_capacity(n: usize) -> Self {
        Self(Vec::with_capacity(n))
    }

    /// Set the pose of a joint.
    pub fn set(&mut self, id: &'static str, pose: impl Into<Pose>) -> &mut Self {
        let pose = pose.into();
        match self.0.iter_mut().find(|(k, _)| *k == id) {
            Some((_, p)) => *p = pose,
            None => self.0.push((id, pose)),
        }
        self
    }

    /// Get the pose of a joint.
    pub fn get(&self, id: &str) -> Option<&Pose> {
        self.0.iter().find(|(k, _)| *k == id).map(|(_, p)| p)
    }

    /// Iterate over the poses.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Pose)> {
        self.0.iter().map(|(k, p)| (*k, p))
    }

    /// Number of moved joints.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return true if nothing moved.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Read-only view of the current joints, used by the solvers to read
/// ground anchors.
#[derive(Copy, Clone)]
pub struct Frame<'a> {
    joints: &'a [Joint],
}

impl<'a> Frame<'a> {
    /// Create a frame over the joints.
    pub const fn new(joints: &'a [Joint]) -> Self {
        Self { joints }
    }

    /// Position of a joint.
    ///
    /// # Panics
    ///
    /// Panics if the joint is missing, which can only come from a malformed
    /// topology.
    pub fn get(&self, id: &str) -> Point {
        match self.joints.iter().find(|j| j.id == id) {
            Some(j) => j.pos,
            None => panic!("malformed topology: joint `{id}` is missing"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connectivity() {
        assert_eq!(Joint::revolute("J1", Point::origin()).connectivity, 1);
        assert_eq!(Joint::prismatic("J2", Point::origin(), 0.).connectivity, 1);
        assert_eq!(Joint::cam("J3", Point::origin()).connectivity, 2);
        let tip = Joint::revolute("J4", Point::origin()).with_connectivity(0);
        assert!(!tip.is_pair());
        assert!(JointKind::PinInSlot.is_higher());
        assert_eq!(JointKind::Prismatic.to_string(), "P");
    }

    #[test]
    fn poses_override() {
        let mut poses = Poses::default();
        poses
            .set("J2", Point::new(1., 2.))
            .set("J2", Pose::new(Point::new(3., 4.)).orient(0.5));
        assert_eq!(poses.len(), 1);
        let mut j = Joint::pin_in_slot("J2", Point::origin()).with_slide_axis(1.);
        j.apply(poses.get("J2").unwrap());
        assert_eq!(j.pos, Point::new(3., 4.));
        assert_eq!(j.orientation, Some(0.5));
        assert_eq!(j.slide_axis, Some(1.));
    }

    #[test]
    #[should_panic(expected = "joint `J9` is missing")]
    fn frame_missing_joint() {
        let joints = [Joint::revolute("J1", Point::origin())];
        Frame::new(&joints).get("J9");
    }
}
