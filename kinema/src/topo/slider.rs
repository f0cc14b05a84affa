//! Slider mechanisms: one endpoint of the coupler is constrained to the slide
//! line of a prismatic joint.
use super::Kinematics;
use crate::{random::jitter, Frame, Joint, Link, Mobility, Point, Pose, Poses};
use rand::Rng;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_6};

/// Offset slider-crank with a horizontal slide line.
///
/// Joints: `J1` crank pivot (driver), `J2` crank pin, `J3` wrist pin,
/// `J4` slider block on the ground.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct SliderCrank {
    /// Crank pivot
    pub a: Point,
    /// Length of the crank
    pub crank: f64,
    /// Length of the connecting rod
    pub rod: f64,
    /// Height of the slide line above the crank pivot
    pub offset: f64,
}

impl Default for SliderCrank {
    fn default() -> Self {
        Self { a: Point::new(150., 250.), crank: 60., rod: 180., offset: 20. }
    }
}

impl SliderCrank {
    /// Jitter the pivot and offset and draw the link lengths from their
    /// ranges.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            a: Point::new(jitter(rng, 150., 20.), jitter(rng, 250., 20.)),
            crank: 60. + rng.gen::<f64>() * 20.,
            rod: 180. + rng.gen::<f64>() * 40.,
            offset: jitter(rng, 20., 30.),
        }
    }
}

impl Kinematics for SliderCrank {
    fn name(&self) -> &'static str {
        "Slider-Crank"
    }

    fn description(&self) -> &'static str {
        "Converts rotational motion into reciprocating linear motion."
    }

    fn mobility(&self) -> Mobility {
        Mobility::planar(4, 4, 4, 1)
    }

    fn layout(&self) -> (Vec<Joint>, Vec<Link>) {
        let Self { a, crank, offset, .. } = *self;
        let wrist = Point::new(a.x + 150., a.y - offset);
        let joints = vec![
            Joint::revolute("J1", a).ground().driver(),
            Joint::revolute("J2", Point::new(a.x, a.y - crank)),
            Joint::revolute("J3", wrist),
            Joint::prismatic("J4", wrist, 0.).ground(),
        ];
        (joints, slider_links())
    }

    fn pos(&self, t: f64, frame: &Frame) -> Option<Poses> {
        let j1 = frame.get("J1");
        let j2 = j1.pla(self.crank, t);
        let y = j1.y - self.offset;
        let dx = leg(self.rod, y - j2.y)?;
        let j3 = Point::new(j2.x + dx, y);
        let mut poses = Poses::with_capacity(3);
        poses.set("J2", j2).set("J3", j3).set("J4", j3);
        Some(poses)
    }
}

/// Vertical slider-crank of a water pump.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct WaterPump {
    /// Crank pivot
    pub a: Point,
    /// Length of the crank
    pub crank: f64,
    /// Length of the connecting rod
    pub rod: f64,
    /// X coordinate of the vertical piston line
    pub piston_x: f64,
}

impl Default for WaterPump {
    fn default() -> Self {
        Self { a: Point::new(250., 100.), crank: 60., rod: 220., piston_x: 250. }
    }
}

impl Kinematics for WaterPump {
    fn name(&self) -> &'static str {
        "Water Pump (Prob 1.6)"
    }

    fn description(&self) -> &'static str {
        "Vertical Slider-Crank mechanism. n=4, j=4, M=1."
    }

    fn mobility(&self) -> Mobility {
        Mobility::planar(4, 4, 4, 1)
    }

    fn layout(&self) -> (Vec<Joint>, Vec<Link>) {
        let Self { a, crank, piston_x, .. } = *self;
        let piston = Point::new(piston_x, a.y + 200.);
        let joints = vec![
            Joint::revolute("J1", a).ground().driver(),
            Joint::revolute("J2", Point::new(a.x + crank, a.y)),
            Joint::revolute("J3", piston),
            Joint::prismatic("J4", piston, FRAC_PI_2).ground(),
        ];
        (joints, slider_links())
    }

    fn pos(&self, t: f64, frame: &Frame) -> Option<Poses> {
        let j2 = frame.get("J1").pla(self.crank, t);
        // Solved directly on the piston line instead of `kernel::intersect_line`.
        // Only the downward root is taken; branch selection needs review if
        // the pump is ever assembled above the crank.
        let dy = leg(self.rod, self.piston_x - j2.x)?;
        let j3 = Point::new(self.piston_x, j2.y + dy);
        let mut poses = Poses::with_capacity(3);
        poses.set("J2", j2).set("J3", j3).set("J4", j3);
        Some(poses)
    }
}

/// Elliptical trainer: a slider-crank whose long pedal coupler rides a
/// horizontal track.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct EllipticalTrainer {
    /// Crank pivot
    pub a: Point,
    /// Y coordinate of the roller track
    pub track_y: f64,
    /// Length of the crank
    pub crank: f64,
    /// Length of the pedal coupler
    pub coupler: f64,
}

impl Default for EllipticalTrainer {
    fn default() -> Self {
        Self { a: Point::new(150., 350.), track_y: 400., crank: 50., coupler: 300. }
    }
}

impl Kinematics for EllipticalTrainer {
    fn name(&self) -> &'static str {
        "Elliptical Trainer (Prob 1.7)"
    }

    fn description(&self) -> &'static str {
        "Slider-Crank mechanism. Coupler (green) creates elliptical motion for foot."
    }

    fn mobility(&self) -> Mobility {
        Mobility::planar(4, 4, 4, 1)
    }

    fn layout(&self) -> (Vec<Joint>, Vec<Link>) {
        let Self { a, track_y, crank, .. } = *self;
        let roller = Point::new(a.x + 200., track_y);
        let joints = vec![
            Joint::revolute("J1", a).ground().driver(),
            Joint::revolute("J2", Point::new(a.x, a.y - crank)),
            Joint::revolute("J3", roller),
            Joint::prismatic("J4", roller, 0.).ground(),
        ];
        (joints, slider_links())
    }

    fn pos(&self, t: f64, frame: &Frame) -> Option<Poses> {
        let j2 = frame.get("J1").pla(self.crank, t);
        let dx = leg(self.coupler, self.track_y - j2.y)?;
        let j3 = Point::new(j2.x + dx, self.track_y);
        let mut poses = Poses::with_capacity(3);
        poses.set("J2", j2).set("J3", j3).set("J4", j3);
        Some(poses)
    }
}

/// Hydraulic lift: an inverted slider-crank where the cylinder body and the
/// piston rod are two links joined by a prismatic pair.
///
/// Joints: `J1` boom pivot, `J2` cylinder pivot, `J3` piston-cylinder slide,
/// `J4` piston-boom pin (driver).
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct HydraulicLift {
    /// Boom pivot
    pub boom_pivot: Point,
    /// Cylinder pivot
    pub cyl_pivot: Point,
    /// Distance from the boom pivot to the piston pin
    pub mount: f64,
    /// Length of the piston rod, from the slide to the piston pin
    pub rod: f64,
}

impl Default for HydraulicLift {
    fn default() -> Self {
        Self {
            boom_pivot: Point::new(400., 350.),
            cyl_pivot: Point::new(250., 350.),
            mount: 100.,
            rod: 70.,
        }
    }
}

impl HydraulicLift {
    /// Boom angle, oscillating around the raised position.
    pub fn boom_angle(t: f64) -> f64 {
        -FRAC_PI_2 - FRAC_PI_6 + 0.5 * t.sin()
    }
}

impl Kinematics for HydraulicLift {
    fn name(&self) -> &'static str {
        "Hydraulic Lift (Prob 1.12)"
    }

    fn description(&self) -> &'static str {
        "Inverted Slider-Crank (Cylinder). Piston/Cyl are 2 links. n=4, j=4 (3R, 1P)."
    }

    fn mobility(&self) -> Mobility {
        Mobility::planar(4, 4, 4, 1)
    }

    fn layout(&self) -> (Vec<Joint>, Vec<Link>) {
        let Self { boom_pivot, cyl_pivot, .. } = *self;
        let slide = Point::new(300., 300.);
        let joints = vec![
            Joint::revolute("J1", boom_pivot).ground(),
            Joint::revolute("J2", cyl_pivot).ground(),
            Joint::prismatic("J3", slide, cyl_pivot.angle_to(slide)),
            Joint::revolute("J4", Point::new(350., 250.)).driver(),
        ];
        let links = vec![
            Link::ground("L1", ["J1", "J2"]),
            Link::new("L2", ["J1", "J4"]),
            Link::new("L3", ["J2", "J3"]).guide(),
            Link::new("L4", ["J3", "J4"]),
        ];
        (joints, links)
    }

    fn pos(&self, t: f64, frame: &Frame) -> Option<Poses> {
        let j2 = frame.get("J2");
        let j4 = frame.get("J1").pla(self.mount, Self::boom_angle(t));
        // The piston bottoms out in the cylinder
        if j2.dist(j4) <= self.rod {
            return None;
        }
        let cyl = j2.angle_to(j4);
        let j3 = j4.pla(self.rod, j4.angle_to(j2));
        let mut poses = Poses::with_capacity(2);
        poses.set("J4", j4).set("J3", Pose::new(j3).slide(cyl));
        Some(poses)
    }
}

/// The other leg of a right triangle, or `None` if `hyp` is too short.
fn leg(hyp: f64, side: f64) -> Option<f64> {
    let sq = hyp * hyp - side * side;
    (sq >= 0.).then(|| sq.sqrt())
}

fn slider_links() -> Vec<Link> {
    vec![
        Link::ground("L1", ["J1", "J4"]),
        Link::new("L2", ["J1", "J2"]),
        Link::new("L3", ["J2", "J3"]),
        Link::new("L4", ["J3", "J4"]),
    ]
}
