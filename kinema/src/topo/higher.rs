//! Three-link mechanisms closed by a higher pair (cam contact or pin in a
//! slot).
use super::Kinematics;
use crate::{Frame, Joint, Link, Mobility, Point, Pose, Poses};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_3};

/// Plate cam with a translating follower.
///
/// The eccentric cam rotates on `J1`. The follower contact `J2` rides up and
/// down the vertical guide `J3`.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct CamFollower {
    /// Cam shaft
    pub a: Point,
    /// Base circle radius
    pub base: f64,
    /// Eccentricity of the cam profile
    pub eccentricity: f64,
}

impl Default for CamFollower {
    fn default() -> Self {
        Self { a: Point::new(300., 300.), base: 50., eccentricity: 30. }
    }
}

impl CamFollower {
    /// Follower lift at cam angle `t`.
    pub fn lift(&self, t: f64) -> f64 {
        self.eccentricity * (t - FRAC_PI_2).sin()
    }
}

impl Kinematics for CamFollower {
    fn name(&self) -> &'static str {
        "Plate Cam & Follower"
    }

    fn description(&self) -> &'static str {
        "A higher-pair mechanism with 1 degree of freedom."
    }

    fn mobility(&self) -> Mobility {
        Mobility::planar(3, 3, 4, 1)
    }

    fn layout(&self) -> (Vec<Joint>, Vec<Link>) {
        let Self { a, base, eccentricity } = *self;
        let joints = vec![
            Joint::revolute("J1", a).ground().driver().with_orientation(0.),
            Joint::cam("J2", Point::new(a.x, a.y - base - eccentricity)),
            Joint::prismatic("J3", Point::new(a.x, a.y - 150.), FRAC_PI_2).ground(),
        ];
        (joints, triad_links(["J2", "J3"]))
    }

    fn pos(&self, t: f64, frame: &Frame) -> Option<Poses> {
        let j1 = frame.get("J1");
        let y = j1.y - self.base - self.eccentricity - self.lift(t);
        let mut poses = Poses::with_capacity(2);
        poses
            .set("J1", Pose::new(j1).orient(t))
            .set("J2", Point::new(j1.x, y));
        Some(poses)
    }
}

/// Scotch yoke: the crank pin slides in a vertical slot of a yoke that
/// translates horizontally, giving simple harmonic motion.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct ScotchYoke {
    /// Crank pivot
    pub a: Point,
    /// Length of the crank
    pub crank: f64,
}

impl Default for ScotchYoke {
    fn default() -> Self {
        Self { a: Point::new(200., 250.), crank: 80. }
    }
}

impl Kinematics for ScotchYoke {
    fn name(&self) -> &'static str {
        "Scotch Yoke"
    }

    fn description(&self) -> &'static str {
        "Contains a Pin-in-Slot joint (Higher Pair, f=2). Converts rotation to SHM."
    }

    fn mobility(&self) -> Mobility {
        Mobility::planar(3, 3, 4, 1)
    }

    fn layout(&self) -> (Vec<Joint>, Vec<Link>) {
        let Self { a, crank } = *self;
        let joints = vec![
            Joint::revolute("J1", a).ground().driver(),
            Joint::pin_in_slot("J2", Point::new(a.x + crank, a.y)).with_orientation(FRAC_PI_2),
            Joint::prismatic("J3", Point::new(a.x + crank + 100., a.y), 0.).ground(),
        ];
        (joints, triad_links(["J2", "J3"]))
    }

    fn pos(&self, t: f64, frame: &Frame) -> Option<Poses> {
        let pin = frame.get("J1").pla(self.crank, t);
        let yoke = Point::new(pin.x, frame.get("J3").y);
        let mut poses = Poses::with_capacity(2);
        poses.set("J2", pin).set("J3", yoke);
        Some(poses)
    }
}

/// Folding chair: the backrest pin rides in a slot of the seat.
///
/// Joints: `J1` backrest pivot (driver), `J2` pin in the seat slot, `J3`
/// seat pivot.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct FoldingChair {
    /// Backrest pivot
    pub backrest: Point,
    /// Seat pivot
    pub seat: Point,
    /// Distance from the backrest pivot to the pin
    pub pin_dist: f64,
}

impl Default for FoldingChair {
    fn default() -> Self {
        Self {
            backrest: Point::new(200., 400.),
            seat: Point::new(350., 400.),
            pin_dist: 150.,
        }
    }
}

impl FoldingChair {
    /// Backrest angle, oscillating like a chair being folded.
    pub fn backrest_angle(t: f64) -> f64 {
        -FRAC_PI_3 + 0.5 * t.sin()
    }
}

impl Kinematics for FoldingChair {
    fn name(&self) -> &'static str {
        "Folding Chair (Prob 1.6)"
    }

    fn description(&self) -> &'static str {
        "3-link mechanism with Pin-in-Slot joint (f=2). n=3, j=3, sum(fi)=4, M=1."
    }

    fn mobility(&self) -> Mobility {
        Mobility::planar(3, 3, 4, 1)
    }

    fn layout(&self) -> (Vec<Joint>, Vec<Link>) {
        let Self { backrest, seat, pin_dist } = *self;
        let joints = vec![
            Joint::revolute("J1", backrest).ground().driver(),
            Joint::pin_in_slot("J2", Point::new(backrest.x, backrest.y - pin_dist)),
            Joint::revolute("J3", seat).ground(),
        ];
        (joints, triad_links(["J3", "J2"]))
    }

    fn pos(&self, t: f64, frame: &Frame) -> Option<Poses> {
        let pin = frame.get("J1").pla(self.pin_dist, Self::backrest_angle(t));
        // The slot lies along the seat
        let seat = frame.get("J3").angle_to(pin);
        let mut poses = Poses::with_capacity(1);
        poses.set("J2", Pose::new(pin).orient(seat));
        Some(poses)
    }
}

/// Slotted-link quick return: the crank pin slides in a slotted lever that
/// swings about its own ground pivot.
///
/// `J4` is the free tip of the lever. It is kept for drawing and is not a
/// kinematic pair.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct QuickReturn {
    /// Crank pivot
    pub a: Point,
    /// Lever pivot
    pub b: Point,
    /// Length of the crank
    pub crank: f64,
    /// Length of the lever
    pub lever: f64,
}

impl Default for QuickReturn {
    fn default() -> Self {
        Self {
            a: Point::new(250., 300.),
            b: Point::new(250., 200.),
            crank: 60.,
            lever: 200.,
        }
    }
}

impl Kinematics for QuickReturn {
    fn name(&self) -> &'static str {
        "Slotted Link Quick Return"
    }

    fn description(&self) -> &'static str {
        "Pin-in-Slot joint (f=2) produces quick return motion. Note: Tip of lever is free end."
    }

    fn mobility(&self) -> Mobility {
        Mobility::planar(3, 3, 4, 1)
    }

    fn layout(&self) -> (Vec<Joint>, Vec<Link>) {
        let Self { a, b, crank, lever } = *self;
        let joints = vec![
            Joint::revolute("J1", a).ground().driver(),
            Joint::pin_in_slot("J2", Point::new(a.x + crank, a.y)),
            Joint::revolute("J3", b).ground(),
            Joint::revolute("J4", Point::new(b.x + lever, b.y)).with_connectivity(0),
        ];
        let links = vec![
            Link::ground("L1", ["J1", "J3"]),
            Link::new("L2", ["J1", "J2"]),
            Link::new("L3", ["J3", "J2", "J4"]),
        ];
        (joints, links)
    }

    fn pos(&self, t: f64, frame: &Frame) -> Option<Poses> {
        let j3 = frame.get("J3");
        let pin = frame.get("J1").pla(self.crank, t);
        let lever = j3.angle_to(pin);
        let mut poses = Poses::with_capacity(2);
        poses
            .set("J2", Pose::new(pin).orient(lever))
            .set("J4", j3.pla(self.lever, lever));
        Some(poses)
    }
}

fn triad_links(l3: [&str; 2]) -> Vec<Link> {
    vec![
        Link::ground("L1", ["J1", "J3"]),
        Link::new("L2", ["J1", "J2"]),
        Link::new("L3", l3),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{topo::Topology, Mechanism};
    use approx::assert_abs_diff_eq;

    #[test]
    fn scotch_yoke_scenario() {
        let mut m = Mechanism::new(ScotchYoke::default());
        assert!(m.step(FRAC_PI_2));
        let j2 = m.joint("J2").unwrap();
        let j3 = m.joint("J3").unwrap();
        assert_abs_diff_eq!(j2.pos.x, 200., epsilon = 1e-9);
        assert_abs_diff_eq!(j2.pos.y, 330., epsilon = 1e-9);
        assert_abs_diff_eq!(j3.pos.x, 200., epsilon = 1e-9);
        assert_eq!(j3.pos.y, 250.);
        assert_eq!(j2.orientation, Some(FRAC_PI_2));
    }

    #[test]
    fn cam_lift() {
        let cam = CamFollower::default();
        let mut m = Mechanism::new(cam.clone());
        // Lowest at zero, highest half a turn later
        assert_abs_diff_eq!(m.joint("J2").unwrap().pos.y, 250., epsilon = 1e-9);
        assert!(m.step(std::f64::consts::PI));
        assert_abs_diff_eq!(m.joint("J2").unwrap().pos.y, 190., epsilon = 1e-9);
        assert_eq!(m.joint("J1").unwrap().orientation, Some(std::f64::consts::PI));
        assert_eq!(m.joint("J1").unwrap().pos, cam.a);
    }

    #[test]
    fn quick_return_lever() {
        let qr = QuickReturn::default();
        let mut m = Mechanism::new(qr.clone());
        for i in 0..24 {
            assert!(m.step(i as f64 * 0.26));
            let j2 = m.joint("J2").unwrap();
            let tip = m.joint("J4").unwrap().pos;
            assert_abs_diff_eq!(qr.b.dist(tip), qr.lever, epsilon = 1e-9);
            let a = j2.orientation.unwrap();
            assert_abs_diff_eq!(qr.b.angle_to(tip), a, epsilon = 1e-9);
            assert_abs_diff_eq!(qr.b.angle_to(j2.pos), a, epsilon = 1e-12);
        }
    }

    #[test]
    fn chair_slot_orientation() {
        let chair = FoldingChair::default();
        let m = Mechanism::new(chair.clone());
        let j2 = m.joint("J2").unwrap();
        assert_abs_diff_eq!(chair.backrest.dist(j2.pos), chair.pin_dist, epsilon = 1e-9);
        assert_abs_diff_eq!(
            j2.orientation.unwrap(),
            chair.seat.angle_to(j2.pos),
            epsilon = 1e-12
        );
    }

    #[test]
    fn triad_l3_order() {
        let l3 = |topo: Topology| topo.layout().1[2].joints.clone();
        assert_eq!(l3(CamFollower::default().into()), ["J2", "J3"]);
        assert_eq!(l3(ScotchYoke::default().into()), ["J2", "J3"]);
        assert_eq!(l3(FoldingChair::default().into()), ["J3", "J2"]);
    }
}
