//! Four-bar family: the coupler pin is closed by one circle-circle
//! intersection.
use super::Kinematics;
use crate::{kernel, random::jitter, Frame, Joint, Link, Mobility, Point, Poses};
use rand::Rng;

/// Crank-rocker four-bar linkage.
///
/// Joints: `J1` crank pivot (driver), `J2` crank pin, `J3` coupler-rocker
/// pin, `J4` rocker pivot.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct FourBar {
    /// Crank pivot
    pub a: Point,
    /// Rocker pivot
    pub d: Point,
    /// Length of the crank
    pub crank: f64,
    /// Length of the coupler
    pub coupler: f64,
    /// Length of the rocker
    pub rocker: f64,
}

impl Default for FourBar {
    fn default() -> Self {
        Self {
            a: Point::new(150., 300.),
            d: Point::new(450., 300.),
            crank: 60.,
            coupler: 200.,
            rocker: 150.,
        }
    }
}

impl FourBar {
    /// Jitter the pivots and draw the link lengths from their ranges.
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            a: Point::new(jitter(rng, 150., 20.), jitter(rng, 300., 20.)),
            d: Point::new(jitter(rng, 450., 20.), jitter(rng, 300., 20.)),
            crank: 60. + rng.gen::<f64>() * 20.,
            coupler: 200. + rng.gen::<f64>() * 50.,
            rocker: 150. + rng.gen::<f64>() * 50.,
        }
    }
}

impl Kinematics for FourBar {
    fn name(&self) -> &'static str {
        "Four-Bar Linkage"
    }

    fn description(&self) -> &'static str {
        "A fundamental planar linkage. All joints are Revolute (R) with 1 degree of freedom."
    }

    fn mobility(&self) -> Mobility {
        Mobility::planar(4, 4, 4, 1)
    }

    fn layout(&self) -> (Vec<Joint>, Vec<Link>) {
        let Self { a, d, crank, rocker, .. } = *self;
        let joints = vec![
            Joint::revolute("J1", a).ground().driver(),
            Joint::revolute("J2", Point::new(a.x, a.y - crank)),
            Joint::revolute("J3", Point::new(d.x, d.y - rocker)),
            Joint::revolute("J4", d).ground(),
        ];
        (joints, quad_links())
    }

    fn pos(&self, t: f64, frame: &Frame) -> Option<Poses> {
        let j1 = frame.get("J1");
        let j4 = frame.get("J4");
        let j2 = j1.pla(self.crank, t);
        let j3 = kernel::intersect(j2, self.coupler, j4, self.rocker, true)?;
        let mut poses = Poses::with_capacity(2);
        poses.set("J2", j2).set("J3", j3);
        Some(poses)
    }
}

/// Parallelogram linkage: crank and follower are equal and parallel, so the
/// coupler stays parallel to the ground.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Parallelogram {
    /// Crank pivot
    pub a: Point,
    /// Follower pivot
    pub d: Point,
    /// Length of the crank and the follower
    pub crank: f64,
}

impl Default for Parallelogram {
    fn default() -> Self {
        Self { a: Point::new(200., 300.), d: Point::new(400., 300.), crank: 100. }
    }
}

impl Kinematics for Parallelogram {
    fn name(&self) -> &'static str {
        "Parallelogram Linkage (Prob 1.5)"
    }

    fn description(&self) -> &'static str {
        "Parallel motion mechanism. Coupler stays parallel to ground."
    }

    fn mobility(&self) -> Mobility {
        Mobility::planar(4, 4, 4, 1)
    }

    fn layout(&self) -> (Vec<Joint>, Vec<Link>) {
        let Self { a, d, crank } = *self;
        let joints = vec![
            Joint::revolute("J1", a).ground().driver(),
            Joint::revolute("J2", Point::new(a.x, a.y - crank)),
            Joint::revolute("J3", Point::new(d.x, d.y - crank)),
            Joint::revolute("J4", d).ground(),
        ];
        (joints, quad_links())
    }

    fn pos(&self, t: f64, frame: &Frame) -> Option<Poses> {
        // The coupler translates, so both pins share the crank angle
        let mut poses = Poses::with_capacity(2);
        poses
            .set("J2", frame.get("J1").pla(self.crank, t))
            .set("J3", frame.get("J4").pla(self.crank, t));
        Some(poses)
    }
}

/// Watt straight-line linkage (cabinet hinge), a symmetric double rocker
/// whose coupler midpoint traces an approximate straight line.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct WattLinkage {
    /// Left rocker pivot
    pub a: Point,
    /// Right rocker pivot
    pub d: Point,
    /// Length of both rockers
    pub rocker: f64,
    /// Length of the coupler
    pub coupler: f64,
}

impl Default for WattLinkage {
    fn default() -> Self {
        Self {
            a: Point::new(150., 250.),
            d: Point::new(450., 250.),
            rocker: 120.,
            coupler: 100.,
        }
    }
}

impl WattLinkage {
    /// Input rocker angle, oscillating over a limited range.
    pub fn rocker_angle(t: f64) -> f64 {
        -0.5 + 0.8 * t.sin()
    }
}

impl Kinematics for WattLinkage {
    fn name(&self) -> &'static str {
        "Watt Straight Line (Prob 1.2)"
    }

    fn description(&self) -> &'static str {
        "Double-rocker mechanism used in cabinet hinges. Midpoint traces approx straight line."
    }

    fn mobility(&self) -> Mobility {
        Mobility::planar(4, 4, 4, 1)
    }

    fn layout(&self) -> (Vec<Joint>, Vec<Link>) {
        let Self { a, d, rocker, .. } = *self;
        let joints = vec![
            Joint::revolute("J1", a).ground().driver(),
            Joint::revolute("J2", Point::new(a.x + rocker, a.y)),
            Joint::revolute("J3", Point::new(d.x - rocker, d.y)),
            Joint::revolute("J4", d).ground(),
        ];
        (joints, quad_links())
    }

    fn pos(&self, t: f64, frame: &Frame) -> Option<Poses> {
        let j1 = frame.get("J1");
        let j4 = frame.get("J4");
        let j2 = j1.pla(self.rocker, Self::rocker_angle(t));
        // The crossed configuration is the first candidate
        let [j3, _] = kernel::intersections(j2, self.coupler, j4, self.rocker)?;
        let mut poses = Poses::with_capacity(2);
        poses.set("J2", j2).set("J3", j3);
        Some(poses)
    }
}

fn quad_links() -> Vec<Link> {
    vec![
        Link::ground("L1", ["J1", "J4"]),
        Link::new("L2", ["J1", "J2"]),
        Link::new("L3", ["J2", "J3"]),
        Link::new("L4", ["J3", "J4"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mechanism;
    use approx::assert_abs_diff_eq;

    #[test]
    fn four_bar_scenario() {
        let m = Mechanism::new(FourBar::default());
        let js = m.solve(0., &m.joints);
        let j2 = js[1].pos;
        let j3 = js[2].pos;
        assert_eq!(j2, Point::new(210., 300.));
        let expect =
            kernel::intersect(Point::new(210., 300.), 200., Point::new(450., 300.), 150., true)
                .unwrap();
        assert_eq!(j3, expect);
        assert!(j3.y < 300.);
        assert_abs_diff_eq!(j3.dist(j2), 200., epsilon = 1e-9);
        assert_abs_diff_eq!(j3.dist(Point::new(450., 300.)), 150., epsilon = 1e-9);
        // Re-solving is bit-identical
        let again = m.solve(0., &js);
        assert_eq!(again[2].pos, j3);
        assert_eq!(again, js);
    }

    #[test]
    fn four_bar_unreachable() {
        // The rocker cannot reach the crank pin when the crank points away
        let fb = FourBar { rocker: 80., coupler: 180., ..FourBar::default() };
        let mut m = Mechanism::new(fb);
        let held = m.joints.clone();
        assert_eq!(m.solve(std::f64::consts::PI, &held), held);
        assert!(!m.step(std::f64::consts::PI));
        assert_eq!(m.joints, held);
    }

    #[test]
    fn parallelogram_coupler_parallel() {
        let mut m = Mechanism::new(Parallelogram::default());
        for i in 0..36 {
            assert!(m.step(i as f64 * 0.17));
            let j2 = m.joint("J2").unwrap().pos;
            let j3 = m.joint("J3").unwrap().pos;
            assert_abs_diff_eq!(j2.y, j3.y, epsilon = 1e-9);
            assert_abs_diff_eq!(j3.x - j2.x, 200., epsilon = 1e-9);
        }
    }
}
