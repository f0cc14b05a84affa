//! Six-bar linkages, solved as two chained loops.
use super::Kinematics;
use crate::{kernel, Frame, Joint, Link, Mobility, Point, Poses};
use std::f64::consts::FRAC_PI_2;

/// Watt II six-bar: two four-bar loops in series sharing a ternary rocker
/// pivoted on the ground.
///
/// Joints: `J1`, `J4` and `J7` are ground pivots. `J5` is carried by the
/// ternary link `L4` together with `J3` and `J4`.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct WattSixBar {
    /// Crank pivot
    pub a: Point,
    /// Ternary link pivot
    pub b: Point,
    /// Output rocker pivot
    pub c: Point,
    /// Length of the crank
    pub crank: f64,
    /// Length of the first coupler
    pub coupler: f64,
    /// Distance from `J4` to `J3` on the ternary link
    pub rocker: f64,
    /// Distance from `J4` to `J5` on the ternary link
    pub tern_len: f64,
    /// Angle of `J5` from the `J4`-`J3` line
    pub tern_angle: f64,
    /// Length of the second coupler
    pub coupler2: f64,
    /// Length of the output rocker
    pub rocker2: f64,
}

impl Default for WattSixBar {
    fn default() -> Self {
        Self {
            a: Point::new(100., 300.),
            b: Point::new(250., 300.),
            c: Point::new(400., 300.),
            crank: 50.,
            coupler: 140.,
            rocker: 80.,
            tern_len: 70.,
            tern_angle: 1.,
            coupler2: 140.,
            rocker2: 80.,
        }
    }
}

impl Kinematics for WattSixBar {
    fn name(&self) -> &'static str {
        "Watt II Six-Bar Linkage"
    }

    fn description(&self) -> &'static str {
        "Two four-bar linkages in series. Includes a ternary link (yellow) pivoting on ground."
    }

    fn mobility(&self) -> Mobility {
        Mobility::planar(6, 7, 7, 1)
    }

    fn layout(&self) -> (Vec<Joint>, Vec<Link>) {
        let Self { a, b, c, crank, rocker, rocker2, .. } = *self;
        let joints = vec![
            Joint::revolute("J1", a).ground().driver(),
            Joint::revolute("J2", Point::new(a.x, a.y - crank)),
            Joint::revolute("J3", Point::new(b.x, b.y - rocker)),
            Joint::revolute("J4", b).ground(),
            Joint::revolute("J5", Point::new(b.x + 10., b.y - 50.)),
            Joint::revolute("J6", Point::new(c.x, c.y - rocker2)),
            Joint::revolute("J7", c).ground(),
        ];
        let links = vec![
            Link::ground("L1", ["J1", "J4", "J7"]),
            Link::new("L2", ["J1", "J2"]),
            Link::new("L3", ["J2", "J3"]),
            Link::new("L4", ["J4", "J3", "J5"]),
            Link::new("L5", ["J5", "J6"]),
            Link::new("L6", ["J6", "J7"]),
        ];
        (joints, links)
    }

    fn pos(&self, t: f64, frame: &Frame) -> Option<Poses> {
        let j4 = frame.get("J4");
        let j2 = frame.get("J1").pla(self.crank, t);
        let j3 = kernel::intersect(j2, self.coupler, j4, self.rocker, true)?;
        let j5 = kernel::rigid_point(j4, j3, Point::origin().pla(self.tern_len, self.tern_angle));
        let j6 = kernel::intersect(j5, self.coupler2, frame.get("J7"), self.rocker2, true)?;
        let mut poses = Poses::with_capacity(4);
        poses.set("J2", j2).set("J3", j3).set("J5", j5).set("J6", j6);
        Some(poses)
    }
}

/// Stephenson III six-bar: the ternary link is the floating coupler of the
/// first loop and drives the second dyad.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct StephensonSixBar {
    /// Crank pivot
    pub a: Point,
    /// Rocker pivot
    pub b: Point,
    /// Output rocker pivot
    pub c: Point,
    /// Length of the crank
    pub crank: f64,
    /// Distance from `J2` to `J3` on the ternary coupler
    pub coupler: f64,
    /// Length of the rocker
    pub rocker: f64,
    /// Distance from `J2` to `J5` on the ternary coupler
    pub tern_len: f64,
    /// Angle of `J5` from the `J2`-`J3` line
    pub tern_angle: f64,
    /// Length of the second coupler
    pub coupler2: f64,
    /// Length of the output rocker
    pub rocker2: f64,
}

impl Default for StephensonSixBar {
    fn default() -> Self {
        Self {
            a: Point::new(150., 300.),
            b: Point::new(350., 300.),
            c: Point::new(500., 200.),
            crank: 60.,
            coupler: 220.,
            rocker: 120.,
            tern_len: 100.,
            tern_angle: -0.5,
            coupler2: 180.,
            rocker2: 100.,
        }
    }
}

impl Kinematics for StephensonSixBar {
    fn name(&self) -> &'static str {
        "Stephenson III Six-Bar"
    }

    fn description(&self) -> &'static str {
        "A 6-bar linkage where the ternary link (yellow) is a floating coupler."
    }

    fn mobility(&self) -> Mobility {
        Mobility::planar(6, 7, 7, 1)
    }

    fn layout(&self) -> (Vec<Joint>, Vec<Link>) {
        let Self { a, b, c, crank, rocker, rocker2, .. } = *self;
        let joints = vec![
            Joint::revolute("J1", a).ground().driver(),
            Joint::revolute("J2", Point::new(a.x, a.y - crank)),
            Joint::revolute("J3", Point::new(b.x, b.y - rocker)),
            Joint::revolute("J4", b).ground(),
            Joint::revolute("J5", Point::new(a.x + 100., a.y - 150.)),
            Joint::revolute("J6", Point::new(c.x, c.y - rocker2)),
            Joint::revolute("J7", c).ground(),
        ];
        let links = vec![
            Link::ground("L1", ["J1", "J4", "J7"]),
            Link::new("L2", ["J1", "J2"]),
            Link::new("L3", ["J2", "J3", "J5"]),
            Link::new("L4", ["J3", "J4"]),
            Link::new("L5", ["J5", "J6"]),
            Link::new("L6", ["J6", "J7"]),
        ];
        (joints, links)
    }

    fn pos(&self, t: f64, frame: &Frame) -> Option<Poses> {
        let j2 = frame.get("J1").pla(self.crank, t);
        let j3 = kernel::intersect(j2, self.coupler, frame.get("J4"), self.rocker, true)?;
        let j5 = kernel::rigid_point(j2, j3, Point::origin().pla(self.tern_len, self.tern_angle));
        let j6 = kernel::intersect(j5, self.coupler2, frame.get("J7"), self.rocker2, true)?;
        let mut poses = Poses::with_capacity(4);
        poses.set("J2", j2).set("J3", j3).set("J5", j5).set("J6", j6);
        Some(poses)
    }
}

/// Two cranks driving a common vertical slider. The two rods and the slider
/// block meet at one pin, recorded as the coincident joints `J6` and `J7`.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct CoincidentSixBar {
    /// Driving crank pivot
    pub g1: Point,
    /// Following crank pivot
    pub g2: Point,
    /// X coordinate of the vertical slide line
    pub slider_x: f64,
    /// Length of both cranks
    pub crank: f64,
    /// Length of both rods
    pub rod: f64,
}

impl Default for CoincidentSixBar {
    fn default() -> Self {
        Self {
            g1: Point::new(150., 350.),
            g2: Point::new(450., 350.),
            slider_x: 300.,
            crank: 80.,
            rod: 220.,
        }
    }
}

impl Kinematics for CoincidentSixBar {
    fn name(&self) -> &'static str {
        "Coincident Joint 6-Bar"
    }

    fn description(&self) -> &'static str {
        "Two cranks driving a common slider. Note: 3 links meet at the slider pin (counts as 2 joints)."
    }

    fn mobility(&self) -> Mobility {
        Mobility::planar(6, 7, 7, 1)
    }

    fn layout(&self) -> (Vec<Joint>, Vec<Link>) {
        let Self { g1, g2, slider_x, crank, .. } = *self;
        let pin = Point::new(slider_x, 150.);
        let joints = vec![
            Joint::revolute("J1", g1).ground().driver(),
            Joint::revolute("J2", Point::new(g1.x, g1.y - crank)),
            Joint::revolute("J3", g2).ground(),
            Joint::revolute("J4", Point::new(g2.x, g2.y - crank)),
            Joint::prismatic("J5", pin, FRAC_PI_2).ground(),
            Joint::revolute("J6", pin),
            Joint::revolute("J7", pin),
        ];
        let links = vec![
            Link::ground("L1", ["J1", "J3", "J5"]),
            Link::new("L2", ["J1", "J2"]),
            Link::new("L3", ["J2", "J6"]),
            Link::new("L4", ["J3", "J4"]),
            Link::new("L5", ["J4", "J7"]),
            Link::new("L6", ["J5", "J6", "J7"]),
        ];
        (joints, links)
    }

    fn pos(&self, t: f64, frame: &Frame) -> Option<Poses> {
        let j2 = frame.get("J1").pla(self.crank, t);
        let line = Point::new(self.slider_x, 0.);
        // Single root: the pin is always taken below the crank.
        // Branch selection needs review for an upward assembly.
        let pin = kernel::intersect_line(j2, self.rod, line, FRAC_PI_2)?;
        let j4 = kernel::intersect(frame.get("J3"), self.crank, pin, self.rod, true)?;
        let mut poses = Poses::with_capacity(5);
        poses
            .set("J2", j2)
            .set("J4", j4)
            .set("J5", pin)
            .set("J6", pin)
            .set("J7", pin);
        Some(poses)
    }
}
