use crate::{topo::*, *};
use std::f64::consts::TAU;

fn topologies() -> impl Iterator<Item = Topology> {
    (0..Topology::COUNT).map(|i| Topology::nth(i).unwrap())
}

fn pos(joints: &[Joint], id: &str) -> Point {
    joints.iter().find(|j| j.id == id).unwrap().pos
}

/// Joint pairs carried rigidly by the same moving link.
///
/// A pair is skipped when it goes through a moving interface: a higher pair
/// (cam or pin in slot) or a prismatic joint on the link that guides it.
fn rigid_pairs(m: &Mechanism) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for link in m.links.iter().filter(|l| !l.ground) {
        let sliding = |id: &String| match m.joint(id).unwrap().kind {
            JointKind::Cam | JointKind::PinInSlot => true,
            JointKind::Prismatic => link.guide,
            JointKind::Revolute => false,
        };
        let js = link.joints.iter().filter(|id| !sliding(*id)).collect::<Vec<_>>();
        for (i, a) in js.iter().enumerate() {
            for b in &js[i + 1..] {
                pairs.push(((*a).clone(), (*b).clone()));
            }
        }
    }
    pairs
}

#[test]
fn rigid_lengths() {
    for topo in topologies() {
        let mut m = Mechanism::new(topo);
        let pairs = rigid_pairs(&m);
        let lens = pairs
            .iter()
            .map(|(a, b)| pos(&m.joints, a).dist(pos(&m.joints, b)))
            .collect::<Vec<_>>();
        for i in 0..120 {
            m.step(i as f64 / 120. * TAU);
            for ((a, b), len) in pairs.iter().zip(&lens) {
                let d = pos(&m.joints, a).dist(pos(&m.joints, b));
                let tol = 1e-6 * len.max(1.);
                assert!((d - len).abs() < tol, "{}: {a}-{b} {d} != {len}", m.name);
            }
        }
    }
}

#[test]
fn piston_rod_checked() {
    let m = Mechanism::new(HydraulicLift::default());
    let pairs = rigid_pairs(&m);
    let has = |a: &str, b: &str| pairs.iter().any(|(x, y)| x == a && y == b);
    assert!(has("J3", "J4"));
    assert!(!has("J2", "J3"));
    assert!(has("J1", "J4"));
}

#[test]
fn ground_stays() {
    for topo in topologies() {
        let (layout, _) = topo.layout();
        let mut m = Mechanism::new(topo);
        for i in 0..120 {
            m.step(i as f64 / 120. * TAU);
            for j in layout.iter().filter(|j| j.ground) {
                let p = pos(&m.joints, &j.id);
                match j.slide_axis {
                    // Only along the slide line
                    Some(a) => {
                        let off = (p.x - j.pos.x) * a.sin() - (p.y - j.pos.y) * a.cos();
                        assert!(off.abs() < 1e-6, "{}: {} left its line", m.name, j.id);
                    }
                    None => assert_eq!(p, j.pos, "{}: {} moved", m.name, j.id),
                }
            }
        }
    }
}

#[test]
fn mobility_records() {
    assert_eq!(Topology::COUNT, 14);
    for topo in topologies() {
        let m = Mechanism::new(topo);
        let mob = m.mobility;
        assert!(mob.is_consistent(), "{}: {mob}", m.name);
        assert_eq!(mob.space, Space::Planar);
        assert_eq!(m.links.len() as i32, mob.n, "{}", m.name);
        assert_eq!(m.links.iter().filter(|l| l.ground).count(), 1, "{}", m.name);
        let pairs = m.joints.iter().filter(|j| j.is_pair());
        assert_eq!(pairs.count() as i32, mob.j, "{}", m.name);
        let sum_fi = m.joints.iter().map(|j| j.connectivity as i32).sum::<i32>();
        assert_eq!(sum_fi, mob.sum_fi, "{}", m.name);
        assert_eq!(m.joints.iter().filter(|j| j.driver).count(), 1, "{}", m.name);
    }
}

#[test]
fn assembled_at_zero() {
    for topo in topologies() {
        let (layout, _) = topo.layout();
        let m = Mechanism::new(topo);
        assert!(m.joints.iter().all(|j| j.pos.is_finite()), "{}", m.name);
        // Solving the assembled frame again changes nothing
        assert_eq!(m.solve(0., &m.joints), m.joints, "{}", m.name);
        assert_eq!(m.joints.len(), layout.len());
    }
}

#[test]
fn solve_is_pure() {
    for topo in topologies() {
        let m = Mechanism::new(topo);
        let held = m.joints.clone();
        let a = m.solve(1.3, &held);
        let b = m.solve(1.3, &held);
        assert_eq!(a, b, "{}", m.name);
        assert_eq!(m.joints, held);
    }
}

#[test]
fn coincident_pin() {
    let mut m = Mechanism::new(CoincidentSixBar::default());
    for i in 0..120 {
        if m.step(i as f64 / 120. * TAU) {
            let pin = pos(&m.joints, "J6");
            assert_eq!(pos(&m.joints, "J5"), pin);
            assert_eq!(pos(&m.joints, "J7"), pin);
        }
    }
}

#[test]
fn curve_leaves_mechanism() {
    let m = Mechanism::new(FourBar::default());
    let joints = m.joints.clone();
    // Not a Grashof crank, so part of the turn is unreachable
    let curve = m.curve("J3", 180);
    assert!(!curve.is_empty() && curve.len() < 180);
    assert_eq!(m.joints, joints);
    assert_eq!(curve[0], pos(&joints, "J3"));
    assert!(m.curve("J9", 10).is_empty());
}

#[cfg(feature = "serde")]
#[test]
fn serde_mechanism() {
    for topo in topologies() {
        let m = Mechanism::new(topo);
        let s = ron::to_string(&m).unwrap();
        let back = ron::from_str::<Mechanism>(&s).unwrap();
        assert_eq!(back, m);
        assert_eq!(back.solve(0.5, &back.joints), m.solve(0.5, &m.joints));
    }
}
