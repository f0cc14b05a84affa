use crate::{
    topo::{Kinematics, Topology},
    Frame, Joint, Link, Mobility, Point, TopologyError,
};
use std::{collections::HashSet, f64::consts::TAU};

/// A linkage mechanism: joints, links, authored mobility constants and an
/// optional position solver.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Mechanism {
    /// Display name
    pub name: String,
    /// Short description
    pub description: String,
    /// Joint records
    pub joints: Vec<Joint>,
    /// Link records
    pub links: Vec<Link>,
    /// Authored mobility constants
    pub mobility: Mobility,
    solver: Option<Topology>,
}

impl Mechanism {
    /// Build the mechanism of a topology, assembled at the zero driver
    /// parameter when that configuration is reachable.
    ///
    /// # Panics
    ///
    /// Panics if the topology's records are malformed.
    pub fn new(topo: impl Into<Topology>) -> Self {
        let topo = topo.into();
        let (joints, links) = topo.layout();
        let name = topo.name();
        let mut m = Self::from_parts(
            name,
            topo.description(),
            joints,
            links,
            topo.mobility(),
            Some(topo),
        )
        .unwrap_or_else(|e| panic!("malformed topology {name}: {e}"));
        m.step(0.);
        m
    }

    /// Create from raw records, checking the references between them and
    /// that the solver only places joints in the records.
    pub fn from_parts(
        name: impl Into<String>,
        description: impl Into<String>,
        joints: Vec<Joint>,
        links: Vec<Link>,
        mobility: Mobility,
        solver: Option<Topology>,
    ) -> Result<Self, TopologyError> {
        check_records(&joints, &links)?;
        if let Some(topo) = &solver {
            for j in topo.layout().0 {
                if !joints.iter().any(|k| k.id == j.id) {
                    let topology = topo.name().to_string();
                    return Err(TopologyError::MissingSolverJoint { topology, joint: j.id });
                }
            }
        }
        Ok(Self {
            name: name.into(),
            description: description.into(),
            joints,
            links,
            mobility,
            solver,
        })
    }

    /// The position solver, if any.
    pub fn solver(&self) -> Option<&Topology> {
        self.solver.as_ref()
    }

    /// Get a joint by id.
    pub fn joint(&self, id: &str) -> Option<&Joint> {
        self.joints.iter().find(|j| j.id == id)
    }

    /// Get a link by id.
    pub fn link(&self, id: &str) -> Option<&Link> {
        self.links.iter().find(|l| l.id == id)
    }

    /// The driver joint.
    pub fn driver(&self) -> Option<&Joint> {
        self.joints.iter().find(|j| j.driver)
    }

    /// Move the driver mark to another joint, as a joint-click handler.
    ///
    /// Nothing is re-solved. Returns false and leaves the mechanism unchanged
    /// if the joint does not exist.
    pub fn set_driver(&mut self, id: &str) -> bool {
        if self.joint(id).is_none() {
            return false;
        }
        for j in self.joints.iter_mut() {
            j.driver = j.id == id;
        }
        true
    }

    /// Solve the joints at driver parameter `t`.
    ///
    /// Returns `None` if the configuration is unreachable or there is no
    /// solver.
    pub fn try_solve(&self, t: f64, joints: &[Joint]) -> Option<Vec<Joint>> {
        let poses = self.solver.as_ref()?.pos(t, &Frame::new(joints))?;
        let mut joints = joints.to_vec();
        for j in joints.iter_mut() {
            if let Some(pose) = poses.get(&j.id) {
                j.apply(pose);
            }
        }
        Some(joints)
    }

    /// Solve the joints at driver parameter `t`.
    ///
    /// An unreachable configuration returns the input joints unchanged, so an
    /// animation holds its previous frame.
    pub fn solve(&self, t: f64, joints: &[Joint]) -> Vec<Joint> {
        self.try_solve(t, joints).unwrap_or_else(|| {
            log::trace!("{}: unreachable at t = {t:.4}, frame held", self.name);
            joints.to_vec()
        })
    }

    /// Solve in place. Returns false if the frame was held.
    pub fn step(&mut self, t: f64) -> bool {
        match self.try_solve(t, &self.joints) {
            Some(joints) => {
                self.joints = joints;
                true
            }
            None => {
                log::trace!("{}: unreachable at t = {t:.4}, frame held", self.name);
                false
            }
        }
    }

    /// Path of a joint over a full revolution of the driver, sampled at `res`
    /// points. Unreachable samples are skipped. The mechanism is not mutated.
    pub fn curve(&self, id: &str, res: usize) -> Vec<Point> {
        let step = TAU / res as f64;
        let mut joints = self.joints.clone();
        (0..res)
            .filter_map(|i| {
                joints = self.try_solve(i as f64 * step, &joints)?;
                joints.iter().find(|j| j.id == id).map(|j| j.pos)
            })
            .collect()
    }
}

fn check_records(joints: &[Joint], links: &[Link]) -> Result<(), TopologyError> {
    let mut ids = HashSet::with_capacity(joints.len());
    for j in joints {
        if !ids.insert(j.id.as_str()) {
            return Err(TopologyError::DuplicateJoint(j.id.clone()));
        }
    }
    let mut drivers = joints.iter().filter(|j| j.driver);
    if let (Some(a), Some(b)) = (drivers.next(), drivers.next()) {
        return Err(TopologyError::MultipleDrivers(a.id.clone(), b.id.clone()));
    }
    let mut link_ids = HashSet::with_capacity(links.len());
    for link in links {
        if !link_ids.insert(link.id.as_str()) {
            return Err(TopologyError::DuplicateLink(link.id.clone()));
        }
        if link.ty().is_none() {
            let len = link.joints.len();
            return Err(TopologyError::LinkArity { link: link.id.clone(), len });
        }
        if let Some(joint) = link.joints.iter().find(|id| !ids.contains(id.as_str())) {
            return Err(TopologyError::UnknownJoint {
                link: link.id.clone(),
                joint: joint.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::JointKind;

    fn two_joints() -> Vec<Joint> {
        vec![
            Joint::revolute("J1", Point::origin()).ground().driver(),
            Joint::revolute("J2", Point::new(1., 0.)),
        ]
    }

    #[test]
    fn malformed_records() {
        let mob = Mobility::planar(2, 1, 1, 1);
        let err = Mechanism::from_parts(
            "bad",
            "",
            two_joints(),
            vec![Link::new("L2", ["J1", "J3"])],
            mob,
            None,
        )
        .unwrap_err();
        assert_eq!(
            err,
            TopologyError::UnknownJoint { link: "L2".into(), joint: "J3".into() }
        );
        assert_eq!(err.to_string(), "link `L2` references unknown joint `J3`");

        let links = vec![Link::new("L2", ["J1"])];
        let err = Mechanism::from_parts("bad", "", two_joints(), links, mob, None).unwrap_err();
        assert_eq!(err, TopologyError::LinkArity { link: "L2".into(), len: 1 });

        let mut joints = two_joints();
        joints[1].driver = true;
        let err = Mechanism::from_parts("bad", "", joints, vec![], mob, None).unwrap_err();
        assert_eq!(err, TopologyError::MultipleDrivers("J1".into(), "J2".into()));

        let mut joints = two_joints();
        joints.push(Joint::new("J2", JointKind::Cam, Point::origin()));
        let err = Mechanism::from_parts("bad", "", joints, vec![], mob, None).unwrap_err();
        assert_eq!(err, TopologyError::DuplicateJoint("J2".into()));
    }

    #[test]
    fn solver_joints_checked() {
        let topo = Topology::from(crate::topo::FourBar::default());
        let (mut joints, links) = topo.layout();
        joints.retain(|j| j.id != "J3");
        let links = links
            .into_iter()
            .filter(|l| !l.joints.iter().any(|id| id == "J3"))
            .collect();
        let err = Mechanism::from_parts("cut", "", joints, links, topo.mobility(), Some(topo))
            .unwrap_err();
        let topology = "Four-Bar Linkage".to_string();
        assert_eq!(err, TopologyError::MissingSolverJoint { topology, joint: "J3".into() });
    }

    #[test]
    fn no_solver_holds() {
        let m = Mechanism::from_parts(
            "crank",
            "",
            two_joints(),
            vec![Link::new("L2", ["J1", "J2"])],
            Mobility::planar(2, 1, 1, 1),
            None,
        )
        .unwrap();
        assert_eq!(m.solve(1., &m.joints), m.joints);
        assert!(m.curve("J2", 10).is_empty());
    }

    #[test]
    fn driver_selection() {
        let mut m = Mechanism::from_parts(
            "crank",
            "",
            two_joints(),
            vec![Link::new("L2", ["J1", "J2"])],
            Mobility::planar(2, 1, 1, 1),
            None,
        )
        .unwrap();
        let joints = m.joints.clone();
        assert!(m.set_driver("J2"));
        assert_eq!(m.driver().map(|j| j.id.as_str()), Some("J2"));
        assert_eq!(m.joints.iter().filter(|j| j.driver).count(), 1);
        // Positions are untouched
        assert!(m.joints.iter().zip(&joints).all(|(a, b)| a.pos == b.pos));
        assert!(!m.set_driver("J9"));
        assert_eq!(m.driver().map(|j| j.id.as_str()), Some("J2"));
    }
}
