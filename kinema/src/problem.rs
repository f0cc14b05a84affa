//! Static textbook problems and learner answer checking.
//!
//! The problems carry no geometry to solve, only the authored mobility
//! constants a learner is asked to find.
//!
//! ```
//! use kinema::problem::{Answer, PROBLEMS};
//!
//! let pump = &PROBLEMS[0];
//! let answer = Answer::parse("4", "4", "4", "1").unwrap();
//! assert!(answer.check(&pump.mobility));
//! ```
use crate::{AnswerError, Mobility};

/// A static textbook problem.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Problem {
    /// Unique key
    pub id: &'static str,
    /// Display title
    pub title: &'static str,
    /// Task description
    pub description: &'static str,
    /// Expected answer
    pub mobility: Mobility,
}

macro_rules! problems {
    ($($id:literal, $title:literal, $desc:literal, $mob:expr;)+) => {
        /// The authored problem catalog.
        pub const PROBLEMS: [Problem; [$($id),+].len()] = [$(Problem {
            id: $id,
            title: $title,
            description: $desc,
            mobility: $mob,
        }),+];
    };
}

problems! {
    "prob_1_6_pump", "Problem 1.6 (Water Pump)",
    "A vertical water pump mechanism. Determine the mobility.",
    Mobility::planar(4, 4, 4, 1);
    "prob_1_6_chair", "Problem 1.6 (Folding Chair)",
    "Folding chair mechanism with a pin-in-slot joint.",
    Mobility::planar(3, 3, 4, 1);
    "prob_1_9", "Problem 1.9 (Excavator)",
    "Excavator mechanism. Treat hydraulic cylinders as sliders in tubes.",
    Mobility::planar(11, 14, 14, 2);
    "prob_1_13a", "Problem 1.13a (Pin in Slot)",
    "Mechanism with a pin-in-slot joint.",
    Mobility::planar(3, 3, 4, 1);
    "prob_1_17_loader", "Problem 1.17 (Loader)",
    "Front end loader linkage.",
    Mobility::planar(9, 11, 11, 2);
    "prob_1_19", "Problem 1.19 (Wedge)",
    "Rolling contact / Wedge mechanism.",
    Mobility::planar(4, 4, 4, 1);
    "prob_1_14c", "Problem 1.14c (12-bar)",
    "Complex 12-bar linkage.",
    Mobility::planar(12, 15, 15, 3);
    "prob_1_29_a", "Problem 1.29a (Spatial RSSR)",
    "Spatial RSSR Mechanism. 2 Ground Revolutes, Coupler with 2 Spherical joints. (Use K=6). Note: M includes idle DOF.",
    Mobility::spatial(4, 4, 8, 2);
    "prob_1_29_b", "Problem 1.29b (Spatial Slider)",
    "Spatial mechanism with slider. R-S-S-P loop. (Use K=6).",
    Mobility::spatial(4, 4, 8, 2);
}

/// Find a problem by id.
pub fn problem(id: &str) -> Option<&'static Problem> {
    PROBLEMS.iter().find(|p| p.id == id)
}

/// A learner's mobility answer.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Answer {
    /// Number of links
    pub n: i32,
    /// Number of joints
    pub j: i32,
    /// Sum of connectivities
    pub sum_fi: i32,
    /// Mobility
    pub m: i32,
}

impl Answer {
    /// Parse the four input fields.
    pub fn parse(n: &str, j: &str, sum_fi: &str, m: &str) -> Result<Self, AnswerError> {
        let field = |name: &'static str, s: &str| {
            s.trim()
                .parse()
                .map_err(|_| AnswerError::NotANumber { field: name, input: s.to_string() })
        };
        Ok(Self {
            n: field("n", n)?,
            j: field("j", j)?,
            sum_fi: field("sum_fi", sum_fi)?,
            m: field("m", m)?,
        })
    }

    /// Return true if all four values match the expected constants.
    pub fn check(&self, expect: &Mobility) -> bool {
        self.n == expect.n && self.j == expect.j && self.sum_fi == expect.sum_fi && self.m == expect.m
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Space;

    #[test]
    fn catalog_consistent() {
        assert_eq!(PROBLEMS.len(), 9);
        for p in &PROBLEMS {
            assert!(p.mobility.is_consistent(), "{}: {}", p.id, p.mobility);
        }
        let spatial = PROBLEMS.iter().filter(|p| p.mobility.space == Space::Spatial);
        assert_eq!(spatial.count(), 2);
        assert_eq!(problem("prob_1_9").map(|p| p.mobility.m), Some(2));
        assert!(problem("prob_0").is_none());
    }

    #[test]
    fn answers() {
        let excavator = problem("prob_1_9").unwrap();
        assert!(Answer::parse("11", " 14", "14 ", "2").unwrap().check(&excavator.mobility));
        assert!(!Answer::parse("11", "14", "14", "3").unwrap().check(&excavator.mobility));
        let err = Answer::parse("11", "x", "14", "2").unwrap_err();
        assert_eq!(err, AnswerError::NotANumber { field: "j", input: "x".into() });
    }
}
