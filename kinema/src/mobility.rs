/// Motion space of a mechanism, which decides the Gruebler constant.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default, Hash)]
pub enum Space {
    /// Planar linkage, `K = 3`
    #[default]
    Planar,
    /// Spatial linkage, `K = 6`
    Spatial,
}

impl Space {
    /// The Gruebler constant `K`.
    pub const fn k(&self) -> i32 {
        match self {
            Self::Planar => 3,
            Self::Spatial => 6,
        }
    }
}

/// Authored mobility constants of a mechanism.
///
/// These are never derived from geometry; [`Mobility::is_consistent()`] only
/// checks them against Gruebler's equation `M = K(N - J - 1) + Σf_i`.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Mobility {
    /// Number of links `N`, ground included
    pub n: i32,
    /// Number of joints `J`
    pub j: i32,
    /// Sum of joint connectivities `Σf_i`
    pub sum_fi: i32,
    /// Mobility `M`
    pub m: i32,
    /// Motion space
    pub space: Space,
}

impl std::fmt::Display for Mobility {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let Self { n, j, sum_fi, m, space } = self;
        write!(f, "M = {}({n} - {j} - 1) + {sum_fi} = {m}", space.k())
    }
}

impl Mobility {
    /// Planar mobility constants.
    pub const fn planar(n: i32, j: i32, sum_fi: i32, m: i32) -> Self {
        Self { n, j, sum_fi, m, space: Space::Planar }
    }

    /// Spatial mobility constants.
    pub const fn spatial(n: i32, j: i32, sum_fi: i32, m: i32) -> Self {
        Self { n, j, sum_fi, m, space: Space::Spatial }
    }

    /// Evaluate Gruebler's equation from `N`, `J` and `Σf_i`.
    pub const fn gruebler(&self) -> i32 {
        self.space.k() * (self.n - self.j - 1) + self.sum_fi
    }

    /// Return true if the authored `M` satisfies Gruebler's equation.
    pub const fn is_consistent(&self) -> bool {
        self.gruebler() == self.m
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gruebler() {
        let fb = Mobility::planar(4, 4, 4, 1);
        assert!(fb.is_consistent());
        assert_eq!(fb.to_string(), "M = 3(4 - 4 - 1) + 4 = 1");
        let rssr = Mobility::spatial(4, 4, 8, 2);
        assert_eq!(rssr.gruebler(), 2);
        assert!(!Mobility::planar(4, 4, 4, 2).is_consistent());
    }
}
