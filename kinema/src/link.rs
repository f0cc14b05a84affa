/// Type of a link by the number of joints it carries.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum LinkTy {
    /// Two joints
    Binary,
    /// Three joints
    Ternary,
    /// Four joints
    Quaternary,
}

impl LinkTy {
    /// Detect from the number of joints.
    pub const fn from_len(n: usize) -> Option<Self> {
        match n {
            2 => Some(Self::Binary),
            3 => Some(Self::Ternary),
            4 => Some(Self::Quaternary),
            _ => None,
        }
    }
}

/// A rigid body connecting joints.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Link {
    /// Unique key in the mechanism
    pub id: String,
    /// Ordered joint ids
    pub joints: Vec<String>,
    /// The fixed frame
    pub ground: bool,
    /// Carries the slide way of its prismatic joints, so they move along it
    #[cfg_attr(feature = "serde", serde(default))]
    pub guide: bool,
}

impl Link {
    /// Create a moving link.
    pub fn new<S>(id: impl Into<String>, joints: impl IntoIterator<Item = S>) -> Self
    where
        S: Into<String>,
    {
        Self {
            id: id.into(),
            joints: joints.into_iter().map(Into::into).collect(),
            ground: false,
            guide: false,
        }
    }

    /// Create the ground link.
    pub fn ground<S>(id: impl Into<String>, joints: impl IntoIterator<Item = S>) -> Self
    where
        S: Into<String>,
    {
        Self { ground: true, ..Self::new(id, joints) }
    }

    /// Build as the guide of its prismatic joints.
    pub fn guide(self) -> Self {
        Self { guide: true, ..self }
    }

    /// Type of the link. Returns `None` for an unsupported joint count.
    pub fn ty(&self) -> Option<LinkTy> {
        LinkTy::from_len(self.joints.len())
    }

    /// Return true if the link carries the joint.
    pub fn contains(&self, id: &str) -> bool {
        self.joints.iter().any(|j| j == id)
    }
}
