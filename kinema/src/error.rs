/// Authoring mistake in a mechanism's joint/link records.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    /// Two joints share an id
    #[error("duplicated joint `{0}`")]
    DuplicateJoint(String),
    /// Two links share an id
    #[error("duplicated link `{0}`")]
    DuplicateLink(String),
    /// A link references a joint that does not exist
    #[error("link `{link}` references unknown joint `{joint}`")]
    UnknownJoint {
        /// Link id
        link: String,
        /// Missing joint id
        joint: String,
    },
    /// A link does not carry 2, 3 or 4 joints
    #[error("link `{link}` carries {len} joints, expect 2 to 4")]
    LinkArity {
        /// Link id
        link: String,
        /// Number of joints
        len: usize,
    },
    /// More than one joint is marked as the driver
    #[error("more than one driver joint: `{0}` and `{1}`")]
    MultipleDrivers(String, String),
    /// The solver places a joint that the records lack
    #[error("solver of {topology} places missing joint `{joint}`")]
    MissingSolverJoint {
        /// Topology name
        topology: String,
        /// Missing joint id
        joint: String,
    },
}

/// Invalid learner input.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    /// A field is not an integer
    #[error("`{input}` is not a valid number for {field}")]
    NotANumber {
        /// Field name
        field: &'static str,
        /// Raw input
        input: String,
    },
}
