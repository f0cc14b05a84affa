//! Kinema is a planar linkage simulator for learning mechanism mobility.
//!
//! Pick a canonical topology, animate it with closed-form position solvers,
//! and check Gruebler's mobility counts against the authored answers.
//!
//! ```
//! use kinema::{topo::WattSixBar, Mechanism};
//!
//! let mut m = Mechanism::new(WattSixBar::default());
//! assert!(m.mobility.is_consistent());
//! assert!(m.step(0.1));
//! let path = m.curve("J6", 90);
//! assert!(!path.is_empty());
//! ```
#![cfg_attr(doc_cfg, feature(doc_cfg))]
pub use crate::error::*;
pub use crate::joint::*;
pub use crate::link::*;
pub use crate::mech::*;
pub use crate::mobility::*;
pub use crate::point::*;

pub mod anim;
mod error;
mod joint;
pub mod kernel;
mod link;
mod mech;
mod mobility;
mod point;
pub mod problem;
pub mod random;
pub mod topo;
#[cfg(test)]
mod tests;
