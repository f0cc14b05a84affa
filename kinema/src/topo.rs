//! Canonical linkage topologies and their closed-form position solvers.
//!
//! Each topology is a parameter struct holding its constant dimensions.
//! [`Default`] gives the authored example. The [`Topology`] enum wraps them
//! behind the same [`Kinematics`] capability.
pub use self::{fb::*, higher::*, six_bar::*, slider::*};
use crate::{Frame, Joint, Link, Mobility, Poses};

pub mod fb;
pub mod higher;
pub mod six_bar;
pub mod slider;

/// Position solving behavior of a topology.
pub trait Kinematics {
    /// Display name.
    fn name(&self) -> &'static str;
    /// Short description for learners.
    fn description(&self) -> &'static str;
    /// Authored mobility constants.
    fn mobility(&self) -> Mobility;
    /// Initial joint and link records.
    ///
    /// Joint positions here are placeholders, [`crate::Mechanism::new()`]
    /// assembles them with the first solve.
    fn layout(&self) -> (Vec<Joint>, Vec<Link>);
    /// Solve the moving joints at driver parameter `t`.
    ///
    /// The frame is only read for ground anchors. Returns `None` if the
    /// configuration is unreachable.
    fn pos(&self, t: f64, frame: &Frame) -> Option<Poses>;
}

macro_rules! impl_topology {
    ($($(#[$meta:meta])* $var:ident($ty:ident)),+ $(,)?) => {
        /// Any of the supported topologies.
        #[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
        #[derive(Clone, Debug, PartialEq)]
        pub enum Topology {
            $($(#[$meta])* $var($ty),)+
        }

        $(impl From<$ty> for Topology {
            fn from(t: $ty) -> Self {
                Self::$var(t)
            }
        })+

        impl Topology {
            /// Number of topologies.
            pub const COUNT: usize = [$(stringify!($var)),+].len();

            /// Authored example of the `i`-th topology, in declaration order.
            pub fn nth(i: usize) -> Option<Self> {
                let table: [fn() -> Self; Self::COUNT] = [$(|| Self::$var(<$ty>::default())),+];
                table.get(i).map(|f| f())
            }
        }

        impl Kinematics for Topology {
            fn name(&self) -> &'static str {
                match self { $(Self::$var(t) => t.name(),)+ }
            }

            fn description(&self) -> &'static str {
                match self { $(Self::$var(t) => t.description(),)+ }
            }

            fn mobility(&self) -> Mobility {
                match self { $(Self::$var(t) => t.mobility(),)+ }
            }

            fn layout(&self) -> (Vec<Joint>, Vec<Link>) {
                match self { $(Self::$var(t) => t.layout(),)+ }
            }

            fn pos(&self, t: f64, frame: &Frame) -> Option<Poses> {
                match self { $(Self::$var(topo) => topo.pos(t, frame),)+ }
            }
        }
    };
}

impl_topology! {
    /// Crank-rocker four-bar
    FourBar(FourBar),
    /// In-line or offset slider-crank
    SliderCrank(SliderCrank),
    /// Vertical slider-crank pump
    WaterPump(WaterPump),
    /// Three links with a pin-in-slot joint
    FoldingChair(FoldingChair),
    /// Inverted slider-crank driven by a cylinder
    HydraulicLift(HydraulicLift),
    /// Slider-crank with a long pedal coupler
    EllipticalTrainer(EllipticalTrainer),
    /// Parallelogram four-bar
    Parallelogram(Parallelogram),
    /// Watt straight-line double rocker
    WattLinkage(WattLinkage),
    /// Watt II six-bar
    WattSixBar(WattSixBar),
    /// Stephenson III six-bar
    StephensonSixBar(StephensonSixBar),
    /// Scotch yoke
    ScotchYoke(ScotchYoke),
    /// Slotted-link quick return
    QuickReturn(QuickReturn),
    /// Six-bar with a coincident joint
    CoincidentSixBar(CoincidentSixBar),
    /// Plate cam with a translating follower
    CamFollower(CamFollower),
}

impl Default for Topology {
    fn default() -> Self {
        Self::FourBar(FourBar::default())
    }
}
