//! Random mechanism picking for practice drills.
use crate::{topo::*, Mechanism};
use rand::{
    distributions::{Distribution, Uniform},
    Rng,
};

/// Perturb `val` uniformly within `±range / 2`.
pub fn jitter<R: Rng + ?Sized>(rng: &mut R, val: f64, range: f64) -> f64 {
    val + (rng.gen::<f64>() - 0.5) * range
}

/// Uniform distribution over the topologies.
///
/// The four-bar and the slider-crank are drawn with jittered dimensions,
/// the rest use their authored examples.
#[derive(Clone, Copy, Debug, Default)]
pub struct TopologyDistr;

impl Distribution<Topology> for TopologyDistr {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Topology {
        match Uniform::new(0, Topology::COUNT).sample(rng) {
            0 => FourBar::sample(rng).into(),
            1 => SliderCrank::sample(rng).into(),
            // The index is in range
            i => Topology::nth(i).unwrap_or_default(),
        }
    }
}

/// Build a random mechanism from the given generator.
pub fn random_mechanism<R: Rng + ?Sized>(rng: &mut R) -> Mechanism {
    let topo = TopologyDistr.sample(rng);
    log::debug!("picked topology: {}", topo.name());
    Mechanism::new(topo)
}

/// Build a random mechanism from the thread-local generator.
pub fn pick_random_topology() -> Mechanism {
    random_mechanism(&mut rand::thread_rng())
}
