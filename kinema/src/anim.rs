//! Animation driver: advances the driver parameter once per tick and
//! re-solves the mechanism.
//!
//! ```
//! use kinema::{anim::Animator, topo::FourBar, Mechanism};
//!
//! let mut m = Mechanism::new(FourBar::default());
//! let mut anim = Animator::default();
//! anim.play();
//! for _ in 0..10 {
//!     anim.tick(&mut m);
//! }
//! assert!(anim.t() > 0.);
//! ```
use crate::Mechanism;
use std::f64::consts::TAU;

/// Animation options.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Clone, Debug, PartialEq)]
pub struct Cfg {
    /// Driver increment per tick, in radians
    pub speed: f64,
    /// Initial driver parameter
    pub start: f64,
}

impl Default for Cfg {
    fn default() -> Self {
        Self::new()
    }
}

impl Cfg {
    /// Default config.
    pub const fn new() -> Self {
        Self { speed: 0.02, start: 0. }
    }

    /// Set the increment per tick.
    pub fn speed(self, speed: f64) -> Self {
        Self { speed, ..self }
    }

    /// Set the initial driver parameter.
    pub fn start(self, start: f64) -> Self {
        Self { start: start.rem_euclid(TAU), ..self }
    }
}

/// Play state of a mechanism animation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Animator {
    cfg: Cfg,
    t: f64,
    running: bool,
}

impl From<Cfg> for Animator {
    fn from(cfg: Cfg) -> Self {
        Self { t: cfg.start.rem_euclid(TAU), cfg, running: false }
    }
}

impl Animator {
    /// Current driver parameter, in `[0, 2π)`.
    pub fn t(&self) -> f64 {
        self.t
    }

    /// Return true if playing.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Options.
    pub fn cfg(&self) -> &Cfg {
        &self.cfg
    }

    /// Start playing.
    pub fn play(&mut self) {
        self.running = true;
    }

    /// Stop at the current parameter.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Play/pause switch.
    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Stop and rewind to the start parameter.
    pub fn reset(&mut self) {
        self.running = false;
        self.t = self.cfg.start.rem_euclid(TAU);
    }

    /// Advance one tick and solve the mechanism.
    ///
    /// Does nothing while paused. Returns false if the mechanism held its
    /// frame or the animation is paused. The parameter advances either way.
    pub fn tick(&mut self, m: &mut Mechanism) -> bool {
        if !self.running {
            return false;
        }
        self.t = (self.t + self.cfg.speed).rem_euclid(TAU);
        m.step(self.t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topo::FourBar;
    use approx::assert_abs_diff_eq;

    #[test]
    fn play_pause() {
        let mut m = Mechanism::new(FourBar::default());
        let mut anim = Animator::default();
        let joints = m.joints.clone();
        assert!(!anim.tick(&mut m));
        assert_eq!(anim.t(), 0.);
        assert_eq!(m.joints, joints);
        anim.toggle();
        assert!(anim.is_running());
        assert!(anim.tick(&mut m));
        assert_abs_diff_eq!(anim.t(), 0.02);
        assert_ne!(m.joints, joints);
        anim.pause();
        anim.tick(&mut m);
        assert_abs_diff_eq!(anim.t(), 0.02);
    }

    #[test]
    fn wraps_around() {
        let mut m = Mechanism::new(FourBar::default());
        let mut anim = Animator::from(Cfg::new().speed(0.5).start(6.));
        anim.play();
        anim.tick(&mut m);
        assert_abs_diff_eq!(anim.t(), 6.5 - TAU, epsilon = 1e-12);
        anim.reset();
        assert!(!anim.is_running());
        assert_eq!(anim.t(), 6.);
    }

    #[test]
    fn raw_start_wrapped() {
        let mut anim = Animator::from(Cfg { speed: 0.02, start: 7. });
        assert_abs_diff_eq!(anim.t(), 7. - TAU, epsilon = 1e-12);
        anim.reset();
        assert_abs_diff_eq!(anim.t(), 7. - TAU, epsilon = 1e-12);
        let anim = Animator::from(Cfg { speed: 0.02, start: -1. });
        assert_abs_diff_eq!(anim.t(), TAU - 1., epsilon = 1e-12);
    }
}
