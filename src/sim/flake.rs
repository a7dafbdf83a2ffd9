// flake.rs - Falling snowflakes
//
// Structure-of-Arrays layout for cache-friendly iteration. Slots are fixed
// at construction: a flake that leaves the surface is reset in place, never
// dropped or reallocated.

use std::f32::consts::TAU;

use crate::config::SnowConfig;
use crate::rng::Rng32;

pub struct Flakes {
    // Position (world pixels)
    pub x: Vec<f32>,
    pub y: Vec<f32>,

    // Velocity (world px/s)
    pub vx: Vec<f32>,
    pub vy: Vec<f32>,

    // Parallax: depth_min = far .. 1.0 = near
    pub depth: Vec<f32>,

    // Derived from depth at spawn
    pub radius: Vec<f32>,
    pub alpha: Vec<f32>,

    // Drift oscillation accumulator, wrapped mod 2π
    pub phase: Vec<f32>,
}

impl Flakes {
    /// Fill every slot so the first frame already shows a full sky.
    pub fn new(cfg: &SnowConfig, rng: &mut Rng32) -> Self {
        let n = cfg.particle_count as usize;
        let mut flakes = Self {
            x: vec![0.0; n],
            y: vec![0.0; n],
            vx: vec![0.0; n],
            vy: vec![0.0; n],
            depth: vec![0.0; n],
            radius: vec![0.0; n],
            alpha: vec![0.0; n],
            phase: vec![0.0; n],
        };

        for i in 0..n {
            flakes.respawn(i, cfg, rng);
            flakes.x[i] = rng.range(0.0, cfg.surface_w);
            flakes.y[i] = rng.range(0.0, cfg.surface_h);
        }

        flakes
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Advance every flake by `dt` seconds (already sanitized by the
    /// engine) and recycle any that left the surface.
    ///
    /// Explicit Euler: dt is clamped small, no cross-flake forces.
    pub fn advance(&mut self, dt: f32, cfg: &SnowConfig, rng: &mut Rng32) {
        for i in 0..self.len() {
            let phase = (self.phase[i] + cfg.drift_rate * dt) % TAU;
            self.phase[i] = phase;
            self.vx[i] = cfg.drift_amplitude * phase.sin() * self.depth[i];
            self.vy[i] = cfg.fall_speed * self.depth[i];
            self.x[i] += self.vx[i] * dt;
            self.y[i] += self.vy[i] * dt;

            self.recycle(i, cfg.surface_w, cfg.surface_h, cfg, rng);
        }
    }

    /// Reset slot `i` to a fresh flake above the top edge if it has fully
    /// fallen below `height` or strayed past the horizontal margin.
    /// Returns whether the slot was reset.
    pub fn recycle(
        &mut self,
        i: usize,
        width: f32,
        height: f32,
        cfg: &SnowConfig,
        rng: &mut Rng32,
    ) -> bool {
        let below = self.y[i] - self.radius[i] > height;
        let strayed = self.x[i] < -cfg.margin || self.x[i] > width + cfg.margin;
        if !below && !strayed {
            return false;
        }

        self.respawn(i, cfg, rng);
        self.x[i] = rng.range(0.0, width);
        self.y[i] = -self.radius[i];
        true
    }

    // Redraw depth, the attributes derived from it, and a fresh drift
    // phase. Position is set by the caller.
    fn respawn(&mut self, i: usize, cfg: &SnowConfig, rng: &mut Rng32) {
        let depth = rng.range(cfg.depth_min, cfg.depth_max);
        let t = (depth - cfg.depth_min) / (cfg.depth_max - cfg.depth_min);
        let phase = rng.range(0.0, TAU);

        self.depth[i] = depth;
        self.radius[i] = lerp(cfg.radius_min, cfg.radius_max, t);
        self.alpha[i] = lerp(cfg.alpha_min, cfg.alpha_max, t);
        self.phase[i] = phase;
        self.vx[i] = cfg.drift_amplitude * phase.sin() * depth;
        self.vy[i] = cfg.fall_speed * depth;

        debug_assert!(self.radius[i] > 0.0);
        debug_assert!((0.0..=1.0).contains(&self.alpha[i]));
    }
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
