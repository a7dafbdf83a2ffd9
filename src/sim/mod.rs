// sim/ - Snowfall simulation
//
// A fixed-slot particle field advanced by host-supplied time deltas. All
// coordinates are reference-surface pixels; the renderer rescales to the
// live viewport, so the world never learns the canvas size.

mod flake;

pub use flake::Flakes;

use crate::config::SnowConfig;
use crate::rng::Rng32;

pub struct SnowWorld {
    config: SnowConfig,
    flakes: Flakes,
    rng: Rng32,
}

impl SnowWorld {
    pub fn new(config: SnowConfig) -> Self {
        let mut rng = Rng32::new(config.seed);
        let flakes = Flakes::new(&config, &mut rng);
        Self {
            config,
            flakes,
            rng,
        }
    }

    /// Advance the snowfall by `dt` seconds.
    ///
    /// Host deltas are sanitized here: non-finite or negative values become
    /// zero, and a long stall (backgrounded tab) is clamped to `max_dt` so
    /// no flake teleports across the surface.
    pub fn tick(&mut self, dt: f64) {
        let dt = if dt.is_finite() { dt as f32 } else { 0.0 };
        let dt = dt.clamp(0.0, self.config.max_dt);
        self.flakes.advance(dt, &self.config, &mut self.rng);
    }

    pub fn flakes(&self) -> &Flakes {
        &self.flakes
    }

    pub fn config(&self) -> &SnowConfig {
        &self.config
    }

    pub fn flake_count(&self) -> usize {
        self.flakes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> SnowWorld {
        SnowWorld::new(SnowConfig::default())
    }

    fn snapshot(w: &SnowWorld) -> Vec<(u32, u32, u32, u32, u32)> {
        let f = w.flakes();
        (0..f.len())
            .map(|i| {
                (
                    f.x[i].to_bits(),
                    f.y[i].to_bits(),
                    f.vx[i].to_bits(),
                    f.vy[i].to_bits(),
                    f.phase[i].to_bits(),
                )
            })
            .collect()
    }

    #[test]
    fn cardinality_never_changes() {
        let mut w = world();
        let n = w.flake_count();
        for _ in 0..300 {
            w.tick(1.0 / 60.0);
            assert_eq!(w.flake_count(), n);
        }
    }

    #[test]
    fn zero_delta_changes_nothing() {
        let mut w = world();
        w.tick(0.25); // move off the freshly-seeded state first
        let before = snapshot(&w);
        w.tick(0.0);
        assert_eq!(before, snapshot(&w));
    }

    #[test]
    fn garbage_deltas_are_ignored() {
        let mut w = world();
        let before = snapshot(&w);
        w.tick(f64::NAN);
        w.tick(f64::INFINITY);
        w.tick(-5.0);
        assert_eq!(before, snapshot(&w));
    }

    #[test]
    fn huge_delta_equals_one_clamped_step() {
        let mut a = world();
        let mut b = world();
        a.tick(1000.0);
        b.tick(SnowConfig::default().max_dt as f64);
        assert_eq!(snapshot(&a), snapshot(&b));
    }

    #[test]
    fn same_seed_same_snowfall() {
        let mut a = world();
        let mut b = world();
        let deltas = [0.016, 0.0, 0.033, 0.5, 0.008, 0.016];
        for _ in 0..200 {
            for dt in deltas {
                a.tick(dt);
                b.tick(dt);
            }
            assert_eq!(snapshot(&a), snapshot(&b));
        }
    }

    #[test]
    fn different_seeds_differ() {
        let mut a = SnowWorld::new(SnowConfig {
            seed: 1,
            ..SnowConfig::default()
        });
        let mut b = SnowWorld::new(SnowConfig {
            seed: 2,
            ..SnowConfig::default()
        });
        a.tick(0.016);
        b.tick(0.016);
        assert_ne!(snapshot(&a), snapshot(&b));
    }

    #[test]
    fn range_invariants_hold_over_time() {
        let mut w = world();
        for _ in 0..600 {
            w.tick(1.0 / 60.0);
            let f = w.flakes();
            for i in 0..f.len() {
                assert!(f.radius[i] > 0.0);
                assert!((0.0..=1.0).contains(&f.alpha[i]));
                assert!(f.depth[i] > 0.0 && f.depth[i] <= 1.0);
            }
        }
    }

    #[test]
    fn every_flake_recycles_within_ten_seconds() {
        // Slowest flake falls fall_speed * depth_min = 80 px/s, covering
        // 800 px in 10 s of 60 Hz ticks against the 600 px surface.
        let mut w = world();
        let mut recycled = vec![false; w.flake_count()];
        let mut prev_y: Vec<f32> = w.flakes().y.clone();

        for _ in 0..600 {
            w.tick(1.0 / 60.0);
            let f = w.flakes();
            for i in 0..f.len() {
                // Flakes only ever fall; a drop in y is a recycle
                if f.y[i] < prev_y[i] {
                    recycled[i] = true;
                    assert!(f.y[i] <= 0.0);
                }
                prev_y[i] = f.y[i];
            }
        }

        assert!(recycled.iter().all(|&r| r));
    }
}
