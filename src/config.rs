// config.rs - Engine tuning
//
// The simulation runs in a fixed reference surface; draw rescales to the
// real viewport every frame, so none of these depend on canvas size.

use wasm_bindgen::prelude::*;

// Reference surface (world pixels)
pub const SURFACE_W: f32 = 800.0;
pub const SURFACE_H: f32 = 600.0;

// Flakes
pub const DEFAULT_PARTICLE_COUNT: u32 = 200;
pub const MAX_PARTICLE_COUNT: u32 = 10_000;
pub const DEFAULT_FALL_SPEED: f32 = 400.0;
pub const DEFAULT_DRIFT_AMPLITUDE: f32 = 30.0;
pub const DEFAULT_DRIFT_RATE: f32 = 1.8;
pub const DEFAULT_MIN_RADIUS: f32 = 1.0;
pub const DEFAULT_MAX_RADIUS: f32 = 4.0;
pub const DEFAULT_MIN_ALPHA: f32 = 0.35;
pub const DEFAULT_MAX_ALPHA: f32 = 1.0;

// Depth 1.0 is nearest; the floor keeps the farthest flakes moving
pub const DEPTH_MIN: f32 = 0.2;
pub const DEPTH_MAX: f32 = 1.0;

// Sway excursion is bounded by 2 * amplitude / rate world pixels,
// well inside this margin
pub const RECYCLE_MARGIN: f32 = 48.0;

// Longest delta a single tick will integrate (suspended-tab guard)
pub const MAX_DT: f32 = 0.1;

pub const DEFAULT_SEED: u32 = 0xDEADBEEF;

#[derive(Clone, Debug)]
pub struct SnowConfig {
    pub particle_count: u32,
    pub surface_w: f32,
    pub surface_h: f32,
    /// Vertical speed of a depth-1.0 flake, world px/s.
    pub fall_speed: f32,
    /// Peak horizontal sway speed of a depth-1.0 flake, world px/s.
    pub drift_amplitude: f32,
    /// Drift phase advance, rad/s.
    pub drift_rate: f32,
    pub depth_min: f32,
    pub depth_max: f32,
    pub radius_min: f32,
    pub radius_max: f32,
    pub alpha_min: f32,
    pub alpha_max: f32,
    pub margin: f32,
    pub max_dt: f32,
    pub seed: u32,
}

impl Default for SnowConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            surface_w: SURFACE_W,
            surface_h: SURFACE_H,
            fall_speed: DEFAULT_FALL_SPEED,
            drift_amplitude: DEFAULT_DRIFT_AMPLITUDE,
            drift_rate: DEFAULT_DRIFT_RATE,
            depth_min: DEPTH_MIN,
            depth_max: DEPTH_MAX,
            radius_min: DEFAULT_MIN_RADIUS,
            radius_max: DEFAULT_MAX_RADIUS,
            alpha_min: DEFAULT_MIN_ALPHA,
            alpha_max: DEFAULT_MAX_ALPHA,
            margin: RECYCLE_MARGIN,
            max_dt: MAX_DT,
            seed: DEFAULT_SEED,
        }
    }
}

impl SnowConfig {
    /// Build a config from a JS value. An object is read field by field
    /// (camelCase keys); a bare number is taken as the particle count;
    /// anything else keeps the defaults.
    pub fn from_js(value: JsValue) -> Self {
        let mut config = Self::default();

        if !value.is_object() {
            if let Some(count) = value.as_f64() {
                config.particle_count = count as u32;
            }
            return config.sanitized();
        }

        macro_rules! extract {
            ($field:ident, $key:expr, $ty:ty) => {
                if let Ok(v) = js_sys::Reflect::get(&value, &$key.into()) {
                    if let Some(num) = v.as_f64() {
                        config.$field = num as $ty;
                    }
                }
            };
        }

        extract!(particle_count, "particleCount", u32);
        extract!(fall_speed, "fallSpeed", f32);
        extract!(drift_amplitude, "driftAmplitude", f32);
        extract!(drift_rate, "driftRate", f32);
        extract!(radius_min, "minRadius", f32);
        extract!(radius_max, "maxRadius", f32);
        extract!(alpha_min, "minAlpha", f32);
        extract!(alpha_max, "maxAlpha", f32);
        extract!(seed, "seed", u32);

        config.sanitized()
    }

    /// Clamp host-supplied values back into ranges the invariants need.
    pub fn sanitized(mut self) -> Self {
        self.particle_count = self.particle_count.clamp(1, MAX_PARTICLE_COUNT);
        self.radius_min = self.radius_min.max(0.1);
        self.radius_max = self.radius_max.max(self.radius_min);
        self.alpha_min = self.alpha_min.clamp(0.0, 1.0);
        self.alpha_max = self.alpha_max.clamp(self.alpha_min, 1.0);
        self.drift_rate = self.drift_rate.max(0.0);
        self.max_dt = self.max_dt.clamp(0.0, 1.0);
        self
    }
}
