// snowfall-engine - endless snowfall for a 2D canvas
//
// The host drives the engine: tick(dt) then draw(ctx, w, h) once per
// animation frame. All simulation state lives on this side of the boundary;
// the page only owns the canvas, the frame loop, and the clock.

mod config;
mod render;
mod rng;
mod sim;

pub use config::SnowConfig;
pub use rng::Rng32;
pub use sim::{Flakes, SnowWorld};

use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

#[wasm_bindgen]
pub struct AppState {
    world: SnowWorld,
}

#[wasm_bindgen]
impl AppState {
    /// Engine with the default flake count and a fixed seed.
    pub fn new() -> AppState {
        Self::from_config(SnowConfig::default())
    }

    /// Engine configured from a JS object (camelCase keys) or a bare
    /// particle count. Missing or malformed fields keep their defaults.
    pub fn with_config(config: JsValue) -> AppState {
        Self::from_config(SnowConfig::from_js(config))
    }

    /// Advance the simulation by `delta_seconds`. NaN, negative, or huge
    /// deltas are sanitized internally; this never fails.
    pub fn tick(&mut self, delta_seconds: f64) {
        self.world.tick(delta_seconds);
    }

    /// Render the current field onto `ctx` at the given viewport size. A
    /// failed canvas call drops the frame rather than halting the host.
    pub fn draw(&self, ctx: &CanvasRenderingContext2d, width: u32, height: u32) {
        if let Err(err) = render::draw(&self.world, ctx, width, height) {
            web_sys::console::warn_1(&err);
        }
    }

    pub fn particle_count(&self) -> u32 {
        self.world.flake_count() as u32
    }
}

impl AppState {
    fn from_config(config: SnowConfig) -> AppState {
        let world = SnowWorld::new(config);
        web_sys::console::log_1(
            &format!("[snowfall-engine] initialized with {} flakes", world.flake_count()).into(),
        );
        AppState { world }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").into()
}
