// render.rs - Paint the particle field onto a canvas 2D context
//
// The simulation runs in a fixed reference surface; every draw maps world
// coordinates to the current viewport, so a resize between frames just
// changes the scale factors.

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::sim::SnowWorld;

const BACKGROUND: &str = "black";
const FLAKE_COLOR: &str = "#CCCCDD";

/// Painter's order: farthest (smallest depth) first, so nearer, larger,
/// more opaque flakes composite on top.
pub(crate) fn draw_order(depth: &[f32]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..depth.len()).collect();
    order.sort_unstable_by(|&a, &b| depth[a].total_cmp(&depth[b]));
    order
}

/// Render the current field. Reads the world, writes only to the canvas.
pub fn draw(
    world: &SnowWorld,
    ctx: &CanvasRenderingContext2d,
    width: u32,
    height: u32,
) -> Result<(), JsValue> {
    if width == 0 || height == 0 {
        return Ok(());
    }

    let cfg = world.config();
    let scale_x = width as f64 / cfg.surface_w as f64;
    let scale_y = height as f64 / cfg.surface_h as f64;
    let scale_r = 0.5 * (scale_x + scale_y);

    ctx.set_global_alpha(1.0);
    ctx.set_fill_style_str(BACKGROUND);
    ctx.fill_rect(0.0, 0.0, width as f64, height as f64);

    ctx.set_fill_style_str(FLAKE_COLOR);
    let flakes = world.flakes();
    for i in draw_order(&flakes.depth) {
        ctx.set_global_alpha(flakes.alpha[i] as f64);
        ctx.begin_path();
        ctx.arc(
            flakes.x[i] as f64 * scale_x,
            flakes.y[i] as f64 * scale_y,
            flakes.radius[i] as f64 * scale_r,
            0.0,
            TAU,
        )?;
        ctx.fill();
    }
    ctx.set_global_alpha(1.0);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_order_is_far_to_near() {
        let depth = [0.9, 0.2, 0.55, 1.0, 0.2];
        let order = draw_order(&depth);
        assert_eq!(order.len(), depth.len());
        for pair in order.windows(2) {
            assert!(depth[pair[0]] <= depth[pair[1]]);
        }
    }

    #[test]
    fn draw_order_of_empty_field() {
        assert!(draw_order(&[]).is_empty());
    }
}
