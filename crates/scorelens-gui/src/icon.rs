//! ScoreLens application icon generator.
//!
//! Draws a procedural icon: three stacked pass/fail bars seen through a
//! magnifying lens, with a ring and a handle. Rendered at any resolution
//! as RGBA pixel data for the window icon.

use scorelens_core::model::Outcome;

/// Generate a ScoreLens icon as egui `IconData`.
pub fn generate_icon(size: u32) -> egui::IconData {
    egui::IconData {
        rgba: render_icon(size),
        width: size,
        height: size,
    }
}

/// Bars inside the lens as `(left, right, top, split)` in lens-relative
/// units, where the lens spans -1..1 on both axes. Red runs from the lens
/// floor up to `split`, green from `split` up to `top`.
const BARS: [(f32, f32, f32, f32); 3] = [
    (-0.62, -0.28, -0.05, 0.35),
    (-0.17, 0.17, -0.55, 0.15),
    (0.28, 0.62, -0.30, 0.40),
];

const LENS_BG: [u8; 3] = [0x26, 0x2a, 0x38];

/// Render the icon into an RGBA pixel buffer (top-to-bottom row order).
pub fn render_icon(size: u32) -> Vec<u8> {
    let pass = Outcome::Pass.rgb();
    let fail = Outcome::Fail.rgb();
    let s = size as f32;
    let mut pixels = vec![0u8; (size * size * 4) as usize];

    let cx = s * 0.42;
    let cy = s * 0.42;
    let radius = s * 0.34;
    let ring_outer = radius + s * 0.05;

    // Handle runs from the ring at 45° toward the lower-right corner.
    let diag = std::f32::consts::FRAC_PI_4;
    let (ax, ay) = (cx + ring_outer * diag.cos(), cy + ring_outer * diag.sin());
    let (bx, by) = (s * 0.92, s * 0.92);
    let handle_half_w = s * 0.06;

    // Bars stop short of the lens floor so they sit on a baseline.
    let floor = 0.70;

    for y in 0..size {
        for x in 0..size {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;
            let dx = px - cx;
            let dy = py - cy;
            let dist = (dx * dx + dy * dy).sqrt();

            let mut rgb = [0u8; 3];
            let mut alpha = 0.0f32;

            // Lens interior with bars.
            if dist < radius + 1.5 {
                alpha = smooth_edge(dist, radius);
                rgb = LENS_BG;

                let ux = dx / radius;
                let uy = dy / radius;
                for &(left, right, top, split) in &BARS {
                    if ux >= left && ux <= right && uy >= top && uy <= floor {
                        rgb = if uy >= split { fail } else { pass };
                    }
                }

                // Glass highlight in the upper-left.
                let hx = dx + radius * 0.35;
                let hy = dy + radius * 0.35;
                let glare = (1.0 - (hx * hx + hy * hy).sqrt() / (radius * 0.6)).max(0.0) * 0.15;
                for c in &mut rgb {
                    *c = (*c as f32 + glare * 255.0).min(255.0) as u8;
                }
            }

            // Ring.
            if dist > radius - 0.5 && dist < ring_outer + 1.5 {
                let ring = smooth_edge_inv(dist, radius - 0.5) * smooth_edge(dist, ring_outer);
                let shade = 0.75 + 0.25 * (-dy / radius).clamp(-1.0, 1.0);
                let ring_rgb = [
                    (0x88 as f32 * shade) as u8,
                    (0x90 as f32 * shade) as u8,
                    (0xa0 as f32 * shade) as u8,
                ];
                for (c, r) in rgb.iter_mut().zip(ring_rgb) {
                    *c = lerp_c(*c, r, ring);
                }
                alpha += (1.0 - alpha) * ring;
            }

            // Handle.
            let t = project_t(px, py, ax, ay, bx, by);
            if (0.0..=1.05).contains(&t) {
                let d = point_to_seg_dist(px, py, ax, ay, bx, by);
                if d < handle_half_w + 1.5 {
                    let h = smooth_edge(d, handle_half_w);
                    let tone = lerp_c(0x80, 0x58, t.clamp(0.0, 1.0));
                    for c in &mut rgb {
                        *c = lerp_c(*c, tone, h);
                    }
                    alpha += (1.0 - alpha) * h;
                }
            }

            let idx = ((y * size + x) * 4) as usize;
            pixels[idx..idx + 3].copy_from_slice(&rgb);
            pixels[idx + 3] = (alpha * 255.0).clamp(0.0, 255.0) as u8;
        }
    }

    pixels
}

// ── Helpers ─────────────────────────────────────────────────────

/// Anti-aliased edge, 1 inside `edge` falling to 0 outside.
fn smooth_edge(dist: f32, edge: f32) -> f32 {
    (0.5 - (dist - edge) * 0.5).clamp(0.0, 1.0)
}

/// Anti-aliased edge, 0 inside `edge` rising to 1 outside.
fn smooth_edge_inv(dist: f32, edge: f32) -> f32 {
    1.0 - smooth_edge(dist, edge)
}

/// Distance from a point to the segment AB.
fn point_to_seg_dist(px: f32, py: f32, ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let t = project_t(px, py, ax, ay, bx, by).clamp(0.0, 1.0);
    let qx = ax + t * (bx - ax);
    let qy = ay + t * (by - ay);
    ((px - qx).powi(2) + (py - qy).powi(2)).sqrt()
}

/// Parameter of the projection of a point onto line AB (0 at A, 1 at B).
fn project_t(px: f32, py: f32, ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let abx = bx - ax;
    let aby = by - ay;
    let len_sq = abx * abx + aby * aby;
    if len_sq < 0.0001 {
        return 0.0;
    }
    ((px - ax) * abx + (py - ay) * aby) / len_sq
}

fn lerp_c(a: u8, b: u8, t: f32) -> u8 {
    (a as f32 * (1.0 - t) + b as f32 * t).clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_has_expected_size_and_transparent_corner() {
        let icon = generate_icon(64);
        assert_eq!(icon.width, 64);
        assert_eq!(icon.rgba.len(), 64 * 64 * 4);
        // Top-left corner lies outside the lens.
        assert_eq!(icon.rgba[3], 0);
    }

    fn rgb_at(pixels: &[u8], size: u32, x: u32, y: u32) -> [u8; 3] {
        let idx = ((y * size + x) * 4) as usize;
        [pixels[idx], pixels[idx + 1], pixels[idx + 2]]
    }

    /// Bars use the same palette as the charts.
    #[test]
    fn bars_use_outcome_colours() {
        let size = 200;
        let pixels = render_icon(size);
        // Lower part of the middle bar, away from the glare.
        assert_eq!(rgb_at(&pixels, size, 84, 118), Outcome::Fail.rgb());
        // Upper part of the right bar.
        assert_eq!(rgb_at(&pixels, size, 114, 90), Outcome::Pass.rgb());
    }

    #[test]
    fn lens_centre_is_opaque() {
        let size = 64u32;
        let pixels = render_icon(size);
        let c = (size as f32 * 0.42) as u32;
        let idx = ((c * size + c) * 4) as usize;
        assert_eq!(pixels[idx + 3], 255);
    }
}
