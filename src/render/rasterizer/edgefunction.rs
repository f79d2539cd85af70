//! Edge function-based triangle rasterization.
//!
//! The edge function algorithm is the foundation of modern GPU
//! rasterization: every pixel in the triangle's bounding box is tested
//! against three edge equations, and a pixel is inside when all three have
//! the same sign. The normalized edge function values are exactly the
//! barycentric weights, which drive the same perspective-correct
//! interpolation and depth test as the scanline rasterizer.
//!
//! # Edge Function
//!
//! For an edge from A to B, the edge function at point P is the 2D cross
//! product `(B - A) x (P - A)`:
//!
//! ```text
//! E(P) = (P.x - A.x) * (B.y - A.y) - (P.y - A.y) * (B.x - A.x)
//! ```
//!
//! Positive means P lies to the left of the edge, negative to the right,
//! zero exactly on it. Both windings are handled by comparing against the
//! sign of the total signed area.
//!
//! # Coverage convention
//!
//! Pixels are sampled at their centers (x + 0.5, y + 0.5) within the
//! clipped bounding box. Shared-edge coverage therefore follows the edge
//! function's sign test rather than the scanline walker's half-open span
//! rule; the two rasterizers can differ by a boundary pixel on the same
//! input.
//!
//! # References
//!
//! - Juan Pineda, "A Parallel Algorithm for Polygon Rasterization" (1988)

use super::{Rasterizer, TexCoord, Triangle};
use crate::math::vec2::Vec2;
use crate::render::framebuffer::FrameBuffer;
use crate::texture::Texture;

/// Triangle rasterizer using the edge function algorithm.
///
/// Iterates the triangle's bounding box and tests each pixel independently,
/// which is simple and uniform but visits empty corners of the box that the
/// scanline rasterizer never touches. Kept interchangeable behind the
/// [`Rasterizer`] trait for comparison and benchmarking.
pub struct EdgeFunctionRasterizer;

impl EdgeFunctionRasterizer {
    /// Creates a new edge function rasterizer instance.
    pub fn new() -> Self {
        EdgeFunctionRasterizer {}
    }

    /// Edge function value for point `p` relative to edge `a -> b`.
    #[inline]
    fn edge_function(a: Vec2, b: Vec2, p: Vec2) -> f32 {
        (p.x - a.x) * (b.y - a.y) - (p.y - a.y) * (b.x - a.x)
    }
}

impl Default for EdgeFunctionRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer for EdgeFunctionRasterizer {
    fn fill_triangle(&self, triangle: &Triangle, buffer: &mut FrameBuffer, texture: Option<&Texture>) {
        let [va, vb, vc] = triangle.vertices;
        let a = va.to_vec2();
        let b = vb.to_vec2();
        let c = vc.to_vec2();

        // Same V-axis convention as the scanline rasterizer: flip once,
        // before any interpolation
        let uvs: [TexCoord; 3] = [
            TexCoord::new(triangle.uvs[0].u, 1.0 - triangle.uvs[0].v),
            TexCoord::new(triangle.uvs[1].u, 1.0 - triangle.uvs[1].v),
            TexCoord::new(triangle.uvs[2].u, 1.0 - triangle.uvs[2].v),
        ];

        // Twice the signed triangle area; zero means degenerate input
        let area = Self::edge_function(a, b, c);
        if area.abs() < f32::EPSILON {
            return;
        }
        let inv_area = 1.0 / area;

        // Bounding box clipped to the frame
        let min_x = (a.x.min(b.x).min(c.x).floor() as i32).max(0);
        let max_x = (a.x.max(b.x).max(c.x).ceil() as i32).min(buffer.width() as i32 - 1);
        let min_y = (a.y.min(b.y).min(c.y).floor() as i32).max(0);
        let max_y = (a.y.max(b.y).max(c.y).ceil() as i32).min(buffer.height() as i32 - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                // Sample at the pixel center
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);

                let e0 = Self::edge_function(b, c, p);
                let e1 = Self::edge_function(c, a, p);
                let e2 = Self::edge_function(a, b, p);

                // Inside test, winding-agnostic
                let inside = if area > 0.0 {
                    e0 >= 0.0 && e1 >= 0.0 && e2 >= 0.0
                } else {
                    e0 <= 0.0 && e1 <= 0.0 && e2 <= 0.0
                };
                if !inside {
                    continue;
                }

                // Normalized edge functions are the barycentric weights
                let alpha = e0 * inv_area;
                let beta = e1 * inv_area;
                let gamma = e2 * inv_area;

                let interpolated_reciprocal_w = alpha / va.w + beta / vb.w + gamma / vc.w;
                let depth = 1.0 - interpolated_reciprocal_w;

                let color = match texture {
                    Some(tex) => {
                        let u = ((uvs[0].u / va.w) * alpha
                            + (uvs[1].u / vb.w) * beta
                            + (uvs[2].u / vc.w) * gamma)
                            / interpolated_reciprocal_w;
                        let v = ((uvs[0].v / va.w) * alpha
                            + (uvs[1].v / vb.w) * beta
                            + (uvs[2].v / vc.w) * gamma)
                            / interpolated_reciprocal_w;
                        tex.sample_wrap(u, v)
                    }
                    None => triangle.color,
                };

                buffer.set_pixel_with_depth(x, y, depth, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;
    use crate::render::rasterizer::ScreenVertex;

    const W: u32 = 16;
    const H: u32 = 16;

    fn buffers() -> (Vec<u32>, Vec<f32>) {
        (
            vec![colors::BACKGROUND; (W * H) as usize],
            vec![1.0f32; (W * H) as usize],
        )
    }

    fn vertex(x: i32, y: i32, w: f32) -> ScreenVertex {
        ScreenVertex::new(x, y, 0.0, w)
    }

    #[test]
    fn interior_pixels_are_filled() {
        let (mut color, mut depth) = buffers();
        let mut fb = FrameBuffer::new(&mut color, &mut depth, W, H);

        let tri = Triangle::solid(
            [vertex(1, 1, 1.0), vertex(13, 1, 1.0), vertex(7, 13, 1.0)],
            0xFFFF0000,
        );
        EdgeFunctionRasterizer::new().fill_triangle(&tri, &mut fb, None);

        // Pixel centers well inside the triangle
        assert_eq!(fb.get_pixel(7, 5), Some(0xFFFF0000));
        assert_eq!(fb.get_pixel(7, 2), Some(0xFFFF0000));
        // And well outside
        assert_eq!(fb.get_pixel(0, 13), Some(colors::BACKGROUND));
    }

    #[test]
    fn winding_order_does_not_matter() {
        for swap in [false, true] {
            let (mut color, mut depth) = buffers();
            let mut fb = FrameBuffer::new(&mut color, &mut depth, W, H);

            let (v1, v2) = if swap {
                (vertex(13, 1, 1.0), vertex(7, 13, 1.0))
            } else {
                (vertex(7, 13, 1.0), vertex(13, 1, 1.0))
            };
            let tri = Triangle::solid([vertex(1, 1, 1.0), v1, v2], 0xFF00FF00);
            EdgeFunctionRasterizer::new().fill_triangle(&tri, &mut fb, None);

            assert_eq!(fb.get_pixel(7, 5), Some(0xFF00FF00), "swap = {swap}");
        }
    }

    #[test]
    fn degenerate_triangle_is_skipped() {
        let (mut color, mut depth) = buffers();
        let mut fb = FrameBuffer::new(&mut color, &mut depth, W, H);

        // Collinear vertices: zero area
        let tri = Triangle::solid(
            [vertex(0, 0, 1.0), vertex(5, 5, 1.0), vertex(10, 10, 1.0)],
            0xFFFFFFFF,
        );
        EdgeFunctionRasterizer::new().fill_triangle(&tri, &mut fb, None);

        assert!(color.iter().all(|&c| c == colors::BACKGROUND));
    }

    #[test]
    fn depth_test_keeps_closer_surface() {
        let (mut color, mut depth) = buffers();
        let mut fb = FrameBuffer::new(&mut color, &mut depth, W, H);
        let raster = EdgeFunctionRasterizer::new();

        let near = Triangle::solid(
            [vertex(0, 0, 1.25), vertex(12, 0, 1.25), vertex(0, 12, 1.25)],
            0xFF00FF00,
        );
        let far = Triangle::solid(
            [vertex(0, 0, 5.0), vertex(12, 0, 5.0), vertex(0, 12, 5.0)],
            0xFF0000FF,
        );

        raster.fill_triangle(&far, &mut fb, None);
        raster.fill_triangle(&near, &mut fb, None);
        assert_eq!(fb.get_pixel(4, 4), Some(0xFF00FF00));

        let (mut color, mut depth) = buffers();
        let mut fb = FrameBuffer::new(&mut color, &mut depth, W, H);
        raster.fill_triangle(&near, &mut fb, None);
        raster.fill_triangle(&far, &mut fb, None);
        assert_eq!(fb.get_pixel(4, 4), Some(0xFF00FF00));
    }
}
