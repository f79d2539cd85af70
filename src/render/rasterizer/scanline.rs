//! Scanline-based triangle rasterization.
//!
//! This module implements triangle rasterization using the classic scanline
//! algorithm with flat-top/flat-bottom triangle decomposition, combined with
//! barycentric per-pixel attribute interpolation and depth testing.
//!
//! # Algorithm Overview
//!
//! 1. **Sort vertices** by Y coordinate (top to bottom in screen space),
//!    keeping texture coordinates paired with their vertices.
//! 2. **Walk two halves**: splitting at the middle vertex's row turns the
//!    triangle into two trapezoids, each bounded by two straight edges with
//!    constant inverse slope:
//!
//!    ```text
//!         v0
//!         /\
//!        /  \         upper half: rows v0.y ..= v1.y (flat bottom)
//!       /----\ <- v1.y
//!      v1     \       lower half: rows v1.y ..= v2.y (flat top)
//!        \     \
//!         \     \
//!          \_____\
//!                v2
//!    ```
//!
//!    For each integer row the left/right span bounds step by the inverse
//!    slopes (`dx` per unit `dy`), so no per-pixel edge test is needed.
//! 3. **Resolve each pixel** in the span: compute barycentric weights,
//!    interpolate `1/w`, depth-test, and write either the flat color or a
//!    perspective-correct texture sample.
//!
//! # Span convention
//!
//! Horizontal spans are half-open on the right (`x_start..x_end`), so the
//! rightmost column of a span is never drawn. Adjacent triangles sharing an
//! edge therefore cover each boundary pixel at most once. This is a
//! deliberate convention, not an artifact.
//!
//! # Depth
//!
//! Visibility is resolved per pixel with the `1 - interpolated(1/w)` metric
//! stored in the frame's depth buffer (smaller = closer). Interpolating the
//! reciprocal of w is what makes the test perspective-consistent: `1/w` is
//! linear across the screen-space triangle while `w` itself is not.

use super::barycentric::barycentric_weights;
use super::{Rasterizer, ScreenVertex, TexCoord, Triangle};
use crate::math::vec2::Vec2;
use crate::math::vec4::Vec4;
use crate::render::framebuffer::FrameBuffer;
use crate::texture::Texture;

/// Scanline rasterizer using flat-top/flat-bottom decomposition.
///
/// Input triangles can have vertices in any order; sorting happens
/// internally and texture coordinates are reordered in lockstep with their
/// vertices. Per-pixel work is allocation-free and O(1).
pub struct ScanlineRasterizer;

impl ScanlineRasterizer {
    /// Creates a new scanline rasterizer instance.
    pub fn new() -> Self {
        Self
    }

    /// Sorts three vertices ascending by Y, texture coordinates in lockstep.
    ///
    /// Three pairwise conditional swaps suffice for 3 elements. After
    /// sorting: `v[0].y <= v[1].y <= v[2].y`, and `uv[i]` still belongs to
    /// `v[i]`.
    fn sort_by_y(v: &mut [ScreenVertex; 3], uv: &mut [TexCoord; 3]) {
        if v[0].y > v[1].y {
            v.swap(0, 1);
            uv.swap(0, 1);
        }
        if v[1].y > v[2].y {
            v.swap(1, 2);
            uv.swap(1, 2);
        }
        if v[0].y > v[1].y {
            v.swap(0, 1);
            uv.swap(0, 1);
        }
    }

    /// Walks every covered pixel of a y-sorted triangle, top to bottom and
    /// left to right, invoking `plot` with each (x, y).
    ///
    /// The upper (flat-bottom) half spans rows `v0.y..=v1.y`, the lower
    /// (flat-top) half rows `v1.y..=v2.y`; a half with zero height is
    /// skipped entirely, which is also what keeps degenerate (collinear or
    /// near-zero-area) triangles from producing any pixels. Span bounds are
    /// recomputed per row from the edge inverse slopes and swapped if the
    /// edges cross order; columns iterate half-open, excluding `x_end`.
    fn walk_spans<F: FnMut(i32, i32)>(v: &[ScreenVertex; 3], mut plot: F) {
        let (x0, y0) = (v[0].x, v[0].y);
        let (x1, y1) = (v[1].x, v[1].y);
        let (x2, y2) = (v[2].x, v[2].y);

        // Upper half: edges v0->v1 and v0->v2
        let mut inv_slope_1 = 0.0;
        let mut inv_slope_2 = 0.0;

        if y1 - y0 != 0 {
            inv_slope_1 = (x1 - x0) as f32 / (y1 - y0).abs() as f32;
        }
        if y2 - y0 != 0 {
            inv_slope_2 = (x2 - x0) as f32 / (y2 - y0).abs() as f32;
        }

        if y1 - y0 != 0 {
            for y in y0..=y1 {
                let mut x_start = (x1 as f32 + (y - y1) as f32 * inv_slope_1) as i32;
                let mut x_end = (x0 as f32 + (y - y0) as f32 * inv_slope_2) as i32;

                if x_end < x_start {
                    std::mem::swap(&mut x_start, &mut x_end);
                }

                for x in x_start..x_end {
                    plot(x, y);
                }
            }
        }

        // Lower half: edges v1->v2 and v0->v2
        let mut inv_slope_1 = 0.0;
        let mut inv_slope_2 = 0.0;

        if y2 - y1 != 0 {
            inv_slope_1 = (x2 - x1) as f32 / (y2 - y1).abs() as f32;
        }
        if y2 - y0 != 0 {
            inv_slope_2 = (x2 - x0) as f32 / (y2 - y0).abs() as f32;
        }

        if y2 - y1 != 0 {
            for y in y1..=y2 {
                let mut x_start = (x1 as f32 + (y - y1) as f32 * inv_slope_1) as i32;
                let mut x_end = (x0 as f32 + (y - y0) as f32 * inv_slope_2) as i32;

                if x_end < x_start {
                    std::mem::swap(&mut x_start, &mut x_end);
                }

                for x in x_start..x_end {
                    plot(x, y);
                }
            }
        }
    }

    /// Resolve one solid-color pixel: interpolate reciprocal depth and write
    /// `color` if the depth test passes.
    #[inline]
    fn resolve_pixel(
        x: i32,
        y: i32,
        color: u32,
        a: Vec4,
        b: Vec4,
        c: Vec4,
        buffer: &mut FrameBuffer,
    ) {
        let p = Vec2::new(x as f32, y as f32);
        let weights = barycentric_weights(a.to_vec2(), b.to_vec2(), c.to_vec2(), p);

        // 1/w is linear in screen space, so it interpolates with plain
        // barycentric weights
        let interpolated_reciprocal_w =
            weights.alpha / a.w + weights.beta / b.w + weights.gamma / c.w;

        // Flip the sense so that closer surfaces compare as smaller
        let depth = 1.0 - interpolated_reciprocal_w;

        buffer.set_pixel_with_depth(x, y, depth, color);
    }

    /// Resolve one textured pixel: recover perspective-correct UVs, sample
    /// the texture with wrap-around addressing, and write the sample if the
    /// depth test passes.
    #[inline]
    #[allow(clippy::too_many_arguments)]
    fn resolve_texel(
        x: i32,
        y: i32,
        texture: &Texture,
        a: Vec4,
        b: Vec4,
        c: Vec4,
        a_uv: TexCoord,
        b_uv: TexCoord,
        c_uv: TexCoord,
        buffer: &mut FrameBuffer,
    ) {
        let p = Vec2::new(x as f32, y as f32);
        let weights = barycentric_weights(a.to_vec2(), b.to_vec2(), c.to_vec2(), p);

        // Interpolate u/w and v/w instead of u and v directly: attributes
        // divided by w are linear in screen space, u and v themselves are not
        let mut interpolated_u = (a_uv.u / a.w) * weights.alpha
            + (b_uv.u / b.w) * weights.beta
            + (c_uv.u / c.w) * weights.gamma;
        let mut interpolated_v = (a_uv.v / a.w) * weights.alpha
            + (b_uv.v / b.w) * weights.beta
            + (c_uv.v / c.w) * weights.gamma;

        let interpolated_reciprocal_w =
            weights.alpha / a.w + weights.beta / b.w + weights.gamma / c.w;

        // Divide back by 1/w to undo the perspective foreshortening
        interpolated_u /= interpolated_reciprocal_w;
        interpolated_v /= interpolated_reciprocal_w;

        let color = texture.sample_wrap(interpolated_u, interpolated_v);

        let depth = 1.0 - interpolated_reciprocal_w;

        buffer.set_pixel_with_depth(x, y, depth, color);
    }
}

impl Default for ScanlineRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer for ScanlineRasterizer {
    /// Fills a triangle using the scanline algorithm.
    ///
    /// Vertices are sorted by Y (attributes in lockstep), then the two
    /// triangle halves are walked row by row, resolving every span pixel
    /// against the depth buffer. For textured fills the V coordinate is
    /// flipped (`v = 1 - v`) once, before any interpolation, to account for
    /// V growing downward in image space.
    fn fill_triangle(&self, triangle: &Triangle, buffer: &mut FrameBuffer, texture: Option<&Texture>) {
        let mut vertices = triangle.vertices;
        let mut uvs = triangle.uvs;

        Self::sort_by_y(&mut vertices, &mut uvs);

        let a = vertices[0].to_vec4();
        let b = vertices[1].to_vec4();
        let c = vertices[2].to_vec4();

        match texture {
            Some(tex) => {
                let a_uv = TexCoord::new(uvs[0].u, 1.0 - uvs[0].v);
                let b_uv = TexCoord::new(uvs[1].u, 1.0 - uvs[1].v);
                let c_uv = TexCoord::new(uvs[2].u, 1.0 - uvs[2].v);

                Self::walk_spans(&vertices, |x, y| {
                    Self::resolve_texel(x, y, tex, a, b, c, a_uv, b_uv, c_uv, buffer);
                });
            }
            None => {
                let color = triangle.color;
                Self::walk_spans(&vertices, |x, y| {
                    Self::resolve_pixel(x, y, color, a, b, c, buffer);
                });
            }
        }
    }
}
