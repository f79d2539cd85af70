//! Triangle rasterization algorithms.
//!
//! This module provides the screen-space triangle types consumed by the
//! rasterizers and multiple rasterizer implementations that can be swapped
//! at runtime for testing and benchmarking purposes.
//!
//! Available algorithms:
//! - [`ScanlineRasterizer`]: flat-top/flat-bottom triangle decomposition
//! - [`EdgeFunctionRasterizer`]: bounding box iteration with edge function tests
//!
//! Both perform perspective-correct attribute interpolation and depth-test
//! every pixel against the frame's depth buffer.

mod barycentric;
mod edgefunction;
mod scanline;

pub use barycentric::{barycentric_weights, BarycentricWeights};
pub use edgefunction::EdgeFunctionRasterizer;
pub use scanline::ScanlineRasterizer;

use super::framebuffer::FrameBuffer;
use crate::math::vec2::Vec2;
use crate::math::vec4::Vec4;
use crate::texture::Texture;

/// A vertex in device space, ready for rasterization.
///
/// `x`, `y` are integer pixel coordinates with the origin at the top-left
/// and y increasing downward. `z` is the projected depth value and `w` the
/// pre-divide homogeneous coordinate from the projection step. `w` must
/// arrive intact (not divided out): perspective-correct interpolation and
/// the depth metric both rely on `1/w` being linear in screen space.
///
/// A vertex with `w == 0` is degenerate; the transform pipeline must not
/// submit such vertices (clipping is its concern, not the rasterizer's).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenVertex {
    pub x: i32,
    pub y: i32,
    pub z: f32,
    pub w: f32,
}

impl ScreenVertex {
    pub const fn new(x: i32, y: i32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Position as a homogeneous point with float coordinates.
    #[inline]
    pub fn to_vec4(self) -> Vec4 {
        Vec4::new(self.x as f32, self.y as f32, self.z, self.w)
    }

    /// 2D screen position, for barycentric queries.
    #[inline]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }
}

/// A per-corner texture coordinate.
///
/// u/v are nominally in [0, 1] but are not clamped anywhere; sampling wraps
/// around instead (see [`Texture::sample_wrap`]).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TexCoord {
    pub u: f32,
    pub v: f32,
}

impl TexCoord {
    pub const ZERO: Self = Self { u: 0.0, v: 0.0 };

    pub const fn new(u: f32, v: f32) -> Self {
        Self { u, v }
    }
}

/// A triangle ready for rasterization in screen space.
///
/// Carries everything a fill needs: three device-space vertices, their
/// texture coordinates (ignored for solid fills) and a flat fill color
/// (ignored for textured fills).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub vertices: [ScreenVertex; 3],
    pub uvs: [TexCoord; 3],
    pub color: u32,
}

impl Triangle {
    pub fn new(vertices: [ScreenVertex; 3], uvs: [TexCoord; 3], color: u32) -> Self {
        Self {
            vertices,
            uvs,
            color,
        }
    }

    /// A solid-color triangle with no meaningful texture coordinates.
    pub fn solid(vertices: [ScreenVertex; 3], color: u32) -> Self {
        Self::new(vertices, [TexCoord::ZERO; 3], color)
    }
}

/// Trait for triangle rasterization algorithms.
///
/// Implementors define how triangles are filled into a frame buffer. When a
/// texture is supplied the triangle's texture coordinates are sampled with
/// perspective correction; otherwise the triangle's flat color is used.
/// Either way every produced pixel is depth-tested, so fill order between
/// triangles does not affect the final image.
pub trait Rasterizer {
    fn fill_triangle(&self, triangle: &Triangle, buffer: &mut FrameBuffer, texture: Option<&Texture>);
}

/// Available rasterization algorithms.
///
/// Use this enum to select which rasterizer the engine should use.
/// Can be changed at runtime via `Engine::set_rasterizer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RasterizerType {
    /// Scanline rasterizer using flat-top/flat-bottom triangle decomposition.
    /// Only touches covered pixels, which favors large or thin triangles.
    #[default]
    Scanline,
    /// Edge function rasterizer that tests each pixel in the bounding box.
    /// Simpler algorithm, forms the basis for GPU rasterization.
    EdgeFunction,
}

impl std::fmt::Display for RasterizerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RasterizerType::Scanline => write!(f, "Scanline"),
            RasterizerType::EdgeFunction => write!(f, "EdgeFunction"),
        }
    }
}

/// Internal dispatcher that holds both rasterizer implementations.
pub struct RasterizerDispatcher {
    scanline: ScanlineRasterizer,
    edge_function: EdgeFunctionRasterizer,
    active: RasterizerType,
}

impl RasterizerDispatcher {
    pub fn new(rasterizer_type: RasterizerType) -> Self {
        Self {
            scanline: ScanlineRasterizer::new(),
            edge_function: EdgeFunctionRasterizer::new(),
            active: rasterizer_type,
        }
    }

    pub fn set_type(&mut self, rasterizer_type: RasterizerType) {
        self.active = rasterizer_type;
    }

    pub fn active_type(&self) -> RasterizerType {
        self.active
    }
}

impl Rasterizer for RasterizerDispatcher {
    #[inline]
    fn fill_triangle(&self, triangle: &Triangle, buffer: &mut FrameBuffer, texture: Option<&Texture>) {
        match self.active {
            RasterizerType::Scanline => self.scanline.fill_triangle(triangle, buffer, texture),
            RasterizerType::EdgeFunction => {
                self.edge_function.fill_triangle(triangle, buffer, texture)
            }
        }
    }
}
