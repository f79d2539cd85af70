//! A CPU-based software-rendered 3D graphics engine.
//!
//! This crate provides a software rasterization pipeline: meshes are
//! transformed and projected on the CPU, then scan-converted into shaded
//! pixels with per-pixel depth testing and perspective-correct texture
//! mapping. SDL2 is used only for window management and display.
//!
//! # Quick Start
//!
//! ```ignore
//! use rastly::prelude::*;
//!
//! let mut window = Window::new("My App", 800, 600)?;
//! let mut engine = Engine::new(800, 600);
//! engine.load_cube_mesh();
//! ```

// Public API - exposed to library consumers
pub mod colors;
pub mod engine;
pub mod math;
pub mod mesh;
pub mod texture;
pub mod window;

// Internal modules - used within the crate only
pub(crate) mod render;

// Re-export commonly needed types at crate root for convenience
pub use engine::{Engine, RenderMode};
pub use mesh::{Face, LoadError, Mesh};
pub use render::{RasterizerType, TexCoord};
pub use texture::Texture;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use rastly::prelude::*;
/// ```
pub mod prelude {
    // Engine
    pub use crate::engine::{Engine, RenderMode};

    // Mesh & texture
    pub use crate::mesh::Mesh;
    pub use crate::texture::Texture;

    // Math
    pub use crate::math::mat4::Mat4;
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;
    pub use crate::math::vec4::Vec4;

    // Rendering
    pub use crate::render::RasterizerType;

    // Window
    pub use crate::window::{FrameLimiter, Window, WindowEvent};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::render::{
        EdgeFunctionRasterizer, FrameBuffer, Rasterizer, ScanlineRasterizer, ScreenVertex,
        TexCoord, Triangle,
    };
}
