//! Rendering internals: frame buffers, drawing primitives, rasterization.

pub mod framebuffer;
pub mod rasterizer;
pub mod renderer;

pub use framebuffer::FrameBuffer;
pub use rasterizer::{
    barycentric_weights, BarycentricWeights, EdgeFunctionRasterizer, Rasterizer,
    RasterizerDispatcher, RasterizerType, ScanlineRasterizer, ScreenVertex, TexCoord, Triangle,
};
pub use renderer::Renderer;
