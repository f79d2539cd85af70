//! 2D texture storage and sampling.
//!
//! Textures are decoded once into a flat buffer of packed ARGB colors and
//! treated as read-only from then on. Sampling is nearest-neighbor with
//! wrap-around (repeat) addressing.

use std::path::Path;

/// A read-only 2D texture for texture mapping.
pub struct Texture {
    data: Vec<u32>, // Pixel data in ARGB format, row-major
    width: u32,
    height: u32,
}

impl Texture {
    /// Load a texture from an image file (PNG, JPG, etc.)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, image::ImageError> {
        let img = image::open(path)?.to_rgba8();
        let (width, height) = img.dimensions();

        // Convert RGBA bytes to ARGB u32
        let data: Vec<u32> = img
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
            })
            .collect();

        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Build a texture from an existing packed-ARGB buffer.
    ///
    /// # Panics
    /// Panics if `data.len() != width * height`.
    pub fn from_raw(data: Vec<u32>, width: u32, height: u32) -> Self {
        assert_eq!(data.len(), (width * height) as usize);
        Self {
            data,
            width,
            height,
        }
    }

    /// Sample the texture at UV coordinates using nearest-neighbor filtering
    /// with wrap-around addressing.
    ///
    /// The UV is mapped to a texel index by scaling to texture dimensions,
    /// truncating to an integer, and folding back into range with
    /// absolute-value + modulo. Coordinates outside [0,1] therefore tile the
    /// texture instead of clamping to its edge. Along shared triangle edges
    /// this can show visible seams where interpolation overshoots slightly;
    /// GPUs avoid the problem with a fill convention. Callers wanting clamped
    /// sampling should clamp UVs before calling.
    ///
    /// V is expected pre-flipped by the caller (see the scanline rasterizer),
    /// so no axis correction happens here.
    #[inline]
    pub fn sample_wrap(&self, u: f32, v: f32) -> u32 {
        let tex_x = ((u * self.width as f32) as i32).unsigned_abs() % self.width;
        let tex_y = ((v * self.height as f32) as i32).unsigned_abs() % self.height;
        self.data[(tex_y * self.width + tex_x) as usize]
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 10x1 texture where each texel encodes its own x index.
    fn gradient_strip() -> Texture {
        Texture::from_raw((0..10u32).collect(), 10, 1)
    }

    #[test]
    fn sample_inside_range() {
        let tex = gradient_strip();
        assert_eq!(tex.sample_wrap(0.0, 0.0), 0);
        assert_eq!(tex.sample_wrap(0.35, 0.0), 3);
    }

    #[test]
    fn sample_wraps_instead_of_clamping() {
        let tex = gradient_strip();
        // u = 1.3 on width 10 scales to 13, wraps to texel 3 (not 9)
        assert_eq!(tex.sample_wrap(1.3, 0.0), 3);
    }

    #[test]
    fn negative_u_folds_via_absolute_value() {
        let tex = gradient_strip();
        // -0.35 scales to -3.5, truncates to -3, abs to 3
        assert_eq!(tex.sample_wrap(-0.35, 0.0), 3);
    }
}
