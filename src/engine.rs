//! Core rendering engine.
//!
//! The [`Engine`] struct is the main entry point for the renderer. It owns
//! the frame buffers, runs the per-frame transform pipeline (world matrix,
//! perspective projection, viewport mapping) and hands screen-space
//! triangles to the rasterizer. The pipeline is also the place that upholds
//! the rasterizer's preconditions: faces with any vertex at or behind the
//! camera plane (w <= 0) are skipped entirely, so the core never sees a
//! degenerate homogeneous coordinate.

use crate::colors;
use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;
use crate::mesh::{LoadError, Mesh};
use crate::render::{
    Rasterizer, RasterizerDispatcher, RasterizerType, Renderer, ScreenVertex, Triangle,
};
use crate::texture::Texture;

/// Rendering mode presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Wireframe only (key: 1)
    Wireframe,
    /// Wireframe + vertices (key: 2)
    WireframeVertices,
    /// Filled only (key: 3)
    Filled,
    /// Filled + wireframe (key: 4)
    #[default]
    FilledWireframe,
    /// Textured (key: 5); falls back to filled when no texture is loaded
    Textured,
    /// Textured + wireframe (key: 6)
    TexturedWireframe,
}

pub struct Engine {
    renderer: Renderer,
    rasterizer: RasterizerDispatcher,
    triangles_to_render: Vec<Triangle>,
    mesh: Mesh,
    texture: Option<Texture>,
    projection_matrix: Mat4,
    render_mode: RenderMode,
    pub backface_culling: bool,
    pub draw_grid: bool,
}

const FOV_Y: f32 = 45.0;
const Z_NEAR: f32 = 0.1;
const Z_FAR: f32 = 100.0;

impl Engine {
    pub fn new(width: u32, height: u32) -> Self {
        let aspect_ratio = width as f32 / height as f32;
        let projection_matrix =
            Mat4::perspective_lh(FOV_Y.to_radians(), aspect_ratio, Z_NEAR, Z_FAR);

        Self {
            renderer: Renderer::new(width, height),
            rasterizer: RasterizerDispatcher::new(RasterizerType::default()),
            triangles_to_render: Vec::new(),
            mesh: Mesh::new(vec![], vec![]),
            texture: None,
            projection_matrix,
            render_mode: RenderMode::default(),
            backface_culling: true,
            draw_grid: true,
        }
    }

    pub fn set_render_mode(&mut self, mode: RenderMode) {
        self.render_mode = mode;
    }

    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    pub fn set_rasterizer(&mut self, rasterizer_type: RasterizerType) {
        self.rasterizer.set_type(rasterizer_type);
    }

    pub fn rasterizer(&self) -> RasterizerType {
        self.rasterizer.active_type()
    }

    pub fn load_cube_mesh(&mut self) {
        self.mesh = Mesh::cube();
    }

    pub fn load_mesh(&mut self, file_path: &str) -> Result<(), LoadError> {
        self.mesh = Mesh::from_obj(file_path)?;
        Ok(())
    }

    pub fn set_texture(&mut self, texture: Option<Texture>) {
        self.texture = texture;
    }

    pub fn load_texture(&mut self, file_path: &str) -> Result<(), image::ImageError> {
        self.texture = Some(Texture::from_file(file_path)?);
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.renderer.resize(width, height);
        self.projection_matrix = Mat4::perspective_lh(
            FOV_Y.to_radians(),
            width as f32 / height as f32,
            Z_NEAR,
            Z_FAR,
        );
    }

    pub fn mesh_mut(&mut self) -> &mut Mesh {
        &mut self.mesh
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Returns the rendered frame as bytes (ARGB8888 format)
    pub fn frame_buffer(&self) -> &[u8] {
        self.renderer.as_bytes()
    }

    /// Update the engine state - transforms vertices and builds the list of
    /// screen-space triangles for this frame.
    ///
    /// Pipeline per face: model space -> world space (translate * rotate *
    /// scale), backface cull against the origin camera, project to clip
    /// space keeping w intact, perspective divide for x/y/z only, then map
    /// to integer device coordinates. Faces with any w <= 0 are dropped
    /// here; the rasterizer requires that guarantee.
    pub fn update(&mut self) {
        let buffer_width = self.renderer.width();
        let buffer_height = self.renderer.height();

        let rotation = self.mesh.rotation();
        let translation = self.mesh.translation();
        let scale = self.mesh.scale();

        let world_matrix = Mat4::translation(translation.x, translation.y, translation.z)
            * Mat4::rotation_x(rotation.x)
            * Mat4::rotation_y(rotation.y)
            * Mat4::rotation_z(rotation.z)
            * Mat4::scaling(scale.x, scale.y, scale.z);

        let mut triangles = Vec::new();

        'faces: for face in self.mesh.faces() {
            let vertices = self.mesh.vertices();
            let face_vertices = [
                vertices[face.a as usize - 1],
                vertices[face.b as usize - 1],
                vertices[face.c as usize - 1],
            ];

            // Model space -> world space
            let mut transformed = [Vec3::ZERO; 3];
            for (out, vertex) in transformed.iter_mut().zip(face_vertices) {
                *out = (world_matrix * Vec4::point(vertex.x, vertex.y, vertex.z)).to_vec3();
            }

            // With no separate view transform the camera sits at the world
            // origin, so the ray to the camera is just the negated vertex
            if self.backface_culling {
                let ab = transformed[1] - transformed[0];
                let ac = transformed[2] - transformed[0];
                let normal = ab.cross(ac);
                if normal.dot(-transformed[0]) < 0.0 {
                    continue;
                }
            }

            let mut screen_vertices = [ScreenVertex::new(0, 0, 0.0, 0.0); 3];
            for (out, vertex) in screen_vertices.iter_mut().zip(transformed) {
                let clip = self.projection_matrix * Vec4::point(vertex.x, vertex.y, vertex.z);

                // Behind or on the camera plane: the rasterizer must never
                // see w <= 0 (clipping is out of scope, so drop the face)
                if clip.w <= 0.0 {
                    continue 'faces;
                }

                let ndc_x = clip.x / clip.w;
                let ndc_y = clip.y / clip.w;
                let ndc_z = clip.z / clip.w;

                // Viewport transform: NDC [-1, 1] to device pixels, y flipped
                let screen_x = (ndc_x + 1.0) * 0.5 * buffer_width as f32;
                let screen_y = (1.0 - ndc_y) * 0.5 * buffer_height as f32;

                *out = ScreenVertex::new(screen_x as i32, screen_y as i32, ndc_z, clip.w);
            }

            triangles.push(Triangle::new(
                screen_vertices,
                [face.a_uv, face.b_uv, face.c_uv],
                face.color,
            ));
        }

        self.triangles_to_render = triangles;
    }

    /// Render the current frame from the triangles built by [`update`].
    ///
    /// [`update`]: Engine::update
    pub fn render(&mut self) {
        self.renderer.clear(colors::BACKGROUND);
        self.renderer.clear_depth();

        if self.draw_grid {
            self.renderer.draw_grid(50, colors::GRID);
        }

        let (fill, textured, wireframe, vertices) = match self.render_mode {
            RenderMode::Wireframe => (false, false, true, false),
            RenderMode::WireframeVertices => (false, false, true, true),
            RenderMode::Filled => (true, false, false, false),
            RenderMode::FilledWireframe => (true, false, true, false),
            RenderMode::Textured => (true, true, false, false),
            RenderMode::TexturedWireframe => (true, true, true, false),
        };

        if fill {
            let texture = if textured { self.texture.as_ref() } else { None };
            let mut fb = self.renderer.as_framebuffer();
            for triangle in &self.triangles_to_render {
                self.rasterizer.fill_triangle(triangle, &mut fb, texture);
            }
        }

        for triangle in &self.triangles_to_render {
            if wireframe {
                self.renderer
                    .draw_triangle_wireframe(triangle, colors::WIREFRAME);
            }
            if vertices {
                for vertex in &triangle.vertices {
                    self.renderer
                        .draw_rect(vertex.x - 1, vertex.y - 1, 3, 3, colors::VERTEX);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube_engine() -> Engine {
        let mut engine = Engine::new(64, 48);
        engine.draw_grid = false;
        engine.load_cube_mesh();
        // Push the cube in front of the origin camera
        engine.mesh_mut().translation_mut().z = 5.0;
        engine
    }

    #[test]
    fn update_produces_visible_triangles() {
        let mut engine = cube_engine();
        engine.update();

        // Viewed dead-on from the origin, only the camera-facing side of the
        // cube survives backface culling
        assert_eq!(engine.triangles_to_render.len(), 2);
    }

    #[test]
    fn culling_disabled_keeps_every_face() {
        let mut engine = cube_engine();
        engine.backface_culling = false;
        engine.update();
        assert_eq!(engine.triangles_to_render.len(), 12);
    }

    #[test]
    fn screen_vertices_carry_positive_w() {
        let mut engine = cube_engine();
        engine.update();

        for triangle in &engine.triangles_to_render {
            for vertex in &triangle.vertices {
                assert!(vertex.w > 0.0);
                assert!(vertex.x >= 0 && vertex.x < 64);
                assert!(vertex.y >= 0 && vertex.y < 48);
            }
        }
    }

    #[test]
    fn rendered_cube_touches_the_frame() {
        let mut engine = cube_engine();
        engine.set_render_mode(RenderMode::Filled);
        engine.update();
        engine.render();

        let frame: &[u8] = engine.frame_buffer();
        let background = colors::BACKGROUND.to_ne_bytes();
        let touched = frame
            .chunks_exact(4)
            .any(|px| px != background);
        assert!(touched, "filled cube should write at least one pixel");
    }
}
