//! The house: a square body made of two triangles with a triangular roof on top, each triangle
//! flat coloured, drawn straight in clip space.

use std::sync::Arc;

use glam::{Vec3, vec3};
use glow::HasContext;

use crate::abs::{Mesh, Shader, ShaderProgram, Vertex};
use crate::error::GlError;

pub const VERTEX_SHADER_SOURCE: &str = include_str!("shaders/house/vert.glsl");
pub const FRAGMENT_SHADER_SOURCE: &str = include_str!("shaders/house/frag.glsl");

/// Attribute location of [`ColorVertex::position`] in the vertex shader.
pub const POSITION_LOCATION: u32 = 0;
/// Attribute location of [`ColorVertex::color`] in the vertex shader.
pub const COLOR_LOCATION: u32 = 1;

/// A vertex with a clip space position and an RGB color.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorVertex {
    pub position: Vec3,
    pub color: Vec3,
}

const fn vertex(position: Vec3, color: Vec3) -> ColorVertex {
    ColorVertex { position, color }
}

impl Vertex for ColorVertex {
    fn vertex_attribs(gl: &glow::Context) {
        let stride = std::mem::size_of::<ColorVertex>() as i32;
        unsafe {
            gl.vertex_attrib_pointer_f32(
                POSITION_LOCATION,
                3,
                glow::FLOAT,
                false,
                stride,
                std::mem::offset_of!(ColorVertex, position) as i32,
            );
            gl.enable_vertex_attrib_array(POSITION_LOCATION);

            gl.vertex_attrib_pointer_f32(
                COLOR_LOCATION,
                3,
                glow::FLOAT,
                false,
                stride,
                std::mem::offset_of!(ColorVertex, color) as i32,
            );
            gl.enable_vertex_attrib_array(COLOR_LOCATION);
        }
    }
}

const BLUE: Vec3 = vec3(0.2, 0.5, 0.8);
const RED: Vec3 = vec3(0.5, 0.2, 0.3);
const GREEN: Vec3 = vec3(0.7, 0.8, 0.4);

/// Three triangles: lower left half of the body, upper right half of the body, then the roof.
pub const HOUSE_VERTICES: [ColorVertex; 9] = [
    vertex(vec3(0.5, -0.5, 0.0), BLUE),
    vertex(vec3(-0.5, -0.5, 0.0), BLUE),
    vertex(vec3(-0.5, 0.5, 0.0), BLUE),
    vertex(vec3(0.5, -0.5, 0.0), RED),
    vertex(vec3(0.5, 0.5, 0.0), RED),
    vertex(vec3(-0.5, 0.5, 0.0), RED),
    vertex(vec3(-0.5, 0.5, 0.0), GREEN),
    vertex(vec3(0.5, 0.5, 0.0), GREEN),
    vertex(vec3(0.0, 1.0, 0.0), GREEN),
];

/// Owns the GPU side of the house: its shader program and its mesh.
pub struct HouseRenderer {
    program: ShaderProgram,
    mesh: Mesh,
}

impl HouseRenderer {
    /// Compiles the shaders and uploads [`HOUSE_VERTICES`].
    pub fn new(gl: &Arc<glow::Context>) -> Result<Self, GlError> {
        let mesh = Mesh::new(gl, &HOUSE_VERTICES, glow::TRIANGLES)?;

        let program = {
            let vert = Shader::new(gl, glow::VERTEX_SHADER, VERTEX_SHADER_SOURCE)?;
            let frag = Shader::new(gl, glow::FRAGMENT_SHADER, FRAGMENT_SHADER_SOURCE)?;
            ShaderProgram::new(gl, &[&vert, &frag])?
        };
        log::debug!("Uploaded house mesh ({} vertices)", mesh.vertex_count());

        Ok(Self { program, mesh })
    }

    pub fn draw(&self) {
        self.program.use_program();
        self.mesh.draw();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(std::mem::size_of::<ColorVertex>(), 6 * std::mem::size_of::<f32>());
        assert_eq!(std::mem::offset_of!(ColorVertex, position), 0);
        assert_eq!(
            std::mem::offset_of!(ColorVertex, color),
            3 * std::mem::size_of::<f32>()
        );
    }

    #[test]
    fn test_house_triangles() {
        assert_eq!(HOUSE_VERTICES.len() % 3, 0);

        let triangles: Vec<_> = HOUSE_VERTICES.chunks(3).collect();
        assert_eq!(triangles.len(), 3);
        for triangle in &triangles {
            // flat shading: one color per triangle
            assert!(triangle.iter().all(|v| v.color == triangle[0].color));
            assert!(triangle.iter().all(|v| v.position.z == 0.0));
        }
        assert_eq!(triangles[0][0].color, vec3(0.2, 0.5, 0.8));
        assert_eq!(triangles[1][0].color, vec3(0.5, 0.2, 0.3));
        assert_eq!(triangles[2][0].color, vec3(0.7, 0.8, 0.4));

        // the roof sits on the top edge of the body
        assert_eq!(triangles[2][2].position, vec3(0.0, 1.0, 0.0));
        assert!(triangles[2][..2].iter().all(|v| v.position.y == 0.5));
    }

    #[test]
    fn test_house_fits_clip_space() {
        for v in &HOUSE_VERTICES {
            assert!(v.position.abs().max_element() <= 1.0);
            assert!(v.color.min_element() >= 0.0 && v.color.max_element() <= 1.0);
        }
    }

    #[test]
    fn test_shader_locations_match() {
        assert!(VERTEX_SHADER_SOURCE.starts_with("#version 330 core"));
        assert!(FRAGMENT_SHADER_SOURCE.starts_with("#version 330 core"));
        assert!(VERTEX_SHADER_SOURCE.contains(&format!(
            "layout (location = {POSITION_LOCATION}) in vec3 position;"
        )));
        assert!(VERTEX_SHADER_SOURCE.contains(&format!(
            "layout (location = {COLOR_LOCATION}) in vec3 color;"
        )));
        assert!(VERTEX_SHADER_SOURCE.contains("out vec3 vertexColor;"));
        assert!(FRAGMENT_SHADER_SOURCE.contains("in vec3 vertexColor;"));
    }
}
