use crate::device::RenderDevice;
use crate::render::bind_uniform;

/// Spotlight constants, uploaded once during scene setup and never again.
///
/// `position.w` selects point (w > 0) versus directional semantics in the
/// fragment stage. The cutoff pair spans 2.0° to 2.1°: a very narrow beam
/// with a thin smoothstep rim.
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    pub position: [f32; 4],
    pub direction: [f32; 3],
    pub ambient: [f32; 3],
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
    pub cut_off: f32,
    pub outer_cut_off: f32,
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 10.0, 1.0],
            direction: [0.0, 0.0, 10.0],
            ambient: [0.3, 0.3, 0.3],
            diffuse: [1.0, 1.0, 1.0],
            specular: [1.0, 1.0, 1.0],
            cut_off: 2.0_f32.to_radians().cos(),
            outer_cut_off: 2.1_f32.to_radians().cos(),
            constant: 1.0,
            linear: 0.007,
            quadratic: 0.0002,
        }
    }
}

impl Light {
    /// Uploads every field under its `light.*` uniform name.
    pub fn upload<D: RenderDevice>(&self, device: &mut D, program: D::Program) {
        bind_uniform(device, program, "light.position", self.position);
        bind_uniform(device, program, "light.direction", self.direction);
        bind_uniform(device, program, "light.ambient", self.ambient);
        bind_uniform(device, program, "light.diffuse", self.diffuse);
        bind_uniform(device, program, "light.specular", self.specular);
        bind_uniform(device, program, "light.cutOff", self.cut_off);
        bind_uniform(device, program, "light.outerCutOff", self.outer_cut_off);
        bind_uniform(device, program, "light.constant", self.constant);
        bind_uniform(device, program, "light.linear", self.linear);
        bind_uniform(device, program, "light.quadratic", self.quadratic);
    }
}

/// Surface reflectance, uploaded once alongside the light.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub ambient: [f32; 3],
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: [0.04, 0.68, 0.26],
            diffuse: [0.04, 0.68, 0.26],
            specular: [1.0, 1.0, 1.0],
            shininess: 60.0,
        }
    }
}

impl Material {
    /// Uploads every field under its `material.*` uniform name.
    pub fn upload<D: RenderDevice>(&self, device: &mut D, program: D::Program) {
        bind_uniform(device, program, "material.ambient", self.ambient);
        bind_uniform(device, program, "material.diffuse", self.diffuse);
        bind_uniform(device, program, "material.specular", self.specular);
        bind_uniform(device, program, "material.shininess", self.shininess);
    }
}
