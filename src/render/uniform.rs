use glam::Mat4;

use crate::device::RenderDevice;

/// A uniform payload, tagged with its shape.
///
/// The tag — not the payload length — selects the device upload path, so a
/// genuine 4-component vector can never be mistaken for matrix data at the
/// binder.
#[derive(Debug, Clone, PartialEq)]
pub enum UniformValue {
    Scalar(f32),
    Vec3([f32; 3]),
    Vec4([f32; 4]),
    /// Column-major, uploaded untransposed.
    Mat4([f32; 16]),
}

impl From<f32> for UniformValue {
    fn from(value: f32) -> Self {
        Self::Scalar(value)
    }
}

impl From<[f32; 3]> for UniformValue {
    fn from(value: [f32; 3]) -> Self {
        Self::Vec3(value)
    }
}

impl From<[f32; 4]> for UniformValue {
    fn from(value: [f32; 4]) -> Self {
        Self::Vec4(value)
    }
}

impl From<[f32; 16]> for UniformValue {
    fn from(value: [f32; 16]) -> Self {
        Self::Mat4(value)
    }
}

impl From<Mat4> for UniformValue {
    fn from(value: Mat4) -> Self {
        Self::Mat4(value.to_cols_array())
    }
}

/// Resolves `name` on `program` and uploads `value` through the matching
/// device call, returning the location for callers that re-upload later.
///
/// The location is not validated: a name with no active uniform yields the
/// backend's invalid location, and writes through it are silently dropped by
/// the device. That passthrough is deliberate.
pub fn bind_uniform<D: RenderDevice>(
    device: &mut D,
    program: D::Program,
    name: &str,
    value: impl Into<UniformValue>,
) -> D::UniformLocation {
    let location = device.uniform_location(program, name);
    upload_uniform(device, &location, &value.into());
    location
}

/// Re-uploads to an already-resolved location.
pub fn upload_uniform<D: RenderDevice>(
    device: &mut D,
    location: &D::UniformLocation,
    value: &UniformValue,
) {
    match value {
        UniformValue::Scalar(v) => device.set_uniform_f32(location, *v),
        UniformValue::Vec3(v) => device.set_uniform_vec3(location, v),
        UniformValue::Vec4(v) => device.set_uniform_vec4(location, v),
        UniformValue::Mat4(v) => device.set_uniform_mat4(location, v),
    }
}
