//! Supershape mesh generation.
//!
//! Pure CPU-side geometry; no device types appear here. Two superformula
//! profiles (one sampled along latitude, one along longitude) are combined
//! over a grid and triangulated into a flat, non-indexed vertex stream.

use std::f64::consts::PI;

use crate::error::RenderError;

/// Superformula curve parameters: symmetry order `m`, shape exponents
/// `n1..n3`, axis scales `a`/`b`.
#[derive(Debug, Copy, Clone)]
pub struct Profile {
    pub m: f64,
    pub n1: f64,
    pub n2: f64,
    pub n3: f64,
    pub a: f64,
    pub b: f64,
}

/// Latitude profile of the generated surface.
const LAT_PROFILE: Profile = Profile { m: 10.0, n1: 3.0, n2: 0.2, n3: 1.0, a: 1.0, b: 1.0 };

/// Longitude profile of the generated surface.
const LON_PROFILE: Profile = Profile { m: 5.7, n1: 0.5, n2: 1.0, n3: 2.5, a: 1.0, b: 1.0 };

/// Radius of a superformula curve at angle `theta`.
///
/// No domain clamping: a zero base under a negative exponent follows IEEE
/// semantics, so the result may be infinite or NaN and flows downstream
/// untouched. That mirrors the source material and is intentional.
pub fn superformula(theta: f64, p: Profile) -> f64 {
    let cos_term = ((p.m * theta / 4.0).cos() / p.a).abs().powf(p.n2);
    let sin_term = ((p.m * theta / 4.0).sin() / p.b).abs().powf(p.n3);
    (cos_term + sin_term).powf(-1.0 / p.n1)
}

/// Generates the supershape as a flat, non-indexed triangle list.
///
/// The output holds `meridians · parallels · 2` triangles, 9 floats each.
/// Grid cell `(i, j)` becomes quad `(p1, p1+1, p2, p2+1)` with
/// `row = meridians + 1` (the vertex table's physical row stride),
/// `p1 = i·row + j`, `p2 = p1 + row`, and the quad splits into triangles
/// `(a, d, c)` then `(a, b, d)` — the winding that keeps front faces
/// outward under back-face culling.
///
/// A zero dimension yields an empty stream without failing; negative
/// dimensions are a caller contract violation. Intermediate math runs in
/// `f64` and is stored as `f32`, matching the original number model.
pub fn generate(meridians: i32, parallels: i32) -> Result<Vec<f32>, RenderError> {
    if meridians < 0 || parallels < 0 {
        return Err(RenderError::InvalidGrid { meridians, parallels });
    }
    let meridians = meridians as usize;
    let parallels = parallels as usize;

    // Grid-ordered vertex table, one row per meridian step.
    let mut vertices = Vec::with_capacity((parallels + 1) * (meridians + 1));
    for i in 0..=parallels {
        let lat = i as f64 * PI / parallels as f64 - PI / 2.0;
        let r2 = superformula(lat, LAT_PROFILE);
        for j in 0..=meridians {
            let lon = j as f64 * 2.0 * PI / meridians as f64 - PI;
            let r1 = superformula(lon, LON_PROFILE);
            vertices.push([
                (r1 * lon.cos() * r2 * lat.cos()) as f32,
                (r1 * lon.sin() * r2 * lat.cos()) as f32,
                (r2 * lat.sin()) as f32,
            ]);
        }
    }

    // One table row per latitude step: meridians + 1 vertices wide.
    let row = meridians + 1;
    let mut mesh = Vec::with_capacity(parallels * meridians * 2 * 9);
    for i in 0..parallels {
        for j in 0..meridians {
            let p1 = i * row + j;
            let p2 = p1 + row;
            // quad (p1, p1+1, p2, p2+1) -> triangles (a, d, c), (a, b, d)
            for corner in [p1, p2 + 1, p2, p1, p1 + 1, p2 + 1] {
                mesh.extend_from_slice(&vertices[corner]);
            }
        }
    }

    Ok(mesh)
}
