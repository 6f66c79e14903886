//! CPU-generated unit meshes for the instanced layers.

use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct MeshVertex {
    pub(crate) position: [f32; 3],
    pub(crate) normal: [f32; 3],
}

pub(crate) struct MeshData {
    pub(crate) vertices: Vec<MeshVertex>,
    pub(crate) indices: Vec<u32>,
}

/// Unit-radius UV sphere for the ornaments.
pub(crate) fn uv_sphere(rings: u32, segments: u32) -> MeshData {
    let mut vertices = Vec::with_capacity(((rings + 1) * (segments + 1)) as usize);
    for ring in 0..=rings {
        let phi = PI * ring as f32 / rings as f32;
        let (sp, cp) = phi.sin_cos();
        for seg in 0..=segments {
            let theta = TAU * seg as f32 / segments as f32;
            let (st, ct) = theta.sin_cos();
            let p = [sp * ct, cp, sp * st];
            vertices.push(MeshVertex {
                position: p,
                normal: p,
            });
        }
    }
    let mut indices = Vec::with_capacity((rings * segments * 6) as usize);
    let stride = segments + 1;
    for ring in 0..rings {
        for seg in 0..segments {
            let a = ring * stride + seg;
            let b = a + stride;
            indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }
    MeshData { vertices, indices }
}

/// Unit cube (half extent 0.5) for the gift boxes, flat normals per face.
pub(crate) fn cube() -> MeshData {
    const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        // normal, tangent u, tangent v
        ([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
    ];
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (n, u, v) in FACES {
        let base = vertices.len() as u32;
        for (su, sv) in [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)] {
            let position = [
                n[0] * 0.5 + u[0] * su + v[0] * sv,
                n[1] * 0.5 + u[1] * su + v[1] * sv,
                n[2] * 0.5 + u[2] * su + v[2] * sv,
            ];
            vertices.push(MeshVertex {
                position,
                normal: n,
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    MeshData { vertices, indices }
}

/// Unit-radius octahedron for the apex star, flat normals per face.
pub(crate) fn octahedron() -> MeshData {
    let apex = [[0.0, 1.0, 0.0], [0.0, -1.0, 0.0]];
    let ring = [
        [1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0],
        [-1.0, 0.0, 0.0],
        [0.0, 0.0, -1.0],
    ];
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(24);
    for (tip_idx, tip) in apex.iter().enumerate() {
        for i in 0..4 {
            let a = ring[i];
            // Flip winding for the lower half so faces stay outward
            let b = if tip_idx == 0 {
                ring[(i + 1) % 4]
            } else {
                ring[(i + 3) % 4]
            };
            let face = [*tip, a, b];
            // Flat normal from the face centroid
            let cx = (face[0][0] + face[1][0] + face[2][0]) / 3.0;
            let cy = (face[0][1] + face[1][1] + face[2][1]) / 3.0;
            let cz = (face[0][2] + face[1][2] + face[2][2]) / 3.0;
            let len = (cx * cx + cy * cy + cz * cz).sqrt().max(1e-6);
            let normal = [cx / len, cy / len, cz / len];
            let base = vertices.len() as u32;
            for p in face {
                vertices.push(MeshVertex {
                    position: p,
                    normal,
                });
            }
            indices.extend_from_slice(&[base, base + 1, base + 2]);
        }
    }
    MeshData { vertices, indices }
}

/// Unit-radius disc in the XZ plane (normal +Y) for the ground glow.
pub(crate) fn disc(segments: u32) -> MeshData {
    let normal = [0.0, 1.0, 0.0];
    let mut vertices = vec![MeshVertex {
        position: [0.0, 0.0, 0.0],
        normal,
    }];
    for seg in 0..=segments {
        let theta = TAU * seg as f32 / segments as f32;
        vertices.push(MeshVertex {
            position: [theta.cos(), 0.0, theta.sin()],
            normal,
        });
    }
    let mut indices = Vec::with_capacity((segments * 3) as usize);
    for seg in 0..segments {
        indices.extend_from_slice(&[0, seg + 2, seg + 1]);
    }
    MeshData { vertices, indices }
}
