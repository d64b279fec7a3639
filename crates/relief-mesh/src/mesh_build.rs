use relief_geom::{Sphere, Vec3};
use serde::{Deserialize, Serialize};

/// Indexed triangle mesh in flat arrays (xyz positions/normals, uv pairs).
#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeshBuild {
    pub pos: Vec<f32>,
    pub norm: Vec<f32>,
    pub uv: Vec<f32>,
    pub idx: Vec<u32>,
    pub face_norm: Vec<f32>,
    pub bounds: Sphere,
}

impl MeshBuild {
    /// Flat grid in the XY plane centered on the origin, rows from `+height/2`
    /// down to `-height/2`, columns from `-width/2` to `+width/2`.
    /// Cells are split into triangles `(a, b, d)` and `(b, c, d)`.
    pub fn plane(width: f32, height: f32, w_segments: usize, h_segments: usize) -> Self {
        let (gx, gy) = (w_segments.max(1), h_segments.max(1));
        let (cols, rows) = (gx + 1, gy + 1);
        let seg_w = width / gx as f32;
        let seg_h = height / gy as f32;
        let mut m = MeshBuild::default();
        m.reserve(cols * rows, gx * gy * 2);
        for iy in 0..rows {
            let y = iy as f32 * seg_h - height / 2.0;
            for ix in 0..cols {
                let x = ix as f32 * seg_w - width / 2.0;
                m.pos.extend_from_slice(&[x, -y, 0.0]);
                m.norm.extend_from_slice(&[0.0, 0.0, 1.0]);
                m.uv
                    .extend_from_slice(&[ix as f32 / gx as f32, 1.0 - iy as f32 / gy as f32]);
            }
        }
        for iy in 0..gy {
            for ix in 0..gx {
                let a = (ix + cols * iy) as u32;
                let b = (ix + cols * (iy + 1)) as u32;
                let c = (ix + 1 + cols * (iy + 1)) as u32;
                let d = (ix + 1 + cols * iy) as u32;
                m.idx.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }
        m.compute_normals();
        m.compute_bounds();
        m
    }

    #[inline]
    pub fn reserve(&mut self, vertices: usize, triangles: usize) {
        self.pos.reserve(vertices * 3);
        self.norm.reserve(vertices * 3);
        self.uv.reserve(vertices * 2);
        self.idx.reserve(triangles * 3);
        self.face_norm.reserve(triangles * 3);
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len() / 3
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.idx.len() / 3
    }

    #[inline]
    pub fn vertex(&self, i: usize) -> Vec3 {
        Vec3::new(self.pos[i * 3], self.pos[i * 3 + 1], self.pos[i * 3 + 2])
    }

    #[inline]
    pub fn normal(&self, i: usize) -> Vec3 {
        Vec3::new(self.norm[i * 3], self.norm[i * 3 + 1], self.norm[i * 3 + 2])
    }

    pub fn vertices(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.pos.chunks_exact(3).map(|p| Vec3::new(p[0], p[1], p[2]))
    }

    #[inline]
    pub fn set_y(&mut self, i: usize, y: f32) {
        self.pos[i * 3 + 1] = y;
    }

    #[inline]
    pub fn set_z(&mut self, i: usize, z: f32) {
        self.pos[i * 3 + 2] = z;
    }

    /// Face normals (unit cross products) and area-weighted vertex normals.
    /// Must be called after positions change.
    pub fn compute_normals(&mut self) {
        let mut acc = vec![Vec3::ZERO; self.vertex_count()];
        self.face_norm.clear();
        for tri in self.idx.chunks_exact(3) {
            let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let (va, vb, vc) = (self.vertex(a), self.vertex(b), self.vertex(c));
            let n = (vc - vb).cross(va - vb);
            acc[a] += n;
            acc[b] += n;
            acc[c] += n;
            let f = n.normalized();
            self.face_norm.extend_from_slice(&[f.x, f.y, f.z]);
        }
        self.norm.clear();
        for n in acc {
            let n = n.normalized();
            self.norm.extend_from_slice(&[n.x, n.y, n.z]);
        }
    }

    pub fn compute_bounds(&mut self) {
        let pts: Vec<Vec3> = self.vertices().collect();
        self.bounds = Sphere::enclosing(&pts);
    }
}
