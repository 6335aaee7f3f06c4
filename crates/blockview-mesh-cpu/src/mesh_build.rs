use blockview_blocks::TileIndex;
use blockview_geom::{Aabb, Vec3};

use crate::atlas::face_uvs;
use crate::constants::{FLOATS_PER_NORMAL, FLOATS_PER_POS, FLOATS_PER_UV, VERTS_PER_FACE};
use crate::face::Face;

/// Three parallel flat arrays drawn as a plain triangle list (no indices).
#[derive(Default, Clone, Debug, PartialEq)]
pub struct MeshBuild {
    pub pos: Vec<f32>,
    pub uv: Vec<f32>,
    pub norm: Vec<f32>,
}

impl MeshBuild {
    /// Clears all arrays but retains capacity for the next rebuild.
    #[inline]
    pub fn clear_keep_capacity(&mut self) {
        self.pos.clear();
        self.uv.clear();
        self.norm.clear();
    }

    /// Pre-reserve capacity for `n_faces` faces worth of data.
    #[inline]
    pub fn reserve_faces(&mut self, n_faces: usize) {
        let verts = n_faces * VERTS_PER_FACE;
        self.pos.reserve(verts * FLOATS_PER_POS);
        self.uv.reserve(verts * FLOATS_PER_UV);
        self.norm.reserve(verts * FLOATS_PER_NORMAL);
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len() / FLOATS_PER_POS
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.vertex_count() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos.is_empty()
    }

    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_flat(&self.pos)
    }

    /// Appends one face of the unit cube translated by `offset`, textured
    /// with atlas tile `tile`.
    pub fn add_face(&mut self, face: Face, tile: TileIndex, offset: Vec3) {
        let n = face.normal();
        for v in face.vertices() {
            self.pos
                .extend_from_slice(&[v[0] + offset.x, v[1] + offset.y, v[2] + offset.z]);
            self.norm.extend_from_slice(&[n.x, n.y, n.z]);
        }
        for uv in face_uvs(tile) {
            self.uv.extend_from_slice(&uv);
        }
    }

    /// Position of vertex `i`.
    #[inline]
    pub fn position(&self, i: usize) -> Vec3 {
        let p = &self.pos[i * FLOATS_PER_POS..(i + 1) * FLOATS_PER_POS];
        Vec3::new(p[0], p[1], p[2])
    }

    /// UV of vertex `i`.
    #[inline]
    pub fn tex_coord(&self, i: usize) -> [f32; 2] {
        [self.uv[i * FLOATS_PER_UV], self.uv[i * FLOATS_PER_UV + 1]]
    }

    /// Normal of vertex `i`.
    #[inline]
    pub fn normal(&self, i: usize) -> Vec3 {
        let n = &self.norm[i * FLOATS_PER_NORMAL..(i + 1) * FLOATS_PER_NORMAL];
        Vec3::new(n[0], n[1], n[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_face_appends_six_vertices() {
        let mut mb = MeshBuild::default();
        mb.add_face(Face::Right, 16, Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(mb.vertex_count(), 6);
        assert_eq!(mb.triangle_count(), 2);
        assert_eq!(mb.uv.len(), 12);
        assert_eq!(mb.norm.len(), 18);
        for i in 0..6 {
            assert_eq!(mb.normal(i), Vec3::X);
            assert_eq!(mb.position(i).x, 2.5);
        }
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut mb = MeshBuild::default();
        mb.reserve_faces(4);
        mb.add_face(Face::Top, 0, Vec3::ZERO);
        let cap = mb.pos.capacity();
        mb.clear_keep_capacity();
        assert!(mb.is_empty());
        assert_eq!(mb.pos.capacity(), cap);
        assert!(mb.bounds().is_none());
    }
}
