//! Minimal Wavefront OBJ reader.
//!
//! Supports `v`, `vt`, `vn` and `f` with 1-based `a`, `a/b`, `a//c` and
//! `a/b/c` references. Only the first three vertices of a face are kept;
//! larger polygons are truncated rather than triangulated. Materials and
//! groups are ignored.

use std::fs;
use std::path::{Path, PathBuf};

use blockview_geom::{Aabb, Vec3};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ObjError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: invalid number '{token}'")]
    Number { line: usize, token: String },
    #[error("line {line}: {kind} index {index} out of range (have {len})")]
    Index {
        line: usize,
        kind: &'static str,
        index: i64,
        len: usize,
    },
}

/// Flat triangle-list mesh, laid out like the block mesher's output.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjMesh {
    pub pos: Vec<f32>,
    /// Empty when no face referenced texture coordinates. Otherwise one pair
    /// per vertex; faces without texcoords get zeros.
    pub uv: Vec<f32>,
    /// Empty when no face referenced normals. Otherwise one normal per
    /// vertex; faces without normals get their flat normal.
    pub norm: Vec<f32>,
    pub face_count: usize,
}

#[derive(Default)]
struct Pools {
    v: Vec<[f32; 3]>,
    vt: Vec<[f32; 2]>,
    vn: Vec<[f32; 3]>,
}

/// Per-face channels held back until the whole file is read, so faces with
/// and without `vt`/`vn` can be aligned afterwards.
#[derive(Default)]
struct FaceChannels {
    uv: Vec<Option<[[f32; 2]; 3]>>,
    norm: Vec<Option<[[f32; 3]; 3]>>,
}

#[derive(Clone, Copy)]
struct FaceRef {
    v: usize,
    vt: Option<usize>,
    vn: Option<usize>,
}

impl ObjMesh {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ObjError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ObjError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mesh = Self::parse(&text)?;
        log::info!(
            target: "assets",
            "loaded {} ({} triangles, uv={}, normals={})",
            path.display(),
            mesh.face_count,
            !mesh.uv.is_empty(),
            !mesh.norm.is_empty()
        );
        Ok(mesh)
    }

    pub fn parse(text: &str) -> Result<Self, ObjError> {
        let mut pools = Pools::default();
        let mut mesh = ObjMesh::default();
        let mut channels = FaceChannels::default();
        for (i, raw) in text.lines().enumerate() {
            let line = i + 1;
            let mut it = raw.split_whitespace();
            let Some(kind) = it.next() else { continue };
            match kind {
                "v" => pools.v.push(read_floats::<3>(it, line)?),
                "vt" => pools.vt.push(read_floats::<2>(it, line)?),
                "vn" => pools.vn.push(read_floats::<3>(it, line)?),
                "f" => {
                    let mut refs = Vec::with_capacity(4);
                    for tok in it {
                        refs.push(parse_face_ref(tok, line, &pools)?);
                    }
                    mesh.push_face(&refs, &pools, &mut channels);
                }
                // comments, o/g/s, mtllib/usemtl
                _ => {}
            }
        }
        mesh.align_channels(channels);
        Ok(mesh)
    }

    fn push_face(&mut self, refs: &[FaceRef], pools: &Pools, channels: &mut FaceChannels) {
        let Some(tri) = refs.get(..3) else {
            return;
        };
        for r in tri {
            self.pos.extend_from_slice(&pools.v[r.v]);
        }
        // A channel counts for the face only when all three corners carry it.
        let uv = match (tri[0].vt, tri[1].vt, tri[2].vt) {
            (Some(a), Some(b), Some(c)) => Some([a, b, c].map(|i| pools.vt[i])),
            _ => None,
        };
        let norm = match (tri[0].vn, tri[1].vn, tri[2].vn) {
            (Some(a), Some(b), Some(c)) => Some([a, b, c].map(|i| pools.vn[i])),
            _ => None,
        };
        channels.uv.push(uv);
        channels.norm.push(norm);
        self.face_count += 1;
    }

    /// Writes the optional channels once every face is known. A channel no
    /// face supplied stays empty; otherwise it gets one entry per vertex.
    fn align_channels(&mut self, channels: FaceChannels) {
        if channels.uv.iter().any(Option::is_some) {
            self.uv.reserve(channels.uv.len() * 6);
            for face in &channels.uv {
                self.uv.extend_from_slice(face.unwrap_or_default().as_flattened());
            }
        }
        if channels.norm.iter().any(Option::is_some) {
            self.norm.reserve(channels.norm.len() * 9);
            for (face, tri) in channels.norm.iter().zip(self.pos.chunks_exact(9)) {
                match face {
                    Some(n) => self.norm.extend_from_slice(n.as_flattened()),
                    None => {
                        let n = flat_normal(tri).to_array();
                        for _ in 0..3 {
                            self.norm.extend_from_slice(&n);
                        }
                    }
                }
            }
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len() / 3
    }

    pub fn has_uvs(&self) -> bool {
        !self.uv.is_empty()
    }

    pub fn has_normals(&self) -> bool {
        !self.norm.is_empty()
    }

    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_flat(&self.pos)
    }

    /// Length of the bounding box diagonal, 0 for an empty mesh.
    pub fn scaler(&self) -> f32 {
        self.bounds().map_or(0.0, |b| b.diagonal())
    }

    /// Translates every position so the bounding box is centred on the
    /// origin. Returns the offset that was subtracted.
    pub fn recenter(&mut self) -> Vec3 {
        let Some(center) = self.bounds().map(Aabb::center) else {
            return Vec3::ZERO;
        };
        for p in self.pos.chunks_exact_mut(3) {
            p[0] -= center.x;
            p[1] -= center.y;
            p[2] -= center.z;
        }
        center
    }

    /// Fills in flat per-triangle normals when the file supplied none.
    pub fn ensure_normals(&mut self) {
        if self.has_normals() {
            return;
        }
        self.norm.reserve(self.pos.len());
        for tri in self.pos.chunks_exact(9) {
            let n = flat_normal(tri);
            for _ in 0..3 {
                self.norm.extend_from_slice(&n.to_array());
            }
        }
    }

    /// Logs every vertex, UV and normal at debug level.
    pub fn dump(&self) {
        for (i, p) in self.pos.chunks_exact(3).enumerate() {
            log::debug!(target: "assets", "v[{i}] = ({}, {}, {})", p[0], p[1], p[2]);
        }
        for (i, t) in self.uv.chunks_exact(2).enumerate() {
            log::debug!(target: "assets", "vt[{i}] = ({}, {})", t[0], t[1]);
        }
        for (i, n) in self.norm.chunks_exact(3).enumerate() {
            log::debug!(target: "assets", "vn[{i}] = ({}, {}, {})", n[0], n[1], n[2]);
        }
    }
}

/// Unit normal of a flat `[x, y, z; 3]` triangle, zero when degenerate.
fn flat_normal(tri: &[f32]) -> Vec3 {
    let a = Vec3::from_slice(&tri[0..3]);
    let b = Vec3::from_slice(&tri[3..6]);
    let c = Vec3::from_slice(&tri[6..9]);
    (b - a).cross(c - a).normalize_or_zero()
}

/// Reads up to `N` floats; missing components stay 0 and extras (`w`) are
/// ignored.
fn read_floats<'a, const N: usize>(
    it: impl Iterator<Item = &'a str>,
    line: usize,
) -> Result<[f32; N], ObjError> {
    let mut out = [0.0; N];
    for (slot, tok) in out.iter_mut().zip(it) {
        *slot = tok.parse().map_err(|_| ObjError::Number {
            line,
            token: tok.to_string(),
        })?;
    }
    Ok(out)
}

fn parse_face_ref(tok: &str, line: usize, pools: &Pools) -> Result<FaceRef, ObjError> {
    let mut parts = tok.split('/');
    let v = parts.next().unwrap_or_default();
    let vt = parts.next().filter(|s| !s.is_empty());
    let vn = parts.next().filter(|s| !s.is_empty());
    Ok(FaceRef {
        v: resolve(v, line, "vertex", pools.v.len())?,
        vt: vt
            .map(|s| resolve(s, line, "texcoord", pools.vt.len()))
            .transpose()?,
        vn: vn
            .map(|s| resolve(s, line, "normal", pools.vn.len()))
            .transpose()?,
    })
}

/// 1-based OBJ index to a 0-based pool index.
fn resolve(tok: &str, line: usize, kind: &'static str, len: usize) -> Result<usize, ObjError> {
    let index: i64 = tok.parse().map_err(|_| ObjError::Number {
        line,
        token: tok.to_string(),
    })?;
    if index < 1 || index as u64 > len as u64 {
        return Err(ObjError::Index {
            line,
            kind,
            index,
            len,
        });
    }
    Ok(index as usize - 1)
}
