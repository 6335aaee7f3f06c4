use blockview_io::ObjMesh;
use blockview_mesh_cpu::MeshBuild;
use raylib::prelude::*;

/// Uploaded triangle list wrapped in a single-material raylib model.
pub struct GpuMesh {
    pub model: Model,
    pub vertex_count: usize,
}

impl GpuMesh {
    pub fn from_build(rl: &mut RaylibHandle, thread: &RaylibThread, mb: &MeshBuild) -> Option<Self> {
        upload_mesh(rl, thread, &mb.pos, &mb.uv, &mb.norm)
    }

    /// Missing UVs are uploaded as zeros; call `ensure_normals` first for
    /// files without normals.
    pub fn from_obj(rl: &mut RaylibHandle, thread: &RaylibThread, obj: &ObjMesh) -> Option<Self> {
        if obj.has_uvs() {
            upload_mesh(rl, thread, &obj.pos, &obj.uv, &obj.norm)
        } else {
            let uv = vec![0.0; obj.vertex_count() * 2];
            upload_mesh(rl, thread, &obj.pos, &uv, &obj.norm)
        }
    }
}

/// Copies flat position/UV/normal arrays into raylib-owned memory and uploads
/// them as a non-indexed mesh. Returns `None` for an empty mesh or when a
/// channel length disagrees with the position count.
pub fn upload_mesh(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    pos: &[f32],
    uv: &[f32],
    norm: &[f32],
) -> Option<GpuMesh> {
    let v_count = pos.len() / 3;
    if v_count == 0 {
        return None;
    }
    if uv.len() != v_count * 2 || (!norm.is_empty() && norm.len() != v_count * 3) {
        log::warn!(
            target: "mesh",
            "refusing upload: {} vertices but {} uv / {} normal floats",
            v_count,
            uv.len(),
            norm.len()
        );
        return None;
    }
    let mut raw: raylib::ffi::Mesh = unsafe { std::mem::zeroed() };
    raw.vertexCount = v_count as i32;
    raw.triangleCount = (v_count / 3) as i32;
    unsafe {
        let vbytes = (v_count * 3 * std::mem::size_of::<f32>()) as u32;
        let tbytes = (v_count * 2 * std::mem::size_of::<f32>()) as u32;
        raw.vertices = raylib::ffi::MemAlloc(vbytes) as *mut f32;
        raw.texcoords = raylib::ffi::MemAlloc(tbytes) as *mut f32;
        std::ptr::copy_nonoverlapping(pos.as_ptr(), raw.vertices, v_count * 3);
        std::ptr::copy_nonoverlapping(uv.as_ptr(), raw.texcoords, v_count * 2);
        if !norm.is_empty() {
            raw.normals = raylib::ffi::MemAlloc(vbytes) as *mut f32;
            std::ptr::copy_nonoverlapping(norm.as_ptr(), raw.normals, v_count * 3);
        }
    }
    let mut mesh = unsafe { Mesh::from_raw(raw) };
    unsafe {
        mesh.upload(false);
    }
    let model = rl
        .load_model_from_mesh(thread, unsafe { mesh.make_weak() })
        .ok()?;
    Some(GpuMesh {
        model,
        vertex_count: v_count,
    })
}
