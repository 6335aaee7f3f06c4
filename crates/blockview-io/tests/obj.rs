use std::io::Write;

use blockview_io::{ObjError, ObjMesh};

const TRI_FULL: &str = "\
# a triangle with everything
v 0 0 0
v 1 0 0
v 0 1 0
vt 0 0
vt 1 0
vt 0 1
vn 0 0 1
f 1/1/1 2/2/1 3/3/1
";

#[test]
fn full_triangle() {
    let m = ObjMesh::parse(TRI_FULL).unwrap();
    assert_eq!(m.face_count, 1);
    assert_eq!(m.vertex_count(), 3);
    assert_eq!(m.uv.len(), 6);
    assert_eq!(m.norm.len(), 9);
    assert_eq!(&m.pos[3..6], &[1.0, 0.0, 0.0]);
    assert_eq!(&m.uv[4..6], &[0.0, 1.0]);
    assert_eq!(&m.norm[6..9], &[0.0, 0.0, 1.0]);
}

#[test]
fn normals_without_uvs() {
    let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvn 0 0 1\nf 1//1 2//1 3//1\n";
    let m = ObjMesh::parse(src).unwrap();
    assert!(!m.has_uvs());
    assert!(m.has_normals());
    assert_eq!(m.norm.len(), 9);
}

#[test]
fn positions_only() {
    let m = ObjMesh::parse("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n").unwrap();
    assert_eq!(m.vertex_count(), 3);
    assert_eq!(m.pos, vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
    assert!(m.uv.is_empty());
    assert!(m.norm.is_empty());
}

#[test]
fn mixed_faces_keep_channels_aligned() {
    let src = "\
v 0 0 0
v 1 0 0
v 0 1 0
vt 0.5 0.25
vn 0 0 -1
f 1/1/1 2/1/1 3/1/1
f 1 2 3
f 1//1 2//1 3//1
";
    let mut m = ObjMesh::parse(src).unwrap();
    assert_eq!(m.face_count, 3);
    assert_eq!(m.vertex_count(), 9);
    assert_eq!(m.uv.len() / 2, m.vertex_count());
    assert_eq!(m.norm.len() / 3, m.vertex_count());

    // Texcoords from the file, then zeros for the two faces without them.
    assert_eq!(&m.uv[0..2], &[0.5, 0.25]);
    assert!(m.uv[6..].iter().all(|&t| t == 0.0));

    // File normals stay; the bare face gets its flat normal.
    assert_eq!(&m.norm[0..3], &[0.0, 0.0, -1.0]);
    assert_eq!(&m.norm[9..18], &[0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
    assert_eq!(&m.norm[18..21], &[0.0, 0.0, -1.0]);

    let before = m.norm.clone();
    m.ensure_normals();
    assert_eq!(m.norm, before);
}

#[test]
fn quads_keep_first_triangle() {
    let src = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n";
    let m = ObjMesh::parse(src).unwrap();
    assert_eq!(m.face_count, 1);
    assert_eq!(m.pos, vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0]);
}

#[test]
fn degenerate_faces_and_unknown_lines_are_skipped() {
    let src = "mtllib x.mtl\no thing\nv 0 0 0\nv 1 0 0\n\nusemtl m\nf 1 2\ns off\n";
    let m = ObjMesh::parse(src).unwrap();
    assert_eq!(m.face_count, 0);
    assert!(m.pos.is_empty());
    assert!(m.bounds().is_none());
    assert_eq!(m.scaler(), 0.0);
}

#[test]
fn vertex_w_is_ignored() {
    let m = ObjMesh::parse("v 1 2 3 0.5\nv 0 0 0\nv 0 0 0\nf 1 2 3\n").unwrap();
    assert_eq!(&m.pos[0..3], &[1.0, 2.0, 3.0]);
}

#[test]
fn index_errors_report_line() {
    let err = ObjMesh::parse("v 0 0 0\nf 1 2 3\n").unwrap_err();
    assert!(matches!(err, ObjError::Index { line: 2, index: 2, len: 1, .. }), "{err}");

    let err = ObjMesh::parse("v 0 0 0\nv 0 0 0\nv 0 0 0\nf 0 1 2\n").unwrap_err();
    assert!(matches!(err, ObjError::Index { line: 4, index: 0, .. }));

    let err = ObjMesh::parse("v 0 0 0\nv 0 0 0\nv 0 0 0\nf 1/4 2 3\n").unwrap_err();
    assert!(matches!(err, ObjError::Index { kind: "texcoord", .. }));
}

#[test]
fn bad_numbers_report_line() {
    let err = ObjMesh::parse("# header\nv 0 zero 0\n").unwrap_err();
    match err {
        ObjError::Number { line, token } => {
            assert_eq!(line, 2);
            assert_eq!(token, "zero");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn scaler_is_bbox_diagonal() {
    let src = "v -1 -1 -1\nv 1 1 1\nv 0 0 0\nf 1 2 3\n";
    let m = ObjMesh::parse(src).unwrap();
    let bb = m.bounds().unwrap();
    assert_eq!(bb.min.x, -1.0);
    assert_eq!(bb.max.z, 1.0);
    assert!((m.scaler() - 12f32.sqrt()).abs() < 1e-5);
}

#[test]
fn recenter_moves_bounds_to_origin() {
    let src = "v 2 2 2\nv 4 2 2\nv 2 6 2\nf 1 2 3\n";
    let mut m = ObjMesh::parse(src).unwrap();
    let before = m.scaler();
    let c = m.recenter();
    assert_eq!(c.to_array(), [3.0, 4.0, 2.0]);
    let bb = m.bounds().unwrap();
    assert_eq!(bb.min.to_array(), [-1.0, -2.0, 0.0]);
    assert_eq!(bb.max.to_array(), [1.0, 2.0, 0.0]);
    assert!((m.scaler() - before).abs() < 1e-6);

    let mut empty = ObjMesh::parse("").unwrap();
    assert_eq!(empty.recenter().to_array(), [0.0; 3]);
}

#[test]
fn load_from_file_and_missing_file() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(TRI_FULL.as_bytes()).unwrap();
    let m = ObjMesh::load(f.path()).unwrap();
    assert_eq!(m.face_count, 1);
    m.dump();

    let dir = tempfile::tempdir().unwrap();
    let err = ObjMesh::load(dir.path().join("nope.obj")).unwrap_err();
    assert!(matches!(err, ObjError::Io { .. }));
}
