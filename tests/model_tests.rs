// Host-side tests for GLB template loading.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod scene_core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
    pub mod model {
        include!("../src/core/model.rs");
    }
}

use glam::Vec3;
use scene_core::model::*;
use scene_core::scene::*;

// One triangle in the XY plane: three f32x3 positions followed by u16 indices.
fn triangle_bin() -> Vec<u8> {
    let mut bin = Vec::new();
    for p in [[0.0f32, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]] {
        for c in p {
            bin.extend_from_slice(&c.to_le_bytes());
        }
    }
    for i in [0u16, 1, 2] {
        bin.extend_from_slice(&i.to_le_bytes());
    }
    bin
}

const DOCUMENT: &str = r#"{
  "asset": {"version": "2.0"},
  "scene": 0,
  "scenes": [{"nodes": [0]}],
  "nodes": NODES,
  "meshes": [{"primitives": [PRIMITIVE]}],
  "materials": [{
    "pbrMetallicRoughness": {
      "baseColorFactor": [1.0, 0.0, 0.0, 1.0],
      "metallicFactor": 0.2,
      "roughnessFactor": 0.6
    }
  }],
  "accessors": [
    {"bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3",
     "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 0.0]},
    {"bufferView": 1, "componentType": 5123, "count": 3, "type": "SCALAR"}
  ],
  "bufferViews": [
    {"buffer": 0, "byteOffset": 0, "byteLength": 36},
    {"buffer": 0, "byteOffset": 36, "byteLength": 6}
  ],
  "buffers": [{"byteLength": 42}]
}"#;

const SINGLE_NODE: &str = r#"[{"mesh": 0, "translation": [0.0, 1.0, 0.0]}]"#;
const INDEXED: &str = r#"{"attributes": {"POSITION": 0}, "indices": 1, "material": 0}"#;

fn document(nodes: &str, primitive: &str) -> String {
    DOCUMENT
        .replace("NODES", nodes)
        .replace("PRIMITIVE", primitive)
}

fn pad_to_4(mut bytes: Vec<u8>, fill: u8) -> Vec<u8> {
    while bytes.len() % 4 != 0 {
        bytes.push(fill);
    }
    bytes
}

fn glb(json: &str, bin: &[u8]) -> Vec<u8> {
    let json = pad_to_4(json.as_bytes().to_vec(), b' ');
    let bin = pad_to_4(bin.to_vec(), 0);
    let total = 12 + 8 + json.len() + 8 + bin.len();

    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(b"glTF");
    out.extend_from_slice(&2u32.to_le_bytes());
    out.extend_from_slice(&(total as u32).to_le_bytes());
    out.extend_from_slice(&(json.len() as u32).to_le_bytes());
    out.extend_from_slice(b"JSON");
    out.extend_from_slice(&json);
    out.extend_from_slice(&(bin.len() as u32).to_le_bytes());
    out.extend_from_slice(b"BIN\0");
    out.extend_from_slice(&bin);
    out
}

fn triangle_glb(nodes: &str, primitive: &str) -> Vec<u8> {
    glb(&document(nodes, primitive), &triangle_bin())
}

#[test]
fn loads_triangle_with_node_transform_and_material() {
    let t = ModelTemplate::from_glb("tri", &triangle_glb(SINGLE_NODE, INDEXED)).unwrap();
    assert_eq!(t.name, "tri");
    assert_eq!(t.primitives.len(), 1);
    assert_eq!(t.triangle_count(), 1);
    assert!(!t.cast_shadow);

    let p = &t.primitives[0];
    assert_eq!(p.indices, vec![0, 1, 2]);
    assert_eq!(p.vertices.len(), 3);
    assert_eq!(p.vertices[1].position, [1.0, 0.0, 0.0]);
    assert_eq!(p.local.transform_point3(Vec3::ZERO), Vec3::new(0.0, 1.0, 0.0));

    assert_eq!(p.material.base_color, [1.0, 0.0, 0.0, 1.0]);
    assert!((p.material.metalness - 0.2).abs() < 1e-6);
    assert!((p.material.roughness - 0.6).abs() < 1e-6);
    assert_eq!(p.material.emissive, [0.0, 0.0, 0.0]);
}

#[test]
fn missing_normals_are_computed_from_faces() {
    let t = ModelTemplate::from_glb("tri", &triangle_glb(SINGLE_NODE, INDEXED)).unwrap();
    for v in &t.primitives[0].vertices {
        assert_eq!(v.normal, [0.0, 0.0, 1.0]);
    }
}

#[test]
fn child_nodes_accumulate_parent_transforms() {
    let nodes = r#"[
      {"children": [1], "translation": [1.0, 0.0, 0.0]},
      {"mesh": 0, "translation": [0.0, 1.0, 0.0]}
    ]"#;
    let t = ModelTemplate::from_glb("nested", &triangle_glb(nodes, INDEXED)).unwrap();
    let origin = t.primitives[0].local.transform_point3(Vec3::ZERO);
    assert!((origin - Vec3::new(1.0, 1.0, 0.0)).length() < 1e-6);
}

#[test]
fn unindexed_primitives_use_sequential_indices() {
    let primitive = r#"{"attributes": {"POSITION": 0}, "material": 0}"#;
    let t = ModelTemplate::from_glb("soup", &triangle_glb(SINGLE_NODE, primitive)).unwrap();
    assert_eq!(t.primitives[0].indices, vec![0, 1, 2]);
}

#[test]
fn non_triangle_geometry_is_rejected() {
    let points = r#"{"attributes": {"POSITION": 0}, "indices": 1, "mode": 0}"#;
    let err = ModelTemplate::from_glb("points", &triangle_glb(SINGLE_NODE, points)).unwrap_err();
    assert!(matches!(err, LoadError::NoTriangles), "got {:?}", err);
}

#[test]
fn garbage_bytes_fail_to_parse() {
    let err = ModelTemplate::from_glb("junk", b"definitely not a model").unwrap_err();
    assert!(matches!(err, LoadError::Parse(_)), "got {:?}", err);
    assert!(err.to_string().starts_with("invalid glTF"));
}

#[test]
fn material_override_replaces_only_given_fields() {
    let mut t = ModelTemplate::from_glb("tri", &triangle_glb(SINGLE_NODE, INDEXED)).unwrap();
    t.apply_material_override(&MaterialOverride {
        roughness: Some(0.9),
        ..MaterialOverride::default()
    });
    let m = t.primitives[0].material;
    assert_eq!(m.roughness, 0.9);
    assert_eq!(m.base_color, [1.0, 0.0, 0.0, 1.0]);
    assert!((m.metalness - 0.2).abs() < 1e-6);
}

#[test]
fn ice_cream_and_cherry_get_their_tint() {
    let ice = ModelKind::IceCream.material_override().unwrap();
    let mut m = Material::default();
    m.apply(&ice);
    assert_eq!(m.emissive, [0.0, 0.0, 0.0]);
    assert_eq!(m.roughness, 0.8);
    assert_eq!(m.metalness, 0.1);
    assert_eq!(m.base_color[3], 1.0);
    // cream white: bright, slightly warm
    assert!(m.base_color[0] > 0.99 && m.base_color[2] < m.base_color[1]);

    let cherry = ModelKind::Cherry.material_override().unwrap();
    assert_eq!(cherry.roughness, Some(0.4));
    let [r, g, b] = cherry.base_color.unwrap();
    assert!(r > g && g == b);
    assert!(cherry.emissive.unwrap()[0] > 0.0);

    assert!(ModelKind::CoffeeBean.material_override().is_none());
}

#[test]
fn srgb_hex_converts_to_linear() {
    assert_eq!(srgb_hex(0x000000), [0.0, 0.0, 0.0]);
    for c in srgb_hex(0xFFFFFF) {
        assert!((c - 1.0).abs() < 1e-6);
    }
    let [r, _, _] = srgb_hex(0x800000);
    assert!((r - 0.2158605).abs() < 1e-4);
}

#[test]
fn every_model_has_a_distinct_url() {
    let mut urls: Vec<&str> = ModelKind::ALL.iter().map(|k| k.url()).collect();
    urls.sort();
    urls.dedup();
    assert_eq!(urls.len(), ModelKind::ALL.len());
    assert!(urls.iter().all(|u| u.ends_with(".glb")));
    assert!(!ModelKind::CoffeeBean.casts_shadow());
    assert!(ModelKind::IceCream.casts_shadow());
}

#[test]
fn compute_normals_skips_out_of_range_indices() {
    let positions = [[0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]];
    let normals = compute_normals(&positions, &[0, 1, 2, 0, 1, 9]);
    // winding (0,0,0) -> (0,0,1) -> (1,0,0) faces +Y
    for n in normals {
        assert!((Vec3::from_array(n) - Vec3::Y).length() < 1e-6);
    }
}
