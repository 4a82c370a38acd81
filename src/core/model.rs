// Template models parsed from binary glTF (GLB).
//
// A template is the flattened triangle geometry of a GLB's default scene:
// every mesh primitive carries the accumulated node transform and its
// material parameters. Templates are never mutated after loading except for
// the one-off material adjustments applied by the loader.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use super::scene::MaterialOverride;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("fetch of {url} failed: {reason}")]
    Fetch { url: String, reason: String },
    #[error("fetch of {url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("invalid glTF: {0}")]
    Parse(#[from] gltf::Error),
    #[error("buffer {0} is not embedded in the GLB")]
    MissingBuffer(usize),
    #[error("primitive {0} is missing vertex positions")]
    MissingPositions(usize),
    #[error("model has no triangle geometry")]
    NoTriangles,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub base_color: [f32; 4],
    pub emissive: [f32; 3],
    pub roughness: f32,
    pub metalness: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            base_color: [1.0, 1.0, 1.0, 1.0],
            emissive: [0.0, 0.0, 0.0],
            roughness: 1.0,
            metalness: 1.0,
        }
    }
}

impl Material {
    pub fn apply(&mut self, o: &MaterialOverride) {
        if let Some(c) = o.base_color {
            self.base_color = [c[0], c[1], c[2], self.base_color[3]];
        }
        if let Some(e) = o.emissive {
            self.emissive = e;
        }
        if let Some(r) = o.roughness {
            self.roughness = r;
        }
        if let Some(m) = o.metalness {
            self.metalness = m;
        }
    }
}

#[derive(Clone, Debug)]
pub struct MeshPrimitive {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    /// Node transform relative to the model root.
    pub local: Mat4,
    pub material: Material,
}

#[derive(Clone, Debug)]
pub struct ModelTemplate {
    pub name: String,
    pub primitives: Vec<MeshPrimitive>,
    pub cast_shadow: bool,
}

impl ModelTemplate {
    pub fn from_glb(name: impl Into<String>, bytes: &[u8]) -> Result<Self, LoadError> {
        let gltf = gltf::Gltf::from_slice(bytes)?;
        let buffers = gltf
            .document
            .buffers()
            .map(|b| match b.source() {
                gltf::buffer::Source::Bin => gltf
                    .blob
                    .as_deref()
                    .ok_or(LoadError::MissingBuffer(b.index())),
                gltf::buffer::Source::Uri(_) => Err(LoadError::MissingBuffer(b.index())),
            })
            .collect::<Result<Vec<&[u8]>, LoadError>>()?;

        let mut template = ModelTemplate {
            name: name.into(),
            primitives: Vec::new(),
            cast_shadow: false,
        };
        let scene = gltf
            .document
            .default_scene()
            .or_else(|| gltf.document.scenes().next());
        if let Some(scene) = scene {
            for node in scene.nodes() {
                template.collect_node(&node, Mat4::IDENTITY, &buffers)?;
            }
        }
        if template.primitives.is_empty() {
            return Err(LoadError::NoTriangles);
        }
        Ok(template)
    }

    fn collect_node(
        &mut self,
        node: &gltf::Node,
        parent: Mat4,
        buffers: &[&[u8]],
    ) -> Result<(), LoadError> {
        let local = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
        if let Some(mesh) = node.mesh() {
            for primitive in mesh.primitives() {
                if primitive.mode() != gltf::mesh::Mode::Triangles {
                    log::warn!(
                        "[model] {}: skipping {:?} primitive {}",
                        self.name,
                        primitive.mode(),
                        primitive.index()
                    );
                    continue;
                }
                self.primitives
                    .push(read_primitive(&primitive, local, buffers)?);
            }
        }
        for child in node.children() {
            self.collect_node(&child, local, buffers)?;
        }
        Ok(())
    }

    pub fn apply_material_override(&mut self, o: &MaterialOverride) {
        for p in &mut self.primitives {
            p.material.apply(o);
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.primitives.iter().map(|p| p.indices.len() / 3).sum()
    }
}

fn read_primitive(
    primitive: &gltf::Primitive,
    local: Mat4,
    buffers: &[&[u8]],
) -> Result<MeshPrimitive, LoadError> {
    let reader = primitive.reader(|b| buffers.get(b.index()).copied());
    let positions: Vec<[f32; 3]> = reader
        .read_positions()
        .ok_or(LoadError::MissingPositions(primitive.index()))?
        .collect();
    let indices: Vec<u32> = match reader.read_indices() {
        Some(idx) => idx.into_u32().collect(),
        None => (0..positions.len() as u32).collect(),
    };
    let normals: Vec<[f32; 3]> = match reader.read_normals() {
        Some(n) => n.collect(),
        None => compute_normals(&positions, &indices),
    };
    let vertices = positions
        .iter()
        .zip(normals.iter())
        .map(|(p, n)| Vertex {
            position: *p,
            normal: *n,
        })
        .collect();

    let m = primitive.material();
    let pbr = m.pbr_metallic_roughness();
    let material = Material {
        base_color: pbr.base_color_factor(),
        emissive: m.emissive_factor(),
        roughness: pbr.roughness_factor(),
        metalness: pbr.metallic_factor(),
    };

    Ok(MeshPrimitive {
        vertices,
        indices,
        local,
        material,
    })
}

/// Area-weighted smooth normals for meshes exported without them.
pub fn compute_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut acc = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        if a >= positions.len() || b >= positions.len() || c >= positions.len() {
            continue;
        }
        let pa = Vec3::from_array(positions[a]);
        let pb = Vec3::from_array(positions[b]);
        let pc = Vec3::from_array(positions[c]);
        let n = (pb - pa).cross(pc - pa);
        acc[a] += n;
        acc[b] += n;
        acc[c] += n;
    }
    acc.into_iter()
        .map(|n| n.try_normalize().unwrap_or(Vec3::Y).to_array())
        .collect()
}
