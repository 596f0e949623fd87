// Typed scene graph shared by scene setup, the model swap, and the renderer.
//
// Nodes form a tree; only root-level nodes are addressable for add/remove,
// which is all the app needs (a whole asset enters or leaves the scene at
// once). "Renderable" is a typed capability: a node carries a mesh with a
// material, or it is a pure grouping node.

use fnv::FnvHashSet;
use glam::{Mat4, Quat, Vec3, Vec4};
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies a root-level node within a [`Scene`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(u64);

/// Identifies mesh geometry. Cloned nodes share the id, so the renderer can
/// share GPU buffers between replicas.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct MeshId(u64);

static NEXT_MESH_ID: AtomicU64 = AtomicU64::new(1);

impl MeshId {
    pub fn fresh() -> Self {
        MeshId(NEXT_MESH_ID.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Clone, Debug)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

#[derive(Clone, Debug)]
pub struct Material {
    pub base_color: Vec4,
    pub opacity: f32,
    pub transparent: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            base_color: Vec4::ONE,
            opacity: 1.0,
            transparent: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Mesh {
    pub id: MeshId,
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
    pub material: Material,
}

#[derive(Clone, Debug)]
pub struct Node {
    pub name: String,
    pub transform: Transform,
    pub mesh: Option<Mesh>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn group(name: &str) -> Self {
        Self {
            name: name.to_string(),
            transform: Transform::default(),
            mesh: None,
            children: Vec::new(),
        }
    }

    /// Typed capability check: does this node itself carry renderable geometry?
    pub fn is_renderable(&self) -> bool {
        self.mesh.is_some()
    }

    /// Visit every material in this subtree (renderable nodes only).
    pub fn for_each_material_mut(&mut self, f: &mut impl FnMut(&mut Material)) {
        if let Some(mesh) = &mut self.mesh {
            f(&mut mesh.material);
        }
        for child in &mut self.children {
            child.for_each_material_mut(f);
        }
    }

    /// Set a uniform opacity on every renderable part of this subtree.
    ///
    /// Anything below 1.0 is flagged transparent so the renderer blends it.
    pub fn set_opacity(&mut self, opacity: f32) {
        self.for_each_material_mut(&mut |m| {
            m.opacity = opacity;
            m.transparent = opacity < 1.0;
        });
    }

    /// Visit every mesh in this subtree with its world matrix.
    pub fn for_each_mesh(&self, parent: Mat4, f: &mut impl FnMut(&Mesh, Mat4)) {
        let world = parent * self.transform.matrix();
        if let Some(mesh) = &self.mesh {
            f(mesh, world);
        }
        for child in &self.children {
            child.for_each_mesh(world, f);
        }
    }
}

/// Root-level node collection. Each asset (model, replicas, particles aside)
/// occupies one root slot; removal detaches and returns the whole subtree.
pub struct Scene {
    next_id: u64,
    roots: Vec<(NodeId, Node)>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            roots: Vec::new(),
        }
    }

    pub fn add(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.roots.push((id, node));
        id
    }

    pub fn remove(&mut self, id: NodeId) -> Option<Node> {
        let idx = self.roots.iter().position(|(nid, _)| *nid == id)?;
        Some(self.roots.remove(idx).1)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.roots
            .iter()
            .find(|(nid, _)| *nid == id)
            .map(|(_, n)| n)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.roots
            .iter_mut()
            .find(|(nid, _)| *nid == id)
            .map(|(_, n)| n)
    }

    pub fn node_count(&self) -> usize {
        self.roots.len()
    }

    pub fn for_each_mesh(&self, f: &mut impl FnMut(&Mesh, Mat4)) {
        for (_, node) in &self.roots {
            node.for_each_mesh(Mat4::IDENTITY, f);
        }
    }

    /// Every mesh id reachable from the current roots. Ids shared by clones
    /// stay live as long as any copy remains; the renderer prunes its GPU
    /// buffer cache against this set once assets leave the scene.
    pub fn live_mesh_ids(&self) -> FnvHashSet<MeshId> {
        let mut ids = FnvHashSet::default();
        self.for_each_mesh(&mut |mesh, _| {
            ids.insert(mesh.id);
        });
        ids
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
