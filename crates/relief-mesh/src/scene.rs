use relief_geom::{Aabb, Transform, Vec3};
use serde::{Deserialize, Serialize};

use crate::edge::Edge;
use crate::material::Material;
use crate::mesh_build::MeshBuild;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    Group,
    Surface { mesh: MeshBuild, material: Material },
    Skirt {
        edge: Edge,
        mesh: MeshBuild,
        material: Material,
    },
}

/// Renderer-agnostic scene tree. Children inherit their parent's transform.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneNode {
    pub name: String,
    pub transform: Transform,
    pub cast_shadow: bool,
    pub kind: NodeKind,
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    pub fn group(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::IDENTITY,
            cast_shadow: true,
            kind: NodeKind::Group,
            children: Vec::new(),
        }
    }

    pub fn add(&mut self, child: SceneNode) {
        self.children.push(child);
    }

    pub fn mesh(&self) -> Option<&MeshBuild> {
        match &self.kind {
            NodeKind::Group => None,
            NodeKind::Surface { mesh, .. } | NodeKind::Skirt { mesh, .. } => Some(mesh),
        }
    }

    pub fn material(&self) -> Option<&Material> {
        match &self.kind {
            NodeKind::Group => None,
            NodeKind::Surface { material, .. } | NodeKind::Skirt { material, .. } => {
                Some(material)
            }
        }
    }

    /// Depth-first walk over this node and its descendants.
    pub fn walk<'a>(&'a self, f: &mut dyn FnMut(&'a SceneNode)) {
        f(self);
        for c in &self.children {
            c.walk(f);
        }
    }

    /// World-space bounds of every vertex below this node, treating this
    /// node's own transform as the outermost one.
    pub fn world_bounds(&self) -> Aabb {
        let mut chain = Vec::new();
        let mut out = Aabb::EMPTY;
        self.accumulate_bounds(&mut chain, &mut out);
        out
    }

    fn accumulate_bounds<'a>(&'a self, chain: &mut Vec<&'a Transform>, out: &mut Aabb) {
        chain.push(&self.transform);
        if let Some(mesh) = self.mesh() {
            for v in mesh.vertices() {
                out.extend(to_world(chain, v));
            }
        }
        for c in &self.children {
            c.accumulate_bounds(chain, out);
        }
        chain.pop();
    }
}

/// Applies a parent-first transform chain to a local point.
pub(crate) fn to_world(chain: &[&Transform], p: Vec3) -> Vec3 {
    chain.iter().rev().fold(p, |p, t| t.apply(p))
}
