//! Mesh Registry
//!
//! One-time lookup from logical vehicle parts to the mesh nodes of a loaded
//! scene. The registry is built by a single traversal when the model becomes
//! ready and is immutable afterwards, so per-frame code never re-matches names.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::resources::geometry::Triangle;
use crate::scene::{NodeHandle, Scene};

/// A named logical part of the vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeshGroup {
    Steer,
    #[serde(rename = "wheels_front")]
    FrontWheel,
    #[serde(rename = "wheels_rear")]
    RearWheel,
    Body,
}

impl MeshGroup {
    /// All groups, in match-priority order.
    pub const ALL: [MeshGroup; 4] = [
        MeshGroup::Steer,
        MeshGroup::FrontWheel,
        MeshGroup::RearWheel,
        MeshGroup::Body,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MeshGroup::Steer => "steer",
            MeshGroup::FrontWheel => "wheels_front",
            MeshGroup::RearWheel => "wheels_rear",
            MeshGroup::Body => "body",
        }
    }

    /// Lowercase keywords that must all appear in a node name.
    fn keywords(self) -> &'static [&'static str] {
        match self {
            MeshGroup::Steer => &["steer"],
            MeshGroup::FrontWheel => &["wheel", "front"],
            MeshGroup::RearWheel => &["wheel", "rear"],
            MeshGroup::Body => &["body"],
        }
    }

    /// Case-insensitive substring match against a node name.
    #[must_use]
    pub fn matches(self, node_name: &str) -> bool {
        let name = node_name.to_lowercase();
        self.keywords().iter().all(|k| name.contains(k))
    }

    /// The first group (in priority order) claiming `node_name`.
    #[must_use]
    pub fn classify(node_name: &str) -> Option<MeshGroup> {
        Self::ALL.into_iter().find(|g| g.matches(node_name))
    }
}

impl fmt::Display for MeshGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Triangles of one group, already in world space.
#[derive(Debug, Clone)]
pub struct GroupTriangles {
    pub group: MeshGroup,
    pub triangles: Vec<Triangle>,
}

/// Typed map from [`MeshGroup`] to the mesh node that represents it.
#[derive(Debug, Clone, Default)]
pub struct MeshRegistry {
    entries: FxHashMap<MeshGroup, NodeHandle>,
}

impl MeshRegistry {
    /// Traverses `scene` once and classifies every mesh node.
    ///
    /// When several nodes match the same group the last one in traversal
    /// order wins. Unmatched groups are logged; they are not an error.
    #[must_use]
    pub fn build(scene: &Scene) -> Self {
        let mut entries = FxHashMap::default();

        for handle in scene.traverse() {
            let node = &scene.nodes[handle];
            if !node.is_mesh() {
                continue;
            }
            let Some(group) = MeshGroup::classify(&node.name) else {
                continue;
            };
            if let Some(previous) = entries.insert(group, handle) {
                log::debug!(
                    "Mesh group {group}: '{}' replaces '{}'",
                    node.name,
                    scene.nodes.get(previous).map_or("?", |n| n.name.as_str())
                );
            }
        }

        for group in MeshGroup::ALL {
            match entries.get(&group) {
                Some(&h) => log::debug!("{group}: \"{}\"", scene.nodes[h].name),
                None => log::warn!("{group}: NOT FOUND"),
            }
        }

        Self { entries }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, group: MeshGroup) -> Option<NodeHandle> {
        self.entries.get(&group).copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// World-space triangles for every group, in [`MeshGroup::ALL`] order.
    ///
    /// Missing groups yield an empty triangle list. Reads cached world
    /// matrices, so the scene's matrices must be current.
    #[must_use]
    pub fn world_triangles(&self, scene: &Scene) -> Vec<GroupTriangles> {
        MeshGroup::ALL
            .into_iter()
            .map(|group| {
                let triangles = self
                    .get(group)
                    .and_then(|h| scene.get_node(h))
                    .and_then(|node| {
                        let mesh = node.mesh.as_ref()?;
                        Some(mesh.world_triangles(node.transform.world_matrix()))
                    })
                    .unwrap_or_default();
                log::debug!("{group}: {} triangles", triangles.len());
                GroupTriangles { group, triangles }
            })
            .collect()
    }
}
