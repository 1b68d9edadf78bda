use crate::resources::geometry::TriangleMesh;
use crate::scene::NodeHandle;
use crate::scene::transform::Transform;

/// A scene node: hierarchy links, a transform and an optional mesh.
///
/// # Hierarchy
///
/// Nodes form a tree through parent-child relationships:
/// - `parent`: Optional handle to parent node (None for root nodes)
/// - `children`: List of child node handles, in insertion order
///
/// Links are set by [`Scene::add_to_parent`](crate::scene::Scene::add_to_parent)
/// and are read-only afterwards.
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,

    pub(crate) parent: Option<NodeHandle>,
    pub(crate) children: Vec<NodeHandle>,

    pub transform: Transform,
    pub mesh: Option<TriangleMesh>,
}

impl Node {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            parent: None,
            children: Vec::new(),
            transform: Transform::new(),
            mesh: None,
        }
    }

    #[must_use]
    pub fn with_mesh(name: &str, mesh: TriangleMesh) -> Self {
        Self {
            mesh: Some(mesh),
            ..Self::new(name)
        }
    }

    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }

    #[inline]
    #[must_use]
    pub fn is_mesh(&self) -> bool {
        self.mesh.is_some()
    }
}
