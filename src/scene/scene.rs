use glam::Affine3A;
use slotmap::SlotMap;

use crate::scene::NodeHandle;
use crate::scene::node::Node;
use crate::scene::transform_system;

/// Scene graph container.
///
/// Pure data: nodes live in a slot map, roots are kept in insertion order.
/// This is the shape the asset collaborator hands over once a model is ready.
#[derive(Debug, Default)]
pub struct Scene {
    pub nodes: SlotMap<NodeHandle, Node>,
    pub root_nodes: Vec<NodeHandle>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root_nodes: Vec::new(),
        }
    }

    /// Adds a node as a new root.
    pub fn add_node(&mut self, node: Node) -> NodeHandle {
        let handle = self.nodes.insert(node);
        self.root_nodes.push(handle);
        handle
    }

    pub fn add_to_parent(&mut self, mut child: Node, parent: NodeHandle) -> NodeHandle {
        if !self.nodes.contains_key(parent) {
            log::warn!("Parent node not found, adding '{}' as a root", child.name);
            return self.add_node(child);
        }

        child.parent = Some(parent);
        let handle = self.nodes.insert(child);
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(handle);
        }
        handle
    }

    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    /// Depth-first pre-order walk over every tree, children in insertion order.
    #[must_use]
    pub fn traverse(&self) -> Vec<NodeHandle> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeHandle> = self.root_nodes.iter().rev().copied().collect();

        while let Some(handle) = stack.pop() {
            let Some(node) = self.nodes.get(handle) else {
                continue;
            };
            order.push(handle);
            stack.extend(node.children.iter().rev().copied());
        }
        order
    }

    /// Updates the world matrix of every node. Call after mutating transforms.
    pub fn update_matrix_world(&mut self) {
        transform_system::update_hierarchy_iterative(&mut self.nodes, &self.root_nodes);
    }

    pub fn update_subtree(&mut self, root: NodeHandle) {
        transform_system::update_subtree(&mut self.nodes, root);
    }

    /// Matrix taking `descendant`'s local space into `ancestor`'s local space.
    ///
    /// Returns `None` if `ancestor` is not on `descendant`'s parent chain.
    #[must_use]
    pub fn relative_matrix(&self, ancestor: NodeHandle, descendant: NodeHandle) -> Option<Affine3A> {
        let mut matrix = Affine3A::IDENTITY;
        let mut current = descendant;

        while current != ancestor {
            let node = self.nodes.get(current)?;
            matrix = *node.transform.local_matrix() * matrix;
            current = node.parent?;
        }
        Some(matrix)
    }
}
