//! Scene graph module
//!
//! Manages the hierarchy handed over by the asset collaborator:
//! - Node: scene node (name, parent/children links, transform, optional mesh)
//! - Transform: TRS component with cached matrices
//! - Scene: node container
//! - transform_system: world-matrix propagation, decoupled from Scene
//! - MeshRegistry: one-time typed lookup of the vehicle's mesh groups

pub mod node;
pub mod registry;
pub mod scene;
pub mod transform;
pub mod transform_system;

pub use node::Node;
pub use registry::{GroupTriangles, MeshGroup, MeshRegistry};
pub use scene::Scene;
pub use transform::{Transform, look_rotation};

use slotmap::new_key_type;

new_key_type! {
    pub struct NodeHandle;
}
