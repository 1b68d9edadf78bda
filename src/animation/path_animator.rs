//! Path Animator
//!
//! Drives the vehicle along the entry path. Every output is a function of the
//! entry progress alone except the body facing, which falls back to the
//! previous facing when the lag direction degenerates.
//!
//! [`PathAnimator`] computes a [`VehicleFrame`] without touching the scene;
//! [`VehicleRig`] writes that frame onto the resolved scene nodes.

use glam::{EulerRot, Quat, Vec3};
use smallvec::SmallVec;

use crate::errors::{Result, ScooterError};
use crate::math::ControlPath;
use crate::scene::{MeshGroup, MeshRegistry, NodeHandle, Scene, look_rotation};
use crate::settings::EntrySettings;

/// Position and orientation in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

/// Everything the animator produces for one progress value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleFrame {
    pub vehicle: Pose,
    /// Body rotation local to the body's parent.
    pub body_rotation: Quat,
    pub front_wheel_angle: f32,
    pub rear_wheel_angle: f32,
}

/// Where the body sits under the vehicle root while at rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyAttachment {
    /// Body origin in the root's local space.
    pub offset: Vec3,
    /// Rotation of the body's parent relative to the root.
    pub parent_rotation: Quat,
    /// Body local rotation before any animation.
    pub rest_rotation: Quat,
}

impl Default for BodyAttachment {
    fn default() -> Self {
        Self {
            offset: Vec3::ZERO,
            parent_rotation: Quat::IDENTITY,
            rest_rotation: Quat::IDENTITY,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PathAnimator {
    entry: ControlPath,
    look_back: f32,
    epsilon: f32,
    wheel_radius: f32,
    attachment: BodyAttachment,
    last_body_rotation: Quat,
}

impl PathAnimator {
    #[must_use]
    pub fn new(entry: ControlPath, settings: &EntrySettings) -> Self {
        let attachment = BodyAttachment::default();
        Self {
            entry,
            look_back: settings.look_back_distance.max(0.0),
            epsilon: settings.body_lag_epsilon,
            wheel_radius: settings.wheel_radius,
            last_body_rotation: attachment.rest_rotation,
            attachment,
        }
    }

    #[must_use]
    pub fn with_attachment(mut self, attachment: BodyAttachment) -> Self {
        self.attachment = attachment;
        self.last_body_rotation = attachment.rest_rotation;
        self
    }

    #[inline]
    #[must_use]
    pub fn entry(&self) -> &ControlPath {
        &self.entry
    }

    #[inline]
    #[must_use]
    pub fn attachment(&self) -> &BodyAttachment {
        &self.attachment
    }

    /// Computes the vehicle frame at entry `progress` (clamped to `[0, 1]`).
    pub fn update(&mut self, progress: f32) -> VehicleFrame {
        let p = progress.clamp(0.0, 1.0);

        let position = self.entry.point_at(p);
        let tangent = self.entry.tangent_at(p);
        let rotation = look_rotation(tangent, Vec3::Y).unwrap_or(Quat::IDENTITY);

        let body_rotation = self.body_rotation(p, position, rotation);
        let wheel_angle = self.wheel_angle(p);

        VehicleFrame {
            vehicle: Pose { position, rotation },
            body_rotation,
            front_wheel_angle: wheel_angle,
            rear_wheel_angle: wheel_angle,
        }
    }

    /// Rolling angle after covering `p` of the entry path.
    #[must_use]
    pub fn wheel_angle(&self, p: f32) -> f32 {
        if self.wheel_radius <= 0.0 {
            return 0.0;
        }
        p.clamp(0.0, 1.0) * self.entry.length() / self.wheel_radius
    }

    fn body_rotation(&mut self, p: f32, vehicle_position: Vec3, vehicle_rotation: Quat) -> Quat {
        if self.look_back <= 0.0 {
            return self.last_body_rotation;
        }

        let body_world = vehicle_position + vehicle_rotation * self.attachment.offset;
        let lag_point = self.entry.point_at((p - self.look_back).max(0.0));
        let direction = body_world - lag_point;

        if direction.length() <= self.epsilon {
            return self.last_body_rotation;
        }

        // The body faces a point one unit along the lag direction.
        if let Some(world_look) = look_rotation(direction.normalize(), Vec3::Y) {
            let parent_world = vehicle_rotation * self.attachment.parent_rotation;
            self.last_body_rotation = (parent_world.inverse() * world_look).normalize();
        }
        self.last_body_rotation
    }
}

// ============================================================================
// Scene binding
// ============================================================================

#[derive(Debug, Clone, Copy)]
struct WheelBinding {
    node: NodeHandle,
    group: MeshGroup,
    rest_euler: Vec3,
}

/// Scene nodes driven by a [`PathAnimator`].
#[derive(Debug, Clone)]
pub struct VehicleRig {
    root: NodeHandle,
    body: Option<NodeHandle>,
    wheels: SmallVec<[WheelBinding; 2]>,
    attachment: BodyAttachment,
}

impl VehicleRig {
    /// Resolves the root, body and wheel nodes and captures the body's rest attachment.
    ///
    /// Missing body or wheel groups are tolerated; a missing root is not.
    pub fn resolve(scene: &mut Scene, registry: &MeshRegistry, root: NodeHandle) -> Result<Self> {
        let Some(root_node) = scene.get_node(root) else {
            return Err(ScooterError::MissingNode("vehicle root".to_string()));
        };
        log::debug!("Vehicle root: \"{}\"", root_node.name);

        scene.update_matrix_world();

        let body = registry.get(MeshGroup::Body);
        let attachment = body
            .and_then(|b| Self::capture_attachment(scene, root, b))
            .unwrap_or_default();
        if body.is_none() {
            log::warn!("Vehicle rig has no body node; body lag disabled");
        }

        let wheels = [MeshGroup::FrontWheel, MeshGroup::RearWheel]
            .into_iter()
            .filter_map(|group| {
                let node = registry.get(group)?;
                let rest_euler = scene.get_node(node)?.transform.rotation_euler();
                Some(WheelBinding {
                    node,
                    group,
                    rest_euler,
                })
            })
            .collect();

        Ok(Self {
            root,
            body,
            wheels,
            attachment,
        })
    }

    fn capture_attachment(scene: &Scene, root: NodeHandle, body: NodeHandle) -> Option<BodyAttachment> {
        let body_node = scene.get_node(body)?;
        let relative = scene.relative_matrix(root, body)?;
        let parent_relative = match body_node.parent() {
            Some(parent) => scene.relative_matrix(root, parent)?,
            None => glam::Affine3A::IDENTITY,
        };
        let (_, parent_rotation, _) = parent_relative.to_scale_rotation_translation();

        Some(BodyAttachment {
            offset: relative.translation.into(),
            parent_rotation,
            rest_rotation: body_node.transform.rotation,
        })
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeHandle {
        self.root
    }

    #[inline]
    #[must_use]
    pub fn attachment(&self) -> BodyAttachment {
        self.attachment
    }

    /// Writes `frame` into the scene and refreshes the root's subtree.
    ///
    /// Order: root position, root rotation, body rotation, wheel rotation.
    /// Returns whether any node changed.
    pub fn apply(&self, scene: &mut Scene, frame: &VehicleFrame) -> bool {
        let mut changed = false;

        if let Some(root) = scene.get_node_mut(self.root) {
            let t = &mut root.transform;
            changed |= t.position != frame.vehicle.position || t.rotation != frame.vehicle.rotation;
            t.position = frame.vehicle.position;
            t.rotation = frame.vehicle.rotation;
        }

        if let Some(body) = self.body.and_then(|b| scene.get_node_mut(b)) {
            changed |= body.transform.rotation != frame.body_rotation;
            body.transform.rotation = frame.body_rotation;
        }

        for wheel in &self.wheels {
            let angle = match wheel.group {
                MeshGroup::FrontWheel => frame.front_wheel_angle,
                _ => frame.rear_wheel_angle,
            };
            if let Some(node) = scene.get_node_mut(wheel.node) {
                let rotation = Quat::from_euler(EulerRot::XYZ, angle, wheel.rest_euler.y, wheel.rest_euler.z);
                changed |= node.transform.rotation != rotation;
                node.transform.rotation = rotation;
            }
        }

        if changed {
            scene.update_subtree(self.root);
        }
        changed
    }
}
