//! Seams between force elements and the bodies they act on.
//!
//! Force elements read body motion through [`BodyKinematics`] and emit
//! forces through [`ForceSink`]. A *station* is a point fixed in a body's own
//! frame, measured from the body origin.

use std::collections::HashMap;

use glam::Vec3;

use crate::error::ContactResult;

/// Read access to body poses and velocities.
pub trait BodyKinematics {
    /// The station of `body` currently coincident with the world-space `point`.
    fn station_at_world_point(&self, body: hecs::Entity, point: Vec3) -> ContactResult<Vec3>;

    /// World-space velocity of a station of `body`.
    fn station_velocity(&self, body: hecs::Entity, station: Vec3) -> ContactResult<Vec3>;

    /// Offset of a station from the body origin, expressed in world axes.
    fn station_offset(&self, body: hecs::Entity, station: Vec3) -> ContactResult<Vec3>;
}

/// Receives forces applied at body stations. Repeated calls accumulate.
pub trait ForceSink {
    fn apply_force_at_station(&mut self, body: hecs::Entity, station: Vec3, force: Vec3);
}

/// Force and torque about a body's origin, both in world axes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpatialForce {
    pub force: Vec3,
    pub torque: Vec3,
}

/// A single force applied at a station.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationForce {
    pub body: hecs::Entity,
    pub station: Vec3,
    pub force: Vec3,
}

/// Accumulates station forces for one evaluation pass.
///
/// Forces are kept in application order; torques are only resolved against
/// body orientations when the pass is read back.
#[derive(Debug, Default, Clone)]
pub struct BodyForces {
    applied: Vec<StationForce>,
}

impl BodyForces {
    pub fn new() -> Self {
        Self {
            applied: Vec::new(),
        }
    }

    pub fn applied(&self) -> &[StationForce] {
        &self.applied
    }

    pub fn is_empty(&self) -> bool {
        self.applied.is_empty()
    }

    pub fn clear(&mut self) {
        self.applied.clear();
    }

    /// Sum of all forces applied to `body`.
    pub fn net_force(&self, body: hecs::Entity) -> Vec3 {
        self.applied
            .iter()
            .filter(|applied| applied.body == body)
            .map(|applied| applied.force)
            .sum()
    }

    /// Resolve every touched body's forces into a force and torque about its origin.
    pub fn resolve(
        &self,
        kinematics: &(impl BodyKinematics + ?Sized),
    ) -> ContactResult<HashMap<hecs::Entity, SpatialForce>> {
        let mut resolved: HashMap<hecs::Entity, SpatialForce> = HashMap::new();
        for applied in &self.applied {
            let arm = kinematics.station_offset(applied.body, applied.station)?;
            let total = resolved.entry(applied.body).or_default();
            total.force += applied.force;
            total.torque += arm.cross(applied.force);
        }
        Ok(resolved)
    }
}

impl ForceSink for BodyForces {
    fn apply_force_at_station(&mut self, body: hecs::Entity, station: Vec3, force: Vec3) {
        self.applied.push(StationForce {
            body,
            station,
            force,
        });
    }
}
