//! hecs-backed bodies.
//!
//! A body is any entity with both a [`Transform`] and a [`RigidBody`].
//! `hecs::World` serves as the [`BodyKinematics`] provider, and
//! [`apply_forces`] flushes a finished evaluation pass into the bodies'
//! force accumulators for the integrator to consume.

pub mod components;

use glam::Vec3;

use crate::body::{BodyForces, BodyKinematics};
use crate::error::{ContactError, ContactResult};

pub use self::components::{RigidBody, RigidBodyType, Transform};

fn pose_and_motion(
    world: &hecs::World,
    body: hecs::Entity,
) -> ContactResult<(Transform, Vec3, Vec3)> {
    let transform = world
        .get::<&Transform>(body)
        .map_err(|_| ContactError::MissingBody(body))?;
    let rb = world
        .get::<&RigidBody>(body)
        .map_err(|_| ContactError::MissingBody(body))?;
    Ok((*transform, rb.linear_velocity, rb.angular_velocity))
}

impl BodyKinematics for hecs::World {
    fn station_at_world_point(&self, body: hecs::Entity, point: Vec3) -> ContactResult<Vec3> {
        let (transform, _, _) = pose_and_motion(self, body)?;
        Ok(transform.inverse_transform_point(point))
    }

    fn station_velocity(&self, body: hecs::Entity, station: Vec3) -> ContactResult<Vec3> {
        let (transform, linear, angular) = pose_and_motion(self, body)?;
        Ok(linear + angular.cross(transform.rotation * station))
    }

    fn station_offset(&self, body: hecs::Entity, station: Vec3) -> ContactResult<Vec3> {
        let (transform, _, _) = pose_and_motion(self, body)?;
        Ok(transform.rotation * station)
    }
}

/// Add an evaluation pass's forces and torques to the bodies' accumulators.
///
/// Only dynamic bodies accumulate; static and kinematic bodies ignore forces.
pub fn apply_forces(world: &mut hecs::World, forces: &BodyForces) -> ContactResult<()> {
    let resolved = forces.resolve(&*world)?;
    for (entity, total) in resolved {
        let mut rb = world
            .get::<&mut RigidBody>(entity)
            .map_err(|_| ContactError::MissingBody(entity))?;
        if rb.body_type == RigidBodyType::Dynamic {
            rb.force_accumulator += total.force;
            rb.torque_accumulator += total.torque;
        }
    }
    Ok(())
}
