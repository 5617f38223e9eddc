//! Shared setup helpers for rein-contact benchmarks.
//!
//! ## Running
//!
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench contact
//!
//! Filter by group:
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench contact -- hunt_crossley

use anyhow::Result;
use glam::Vec3;
use rein_contact::ecs::{RigidBody, Transform};
use rein_contact::{
    Contact, ContactSetIndex, ContactSubsystem, HalfSpace, HuntCrossleyForce, Sphere,
};

/// A ground plane with `n` spheres pressed into it.
pub struct GroundScene {
    pub world: hecs::World,
    pub contacts: ContactSubsystem,
    pub set: ContactSetIndex,
    pub force: HuntCrossleyForce,
}

/// Spawn `n` falling spheres in a grid, each overlapping a shared ground plane.
pub fn setup_ground_scene(n: usize) -> Result<GroundScene> {
    let mut world = hecs::World::new();
    let mut contacts = ContactSubsystem::new();
    let set = contacts.create_contact_set();

    let ground = world.spawn((Transform::identity(), RigidBody::new_static()));
    contacts.add_body(set, ground, Box::new(HalfSpace::new()))?;

    let radius = 0.5;
    let cols = (n as f32).sqrt().ceil() as usize;
    let mut active = Vec::with_capacity(n);
    for i in 0..n {
        let x = (i % cols) as f32 * 1.5;
        let z = (i / cols) as f32 * 1.5;
        // Vary depth and speed so both the compressive and the separating branch are hit.
        let depth = 0.001 + 0.0005 * (i % 7) as f32;
        let vy = if i % 3 == 0 { 1.0 } else { -0.5 };

        let ball = world.spawn((
            Transform::from_position(Vec3::new(x, radius - depth, z)),
            RigidBody::new_dynamic(1.0).with_linear_velocity(Vec3::new(0.0, vy, 0.0)),
        ));
        let index = contacts.add_body(set, ball, Box::new(Sphere::new(radius)))?;
        active.push(Contact::new(
            0,
            index,
            Vec3::new(x, 0.0, z),
            Vec3::Y,
            depth,
            radius,
        ));
    }
    contacts.set_contacts(set, active)?;

    let mut force = HuntCrossleyForce::new(set);
    force.set_body_parameters(&contacts, 0, 1.0e6, 0.5)?;
    for index in 1..=n {
        force.set_body_parameters(&contacts, index, 1.0e5, 1.0)?;
    }

    Ok(GroundScene {
        world,
        contacts,
        set,
        force,
    })
}
