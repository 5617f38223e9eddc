//! End-to-end contact force evaluation through an ECS world.

use anyhow::Result;
use glam::{Quat, Vec3};
use rein_contact::ecs::{apply_forces, RigidBody, Transform};
use rein_contact::{
    BodyForces, Contact, ContactError, ContactSubsystem, ForceElement, ForceSubsystem, HalfSpace,
    HuntCrossleyForce, Sphere,
};

const RADIUS: f32 = 0.5;

/// Two balls sitting in the same ground plane.
struct Scene {
    world: hecs::World,
    contacts: ContactSubsystem,
    forces: ForceSubsystem,
    ground: hecs::Entity,
    balls: [hecs::Entity; 2],
}

fn two_balls_on_ground(depths: [f32; 2]) -> Result<Scene> {
    let mut world = hecs::World::new();
    let ground = world.spawn((Transform::identity(), RigidBody::new_static()));
    let balls = [
        world.spawn((
            Transform::from_position(Vec3::new(-1.0, RADIUS - depths[0], 0.0)),
            RigidBody::new_dynamic(1.0),
        )),
        world.spawn((
            Transform::from_position(Vec3::new(1.0, RADIUS - depths[1], 0.0)),
            RigidBody::new_dynamic(1.0),
        )),
    ];

    let mut contacts = ContactSubsystem::new();
    let set = contacts.create_contact_set();
    contacts.add_body(set, ground, Box::new(HalfSpace::new()))?;
    for ball in balls {
        contacts.add_body(set, ball, Box::new(Sphere::new(RADIUS)))?;
    }
    contacts.set_contacts(
        set,
        vec![
            Contact::new(0, 1, Vec3::new(-1.0, 0.0, 0.0), Vec3::Y, depths[0], RADIUS),
            Contact::new(0, 2, Vec3::new(1.0, 0.0, 0.0), Vec3::Y, depths[1], RADIUS),
        ],
    )?;

    let mut hunt_crossley = HuntCrossleyForce::new(set);
    hunt_crossley.set_body_parameters(&contacts, 0, 1.0e5, 0.2)?;
    hunt_crossley.set_body_parameters(&contacts, 1, 1.0e5, 0.2)?;
    hunt_crossley.set_body_parameters(&contacts, 2, 1.0e5, 0.2)?;

    let mut forces = ForceSubsystem::new();
    forces.adopt_force(Box::new(hunt_crossley));

    Ok(Scene {
        world,
        contacts,
        forces,
        ground,
        balls,
    })
}

#[test]
fn test_contacts_on_shared_body_accumulate() -> Result<()> {
    let mut scene = two_balls_on_ground([0.01, 0.02])?;

    let mut sink = BodyForces::new();
    scene
        .forces
        .calc_forces(&scene.contacts, &scene.world, &mut sink)?;

    let on_first = sink.net_force(scene.balls[0]);
    let on_second = sink.net_force(scene.balls[1]);
    let on_ground = sink.net_force(scene.ground);

    assert!(on_first.y > 0.0);
    assert!(
        on_second.y > on_first.y,
        "Deeper contact should push harder: {} vs {}",
        on_second.y,
        on_first.y
    );
    let eps = 1e-2;
    assert!((on_ground + on_first + on_second).length() < eps);

    apply_forces(&mut scene.world, &sink)?;
    let rb = scene.world.get::<&RigidBody>(scene.balls[1])?;
    assert!((rb.force_accumulator - on_second).length() < eps);
    // The force acts straight through the ball's center.
    assert!(rb.torque_accumulator.length() < eps);

    let ground = scene.world.get::<&RigidBody>(scene.ground)?;
    assert_eq!(ground.force_accumulator, Vec3::ZERO);
    Ok(())
}

#[test]
fn test_off_center_contact_produces_torque() -> Result<()> {
    let mut world = hecs::World::new();
    let ground = world.spawn((Transform::identity(), RigidBody::new_static()));
    // Rotated body whose origin sits above and to the left of the contact.
    let block = world.spawn((
        Transform::from_position_rotation(Vec3::new(-0.2, 0.3, 0.0), Quat::from_rotation_z(0.3)),
        RigidBody::new_dynamic(2.0),
    ));

    let mut contacts = ContactSubsystem::new();
    let set = contacts.create_contact_set();
    contacts.add_body(set, ground, Box::new(HalfSpace::new()))?;
    contacts.add_body(set, block, Box::new(Sphere::new(0.3)))?;
    contacts.set_contacts(set, vec![Contact::new(0, 1, Vec3::ZERO, Vec3::Y, 0.01, 0.1)])?;

    let mut force = HuntCrossleyForce::new(set);
    force.set_body_parameters(&contacts, 0, 1.0e4, 0.0)?;
    force.set_body_parameters(&contacts, 1, 1.0e4, 0.0)?;

    let mut sink = BodyForces::new();
    force.calc_force(&contacts, &world, &mut sink)?;
    apply_forces(&mut world, &sink)?;

    let rb = world.get::<&RigidBody>(block)?;
    // r = (0.2, -0.3, 0), F along +Y: torque = r x F points along +Z.
    assert!(rb.force_accumulator.y > 0.0);
    assert!(rb.torque_accumulator.z > 0.0);
    let expected = Vec3::new(0.2, -0.3, 0.0).cross(rb.force_accumulator);
    assert!((rb.torque_accumulator - expected).length() < 1e-4 * expected.length());
    Ok(())
}

#[test]
fn test_despawned_body_is_reported() -> Result<()> {
    let mut scene = two_balls_on_ground([0.01, 0.01])?;
    scene.world.despawn(scene.balls[0])?;

    let mut sink = BodyForces::new();
    let result = scene
        .forces
        .calc_forces(&scene.contacts, &scene.world, &mut sink);
    assert_eq!(result, Err(ContactError::MissingBody(scene.balls[0])));
    Ok(())
}

#[test]
fn test_potential_energy_is_zero() -> Result<()> {
    let scene = two_balls_on_ground([0.01, 0.03])?;
    assert_eq!(
        scene
            .forces
            .calc_potential_energy(&scene.contacts, &scene.world),
        0.0
    );
    Ok(())
}
