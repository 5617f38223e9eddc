//! Rein Contact
//!
//! Compliant contact forces for rein rigid bodies.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! 1. **geometry** - Contact surface shapes and the process-wide type registry
//! 2. **contact** - Contact records and the contact sets that own them
//! 3. **body** - Kinematics and force-sink seams between forces and bodies
//! 4. **ecs** - hecs-backed bodies (`Transform` + `RigidBody`)
//! 5. **force** - Force elements, including the Hunt-Crossley contact force
//!
//! A collision detector fills each contact set with this step's contacts;
//! the [`ForceSubsystem`] then evaluates its elements into a [`BodyForces`]
//! sink, which [`ecs::apply_forces`] flushes into the bodies' accumulators.

pub mod body;
pub mod contact;
pub mod ecs;
pub mod error;
pub mod force;
pub mod geometry;

pub use body::{BodyForces, BodyKinematics, ForceSink, SpatialForce, StationForce};
pub use contact::{Contact, ContactBody, ContactSetIndex, ContactSubsystem};
pub use error::{ContactError, ContactResult};
pub use force::{
    ContactLoad, DegenerateContactPolicy, ForceElement, ForceIndex, ForceSubsystem,
    HuntCrossleyConfig, HuntCrossleyForce, Parameters,
};
pub use geometry::{ContactGeometry, HalfSpace, Sphere, TypeIndex};

// Re-export glam and hecs for convenience
pub use glam;
pub use hecs;
