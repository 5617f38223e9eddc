//! Error types for contact force evaluation.
//!
//! Every fallible operation in the crate returns [`ContactResult<T>`].

use thiserror::Error;

use crate::contact::ContactSetIndex;

/// Unified error type for contact sets and contact force elements.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContactError {
    /// A body index outside `0..num_bodies` of its contact set.
    #[error("body index {index} out of range for contact set with {num_bodies} bodies")]
    BodyIndexOutOfRange { index: usize, num_bodies: usize },

    /// The contact set was never created by this subsystem.
    #[error("unknown contact set {0:?}")]
    UnknownContactSet(ContactSetIndex),

    /// Material parameters must be finite and non-negative.
    #[error("invalid parameters for body {body}: stiffness = {stiffness}, dissipation = {dissipation}")]
    InvalidParameters {
        body: usize,
        stiffness: f32,
        dissipation: f32,
    },

    /// Both bodies of a contact have zero stiffness, so the load split is undefined.
    #[error("contact between bodies {first} and {second} has zero combined stiffness")]
    ZeroCombinedStiffness { first: usize, second: usize },

    /// The stiffness sum of the two bodies is not representable.
    #[error("stiffness of bodies {first} and {second} overflows when combined")]
    CombinedStiffnessOverflow { first: usize, second: usize },

    /// The detector reported a contact that does not actually overlap.
    #[error("contact depth must be positive (got {depth})")]
    NonPositiveDepth { depth: f32 },

    /// The entity is gone or lacks `Transform`/`RigidBody` components.
    #[error("entity {0:?} is not a rigid body")]
    MissingBody(hecs::Entity),
}

/// Convenience alias for `Result<T, ContactError>`.
pub type ContactResult<T> = Result<T, ContactError>;
