//! Contact records and the contact sets that own them.

mod subsystem;

use glam::Vec3;

pub use self::subsystem::{ContactBody, ContactSubsystem};

/// Identifies a contact set within a [`ContactSubsystem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactSetIndex(pub usize);

/// One overlapping body pair, as reported by a collision detector for the current step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Index of the first body within its contact set.
    pub first_body: usize,
    /// Index of the second body within its contact set.
    pub second_body: usize,
    /// Contact point in world space.
    pub location: Vec3,
    /// Unit normal pointing from the first body into the second.
    pub normal: Vec3,
    /// Penetration depth. Positive for any active contact.
    pub depth: f32,
    /// Effective radius of the contact patch.
    pub radius: f32,
}

impl Contact {
    pub fn new(
        first_body: usize,
        second_body: usize,
        location: Vec3,
        normal: Vec3,
        depth: f32,
        radius: f32,
    ) -> Self {
        Self {
            first_body,
            second_body,
            location,
            normal,
            depth,
            radius,
        }
    }
}
