//! Force elements and the subsystem that evaluates them.
//!
//! # Evaluation
//!
//! Once per evaluation cycle the host calls [`ForceSubsystem::calc_forces`],
//! which runs every adopted element, in adoption order, into a single
//! [`ForceSink`]. Elements only read body state; the host applies the
//! collected forces afterwards (see [`crate::ecs::apply_forces`]).

pub mod hunt_crossley;

use crate::body::{BodyForces, BodyKinematics, ForceSink};
use crate::contact::ContactSubsystem;
use crate::error::ContactResult;

pub use self::hunt_crossley::{
    ContactLoad, DegenerateContactPolicy, HuntCrossleyConfig, HuntCrossleyForce, Parameters,
};

/// The two callbacks every force element supplies.
pub trait ForceElement {
    /// Add this element's forces for the current state to `forces`.
    fn calc_force(
        &self,
        contacts: &ContactSubsystem,
        bodies: &dyn BodyKinematics,
        forces: &mut dyn ForceSink,
    ) -> ContactResult<()>;

    /// Potential energy stored by this element in the current state.
    fn calc_potential_energy(&self, contacts: &ContactSubsystem, bodies: &dyn BodyKinematics)
        -> f32;
}

/// Identifies an adopted force element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ForceIndex(pub usize);

/// Owns force elements and evaluates them together.
#[derive(Default)]
pub struct ForceSubsystem {
    forces: Vec<Box<dyn ForceElement>>,
}

impl ForceSubsystem {
    pub fn new() -> Self {
        Self { forces: Vec::new() }
    }

    /// Take ownership of a force element.
    pub fn adopt_force(&mut self, force: Box<dyn ForceElement>) -> ForceIndex {
        let index = ForceIndex(self.forces.len());
        self.forces.push(force);
        tracing::debug!("Adopted force element {:?}", index);
        index
    }

    pub fn num_forces(&self) -> usize {
        self.forces.len()
    }

    pub fn force(&self, index: ForceIndex) -> Option<&dyn ForceElement> {
        self.forces.get(index.0).map(|force| force.as_ref())
    }

    pub fn force_mut(&mut self, index: ForceIndex) -> Option<&mut (dyn ForceElement + 'static)> {
        self.forces.get_mut(index.0).map(|force| force.as_mut())
    }

    /// Run every element into `forces`, stopping at the first failure.
    ///
    /// Elements are staged first, so a failing pass leaves `forces` untouched
    /// even when earlier elements succeeded.
    pub fn calc_forces(
        &self,
        contacts: &ContactSubsystem,
        bodies: &dyn BodyKinematics,
        forces: &mut dyn ForceSink,
    ) -> ContactResult<()> {
        let mut staged = BodyForces::new();
        for force in &self.forces {
            force.calc_force(contacts, bodies, &mut staged)?;
        }
        for applied in staged.applied() {
            forces.apply_force_at_station(applied.body, applied.station, applied.force);
        }
        Ok(())
    }

    /// Total potential energy of all elements.
    pub fn calc_potential_energy(
        &self,
        contacts: &ContactSubsystem,
        bodies: &dyn BodyKinematics,
    ) -> f32 {
        self.forces
            .iter()
            .map(|force| force.calc_potential_energy(contacts, bodies))
            .sum()
    }
}
