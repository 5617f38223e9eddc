//! Hunt-Crossley compliant contact force.
//!
//! For each active contact of a contact set the element combines a Hertz-like
//! elastic term with a velocity-proportional dissipation term:
//!
//! ```text
//! s1 = k2 / (k1 + k2),  s2 = 1 - s1
//! k  = k1 * s1
//! c  = c1 * s1 + c2 * s2
//! fH = 4/3 * k * d * sqrt((r^2 / d) * k * d)
//! f  = fH * (1 + 1.5 * c * (v1 - v2) . n)
//! ```
//!
//! where `d` is the penetration depth, `r` the contact-patch radius and `n`
//! the contact normal pointing from the first body into the second. The
//! evaluation point is shifted along `n` by `d * (0.5 - s1)` according to the
//! stiffness split. Contacts are purely compressive: when `f <= 0` nothing is
//! applied. Otherwise `-f * n` acts on the first body and `+f * n` on the
//! second.

use glam::Vec3;

use crate::body::{BodyKinematics, ForceSink};
use crate::contact::{Contact, ContactSetIndex, ContactSubsystem};
use crate::error::{ContactError, ContactResult};

use super::ForceElement;

/// Material parameters of one body.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Parameters {
    pub stiffness: f32,
    pub dissipation: f32,
}

impl Parameters {
    pub fn new(stiffness: f32, dissipation: f32) -> Self {
        Self {
            stiffness,
            dissipation,
        }
    }
}

/// What to do with a contact whose inputs leave the force law undefined:
/// zero or overflowing combined stiffness, or a depth that is not positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateContactPolicy {
    /// Abort the evaluation pass with an error. No force of the pass is emitted.
    Fail,
    /// Treat the contact as contributing no force.
    Skip,
}

/// Configuration for a [`HuntCrossleyForce`].
#[derive(Debug, Clone)]
pub struct HuntCrossleyConfig {
    /// Handling of degenerate contacts. Default: `Fail`.
    pub degenerate_policy: DegenerateContactPolicy,
}

impl Default for HuntCrossleyConfig {
    fn default() -> Self {
        Self {
            degenerate_policy: DegenerateContactPolicy::Fail,
        }
    }
}

/// The force one contact exerts, ready to be applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactLoad {
    pub first_body: hecs::Entity,
    pub second_body: hecs::Entity,
    /// Station on the first body at the evaluation point.
    pub first_station: Vec3,
    /// Station on the second body at the evaluation point.
    pub second_station: Vec3,
    /// Evaluation point in world space, after the stiffness shift.
    pub location: Vec3,
    pub normal: Vec3,
    /// Positive force magnitude along `normal`.
    pub magnitude: f32,
}

impl ContactLoad {
    /// Force on the first body.
    pub fn first_force(&self) -> Vec3 {
        -self.magnitude * self.normal
    }

    /// Force on the second body.
    pub fn second_force(&self) -> Vec3 {
        self.magnitude * self.normal
    }
}

/// Elastic part of the contact force for combined stiffness `stiffness`.
#[inline]
pub fn hertz_force(stiffness: f32, depth: f32, radius: f32) -> f32 {
    let curvature = radius * radius / depth;
    (4.0 / 3.0) * stiffness * depth * (curvature * stiffness * depth).sqrt()
}

/// Scale the elastic force by the dissipation term.
///
/// `approach_speed` is `(v1 - v2) . n`; positive while the bodies close in.
#[inline]
pub fn hunt_crossley_force(elastic: f32, dissipation: f32, approach_speed: f32) -> f32 {
    elastic * (1.0 + 1.5 * dissipation * approach_speed)
}

/// Hunt-Crossley contact force for one contact set.
#[derive(Debug, Clone)]
pub struct HuntCrossleyForce {
    set: ContactSetIndex,
    config: HuntCrossleyConfig,
    parameters: Vec<Parameters>,
}

impl HuntCrossleyForce {
    /// Create a force acting on `set`. Every body starts with zero stiffness and dissipation.
    pub fn new(set: ContactSetIndex) -> Self {
        Self::with_config(set, HuntCrossleyConfig::default())
    }

    pub fn with_config(set: ContactSetIndex, config: HuntCrossleyConfig) -> Self {
        Self {
            set,
            config,
            parameters: Vec::new(),
        }
    }

    pub fn contact_set(&self) -> ContactSetIndex {
        self.set
    }

    pub fn config(&self) -> &HuntCrossleyConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: HuntCrossleyConfig) {
        self.config = config;
    }

    /// Set the material of body `body` of the contact set.
    ///
    /// Both values must be finite and non-negative.
    pub fn set_body_parameters(
        &mut self,
        contacts: &ContactSubsystem,
        body: usize,
        stiffness: f32,
        dissipation: f32,
    ) -> ContactResult<()> {
        let valid = |value: f32| value.is_finite() && value >= 0.0;
        if !valid(stiffness) || !valid(dissipation) {
            return Err(ContactError::InvalidParameters {
                body,
                stiffness,
                dissipation,
            });
        }
        *self.parameters_mut(contacts, body)? = Parameters::new(stiffness, dissipation);
        Ok(())
    }

    /// Parameters of body `body`; zero for bodies never configured.
    pub fn parameters(&self, contacts: &ContactSubsystem, body: usize) -> ContactResult<Parameters> {
        self.check_body(contacts, body)?;
        Ok(self.parameters.get(body).copied().unwrap_or_default())
    }

    /// Mutable parameters of body `body`, growing storage as needed.
    pub fn parameters_mut(
        &mut self,
        contacts: &ContactSubsystem,
        body: usize,
    ) -> ContactResult<&mut Parameters> {
        self.check_body(contacts, body)?;
        if body >= self.parameters.len() {
            self.parameters.resize(body + 1, Parameters::default());
        }
        Ok(&mut self.parameters[body])
    }

    /// Evaluate every active contact of the set without applying anything.
    ///
    /// Contacts that produce no compressive force are left out.
    pub fn contact_loads(
        &self,
        contacts: &ContactSubsystem,
        bodies: &(impl BodyKinematics + ?Sized),
    ) -> ContactResult<Vec<ContactLoad>> {
        let active = contacts.contacts(self.set)?;
        let mut loads = Vec::with_capacity(active.len());
        for contact in active {
            if let Some(load) = self.contact_load(contacts, bodies, contact)? {
                loads.push(load);
            }
        }
        Ok(loads)
    }

    fn contact_load(
        &self,
        contacts: &ContactSubsystem,
        bodies: &(impl BodyKinematics + ?Sized),
        contact: &Contact,
    ) -> ContactResult<Option<ContactLoad>> {
        let param1 = self.parameters(contacts, contact.first_body)?;
        let param2 = self.parameters(contacts, contact.second_body)?;
        let depth = contact.depth;
        let total_stiffness = param1.stiffness + param2.stiffness;

        // NaN inputs count as degenerate too.
        let degenerate = if depth.is_nan() || depth <= 0.0 {
            Some(ContactError::NonPositiveDepth { depth })
        } else if total_stiffness.is_nan() || total_stiffness <= 0.0 {
            Some(ContactError::ZeroCombinedStiffness {
                first: contact.first_body,
                second: contact.second_body,
            })
        } else if total_stiffness.is_infinite() {
            Some(ContactError::CombinedStiffnessOverflow {
                first: contact.first_body,
                second: contact.second_body,
            })
        } else {
            None
        };
        if let Some(err) = degenerate {
            return match self.config.degenerate_policy {
                DegenerateContactPolicy::Fail => Err(err),
                DegenerateContactPolicy::Skip => {
                    tracing::warn!("Skipping degenerate contact: {}", err);
                    Ok(None)
                }
            };
        }

        // Shift the evaluation point according to how the load splits between the materials.
        let s1 = param2.stiffness / total_stiffness;
        let s2 = 1.0 - s1;
        let normal = contact.normal;
        let location = contact.location + (depth * (0.5 - s1)) * normal;

        let stiffness = param1.stiffness * s1;
        let dissipation = param1.dissipation * s1 + param2.dissipation * s2;
        let elastic = hertz_force(stiffness, depth, contact.radius);

        let body1 = contacts.body(self.set, contact.first_body)?.entity;
        let body2 = contacts.body(self.set, contact.second_body)?.entity;
        let station1 = bodies.station_at_world_point(body1, location)?;
        let station2 = bodies.station_at_world_point(body2, location)?;
        let v1 = bodies.station_velocity(body1, station1)?;
        let v2 = bodies.station_velocity(body2, station2)?;
        let approach_speed = (v1 - v2).dot(normal);

        let magnitude = hunt_crossley_force(elastic, dissipation, approach_speed);
        tracing::trace!(
            "Contact {}-{}: depth = {}, fH = {}, f = {}",
            contact.first_body,
            contact.second_body,
            depth,
            elastic,
            magnitude
        );
        if magnitude.is_nan() || magnitude <= 0.0 {
            return Ok(None);
        }

        Ok(Some(ContactLoad {
            first_body: body1,
            second_body: body2,
            first_station: station1,
            second_station: station2,
            location,
            normal,
            magnitude,
        }))
    }

    fn check_body(&self, contacts: &ContactSubsystem, body: usize) -> ContactResult<()> {
        let num_bodies = contacts.num_bodies(self.set)?;
        if body >= num_bodies {
            return Err(ContactError::BodyIndexOutOfRange {
                index: body,
                num_bodies,
            });
        }
        Ok(())
    }
}

impl ForceElement for HuntCrossleyForce {
    fn calc_force(
        &self,
        contacts: &ContactSubsystem,
        bodies: &dyn BodyKinematics,
        forces: &mut dyn ForceSink,
    ) -> ContactResult<()> {
        for load in self.contact_loads(contacts, bodies)? {
            forces.apply_force_at_station(load.first_body, load.first_station, load.first_force());
            forces.apply_force_at_station(
                load.second_body,
                load.second_station,
                load.second_force(),
            );
        }
        Ok(())
    }

    /// Always zero: the contact law is dissipative and has no potential.
    fn calc_potential_energy(
        &self,
        _contacts: &ContactSubsystem,
        _bodies: &dyn BodyKinematics,
    ) -> f32 {
        0.0
    }
}
