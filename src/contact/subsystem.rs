//! Registry of contact sets.
//!
//! Each set owns its bodies (entity + contact geometry) and the list of
//! contacts the detector reported for the current step. Nothing is carried
//! over between steps: `set_contacts` replaces the previous list wholesale.

use crate::error::{ContactError, ContactResult};
use crate::geometry::ContactGeometry;

use super::{Contact, ContactSetIndex};

/// A body taking part in a contact set.
#[derive(Debug, Clone)]
pub struct ContactBody {
    pub entity: hecs::Entity,
    pub geometry: Box<dyn ContactGeometry>,
}

#[derive(Debug, Default)]
struct ContactSet {
    bodies: Vec<ContactBody>,
    contacts: Vec<Contact>,
}

/// Owns every contact set of a simulation.
#[derive(Debug, Default)]
pub struct ContactSubsystem {
    sets: Vec<ContactSet>,
}

impl ContactSubsystem {
    pub fn new() -> Self {
        Self { sets: Vec::new() }
    }

    /// Create an empty contact set.
    pub fn create_contact_set(&mut self) -> ContactSetIndex {
        let index = ContactSetIndex(self.sets.len());
        self.sets.push(ContactSet::default());
        tracing::debug!("Created contact set {:?}", index);
        index
    }

    pub fn num_contact_sets(&self) -> usize {
        self.sets.len()
    }

    /// Add a body to `set`, returning its index within the set.
    pub fn add_body(
        &mut self,
        set: ContactSetIndex,
        entity: hecs::Entity,
        geometry: Box<dyn ContactGeometry>,
    ) -> ContactResult<usize> {
        let contact_set = self.set_mut(set)?;
        let index = contact_set.bodies.len();
        tracing::debug!(
            "Added {} body {:?} to contact set {:?} at index {}",
            geometry.type_name(),
            entity,
            set,
            index
        );
        contact_set.bodies.push(ContactBody { entity, geometry });
        Ok(index)
    }

    pub fn num_bodies(&self, set: ContactSetIndex) -> ContactResult<usize> {
        Ok(self.set(set)?.bodies.len())
    }

    pub fn body(&self, set: ContactSetIndex, index: usize) -> ContactResult<&ContactBody> {
        let bodies = &self.set(set)?.bodies;
        bodies.get(index).ok_or(ContactError::BodyIndexOutOfRange {
            index,
            num_bodies: bodies.len(),
        })
    }

    /// Geometry of a body, for in-place edits such as resizing a sphere.
    pub fn geometry_mut(
        &mut self,
        set: ContactSetIndex,
        index: usize,
    ) -> ContactResult<&mut dyn ContactGeometry> {
        let bodies = &mut self.set_mut(set)?.bodies;
        let num_bodies = bodies.len();
        bodies
            .get_mut(index)
            .map(|body| body.geometry.as_mut())
            .ok_or(ContactError::BodyIndexOutOfRange { index, num_bodies })
    }

    /// Replace the active contact list of `set` with this step's detector output.
    ///
    /// Rejects the whole list if any contact names a body outside the set.
    pub fn set_contacts(
        &mut self,
        set: ContactSetIndex,
        contacts: Vec<Contact>,
    ) -> ContactResult<()> {
        let contact_set = self.set_mut(set)?;
        let num_bodies = contact_set.bodies.len();
        for contact in &contacts {
            for index in [contact.first_body, contact.second_body] {
                if index >= num_bodies {
                    return Err(ContactError::BodyIndexOutOfRange { index, num_bodies });
                }
            }
        }
        contact_set.contacts = contacts;
        Ok(())
    }

    pub fn contacts(&self, set: ContactSetIndex) -> ContactResult<&[Contact]> {
        Ok(&self.set(set)?.contacts)
    }

    pub fn clear_contacts(&mut self, set: ContactSetIndex) -> ContactResult<()> {
        self.set_mut(set)?.contacts.clear();
        Ok(())
    }

    fn set(&self, set: ContactSetIndex) -> ContactResult<&ContactSet> {
        self.sets
            .get(set.0)
            .ok_or(ContactError::UnknownContactSet(set))
    }

    fn set_mut(&mut self, set: ContactSetIndex) -> ContactResult<&mut ContactSet> {
        self.sets
            .get_mut(set.0)
            .ok_or(ContactError::UnknownContactSet(set))
    }
}
