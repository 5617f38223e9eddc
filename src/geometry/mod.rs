//! Contact surface geometry.
//!
//! A [`ContactGeometry`] describes the form of a body's contact surface. The
//! trait is open: a new shape implements the three operations below, picks a
//! distinct type name, and is usable anywhere a built-in shape is.
//!
//! Each shape instance is exclusively owned by whatever holds it. Cloning a
//! `Box<dyn ContactGeometry>` produces an independent deep copy.

pub mod registry;
mod shapes;

use std::any::Any;
use std::fmt;

pub use self::registry::TypeIndex;
pub use self::shapes::{HalfSpace, Sphere};

/// The form of a contact surface.
pub trait ContactGeometry: fmt::Debug + Send + Sync + 'static {
    /// Registered type name, e.g. `"sphere"`.
    fn type_name(&self) -> &'static str;

    /// Stable registry index for [`type_name`](Self::type_name).
    fn type_index(&self) -> TypeIndex {
        registry::index_for(self.type_name())
    }

    /// Deep copy sharing no state with `self`.
    fn clone_geometry(&self) -> Box<dyn ContactGeometry>;

    /// `self` as `Any`, backing `downcast_ref`.
    fn as_any(&self) -> &dyn Any;

    /// `self` as mutable `Any`, backing `downcast_mut`.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl dyn ContactGeometry {
    /// Borrow the concrete shape if it is a `T`.
    pub fn downcast_ref<T: ContactGeometry>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Mutably borrow the concrete shape if it is a `T`.
    pub fn downcast_mut<T: ContactGeometry>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }

    /// Whether this shape is a `T`.
    pub fn is<T: ContactGeometry>(&self) -> bool {
        self.as_any().is::<T>()
    }
}

impl Clone for Box<dyn ContactGeometry> {
    fn clone(&self) -> Self {
        self.clone_geometry()
    }
}
