//! Built-in contact shapes.

use std::any::Any;
use std::sync::OnceLock;

use super::registry::{self, TypeIndex};
use super::ContactGeometry;

static HALF_SPACE_TYPE: OnceLock<TypeIndex> = OnceLock::new();
static SPHERE_TYPE: OnceLock<TypeIndex> = OnceLock::new();

fn half_space_type() -> TypeIndex {
    *HALF_SPACE_TYPE.get_or_init(|| registry::index_for(HalfSpace::TYPE_NAME))
}

fn sphere_type() -> TypeIndex {
    *SPHERE_TYPE.get_or_init(|| registry::index_for(Sphere::TYPE_NAME))
}

/// An infinite planar half-space. Carries no parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfSpace;

impl HalfSpace {
    pub const TYPE_NAME: &'static str = "halfspace";

    /// Create a half-space, registering its type name on first use.
    pub fn new() -> Self {
        half_space_type();
        Self
    }
}

impl Default for HalfSpace {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactGeometry for HalfSpace {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    #[inline]
    fn type_index(&self) -> TypeIndex {
        half_space_type()
    }

    fn clone_geometry(&self) -> Box<dyn ContactGeometry> {
        Box::new(*self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A sphere centered on its body's origin.
///
/// The radius is not validated; callers are responsible for keeping it positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    radius: f32,
}

impl Sphere {
    pub const TYPE_NAME: &'static str = "sphere";

    /// Create a sphere, registering its type name on first use.
    pub fn new(radius: f32) -> Self {
        sphere_type();
        Self { radius }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
    }
}

impl ContactGeometry for Sphere {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    #[inline]
    fn type_index(&self) -> TypeIndex {
        sphere_type()
    }

    fn clone_geometry(&self) -> Box<dyn ContactGeometry> {
        Box::new(*self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
