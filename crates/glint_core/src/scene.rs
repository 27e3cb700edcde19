//! Scene registry.
//!
//! A flat, ordered list of placed objects. Only physical entries take part
//! in intersection queries; locators (such as the camera's entry) are kept
//! for bookkeeping. Order matters only for exact-distance ties, where the
//! earlier object wins.

use thiserror::Error;

use crate::{MaterialError, PhysicalObject, Placement, Sphere};

/// Errors reported while checking a scene before rendering.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("object {index} has an invalid material: {source}")]
    InvalidMaterial {
        index: usize,
        #[source]
        source: MaterialError,
    },
}

/// An entry in the scene registry.
#[derive(Debug)]
pub enum SceneObject {
    /// A placed, non-intersectable object
    Locator(Placement),
    /// An object rays can hit
    Physical(Box<dyn PhysicalObject>),
}

impl SceneObject {
    /// Where the entry sits in the world.
    pub fn placement(&self) -> &Placement {
        match self {
            SceneObject::Locator(placement) => placement,
            SceneObject::Physical(object) => object.placement(),
        }
    }

    /// Get the entry as a physical object, if it is one.
    pub fn as_physical(&self) -> Option<&dyn PhysicalObject> {
        match self {
            SceneObject::Locator(_) => None,
            SceneObject::Physical(object) => Some(object.as_ref()),
        }
    }
}

impl From<Placement> for SceneObject {
    fn from(placement: Placement) -> Self {
        SceneObject::Locator(placement)
    }
}

impl From<Sphere> for SceneObject {
    fn from(sphere: Sphere) -> Self {
        SceneObject::Physical(Box::new(sphere))
    }
}

impl From<Box<dyn PhysicalObject>> for SceneObject {
    fn from(object: Box<dyn PhysicalObject>) -> Self {
        SceneObject::Physical(object)
    }
}

/// Ordered collection of scene objects.
///
/// The registry is only mutated during scene setup. Renders borrow it
/// immutably, so it can be shared across worker threads.
#[derive(Debug, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an object and return its index.
    pub fn add(&mut self, object: impl Into<SceneObject>) -> usize {
        let index = self.objects.len();
        self.objects.push(object.into());
        log::debug!("Added scene object {index}");
        index
    }

    /// Get the object at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> &SceneObject {
        &self.objects[index]
    }

    /// Remove and return the object at `index`, shifting later entries down.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> SceneObject {
        log::debug!("Removing scene object {index}");
        self.objects.remove(index)
    }

    /// Remove every object.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Get the number of objects, physical or not.
    pub fn count(&self) -> usize {
        self.objects.len()
    }

    /// Alias of [`Scene::count`].
    pub fn len(&self) -> usize {
        self.count()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterate over all entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, SceneObject> {
        self.objects.iter()
    }

    /// Iterate over the entries rays can hit, in insertion order.
    pub fn physical_objects(&self) -> impl Iterator<Item = &dyn PhysicalObject> + '_ {
        self.objects.iter().filter_map(SceneObject::as_physical)
    }

    /// Validate every physical object's material.
    pub fn validate_materials(&self) -> Result<(), SceneError> {
        for (index, object) in self.objects.iter().enumerate() {
            if let Some(physical) = object.as_physical() {
                physical
                    .material()
                    .validate()
                    .map_err(|source| SceneError::InvalidMaterial { index, source })?;
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a SceneObject;
    type IntoIter = std::slice::Iter<'a, SceneObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
