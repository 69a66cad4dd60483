use slotmap::SlotMap;

use crate::error::{Result, SceneError};
use crate::math::Point3;
use crate::tessellation::Polyline;

use super::{DisplaySink, EntityId};

/// Geometry held by an [`EntityStore`].
#[derive(Debug, Clone)]
pub enum DisplayEntity {
    /// A single point marker.
    PointMarker(Point3),
    /// A sampled curve.
    Polyline(Polyline),
}

/// Headless [`DisplaySink`] that keeps displayed geometry in an arena.
///
/// Entities are addressed by generational ids, so a removed id is never
/// confused with a later insertion.
#[derive(Debug, Default)]
pub struct EntityStore {
    entities: SlotMap<EntityId, DisplayEntity>,
}

impl EntityStore {
    /// Creates a new, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the entity with the given id, if it is still displayed.
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&DisplayEntity> {
        self.entities.get(id)
    }

    /// Returns whether the entity is still displayed.
    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(id)
    }

    /// Returns the number of displayed entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns whether nothing is displayed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterates over all displayed entities.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &DisplayEntity)> {
        self.entities.iter()
    }
}

impl DisplaySink for EntityStore {
    fn add_point_marker(&mut self, position: Point3) -> EntityId {
        self.entities.insert(DisplayEntity::PointMarker(position))
    }

    fn add_polyline(&mut self, polyline: &Polyline) -> EntityId {
        self.entities.insert(DisplayEntity::Polyline(polyline.clone()))
    }

    fn remove(&mut self, id: EntityId) -> Result<()> {
        self.entities
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| SceneError::EntityNotFound("display entity".into()).into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::MeasureError;

    #[test]
    fn add_and_remove_marker() {
        let mut store = EntityStore::new();
        let id = store.add_point_marker(Point3::new(1.0, 2.0, 3.0));
        assert!(matches!(store.get(id), Some(DisplayEntity::PointMarker(_))));
        assert_eq!(store.len(), 1);

        store.remove(id).unwrap();
        assert!(store.is_empty());
        assert!(!store.contains(id));
    }

    #[test]
    fn removing_twice_fails() {
        let mut store = EntityStore::new();
        let id = store.add_polyline(&Polyline::new(vec![Point3::origin(); 2]));
        store.remove(id).unwrap();
        assert!(matches!(
            store.remove(id),
            Err(MeasureError::Scene(SceneError::EntityNotFound(_)))
        ));
    }

    #[test]
    fn stale_id_does_not_alias_new_entity() {
        let mut store = EntityStore::new();
        let old = store.add_point_marker(Point3::origin());
        store.remove(old).unwrap();
        let new = store.add_point_marker(Point3::new(1.0, 0.0, 0.0));
        assert_ne!(old, new);
        assert!(store.get(old).is_none());
    }
}
