//! Boundary to the host rendering engine.
//!
//! Picking, projection, and display of geometry are provided by the host
//! through the traits in this module. The tools never look collaborators up
//! on their own; everything is passed in by the caller.

mod entity_store;

pub use entity_store::{DisplayEntity, EntityStore};

use crate::error::Result;
use crate::math::{Point2, Point3};
use crate::tessellation::Polyline;

slotmap::new_key_type! {
    /// Identifier of a piece of geometry shown by a [`DisplaySink`].
    pub struct EntityId;
}

/// Ray-casts from a screen coordinate into the scene.
pub trait PickSource {
    /// Returns the world position under `screen`, or `None` when the pick
    /// misses all geometry.
    fn pick_position(&self, screen: Point2) -> Option<Point3>;
}

/// Projects world positions to screen coordinates.
pub trait Projector {
    /// Returns the screen position of `point`, or `None` when it is not
    /// visible (behind the camera or outside the viewport).
    fn world_to_screen(&self, point: &Point3) -> Option<Point2>;
}

/// Receives geometry to display. The host owns the displayed objects;
/// whoever adds an entity is responsible for removing it again.
pub trait DisplaySink {
    /// Shows a point marker at `position`.
    fn add_point_marker(&mut self, position: Point3) -> EntityId;

    /// Shows a polyline.
    fn add_polyline(&mut self, polyline: &Polyline) -> EntityId;

    /// Removes a previously added entity.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not (or no longer) displayed.
    fn remove(&mut self, id: EntityId) -> Result<()>;
}

/// Cursor-following text overlay, e.g. an absolutely positioned HTML element.
pub trait Overlay {
    /// Shows `text` at `screen`.
    fn show_label(&mut self, screen: Point2, text: &str);

    /// Hides the overlay.
    fn hide(&mut self);
}

/// Collaborators a tool needs while handling one pointer event.
pub struct SceneContext<'a> {
    pub picker: &'a dyn PickSource,
    pub projector: &'a dyn Projector,
    pub display: &'a mut dyn DisplaySink,
}
