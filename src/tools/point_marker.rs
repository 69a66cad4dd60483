use tracing::{debug, trace};

use crate::math::{Cartographic, Ellipsoid, Point2, Point3};
use crate::scene::{DisplaySink, EntityId, Overlay, PickSource, SceneContext};

use super::{format_cartographic, remove_entities};

/// A marker placed by [`PointMarkerTool`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedMarker {
    /// Display entity of the marker.
    pub id: EntityId,
    /// Picked world position.
    pub position: Point3,
    /// Geodetic position, when the point is not at the ellipsoid center.
    pub cartographic: Option<Cartographic>,
}

/// Places a point marker at every successful pick.
#[derive(Debug, Default)]
pub struct PointMarkerTool {
    ellipsoid: Ellipsoid,
    markers: Vec<PlacedMarker>,
}

impl PointMarkerTool {
    /// Creates a tool that reports positions on `ellipsoid`.
    #[must_use]
    pub fn new(ellipsoid: Ellipsoid) -> Self {
        Self {
            ellipsoid,
            markers: Vec::new(),
        }
    }

    /// Markers placed since the last [`clear`](Self::clear).
    #[must_use]
    pub fn markers(&self) -> &[PlacedMarker] {
        &self.markers
    }

    /// Picks under `screen` and places a marker there.
    ///
    /// Returns `None` when the pick misses.
    pub fn on_click(
        &mut self,
        screen: Point2,
        ctx: &mut SceneContext<'_>,
        overlay: &mut dyn Overlay,
    ) -> Option<PlacedMarker> {
        let Some(position) = ctx.picker.pick_position(screen) else {
            trace!(x = screen.x, y = screen.y, "pick missed");
            return None;
        };

        let marker = PlacedMarker {
            id: ctx.display.add_point_marker(position),
            position,
            cartographic: self.ellipsoid.cartesian_to_cartographic(&position),
        };
        debug!(position = ?marker.position, "placed point marker");

        if let (Some(carto), Some(anchor)) =
            (marker.cartographic, ctx.projector.world_to_screen(&position))
        {
            overlay.show_label(anchor, &format_cartographic(&carto));
        }

        self.markers.push(marker);
        Some(marker)
    }

    /// Shows the geodetic position under the cursor, or hides the overlay
    /// when nothing is picked.
    pub fn on_pointer_move(
        &self,
        screen: Point2,
        picker: &dyn PickSource,
        overlay: &mut dyn Overlay,
    ) {
        match picker
            .pick_position(screen)
            .and_then(|p| self.ellipsoid.cartesian_to_cartographic(&p))
        {
            Some(carto) => overlay.show_label(screen, &format_cartographic(&carto)),
            None => overlay.hide(),
        }
    }

    /// Removes every marker this tool placed.
    pub fn clear(&mut self, display: &mut dyn DisplaySink) {
        remove_entities(display, self.markers.drain(..).map(|m| m.id));
    }
}
