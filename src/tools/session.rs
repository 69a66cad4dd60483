use tracing::debug;

use crate::error::Result;
use crate::math::{Ellipsoid, Point2};
use crate::scene::{DisplaySink, Overlay, SceneContext};
use crate::tessellation::SamplingParams;

use super::{ClickOutcome, CurveDistanceTool, PointMarkerTool, ToolKind, Toolbar};

/// Routes pointer input to the active measurement tool.
///
/// The overlay is owned by the session; the toolbar is only needed at
/// construction to register one button per tool.
#[derive(Debug)]
pub struct MeasureSession<O: Overlay> {
    overlay: O,
    active: Option<ToolKind>,
    point_marker: PointMarkerTool,
    curve_distance: CurveDistanceTool,
}

impl<O: Overlay> MeasureSession<O> {
    /// Creates a session and registers its tools on `toolbar`.
    pub fn new(
        toolbar: &mut dyn Toolbar,
        overlay: O,
        ellipsoid: Ellipsoid,
        params: SamplingParams,
    ) -> Self {
        for kind in ToolKind::ALL {
            toolbar.add_tool_button(kind);
        }
        Self {
            overlay,
            active: None,
            point_marker: PointMarkerTool::new(ellipsoid),
            curve_distance: CurveDistanceTool::new(params),
        }
    }

    /// Returns the active tool, if any.
    #[must_use]
    pub fn active(&self) -> Option<ToolKind> {
        self.active
    }

    /// Returns the overlay.
    #[must_use]
    pub fn overlay(&self) -> &O {
        &self.overlay
    }

    /// Returns the point marker tool.
    #[must_use]
    pub fn point_marker(&self) -> &PointMarkerTool {
        &self.point_marker
    }

    /// Returns the curve distance tool.
    #[must_use]
    pub fn curve_distance(&self) -> &CurveDistanceTool {
        &self.curve_distance
    }

    /// Makes `kind` the active tool.
    ///
    /// An unfinished curve capture is abandoned; finished measurements stay
    /// displayed until [`clear`](Self::clear).
    pub fn activate(&mut self, kind: ToolKind, display: &mut dyn DisplaySink) {
        self.curve_distance.reset(display);
        self.overlay.hide();
        self.active = Some(kind);
        debug!(?kind, "activated measurement tool");
    }

    /// Deactivates the current tool and hides the overlay.
    pub fn deactivate(&mut self, display: &mut dyn DisplaySink) {
        self.curve_distance.reset(display);
        self.overlay.hide();
        self.active = None;
    }

    /// Handles a click at `screen`.
    ///
    /// # Errors
    ///
    /// Returns an error if the active tool fails to measure.
    pub fn on_click(
        &mut self,
        screen: Point2,
        ctx: &mut SceneContext<'_>,
    ) -> Result<ClickOutcome> {
        match self.active {
            None => Ok(ClickOutcome::Ignored),
            Some(ToolKind::PointMarker) => Ok(self
                .point_marker
                .on_click(screen, ctx, &mut self.overlay)
                .map_or(ClickOutcome::Missed, ClickOutcome::MarkerPlaced)),
            Some(ToolKind::CurveDistance) => {
                self.curve_distance.on_click(screen, ctx, &mut self.overlay)
            }
        }
    }

    /// Handles a pointer move to `screen`.
    pub fn on_pointer_move(&mut self, screen: Point2, ctx: &SceneContext<'_>) {
        match self.active {
            None => {}
            Some(ToolKind::PointMarker) => {
                self.point_marker
                    .on_pointer_move(screen, ctx.picker, &mut self.overlay);
            }
            Some(ToolKind::CurveDistance) => {
                self.curve_distance
                    .on_pointer_move(screen, ctx.projector, &mut self.overlay);
            }
        }
    }

    /// Removes every measurement from the display and hides the overlay.
    pub fn clear(&mut self, display: &mut dyn DisplaySink) {
        self.point_marker.clear(display);
        self.curve_distance.clear(display);
        self.overlay.hide();
    }
}
