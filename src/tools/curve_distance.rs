use tracing::{debug, trace};

use crate::error::Result;
use crate::math::Point2;
use crate::operations::query::{CurveMeasurement, MeasureCurveDistance};
use crate::scene::{DisplaySink, EntityId, Overlay, Projector, SceneContext};
use crate::tessellation::SamplingParams;

use super::{format_distance, remove_entities, CaptureState, ClickOutcome};

/// A finished curve measurement and the geometry shown for it.
#[derive(Debug, Clone)]
pub struct CompletedCurve {
    /// The measured curve.
    pub measurement: CurveMeasurement,
    /// Markers of the start, middle, and end points.
    pub markers: Vec<EntityId>,
    /// The displayed curve.
    pub polyline: EntityId,
    /// Formatted distance.
    pub label: String,
}

impl CompletedCurve {
    fn entity_ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.markers
            .iter()
            .copied()
            .chain(std::iter::once(self.polyline))
    }
}

/// Measures the length of a smooth curve through three picked points.
#[derive(Debug, Default)]
pub struct CurveDistanceTool {
    params: SamplingParams,
    state: CaptureState,
    pending_markers: Vec<EntityId>,
    completed: Vec<CompletedCurve>,
}

impl CurveDistanceTool {
    /// Creates a tool sampling curves with `params`.
    #[must_use]
    pub fn new(params: SamplingParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    /// Current capture progress.
    #[must_use]
    pub fn state(&self) -> CaptureState {
        self.state
    }

    /// Measurements finished since the last [`clear`](Self::clear).
    #[must_use]
    pub fn completed(&self) -> &[CompletedCurve] {
        &self.completed
    }

    /// Picks under `screen` and feeds the result to the capture state machine.
    ///
    /// Every captured point gets a marker. The third point completes the
    /// triple: the curve is measured, drawn, and its length shown at the
    /// projected middle point.
    ///
    /// # Errors
    ///
    /// Returns an error if the measurement fails. The markers of the failed
    /// gesture are removed and capture starts over.
    pub fn on_click(
        &mut self,
        screen: Point2,
        ctx: &mut SceneContext<'_>,
        overlay: &mut dyn Overlay,
    ) -> Result<ClickOutcome> {
        let Some(position) = ctx.picker.pick_position(screen) else {
            trace!(x = screen.x, y = screen.y, "pick missed");
            return Ok(ClickOutcome::Missed);
        };

        self.pending_markers.push(ctx.display.add_point_marker(position));
        let transition = self.state.transition(Some(position));
        self.state = transition.state;

        let Some(control) = transition.completed else {
            let captured = self.state.captured();
            debug!(captured, "captured curve point");
            return Ok(ClickOutcome::PointCaptured { position, captured });
        };

        let markers = std::mem::take(&mut self.pending_markers);
        let measurement = match MeasureCurveDistance::new(control, self.params).execute() {
            Ok(m) => m,
            Err(err) => {
                remove_entities(ctx.display, markers);
                return Err(err);
            }
        };

        let length = measurement.length;
        let label = format_distance(length);
        if let Some(anchor) = ctx.projector.world_to_screen(&control.middle) {
            overlay.show_label(anchor, &label);
        }

        self.completed.push(CompletedCurve {
            polyline: ctx.display.add_polyline(&measurement.polyline),
            measurement,
            markers,
            label,
        });
        Ok(ClickOutcome::CurveMeasured { length })
    }

    /// Updates the overlay for the cursor at `screen`.
    ///
    /// While a capture is in progress the overlay follows the cursor with
    /// the next instruction. Between gestures it stays anchored to the last
    /// measured curve, re-projected for the current view.
    pub fn on_pointer_move(
        &self,
        screen: Point2,
        projector: &dyn Projector,
        overlay: &mut dyn Overlay,
    ) {
        match (self.state, self.completed.last()) {
            (CaptureState::AwaitingFirst, Some(last)) => {
                match projector.world_to_screen(&last.measurement.control.middle) {
                    Some(anchor) => overlay.show_label(anchor, &last.label),
                    None => overlay.hide(),
                }
            }
            (state, _) => overlay.show_label(screen, state.prompt()),
        }
    }

    /// Abandons an unfinished capture, removing its markers.
    pub fn reset(&mut self, display: &mut dyn DisplaySink) {
        self.state = CaptureState::AwaitingFirst;
        remove_entities(display, self.pending_markers.drain(..));
    }

    /// Removes all geometry this tool added and abandons any capture.
    pub fn clear(&mut self, display: &mut dyn DisplaySink) {
        self.reset(display);
        for curve in self.completed.drain(..) {
            remove_entities(display, curve.entity_ids());
        }
    }
}
