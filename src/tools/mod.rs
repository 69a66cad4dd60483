mod capture;
mod curve_distance;
mod point_marker;
mod session;

pub use capture::{CaptureState, CaptureTransition};
pub use curve_distance::{CompletedCurve, CurveDistanceTool};
pub use point_marker::{PlacedMarker, PointMarkerTool};
pub use session::MeasureSession;

use tracing::warn;

use crate::math::{Cartographic, Point3};
use crate::scene::{DisplaySink, EntityId};

/// The measurement tools a session offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    PointMarker,
    CurveDistance,
}

impl ToolKind {
    /// All tools, in toolbar order.
    pub const ALL: [Self; 2] = [Self::PointMarker, Self::CurveDistance];

    /// Button caption.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::PointMarker => "Point marker",
            Self::CurveDistance => "Curve distance",
        }
    }
}

/// Host container that shows one button per tool.
pub trait Toolbar {
    /// Adds the button for `kind`.
    fn add_tool_button(&mut self, kind: ToolKind);
}

/// What a click did.
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    /// No tool is active.
    Ignored,
    /// The pick missed all geometry.
    Missed,
    /// The point marker tool placed a marker.
    MarkerPlaced(PlacedMarker),
    /// The curve tool captured a point of an unfinished triple.
    PointCaptured { position: Point3, captured: usize },
    /// The curve tool completed a triple and measured it.
    CurveMeasured { length: f64 },
}

/// Formats a distance in meters for display.
#[must_use]
pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{meters:.2} m")
    } else {
        format!("{:.2} km", meters / 1000.0)
    }
}

/// Formats a geodetic position for display.
#[must_use]
pub fn format_cartographic(carto: &Cartographic) -> String {
    format!(
        "lon {:.6}°, lat {:.6}°, h {:.2} m",
        carto.longitude, carto.latitude, carto.height
    )
}

/// Removes entities a tool added, tolerating ones the host already dropped.
fn remove_entities(display: &mut dyn DisplaySink, ids: impl IntoIterator<Item = EntityId>) {
    for id in ids {
        if let Err(err) = display.remove(id) {
            warn!(?id, %err, "display entity already removed");
        }
    }
}
