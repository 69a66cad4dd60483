use crate::geometry::ControlPointSet;
use crate::math::Point3;

/// Progress of a three-point capture gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum CaptureState {
    #[default]
    AwaitingFirst,
    AwaitingSecond {
        start: Point3,
    },
    AwaitingThird {
        start: Point3,
        middle: Point3,
    },
}

/// Outcome of feeding one pick result into a [`CaptureState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptureTransition {
    /// State after the pick.
    pub state: CaptureState,
    /// The finished triple, when the pick completed one.
    pub completed: Option<ControlPointSet>,
}

impl CaptureState {
    /// Feeds a pick result into the state machine.
    ///
    /// A missed pick (`None`) leaves the state unchanged. The third point
    /// completes the triple and resets to [`CaptureState::AwaitingFirst`].
    #[must_use]
    pub fn transition(self, pick: Option<Point3>) -> CaptureTransition {
        let Some(point) = pick else {
            return CaptureTransition {
                state: self,
                completed: None,
            };
        };

        match self {
            Self::AwaitingFirst => CaptureTransition {
                state: Self::AwaitingSecond { start: point },
                completed: None,
            },
            Self::AwaitingSecond { start } => CaptureTransition {
                state: Self::AwaitingThird {
                    start,
                    middle: point,
                },
                completed: None,
            },
            Self::AwaitingThird { start, middle } => CaptureTransition {
                state: Self::AwaitingFirst,
                completed: Some(ControlPointSet::new(start, middle, point)),
            },
        }
    }

    /// Number of points captured so far in the current gesture.
    #[must_use]
    pub fn captured(&self) -> usize {
        match self {
            Self::AwaitingFirst => 0,
            Self::AwaitingSecond { .. } => 1,
            Self::AwaitingThird { .. } => 2,
        }
    }

    /// Instruction for the next pick.
    #[must_use]
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::AwaitingFirst => "Click to place the start point",
            Self::AwaitingSecond { .. } => "Click to place the middle point",
            Self::AwaitingThird { .. } => "Click to place the end point",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn miss_keeps_state() {
        let state = CaptureState::AwaitingSecond {
            start: Point3::new(1.0, 2.0, 3.0),
        };
        let next = state.transition(None);
        assert_eq!(next.state, state);
        assert!(next.completed.is_none());
    }

    #[test]
    fn three_picks_complete_and_reset() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 1.0, 0.0);
        let c = Point3::new(2.0, 0.0, 0.0);

        let s1 = CaptureState::default().transition(Some(a));
        assert_eq!(s1.state.captured(), 1);
        let s2 = s1.state.transition(None).state.transition(Some(b));
        assert_eq!(s2.state.captured(), 2);
        assert!(s2.completed.is_none());

        let s3 = s2.state.transition(Some(c));
        assert_eq!(s3.state, CaptureState::AwaitingFirst);
        assert_eq!(s3.completed.unwrap(), ControlPointSet::new(a, b, c));
    }

    #[test]
    fn next_gesture_starts_fresh() {
        let p = Point3::new(4.0, 4.0, 4.0);
        let mut state = CaptureState::default();
        for _ in 0..3 {
            state = state.transition(Some(Point3::origin())).state;
        }
        let next = state.transition(Some(p));
        assert_eq!(next.state, CaptureState::AwaitingSecond { start: p });
    }

    #[test]
    fn prompts_follow_progress() {
        let s = CaptureState::default();
        assert!(s.prompt().contains("start"));
        let s = s.transition(Some(Point3::origin())).state;
        assert!(s.prompt().contains("middle"));
        let s = s.transition(Some(Point3::origin())).state;
        assert!(s.prompt().contains("end"));
    }
}
