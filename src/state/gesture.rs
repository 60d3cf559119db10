// Drag gesture state machine shared by pointer and touch input.
use crate::geometry::{angle_of, wrapped_delta};
use crate::model::{GestureState, Point, WidgetBounds};

#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    state: GestureState,
    center: Point,
}

impl GestureTracker {
    #[cfg(test)]
    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.active
    }

    /// Center captured at the last successful start.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Begins (or restarts) a gesture at `point`. Returns false and leaves the
    /// state untouched when the widget has no usable geometry.
    pub fn start<B: WidgetBounds + ?Sized>(&mut self, widget: &B, point: Point) -> bool {
        let Some(bounds) = widget.bounding_box().filter(|b| b.is_usable()) else {
            return false;
        };
        self.center = bounds.center();
        self.state = GestureState {
            active: true,
            last_angle_deg: angle_of(self.center, point),
        };
        true
    }

    /// Angular delta since the previous sample, or `None` while idle.
    pub fn move_to(&mut self, point: Point) -> Option<f64> {
        if !self.state.active {
            return None;
        }
        let current = angle_of(self.center, point);
        let delta = wrapped_delta(current, self.state.last_angle_deg);
        self.state.last_angle_deg = current;
        Some(delta)
    }

    pub fn end(&mut self) {
        self.state.active = false;
    }
}
