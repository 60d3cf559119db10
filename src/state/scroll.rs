// Turns angular deltas into directional scroll commands.
use crate::model::{ScrollCommand, ScrollDirection};

/// Deltas at or below this many degrees are jitter and never emitted.
pub const DEAD_ZONE_DEG: f64 = 0.5;
/// Scroll pixels per degree of rotation.
pub const SCROLL_SCALE: f64 = 3.0;

#[derive(Default, Debug, Clone, Copy)]
pub struct ScrollEventEmitter;

impl ScrollEventEmitter {
    /// Clockwise (positive) rotation scrolls down. No clamping happens here;
    /// the receiving container owns its own bounds.
    pub fn evaluate(&self, delta: f64) -> Option<ScrollCommand> {
        if !(delta.abs() > DEAD_ZONE_DEG) {
            return None;
        }
        let direction = if delta > 0.0 {
            ScrollDirection::Down
        } else {
            ScrollDirection::Up
        };
        Some(ScrollCommand {
            direction,
            magnitude: delta.abs() * SCROLL_SCALE,
        })
    }
}
