use crate::model::{Point, ScrollCommand, WidgetBounds};

use super::{GestureTracker, RotationAccumulator, ScrollEventEmitter};

/// Owns the whole gesture pipeline for one gear widget.
///
/// Every delta from the tracker feeds both the rotation accumulator and the
/// scroll emitter; neither depends on the other's result.
#[derive(Default, Debug, Clone)]
pub struct GearController {
    tracker: GestureTracker,
    rotation: RotationAccumulator,
    emitter: ScrollEventEmitter,
}

impl GearController {
    pub fn start<B: WidgetBounds + ?Sized>(&mut self, widget: &B, point: Point) -> bool {
        let started = self.tracker.start(widget, point);
        if started {
            log::debug!(
                "gear gesture started at ({:.1}, {:.1}), center ({:.1}, {:.1})",
                point.x,
                point.y,
                self.tracker.center().x,
                self.tracker.center().y
            );
        } else {
            log::warn!("gear gesture ignored: widget has no usable bounding box");
        }
        started
    }

    pub fn move_to(&mut self, point: Point) -> Option<ScrollCommand> {
        let delta = self.tracker.move_to(point)?;
        self.rotation.apply(delta);
        let command = self.emitter.evaluate(delta);
        if let Some(cmd) = &command {
            log::trace!("scroll {:?} by {:.1}px", cmd.direction, cmd.magnitude);
        }
        command
    }

    pub fn end(&mut self) {
        if self.tracker.is_active() {
            log::debug!("gear gesture ended at {:.1}deg", self.rotation.rotation_deg());
        }
        self.tracker.end();
    }

    pub fn is_active(&self) -> bool {
        self.tracker.is_active()
    }

    pub fn rotation_deg(&self) -> f64 {
        self.rotation.rotation_deg()
    }
}
