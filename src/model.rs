//! Core data models for the gear scroll widget.
//! Coordinates are client (viewport) pixels unless noted otherwise.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Screen-space box of the rendered widget, as reported by the DOM.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// A box is usable when it has finite coordinates and a non-zero area.
    pub fn is_usable(&self) -> bool {
        [self.left, self.top, self.width, self.height]
            .iter()
            .all(|v| v.is_finite())
            && self.width > 0.0
            && self.height > 0.0
    }
}

/// Anything that can report where the widget currently sits on screen.
/// Queried fresh on every gesture start.
pub trait WidgetBounds {
    fn bounding_box(&self) -> Option<BoundingBox>;
}

impl WidgetBounds for BoundingBox {
    fn bounding_box(&self) -> Option<BoundingBox> {
        Some(*self)
    }
}

impl WidgetBounds for Option<BoundingBox> {
    fn bounding_box(&self) -> Option<BoundingBox> {
        *self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureState {
    pub active: bool,
    /// Only meaningful while `active`.
    pub last_angle_deg: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollCommand {
    pub direction: ScrollDirection,
    /// Scroll distance in pixels, never negative.
    pub magnitude: f64,
}

impl ScrollCommand {
    /// Offset for a vertical `scrollBy`: positive moves content down the page.
    pub fn signed_offset(&self) -> f64 {
        match self.direction {
            ScrollDirection::Down => self.magnitude,
            ScrollDirection::Up => -self.magnitude,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GearSpecError {
    #[error("a gear needs at least 3 teeth, got {0}")]
    TooFewTeeth(u32),
    #[error("inner radius must be positive")]
    NonPositiveInnerRadius,
    #[error("outer radius must be larger than the inner radius")]
    OuterNotAboveInner,
    #[error("tooth height must be a non-negative finite number")]
    NegativeToothHeight,
}

/// Parameters of the procedural gear outline, in view-box units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGearSpec")]
pub struct GearSpec {
    teeth_count: u32,
    inner_radius: f64,
    outer_radius: f64,
    tooth_height: f64,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawGearSpec {
    teeth_count: u32,
    inner_radius: f64,
    outer_radius: f64,
    tooth_height: f64,
}

impl Default for RawGearSpec {
    fn default() -> Self {
        let d = GearSpec::default();
        Self {
            teeth_count: d.teeth_count,
            inner_radius: d.inner_radius,
            outer_radius: d.outer_radius,
            tooth_height: d.tooth_height,
        }
    }
}

impl TryFrom<RawGearSpec> for GearSpec {
    type Error = GearSpecError;

    fn try_from(raw: RawGearSpec) -> Result<Self, Self::Error> {
        GearSpec::new(
            raw.teeth_count,
            raw.inner_radius,
            raw.outer_radius,
            raw.tooth_height,
        )
    }
}

impl GearSpec {
    pub fn new(
        teeth_count: u32,
        inner_radius: f64,
        outer_radius: f64,
        tooth_height: f64,
    ) -> Result<Self, GearSpecError> {
        if teeth_count < 3 {
            return Err(GearSpecError::TooFewTeeth(teeth_count));
        }
        // NaN fails every comparison below, so it is rejected too.
        if !(inner_radius > 0.0) {
            return Err(GearSpecError::NonPositiveInnerRadius);
        }
        if !(outer_radius > inner_radius) || !outer_radius.is_finite() {
            return Err(GearSpecError::OuterNotAboveInner);
        }
        if !(tooth_height >= 0.0) || !tooth_height.is_finite() {
            return Err(GearSpecError::NegativeToothHeight);
        }
        Ok(Self {
            teeth_count,
            inner_radius,
            outer_radius,
            tooth_height,
        })
    }

    pub fn teeth_count(&self) -> u32 {
        self.teeth_count
    }

    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    pub fn tooth_height(&self) -> f64 {
        self.tooth_height
    }

    /// Radius of the tooth tips.
    pub fn tip_radius(&self) -> f64 {
        self.outer_radius + self.tooth_height()
    }
}

impl Default for GearSpec {
    fn default() -> Self {
        Self {
            teeth_count: 16,
            inner_radius: 35.0,
            outer_radius: 50.0,
            tooth_height: 12.0,
        }
    }
}
