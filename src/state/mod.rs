pub mod controller;
pub mod gesture;
pub mod rotation;
pub mod scroll;
pub mod spring;

pub use controller::GearController;
pub use gesture::GestureTracker;
pub use rotation::RotationAccumulator;
pub use scroll::ScrollEventEmitter;
pub use spring::{RotationSpring, SpringConfig};
