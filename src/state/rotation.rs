// Visual rotation accumulated across gestures since mount.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct RotationAccumulator {
    rotation_deg: f64,
}

impl RotationAccumulator {
    /// Not normalised: two full turns read as 720.
    pub fn rotation_deg(&self) -> f64 {
        self.rotation_deg
    }

    pub fn apply(&mut self, delta: f64) -> f64 {
        self.rotation_deg += delta;
        self.rotation_deg
    }
}
