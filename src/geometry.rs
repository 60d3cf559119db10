//! Angle math for the drag gesture and the procedural gear outline.

use std::f64::consts::TAU;
use std::fmt;

use crate::model::{GearSpec, Point};

/// Side length of the square SVG view box the gear is drawn into.
pub const VIEW_BOX: f64 = 120.0;
pub const VIEW_CENTER: Point = Point::new(VIEW_BOX / 2.0, VIEW_BOX / 2.0);

/// Leading edge of a tooth tip, as a fraction of one tooth's angular step.
const TOOTH_LEAD: f64 = 0.15;
/// Trailing edge of a tooth tip. The gap to the valley at 0.5 gives the ratchet slant.
const TOOTH_TRAIL: f64 = 0.35;
const VALLEY: f64 = 0.5;

/// Direction of `point` seen from `center`, in degrees within (-180, 180].
///
/// When `point == center` the direction is undefined; this returns whatever
/// `atan2(0, 0)` yields (0 on every platform we target).
pub fn angle_of(center: Point, point: Point) -> f64 {
    let deg = (point.y - center.y).atan2(point.x - center.x).to_degrees();
    // atan2 can return exactly -pi for a negative zero y.
    if deg <= -180.0 { deg + 360.0 } else { deg }
}

/// `current - previous`, folded into (-180, 180] so that crossing the ±180
/// seam reports the short way round.
pub fn wrapped_delta(current: f64, previous: f64) -> f64 {
    let raw = current - previous;
    if raw > 180.0 {
        raw - 360.0
    } else if raw <= -180.0 {
        raw + 360.0
    } else {
        raw
    }
}

fn polar(center: Point, radius: f64, angle_rad: f64) -> Point {
    Point::new(
        center.x + angle_rad.cos() * radius,
        center.y + angle_rad.sin() * radius,
    )
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    Close,
}

/// Closed polygon outline, renderable as SVG path data via `Display`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GearPath {
    commands: Vec<PathCommand>,
}

impl GearPath {
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// All vertices in drawing order, the closing instruction excluded.
    #[cfg(test)]
    pub fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().filter_map(|c| match *c {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p),
            PathCommand::Close => None,
        })
    }
}

impl fmt::Display for GearPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match cmd {
                PathCommand::MoveTo(p) => write!(f, "M {:.3} {:.3}", p.x, p.y)?,
                PathCommand::LineTo(p) => write!(f, "L {:.3} {:.3}", p.x, p.y)?,
                PathCommand::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

/// Outline of an N-toothed gear centred in the view box.
///
/// Each tooth contributes its tip's trailing point, the valley after it, and
/// the next tooth's leading tip point. The last tooth lands exactly on the
/// starting point before `Z`.
pub fn gear_path(spec: &GearSpec) -> GearPath {
    let teeth = spec.teeth_count();
    let step = TAU / f64::from(teeth);
    let tip = spec.tip_radius();
    let leading = |i: u32| polar(VIEW_CENTER, tip, f64::from(i % teeth) * step + step * TOOTH_LEAD);

    let mut commands = Vec::with_capacity(teeth as usize * 3 + 2);
    commands.push(PathCommand::MoveTo(leading(0)));
    for i in 0..teeth {
        let base = f64::from(i) * step;
        commands.push(PathCommand::LineTo(polar(
            VIEW_CENTER,
            tip,
            base + step * TOOTH_TRAIL,
        )));
        commands.push(PathCommand::LineTo(polar(
            VIEW_CENTER,
            spec.outer_radius(),
            base + step * VALLEY,
        )));
        commands.push(PathCommand::LineTo(leading(i + 1)));
    }
    commands.push(PathCommand::Close);
    GearPath { commands }
}

/// Evenly spaced radial segments starting at 0°, used for the hub spokes.
pub fn spokes(count: u32, from_radius: f64, to_radius: f64) -> Vec<(Point, Point)> {
    if count == 0 {
        return Vec::new();
    }
    let step = TAU / f64::from(count);
    (0..count)
        .map(|i| {
            let a = f64::from(i) * step;
            (
                polar(VIEW_CENTER, from_radius, a),
                polar(VIEW_CENTER, to_radius, a),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    fn dist(a: Point, b: Point) -> f64 {
        (a.x - b.x).hypot(a.y - b.y)
    }

    #[test]
    fn angle_of_cardinal_directions() {
        let c = Point::new(100.0, 100.0);
        assert!(approx_eq(angle_of(c, Point::new(150.0, 100.0)), 0.0));
        assert!(approx_eq(angle_of(c, Point::new(100.0, 150.0)), 90.0));
        assert!(approx_eq(angle_of(c, Point::new(50.0, 100.0)), 180.0));
        assert!(approx_eq(angle_of(c, Point::new(100.0, 50.0)), -90.0));
    }

    #[test]
    fn angle_of_never_returns_minus_180() {
        let c = Point::new(0.0, 0.0);
        assert_eq!(angle_of(c, Point::new(-1.0, -0.0)), 180.0);
    }

    #[test]
    fn angle_of_degenerate_point_is_zero() {
        let c = Point::new(3.0, 4.0);
        assert_eq!(angle_of(c, c), 0.0);
    }

    #[test]
    fn wrapped_delta_crosses_seam_the_short_way() {
        // moving from -179 to 179 is a 2 degree turn backwards
        assert!(approx_eq(wrapped_delta(179.0, -179.0), -2.0));
        // and from 179 to -179 a 2 degree turn forwards
        assert!(approx_eq(wrapped_delta(-179.0, 179.0), 2.0));
        assert!(approx_eq(wrapped_delta(10.0, 0.0), 10.0));
        assert!(approx_eq(wrapped_delta(-10.0, 0.0), -10.0));
    }

    #[test]
    fn wrapped_delta_stays_in_range_and_is_congruent() {
        let samples: Vec<f64> = (-179..=180).step_by(7).map(f64::from).chain([180.0, -179.999]).collect();
        for &previous in &samples {
            for &current in &samples {
                let d = wrapped_delta(current, previous);
                assert!(d > -180.0 && d <= 180.0, "delta {d} out of range");
                let residue = (previous + d - current).rem_euclid(360.0);
                assert!(
                    residue < 1e-9 || (360.0 - residue) < 1e-9,
                    "{previous} + {d} is not congruent to {current}"
                );
            }
        }
    }

    #[test]
    fn half_turn_is_reported_as_plus_180() {
        assert_eq!(wrapped_delta(180.0, 0.0), 180.0);
        assert_eq!(wrapped_delta(0.0, 180.0), 180.0);
    }

    #[test]
    fn gear_path_is_closed() {
        for teeth in [3, 7, 16, 40] {
            let spec = GearSpec::new(teeth, 35.0, 50.0, 12.0).expect("valid spec");
            let path = gear_path(&spec);
            let cmds = path.commands();
            assert!(matches!(cmds.first(), Some(PathCommand::MoveTo(_))));
            assert_eq!(cmds.last(), Some(&PathCommand::Close));
            let first = path.vertices().next().expect("has vertices");
            let last = path.vertices().last().expect("has vertices");
            assert!(dist(first, last) < EPS, "path does not return to its start");
        }
    }

    #[test]
    fn gear_path_has_one_valley_per_tooth() {
        for teeth in [3, 7, 16, 40] {
            let spec = GearSpec::new(teeth, 35.0, 50.0, 12.0).expect("valid spec");
            let path = gear_path(&spec);
            let valleys = path
                .vertices()
                .filter(|p| approx_eq(dist(*p, VIEW_CENTER), spec.outer_radius()))
                .count();
            assert_eq!(valleys, teeth as usize, "{teeth} teeth");
            let tips = path
                .vertices()
                .filter(|p| approx_eq(dist(*p, VIEW_CENTER), spec.tip_radius()))
                .count();
            // leading + trailing per tooth, plus the repeated start point
            assert_eq!(tips, teeth as usize * 2 + 1, "{teeth} teeth");
        }
    }

    #[test]
    fn gear_path_renders_svg_data() {
        let spec = GearSpec::new(3, 10.0, 20.0, 5.0).expect("valid spec");
        let d = gear_path(&spec).to_string();
        assert!(d.starts_with("M "));
        assert!(d.ends_with(" Z"));
        assert_eq!(d.matches('L').count(), 9);
    }

    #[test]
    fn spokes_are_evenly_spaced() {
        let s = spokes(6, 20.0, 32.0);
        assert_eq!(s.len(), 6);
        let (inner, outer) = s[0];
        assert!(approx_eq(inner.x, VIEW_CENTER.x + 20.0));
        assert!(approx_eq(outer.x, VIEW_CENTER.x + 32.0));
        let (_, third) = s[3];
        assert!(approx_eq(third.x, VIEW_CENTER.x - 32.0));
        assert!(spokes(0, 1.0, 2.0).is_empty());
    }
}
