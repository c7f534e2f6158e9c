use super::types::Point;
use std::f64::consts::{PI, TAU};

pub fn distance(p: Point, q: Point) -> f64 {
  ((p.x - q.x).powi(2) + (p.y - q.y).powi(2)).sqrt()
}

pub fn wrap_angle(angle: f64) -> f64 {
  let mut wrapped = angle % TAU;
  if wrapped > PI {
    wrapped -= TAU;
  } else if wrapped <= -PI {
    wrapped += TAU;
  }
  wrapped
}

pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
  value.min(max).max(min)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn distance_matches_euclidean_norm() {
    let p = Point { x: 1.0, y: 2.0 };
    let q = Point { x: 4.0, y: 6.0 };
    assert!((distance(p, q) - 5.0).abs() < 1e-12);
    assert_eq!(distance(p, p), 0.0);
  }

  #[test]
  fn wrap_angle_lands_in_half_open_range() {
    assert_eq!(wrap_angle(0.0), 0.0);
    assert!((wrap_angle(PI) - PI).abs() < 1e-12);
    assert!((wrap_angle(-PI) - PI).abs() < 1e-12);
    assert!((wrap_angle(3.0 * PI) - PI).abs() < 1e-12);
    assert!((wrap_angle(-3.0 * PI) - PI).abs() < 1e-12);
    assert!((wrap_angle(TAU + 0.25) - 0.25).abs() < 1e-12);
    assert!((wrap_angle(-TAU - 0.25) + 0.25).abs() < 1e-12);
  }

  #[test]
  fn clamp_bounds_value() {
    assert_eq!(clamp(5.0, 0.0, 1.0), 1.0);
    assert_eq!(clamp(-5.0, 0.0, 1.0), 0.0);
    assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
  }
}
