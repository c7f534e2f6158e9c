use super::types::Point;

pub fn parse_click(value: Point) -> Option<Point> {
  if !value.x.is_finite() || !value.y.is_finite() {
    return None;
  }
  Some(value)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn finite_click_passes_through() {
    let click = parse_click(Point { x: 120.0, y: 340.5 });
    assert_eq!(click, Some(Point { x: 120.0, y: 340.5 }));
  }

  #[test]
  fn non_finite_click_is_rejected() {
    assert_eq!(parse_click(Point { x: f64::NAN, y: 0.0 }), None);
    assert_eq!(parse_click(Point { x: 0.0, y: f64::INFINITY }), None);
    assert_eq!(parse_click(Point { x: f64::NEG_INFINITY, y: 1.0 }), None);
  }
}
