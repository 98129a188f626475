//! The rectangle-area calculator state.

use crate::num;

/// A rectangle's dimensions and the area computed from them.
///
/// All fields start at zero; nothing changes until [`RectArea::submit`] is
/// called with the current field texts. Field text is coerced, not
/// validated: empty counts as zero, garbage as `NaN`.
#[derive(Clone, Debug, Default)]
pub struct RectArea {
  length: f64,
  width: f64,
  area: f64,
}

impl RectArea {
  /// Creates a calculator with every dimension at zero.
  pub fn new() -> Self {
    Self::default()
  }

  /// The most recently submitted length.
  pub fn length(&self) -> f64 {
    self.length
  }

  /// The most recently submitted width.
  pub fn width(&self) -> f64 {
    self.width
  }

  /// The area computed by the most recent submit.
  pub fn area(&self) -> f64 {
    self.area
  }

  /// Reads both field texts, stores their coerced values, and recomputes the
  /// area as their product.
  pub fn submit(&mut self, length: &str, width: &str) {
    self.length = num::coerce(length);
    self.width = num::coerce(width);
    self.area = self.length * self.width;

    tracing::debug!(
      length = self.length,
      width = self.width,
      area = self.area,
      "recomputed rectangle area"
    );
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn area_is_the_product_of_the_inputs() {
    let mut calc = RectArea::new();
    calc.submit("5", "4");
    assert_eq!(calc.length(), 5.0);
    assert_eq!(calc.width(), 4.0);
    assert_eq!(calc.area(), 20.0);
  }

  #[test]
  fn starts_at_zero_until_submitted() {
    let calc = RectArea::new();
    assert_eq!(calc.length(), 0.0);
    assert_eq!(calc.width(), 0.0);
    assert_eq!(calc.area(), 0.0);
  }

  #[test]
  fn the_latest_submit_wins() {
    let mut calc = RectArea::new();
    calc.submit("5", "4");
    calc.submit("2", "3.5");
    assert_eq!(calc.area(), 7.0);
  }

  #[test]
  fn empty_fields_coerce_to_zero() {
    let mut calc = RectArea::new();
    calc.submit("", "9");
    assert_eq!(calc.length(), 0.0);
    assert_eq!(calc.area(), 0.0);
  }

  #[test]
  fn garbage_fields_yield_a_nan_area() {
    let mut calc = RectArea::new();
    calc.submit("wide", "4");
    assert!(calc.length().is_nan());
    assert!(calc.area().is_nan());
  }
}
