//! The step-counter state machine.

/// A change request bubbled up from the counter's input component.
#[derive(Clone, Debug, PartialEq)]
pub enum CounterRequest {
  /// Adds the current step amount to the running total.
  Increment,
  /// Subtracts the current step amount from the running total.
  Decrement,
  /// Replaces the step amount.
  UpdateAmount {
    /// The new step amount, as leniently parsed from field text.
    amount: f64,
  },
}

/// The counter state: a step amount and a running total.
///
/// The amount is accepted exactly as requested. A non-numeric input arrives
/// here as `NaN` and poisons every total computed after it, until the amount
/// is replaced with a number again.
#[derive(Clone, Debug)]
pub struct Counter {
  amount: f64,
  total: f64,
}

impl Counter {
  /// Creates a counter with the given step amount and a zero total.
  pub fn new(amount: f64) -> Self {
    Self { amount, total: 0.0 }
  }

  /// The current step amount.
  pub fn amount(&self) -> f64 {
    self.amount
  }

  /// The current running total.
  pub fn total(&self) -> f64 {
    self.total
  }

  /// Applies one change request.
  pub fn apply(&mut self, request: &CounterRequest) {
    match request {
      CounterRequest::Increment => self.total += self.amount,
      CounterRequest::Decrement => self.total -= self.amount,
      CounterRequest::UpdateAmount { amount } => self.amount = *amount,
    }

    tracing::debug!(
      amount = self.amount,
      total = self.total,
      "applied counter request"
    );
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use crate::num;

  #[test]
  fn increments_and_decrements_accumulate() {
    let mut counter = Counter::new(2.0);
    counter.apply(&CounterRequest::Increment);
    counter.apply(&CounterRequest::Increment);
    counter.apply(&CounterRequest::Decrement);
    assert_eq!(counter.total(), 2.0);
  }

  #[test]
  fn total_is_the_signed_sum_of_applied_amounts() {
    let mut counter = Counter::new(5.0);
    counter.apply(&CounterRequest::Increment); // +5
    counter.apply(&CounterRequest::UpdateAmount { amount: 3.0 });
    counter.apply(&CounterRequest::Decrement); // -3
    counter.apply(&CounterRequest::Increment); // +3
    assert_eq!(counter.total(), 5.0);
  }

  #[test]
  fn updating_the_amount_never_touches_the_total() {
    let mut counter = Counter::new(2.0);
    counter.apply(&CounterRequest::Increment);
    counter.apply(&CounterRequest::UpdateAmount { amount: 100.0 });
    assert_eq!(counter.total(), 2.0);
    assert_eq!(counter.amount(), 100.0);
  }

  #[test]
  fn non_numeric_amount_poisons_the_total() {
    let mut counter = Counter::new(2.0);
    counter.apply(&CounterRequest::UpdateAmount {
      amount: num::parse("not a number"),
    });
    assert!(counter.amount().is_nan());

    counter.apply(&CounterRequest::Increment);
    assert!(counter.total().is_nan());

    // Recovers once the amount is numeric again, but the total stays
    // poisoned; only the amount was replaced.
    counter.apply(&CounterRequest::UpdateAmount { amount: 1.0 });
    counter.apply(&CounterRequest::Increment);
    assert!(counter.total().is_nan());
  }
}
