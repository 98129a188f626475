//! The higher-or-lower guessing game state machine.

use rand::Rng;

/// How many guesses a fresh round starts with.
pub const STARTING_GUESSES: u32 = 10;

/// Targets are drawn uniformly from `0..TARGET_MAX`.
pub const TARGET_MAX: i32 = 100;

/// A guess submitted by the game's input component.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GuessRequest {
  /// The number the player guessed.
  pub last_guess: i32,
}

/// A request to start a fresh round.
///
/// Unlike the other change requests, this one is not scoped to a single
/// widget tree: it is broadcast deck-wide, and every game container that
/// sees it resets itself.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ResetRequest;

/// The outcome of a round, as shown to the player.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, strum::Display)]
pub enum GameResult {
  /// The round is still accepting guesses; displays as nothing.
  #[default]
  #[strum(to_string = "")]
  Playing,
  /// A guess hit the target.
  #[strum(to_string = "You Win!")]
  Won,
  /// The final guess missed.
  #[strum(to_string = "You Lose!")]
  Lost,
}

/// Which direction the next guess should move, relative to the last one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, strum::Display)]
pub enum Hint {
  /// No guess has missed yet; displays as nothing.
  #[default]
  #[strum(to_string = "")]
  None,
  /// The last guess was below the target.
  #[strum(to_string = "higher")]
  Higher,
  /// The last guess was above the target.
  #[strum(to_string = "lower")]
  Lower,
}

/// One round of higher-or-lower.
///
/// The round ends when a guess hits the target (won) or the last remaining
/// guess misses (lost). An ended round ignores further guesses until
/// [`Game::reset`].
#[derive(Clone, Debug)]
pub struct Game {
  target: i32,
  remaining_guesses: u32,
  last_guess: Option<i32>,
  result: GameResult,
  hint: Hint,
}

impl Game {
  /// Starts a round with a random target in `0..TARGET_MAX`.
  pub fn new(rng: &mut impl Rng) -> Self {
    Self::with_target(rng.gen_range(0..TARGET_MAX))
  }

  /// Starts a round with a fixed target.
  pub fn with_target(target: i32) -> Self {
    Self {
      target,
      remaining_guesses: STARTING_GUESSES,
      last_guess: None,
      result: GameResult::Playing,
      hint: Hint::None,
    }
  }

  /// The number this round wants guessed.
  pub fn target(&self) -> i32 {
    self.target
  }

  /// Guesses left before the round is lost.
  pub fn remaining_guesses(&self) -> u32 {
    self.remaining_guesses
  }

  /// The most recent guess that missed, if any.
  pub fn last_guess(&self) -> Option<i32> {
    self.last_guess
  }

  /// The round's outcome so far.
  pub fn result(&self) -> GameResult {
    self.result
  }

  /// The hint produced by the most recent miss.
  pub fn hint(&self) -> Hint {
    self.hint
  }

  /// Whether the round has ended and stopped accepting guesses.
  pub fn is_over(&self) -> bool {
    self.result != GameResult::Playing || self.remaining_guesses == 0
  }

  /// Applies one submitted guess.
  ///
  /// On a hit the round is won outright; missing with the final guess loses
  /// it; any other miss burns a guess, records it, and points the player
  /// higher or lower. Guesses submitted after the round ends are ignored.
  pub fn guess(&mut self, guess: i32) {
    if self.is_over() {
      return;
    }

    if guess == self.target {
      self.result = GameResult::Won;
    } else if self.remaining_guesses == 1 {
      self.remaining_guesses = 0;
      self.result = GameResult::Lost;
    } else {
      self.remaining_guesses -= 1;
      self.last_guess = Some(guess);
      self.hint = if guess < self.target {
        Hint::Higher
      } else {
        Hint::Lower
      };
    }

    tracing::debug!(
      guess,
      remaining = self.remaining_guesses,
      result = %self.result,
      hint = %self.hint,
      "applied guess"
    );
  }

  /// Starts a fresh round in place: a new random target, a full set of
  /// guesses, and no recorded guess, result, or hint.
  pub fn reset(&mut self, rng: &mut impl Rng) {
    *self = Self::new(rng);
    tracing::debug!(target = self.target, "reset game");
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn a_scripted_round_ends_in_a_win() {
    let mut game = Game::with_target(42);

    game.guess(10);
    assert_eq!(game.hint(), Hint::Higher);
    assert_eq!(game.remaining_guesses(), 9);
    assert_eq!(game.last_guess(), Some(10));

    game.guess(80);
    assert_eq!(game.hint(), Hint::Lower);
    assert_eq!(game.remaining_guesses(), 8);

    game.guess(42);
    assert_eq!(game.result(), GameResult::Won);
    assert!(game.is_over());
    // A win spends no guess.
    assert_eq!(game.remaining_guesses(), 8);
  }

  #[test]
  fn the_tenth_miss_loses_the_round() {
    let mut game = Game::with_target(42);
    for i in 0..9 {
      game.guess(i);
      assert_eq!(game.result(), GameResult::Playing);
    }
    assert_eq!(game.remaining_guesses(), 1);

    game.guess(9);
    assert_eq!(game.result(), GameResult::Lost);
    assert_eq!(game.remaining_guesses(), 0);
    assert!(game.is_over());
  }

  #[test]
  fn a_hit_on_the_final_guess_still_wins() {
    let mut game = Game::with_target(42);
    for i in 0..9 {
      game.guess(i);
    }
    game.guess(42);
    assert_eq!(game.result(), GameResult::Won);
  }

  #[test]
  fn an_ended_round_ignores_guesses() {
    let mut game = Game::with_target(42);
    game.guess(42);
    assert_eq!(game.result(), GameResult::Won);

    game.guess(7);
    assert_eq!(game.result(), GameResult::Won);
    assert_eq!(game.remaining_guesses(), 10);
    assert_eq!(game.last_guess(), None);
  }

  #[test]
  fn hints_always_point_at_the_target() {
    for guess in 0..100 {
      if guess == 42 {
        continue;
      }
      let mut game = Game::with_target(42);
      game.guess(guess);
      let expected = if guess < 42 { Hint::Higher } else { Hint::Lower };
      assert_eq!(game.hint(), expected, "guess {}", guess);
    }
  }

  #[test]
  fn reset_restores_a_fresh_round() {
    let mut game = Game::with_target(42);
    game.guess(10);
    game.guess(42);
    assert!(game.is_over());

    game.reset(&mut rand::thread_rng());
    assert_eq!(game.remaining_guesses(), STARTING_GUESSES);
    assert_eq!(game.result(), GameResult::Playing);
    assert_eq!(game.hint(), Hint::None);
    assert_eq!(game.last_guess(), None);
    assert!((0..TARGET_MAX).contains(&game.target()));
    assert!(!game.is_over());
  }

  #[test]
  fn outcomes_and_hints_display_their_banner_text() {
    assert_eq!(GameResult::Playing.to_string(), "");
    assert_eq!(GameResult::Won.to_string(), "You Win!");
    assert_eq!(GameResult::Lost.to_string(), "You Lose!");
    assert_eq!(Hint::None.to_string(), "");
    assert_eq!(Hint::Higher.to_string(), "higher");
    assert_eq!(Hint::Lower.to_string(), "lower");
  }
}
