//! The higher-or-lower game widget.
//!
//! `GameWidget` owns the [`Game`] state machine and hosts a [`GameOutput`]
//! display child plus — only while a round is live — a [`GamePlay`] input
//! child. Ending a round destroys the input child and the divider above it;
//! a reset broadcast builds a fresh one.

use crossterm::event::KeyCode;

use fidgets::hilo::Game;
use fidgets::hilo::GameResult;
use fidgets::hilo::GuessRequest;
use fidgets::hilo::Hint;
use fidgets::hilo::ResetRequest;
use fidgets::hilo::STARTING_GUESSES;

use tui::layout::Constraint;
use tui::layout::Direction;
use tui::layout::Layout;
use tui::style::Modifier;
use tui::style::Style;
use tui::text::Span;
use tui::text::Spans;
use tui::text::Text;
use tui::widgets::Paragraph;
use tui::widgets::Widget as _;

use crate::ui::component::is_typing;
use crate::ui::component::Component;
use crate::ui::component::Event;
use crate::ui::component::EventArgs;
use crate::ui::component::RenderArgs;
use crate::ui::widgets::Button;
use crate::ui::widgets::Rule;
use crate::ui::widgets::TextField;

/// The container: owns the game, applies guesses bubbled up from
/// [`GamePlay`], resets on the deck-wide [`ResetRequest`] broadcast, and
/// pushes `remaining`/`hint`/`result` into [`GameOutput`] after every
/// transition.
#[derive(Debug)]
pub struct GameWidget {
  game: Game,
  output: GameOutput,
  play: Option<GamePlay>,
  divider: bool,
}

impl GameWidget {
  pub fn new() -> Self {
    Self::with_game(Game::new(&mut rand::thread_rng()))
  }

  /// Builds the widget around an existing game, fixed target included.
  pub fn with_game(game: Game) -> Self {
    let mut widget = Self {
      game,
      output: GameOutput::new(),
      play: Some(GamePlay::new()),
      divider: true,
    };
    widget.push_props();
    widget
  }

  /// Pushes the current game state into the display child.
  fn push_props(&mut self) {
    self.output.set_remaining(self.game.remaining_guesses());
    self.output.set_hint(self.game.hint());
    self.output.set_result(self.game.result());
  }

  fn apply_guess(&mut self, request: GuessRequest) {
    if self.game.is_over() {
      // A submission that raced the end of the round. Repeat the teardown,
      // which is a no-op when already detached, and drop the guess.
      self.detach_play();
      return;
    }

    self.game.guess(request.last_guess);
    self.push_props();
    if self.game.is_over() {
      self.detach_play();
    }
  }

  /// Destroys the input child and removes the divider. Idempotent.
  fn detach_play(&mut self) {
    self.play = None;
    self.divider = false;
  }

  /// Starts a fresh round, rebuilding the input child if the previous one
  /// was destroyed when the round ended.
  fn reset(&mut self) {
    self.game.reset(&mut rand::thread_rng());
    if self.play.is_none() {
      self.play = Some(GamePlay::new());
    }
    self.divider = true;
    self.push_props();
  }
}

impl Component for GameWidget {
  fn process_event(&mut self, args: &mut EventArgs) {
    match args.event {
      // Keys go to the input child, while one is attached.
      Event::Key(_) => {
        if let Some(play) = &mut self.play {
          play.process_event(args);
        }
      }
      Event::Message(message) => {
        if message.is::<ResetRequest>() {
          self.reset();
        }
      }
    }

    for message in args.commands.claim_messages() {
      match message.downcast::<GuessRequest>() {
        Ok(request) => self.apply_guess(*request),
        Err(message) => args.commands.broadcast(message),
      }
    }
  }

  fn render(&mut self, args: &mut RenderArgs) {
    let rect = args.rect;
    let rects = Layout::default()
      .direction(Direction::Vertical)
      .constraints(
        [
          Constraint::Length(4),
          Constraint::Length(1),
          Constraint::Length(2),
          Constraint::Min(0),
        ]
        .as_ref(),
      )
      .split(rect);

    args.rect = rects[0];
    self.output.render(args);

    if self.divider {
      Rule::new()
        .style(args.style_sheet.unfocused)
        .render(rects[1], args.output);
    }

    if let Some(play) = &mut self.play {
      args.rect = rects[2];
      play.render(args);
    }

    args.rect = rect;
  }
}

/// The display child: guesses left, the current hint, and the outcome
/// banner, kept as a pre-built view fragment.
#[derive(Debug)]
pub struct GameOutput {
  remaining: u32,
  hint: Hint,
  result: GameResult,
  view: Text<'static>,
}

impl GameOutput {
  pub fn new() -> Self {
    let mut output = Self {
      remaining: STARTING_GUESSES,
      hint: Hint::None,
      result: GameResult::Playing,
      view: Text::default(),
    };
    output.refresh();
    output
  }

  /// Pushes the number of guesses left into the display.
  pub fn set_remaining(&mut self, remaining: u32) {
    self.remaining = remaining;
    self.refresh();
  }

  /// Pushes the current hint into the display.
  pub fn set_hint(&mut self, hint: Hint) {
    self.hint = hint;
    self.refresh();
  }

  /// Pushes the round outcome into the display.
  pub fn set_result(&mut self, result: GameResult) {
    self.result = result;
    self.refresh();
  }

  /// Rebuilds this component's private view fragment.
  fn refresh(&mut self) {
    let mut lines = Vec::new();
    lines.push(Spans::from(format!("Guesses left: {}", self.remaining)));

    let hint = self.hint.to_string();
    if hint.is_empty() {
      lines.push(Spans::default());
    } else {
      lines.push(Spans::from(format!("Hint: {}", hint)));
    }

    let result = self.result.to_string();
    if !result.is_empty() {
      lines.push(Spans::from(Span::styled(
        result,
        Style::default().add_modifier(Modifier::BOLD),
      )));
      lines.push(Spans::from("Ctrl+R deals a new round."));
    }

    self.view = Text::from(lines);
  }
}

impl Component for GameOutput {
  fn render(&mut self, args: &mut RenderArgs) {
    Paragraph::new(self.view.clone())
      .style(args.style_sheet.unfocused)
      .render(args.rect, args.output);
  }
}

/// Which control inside [`GamePlay`] has the sub-focus.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Focus {
  Guess,
  Submit,
}

/// The input child: a guess field and a submit button.
///
/// Owns only the digits typed so far. Submitting broadcasts a
/// [`GuessRequest`] and clears the field; an empty or overlong field
/// submits nothing.
#[derive(Debug)]
pub struct GamePlay {
  text: String,
  focus: Focus,
}

impl GamePlay {
  pub fn new() -> Self {
    Self {
      text: String::new(),
      focus: Focus::Guess,
    }
  }

  fn submit(&mut self, args: &mut EventArgs) {
    if let Ok(guess) = self.text.parse::<i32>() {
      args
        .commands
        .broadcast(Box::new(GuessRequest { last_guess: guess }));
      self.text.clear();
    }
    args.commands.claim();
  }
}

impl Component for GamePlay {
  fn process_event(&mut self, args: &mut EventArgs) {
    let key = match args.event {
      Event::Key(key) => key,
      _ => return,
    };

    match key.code {
      KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
        self.focus = match self.focus {
          Focus::Guess => Focus::Submit,
          Focus::Submit => Focus::Guess,
        };
        args.commands.claim();
      }
      KeyCode::Enter => self.submit(args),
      KeyCode::Char(c)
        if c.is_ascii_digit() && is_typing(key) && self.focus == Focus::Guess =>
      {
        self.text.push(c);
        args.commands.claim();
      }
      KeyCode::Backspace if self.focus == Focus::Guess => {
        self.text.pop();
        args.commands.claim();
      }
      _ => {}
    }
  }

  fn render(&mut self, args: &mut RenderArgs) {
    let rows = Layout::default()
      .direction(Direction::Vertical)
      .constraints([Constraint::Length(1), Constraint::Length(1)].as_ref())
      .split(args.rect);

    let focused_style =
      args.style_sheet.focused.patch(args.style_sheet.selected);

    TextField::new("Guess")
      .text(&self.text)
      .focused(args.is_focused && self.focus == Focus::Guess)
      .frame_number(args.frame_number)
      .style(args.style_sheet.unfocused)
      .focused_style(focused_style)
      .render(rows[0], args.output);
    Button::new("Submit")
      .focused(args.is_focused && self.focus == Focus::Submit)
      .style(args.style_sheet.unfocused)
      .focused_style(focused_style)
      .render(rows[1], args.output);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use crate::ui::component::testing;

  fn guess(widget: &mut GameWidget, number: &str) {
    testing::type_str(widget, number);
    testing::press(widget, KeyCode::Enter);
  }

  #[test]
  fn a_scripted_round_plays_out_on_screen() {
    let mut widget = GameWidget::with_game(Game::with_target(42));

    guess(&mut widget, "10");
    let view = testing::draw(&mut widget, 40, 8);
    assert!(view.contains("Guesses left: 9"), "got:\n{}", view);
    assert!(view.contains("Hint: higher"), "got:\n{}", view);

    guess(&mut widget, "80");
    let view = testing::draw(&mut widget, 40, 8);
    assert!(view.contains("Guesses left: 8"), "got:\n{}", view);
    assert!(view.contains("Hint: lower"), "got:\n{}", view);

    guess(&mut widget, "42");
    let view = testing::draw(&mut widget, 40, 8);
    assert!(view.contains("You Win!"), "got:\n{}", view);
    assert!(widget.play.is_none());
    assert!(!view.contains("Submit"), "got:\n{}", view);
  }

  #[test]
  fn ten_misses_lose_and_detach_the_input_child() {
    let mut widget = GameWidget::with_game(Game::with_target(42));
    for i in 0..10 {
      guess(&mut widget, &i.to_string());
    }

    let view = testing::draw(&mut widget, 40, 8);
    assert!(view.contains("You Lose!"), "got:\n{}", view);
    assert!(view.contains("Guesses left: 0"), "got:\n{}", view);
    assert!(widget.play.is_none());

    // With no input child attached, further typing changes nothing.
    guess(&mut widget, "42");
    assert_eq!(widget.game.result(), GameResult::Lost);
  }

  #[test]
  fn the_divider_disappears_with_the_input_child() {
    let mut widget = GameWidget::with_game(Game::with_target(42));
    let view = testing::draw(&mut widget, 40, 8);
    assert!(view.contains("──"), "got:\n{}", view);

    guess(&mut widget, "42");
    let view = testing::draw(&mut widget, 40, 8);
    assert!(!view.contains("──"), "got:\n{}", view);
  }

  #[test]
  fn a_reset_broadcast_rebuilds_a_fresh_round() {
    let mut widget = GameWidget::with_game(Game::with_target(42));
    guess(&mut widget, "42");
    assert!(widget.play.is_none());

    testing::deliver(&mut widget, Box::new(ResetRequest));
    assert!(widget.play.is_some());
    assert!(widget.divider);
    let view = testing::draw(&mut widget, 40, 8);
    assert!(view.contains("Guesses left: 10"), "got:\n{}", view);
    assert!(!view.contains("You Win!"), "got:\n{}", view);

    // The fresh input child is interactive: a guaranteed miss burns a
    // guess and produces a hint.
    guess(&mut widget, "100");
    let view = testing::draw(&mut widget, 40, 8);
    assert!(view.contains("Guesses left: 9"), "got:\n{}", view);
    assert!(view.contains("Hint: lower"), "got:\n{}", view);
  }

  #[test]
  fn an_empty_field_submits_nothing() {
    let mut widget = GameWidget::with_game(Game::with_target(42));
    testing::press(&mut widget, KeyCode::Enter);
    assert_eq!(widget.game.remaining_guesses(), STARTING_GUESSES);
  }
}
