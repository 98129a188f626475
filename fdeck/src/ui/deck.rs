//! The root UI type.

use std::any::Any;

use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;

use tui::backend::Backend;
use tui::buffer::Buffer;
use tui::layout::Constraint;
use tui::layout::Direction;
use tui::layout::Layout;
use tui::layout::Rect;
use tui::widgets::Widget;
use tui::Frame;

use fidgets::hilo::ResetRequest;

use crate::ui::component::area::AreaWidget;
use crate::ui::component::counter::CounterWidget;
use crate::ui::component::hilo::GameWidget;
use crate::ui::component::CommandBuffer;
use crate::ui::component::Component;
use crate::ui::component::Event;
use crate::ui::component::EventArgs;
use crate::ui::component::RenderArgs;
use crate::ui::component::StyleSheet;

/// Key hints shown in the focused pane's footer.
const FOOTER_HINTS: &str = "⇧←→ focus ^R reset Q quit";

/// Options for constructing a [`Deck`].
#[derive(Default)]
pub struct Options {
  /// Styles applied across every pane.
  pub style_sheet: StyleSheet,
}

/// The root deck: a horizontal row of panes, one per widget, exactly one of
/// them focused.
///
/// Every pane is fully isolated from every other pane; the only cross-pane
/// channel is [`Deck::broadcast`], which re-delivers a message to all of
/// them.
pub struct Deck {
  panes: Vec<Pane>,
  focused_idx: usize,
  frame_number: usize,
  style_sheet: StyleSheet,
  should_quit: bool,
}

impl Deck {
  /// Creates a deck hosting the three widgets with default settings.
  pub fn new() -> Self {
    Self::with_options(Options::default())
  }

  /// Creates a deck with the given options.
  pub fn with_options(options: Options) -> Self {
    Self {
      panes: vec![
        Pane::new("Counter", CounterWidget::new()),
        Pane::new("Area", AreaWidget::new()),
        Pane::new("Higher or Lower", GameWidget::new()),
      ],
      focused_idx: 0,
      frame_number: 0,
      style_sheet: options.style_sheet,
      should_quit: false,
    }
  }

  /// Returns whether an unclaimed `q` asked the deck to shut down.
  pub fn should_quit(&self) -> bool {
    self.should_quit
  }

  /// Moves pane focus left or right, clamping at the edges.
  pub fn move_focus(&mut self, delta: isize) {
    self.focused_idx = ((self.focused_idx as isize).saturating_add(delta).max(0)
      as usize)
      .min(self.panes.len() - 1)
  }

  /// Propagates a key press down through the focused pane's tree.
  ///
  /// Some keys are intercepted by the deck itself; whatever the tree leaves
  /// unclaimed falls through to deck-level controls.
  pub fn process_key(&mut self, key: KeyEvent) {
    // Keys that override normal event processing.
    if key.modifiers == KeyModifiers::SHIFT {
      match key.code {
        KeyCode::Left => return self.move_focus(-1),
        KeyCode::Right => return self.move_focus(1),
        _ => {}
      }
    }
    if key.modifiers == KeyModifiers::CONTROL {
      if let KeyCode::Char('r') = key.code {
        return self.broadcast(Box::new(ResetRequest));
      }
    }

    let mut commands = CommandBuffer::new();
    let event = Event::Key(key);
    if let Some(pane) = self.panes.get_mut(self.focused_idx) {
      pane.root.process_event(&mut EventArgs {
        event: &event,
        commands: &mut commands,
      });
    }

    // Whatever no container claimed becomes a deck-wide broadcast.
    for message in commands.claim_messages() {
      self.broadcast(message);
    }

    if commands.is_claimed() {
      return;
    }

    // Deck-level key controls.
    match key.code {
      KeyCode::Left => self.move_focus(-1),
      KeyCode::Right | KeyCode::Tab => self.move_focus(1),
      KeyCode::Char('r') => self.broadcast(Box::new(ResetRequest)),
      KeyCode::Char('q') => self.should_quit = true,
      _ => {}
    }
  }

  /// Delivers `message` to every pane, whichever tree it originated in.
  ///
  /// Messages broadcast *during* this delivery are discarded; the signal
  /// fans out exactly one level.
  pub fn broadcast(&mut self, message: Box<dyn Any>) {
    tracing::debug!("deck-wide broadcast");
    let event = Event::Message(message);
    for pane in &mut self.panes {
      pane.root.process_event(&mut EventArgs {
        event: &event,
        commands: &mut CommandBuffer::new(),
      });
    }
  }

  /// Renders the deck onto a frame by recursively rendering every pane.
  pub fn render<B: Backend>(&mut self, f: &mut Frame<B>) {
    struct DeckAsWidget<'a> {
      deck: &'a mut Deck,
    }
    impl Widget for DeckAsWidget<'_> {
      fn render(self, rect: Rect, buf: &mut Buffer) {
        let pane_count = self.deck.panes.len();
        let mut constraints = vec![Constraint::Ratio(1, pane_count as u32)];
        for _ in 1..pane_count {
          constraints.push(Constraint::Length(1));
          constraints.push(Constraint::Ratio(1, pane_count as u32));
        }

        let pane_rects = Layout::default()
          .direction(Direction::Horizontal)
          .margin(1)
          .constraints(constraints)
          .split(rect);
        let pane_rects = pane_rects
          .into_iter()
          .enumerate()
          .filter(|(i, _)| i % 2 == 0)
          .map(|(_, r)| r);

        let focused_idx = self.deck.focused_idx;
        let frame_number = self.deck.frame_number;
        let sheet = self.deck.style_sheet;
        for (i, (pane, rect)) in
          self.deck.panes.iter_mut().zip(pane_rects).enumerate()
        {
          let is_focused = i == focused_idx;
          let mut chrome = crate::ui::widgets::Chrome::new()
            .title(pane.title.as_str())
            .focus(is_focused)
            .style(sheet.unfocused)
            .focused_style(sheet.focused.patch(sheet.selected));
          if is_focused {
            chrome = chrome.footer(FOOTER_HINTS);
          }
          let inner = chrome.inner(rect);
          chrome.render(rect, &mut *buf);

          pane.root.render(&mut RenderArgs {
            is_focused,
            rect: inner,
            output: &mut *buf,
            frame_number,
            style_sheet: sheet,
          });
        }
      }
    }

    let size = f.size();
    f.render_widget(DeckAsWidget { deck: self }, size);
    self.frame_number += 1;
  }
}

/// A single framed pane hosting one widget's component tree.
pub struct Pane {
  title: String,
  root: Box<dyn Component>,
}

impl Pane {
  pub fn new(title: impl Into<String>, root: impl Component + 'static) -> Self {
    Self {
      title: title.into(),
      root: Box::new(root),
    }
  }
}
