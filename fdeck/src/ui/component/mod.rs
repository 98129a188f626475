//! The component layer: the tree contract every widget is built from.
//!
//! A [`Component`] is like a `tui` [`Widget`](tui::widgets::Widget), except
//! that it is retained across frames, can process input, and can talk to the
//! components enclosing it through a [`CommandBuffer`].

use std::any::Any;
use std::fmt::Debug;

use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;

use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::style::Color;
use tui::style::Modifier;
use tui::style::Style;

pub mod area;
pub mod counter;
pub mod hilo;

#[cfg(test)]
pub mod testing;

/// An event delivered into a component tree.
pub enum Event {
  /// A key press, forwarded by the deck to the focused pane.
  Key(KeyEvent),
  /// A dynamically-typed message, re-delivered by the deck to every pane.
  Message(Box<dyn Any>),
}

/// A buffer for issuing requests to enclosing components in response to an
/// event.
///
/// Buffered messages do not take effect while the originating component is
/// still processing; they travel upward once it returns. Each enclosing
/// container claims the messages it understands; whatever reaches the deck
/// unclaimed is re-delivered to every pane as [`Event::Message`].
pub struct CommandBuffer {
  messages: Vec<Box<dyn Any>>,
  claimed: bool,
}

impl CommandBuffer {
  /// Creates an empty buffer.
  pub fn new() -> Self {
    Self {
      messages: Vec::new(),
      claimed: false,
    }
  }

  /// Broadcasts a dynamically-typed message toward the enclosing
  /// components.
  pub fn broadcast(&mut self, message: Box<dyn Any>) {
    self.messages.push(message)
  }

  /// Claims whatever messages were broadcast through this buffer for
  /// processing.
  pub fn claim_messages(&mut self) -> Vec<Box<dyn Any>> {
    std::mem::take(&mut self.messages)
  }

  /// Claims the event being processed, so it will not fall through to
  /// deck-level key handling.
  pub fn claim(&mut self) {
    self.claimed = true
  }

  /// Returns whether a callee has already claimed the event associated with
  /// this buffer.
  pub fn is_claimed(&self) -> bool {
    self.claimed
  }
}

/// Style assignments shared by every component in the deck.
#[derive(Copy, Clone, Debug)]
pub struct StyleSheet {
  pub focused: Style,
  pub unfocused: Style,
  pub selected: Style,
}

impl Default for StyleSheet {
  fn default() -> Self {
    StyleSheet {
      focused: Style::default().fg(Color::White),
      unfocused: Style::default().fg(Color::Gray),
      selected: Style::default().add_modifier(Modifier::BOLD),
    }
  }
}

/// Arguments for [`Component::process_event()`].
pub struct EventArgs<'deck> {
  pub event: &'deck Event,
  pub commands: &'deck mut CommandBuffer,
}

/// Arguments for [`Component::render()`].
pub struct RenderArgs<'deck> {
  pub is_focused: bool,
  pub rect: Rect,
  pub output: &'deck mut Buffer,
  pub frame_number: usize,
  pub style_sheet: StyleSheet,
}

/// A node in a widget tree.
///
/// Containers implement both operations; display children usually implement
/// only `render`, since nothing is delivered to them directly.
pub trait Component: Debug {
  /// Processes an event, either mutating own state or broadcasting a
  /// request to the components enclosing this one.
  fn process_event(&mut self, args: &mut EventArgs) {
    let _ = args;
  }

  /// Renders this component into the rectangle its parent assigned.
  fn render(&mut self, args: &mut RenderArgs);
}

/// Returns true if `key` reads as plain typed text rather than a chord.
pub fn is_typing(key: &KeyEvent) -> bool {
  key.modifiers.difference(KeyModifiers::SHIFT).is_empty()
}
