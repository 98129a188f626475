//! Helpers for driving components in tests, without a terminal.

use std::any::Any;

use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;

use tui::buffer::Buffer;
use tui::layout::Rect;

use crate::ui::component::CommandBuffer;
use crate::ui::component::Component;
use crate::ui::component::Event;
use crate::ui::component::EventArgs;
use crate::ui::component::RenderArgs;
use crate::ui::component::StyleSheet;

/// Delivers one plain key press and returns the command buffer it filled.
pub fn press(component: &mut dyn Component, code: KeyCode) -> CommandBuffer {
  let mut commands = CommandBuffer::new();
  let event = Event::Key(KeyEvent::new(code, KeyModifiers::NONE));
  component.process_event(&mut EventArgs {
    event: &event,
    commands: &mut commands,
  });
  commands
}

/// Types a string one character at a time.
pub fn type_str(component: &mut dyn Component, text: &str) {
  for c in text.chars() {
    press(component, KeyCode::Char(c));
  }
}

/// Delivers a broadcast message the way the deck re-delivers unclaimed
/// ones.
pub fn deliver(component: &mut dyn Component, message: Box<dyn Any>) {
  let event = Event::Message(message);
  component.process_event(&mut EventArgs {
    event: &event,
    commands: &mut CommandBuffer::new(),
  });
}

/// Renders `component` into a fresh buffer and returns the visible text,
/// one line per row.
pub fn draw(component: &mut dyn Component, width: u16, height: u16) -> String {
  let rect = Rect::new(0, 0, width, height);
  let mut output = Buffer::empty(rect);
  component.render(&mut RenderArgs {
    is_focused: true,
    rect,
    output: &mut output,
    frame_number: 0,
    style_sheet: StyleSheet::default(),
  });

  let mut text = String::new();
  for y in 0..height {
    for x in 0..width {
      text.push_str(&output.get(x, y).symbol);
    }
    text.push('\n');
  }
  text
}
