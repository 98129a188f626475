//! The rectangle-area calculator widget.
//!
//! Unlike the other widgets this one has no children: the two dimension
//! fields, the compute button and the result line all live in one
//! component's private view, and nothing is broadcast out of it.

use crossterm::event::KeyCode;

use fidgets::area::RectArea;
use fidgets::num;

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
use crate::ui::widgets::TextField;

/// Which control has the sub-focus.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Focus {
  Length,
  Width,
  Submit,
}

impl Focus {
  fn prev(self) -> Self {
    match self {
      Focus::Length => Focus::Length,
      Focus::Width => Focus::Length,
      Focus::Submit => Focus::Width,
    }
  }

  fn next(self) -> Self {
    match self {
      Focus::Length => Focus::Width,
      Focus::Width => Focus::Submit,
      Focus::Submit => Focus::Submit,
    }
  }
}

/// The self-contained area calculator.
///
/// The field texts are transient view-local values; the [`RectArea`] state
/// only changes on an explicit submit, which also rebuilds the result
/// fragment.
#[derive(Debug)]
pub struct AreaWidget {
  state: RectArea,
  length: String,
  width: String,
  focus: Focus,
  view: Text<'static>,
}

impl AreaWidget {
  pub fn new() -> Self {
    let mut widget = Self {
      state: RectArea::new(),
      // Example defaults; the state stays zero until the first submit.
      length: "5".to_string(),
      width: "4".to_string(),
      focus: Focus::Length,
      view: Text::default(),
    };
    widget.refresh();
    widget
  }

  /// Reads both fields into the state and recomputes the area.
  fn submit(&mut self) {
    self.state.submit(&self.length, &self.width);
    self.refresh();
  }

  /// Rebuilds this component's private result fragment.
  fn refresh(&mut self) {
    self.view = Text::from(Spans::from(vec![
      Span::raw("Area: "),
      Span::styled(
        num::format(self.state.area()),
        Style::default().add_modifier(Modifier::BOLD),
      ),
    ]));
  }
}

impl Component for AreaWidget {
  fn process_event(&mut self, args: &mut EventArgs) {
    let key = match args.event {
      Event::Key(key) => key,
      _ => return,
    };

    match key.code {
      KeyCode::Left => {
        self.focus = self.focus.prev();
        args.commands.claim();
        return;
      }
      KeyCode::Right | KeyCode::Tab => {
        self.focus = self.focus.next();
        args.commands.claim();
        return;
      }
      KeyCode::Enter => {
        self.submit();
        args.commands.claim();
        return;
      }
      _ => {}
    }

    let field = match self.focus {
      Focus::Length => &mut self.length,
      Focus::Width => &mut self.width,
      Focus::Submit => return,
    };
    match key.code {
      KeyCode::Char(c) if is_typing(key) => {
        field.push(c);
        args.commands.claim();
      }
      KeyCode::Backspace => {
        field.pop();
        args.commands.claim();
      }
      _ => {}
    }
  }

  fn render(&mut self, args: &mut RenderArgs) {
    let rows = Layout::default()
      .direction(Direction::Vertical)
      .constraints(
        [
          Constraint::Length(1),
          Constraint::Length(1),
          Constraint::Length(1),
          Constraint::Length(1),
          Constraint::Min(0),
        ]
        .as_ref(),
      )
      .split(args.rect);

    let focused_style =
      args.style_sheet.focused.patch(args.style_sheet.selected);

    TextField::new("Length")
      .text(&self.length)
      .focused(args.is_focused && self.focus == Focus::Length)
      .frame_number(args.frame_number)
      .style(args.style_sheet.unfocused)
      .focused_style(focused_style)
      .render(rows[0], args.output);
    TextField::new("Width ")
      .text(&self.width)
      .focused(args.is_focused && self.focus == Focus::Width)
      .frame_number(args.frame_number)
      .style(args.style_sheet.unfocused)
      .focused_style(focused_style)
      .render(rows[1], args.output);
    Button::new("Compute")
      .focused(args.is_focused && self.focus == Focus::Submit)
      .style(args.style_sheet.unfocused)
      .focused_style(focused_style)
      .render(rows[2], args.output);

    Paragraph::new(self.view.clone())
      .style(args.style_sheet.unfocused)
      .render(rows[3], args.output);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use crate::ui::component::testing;

  #[test]
  fn submit_multiplies_the_example_defaults() {
    let mut widget = AreaWidget::new();
    testing::press(&mut widget, KeyCode::Enter);

    assert_eq!(widget.state.area(), 20.0);
    let view = testing::draw(&mut widget, 30, 6);
    assert!(view.contains("Area: 20"), "got:\n{}", view);
  }

  #[test]
  fn nothing_is_computed_before_the_first_submit() {
    let mut widget = AreaWidget::new();
    let view = testing::draw(&mut widget, 30, 6);
    assert!(view.contains("Area: 0"), "got:\n{}", view);
  }

  #[test]
  fn edited_fields_take_effect_on_the_next_submit() {
    let mut widget = AreaWidget::new();
    // "5" -> "10" in the length field.
    testing::press(&mut widget, KeyCode::Backspace);
    testing::type_str(&mut widget, "10");
    testing::press(&mut widget, KeyCode::Enter);

    assert_eq!(widget.state.length(), 10.0);
    assert_eq!(widget.state.area(), 40.0);
  }

  #[test]
  fn garbage_input_shows_a_nan_area() {
    let mut widget = AreaWidget::new();
    testing::type_str(&mut widget, "ish");
    testing::press(&mut widget, KeyCode::Enter);

    let view = testing::draw(&mut widget, 30, 6);
    assert!(view.contains("Area: NaN"), "got:\n{}", view);
  }

  #[test]
  fn the_widget_never_broadcasts_messages() {
    let mut widget = AreaWidget::new();
    let mut typed = testing::press(&mut widget, KeyCode::Char('7'));
    assert!(typed.claim_messages().is_empty());
    let mut submitted = testing::press(&mut widget, KeyCode::Enter);
    assert!(submitted.claim_messages().is_empty());
  }
}
