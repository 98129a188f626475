//! The step-counter widget.
//!
//! `CounterWidget` owns the [`Counter`] state and hosts two children: a
//! [`TotalDisplay`] that the running total is pushed into, and a
//! [`Controls`] input child that bubbles [`CounterRequest`]s back up.

use crossterm::event::KeyCode;

use fidgets::counter::Counter;
use fidgets::counter::CounterRequest;
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

/// The container: owns the counter state, applies requests bubbled up from
/// [`Controls`], and pushes fresh values into both children.
#[derive(Debug)]
pub struct CounterWidget {
  state: Counter,
  total: TotalDisplay,
  controls: Controls,
}

impl CounterWidget {
  pub fn new() -> Self {
    let mut widget = Self {
      state: Counter::new(2.0),
      total: TotalDisplay::new(),
      controls: Controls::new(),
    };
    widget.push_props();
    widget
  }

  /// Pushes the current state into both children (one-way data binding).
  fn push_props(&mut self) {
    self.controls.set_amount(self.state.amount());
    self.total.set_total(self.state.total());
  }
}

impl Component for CounterWidget {
  fn process_event(&mut self, args: &mut EventArgs) {
    // Keys go to the input child; the display takes no input.
    if let Event::Key(_) = args.event {
      self.controls.process_event(args);
    }

    // Apply whatever requests bubbled out of the subtree; anything else
    // keeps bubbling.
    for message in args.commands.claim_messages() {
      match message.downcast::<CounterRequest>() {
        Ok(request) => {
          self.state.apply(&request);
          self.push_props();
        }
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
          Constraint::Length(1),
          Constraint::Length(1),
          Constraint::Length(2),
          Constraint::Min(0),
        ]
        .as_ref(),
      )
      .split(rect);

    args.rect = rects[0];
    self.total.render(args);
    args.rect = rects[2];
    self.controls.render(args);
    args.rect = rect;
  }
}

/// The display child. Stateless: it shows whatever total was last pushed in
/// and keeps a pre-built view fragment for it.
#[derive(Debug)]
pub struct TotalDisplay {
  total: f64,
  view: Text<'static>,
}

impl TotalDisplay {
  pub fn new() -> Self {
    let mut display = Self {
      total: 0.0,
      view: Text::default(),
    };
    display.refresh();
    display
  }

  /// Pushes a new running total into the display.
  pub fn set_total(&mut self, total: f64) {
    self.total = total;
    self.refresh();
  }

  /// Rebuilds this component's private view fragment.
  fn refresh(&mut self) {
    self.view = Text::from(Spans::from(vec![
      Span::raw("Total: "),
      Span::styled(
        num::format(self.total),
        Style::default().add_modifier(Modifier::BOLD),
      ),
    ]));
  }
}

impl Component for TotalDisplay {
  fn render(&mut self, args: &mut RenderArgs) {
    Paragraph::new(self.view.clone())
      .style(args.style_sheet.unfocused)
      .render(args.rect, args.output);
  }
}

/// Which control inside [`Controls`] has the sub-focus.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Focus {
  Amount,
  Increment,
  Decrement,
}

impl Focus {
  fn prev(self) -> Self {
    match self {
      Focus::Amount => Focus::Amount,
      Focus::Increment => Focus::Amount,
      Focus::Decrement => Focus::Increment,
    }
  }

  fn next(self) -> Self {
    match self {
      Focus::Amount => Focus::Increment,
      Focus::Increment => Focus::Decrement,
      Focus::Decrement => Focus::Decrement,
    }
  }
}

/// The input child: an amount field and the `+`/`-` buttons.
///
/// Owns only transient view-local values: the text being typed and which
/// sub-control has focus. Every interaction is broadcast as a
/// [`CounterRequest`]; the container state is never touched from here.
#[derive(Debug)]
pub struct Controls {
  text: String,
  focus: Focus,
}

impl Controls {
  pub fn new() -> Self {
    Self {
      text: String::new(),
      focus: Focus::Amount,
    }
  }

  /// Pushes a new step amount into the field.
  ///
  /// The text is only replaced when it no longer reads as the pushed value,
  /// so round-trips from this component's own keystrokes do not fight the
  /// cursor.
  pub fn set_amount(&mut self, amount: f64) {
    if !num::same(num::parse(&self.text), amount) {
      self.text = num::format(amount);
    }
  }

  /// Broadcasts the current field text as an amount change request.
  fn request_amount(&self, args: &mut EventArgs) {
    args.commands.broadcast(Box::new(CounterRequest::UpdateAmount {
      amount: num::parse(&self.text),
    }));
  }
}

impl Component for Controls {
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
      _ => {}
    }

    match self.focus {
      Focus::Amount => match key.code {
        KeyCode::Char(c) if is_typing(key) => {
          self.text.push(c);
          self.request_amount(args);
          args.commands.claim();
        }
        KeyCode::Backspace => {
          self.text.pop();
          self.request_amount(args);
          args.commands.claim();
        }
        _ => {}
      },
      Focus::Increment => {
        if let KeyCode::Enter = key.code {
          args.commands.broadcast(Box::new(CounterRequest::Increment));
          args.commands.claim();
        }
      }
      Focus::Decrement => {
        if let KeyCode::Enter = key.code {
          args.commands.broadcast(Box::new(CounterRequest::Decrement));
          args.commands.claim();
        }
      }
    }
  }

  fn render(&mut self, args: &mut RenderArgs) {
    let rows = Layout::default()
      .direction(Direction::Vertical)
      .constraints([Constraint::Length(1), Constraint::Length(1)].as_ref())
      .split(args.rect);

    TextField::new("Amount")
      .text(&self.text)
      .focused(args.is_focused && self.focus == Focus::Amount)
      .frame_number(args.frame_number)
      .style(args.style_sheet.unfocused)
      .focused_style(args.style_sheet.focused.patch(args.style_sheet.selected))
      .render(rows[0], args.output);

    let columns = Layout::default()
      .direction(Direction::Horizontal)
      .constraints(
        [
          Constraint::Length(5),
          Constraint::Length(1),
          Constraint::Length(5),
          Constraint::Min(0),
        ]
        .as_ref(),
      )
      .split(rows[1]);

    Button::new("+")
      .focused(args.is_focused && self.focus == Focus::Increment)
      .style(args.style_sheet.unfocused)
      .focused_style(args.style_sheet.focused.patch(args.style_sheet.selected))
      .render(columns[0], args.output);
    Button::new("-")
      .focused(args.is_focused && self.focus == Focus::Decrement)
      .style(args.style_sheet.unfocused)
      .focused_style(args.style_sheet.focused.patch(args.style_sheet.selected))
      .render(columns[2], args.output);
  }
}
