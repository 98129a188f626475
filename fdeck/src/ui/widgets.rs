//! `tui` widgets that are not complex enough to be `Component`s.

use std::iter;

use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::style::Modifier;
use tui::style::Style;
use tui::symbols;
use tui::text::Span;
use tui::text::Spans;
use tui::widgets::Widget;

/// How many frames each half of the text-field cursor blink lasts.
const BLINK_FRAMES: usize = 10;

/// A frame that wraps around a pane with an `fdeck`-specific style.
///
/// A `Chrome` draws a title bar along the top edge and a footer bar along
/// the bottom one; the content renders between them, in [`Chrome::inner`].
#[derive(Clone, Debug)]
pub struct Chrome<'a> {
  title: Option<Spans<'a>>,
  footer: Option<Spans<'a>>,
  focused: bool,
  style: Style,
  focused_style: Style,
}

impl<'a> Chrome<'a> {
  pub fn new() -> Self {
    Self {
      title: None,
      footer: None,
      focused: false,
      style: Style::default(),
      focused_style: Style::default(),
    }
  }

  pub fn title(mut self, title: impl Into<Spans<'a>>) -> Self {
    self.title = Some(title.into());
    self
  }

  pub fn footer(mut self, footer: impl Into<Spans<'a>>) -> Self {
    self.footer = Some(footer.into());
    self
  }

  pub fn focus(mut self, focused: bool) -> Self {
    self.focused = focused;
    self
  }

  pub fn style(mut self, style: Style) -> Self {
    self.style = style;
    self
  }

  pub fn focused_style(mut self, style: Style) -> Self {
    self.focused_style = style;
    self
  }

  /// Returns the rectangle left for content once both bars are drawn.
  pub fn inner(&self, rect: Rect) -> Rect {
    Rect::new(
      rect.x + 1,
      rect.y + 1,
      rect.width.saturating_sub(2),
      rect.height.saturating_sub(2),
    )
  }
}

impl<'a> Widget for Chrome<'a> {
  fn render(self, rect: Rect, buf: &mut Buffer) {
    if rect.height < 2 {
      return;
    }

    let Chrome {
      title,
      footer,
      focused,
      style,
      focused_style,
    } = self;

    let base_style = style;
    let bar_style = if focused {
      base_style.patch(focused_style)
    } else {
      base_style
    };
    let pipe = symbols::block::ONE_QUARTER;

    let make_bar = |spans: Option<Spans<'a>>| {
      let mut bar = Spans::default();
      bar.0.push(Span::styled(pipe, base_style));
      bar.0.push(Span::styled(pipe, base_style));

      if let Some(Spans(spans)) = spans {
        bar
          .0
          .push(Span::styled(" ", bar_style.add_modifier(Modifier::REVERSED)));
        for mut span in spans {
          span.style =
            bar_style.patch(span.style).add_modifier(Modifier::REVERSED);
          bar.0.push(span);
        }
        bar
          .0
          .push(Span::styled(" ", bar_style.add_modifier(Modifier::REVERSED)));
      }

      let rest_len = (rect.width as usize).saturating_sub(bar.width());
      bar.0.push(Span::styled(
        iter::repeat(pipe).take(rest_len).collect::<String>(),
        base_style,
      ));

      bar
    };

    buf.set_spans(rect.x, rect.y, &make_bar(title), rect.width);
    buf.set_spans(
      rect.x,
      rect.y + rect.height - 1,
      &make_bar(footer),
      rect.width,
    );
  }
}

/// A horizontal divider line.
#[derive(Clone, Debug)]
pub struct Rule {
  style: Style,
}

impl Rule {
  pub fn new() -> Self {
    Self {
      style: Style::default(),
    }
  }

  pub fn style(mut self, style: Style) -> Self {
    self.style = style;
    self
  }
}

impl Widget for Rule {
  fn render(self, rect: Rect, buf: &mut Buffer) {
    if rect.height == 0 {
      return;
    }

    for x in rect.left()..rect.right() {
      buf
        .get_mut(x, rect.top())
        .set_symbol(symbols::line::HORIZONTAL)
        .set_style(self.style);
    }
  }
}

/// A labeled single-line input box.
///
/// Render-only: the owning component tracks the text and decides focus; the
/// field just draws that state, with a blinking block cursor while focused.
#[derive(Clone, Debug)]
pub struct TextField<'a> {
  label: &'a str,
  text: &'a str,
  focused: bool,
  frame_number: usize,
  style: Style,
  focused_style: Style,
}

impl<'a> TextField<'a> {
  pub fn new(label: &'a str) -> Self {
    Self {
      label,
      text: "",
      focused: false,
      frame_number: 0,
      style: Style::default(),
      focused_style: Style::default(),
    }
  }

  pub fn text(mut self, text: &'a str) -> Self {
    self.text = text;
    self
  }

  pub fn focused(mut self, focused: bool) -> Self {
    self.focused = focused;
    self
  }

  pub fn frame_number(mut self, frame_number: usize) -> Self {
    self.frame_number = frame_number;
    self
  }

  pub fn style(mut self, style: Style) -> Self {
    self.style = style;
    self
  }

  pub fn focused_style(mut self, style: Style) -> Self {
    self.focused_style = style;
    self
  }
}

impl Widget for TextField<'_> {
  fn render(self, rect: Rect, buf: &mut Buffer) {
    if rect.height == 0 {
      return;
    }

    let style = if self.focused {
      self.style.patch(self.focused_style)
    } else {
      self.style
    };
    let cursor = if self.focused && self.frame_number / BLINK_FRAMES % 2 == 0
    {
      "█"
    } else {
      " "
    };

    let spans = Spans::from(vec![
      Span::styled(self.label, style),
      Span::styled(" [", style),
      Span::styled(self.text, style.add_modifier(Modifier::BOLD)),
      Span::styled(cursor, style),
      Span::styled("]", style),
    ]);
    buf.set_spans(rect.x, rect.y, &spans, rect.width);
  }
}

/// A push button; reversed video marks the focused one.
#[derive(Clone, Debug)]
pub struct Button<'a> {
  label: &'a str,
  focused: bool,
  style: Style,
  focused_style: Style,
}

impl<'a> Button<'a> {
  pub fn new(label: &'a str) -> Self {
    Self {
      label,
      focused: false,
      style: Style::default(),
      focused_style: Style::default(),
    }
  }

  pub fn focused(mut self, focused: bool) -> Self {
    self.focused = focused;
    self
  }

  pub fn style(mut self, style: Style) -> Self {
    self.style = style;
    self
  }

  pub fn focused_style(mut self, style: Style) -> Self {
    self.focused_style = style;
    self
  }
}

impl Widget for Button<'_> {
  fn render(self, rect: Rect, buf: &mut Buffer) {
    if rect.height == 0 {
      return;
    }

    let style = if self.focused {
      self
        .style
        .patch(self.focused_style)
        .add_modifier(Modifier::REVERSED)
    } else {
      self.style
    };

    let spans = Spans::from(Span::styled(format!("[ {} ]", self.label), style));
    buf.set_spans(rect.x, rect.y, &spans, rect.width);
  }
}
