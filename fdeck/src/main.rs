//! `fdeck` hosts the fidget widgets in a terminal deck: one framed pane per
//! widget, one pane focused at a time.

use std::io;
use std::time::Duration;

use crossterm::event::KeyCode;
use crossterm::event::KeyModifiers;
use crossterm::execute;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;

use tui::backend::CrosstermBackend;
use tui::Terminal;

use crate::ui::deck::Deck;

mod ui;

/// Frame budget between redraws; also paces the input poll.
const FRAME: Duration = Duration::from_millis(33);

/// A top-level `fdeck` error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error(transparent)]
  Io(#[from] io::Error),

  #[error(transparent)]
  Term(#[from] crossterm::ErrorKind),
}

fn main() -> Result<(), Error> {
  init_logging()?;

  enable_raw_mode()?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend)?;

  let mut deck = Deck::new();
  tracing::info!("deck up");
  let result = run(&mut terminal, &mut deck);

  execute!(io::stdout(), LeaveAlternateScreen)?;
  disable_raw_mode()?;
  result
}

fn run(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  deck: &mut Deck,
) -> Result<(), Error> {
  loop {
    terminal.draw(|f| deck.render(f))?;

    if crossterm::event::poll(FRAME)? {
      if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
        if key.code == KeyCode::Char('c')
          && key.modifiers == KeyModifiers::CONTROL
        {
          return Ok(());
        }
        deck.process_key(key);
      }
    }

    if deck.should_quit() {
      return Ok(());
    }
  }
}

fn init_logging() -> Result<(), Error> {
  if std::env::var_os("RUST_LOG").is_none() {
    return Ok(());
  }

  // The alternate screen owns stdout, so logs go to a file instead.
  let file = std::fs::File::create("fdeck.log")?;
  tracing_subscriber::fmt()
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_writer(std::sync::Arc::new(file))
    .with_ansi(false)
    .init();
  Ok(())
}
