//! The fdeck UI.
//!
//! The root view is a [`Deck`](deck::Deck): a horizontal row of framed
//! panes, one per widget, with exactly one pane focused at a time. Each pane
//! hosts an independent component tree:
//!
//! - A *container* component owns the widget's state and wires the tree
//!   together.
//! - *Display* children render values the container pushes into them
//!   through per-property setters; each push rebuilds the child's private
//!   view fragment.
//! - *Input* children own only transient view-local values (typed text,
//!   sub-control focus) and turn key presses into change-request messages.
//!
//! Input flows down: the deck hands each key press to the focused pane's
//! container, which forwards it to its input child. Requests flow up: a
//! child broadcasts a message into the shared
//! [`CommandBuffer`](component::CommandBuffer); each enclosing container
//! claims the messages it understands and re-broadcasts the rest. Messages
//! that escape every container are re-delivered by the deck to *all* panes,
//! which is the deck-wide broadcast channel that the game's reset signal
//! rides on.

pub mod component;
pub mod deck;
pub mod widgets;
