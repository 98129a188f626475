//! `fidgets` is a library of small, self-contained widget state machines:
//! a step-counter, a rectangle-area calculator, and a higher-or-lower
//! guessing game.
//!
//! Every widget follows the same shape. A *container* owns the authoritative
//! state, which lives in this crate as a plain value (`Counter`, `RectArea`,
//! `Game`). Input components never mutate that state directly; they submit
//! *change requests* (`CounterRequest`, `GuessRequest`, `ResetRequest`),
//! which the container applies before pushing fresh values back out to its
//! display components. Keeping the state machines UI-free keeps them
//! testable without a terminal.

#![deny(missing_docs, unused)]

pub mod area;
pub mod counter;
pub mod hilo;
pub mod num;
