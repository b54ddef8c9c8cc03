//! Interactive terminal UI.
//!
//! The [`builder`] module exposes the public-facing [`MovieSearch`] builder.
//! The remaining submodules implement the event loop, rendering, key
//! handling, and the widgets and themes used by the terminal application.

mod actions;
mod builder;
pub mod components;
pub mod input;
mod outcome;
mod render;
mod runtime;
mod search;
mod state;
pub mod style;
mod trending;


pub use builder::MovieSearch;
pub use outcome::SearchOutcome;
pub use runtime::run;
pub use state::App;
