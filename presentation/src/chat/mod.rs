//! Interactive chat module
//!
//! Provides a readline-based interactive chat interface against the
//! assistant backend.

pub mod presets;
mod repl;

pub use repl::ChatRepl;
