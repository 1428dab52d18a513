//! Session domain.
//!
//! - [`selector::ActiveSession`]: which conversation is being viewed,
//!   with `None` as the "new, unsaved conversation" sentinel

pub mod selector;
