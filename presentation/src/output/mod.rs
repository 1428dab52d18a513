//! Terminal output formatting

pub mod markdown;
pub mod sidebar;
pub mod transcript;
