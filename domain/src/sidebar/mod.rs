//! Sidebar projection.
//!
//! - [`projector::project`]: group an index snapshot by calendar day

pub mod projector;
