//! Core value objects shared across the domain.

pub mod question;
