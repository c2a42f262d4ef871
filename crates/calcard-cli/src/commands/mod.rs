//! CLI command implementations for calcard.
//!
//! Each module corresponds to a subcommand (`calcard <command>`).

pub mod template;
pub mod values;
