//! Game rules: the command layer and the legal-move generator.
//!
//! Commands validate and apply one action atomically. The `legal` queries
//! enumerate what a command would accept, so hint highlighting and the
//! computer player never disagree with the commands themselves.

pub mod commands;
pub mod legal;

pub use commands::CommandContext;
