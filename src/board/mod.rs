//! The board graph and mill detection.
//!
//! `TopologyBuilder` lays out the three rings and their connectors with
//! deterministic numbering. `Board` owns the positions, triples and the
//! single selection pointer; the mill queries are read-only views over it.

mod mill;
pub mod topology;

pub use topology::{Board, Position, TopologyBuilder, Triple};
