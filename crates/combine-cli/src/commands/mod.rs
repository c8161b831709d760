//! CLI commands

pub mod collect;
