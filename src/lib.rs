//! Library crate root re-exporting launcher, builder, config, and CLI modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod builder;
pub mod cli;
pub mod config;
pub mod launcher;
