// file: src/cli/mod.rs
// version: 1.0.0
// guid: e3f7a1b5-8c02-4dba-f9e1-3a5b7c9d1e38

//! Command line interface

pub mod args;
pub mod commands;
