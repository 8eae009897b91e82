// file: src/system/mod.rs
// version: 1.0.0
// guid: a7b1c5d9-2e46-4f80-b3a5-7c9d1e3f5a72

//! External command execution

pub mod local;
pub mod runner;
#[cfg(test)]
pub mod testing;

pub use local::LocalRunner;
pub use runner::CommandRunner;
