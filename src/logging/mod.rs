// file: src/logging/mod.rs
// version: 1.0.0
// guid: c4d8e2f6-1a3b-4957-8c0d-6e2f4a8b1c35

//! Logging infrastructure for the provision agent

pub mod logger;
