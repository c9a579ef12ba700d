// src/reporting/mod.rs
//! Console rendering for engine results. The engine itself never prints;
//! everything user-visible funnels through here or the CLI.

pub mod console;
