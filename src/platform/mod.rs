// portable-dirs - platform/mod.rs
//
// Platform abstraction layer: everything that asks the OS something.
// Dependencies: standard library, core (tables, codecs), util.
// Must NOT depend on: app.

pub mod base;
pub mod config;
pub mod dirs;
pub mod exe;
pub mod fs;
pub mod native;
