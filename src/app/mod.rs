// portable-dirs - app/mod.rs
//
// Application layer: role getters over the build target's directory table,
// and the resolution report used by the diagnostic binary.

pub mod paths;
pub mod report;
