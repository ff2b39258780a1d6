// portable-dirs - core/mod.rs
//
// Platform-independent logic: roles, the directory tables, the ensurer walk,
// and the native string codecs.
// Dependencies: util (constants, errors), platform::fs (FileSystem trait).

pub mod codec;
pub mod ensure;
pub mod model;
pub mod table;
