//! Embedded word lists
//!
//! Words compiled into the binary at build time: the shipped dictionary and
//! the fallback list used when no dictionary can be loaded.

include!(concat!(env!("OUT_DIR"), "/bundled.rs"));
include!(concat!(env!("OUT_DIR"), "/fallback.rs"));

/// Target returned when the answer list is empty
pub const FALLBACK_TARGET: &str = "TAFEL";
