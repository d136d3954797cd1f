//! Embedded dictionaries
//!
//! Word lists compiled into the binary at build time.

// Include generated dictionary table from build script
include!(concat!(env!("OUT_DIR"), "/dictionaries.rs"));
