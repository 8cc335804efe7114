//! Embedded sample data
//!
//! Sample dictionary and games compiled into the binary at build time.

// Include generated lists from build script
include!(concat!(env!("OUT_DIR"), "/words.rs"));
include!(concat!(env!("OUT_DIR"), "/games.rs"));
