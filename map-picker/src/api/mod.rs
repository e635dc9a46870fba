//! Plain data types shared between the screens and the host.
//!
//! All types here are host-facing: they cross the boundary between the screen controllers and
//! whatever toolkit renders them.

pub mod config;
pub mod types;
