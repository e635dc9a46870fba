//! Screen controllers.
//!
//! Controllers run on the host UI thread only; they are not `Send`.

pub mod location_screen;
pub mod map_screen;
