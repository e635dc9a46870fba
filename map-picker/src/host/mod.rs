//! Host capabilities the screens depend on besides the map surface.

mod fields;
mod location;
mod navigation;

pub use fields::{EditText, TextField};
pub use location::{
    Location, LocationError, LocationPriority, LocationProvider, LocationRequest, Permission,
    PermissionHost, Prompt,
};
pub use navigation::{NavigationLog, Navigator, Screen};
