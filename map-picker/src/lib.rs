//! Map picker screens.
//!
//! The crate drives a single-marker map screen: the user taps the map to drop a marker and read
//! its coordinates, or types coordinates and long-presses the map to place a marker exactly
//! there. A sibling location screen shows the live device position.
//!
//! Everything the screens need from the host (map widget, text fields, navigation, location
//! service) is expressed as traits in [`surface`] and [`host`]. The host resolves the map surface
//! asynchronously and then dispatches map events to the screen from its UI thread:
//!
//! ```
//! use map_picker::host::{EditText, NavigationLog, TextField};
//! use map_picker::surface::{MapEvent, MapSurface, RecordingSurface};
//! use map_picker::{Coordinate, MapScreen, PickerConfig};
//!
//! let (mut screen, request) = MapScreen::<RecordingSurface, EditText>::create(
//!     EditText::default(),
//!     EditText::default(),
//!     NavigationLog::default(),
//!     PickerConfig::default(),
//! );
//!
//! request.resolve(RecordingSurface::default());
//! screen.poll_surface().expect("surface was provided");
//!
//! screen.handle_event(&MapEvent::Tap(Coordinate::new(19.4326, -99.1332)));
//! assert_eq!(screen.latitude_field().text(), "19.4326");
//! assert_eq!(screen.surface().map(|s| s.markers().len()), Some(1));
//! ```

pub mod api;
pub mod core;
pub mod host;
pub mod screens;
pub mod surface;

pub use api::config::{InvalidInputPolicy, LocationConfig, LogConfig, PickerConfig};
pub use api::types::{Coordinate, CoordinateField, Marker};
pub use crate::core::error::{ConfigError, PickerError};
pub use screens::location_screen::LocationScreen;
pub use screens::map_screen::{MapScreen, ScreenState};
