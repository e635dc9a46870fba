use std::time::Duration;

use thiserror::Error;

/// Device position reported by the location service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Horizontal accuracy in meters, if known.
    pub accuracy: Option<f32>,
}

impl Location {
    /// Creates a location with unknown accuracy.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            accuracy: None,
        }
    }
}

/// Power/accuracy trade-off of location updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationPriority {
    /// Most accurate position available, typically GPS.
    HighAccuracy,
    /// City block level accuracy.
    Balanced,
}

/// Parameters of periodic location updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationRequest {
    /// Requested accuracy.
    pub priority: LocationPriority,
    /// Desired interval between updates.
    pub interval: Duration,
    /// Hold the first update back until an accurate fix is available.
    pub wait_for_accurate: bool,
}

/// Error from the location service.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LocationError {
    /// The location permission is missing or was revoked.
    #[error("location permission is not available")]
    PermissionUnavailable,
    /// The service failed for another reason.
    #[error("location is unavailable: {0}")]
    Unavailable(String),
}

/// Device location service.
pub trait LocationProvider {
    /// Last known position, if the device has one.
    fn last_location(&mut self) -> Result<Option<Location>, LocationError>;
    /// Starts periodic updates. Updates are delivered by the host to the location screen.
    fn request_updates(&mut self, request: LocationRequest) -> Result<(), LocationError>;
    /// Stops periodic updates.
    fn remove_updates(&mut self);
}

/// Runtime permissions used by the location screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    /// Precise location.
    FineLocation,
    /// Approximate location.
    CoarseLocation,
}

/// Dialogs the location screen may ask the host to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// Explains why location access is needed and offers to ask again.
    Rationale,
    /// Permissions were permanently denied; offers to open the app settings.
    Settings,
}

/// Host side of the runtime permission flow.
pub trait PermissionHost {
    /// Whether the permission is currently granted.
    fn is_granted(&self, permission: Permission) -> bool;
    /// Whether the host recommends explaining the permission before asking.
    fn should_show_rationale(&self, permission: Permission) -> bool;
    /// Asks the user for the permissions. The answer comes back through the screen.
    fn request(&mut self, permissions: &[Permission]);
    /// Shows a yes/no dialog. The answer comes back through the screen.
    fn prompt(&mut self, prompt: Prompt);
    /// Shows a short transient message.
    fn notify(&mut self, message: &str);
    /// Opens the system settings page of the application.
    fn open_app_settings(&mut self);
}
