//! Screen showing the live device position.
//!
//! The screen walks the user through the location permission flow, then shows the last known
//! position and keeps the labels updated as the host delivers new fixes.

use std::marker::PhantomData;

use log::{debug, error, info, warn};

use crate::api::config::LocationConfig;
use crate::host::{
    Location, LocationError, LocationPriority, LocationProvider, LocationRequest, Navigator,
    Permission, PermissionHost, Prompt, Screen, TextField,
};

const LOCATION_PERMISSIONS: [Permission; 2] =
    [Permission::FineLocation, Permission::CoarseLocation];

const PERMISSION_REQUIRED_MESSAGE: &str = "Location permission is required to show coordinates";
const LOCATION_FAILED_MESSAGE: &str = "Could not get the current location";
const PERMISSION_UNAVAILABLE_MESSAGE: &str = "Location permission is not available";

/// Controller of the location screen.
pub struct LocationScreen<P, H, L> {
    provider: P,
    permissions: H,
    latitude_label: L,
    longitude_label: L,
    navigator: Box<dyn Navigator>,
    config: LocationConfig,
    tracking: bool,
    _ui_thread: PhantomData<*const ()>,
}

impl<P, H, L> LocationScreen<P, H, L>
where
    P: LocationProvider,
    H: PermissionHost,
    L: TextField,
{
    /// Creates the screen. Nothing happens until [`LocationScreen::on_create`].
    pub fn new(
        provider: P,
        permissions: H,
        latitude_label: L,
        longitude_label: L,
        navigator: impl Navigator + 'static,
        config: LocationConfig,
    ) -> Self {
        Self {
            provider,
            permissions,
            latitude_label,
            longitude_label,
            navigator: Box::new(navigator),
            config,
            tracking: false,
            _ui_thread: PhantomData,
        }
    }

    /// Whether location updates have been requested.
    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Latitude label.
    pub fn latitude_label(&self) -> &L {
        &self.latitude_label
    }

    /// Longitude label.
    pub fn longitude_label(&self) -> &L {
        &self.longitude_label
    }

    /// Location service.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Permission host.
    pub fn permission_host(&self) -> &H {
        &self.permissions
    }

    /// Starts the permission flow when the screen is shown.
    pub fn on_create(&mut self) {
        let granted = LOCATION_PERMISSIONS
            .iter()
            .all(|permission| self.permissions.is_granted(*permission));

        if granted {
            self.start_tracking();
        } else if self
            .permissions
            .should_show_rationale(Permission::FineLocation)
        {
            self.permissions.prompt(Prompt::Rationale);
        } else {
            self.permissions.request(&LOCATION_PERMISSIONS);
        }
    }

    /// Handles the user's answer to a prompt shown by [`PermissionHost::prompt`].
    pub fn on_prompt_answer(&mut self, prompt: Prompt, accepted: bool) {
        match (prompt, accepted) {
            (Prompt::Rationale, true) => self.permissions.request(&LOCATION_PERMISSIONS),
            (Prompt::Settings, true) => self.permissions.open_app_settings(),
            (_, false) => self.permissions.notify(PERMISSION_REQUIRED_MESSAGE),
        }
    }

    /// Handles the outcome of a permission request.
    pub fn on_permissions_result(&mut self, results: &[(Permission, bool)]) {
        if !results.is_empty() && results.iter().all(|(_, granted)| *granted) {
            self.start_tracking();
        } else if self
            .permissions
            .should_show_rationale(Permission::FineLocation)
        {
            self.permissions.prompt(Prompt::Rationale);
        } else {
            info!("Location permission denied permanently, offering app settings");
            self.permissions.prompt(Prompt::Settings);
        }
    }

    /// Shows a location fix delivered by the host.
    pub fn on_location_result(&mut self, location: Location) {
        let precision = self.config.label_precision;
        self.latitude_label
            .set_text(&format!("{:.*}", precision, location.latitude));
        self.longitude_label
            .set_text(&format!("{:.*}", precision, location.longitude));

        debug!("Lat: {}, Lon: {}", location.latitude, location.longitude);
    }

    /// Stops location updates when the screen goes away.
    pub fn on_destroy(&mut self) {
        if self.tracking {
            self.provider.remove_updates();
            self.tracking = false;
            debug!("Location updates removed");
        }
    }

    /// Opens the map screen.
    pub fn open_map_screen(&mut self) {
        info!("Opening map screen");
        self.navigator.launch(Screen::MapPicker);
    }

    fn start_tracking(&mut self) {
        match self.provider.last_location() {
            Ok(Some(location)) => self.on_location_result(location),
            Ok(None) => debug!("No last known location"),
            Err(err) => {
                error!("Failed to get last known location: {err}");
                self.permissions.notify(LOCATION_FAILED_MESSAGE);
            }
        }

        let request = LocationRequest {
            priority: LocationPriority::HighAccuracy,
            interval: self.config.update_interval(),
            wait_for_accurate: true,
        };

        match self.provider.request_updates(request) {
            Ok(()) => {
                self.tracking = true;
                info!("Requested location updates every {:?}", request.interval);
            }
            Err(LocationError::PermissionUnavailable) => {
                error!("Location permission error while requesting updates");
                self.permissions.notify(PERMISSION_UNAVAILABLE_MESSAGE);
            }
            Err(err) => {
                warn!("Location updates are unavailable: {err}");
                self.permissions.notify(LOCATION_FAILED_MESSAGE);
            }
        }
    }
}
