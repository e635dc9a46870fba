//! Map screen with a single pickable marker.
//!
//! The screen owns two coordinate text fields and, once the host provides it, the map surface.
//! A tap on the map moves the marker there and writes its coordinates into the fields. A long
//! press does the opposite: it reads the fields and moves the marker to the typed coordinates.

use std::marker::PhantomData;

use log::{debug, info, warn};

use crate::api::config::{InvalidInputPolicy, PickerConfig};
use crate::api::types::{Coordinate, CoordinateField, Marker};
use crate::core::error::PickerError;
use crate::host::{Navigator, Screen, TextField};
use crate::surface::{
    surface_channel, EventPropagation, EventSubscription, MapEvent, MapEventListener, MapSurface,
    PendingSurface, SurfaceRequest,
};

/// Lifecycle state of a [`MapScreen`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    /// The host has not provided the map surface yet.
    AwaitingSurface,
    /// The map surface is attached and events are handled.
    Ready,
}

/// Controller of the map screen.
///
/// The screen goes from [`ScreenState::AwaitingSurface`] to [`ScreenState::Ready`] exactly once,
/// when the host delivers the map surface. Map operations before that are rejected with
/// [`PickerError::SurfaceNotReady`].
pub struct MapScreen<S, F> {
    latitude: F,
    longitude: F,
    navigator: Box<dyn Navigator>,
    config: PickerConfig,
    pending: Option<PendingSurface<S>>,
    surface: Option<S>,
    subscription: EventSubscription,
    // Handlers are dispatched from the host UI thread only.
    _ui_thread: PhantomData<*const ()>,
}

impl<S: MapSurface, F: TextField> MapScreen<S, F> {
    /// Creates the screen and requests the map surface.
    ///
    /// The returned request must be resolved by the host once its map widget is ready. Nothing is
    /// drawn on the map before that.
    pub fn create(
        latitude_field: F,
        longitude_field: F,
        navigator: impl Navigator + 'static,
        config: PickerConfig,
    ) -> (Self, SurfaceRequest<S>) {
        let (request, pending) = surface_channel();
        let screen = Self {
            latitude: latitude_field,
            longitude: longitude_field,
            navigator: Box::new(navigator),
            config,
            pending: Some(pending),
            surface: None,
            subscription: EventSubscription::default(),
            _ui_thread: PhantomData,
        };

        debug!("Map screen created, waiting for map surface");
        (screen, request)
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ScreenState {
        if self.surface.is_some() {
            ScreenState::Ready
        } else {
            ScreenState::AwaitingSurface
        }
    }

    /// The map surface, once ready.
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Latitude text field.
    pub fn latitude_field(&self) -> &F {
        &self.latitude
    }

    /// Mutable latitude text field, for user input.
    pub fn latitude_field_mut(&mut self) -> &mut F {
        &mut self.latitude
    }

    /// Longitude text field.
    pub fn longitude_field(&self) -> &F {
        &self.longitude
    }

    /// Mutable longitude text field, for user input.
    pub fn longitude_field_mut(&mut self) -> &mut F {
        &mut self.longitude
    }

    /// Screen configuration.
    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Attaches the map surface if the host has already provided it. Never blocks.
    pub fn poll_surface(&mut self) -> Result<ScreenState, PickerError> {
        let Some(pending) = self.pending.as_mut() else {
            return Ok(self.state());
        };

        match pending.try_take() {
            Ok(Some(surface)) => {
                self.on_surface_ready(surface)?;
                Ok(ScreenState::Ready)
            }
            Ok(None) => Ok(ScreenState::AwaitingSurface),
            Err(err) => {
                self.pending = None;
                Err(err)
            }
        }
    }

    /// Waits for the host to provide the map surface and attaches it.
    pub async fn wait_for_surface(&mut self) -> Result<(), PickerError> {
        if self.surface.is_some() {
            return Ok(());
        }

        let pending = self
            .pending
            .take()
            .ok_or(PickerError::SurfaceRequestDropped)?;
        let surface = pending.wait().await?;
        self.on_surface_ready(surface)
    }

    /// Attaches the ready map surface.
    ///
    /// Subscribes to taps and long presses, and shows the default marker with the camera
    /// centered on it.
    pub fn on_surface_ready(&mut self, mut surface: S) -> Result<(), PickerError> {
        if self.surface.is_some() {
            warn!("Map surface is already attached, ignoring the new one");
            return Err(PickerError::SurfaceAlreadyAttached);
        }

        self.pending = None;
        self.subscription = EventSubscription::ALL;
        surface.subscribe(self.subscription);

        let marker =
            Marker::new(self.config.default_marker).with_title(&self.config.default_marker_title);
        place_single_marker(&mut surface, marker);
        self.surface = Some(surface);

        info!(
            "Map surface ready, showing default marker at {}",
            self.config.default_marker
        );
        Ok(())
    }

    /// Moves the marker to the tapped position and shows its coordinates in the text fields.
    pub fn on_tap(&mut self, position: Coordinate) -> Result<(), PickerError> {
        let surface = self.surface.as_mut().ok_or(PickerError::SurfaceNotReady)?;

        self.latitude.set_text(&position.latitude_text());
        self.longitude.set_text(&position.longitude_text());
        place_single_marker(surface, Marker::new(position));

        debug!("Marker moved to tapped position {position}");
        Ok(())
    }

    /// Moves the marker to the coordinates typed into the text fields.
    ///
    /// The position of the press itself is not used. If a field does not hold a number, the map
    /// is left unchanged and the fields are flagged according to
    /// [`PickerConfig::invalid_input`]. Invalid input is not an error for the caller.
    pub fn on_long_press(&mut self, _position: Coordinate) -> Result<(), PickerError> {
        let latitude = CoordinateField::Latitude.parse(&self.latitude.text());
        let longitude = CoordinateField::Longitude.parse(&self.longitude.text());

        match (latitude, longitude) {
            (Ok(latitude), Ok(longitude)) => {
                let Some(surface) = self.surface.as_mut() else {
                    return Err(PickerError::SurfaceNotReady);
                };

                let position = Coordinate::new(latitude, longitude);
                let marker =
                    Marker::new(position).with_title(&self.config.specified_location_title);
                place_single_marker(surface, marker);

                debug!("Marker moved to specified position {position}");
            }
            (latitude, longitude) => {
                if self.surface.is_none() {
                    return Err(PickerError::SurfaceNotReady);
                }
                self.report_invalid_input(latitude.err(), longitude.err());
            }
        }

        Ok(())
    }

    /// Opens the location screen. Works in any state and does not touch the map.
    pub fn navigate_to_other_screen(&mut self) {
        info!("Opening location screen");
        self.navigator.launch(Screen::Location);
    }

    /// Dispatches an event reported by the map surface.
    pub fn handle_event(&mut self, event: &MapEvent) -> EventPropagation {
        if self.surface.is_none() {
            warn!("Map event {event:?} received before the map surface is ready");
            return EventPropagation::Propagate;
        }

        if !self.subscription.accepts(event) {
            return EventPropagation::Propagate;
        }

        match *event {
            MapEvent::Tap(position) => self.on_map_click(position),
            MapEvent::LongPress(position) => self.on_map_long_click(position),
        }

        EventPropagation::Stop
    }

    fn report_invalid_input(
        &mut self,
        latitude: Option<PickerError>,
        longitude: Option<PickerError>,
    ) {
        for err in latitude.iter().chain(longitude.iter()) {
            warn!("Cannot place marker: {err}");
        }

        let (flag_latitude, flag_longitude) = match self.config.invalid_input {
            InvalidInputPolicy::MarkBoth => (true, true),
            InvalidInputPolicy::MarkOffending => (latitude.is_some(), longitude.is_some()),
        };

        if flag_latitude {
            self.latitude.set_error(Some(self.config.latitude_error.as_str()));
        }
        if flag_longitude {
            self.longitude.set_error(Some(self.config.longitude_error.as_str()));
        }
    }
}

impl<S: MapSurface, F: TextField> MapEventListener for MapScreen<S, F> {
    fn on_map_click(&mut self, position: Coordinate) {
        if let Err(err) = self.on_tap(position) {
            warn!("Tap at {position} ignored: {err}");
        }
    }

    fn on_map_long_click(&mut self, position: Coordinate) {
        if let Err(err) = self.on_long_press(position) {
            warn!("Long press at {position} ignored: {err}");
        }
    }
}

/// Replaces whatever is on the map with the given marker and centers the camera on it.
fn place_single_marker(surface: &mut impl MapSurface, marker: Marker) {
    let position = marker.position;
    surface.clear();
    surface.add_marker(marker);
    surface.move_camera(position);
}
