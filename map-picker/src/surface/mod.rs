//! Map surface capabilities.
//!
//! A map surface is the host's map widget as the screens see it: something that can show markers,
//! move its camera and report taps. The host creates it asynchronously, so screens receive it
//! through a single-shot [`surface_channel`].

#[cfg(feature = "galileo")]
mod galileo_surface;
mod recording;

#[cfg(feature = "galileo")]
pub use galileo_surface::{GalileoSurface, MarkerFeature, MarkerLayer};
pub use recording::{RecordingSurface, SurfaceOp};

use tokio::sync::oneshot;

use crate::api::types::{Coordinate, Marker};
use crate::core::error::PickerError;

/// Map widget provided by the host.
pub trait MapSurface {
    /// Adds a marker to the map.
    fn add_marker(&mut self, marker: Marker);
    /// Removes all markers from the map.
    fn clear(&mut self);
    /// Moves the camera center to the given position, keeping the zoom level.
    fn move_camera(&mut self, target: Coordinate);
    /// Asks the widget to recognize and report the given kinds of events.
    fn subscribe(&mut self, subscription: EventSubscription);

    /// Markers currently shown.
    fn markers(&self) -> &[Marker];
    /// Current camera center, if the camera was ever positioned.
    fn camera(&self) -> Option<Coordinate>;
}

/// Receiver of map click events.
pub trait MapEventListener {
    /// Called on a single tap on the map.
    fn on_map_click(&mut self, position: Coordinate);
    /// Called on a long press on the map.
    fn on_map_long_click(&mut self, position: Coordinate);
}

/// Event reported by the map surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapEvent {
    /// Single tap at the given position.
    Tap(Coordinate),
    /// Long press at the given position.
    LongPress(Coordinate),
}

/// Kinds of events a listener wants to receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventSubscription {
    /// Single taps.
    pub tap: bool,
    /// Long presses.
    pub long_press: bool,
}

impl EventSubscription {
    /// Subscription to every event kind.
    pub const ALL: Self = Self {
        tap: true,
        long_press: true,
    };

    /// Whether the event is of a subscribed kind.
    pub fn accepts(&self, event: &MapEvent) -> bool {
        match event {
            MapEvent::Tap(_) => self.tap,
            MapEvent::LongPress(_) => self.long_press,
        }
    }
}

/// Whether an event should be passed on to the next handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventPropagation {
    /// The event was not handled.
    Propagate,
    /// The event was consumed.
    Stop,
}

/// Host side of a surface request. Resolve it once the map widget is ready.
#[derive(Debug)]
pub struct SurfaceRequest<S> {
    sender: oneshot::Sender<S>,
}

impl<S> SurfaceRequest<S> {
    /// Hands the ready surface to the requesting screen.
    ///
    /// Returns the surface back if the screen is gone.
    pub fn resolve(self, surface: S) -> Result<(), S> {
        self.sender.send(surface)
    }
}

/// Screen side of a surface request.
#[derive(Debug)]
pub struct PendingSurface<S> {
    receiver: oneshot::Receiver<S>,
}

impl<S> PendingSurface<S> {
    /// Takes the surface if the host has already provided it.
    pub fn try_take(&mut self) -> Result<Option<S>, PickerError> {
        match self.receiver.try_recv() {
            Ok(surface) => Ok(Some(surface)),
            Err(oneshot::error::TryRecvError::Empty) => Ok(None),
            Err(oneshot::error::TryRecvError::Closed) => Err(PickerError::SurfaceRequestDropped),
        }
    }

    /// Waits until the host provides the surface.
    pub async fn wait(self) -> Result<S, PickerError> {
        self.receiver
            .await
            .map_err(|_| PickerError::SurfaceRequestDropped)
    }
}

/// Creates a single-shot channel over which the host delivers a ready map surface.
pub fn surface_channel<S>() -> (SurfaceRequest<S>, PendingSurface<S>) {
    let (sender, receiver) = oneshot::channel();
    (SurfaceRequest { sender }, PendingSurface { receiver })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_take_before_and_after_resolve() {
        let (request, mut pending) = surface_channel::<RecordingSurface>();
        assert!(matches!(pending.try_take(), Ok(None)));

        assert!(request.resolve(RecordingSurface::default()).is_ok());
        assert!(matches!(pending.try_take(), Ok(Some(_))));
    }

    #[test]
    fn dropped_request_is_reported() {
        let (request, mut pending) = surface_channel::<RecordingSurface>();
        drop(request);
        assert!(matches!(
            pending.try_take(),
            Err(PickerError::SurfaceRequestDropped)
        ));
    }

    #[test]
    fn resolve_after_screen_is_gone_returns_surface() {
        let (request, pending) = surface_channel::<RecordingSurface>();
        drop(pending);
        assert!(request.resolve(RecordingSurface::default()).is_err());
    }

    #[tokio::test]
    async fn wait_resolves_with_surface() {
        let (request, pending) = surface_channel::<RecordingSurface>();
        assert!(request.resolve(RecordingSurface::default()).is_ok());
        let surface = pending.wait().await.expect("surface was provided");
        assert!(surface.markers().is_empty());
    }

    #[test]
    fn subscription_filters_events() {
        let taps_only = EventSubscription {
            tap: true,
            long_press: false,
        };
        let position = Coordinate::new(0.0, 0.0);
        assert!(taps_only.accepts(&MapEvent::Tap(position)));
        assert!(!taps_only.accepts(&MapEvent::LongPress(position)));
        assert!(!EventSubscription::default().accepts(&MapEvent::Tap(position)));
    }
}
