use crate::api::types::{Coordinate, Marker};
use crate::surface::{EventSubscription, MapSurface};

/// Operation performed on a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    /// A marker was added.
    AddMarker(Marker),
    /// Markers were cleared.
    Clear,
    /// The camera was moved.
    MoveCamera(Coordinate),
    /// Event subscription changed.
    Subscribe(EventSubscription),
}

/// In-memory map surface that remembers every operation applied to it.
///
/// Used by headless hosts and tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    markers: Vec<Marker>,
    camera: Option<Coordinate>,
    subscription: EventSubscription,
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    /// Operations in the order they were applied.
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Current event subscription.
    pub fn subscription(&self) -> EventSubscription {
        self.subscription
    }
}

impl MapSurface for RecordingSurface {
    fn add_marker(&mut self, marker: Marker) {
        self.ops.push(SurfaceOp::AddMarker(marker.clone()));
        self.markers.push(marker);
    }

    fn clear(&mut self) {
        self.ops.push(SurfaceOp::Clear);
        self.markers.clear();
    }

    fn move_camera(&mut self, target: Coordinate) {
        self.ops.push(SurfaceOp::MoveCamera(target));
        self.camera = Some(target);
    }

    fn subscribe(&mut self, subscription: EventSubscription) {
        self.ops.push(SurfaceOp::Subscribe(subscription));
        self.subscription = subscription;
    }

    fn markers(&self) -> &[Marker] {
        &self.markers
    }

    fn camera(&self) -> Option<Coordinate> {
        self.camera
    }
}
