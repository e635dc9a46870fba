use std::sync::Arc;

use galileo::galileo_types::geo::impls::GeoPoint2d;
use galileo::galileo_types::geo::{Crs, GeoPoint, NewGeoPoint};
use galileo::galileo_types::geometry_type::GeoSpace2d;
use galileo::layer::feature_layer::{Feature, FeatureId};
use galileo::layer::FeatureLayer;
use galileo::symbol::CirclePointSymbol;
use galileo::{Color, Map, MapBuilder};
use log::debug;
use parking_lot::RwLock;

use crate::api::config::PickerConfig;
use crate::api::types::{Coordinate, Marker};
use crate::surface::{EventSubscription, MapSurface};

const MARKER_COLOR: Color = Color::rgba(226, 61, 40, 255);
const MARKER_SIZE: f64 = 16.0;

/// Marker as a galileo feature.
pub struct MarkerFeature {
    point: GeoPoint2d,
    title: Option<String>,
}

impl MarkerFeature {
    fn new(marker: &Marker) -> Self {
        Self {
            point: GeoPoint2d::latlon(marker.position.latitude, marker.position.longitude),
            title: marker.title.clone(),
        }
    }

    /// Label of the marker.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}

impl Feature for MarkerFeature {
    type Geom = GeoPoint2d;

    fn geometry(&self) -> &Self::Geom {
        &self.point
    }
}

/// Layer the markers of a [`GalileoSurface`] are drawn on.
pub type MarkerLayer = FeatureLayer<GeoPoint2d, MarkerFeature, CirclePointSymbol, GeoSpace2d>;

/// Map surface backed by a galileo [`Map`].
///
/// The camera is the galileo map view. Markers are drawn by a feature layer added on top of the
/// map's layers.
pub struct GalileoSurface {
    map: Map,
    layer: Arc<RwLock<MarkerLayer>>,
    markers: Vec<Marker>,
    subscription: EventSubscription,
}

impl GalileoSurface {
    /// Creates a surface with an empty map centered on the configured default marker.
    pub fn new(config: &PickerConfig) -> Self {
        let center = config.default_marker;
        let map = MapBuilder::default()
            .with_latlon(center.latitude, center.longitude)
            .with_z_level(config.zoom_level)
            .build();

        Self::from_map(map)
    }

    /// Wraps an existing map, adding the marker layer on top of its layers.
    pub fn from_map(mut map: Map) -> Self {
        let layer = Arc::new(RwLock::new(MarkerLayer::new(
            vec![],
            CirclePointSymbol::new(MARKER_COLOR, MARKER_SIZE),
            Crs::WGS84,
        )));
        map.layers_mut().push(layer.clone());

        Self {
            map,
            layer,
            markers: Vec::new(),
            subscription: EventSubscription::default(),
        }
    }

    /// The underlying galileo map.
    pub fn map(&self) -> &Map {
        &self.map
    }

    /// The layer markers are drawn on. It is also part of [`GalileoSurface::map`]'s layers.
    pub fn marker_layer(&self) -> Arc<RwLock<MarkerLayer>> {
        self.layer.clone()
    }

    /// Current event subscription.
    pub fn subscription(&self) -> EventSubscription {
        self.subscription
    }
}

impl MapSurface for GalileoSurface {
    fn add_marker(&mut self, marker: Marker) {
        debug!("Adding marker {:?} at {}", marker.title, marker.position);
        {
            let mut layer = self.layer.write();
            layer.features_mut().add(MarkerFeature::new(&marker));
            layer.update_all_features();
        }
        self.markers.push(marker);
        self.map.redraw();
    }

    fn clear(&mut self) {
        {
            let mut layer = self.layer.write();
            let ids: Vec<FeatureId> = layer.features().iter().map(|(id, _)| id).collect();
            for id in ids {
                layer.features_mut().remove(id);
            }
            layer.update_all_features();
        }
        self.markers.clear();
        self.map.redraw();
    }

    fn move_camera(&mut self, target: Coordinate) {
        let center = GeoPoint2d::latlon(target.latitude, target.longitude);
        let view = self.map.view().with_position(&center);
        self.map.set_view(view);
    }

    fn subscribe(&mut self, subscription: EventSubscription) {
        self.subscription = subscription;
    }

    fn markers(&self) -> &[Marker] {
        &self.markers
    }

    fn camera(&self) -> Option<Coordinate> {
        self.map
            .view()
            .position()
            .map(|position| Coordinate::new(position.lat(), position.lon()))
    }
}
