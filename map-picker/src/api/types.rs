//! Coordinates and markers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Geographic position with latitude and longitude in degrees.
///
/// Latitude is expected in `[-90, 90]` and longitude in `[-180, 180]`, but the values are never
/// validated: anything that parses as a number is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Latitude as plain decimal text, as it is written into the latitude field.
    pub fn latitude_text(&self) -> String {
        self.latitude.to_string()
    }

    /// Longitude as plain decimal text, as it is written into the longitude field.
    pub fn longitude_text(&self) -> String {
        self.longitude.to_string()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// One of the two editable coordinate components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateField {
    /// Latitude field.
    Latitude,
    /// Longitude field.
    Longitude,
}

impl CoordinateField {
    /// Parses the field text as a finite floating point number.
    ///
    /// Surrounding whitespace is ignored. `inf` and `NaN` spellings are rejected.
    pub fn parse(self, input: &str) -> Result<f64, crate::PickerError> {
        match input.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(crate::PickerError::InvalidNumericInput {
                field: self,
                input: input.to_owned(),
            }),
        }
    }
}

impl fmt::Display for CoordinateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateField::Latitude => f.write_str("latitude"),
            CoordinateField::Longitude => f.write_str("longitude"),
        }
    }
}

/// A point annotation shown on the map surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// Where the marker is placed.
    pub position: Coordinate,
    /// Label of the marker. `None` for unlabeled markers.
    pub title: Option<String>,
}

impl Marker {
    /// Creates an unlabeled marker.
    pub fn new(position: Coordinate) -> Self {
        Self {
            position,
            title: None,
        }
    }

    /// Sets the label of the marker. An empty title leaves the marker unlabeled.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        self.title = (!title.is_empty()).then_some(title);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_text_round_trips_through_parse() {
        let coordinate = Coordinate::new(19.8077463, -99.4077038);
        assert_eq!(coordinate.latitude_text(), "19.8077463");
        assert_eq!(coordinate.longitude_text(), "-99.4077038");
        let parsed = CoordinateField::Latitude.parse(&coordinate.latitude_text());
        assert_eq!(parsed.ok(), Some(coordinate.latitude));
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(CoordinateField::Longitude.parse(" -99.1332 \n").ok(), Some(-99.1332));
    }

    #[test]
    fn parse_rejects_non_numbers() {
        for input in ["abc", "", "19,4326", "1.2.3", "inf", "NaN", "-infinity", "Infinity"] {
            let err = CoordinateField::Latitude.parse(input);
            assert!(
                matches!(
                    err,
                    Err(crate::PickerError::InvalidNumericInput {
                        field: CoordinateField::Latitude,
                        ..
                    })
                ),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn empty_title_is_unlabeled() {
        let marker = Marker::new(Coordinate::new(1.0, 2.0)).with_title("");
        assert_eq!(marker.title, None);

        let marker = marker.with_title("Mexico");
        assert_eq!(marker.title.as_deref(), Some("Mexico"));
    }
}
