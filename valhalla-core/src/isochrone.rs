//! Isochrone requests and their GeoJSON responses.

use geojson::{Feature, FeatureCollection, JsonValue};
use serde::{Deserialize, Serialize};

use crate::{Costing, CostingOptions, DateTime, Location};

/// A single time or distance budget to compute a contour for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contour {
    /// Time budget in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,
    /// Distance budget in kilometers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Hex colour for the contour, without the leading `#`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Contour {
    /// A contour bounded by travel time in minutes.
    #[must_use]
    pub const fn minutes(time: f64) -> Self {
        Self {
            time: Some(time),
            distance: None,
            color: None,
        }
    }

    /// A contour bounded by distance in kilometers.
    #[must_use]
    pub const fn kilometers(distance: f64) -> Self {
        Self {
            time: None,
            distance: Some(distance),
            color: None,
        }
    }
}

/// Input for the isochrone endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsochroneRequest {
    /// Origin locations.
    pub locations: Vec<Location>,
    /// Costing model; the service supports auto, bicycle, pedestrian and
    /// multimodal.
    pub costing: Costing,
    /// Options for the costing model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub costing_options: Option<CostingOptions>,
    /// Budgets to compute contours for.
    pub contours: Vec<Contour>,
    /// Return polygons instead of linestrings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polygons: Option<bool>,
    /// Drop contour parts smaller than this ratio of the largest, 0 to 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub denoise: Option<f32>,
    /// Douglas-Peucker tolerance in meters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generalize: Option<f32>,
    /// Include the input and snapped locations as point features.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_locations: Option<bool>,
    /// Departure or arrival time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<DateTime>,
    /// Request name echoed back in the response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl IsochroneRequest {
    /// Create a request from the given locations, costing and contours.
    #[must_use]
    pub const fn new(locations: Vec<Location>, costing: Costing, contours: Vec<Contour>) -> Self {
        Self {
            locations,
            costing,
            costing_options: None,
            contours,
            polygons: None,
            denoise: None,
            generalize: None,
            show_locations: None,
            date_time: None,
            id: None,
        }
    }

    /// Request polygons rather than linestrings.
    #[must_use]
    pub const fn with_polygons(mut self, polygons: bool) -> Self {
        self.polygons = Some(polygons);
        self
    }
}

/// Output of the isochrone endpoint: a GeoJSON feature collection with one
/// feature per contour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IsochroneResponse(pub FeatureCollection);

impl IsochroneResponse {
    /// All features in the response.
    #[must_use]
    pub fn features(&self) -> &[Feature] {
        &self.0.features
    }

    /// Features carrying a `contour` property, i.e. excluding location points.
    pub fn contours(&self) -> impl Iterator<Item = &Feature> {
        self.0
            .features
            .iter()
            .filter(|feature| feature.contains_property("contour"))
    }

    /// Echo of the request identifier.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.0
            .foreign_members
            .as_ref()
            .and_then(|members| members.get("id"))
            .and_then(JsonValue::as_str)
    }

    /// Unwrap the underlying feature collection.
    #[must_use]
    pub fn into_inner(self) -> FeatureCollection {
        self.0
    }
}
