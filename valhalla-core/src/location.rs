//! Routing locations and candidate-edge search options.
//!
//! A [`Location`] is both an input (where to route from, through and to) and
//! part of the route response, where the service echoes the locations back
//! with the response-only fields filled in.

use serde::{Deserialize, Serialize};

use crate::Point;

/// How the route treats a location between the first and the last.
///
/// The first and last locations are always treated as breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    /// U-turns allowed; legs and arrival/departure maneuvers generated.
    Break,
    /// No u-turns; no legs or maneuvers.
    Through,
    /// U-turns allowed; no legs or maneuvers.
    Via,
    /// No u-turns; legs and maneuvers generated.
    BreakThrough,
}

/// Side of the street from which a location may be reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferredSide {
    /// Same side as the locale drives on.
    Same,
    /// Opposite side to the locale's driving side.
    Opposite,
    /// Either side.
    Either,
}

/// Road classification used by [`SearchFilter`] bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadClass {
    /// Motorway.
    Motorway,
    /// Trunk road.
    Trunk,
    /// Primary road.
    Primary,
    /// Secondary road.
    Secondary,
    /// Tertiary road.
    Tertiary,
    /// Unclassified road.
    Unclassified,
    /// Residential street.
    Residential,
    /// Service and other minor roads.
    ServiceOther,
}

/// Filters excluding candidate edges based on their attribution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilter {
    /// Exclude roads marked as tunnels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_tunnel: Option<bool>,
    /// Exclude roads marked as bridges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_bridge: Option<bool>,
    /// Exclude link roads marked as ramps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_ramp: Option<bool>,
    /// Exclude roads closed by live traffic.
    ///
    /// The service rejects requests setting this together with the costing
    /// `ignore_closures` option.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_closures: Option<bool>,
    /// Lowest road class allowed (service default: `service_other`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_road_class: Option<RoadClass>,
    /// Highest road class allowed (service default: `motorway`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_road_class: Option<RoadClass>,
}

/// A location to route from, through or to.
///
/// # Examples
///
/// ```
/// use valhalla_core::Location;
///
/// let mut location = Location::new(48.390394, -4.486076);
/// location.radius = Some(0);
/// let json = serde_json::to_value(&location).unwrap();
/// assert_eq!(json["radius"], 0);
/// assert!(json.get("heading").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
    /// Location type; the service assumes a break when absent.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<LocationType>,
    /// Preferred direction of travel from the location, degrees clockwise
    /// from north.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading: Option<f32>,
    /// How close in degrees a street's angle must be to `heading`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_tolerance: Option<f32>,
    /// Street name hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    /// OpenStreetMap way identifier hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub way_id: Option<u64>,
    /// Minimum number of reachable nodes for a candidate edge to count as
    /// connected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_reachability: Option<u32>,
    /// Search radius in meters for candidate edges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<u32>,
    /// Whether candidate edges are ranked by distance and attribution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank_candidates: Option<bool>,
    /// Side of the street the location must be reached from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_side: Option<PreferredSide>,
    /// Display latitude used for side-of-street detection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_lat: Option<f64>,
    /// Display longitude used for side-of-street detection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_lon: Option<f64>,
    /// Distance in meters beyond which the input is not correlated to the
    /// graph.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_cutoff: Option<f64>,
    /// Distance in meters within which the location snaps to an
    /// intersection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_snap_tolerance: Option<f64>,
    /// Distance in meters from the centerline below which side of street is
    /// ignored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_side_tolerance: Option<f64>,
    /// Distance in meters from the centerline beyond which side of street is
    /// ignored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_side_max_distance: Option<f64>,
    /// Candidate edge filters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_filter: Option<SearchFilter>,
    /// Location or business name, used in narration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// City name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// State name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Postal code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// Country name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Website.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Response only: `left` or `right` for offset break locations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side_of_street: Option<String>,
    /// Response only: expected local time at the location (`YYYY-MM-DDThh:mm`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    /// Response only: index of the location in the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_index: Option<u32>,
}

impl Location {
    /// Create a location with only coordinates set.
    #[must_use]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            ..Self::default()
        }
    }

    /// Set the location type.
    #[must_use]
    pub const fn with_kind(mut self, kind: LocationType) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Set the candidate search radius in meters.
    #[must_use]
    pub const fn with_radius(mut self, radius: u32) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Coordinates of this location.
    #[must_use]
    pub const fn point(&self) -> Point {
        Point::new(self.lat, self.lon)
    }
}

impl From<Point> for Location {
    fn from(point: Point) -> Self {
        Self::new(point.lat, point.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn brest() -> Location {
        Location::new(48.390394, -4.486076)
    }

    #[rstest]
    fn bare_location_serialises_only_coordinates(brest: Location) {
        let value = serde_json::to_value(&brest).expect("serialise location");
        assert_eq!(value, json!({ "lat": 48.390394, "lon": -4.486076 }));
    }

    #[rstest]
    fn unset_radius_is_absent(brest: Location) {
        let value = serde_json::to_value(&brest).expect("serialise location");
        assert!(value.get("radius").is_none());
    }

    #[rstest]
    fn zero_radius_is_present(brest: Location) {
        let value = serde_json::to_value(brest.with_radius(0)).expect("serialise location");
        assert_eq!(value.get("radius"), Some(&json!(0)));
    }

    #[rstest]
    #[case(LocationType::Break, "break")]
    #[case(LocationType::Through, "through")]
    #[case(LocationType::Via, "via")]
    #[case(LocationType::BreakThrough, "break_through")]
    fn location_type_uses_type_key(
        brest: Location,
        #[case] kind: LocationType,
        #[case] expected: &str,
    ) {
        let value = serde_json::to_value(brest.with_kind(kind)).expect("serialise location");
        assert_eq!(value["type"], json!(expected));
    }

    #[rstest]
    fn search_filter_serialises_road_classes(mut brest: Location) {
        brest.search_filter = Some(SearchFilter {
            exclude_tunnel: Some(true),
            min_road_class: Some(RoadClass::ServiceOther),
            max_road_class: Some(RoadClass::Primary),
            ..SearchFilter::default()
        });
        let value = serde_json::to_value(&brest).expect("serialise location");
        assert_eq!(
            value["search_filter"],
            json!({
                "exclude_tunnel": true,
                "min_road_class": "service_other",
                "max_road_class": "primary",
            })
        );
    }

    #[rstest]
    fn response_location_decodes_response_only_fields() {
        let location: Location = serde_json::from_value(json!({
            "type": "break",
            "lat": 48.390394,
            "lon": -4.486076,
            "side_of_street": "right",
            "original_index": 0,
        }))
        .expect("decode location");
        assert_eq!(location.kind, Some(LocationType::Break));
        assert_eq!(location.side_of_street.as_deref(), Some("right"));
        assert_eq!(location.original_index, Some(0));
    }
}
