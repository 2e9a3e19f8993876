//! Turn-by-turn route requests and responses.

use serde::{Deserialize, Serialize};

use crate::{Costing, CostingOptions, DateTime, DirectionsType, Location, Units};

/// Input for the route endpoint.
///
/// # Examples
///
/// ```
/// use valhalla_core::{Costing, Location, RouteRequest, Units};
///
/// let request = RouteRequest::new(
///     vec![
///         Location::new(48.390394, -4.486076),
///         Location::new(48.45252, -4.25252),
///     ],
///     Costing::Auto,
/// )
/// .with_units(Units::Kilometers);
/// let json = serde_json::to_value(&request).unwrap();
/// assert_eq!(json["costing"], "auto");
/// assert_eq!(json["units"], "kilometers");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    /// Two or more locations, visited in order.
    pub locations: Vec<Location>,
    /// Costing model.
    pub costing: Costing,
    /// Options for the costing model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub costing_options: Option<CostingOptions>,
    /// Distance units.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<Units>,
    /// Narrative language as an IETF tag, such as `fr-FR`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Amount of narrative returned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directions_type: Option<DirectionsType>,
    /// Number of alternate routes wanted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternates: Option<u32>,
    /// Locations whose nearest roads are avoided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_locations: Option<Vec<Location>>,
    /// Departure or arrival time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<DateTime>,
    /// Request name echoed back in the response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl RouteRequest {
    /// Create a request visiting `locations` with the given costing model.
    #[must_use]
    pub const fn new(locations: Vec<Location>, costing: Costing) -> Self {
        Self {
            locations,
            costing,
            costing_options: None,
            units: None,
            language: None,
            directions_type: None,
            alternates: None,
            exclude_locations: None,
            date_time: None,
            id: None,
        }
    }

    /// Set the costing options.
    #[must_use]
    pub fn with_costing_options(mut self, options: CostingOptions) -> Self {
        self.costing_options = Some(options);
        self
    }

    /// Set the distance units.
    #[must_use]
    pub const fn with_units(mut self, units: Units) -> Self {
        self.units = Some(units);
        self
    }

    /// Set the request identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Output of the route endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResponse {
    /// The best route.
    pub trip: Trip,
    /// Alternate routes, when requested and found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternates: Option<Vec<Alternate>>,
    /// Echo of the request identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// An alternate route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternate {
    /// Alternate trip.
    pub trip: Trip,
}

/// A computed trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// Locations as correlated by the service.
    #[serde(default)]
    pub locations: Vec<Location>,
    /// One leg between each pair of break locations.
    #[serde(default)]
    pub legs: Vec<Leg>,
    /// Whole-trip summary.
    pub summary: Summary,
    /// Status code, 0 on success.
    #[serde(default)]
    pub status: i32,
    /// Status message.
    #[serde(default)]
    pub status_message: String,
    /// Units of every length in the trip.
    #[serde(default)]
    pub units: Option<Units>,
    /// Narrative language.
    #[serde(default)]
    pub language: Option<String>,
}

/// A trip leg.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    /// Maneuvers along the leg.
    #[serde(default)]
    pub maneuvers: Vec<Maneuver>,
    /// Leg summary.
    pub summary: Summary,
    /// Encoded polyline (six digits of precision).
    #[serde(default)]
    pub shape: String,
}

/// Time, length and extent of a trip or leg.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Estimated time in seconds.
    pub time: f64,
    /// Length in the trip's units.
    pub length: f64,
    /// Whether the route uses toll roads.
    #[serde(default)]
    pub has_toll: bool,
    /// Whether the route uses highways.
    #[serde(default)]
    pub has_highway: bool,
    /// Whether the route uses ferries.
    #[serde(default)]
    pub has_ferry: bool,
    /// Whether the route uses time-restricted roads.
    #[serde(default)]
    pub has_time_restrictions: bool,
    /// Bounding box minimum latitude.
    #[serde(default)]
    pub min_lat: f64,
    /// Bounding box minimum longitude.
    #[serde(default)]
    pub min_lon: f64,
    /// Bounding box maximum latitude.
    #[serde(default)]
    pub max_lat: f64,
    /// Bounding box maximum longitude.
    #[serde(default)]
    pub max_lon: f64,
    /// Cost of the route as computed by the costing model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
}

/// A single guidance maneuver.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Maneuver {
    /// Maneuver type code.
    #[serde(rename = "type")]
    pub kind: u32,
    /// Written instruction.
    #[serde(default)]
    pub instruction: String,
    /// Instruction to speak before the transition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbal_pre_transition_instruction: Option<String>,
    /// Instruction to speak after the transition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbal_post_transition_instruction: Option<String>,
    /// Street names along the maneuver.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_names: Option<Vec<String>>,
    /// Estimated time in seconds.
    pub time: f64,
    /// Length in the trip's units.
    pub length: f64,
    /// Cost of the maneuver.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    /// First shape index covered.
    pub begin_shape_index: usize,
    /// Last shape index covered.
    pub end_shape_index: usize,
    /// Whether the maneuver has a toll.
    #[serde(default)]
    pub toll: bool,
    /// Whether the maneuver uses a highway.
    #[serde(default)]
    pub highway: bool,
    /// Whether the maneuver is rough.
    #[serde(default)]
    pub rough: bool,
    /// Whether the maneuver uses a ferry.
    #[serde(default)]
    pub ferry: bool,
    /// Travel mode, such as `drive` or `pedestrian`.
    #[serde(default)]
    pub travel_mode: String,
    /// Travel type, such as `car` or `foot`.
    #[serde(default)]
    pub travel_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn brest_request() -> RouteRequest {
        RouteRequest::new(
            vec![
                Location::new(48.390394, -4.486076),
                Location::new(48.45252, -4.25252),
            ],
            Costing::Auto,
        )
    }

    #[rstest]
    fn minimal_request_serialises_required_fields(brest_request: RouteRequest) {
        let value = serde_json::to_value(&brest_request).expect("serialise");
        assert_eq!(
            value,
            json!({
                "locations": [
                    { "lat": 48.390394, "lon": -4.486076 },
                    { "lat": 48.45252, "lon": -4.25252 },
                ],
                "costing": "auto",
            })
        );
    }

    #[rstest]
    fn zero_alternates_is_sent(mut brest_request: RouteRequest) {
        brest_request.alternates = Some(0);
        let value = serde_json::to_value(&brest_request).expect("serialise");
        assert_eq!(value["alternates"], json!(0));
    }

    #[rstest]
    fn response_decodes_trip_legs_and_maneuvers() {
        let response: RouteResponse = serde_json::from_value(json!({
            "trip": {
                "locations": [
                    { "type": "break", "lat": 48.390394, "lon": -4.486076, "original_index": 0 },
                    { "type": "break", "lat": 48.45252, "lon": -4.25252, "original_index": 1 },
                ],
                "legs": [{
                    "maneuvers": [{
                        "type": 1,
                        "instruction": "Drive east on Rue de Siam.",
                        "street_names": ["Rue de Siam"],
                        "time": 12.5,
                        "length": 0.2,
                        "begin_shape_index": 0,
                        "end_shape_index": 4,
                        "travel_mode": "drive",
                        "travel_type": "car",
                    }],
                    "summary": { "time": 1260.2, "length": 22.4 },
                    "shape": "wzvmrBxalf|GcCrX}A|Nu@jI",
                }],
                "summary": {
                    "time": 1260.2,
                    "length": 22.4,
                    "has_highway": true,
                    "min_lat": 48.390394,
                    "min_lon": -4.486076,
                    "max_lat": 48.45252,
                    "max_lon": -4.25252,
                },
                "status": 0,
                "status_message": "Found route between points",
                "units": "kilometers",
                "language": "en-US",
            },
            "id": "brest",
        }))
        .expect("decode route");

        assert_eq!(response.id.as_deref(), Some("brest"));
        assert_eq!(response.trip.locations.len(), 2);
        assert_eq!(response.trip.units, Some(Units::Kilometers));
        assert!(response.trip.summary.has_highway);
        let leg = response.trip.legs.first().expect("one leg");
        let maneuver = leg.maneuvers.first().expect("one maneuver");
        assert_eq!(maneuver.kind, 1);
        assert_eq!(maneuver.end_shape_index, 4);
        assert_eq!(
            maneuver.street_names.as_deref(),
            Some(&["Rue de Siam".to_owned()][..])
        );
    }
}
