//! Elevation (height) requests and responses.

use serde::{Deserialize, Serialize};

use crate::Point;

/// Precision of an encoded polyline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeFormat {
    /// Six digits of precision (the service default).
    Polyline6,
    /// Five digits of precision.
    Polyline5,
}

/// Input for the elevation endpoint.
///
/// Supply either `shape` or `encoded_polyline`.
///
/// # Examples
///
/// ```
/// use valhalla_core::{ElevationRequest, Point};
///
/// let request = ElevationRequest::from_shape(vec![
///     Point::new(42.913581, 0.137267),
///     Point::new(42.913612, 0.137234),
/// ])
/// .with_height_precision(2);
/// let json = serde_json::to_value(&request).unwrap();
/// assert_eq!(json["height_precision"], 2);
/// assert!(json.get("range").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElevationRequest {
    /// Return cumulative distance alongside each height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<bool>,
    /// Resample the input shape every this many meters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resample_distance: Option<u32>,
    /// Decimal places of returned heights: 0, 1 or 2.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_precision: Option<u8>,
    /// Points to sample, in order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<Vec<Point>>,
    /// Precision of `encoded_polyline`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape_format: Option<ShapeFormat>,
    /// Encoded polyline to sample.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoded_polyline: Option<String>,
    /// Request name echoed back in the response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl ElevationRequest {
    /// Sample heights along the given points.
    #[must_use]
    pub fn from_shape(shape: Vec<Point>) -> Self {
        Self {
            shape: Some(shape),
            ..Self::default()
        }
    }

    /// Sample heights along an encoded polyline.
    #[must_use]
    pub fn from_polyline(encoded_polyline: impl Into<String>, format: ShapeFormat) -> Self {
        Self {
            encoded_polyline: Some(encoded_polyline.into()),
            shape_format: Some(format),
            ..Self::default()
        }
    }

    /// Request cumulative ranges alongside heights.
    #[must_use]
    pub const fn with_range(mut self, range: bool) -> Self {
        self.range = Some(range);
        self
    }

    /// Set the number of decimal places in returned heights.
    #[must_use]
    pub const fn with_height_precision(mut self, precision: u8) -> Self {
        self.height_precision = Some(precision);
        self
    }
}

/// Output of the elevation endpoint.
///
/// Heights are `None` where the service has no elevation data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElevationResponse {
    /// Echo of the input shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<Vec<Point>>,
    /// Echo of the input polyline, at six digits of precision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoded_polyline: Option<String>,
    /// `(range, height)` pairs, when `range` was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_height: Option<Vec<(f64, Option<f64>)>>,
    /// Heights in meters, when `range` was not requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Vec<Option<f64>>>,
    /// Echo of the request identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn polyline_request_serialises_format() {
        let request = ElevationRequest::from_polyline("_p~iF~ps|U", ShapeFormat::Polyline5);
        let value = serde_json::to_value(&request).expect("serialise");
        assert_eq!(
            value,
            json!({ "encoded_polyline": "_p~iF~ps|U", "shape_format": "polyline5" })
        );
    }

    #[rstest]
    fn zero_resample_distance_is_sent() {
        let request = ElevationRequest {
            resample_distance: Some(0),
            ..ElevationRequest::default()
        };
        let value = serde_json::to_value(&request).expect("serialise");
        assert_eq!(value, json!({ "resample_distance": 0 }));
    }

    #[rstest]
    fn response_keeps_missing_heights_as_none() {
        let response: ElevationResponse = serde_json::from_value(json!({
            "shape": [{ "lat": 42.913581, "lon": 0.137267 }, { "lat": 42.913612, "lon": 0.137234 }],
            "height": [1524.31, null],
        }))
        .expect("decode elevation");
        assert_eq!(response.height, Some(vec![Some(1524.31), None]));
    }

    #[rstest]
    fn response_decodes_range_height_pairs() {
        let response: ElevationResponse = serde_json::from_value(json!({
            "range_height": [[0, 1524], [4, null]],
        }))
        .expect("decode elevation");
        assert_eq!(
            response.range_height,
            Some(vec![(0.0, Some(1524.0)), (4.0, None)])
        );
    }
}
