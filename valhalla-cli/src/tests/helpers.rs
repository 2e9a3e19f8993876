//! Test helpers for writing request files and canned responses.

use camino::Utf8Path;
use std::fs;
use valhalla_core::{Costing, Location, RouteRequest, RouteResponse, Summary, Trip};

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents)
        .unwrap_or_else(|err| panic!("failed to write {path}: {err}"));
}

pub(super) fn brest_request() -> RouteRequest {
    RouteRequest::new(
        vec![
            Location::new(48.390394, -4.486076),
            Location::new(48.45252, -4.25252),
        ],
        Costing::Auto,
    )
}

pub(super) fn brest_response() -> RouteResponse {
    RouteResponse {
        trip: Trip {
            locations: brest_request().locations,
            legs: Vec::new(),
            summary: Summary {
                time: 1260.2,
                length: 22.4,
                ..Summary::default()
            },
            status: 0,
            status_message: "Found route between points".to_owned(),
            units: None,
            language: None,
        },
        alternates: None,
        id: Some("brest".to_owned()),
    }
}
