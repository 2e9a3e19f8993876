//! Core data model for the Valhalla routing service client.
//!
//! These types mirror the JSON contract of the remote service. Optional
//! fields are `Option<T>` and are left out of the serialised payload when
//! unset, so `None` ("let the service decide") and `Some(0)` stay distinct on
//! the wire. No validation happens here; the service reports bad input
//! through [`ServiceError`].

#![forbid(unsafe_code)]

pub mod costing;
pub mod elevation;
mod error;
pub mod isochrone;
pub mod location;
mod options;
mod point;
pub mod route;
mod service;

pub use costing::{Costing, CostingOptions};
pub use elevation::{ElevationRequest, ElevationResponse, ShapeFormat};
pub use error::ServiceError;
pub use isochrone::{Contour, IsochroneRequest, IsochroneResponse};
pub use location::{Location, LocationType, PreferredSide, RoadClass, SearchFilter};
pub use options::{DateTime, DateTimeType, DirectionsType, Units, UnknownDateTimeType};
pub use point::Point;
pub use route::{Leg, Maneuver, RouteRequest, RouteResponse, Summary, Trip};
pub use service::RoutingService;
