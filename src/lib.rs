//! Facade crate for the Valhalla routing service client.
//!
//! This crate re-exports the data model and, behind the `http` feature, the
//! blocking HTTP client.

#![forbid(unsafe_code)]

pub use valhalla_core::{
    Contour, Costing, CostingOptions, DateTime, DateTimeType, DirectionsType, ElevationRequest,
    ElevationResponse, IsochroneRequest, IsochroneResponse, Leg, Location, LocationType,
    Maneuver, Point, PreferredSide, RoadClass, RouteRequest, RouteResponse, RoutingService,
    SearchFilter, ServiceError, ShapeFormat, Summary, Trip, Units, costing,
};

#[cfg(feature = "http")]
pub use valhalla_http::{
    BeforeRequest, Client, ClientBuildError, ClientConfig, ClientError, HookError, TlsConfig,
};
