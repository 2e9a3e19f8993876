//! Test utilities for code written against [`RoutingService`].
//!
//! [`StubRoutingService`] returns canned responses without any network I/O.

use valhalla_core::{
    ElevationRequest, ElevationResponse, IsochroneRequest, IsochroneResponse, RouteRequest,
    RouteResponse, RoutingService, ServiceError,
};

use crate::ClientError;

/// Stub [`RoutingService`] for tests.
///
/// Each endpoint returns its canned response when one is configured. Calls
/// to an endpoint without one fail with a `404` service error, and a
/// configured error wins over every canned response.
///
/// # Example
///
/// ```
/// use valhalla_core::{ElevationRequest, ElevationResponse, Point, RoutingService};
/// use valhalla_http::test_support::StubRoutingService;
///
/// let stub = StubRoutingService::default().with_elevation(ElevationResponse {
///     height: Some(vec![Some(12.0)]),
///     ..ElevationResponse::default()
/// });
/// let request = ElevationRequest::from_shape(vec![Point::new(48.390394, -4.486076)]);
/// let response = stub.elevation(&request).expect("canned elevation");
/// assert_eq!(response.height, Some(vec![Some(12.0)]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StubRoutingService {
    route: Option<RouteResponse>,
    isochrone: Option<IsochroneResponse>,
    elevation: Option<ElevationResponse>,
    error: Option<ServiceError>,
}

impl StubRoutingService {
    /// Return `response` from [`RoutingService::route`].
    #[must_use]
    pub fn with_route(mut self, response: RouteResponse) -> Self {
        self.route = Some(response);
        self
    }

    /// Return `response` from [`RoutingService::isochrone`].
    #[must_use]
    pub fn with_isochrone(mut self, response: IsochroneResponse) -> Self {
        self.isochrone = Some(response);
        self
    }

    /// Return `response` from [`RoutingService::elevation`].
    #[must_use]
    pub fn with_elevation(mut self, response: ElevationResponse) -> Self {
        self.elevation = Some(response);
        self
    }

    /// Fail every call with `error`.
    #[must_use]
    pub fn with_error(error: ServiceError) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }

    fn respond<T: Clone>(&self, canned: Option<&T>, endpoint: &str) -> Result<T, ClientError> {
        if let Some(error) = &self.error {
            return Err(ClientError::Service(error.clone()));
        }
        canned.cloned().ok_or_else(|| {
            ClientError::Service(ServiceError::from_raw(
                404,
                format!("no canned {endpoint} response"),
            ))
        })
    }
}

impl RoutingService for StubRoutingService {
    type Error = ClientError;

    fn route(&self, _request: &RouteRequest) -> Result<RouteResponse, Self::Error> {
        self.respond(self.route.as_ref(), "route")
    }

    fn isochrone(&self, _request: &IsochroneRequest) -> Result<IsochroneResponse, Self::Error> {
        self.respond(self.isochrone.as_ref(), "isochrone")
    }

    fn elevation(&self, _request: &ElevationRequest) -> Result<ElevationResponse, Self::Error> {
        self.respond(self.elevation.as_ref(), "elevation")
    }
}
