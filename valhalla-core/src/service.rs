//! The routing service abstraction.

use crate::{
    ElevationRequest, ElevationResponse, IsochroneRequest, IsochroneResponse, RouteRequest,
    RouteResponse,
};

/// The three operations offered by a Valhalla-compatible service.
///
/// The HTTP client implements this trait; tests and embedding code can swap
/// in a stub that returns canned responses.
///
/// # Examples
///
/// ```rust
/// use valhalla_core::{
///     ElevationRequest, ElevationResponse, IsochroneRequest, IsochroneResponse,
///     RouteRequest, RouteResponse, RoutingService, ServiceError,
/// };
///
/// struct FlatEarth;
///
/// impl RoutingService for FlatEarth {
///     type Error = ServiceError;
///
///     fn route(&self, _request: &RouteRequest) -> Result<RouteResponse, Self::Error> {
///         Err(ServiceError::from_raw(501, "routing unsupported"))
///     }
///
///     fn isochrone(&self, _request: &IsochroneRequest) -> Result<IsochroneResponse, Self::Error> {
///         Err(ServiceError::from_raw(501, "isochrones unsupported"))
///     }
///
///     fn elevation(&self, request: &ElevationRequest) -> Result<ElevationResponse, Self::Error> {
///         let heights = request.shape.iter().flatten().map(|_| Some(0.0)).collect();
///         Ok(ElevationResponse {
///             shape: request.shape.clone(),
///             height: Some(heights),
///             ..ElevationResponse::default()
///         })
///     }
/// }
///
/// let response = FlatEarth.elevation(&ElevationRequest::from_shape(vec![
///     valhalla_core::Point::new(0.0, 0.0),
/// ]))?;
/// assert_eq!(response.height, Some(vec![Some(0.0)]));
/// # Ok::<(), ServiceError>(())
/// ```
pub trait RoutingService {
    /// Error produced by the implementation.
    type Error: std::error::Error;

    /// Compute a turn-by-turn route.
    fn route(&self, request: &RouteRequest) -> Result<RouteResponse, Self::Error>;

    /// Compute reachability contours.
    fn isochrone(&self, request: &IsochroneRequest) -> Result<IsochroneResponse, Self::Error>;

    /// Sample heights along a shape.
    fn elevation(&self, request: &ElevationRequest) -> Result<ElevationResponse, Self::Error>;
}
