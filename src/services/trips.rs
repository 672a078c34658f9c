//! Trip operations.

use crate::clients::{HttpClient, HttpMethod, HttpRequest};
use crate::models::{NewTrip, Trip, TripUpdate};
use crate::services::{
    bare_request, build_path, fetch_data, fetch_page, json_request, mutate, mutate_empty,
    MutationResult, PageParams, Paginated, ServiceError,
};

const TRIPS_PATH: &str = "/api/trips";
const TRIP_PATH: &str = "/api/trips/{id}";

/// Lists the user's trips.
///
/// # Errors
///
/// Returns [`ServiceError`] if the request fails or the payload is not a
/// page of trips.
pub async fn list(client: &HttpClient, params: &PageParams) -> Result<Paginated<Trip>, ServiceError> {
    let request = HttpRequest::builder(HttpMethod::Get, TRIPS_PATH)
        .query(params.to_query())
        .build()?;
    fetch_page(client, request).await
}

/// Fetches one trip.
///
/// # Errors
///
/// Returns [`ServiceError`]; a missing trip is an `Http` error with status 404.
pub async fn get(client: &HttpClient, id: &str) -> Result<Trip, ServiceError> {
    let request = bare_request(HttpMethod::Get, build_path(TRIP_PATH, &[("id", id)]))?;
    fetch_data(client, request).await
}

/// Creates a trip.
pub async fn create(client: &HttpClient, trip: &NewTrip) -> MutationResult<Trip> {
    let request = json_request(HttpMethod::Post, TRIPS_PATH.to_string(), trip);
    mutate(client, request).await
}

/// Applies a partial update to a trip.
pub async fn update(client: &HttpClient, id: &str, changes: &TripUpdate) -> MutationResult<Trip> {
    let path = build_path(TRIP_PATH, &[("id", id)]);
    mutate(client, json_request(HttpMethod::Patch, path, changes)).await
}

/// Deletes a trip with its expenses and contributions.
pub async fn delete(client: &HttpClient, id: &str) -> MutationResult<()> {
    let path = build_path(TRIP_PATH, &[("id", id)]);
    mutate_empty(client, bare_request(HttpMethod::Delete, path)).await
}
