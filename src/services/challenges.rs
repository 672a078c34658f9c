//! Self-learning challenges.

use crate::clients::{HttpClient, HttpMethod, HttpRequest};
use crate::models::{Challenge, GenerateChallenge};
use crate::services::{
    bare_request, build_path, fetch_data, fetch_page, json_request, mutate, MutationResult,
    PageParams, Paginated, ServiceError,
};

const CHALLENGES_PATH: &str = "/api/challenges";
const CHALLENGE_PATH: &str = "/api/challenges/{id}";
const GENERATE_PATH: &str = "/api/challenges/generate";
const COMPLETE_PATH: &str = "/api/challenges/{id}/complete";

/// Lists the user's challenges.
///
/// # Errors
///
/// Returns [`ServiceError`] if the request fails or the payload is not a
/// page of challenges.
pub async fn list(
    client: &HttpClient,
    params: &PageParams,
) -> Result<Paginated<Challenge>, ServiceError> {
    let request = HttpRequest::builder(HttpMethod::Get, CHALLENGES_PATH)
        .query(params.to_query())
        .build()?;
    fetch_page(client, request).await
}

/// Fetches one challenge.
///
/// # Errors
///
/// Returns [`ServiceError`] if the request fails or the payload is not a
/// challenge.
pub async fn get(client: &HttpClient, id: &str) -> Result<Challenge, ServiceError> {
    let path = build_path(CHALLENGE_PATH, &[("id", id)]);
    fetch_data(client, bare_request(HttpMethod::Get, path)?).await
}

/// Asks the server to generate a new challenge.
pub async fn generate(client: &HttpClient, request: &GenerateChallenge) -> MutationResult<Challenge> {
    mutate(
        client,
        json_request(HttpMethod::Post, GENERATE_PATH.to_string(), request),
    )
    .await
}

/// Marks a challenge as completed and returns it with its new status.
pub async fn complete(client: &HttpClient, id: &str) -> MutationResult<Challenge> {
    let path = build_path(COMPLETE_PATH, &[("id", id)]);
    mutate(
        client,
        json_request(HttpMethod::Patch, path, &serde_json::json!({})),
    )
    .await
}
