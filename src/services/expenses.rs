//! Expenses, contributions and balances of a trip.
//!
//! Expenses and contributions are created under their trip and addressed by
//! their own ID afterwards:
//! - List/Create expenses: `/api/trips/{trip_id}/expenses`
//! - Update/Delete an expense: `/api/expenses/{id}`
//! - List/Add contributions: `/api/trips/{trip_id}/contributions`
//! - Delete a contribution: `/api/contributions/{id}`
//! - Balances and settlements: `/api/trips/{trip_id}/balances`
//!
//! # Example
//!
//! ```rust,ignore
//! use tripkit_api::models::{ExpenseCategory, NewExpense};
//! use tripkit_api::services::expenses;
//!
//! let dinner = NewExpense::new("Dinner", 84.2, ExpenseCategory::Food);
//! let created = expenses::create(&client, "7", &dinner).await;
//! assert!(created.success);
//!
//! let report = expenses::balances(&client, "7").await?;
//! for settlement in &report.settlements {
//!     println!("{} pays {} {:.2}", settlement.from_user_id, settlement.to_user_id, settlement.amount);
//! }
//! ```

use crate::clients::{HttpClient, HttpMethod, HttpRequest};
use crate::models::{
    BalanceReport, Contribution, Expense, ExpenseUpdate, NewContribution, NewExpense,
};
use crate::services::{
    bare_request, build_path, fetch_data, fetch_page, json_request, mutate, mutate_empty,
    MutationResult, PageParams, Paginated, ServiceError,
};

const TRIP_EXPENSES_PATH: &str = "/api/trips/{trip_id}/expenses";
const EXPENSE_PATH: &str = "/api/expenses/{id}";
const TRIP_CONTRIBUTIONS_PATH: &str = "/api/trips/{trip_id}/contributions";
const CONTRIBUTION_PATH: &str = "/api/contributions/{id}";
const TRIP_BALANCES_PATH: &str = "/api/trips/{trip_id}/balances";

/// Lists the expenses of a trip.
///
/// # Errors
///
/// Returns [`ServiceError`] if the request fails or the payload is not a
/// page of expenses.
pub async fn list(
    client: &HttpClient,
    trip_id: &str,
    params: &PageParams,
) -> Result<Paginated<Expense>, ServiceError> {
    let path = build_path(TRIP_EXPENSES_PATH, &[("trip_id", trip_id)]);
    let request = HttpRequest::builder(HttpMethod::Get, path)
        .query(params.to_query())
        .build()?;
    fetch_page(client, request).await
}

/// Records an expense on a trip.
pub async fn create(client: &HttpClient, trip_id: &str, expense: &NewExpense) -> MutationResult<Expense> {
    let path = build_path(TRIP_EXPENSES_PATH, &[("trip_id", trip_id)]);
    mutate(client, json_request(HttpMethod::Post, path, expense)).await
}

/// Applies a partial update to an expense.
pub async fn update(client: &HttpClient, id: &str, changes: &ExpenseUpdate) -> MutationResult<Expense> {
    let path = build_path(EXPENSE_PATH, &[("id", id)]);
    mutate(client, json_request(HttpMethod::Patch, path, changes)).await
}

/// Deletes an expense.
pub async fn delete(client: &HttpClient, id: &str) -> MutationResult<()> {
    let path = build_path(EXPENSE_PATH, &[("id", id)]);
    mutate_empty(client, bare_request(HttpMethod::Delete, path)).await
}

/// Lists every contribution to a trip's common pot.
///
/// # Errors
///
/// Returns [`ServiceError`] if the request fails or the payload is not a
/// list of contributions.
pub async fn contributions(
    client: &HttpClient,
    trip_id: &str,
) -> Result<Vec<Contribution>, ServiceError> {
    let path = build_path(TRIP_CONTRIBUTIONS_PATH, &[("trip_id", trip_id)]);
    fetch_data(client, bare_request(HttpMethod::Get, path)?).await
}

/// Adds a contribution to a trip's common pot.
pub async fn add_contribution(
    client: &HttpClient,
    trip_id: &str,
    contribution: &NewContribution,
) -> MutationResult<Contribution> {
    let path = build_path(TRIP_CONTRIBUTIONS_PATH, &[("trip_id", trip_id)]);
    mutate(client, json_request(HttpMethod::Post, path, contribution)).await
}

/// Deletes a contribution.
pub async fn delete_contribution(client: &HttpClient, id: &str) -> MutationResult<()> {
    let path = build_path(CONTRIBUTION_PATH, &[("id", id)]);
    mutate_empty(client, bare_request(HttpMethod::Delete, path)).await
}

/// Fetches each participant's balance and the transfers that settle them.
///
/// The split is computed by the server.
///
/// # Errors
///
/// Returns [`ServiceError`] if the request fails or the payload is not a
/// balance report.
pub async fn balances(client: &HttpClient, trip_id: &str) -> Result<BalanceReport, ServiceError> {
    let path = build_path(TRIP_BALANCES_PATH, &[("trip_id", trip_id)]);
    fetch_data(client, bare_request(HttpMethod::Get, path)?).await
}
