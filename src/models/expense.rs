//! Cost sharing records: expenses, contributions, balances and settlements.
//!
//! Amounts are plain `f64` in the trip's currency. The split computation
//! happens on the server; [`BalanceReport`] is its read-only result.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Expense category used for grouping in summaries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Transport,
    Accommodation,
    Food,
    Activities,
    Shopping,
    #[default]
    #[serde(other)]
    Other,
}

/// A shared expense paid by one participant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    #[serde(deserialize_with = "crate::models::deserialize_id")]
    pub id: String,

    /// The trip this expense belongs to.
    #[serde(default, deserialize_with = "crate::models::deserialize_optional_id")]
    pub trip_id: Option<String>,

    pub description: String,

    pub amount: f64,

    #[serde(default)]
    pub category: ExpenseCategory,

    /// The participant who paid.
    #[serde(default, deserialize_with = "crate::models::deserialize_optional_id")]
    pub paid_by: Option<String>,

    /// Participants the amount is split between. Empty means everyone.
    #[serde(default)]
    pub split_between: Vec<String>,

    #[serde(default)]
    pub date: Option<NaiveDate>,

    #[serde(default, skip_serializing)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload for recording an expense.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub description: String,

    pub amount: f64,

    pub category: ExpenseCategory,

    /// Defaults to the authenticated user on the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_by: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub split_between: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl NewExpense {
    /// Creates an expense split between all participants.
    #[must_use]
    pub fn new(description: impl Into<String>, amount: f64, category: ExpenseCategory) -> Self {
        Self {
            description: description.into(),
            amount,
            category,
            paid_by: None,
            split_between: Vec::new(),
            date: None,
        }
    }
}

/// Partial update of an expense.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ExpenseCategory>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub split_between: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

/// Money a participant put into the trip's common pot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    #[serde(deserialize_with = "crate::models::deserialize_id")]
    pub id: String,

    #[serde(default, deserialize_with = "crate::models::deserialize_optional_id")]
    pub trip_id: Option<String>,

    #[serde(deserialize_with = "crate::models::deserialize_id")]
    pub user_id: String,

    pub amount: f64,

    #[serde(default)]
    pub note: Option<String>,

    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Payload for recording a contribution.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContribution {
    pub amount: f64,

    /// Defaults to the authenticated user on the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

/// One participant's standing in a trip.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    #[serde(deserialize_with = "crate::models::deserialize_id")]
    pub user_id: String,

    #[serde(default)]
    pub user_name: Option<String>,

    /// Total paid for shared expenses plus contributions.
    pub paid: f64,

    /// The participant's share of all expenses.
    pub owed: f64,

    /// `paid - owed`: positive means the participant is owed money.
    pub net: f64,
}

impl Balance {
    /// Returns `true` if the participant still has to pay others.
    #[must_use]
    pub fn is_debtor(&self) -> bool {
        self.net < 0.0
    }
}

/// A transfer that settles part of the group's debts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settlement {
    #[serde(deserialize_with = "crate::models::deserialize_id")]
    pub from_user_id: String,

    #[serde(deserialize_with = "crate::models::deserialize_id")]
    pub to_user_id: String,

    pub amount: f64,
}

/// Balances of every participant and the transfers that settle them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceReport {
    #[serde(default)]
    pub balances: Vec<Balance>,

    #[serde(default)]
    pub settlements: Vec<Settlement>,

    /// Sum of all expenses of the trip.
    #[serde(default)]
    pub total_expenses: f64,

    #[serde(default)]
    pub currency: Option<String>,
}

impl BalanceReport {
    /// Returns the balance of `user_id`, if they take part in the trip.
    #[must_use]
    pub fn balance_of(&self, user_id: &str) -> Option<&Balance> {
        self.balances.iter().find(|b| b.user_id == user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_expense_deserializes_api_shape() {
        let expense: Expense = serde_json::from_value(json!({
            "id": 31,
            "tripId": 7,
            "description": "Dinner",
            "amount": 84.2,
            "category": "food",
            "paidBy": "u1",
            "splitBetween": ["u1", "u2"],
            "date": "2026-05-02"
        }))
        .unwrap();

        assert_eq!(expense.id, "31");
        assert_eq!(expense.trip_id.as_deref(), Some("7"));
        assert_eq!(expense.category, ExpenseCategory::Food);
        assert_eq!(expense.split_between, vec!["u1", "u2"]);
    }

    #[test]
    fn test_unknown_category_maps_to_other() {
        let expense: Expense = serde_json::from_value(json!({
            "id": "e1", "description": "Souvenir tax", "amount": 3.0, "category": "fees"
        }))
        .unwrap();
        assert_eq!(expense.category, ExpenseCategory::Other);
    }

    #[test]
    fn test_new_expense_payload() {
        let expense = NewExpense::new("Taxi", 25.0, ExpenseCategory::Transport);
        assert_eq!(
            serde_json::to_value(&expense).unwrap(),
            json!({"description": "Taxi", "amount": 25.0, "category": "transport"})
        );
    }

    #[test]
    fn test_balance_report_lookup() {
        let report: BalanceReport = serde_json::from_value(json!({
            "balances": [
                {"userId": "u1", "userName": "Ada", "paid": 100.0, "owed": 50.0, "net": 50.0},
                {"userId": 2, "paid": 0.0, "owed": 50.0, "net": -50.0}
            ],
            "settlements": [{"fromUserId": 2, "toUserId": "u1", "amount": 50.0}],
            "totalExpenses": 100.0,
            "currency": "EUR"
        }))
        .unwrap();

        assert!(!report.balance_of("u1").unwrap().is_debtor());
        assert!(report.balance_of("2").unwrap().is_debtor());
        assert!(report.balance_of("u3").is_none());
        assert_eq!(report.settlements[0].from_user_id, "2");
    }

    #[test]
    fn test_empty_balance_report() {
        let report: BalanceReport = serde_json::from_value(json!({})).unwrap();
        assert!(report.balances.is_empty());
        assert!(report.settlements.is_empty());
    }
}
