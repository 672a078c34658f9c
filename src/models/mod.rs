//! Typed records exchanged with the Tripkit API.
//!
//! All records use the API's camelCase field names. Identifiers are exposed
//! as `String`: the API sends numeric IDs for some records and UUIDs for
//! others, and both deserialize into the same field.
//!
//! - [`trip`]: trips and their create/update payloads
//! - [`expense`]: expenses, contributions, balances and settlements
//! - [`challenge`]: self-learning challenges

pub mod challenge;
pub mod expense;
pub mod trip;

pub use challenge::{Challenge, ChallengeDifficulty, ChallengeStatus, GenerateChallenge};
pub use expense::{
    Balance, BalanceReport, Contribution, Expense, ExpenseCategory, ExpenseUpdate,
    NewContribution, NewExpense, Settlement,
};
pub use trip::{NewTrip, Trip, TripStatus, TripUpdate};

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(text) => text,
            RawId::Number(number) => number.to_string(),
        }
    }
}

/// Deserializes an identifier sent either as a JSON string or a number.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(String::from)
}

/// Like [`deserialize_id`], for optional references to other records.
pub(crate) fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawId>::deserialize(deserializer).map(|raw| raw.map(String::from))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Ids {
        #[serde(deserialize_with = "deserialize_id")]
        id: String,
        #[serde(default, deserialize_with = "deserialize_optional_id")]
        parent: Option<String>,
    }

    #[test]
    fn test_id_accepts_numbers_and_strings() {
        let numeric: Ids = serde_json::from_value(json!({"id": 17, "parent": 3})).unwrap();
        assert_eq!(numeric.id, "17");
        assert_eq!(numeric.parent.as_deref(), Some("3"));

        let uuid: Ids = serde_json::from_value(
            json!({"id": "0b6f0c8e-5a1b-4a59-9d0e-2f7c1d7a9e11", "parent": null}),
        )
        .unwrap();
        assert_eq!(uuid.id, "0b6f0c8e-5a1b-4a59-9d0e-2f7c1d7a9e11");
        assert!(uuid.parent.is_none());
    }

    #[test]
    fn test_optional_id_may_be_absent() {
        let ids: Ids = serde_json::from_value(json!({"id": "a"})).unwrap();
        assert!(ids.parent.is_none());
    }

    #[test]
    fn test_id_rejects_other_types() {
        assert!(serde_json::from_value::<Ids>(json!({"id": true})).is_err());
    }
}
