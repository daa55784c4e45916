use serde::Deserialize;
use time::OffsetDateTime;

/// Payload for POST /addMeal. The store assigns the id, so a client-supplied
/// `ID` field is ignored along with any other unknown field.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewMeal {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub time: OffsetDateTime,
    #[serde(default)]
    pub calories: Option<i64>,
    #[serde(default)]
    pub protein: Option<i64>,
    #[serde(default)]
    pub fat: Option<i64>,
    #[serde(default)]
    pub carbs: Option<i64>,
    #[serde(default)]
    pub vitamin_a: Option<i64>,
    #[serde(default)]
    pub vitamin_b12: Option<i64>,
}
