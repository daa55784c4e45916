use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use time::OffsetDateTime;

use super::dto::NewMeal;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "PascalCase")]
pub struct Meal {
    #[serde(rename = "ID")]
    pub id: i64,
    pub name: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub time: OffsetDateTime,
    pub calories: Option<i64>,
    pub protein: Option<i64>,
    pub fat: Option<i64>,
    pub carbs: Option<i64>,
    #[sqlx(rename = "vitaminA")]
    pub vitamin_a: Option<i64>,
    // column stays `vitaminB`; the wire name is VitaminB12
    #[sqlx(rename = "vitaminB")]
    pub vitamin_b12: Option<i64>,
}

pub async fn insert(db: &SqlitePool, meal: &NewMeal) -> anyhow::Result<i64> {
    let res = sqlx::query(
        r#"
        INSERT INTO meallog (name, calories, protein, fat, carbs, vitaminA, vitaminB, time)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&meal.name)
    .bind(meal.calories)
    .bind(meal.protein)
    .bind(meal.fat)
    .bind(meal.carbs)
    .bind(meal.vitamin_a)
    .bind(meal.vitamin_b12)
    .bind(meal.time)
    .execute(db)
    .await?;
    Ok(res.last_insert_rowid())
}

pub async fn find_by_id(db: &SqlitePool, id: i64) -> anyhow::Result<Option<Meal>> {
    let meal = sqlx::query_as::<_, Meal>(
        r#"
        SELECT id, name, calories, protein, fat, carbs, vitaminA, vitaminB, time
        FROM meallog
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await?;
    Ok(meal)
}

pub async fn find_all(db: &SqlitePool) -> anyhow::Result<Vec<Meal>> {
    let rows = sqlx::query_as::<_, Meal>(
        r#"
        SELECT id, name, calories, protein, fat, carbs, vitaminA, vitaminB, time
        FROM meallog
        ORDER BY id
        "#,
    )
    .fetch_all(db)
    .await?;
    Ok(rows)
}

// Zero rows affected is not an error; callers that care get the count.
pub async fn delete_by_id(db: &SqlitePool, id: i64) -> anyhow::Result<u64> {
    let res = sqlx::query("DELETE FROM meallog WHERE id = ?")
        .bind(id)
        .execute(db)
        .await?;
    Ok(res.rows_affected())
}
