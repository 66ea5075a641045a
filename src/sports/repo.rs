use anyhow::Context;
use sqlx::{FromRow, PgPool};

use super::dto::Sport;

/// A `sports` row as stored: food lists are JSON-encoded text columns.
#[derive(Debug, Clone, FromRow)]
pub struct SportRow {
    pub sport: String,
    pub recommended_foods: String,
    pub avoid_foods: String,
}

impl SportRow {
    /// Decode the stored food lists. Fails if a column holds text that is
    /// not a valid JSON array of strings.
    pub fn into_record(self) -> anyhow::Result<Sport> {
        let recommended_foods = serde_json::from_str(&self.recommended_foods)
            .with_context(|| format!("malformed recommended_foods for sport {}", self.sport))?;
        let avoid_foods = serde_json::from_str(&self.avoid_foods)
            .with_context(|| format!("malformed avoid_foods for sport {}", self.sport))?;
        Ok(Sport {
            sport: self.sport,
            recommended_foods,
            avoid_foods,
        })
    }
}

pub fn encode_foods(foods: &[String]) -> anyhow::Result<String> {
    serde_json::to_string(foods).context("encode food list")
}

pub async fn list_all(db: &PgPool) -> anyhow::Result<Vec<SportRow>> {
    let rows = sqlx::query_as::<_, SportRow>(
        r#"
        SELECT sport, recommended_foods, avoid_foods
        FROM sports
        "#,
    )
    .fetch_all(db)
    .await?;
    Ok(rows)
}

pub async fn find_by_name(db: &PgPool, sport: &str) -> anyhow::Result<Option<SportRow>> {
    let row = sqlx::query_as::<_, SportRow>(
        r#"
        SELECT sport, recommended_foods, avoid_foods
        FROM sports
        WHERE sport = $1
        "#,
    )
    .bind(sport)
    .fetch_optional(db)
    .await?;
    Ok(row)
}

/// Insert a new sport. Uniqueness of the name is enforced by the store; a
/// duplicate surfaces as the driver's error, not a distinct kind.
pub async fn insert(
    db: &PgPool,
    sport: &str,
    recommended_foods: &str,
    avoid_foods: &str,
) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO sports (sport, recommended_foods, avoid_foods)
        VALUES ($1, $2, $3)
        "#,
    )
    .bind(sport)
    .bind(recommended_foods)
    .bind(avoid_foods)
    .execute(db)
    .await?;
    Ok(())
}

/// Replace both food lists. Returns the number of rows matched.
pub async fn update(
    db: &PgPool,
    sport: &str,
    recommended_foods: &str,
    avoid_foods: &str,
) -> anyhow::Result<u64> {
    let result = sqlx::query(
        r#"
        UPDATE sports
        SET recommended_foods = $1, avoid_foods = $2
        WHERE sport = $3
        "#,
    )
    .bind(recommended_foods)
    .bind(avoid_foods)
    .bind(sport)
    .execute(db)
    .await?;
    Ok(result.rows_affected())
}

/// Delete by name. Returns the number of rows removed.
pub async fn delete(db: &PgPool, sport: &str) -> anyhow::Result<u64> {
    let result = sqlx::query(
        r#"
        DELETE FROM sports
        WHERE sport = $1
        "#,
    )
    .bind(sport)
    .execute(db)
    .await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_record_decodes_lists_in_order() {
        let row = SportRow {
            sport: "Tennis".into(),
            recommended_foods: r#"["bananas","oats"]"#.into(),
            avoid_foods: r#"["fried food"]"#.into(),
        };
        let record = row.into_record().expect("decode should succeed");
        assert_eq!(record.sport, "Tennis");
        assert_eq!(record.recommended_foods, vec!["bananas", "oats"]);
        assert_eq!(record.avoid_foods, vec!["fried food"]);
    }

    #[test]
    fn into_record_rejects_malformed_column() {
        let row = SportRow {
            sport: "Tennis".into(),
            recommended_foods: "not json".into(),
            avoid_foods: "[]".into(),
        };
        let err = row.into_record().unwrap_err();
        assert!(err.to_string().contains("recommended_foods"));
    }

    #[test]
    fn encode_foods_round_trips_through_into_record() {
        let foods = vec!["rice".to_string(), "lean meat".to_string()];
        let encoded = encode_foods(&foods).unwrap();
        let row = SportRow {
            sport: "Boxing".into(),
            recommended_foods: encoded,
            avoid_foods: "[]".into(),
        };
        assert_eq!(row.into_record().unwrap().recommended_foods, foods);
    }

    #[test]
    fn empty_list_encodes_to_empty_array() {
        assert_eq!(encode_foods(&[]).unwrap(), "[]");
    }
}
