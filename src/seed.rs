//! Reference data population
//!
//! Loads the fixed Star Wars dataset into `characters`, `planets` and
//! `vehicles`. Numeric fields in the dataset (height, population, cost,
//! length) are stored as text, and string sentinels such as "unknown" or
//! "desconocida" are written verbatim.

use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;

use crate::db::Db;
use crate::error::{AppError, Result};

/// Dataset shipped with the binary
const BUILTIN_DATASET: &str = include_str!("../data/starwars.json");

/// Accept either a JSON string or number and keep its text form
fn as_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!(
            "expected a string or a number, found {other}"
        ))),
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedCharacter {
    pub name: String,
    pub gender: String,
    #[serde(deserialize_with = "as_text")]
    pub height: String,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedPlanet {
    pub name: String,
    pub climate: String,
    pub terrain: String,
    #[serde(deserialize_with = "as_text")]
    pub population: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedVehicle {
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    #[serde(deserialize_with = "as_text")]
    pub cost: String,
    #[serde(deserialize_with = "as_text")]
    pub length: String,
}

/// The full reference dataset, already normalized to text columns
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SeedDataset {
    #[serde(default)]
    pub characters: Vec<SeedCharacter>,
    #[serde(default)]
    pub planets: Vec<SeedPlanet>,
    #[serde(default)]
    pub vehicles: Vec<SeedVehicle>,
}

impl SeedDataset {
    /// Parse a dataset from its JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The dataset embedded at compile time
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_DATASET)
    }

    /// Read a dataset from a JSON file on disk
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read seed dataset {:?}: {}", path, e))?;
        Ok(Self::from_json(&json)?)
    }
}

/// Row counts written by a successful population run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub characters: usize,
    pub planets: usize,
    pub vehicles: usize,
}

/// Populates the reference tables from a [`SeedDataset`]
pub struct Seeder {
    db: Db,
    dataset: Arc<SeedDataset>,
}

impl Seeder {
    pub fn new(db: Db, dataset: Arc<SeedDataset>) -> Self {
        Self { db, dataset }
    }

    /// Insert the whole dataset, once
    ///
    /// Fails with [`AppError::AlreadyPopulated`] when any character row
    /// exists. The check and every insert share one transaction, so a failure
    /// part way leaves all three tables untouched.
    ///
    /// The transaction starts as a deferred `BEGIN`, so two concurrent calls
    /// can both pass the emptiness check. The one that commits second fails
    /// its first insert with `SQLITE_BUSY` and is rolled back, surfacing as
    /// [`AppError::Database`] (500) rather than a conflict. No duplicate rows
    /// are written either way.
    pub async fn populate(&self) -> Result<SeedSummary> {
        let mut tx = self.db.begin().await?;

        let populated: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM characters)")
            .fetch_one(&mut *tx)
            .await?;
        if populated {
            tracing::info!("Populate requested but characters table is not empty");
            return Err(AppError::AlreadyPopulated);
        }

        for c in &self.dataset.characters {
            sqlx::query(
                "INSERT INTO characters (name, gender, height, hair_color, skin_color, eye_color)
                 VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(&c.name)
            .bind(&c.gender)
            .bind(&c.height)
            .bind(&c.hair_color)
            .bind(&c.skin_color)
            .bind(&c.eye_color)
            .execute(&mut *tx)
            .await?;
        }

        for p in &self.dataset.planets {
            sqlx::query(
                "INSERT INTO planets (name, climate, terrain, population) VALUES (?, ?, ?, ?)",
            )
            .bind(&p.name)
            .bind(&p.climate)
            .bind(&p.terrain)
            .bind(&p.population)
            .execute(&mut *tx)
            .await?;
        }

        for v in &self.dataset.vehicles {
            sqlx::query(
                "INSERT INTO vehicles (name, model, manufacturer, cost, length)
                 VALUES (?, ?, ?, ?, ?)",
            )
            .bind(&v.name)
            .bind(&v.model)
            .bind(&v.manufacturer)
            .bind(&v.cost)
            .bind(&v.length)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        let summary = SeedSummary {
            characters: self.dataset.characters.len(),
            planets: self.dataset.planets.len(),
            vehicles: self.dataset.vehicles.len(),
        };

        tracing::info!(
            "Database populated: {} characters, {} planets, {} vehicles",
            summary.characters,
            summary.planets,
            summary.vehicles
        );

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_dataset_parses() {
        let dataset = SeedDataset::builtin().unwrap();

        assert_eq!(dataset.characters.len(), 7);
        assert_eq!(dataset.planets.len(), 7);
        assert_eq!(dataset.vehicles.len(), 7);
    }

    #[test]
    fn test_numbers_become_text() {
        let dataset = SeedDataset::builtin().unwrap();

        let luke = dataset
            .characters
            .iter()
            .find(|c| c.name == "Luke Skywalker")
            .unwrap();
        assert_eq!(luke.height, "172");

        let coruscant = dataset
            .planets
            .iter()
            .find(|p| p.name == "Coruscant")
            .unwrap();
        assert_eq!(coruscant.population, "1000000000000");

        let x_wing = dataset.vehicles.iter().find(|v| v.name == "X-Wing").unwrap();
        assert_eq!(x_wing.cost, "149999");
        assert_eq!(x_wing.length, "12.5");

        let tie = dataset
            .vehicles
            .iter()
            .find(|v| v.name == "TIE Fighter")
            .unwrap();
        assert_eq!(tie.length, "8.99");
    }

    #[test]
    fn test_sentinels_kept_verbatim() {
        let dataset = SeedDataset::builtin().unwrap();

        let hoth = dataset.planets.iter().find(|p| p.name == "Hoth").unwrap();
        assert_eq!(hoth.population, "desconocida");

        let at_at = dataset.vehicles.iter().find(|v| v.name == "AT-AT").unwrap();
        assert_eq!(at_at.cost, "unknown");
        assert_eq!(at_at.length, "20");
    }

    #[test]
    fn test_rejects_non_scalar_fields() {
        let json = r#"{ "planets": [
            { "name": "Kamino", "climate": "temperate", "terrain": "ocean", "population": [1] }
        ] }"#;

        assert!(matches!(
            SeedDataset::from_json(json),
            Err(AppError::Seed(_))
        ));
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let dataset = SeedDataset::from_json("{}").unwrap();
        assert_eq!(dataset, SeedDataset::default());
    }

    #[test]
    fn test_from_file_reads_override_dataset() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("seed.json");
        std::fs::write(
            &path,
            r#"{ "planets": [
                { "name": "Mustafar", "climate": "caluroso", "terrain": "volcanes", "population": 20000 }
            ] }"#,
        )
        .unwrap();

        let dataset = SeedDataset::from_file(&path).unwrap();

        assert!(dataset.characters.is_empty());
        assert_eq!(dataset.planets.len(), 1);
        assert_eq!(dataset.planets[0].name, "Mustafar");
        assert_eq!(dataset.planets[0].population, "20000");
    }

    #[test]
    fn test_from_file_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = SeedDataset::from_file(dir.path().join("absent.json")).unwrap_err();

        assert!(err.to_string().contains("Failed to read seed dataset"));
    }

    #[test]
    fn test_from_file_malformed_json() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(SeedDataset::from_file(&path).is_err());
    }
}
