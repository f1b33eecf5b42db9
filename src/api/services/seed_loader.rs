//! Idempotent loading of the reference catalog into the dishes collection.

use super::{SeedCatalog, ServiceError};
use crate::models::{NewDish, SeedStatistics};
use crate::storage::{Collection, StorageBackend};
use std::fmt;
use std::sync::Arc;
use tracing::info;

/// Result of a seed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Dishes were present and `force` was not set; nothing changed.
    AlreadySeeded { countries: usize, dishes: u64 },
    /// The catalog was inserted.
    Seeded { countries: usize, dishes: u64 },
}

impl fmt::Display for SeedOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedOutcome::AlreadySeeded { countries, dishes } => write!(
                f,
                "Database already seeded with {} countries and {} dishes",
                countries, dishes
            ),
            SeedOutcome::Seeded { countries, dishes } => write!(
                f,
                "Successfully seeded {} dishes from {} countries",
                dishes, countries
            ),
        }
    }
}

#[derive(Clone)]
pub struct SeedLoader {
    storage: Arc<dyn StorageBackend>,
    catalog: Arc<SeedCatalog>,
}

impl SeedLoader {
    pub fn new(storage: Arc<dyn StorageBackend>, catalog: Arc<SeedCatalog>) -> Self {
        Self { storage, catalog }
    }

    pub async fn is_seeded(&self) -> Result<bool, ServiceError> {
        Ok(self.storage.count(Collection::Dishes).await? > 0)
    }

    /// Load the catalog.
    ///
    /// Without `force` an already populated store is left alone. With `force`
    /// every dish and every saved recipe is removed first, since recipes point
    /// at dish ids that are about to disappear.
    pub async fn seed(&self, force: bool) -> Result<SeedOutcome, ServiceError> {
        if !force && self.is_seeded().await? {
            let countries = self.storage.distinct_countries().await?.len();
            let dishes = self.storage.count(Collection::Dishes).await?;
            return Ok(SeedOutcome::AlreadySeeded { countries, dishes });
        }

        if force {
            let dishes = self.storage.clear(Collection::Dishes).await?;
            let recipes = self.storage.clear(Collection::UserRecipes).await?;
            info!(
                "Cleared {} dishes and {} user recipes for force seed",
                dishes, recipes
            );
        }

        let dishes: Vec<NewDish> = self.catalog.dishes().iter().map(NewDish::from).collect();
        self.storage.insert_dishes(dishes).await?;

        let outcome = SeedOutcome::Seeded {
            countries: self.catalog.country_count(),
            dishes: self.catalog.dish_count() as u64,
        };
        info!("{}", outcome);
        Ok(outcome)
    }

    pub fn statistics(&self) -> SeedStatistics {
        self.catalog.statistics()
    }
}
