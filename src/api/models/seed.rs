use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Summary of the reference catalog.
///
/// `dishes_per_country` is `total_dishes / total_countries` truncated, not a
/// per-country breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SeedStatistics {
    pub total_countries: usize,
    pub total_dishes: usize,
    pub dishes_per_country: usize,
    pub countries: Vec<String>,
}
