//! TheMealDB HTTP client
//!
//! Talks to the free public v1 API (filter.php, lookup.php, random.php)

use async_trait::async_trait;
use reqwest::Client;

use super::api::{MealDbError, RecipeApi};
use super::types::{Meal, MealsEnvelope};

/// Client configuration
#[derive(Debug, Clone)]
pub struct MealDbConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for MealDbConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.themealdb.com/api/json/v1/1".to_string(),
            timeout_secs: 15,
        }
    }
}

/// HTTP-backed recipe API
pub struct MealDbClient {
    config: MealDbConfig,
    client: Client,
}

impl MealDbClient {
    pub fn new(config: MealDbConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    pub fn with_default_config() -> Self {
        Self::new(MealDbConfig::default())
    }

    async fn fetch_envelope(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<MealsEnvelope, MealDbError> {
        let url = format!("{}/{}", self.config.base_url, path);
        log::debug!("GET {} {:?}", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| MealDbError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(MealDbError::UpstreamStatus(format!(
                "{} returned {}",
                path,
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| MealDbError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl RecipeApi for MealDbClient {
    async fn search_by_ingredient(&self, ingredient: &str) -> Result<Vec<Meal>, MealDbError> {
        let envelope = self
            .fetch_envelope("filter.php", &[("i", ingredient)])
            .await?;
        Ok(envelope.into_meals())
    }

    async fn lookup_by_id(&self, id: &str) -> Result<Option<Meal>, MealDbError> {
        let envelope = self.fetch_envelope("lookup.php", &[("i", id)]).await?;
        Ok(envelope.into_meals().into_iter().next())
    }

    async fn random_meal(&self) -> Result<Meal, MealDbError> {
        let envelope = self.fetch_envelope("random.php", &[]).await?;
        envelope
            .into_meals()
            .into_iter()
            .next()
            .ok_or_else(|| MealDbError::InvalidResponse("random endpoint sent no meal".to_string()))
    }
}
