/// HTTP access to the cuisine and recipe endpoints
///
/// `KitchenBackend` is the seam between the wizard and the network. The real
/// implementation talks to the generator service over blocking HTTP; tests
/// substitute scripted backends.
use std::time::Duration;

use crate::catalog::Continent;
use crate::config::Config;
use crate::error::FetchError;
use crate::recipe::RecipeQuery;

/// Path of the cuisine listing endpoint, relative to the base URL
pub const CUISINES_PATH: &str = "cuisinesacross";

/// Path of the recipe generation endpoint, relative to the base URL
pub const RECIPE_PATH: &str = "recipe-creater";

/// Raw cuisine listing response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CuisineResponse {
    pub body: String,
    pub content_type: Option<String>,
}

/// Source of cuisine listings and generated recipes
///
/// Calls block until the service answers; callers run them off the thread
/// that owns wizard state.
pub trait KitchenBackend: Send + Sync {
    fn fetch_cuisines(&self, continent: Continent) -> Result<CuisineResponse, FetchError>;

    fn fetch_recipe(&self, query: &RecipeQuery) -> Result<String, FetchError>;
}

/// Blocking HTTP backend built on ureq
pub struct HttpBackend {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpBackend {
    pub fn new(config: &Config) -> Self {
        let user_agent = format!("KitchenWizard/{}", env!("CARGO_PKG_VERSION"));
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(&user_agent)
            .build();

        Self {
            agent,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn cuisines_request(&self, continent: Continent) -> ureq::Request {
        self.agent
            .get(&self.endpoint(CUISINES_PATH))
            .query("continent", continent.label())
    }

    fn recipe_request(&self, query: &RecipeQuery) -> ureq::Request {
        let mut request = self
            .agent
            .get(&self.endpoint(RECIPE_PATH))
            .set("Accept", "text/plain");
        for (name, value) in query.pairs() {
            request = request.query(name, value);
        }
        request
    }
}

impl KitchenBackend for HttpBackend {
    fn fetch_cuisines(&self, continent: Continent) -> Result<CuisineResponse, FetchError> {
        let request = self.cuisines_request(continent);
        tracing::debug!("[backend] GET {}", request.url());

        let response = request.call()?;

        let content_type = response.header("Content-Type").map(str::to_string);
        tracing::debug!(
            "[backend] cuisines status: {} ct: {:?}",
            response.status(),
            content_type
        );

        let body = response
            .into_string()
            .map_err(|e| FetchError::Body(e.to_string()))?;

        Ok(CuisineResponse { body, content_type })
    }

    fn fetch_recipe(&self, query: &RecipeQuery) -> Result<String, FetchError> {
        let request = self.recipe_request(query);
        tracing::debug!("[backend] GET {}", request.url());

        let response = request.call()?;
        tracing::debug!(
            "[backend] recipe status: {} ct: {:?}",
            response.status(),
            response.header("Content-Type")
        );

        let text = response
            .into_string()
            .map_err(|e| FetchError::Body(e.to_string()))?;
        tracing::debug!("[backend] recipe response length: {}", text.len());

        Ok(text)
    }
}
