//! Recipe conversion API service

use crate::client;
use crate::store::ConvertedIngredient;
use gloo_net::http::Method;
use serde::{Deserialize, Serialize};

const CONVERT_RECIPE_PATH: &str = "/api/foodconversion/convert-recipe/";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Jp,
    Us,
    Uk,
}

impl UnitSystem {
    pub const ALL: [UnitSystem; 3] = [UnitSystem::Jp, UnitSystem::Us, UnitSystem::Uk];

    pub const fn code(self) -> &'static str {
        match self {
            UnitSystem::Jp => "jp",
            UnitSystem::Us => "us",
            UnitSystem::Uk => "uk",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            UnitSystem::Jp => "Japan (g / ml)",
            UnitSystem::Us => "US (cup / tbsp)",
            UnitSystem::Uk => "UK (cup / tbsp)",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|system| system.code() == code)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ConvertRecipeRequest {
    pub recipe_text: String,
    pub from_unit_system: UnitSystem,
    pub to_unit_system: UnitSystem,
}

#[derive(Debug, Deserialize)]
struct ConvertRecipeResponse {
    converted_recipe: Vec<ConvertedIngredient>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Conversion API service
#[derive(Clone)]
pub struct ConversionService;

impl ConversionService {
    pub fn new() -> Self {
        Self
    }

    /// Send recipe text to the backend and return the converted lines
    pub async fn convert(
        &self,
        request: &ConvertRecipeRequest,
    ) -> Result<Vec<ConvertedIngredient>, String> {
        let response = client::request(Method::POST, CONVERT_RECIPE_PATH)
            .json(request)
            .map_err(|e| format!("Failed to encode conversion request: {e}"))?
            .send()
            .await
            .map_err(|e| format!("Failed to convert recipe: {e}"))?;

        if !response.ok() {
            let message = match response.json::<ErrorResponse>().await {
                Ok(body) => body.error,
                Err(_) => format!("HTTP {}", response.status()),
            };
            return Err(format!("Failed to convert recipe: {message}"));
        }

        response
            .json::<ConvertRecipeResponse>()
            .await
            .map(|body| body.converted_recipe)
            .map_err(|e| format!("Failed to parse conversion result: {e}"))
    }
}

impl Default for ConversionService {
    fn default() -> Self {
        Self::new()
    }
}
