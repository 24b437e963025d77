use serde::Deserialize;

use crate::error::{model_response_error, Error};

pub const LOCATION_SYSTEM_PROMPT: &str = "Extract only the main location (city/region/country) from the travel query. Respond with ONLY the location name, nothing else.";

pub fn recommendation_system_prompt(location: &str) -> String {
    format!(
        r#"You are a travel expert specializing in accurate location recommendations worldwide. For a query about {location}:

1. Recommend only places that actually exist in {location}
2. For each place:
   - Provide the EXACT official name of the place as it appears on Google Maps
   - Focus on well-known, easily findable locations
   - Include famous landmarks, attractions, or historically significant places
   - Make sure to use the full official name with location (e.g., "Statue of Liberty National Monument, Liberty Island, New York Harbor")
3. Write engaging descriptions that highlight unique features

Respond with a JSON array containing exactly the number of places requested.
Format: [{{
    "name": "Full Official Place Name with Location",
    "description": "Description (2-3 sentences about history, significance, or attractions)",
    "latitude": 0,
    "longitude": 0
}}, ...]

Note: You can set latitude and longitude to 0 as they will be automatically populated with accurate coordinates."#
    )
}

/// The shape the model is instructed to emit. The numeric fields are
/// placeholders; authoritative coordinates come from Place Details.
#[derive(Clone, Debug, Deserialize)]
pub struct PlaceDraft {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

pub fn parse_drafts(content: &str) -> Result<Vec<PlaceDraft>, Error> {
    let body = strip_code_fence(content);

    let drafts: Vec<PlaceDraft> =
        serde_json::from_str(body).map_err(|_| model_response_error())?;

    if drafts.is_empty() {
        return Err(model_response_error());
    }

    Ok(drafts)
}

// Models occasionally wrap the array in a markdown fence despite the
// format instructions.
fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();

    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    let inner = inner.strip_prefix("json").unwrap_or(inner);

    inner.strip_suffix("```").unwrap_or(inner).trim()
}
