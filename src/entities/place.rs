use serde::{Deserialize, Serialize};

use crate::entities::Coordinates;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub description: String,
    pub coordinates: Coordinates,
    pub place_id: String,
    pub maps_url: String,
    pub photo_url: Option<String>,
    pub embed_url: String,
}
