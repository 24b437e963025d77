use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::Place;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Trip {
    pub id: Uuid,
    pub query: String,
    pub location: String,
    pub places: Vec<Place>,
    pub map_url: String,
    pub directions_url: String,
}

impl Trip {
    pub fn new(
        query: String,
        location: String,
        places: Vec<Place>,
        map_url: String,
        directions_url: String,
    ) -> Self {
        Trip {
            id: Uuid::new_v4(),
            query,
            location,
            places,
            map_url,
            directions_url,
        }
    }
}
