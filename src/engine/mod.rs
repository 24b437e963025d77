mod prompts;
mod trip_api;

use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    api::API,
    entities::Trip,
    error::Error,
    external::{google_maps::GoogleMaps, openai::OpenAi},
};

pub struct Engine {
    openai: OpenAi,
    maps: GoogleMaps,

    // trip service (in-memory KV store, one entry per planned trip)
    trips: RwLock<HashMap<Uuid, Trip>>,
}

impl Engine {
    pub fn new(openai: OpenAi, maps: GoogleMaps) -> Self {
        Engine {
            openai,
            maps,
            trips: RwLock::new(HashMap::new()),
        }
    }

    #[tracing::instrument(name = "Engine::from_env")]
    pub fn from_env() -> Result<Self, Error> {
        let openai = OpenAi::from_env()?;
        let maps = GoogleMaps::from_env()?;

        Ok(Self::new(openai, maps))
    }
}

impl API for Engine {}
