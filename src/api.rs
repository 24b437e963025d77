use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::entities::Trip;
use crate::error::Error;

#[async_trait]
pub trait TripAPI {
    async fn create_trip(&self, query: String) -> Result<Trip, Error>;
    async fn find_trip(&self, id: Uuid) -> Result<Trip, Error>;
}

pub trait API: TripAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
