use crate::domain::model::{Coordinates, PassList};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait EndpointProvider: Send + Sync {
    fn address_endpoint(&self) -> &str;
    fn geo_endpoint(&self) -> &str;
    fn pass_endpoint(&self) -> &str;
}

#[async_trait]
pub trait LookupChain: Send + Sync {
    async fn fetch_address(&self) -> Result<String>;
    async fn fetch_coordinates(&self, address: &str) -> Result<Coordinates>;
    async fn fetch_passes(&self, coordinates: Coordinates) -> Result<PassList>;
}
