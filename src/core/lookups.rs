use crate::core::{Coordinates, EndpointProvider, LookupChain, PassList};
use crate::utils::error::{FlyoverError, Result};
use reqwest::Client;
use serde::Deserialize;

/// Body the pass service returns when it rejects the supplied coordinates.
const INVALID_COORDINATES_BODY: &str = "invalid coordinates";

#[derive(Debug, Deserialize)]
struct AddressPayload {
    ip: String,
}

#[derive(Debug, Deserialize)]
struct GeoStatus {
    success: bool,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PassPayload {
    response: PassList,
}

pub struct HttpLookupChain<C: EndpointProvider> {
    config: C,
    client: Client,
}

impl<C: EndpointProvider> HttpLookupChain<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn geo_url(&self, address: &str) -> String {
        format!(
            "{}/{}",
            self.config.geo_endpoint().trim_end_matches('/'),
            address
        )
    }
}

#[async_trait::async_trait]
impl<C: EndpointProvider> LookupChain for HttpLookupChain<C> {
    async fn fetch_address(&self) -> Result<String> {
        tracing::debug!(
            "Requesting public address from: {}",
            self.config.address_endpoint()
        );
        let response = self
            .client
            .get(self.config.address_endpoint())
            .send()
            .await?;
        tracing::debug!("Address service status: {}", response.status());

        if !response.status().is_success() {
            return Err(FlyoverError::UnexpectedStatusError {
                service: "address service",
                status: response.status(),
            });
        }

        let body = response.text().await?;
        let payload: AddressPayload = serde_json::from_str(&body)?;
        Ok(payload.ip)
    }

    async fn fetch_coordinates(&self, address: &str) -> Result<Coordinates> {
        let url = self.geo_url(address);
        tracing::debug!("Requesting coordinates from: {}", url);
        let response = self.client.get(&url).send().await?;
        tracing::debug!("Geolocation service status: {}", response.status());

        // This upstream reports failure in-band through the success flag,
        // not through the status line.
        let body = response.text().await?;
        let status: GeoStatus = serde_json::from_str(&body)?;
        if !status.success {
            return Err(FlyoverError::ServiceError {
                message: status
                    .message
                    .unwrap_or_else(|| "no diagnostic message provided".to_string()),
            });
        }

        let coordinates: Coordinates = serde_json::from_str(&body)?;
        Ok(coordinates)
    }

    async fn fetch_passes(&self, coordinates: Coordinates) -> Result<PassList> {
        tracing::debug!(
            "Requesting pass predictions from: {}",
            self.config.pass_endpoint()
        );
        let response = self
            .client
            .get(self.config.pass_endpoint())
            .query(&[
                ("lat", coordinates.latitude),
                ("lon", coordinates.longitude),
            ])
            .send()
            .await?;
        let status = response.status();
        tracing::debug!("Pass service status: {}", status);

        // Rejected coordinates arrive as a literal body, not a status code,
        // so this check runs before the status gate.
        let body = response.text().await?;
        if body == INVALID_COORDINATES_BODY {
            return Err(FlyoverError::InvalidCoordinatesError {
                latitude: coordinates.latitude,
                longitude: coordinates.longitude,
            });
        }

        if !status.is_success() {
            return Err(FlyoverError::UnexpectedStatusError {
                service: "pass service",
                status,
            });
        }

        let payload: PassPayload = serde_json::from_str(&body)?;
        Ok(payload.response)
    }
}
