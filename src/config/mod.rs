use crate::core::EndpointProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "flyover")]
#[command(about = "Looks up the next visible satellite passes over your current location")]
pub struct CliConfig {
    #[arg(long, default_value = "https://api.ipify.org?format=json")]
    pub address_endpoint: String,

    #[arg(long, default_value = "https://ipwho.is")]
    pub geo_endpoint: String,

    #[arg(long, default_value = "https://iss-flyover.herokuapp.com/json/")]
    pub pass_endpoint: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process statistics while running")]
    pub monitor: bool,
}

impl EndpointProvider for CliConfig {
    fn address_endpoint(&self) -> &str {
        &self.address_endpoint
    }

    fn geo_endpoint(&self) -> &str {
        &self.geo_endpoint
    }

    fn pass_endpoint(&self) -> &str {
        &self.pass_endpoint
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("address_endpoint", &self.address_endpoint)?;
        validate_url("geo_endpoint", &self.geo_endpoint)?;
        validate_url("pass_endpoint", &self.pass_endpoint)?;
        Ok(())
    }
}
