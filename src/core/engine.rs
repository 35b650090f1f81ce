use crate::core::{LookupChain, PassList};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

/// Drives the three lookups in order. Each stage only runs when the
/// previous one succeeded; the first failure is returned as-is.
pub struct FlyoverEngine<L: LookupChain> {
    chain: L,
    monitor: SystemMonitor,
}

impl<L: LookupChain> FlyoverEngine<L> {
    pub fn new(chain: L) -> Self {
        Self::new_with_monitoring(chain, false)
    }

    pub fn new_with_monitoring(chain: L, monitoring_enabled: bool) -> Self {
        Self {
            chain,
            monitor: SystemMonitor::new(monitoring_enabled),
        }
    }

    pub async fn run(&self) -> Result<PassList> {
        self.monitor.log_stats("Lookup chain started");

        tracing::info!("📡 Resolving public address...");
        let address = self.chain.fetch_address().await?;
        tracing::info!("📡 Public address: {}", address);

        tracing::info!("🌍 Resolving coordinates for {}...", address);
        let coordinates = self.chain.fetch_coordinates(&address).await?;
        tracing::info!(
            "🌍 Coordinates: ({}, {})",
            coordinates.latitude,
            coordinates.longitude
        );

        tracing::info!("🛰️ Requesting upcoming passes...");
        let passes = self.chain.fetch_passes(coordinates).await?;
        tracing::info!("🛰️ {} upcoming passes reported", passes.len());

        self.monitor.log_stats("Lookup chain completed");
        Ok(passes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Coordinates, PassWindow};
    use crate::utils::error::FlyoverError;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    struct MockChain {
        calls: Arc<Mutex<Vec<&'static str>>>,
        fail_at: Option<&'static str>,
        passes: PassList,
    }

    impl MockChain {
        fn new() -> Self {
            Self {
                calls: Arc::new(Mutex::new(Vec::new())),
                fail_at: None,
                passes: vec![PassWindow {
                    risetime: 134564234,
                    duration: 600,
                }],
            }
        }

        fn failing_at(stage: &'static str) -> Self {
            Self {
                fail_at: Some(stage),
                ..Self::new()
            }
        }

        async fn record(&self, stage: &'static str) -> Result<()> {
            self.calls.lock().await.push(stage);
            if self.fail_at == Some(stage) {
                return Err(FlyoverError::ServiceError {
                    message: format!("{} lookup failed", stage),
                });
            }
            Ok(())
        }
    }

    #[async_trait::async_trait]
    impl LookupChain for MockChain {
        async fn fetch_address(&self) -> Result<String> {
            self.record("address").await?;
            Ok("162.245.144.188".to_string())
        }

        async fn fetch_coordinates(&self, address: &str) -> Result<Coordinates> {
            assert_eq!(address, "162.245.144.188");
            self.record("geo").await?;
            Ok(Coordinates {
                latitude: 38.91,
                longitude: -77.04,
            })
        }

        async fn fetch_passes(&self, coordinates: Coordinates) -> Result<PassList> {
            assert_eq!(coordinates.latitude, 38.91);
            assert_eq!(coordinates.longitude, -77.04);
            self.record("pass").await?;
            Ok(self.passes.clone())
        }
    }

    #[tokio::test]
    async fn test_run_chains_all_three_lookups() {
        let chain = MockChain::new();
        let calls = chain.calls.clone();
        let engine = FlyoverEngine::new(chain);

        let passes = engine.run().await.unwrap();

        assert_eq!(*calls.lock().await, vec!["address", "geo", "pass"]);
        assert_eq!(
            passes,
            vec![PassWindow {
                risetime: 134564234,
                duration: 600
            }]
        );
    }

    #[tokio::test]
    async fn test_run_stops_after_address_failure() {
        let chain = MockChain::failing_at("address");
        let calls = chain.calls.clone();
        let engine = FlyoverEngine::new(chain);

        let error = engine.run().await.unwrap_err();

        assert_eq!(*calls.lock().await, vec!["address"]);
        match error {
            FlyoverError::ServiceError { message } => assert_eq!(message, "address lookup failed"),
            other => panic!("expected Service error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_run_stops_after_coordinates_failure() {
        let chain = MockChain::failing_at("geo");
        let calls = chain.calls.clone();
        let engine = FlyoverEngine::new(chain);

        let error = engine.run().await.unwrap_err();

        assert_eq!(*calls.lock().await, vec!["address", "geo"]);
        match error {
            FlyoverError::ServiceError { message } => assert_eq!(message, "geo lookup failed"),
            other => panic!("expected Service error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_run_surfaces_pass_failure_unchanged() {
        let chain = MockChain::failing_at("pass");
        let calls = chain.calls.clone();
        let engine = FlyoverEngine::new(chain);

        let error = engine.run().await.unwrap_err();

        assert_eq!(*calls.lock().await, vec!["address", "geo", "pass"]);
        match error {
            FlyoverError::ServiceError { message } => assert_eq!(message, "pass lookup failed"),
            other => panic!("expected Service error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_run_with_empty_pass_list() {
        let chain = MockChain {
            passes: Vec::new(),
            ..MockChain::new()
        };
        let engine = FlyoverEngine::new(chain);

        let passes = engine.run().await.unwrap();

        assert!(passes.is_empty());
    }
}
