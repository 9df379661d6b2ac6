//! Initial values for form widgets.
//!
//! A host usually fills an input from a backend once, shortly after the form
//! appears. [`InitialDataSource`] is that single-shot fetch; the widgets only
//! consume the resulting [`InitialData`].

use std::future::Future;
use std::time::Duration;

use horizon_forms_core::logging::targets;
use serde::{Deserialize, Serialize};

use crate::config::DataConfig;
use crate::error::Result;

/// Value and placeholder supplied to an input widget.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitialData {
    /// Initial input value.
    pub input_value: String,
    /// Placeholder text.
    pub placeholder: String,
}

/// A single-shot asynchronous supplier of [`InitialData`].
pub trait InitialDataSource: Send + Sync {
    /// Fetch the initial data.
    fn fetch_initial(&self) -> impl Future<Output = Result<InitialData>> + Send;
}

/// A data source that answers with fixed data after a simulated delay.
#[derive(Debug, Clone)]
pub struct MockDataService {
    delay: Duration,
    data: InitialData,
}

impl MockDataService {
    /// Create a mock service with the default payload and delay.
    pub fn new() -> Self {
        Self::from_config(&DataConfig::default())
    }

    /// Create a mock service with the configured delay.
    pub fn from_config(config: &DataConfig) -> Self {
        Self {
            delay: config.mock_delay(),
            data: InitialData {
                input_value: "Zaktualizowana wartość z backendu".to_string(),
                placeholder: "Wprowadź dane".to_string(),
            },
        }
    }

    /// Replace the payload using builder pattern.
    pub fn with_data(mut self, data: InitialData) -> Self {
        self.data = data;
        self
    }

    /// Replace the delay using builder pattern.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// The simulated latency.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for MockDataService {
    fn default() -> Self {
        Self::new()
    }
}

impl InitialDataSource for MockDataService {
    async fn fetch_initial(&self) -> Result<InitialData> {
        tracing::debug!(target: targets::DATA, delay = ?self.delay, "fetching initial data");
        tokio::time::sleep(self.delay).await;
        Ok(self.data.clone())
    }
}
