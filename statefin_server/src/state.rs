use std::sync::Arc;

use statefin_api::{EsClient, FinanceService};

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<FinanceService>,
}

impl AppState {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = EsClient::with_base_url(&config.es_host)?;
        let service = FinanceService::new(client, &config.api_env);
        Ok(Self {
            service: Arc::new(service),
        })
    }
}
