use std::sync::Arc;

use crate::{config::Config, utils::google::CredentialVerifier};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub verifier: Arc<dyn CredentialVerifier>,
}

impl AppState {
    pub fn new(config: Config, verifier: Arc<dyn CredentialVerifier>) -> Self {
        Self { config, verifier }
    }
}
