//! Service registry lookups.

use crate::module::ModuleId;
use crate::types::{ServiceEndpoint, Settings};

impl Settings {
    /// Endpoint registered for `module`, or an all-default endpoint when the
    /// registry has no entry. Unknown modules read the auth entry.
    pub fn service_for(&self, module: ModuleId) -> ServiceEndpoint {
        let key = module.service_key();
        match self.services.get(key) {
            Some(endpoint) => endpoint.clone(),
            None => {
                tracing::debug!(service = key, "no registry entry, using defaults");
                ServiceEndpoint::default()
            }
        }
    }
}
