// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`supabase`]: Hosted store over HTTP (implements [`GiftStore`])
//! - [`memory`]: In-process store with a sample catalog (implements [`GiftStore`])
//!
//! [`GiftStore`]: crate::application::port::GiftStore

pub mod memory;
pub mod supabase;

use crate::application::port::GiftStore;
use crate::config::BackendConfig;
use crate::error::Result;
use std::sync::Arc;

// Re-export main types for convenience
pub use memory::InMemoryGiftStore;
pub use supabase::SupabaseStore;

/// i18n key of the warning shown when a configured backend is replaced by the
/// sample catalog.
pub const STORE_FALLBACK_WARNING: &str = "notification-store-fallback";

/// Builds the store selected by the backend settings.
///
/// Returns the store plus the i18n key of a warning, like [`crate::config::load`].
/// Without credentials the sample catalog is used silently. When credentials
/// are set but the hosted client cannot be created, the sample catalog is used
/// and the warning tells guests that purchases will not be saved.
#[must_use]
pub fn store_from_config(backend: &BackendConfig) -> (Arc<dyn GiftStore>, Option<String>) {
    match hosted_store(backend) {
        Ok(Some(store)) => (store, None),
        Ok(None) => {
            tracing::info!("no backend configured, using the sample catalog");
            (Arc::new(InMemoryGiftStore::with_sample_catalog()), None)
        }
        Err(err) => {
            tracing::error!(%err, "cannot create hosted store client, using the sample catalog");
            (
                Arc::new(InMemoryGiftStore::with_sample_catalog()),
                Some(STORE_FALLBACK_WARNING.to_string()),
            )
        }
    }
}

fn hosted_store(backend: &BackendConfig) -> Result<Option<Arc<dyn GiftStore>>> {
    let Some((url, key)) = backend.credentials() else {
        return Ok(None);
    };

    let store = SupabaseStore::new(url, key)?;
    tracing::info!(url, "using hosted gift store");
    Ok(Some(Arc::new(store)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::StoreError;
    use crate::error::Error;

    fn backend(key: &str) -> BackendConfig {
        BackendConfig {
            url: Some("https://project.supabase.co".to_string()),
            anon_key: Some(key.to_string()),
            ..BackendConfig::default()
        }
    }

    #[test]
    fn missing_credentials_select_memory_store() {
        let (store, warning) = store_from_config(&BackendConfig::default());
        assert_eq!(store.name(), "memory");
        assert!(warning.is_none());
    }

    #[test]
    fn credentials_select_hosted_store() {
        let (store, warning) = store_from_config(&backend("public-anon-key"));
        assert_eq!(store.name(), "supabase");
        assert!(warning.is_none());
    }

    #[test]
    fn unusable_credentials_fall_back_with_warning() {
        let (store, warning) = store_from_config(&backend("bad\nkey"));
        assert_eq!(store.name(), "memory");
        assert_eq!(warning.as_deref(), Some(STORE_FALLBACK_WARNING));
    }

    #[test]
    fn client_failure_is_a_store_error() {
        let result = hosted_store(&backend("bad\nkey"));
        assert!(matches!(result, Err(Error::Store(StoreError::Network(_)))));
    }
}
