//! `localStorage` backend for the `portal` token store.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; a missing or disabled
//! storage area reads as empty and writes are dropped. SSR paths no-op so the
//! server always renders the signed-out shell.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use portal::KeyValueStorage;

/// Key/value storage over `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            if storage.set_item(key, value).is_err() {
                leptos::logging::warn!("localStorage rejected write to {key}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            if storage.remove_item(key).is_err() {
                leptos::logging::warn!("localStorage rejected removal of {key}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}
