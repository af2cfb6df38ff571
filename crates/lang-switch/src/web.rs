//! Browser persistence through `window.localStorage`.

use lang_switch_core::{LanguageStore, StoreError};

/// A [`LanguageStore`] backed by the page's `localStorage`.
///
/// Outside a browser (a native target, or a wasm host without `window`) or
/// when storage is disabled, every call fails with [`StoreError::Unavailable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    #[cfg(target_arch = "wasm32")]
    fn storage() -> Result<web_sys::Storage, StoreError> {
        let window = web_sys::window().ok_or(StoreError::Unavailable)?;
        window
            .local_storage()
            .map_err(|err| {
                StoreError::Backend(anyhow::anyhow!(
                    "localStorage access was denied: {:?}",
                    err
                ))
            })?
            .ok_or(StoreError::Unavailable)
    }

    /// Native builds have no JavaScript host, and `web_sys::window()` would
    /// panic there.
    #[cfg(not(target_arch = "wasm32"))]
    fn storage() -> Result<web_sys::Storage, StoreError> {
        Err(StoreError::Unavailable)
    }
}

impl LanguageStore for LocalStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Self::storage()?.get_item(key).map_err(|err| {
            StoreError::Backend(anyhow::anyhow!(
                "localStorage.getItem('{}') failed: {:?}",
                key,
                err
            ))
        })
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::storage()?.set_item(key, value).map_err(|err| {
            StoreError::Backend(anyhow::anyhow!(
                "localStorage.setItem('{}') failed: {:?}",
                key,
                err
            ))
        })
    }
}
