//! Where the bundled resource comes from.

use lang_switch_core::LoadError;
use lang_switch_toml::LangConfig;
use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

/// Provides the raw JSON of the bundled resource.
///
/// The service reads the source on every language switch, so an
/// implementation should be cheap to call repeatedly.
pub trait ResourceSource: Send + Sync {
    /// A name used in logs and errors.
    fn name(&self) -> &str;

    fn read(&self) -> Result<Cow<'static, str>, LoadError>;
}

/// A resource compiled into the binary, typically with `include_str!`.
#[derive(Clone, Copy, Debug)]
pub struct StaticResource {
    name: &'static str,
    content: &'static str,
}

impl StaticResource {
    pub const fn new(name: &'static str, content: &'static str) -> Self {
        Self { name, content }
    }
}

impl ResourceSource for StaticResource {
    fn name(&self) -> &str {
        self.name
    }

    fn read(&self) -> Result<Cow<'static, str>, LoadError> {
        Ok(Cow::Borrowed(self.content))
    }
}

/// A resource file inside a `rust-embed` asset folder.
///
/// ```ignore
/// #[derive(rust_embed::RustEmbed)]
/// #[folder = "assets/"]
/// struct Assets;
///
/// let source = EmbeddedResource::<Assets>::new("Languages.json");
/// ```
pub struct EmbeddedResource<T> {
    path: String,
    _assets: PhantomData<fn() -> T>,
}

impl<T: RustEmbed> EmbeddedResource<T> {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            _assets: PhantomData,
        }
    }

    /// Uses the `resource` path configured in `lang.toml`.
    pub fn from_config(config: &LangConfig) -> Self {
        Self::new(config.resource_path())
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    fn unavailable(&self, reason: impl fmt::Display) -> LoadError {
        LoadError::ResourceUnavailable {
            name: self.path.clone(),
            reason: reason.to_string(),
        }
    }
}

impl<T: RustEmbed> ResourceSource for EmbeddedResource<T> {
    fn name(&self) -> &str {
        &self.path
    }

    fn read(&self) -> Result<Cow<'static, str>, LoadError> {
        let file = T::get(&self.path).ok_or_else(|| self.unavailable("not found in embedded assets"))?;

        match file.data {
            Cow::Borrowed(bytes) => std::str::from_utf8(bytes)
                .map(Cow::Borrowed)
                .map_err(|e| self.unavailable(format!("invalid UTF-8: {}", e))),
            Cow::Owned(bytes) => String::from_utf8(bytes)
                .map(Cow::Owned)
                .map_err(|e| self.unavailable(format!("invalid UTF-8: {}", e))),
        }
    }
}

impl<T> fmt::Debug for EmbeddedResource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbeddedResource")
            .field("path", &self.path)
            .finish()
    }
}
