//! Builder for creating and configuring Session instances.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::debug;

use super::Session;
use crate::{error::Result, models::Catalog};

/// Builder for creating and configuring Session instances.
#[derive(Debug, Clone, Default)]
pub struct SessionBuilder {
    catalog: Option<Arc<Catalog>>,
    catalog_path: Option<PathBuf>,
}

impl SessionBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses an already loaded catalog; takes precedence over any path.
    pub fn with_catalog(mut self, catalog: impl Into<Arc<Catalog>>) -> Self {
        self.catalog = Some(catalog.into());
        self
    }

    /// Sets a catalog JSON file to load.
    ///
    /// If not specified, `$XDG_CONFIG_HOME/ordercraft/catalog.json` is used
    /// when it exists, otherwise the built-in catalog.
    pub fn with_catalog_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.catalog_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Resolves the catalog without starting a session.
    ///
    /// # Errors
    ///
    /// Returns `WizardError::FileSystem` if the catalog file cannot be read,
    /// `WizardError::Catalog` if it is malformed.
    pub fn load_catalog(&self) -> Result<Arc<Catalog>> {
        if let Some(catalog) = &self.catalog {
            return Ok(Arc::clone(catalog));
        }
        if let Some(path) = &self.catalog_path {
            debug!("loading catalog from {}", path.display());
            return Ok(Arc::new(Catalog::from_path(path)?));
        }
        match Self::default_catalog_path() {
            Some(path) => {
                debug!("loading catalog from {}", path.display());
                Ok(Arc::new(Catalog::from_path(&path)?))
            }
            None => {
                debug!("using built-in catalog");
                Ok(Arc::new(Catalog::builtin()))
            }
        }
    }

    /// Builds the configured session.
    pub fn build(self) -> Result<Session> {
        Ok(Session::new(self.load_catalog()?))
    }

    /// Returns the user's catalog file following the XDG Base Directory
    /// specification, if one has been placed there.
    fn default_catalog_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("ordercraft").find_config_file("catalog.json")
    }
}
