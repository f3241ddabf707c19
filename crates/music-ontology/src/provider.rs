//! Library entry point tying the music schema, the sample catalog and the
//! durable file together.

use std::path::PathBuf;

use tracing::info;

use crate::config::{ProviderOptions, StoreFormat};
use crate::error::{Result, StorageError};
use crate::fixture;
use crate::model::graph::Graph;
use crate::music;
use crate::store;

/// Builds, saves and reloads the music ontology for one base identifier.
#[derive(Clone, Debug, Default)]
pub struct MusicOntologyProvider {
    options: ProviderOptions,
}

impl MusicOntologyProvider {
    /// Provider rooted at `base_iri`; a `file://` base also names the file.
    pub fn new(base_iri: impl Into<String>) -> Self {
        Self::with_options(ProviderOptions::with_base_iri(base_iri))
    }

    pub fn with_options(options: ProviderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ProviderOptions {
        &self.options
    }

    /// Build the schema and populate it with the sample catalog.
    pub fn create(&self) -> Result<Graph> {
        let mut graph = Graph::new(&self.options.base_iri, music::schema()?);
        fixture::populate(&mut graph)?;
        info!(
            base_iri = %self.options.base_iri,
            individuals = graph.len(),
            "created ontology"
        );
        Ok(graph)
    }

    /// Write `graph` to the configured location. Returns the triple count.
    pub fn save(&self, graph: &Graph) -> Result<u64> {
        let (path, format) = self.target()?;
        store::save(graph, &path, format)
    }

    /// Read the graph back from the configured location.
    pub fn load(&self) -> Result<Graph> {
        let (path, format) = self.target()?;
        store::load(&path, format, &self.options.base_iri, music::schema()?)
    }

    fn target(&self) -> Result<(PathBuf, StoreFormat)> {
        let path = self
            .options
            .location()
            .ok_or_else(|| StorageError::NoLocation(self.options.base_iri.clone()))?;
        let format = self.options.format_for(&path);
        Ok((path, format))
    }
}
