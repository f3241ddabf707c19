//! An OWL ontology of the music domain: tracks, artists, albums, genres and
//! lyrics, populated with a sample catalog and persisted as RDF.

pub mod config;
pub mod emitter;
pub mod error;
pub mod fixture;
pub mod model;
pub mod music;
pub mod provider;
pub mod report;
pub mod store;

pub use config::{ProviderOptions, StoreFormat, DEFAULT_BASE_IRI};
pub use error::{ConstraintViolation, OntologyError, Result, SchemaError, StorageError};
pub use model::graph::{Graph, Individual, Value};
pub use provider::MusicOntologyProvider;
