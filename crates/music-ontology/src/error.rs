//! Error taxonomy for schema declaration, fact assertion and persistence.

use std::path::PathBuf;

use thiserror::Error;

/// Contradictory class or property declarations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("`{0}` is declared more than once")]
    Duplicate(String),
    #[error("`{owner}` refers to unknown class `{class}`")]
    UnknownClass { owner: String, class: String },
    #[error("`{owner}` refers to unknown property `{property}`")]
    UnknownProperty { owner: String, property: String },
    #[error("class `{0}` cannot be disjoint with itself")]
    SelfDisjoint(String),
    #[error("inverse pair `{property}` / `{inverse}` is inconsistent: {reason}")]
    InconsistentInverse {
        property: String,
        inverse: String,
        reason: String,
    },
    #[error("derived class `{class}`: {reason}")]
    InvalidDerivedClass { class: String, reason: String },
}

/// Fact or type assertion that breaks a declared constraint.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("constraint violated by `{subject}`: {reason}")]
pub struct ConstraintViolation {
    pub subject: String,
    pub reason: String,
}

impl ConstraintViolation {
    pub fn new(subject: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            reason: reason.into(),
        }
    }
}

/// Failures while writing or reading the durable representation.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on `{path}`: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("`{path}` does not exist")]
    Missing { path: PathBuf },
    #[error("failed to parse `{path}`: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("`{path}` is corrupt: {message}")]
    Corrupt { path: PathBuf, message: String },
    #[error("`{path}` describes ontology `{found}`, expected `{expected}`")]
    OntologyMismatch {
        path: PathBuf,
        expected: String,
        found: String,
    },
    #[error("`{path}` references unknown term `{term}`")]
    UnknownTerm { path: PathBuf, term: String },
    #[error("base IRI `{0}` does not name a local file; set an explicit path")]
    NoLocation(String),
    #[error("base IRI `{base}` cannot be stored: {message}")]
    InvalidBaseIri { base: String, message: String },
}

/// Top-level error returned by the library.
#[derive(Debug, Error)]
pub enum OntologyError {
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Constraint(#[from] ConstraintViolation),
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("no {kind} named `{name}`")]
    NotFound { kind: &'static str, name: String },
}

impl OntologyError {
    pub(crate) fn individual_not_found(name: &str) -> Self {
        Self::NotFound {
            kind: "individual",
            name: name.to_string(),
        }
    }

    pub(crate) fn class_not_found(name: &str) -> Self {
        Self::NotFound {
            kind: "class",
            name: name.to_string(),
        }
    }

    pub(crate) fn property_not_found(name: &str) -> Self {
        Self::NotFound {
            kind: "property",
            name: name.to_string(),
        }
    }
}

pub type Result<T, E = OntologyError> = std::result::Result<T, E>;
