//! Provider options and on-disk format selection.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use percent_encoding::percent_decode_str;

/// Default base identifier: a local file next to the working directory.
pub const DEFAULT_BASE_IRI: &str = "file://ontology.owl";

/// RDF serialization used for the durable file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StoreFormat {
    #[default]
    NTriples,
    Turtle,
}

impl StoreFormat {
    /// Turtle for `.ttl`/`.turtle` files, N-Triples for anything else.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("ttl") || ext.eq_ignore_ascii_case("turtle") => {
                StoreFormat::Turtle
            }
            _ => StoreFormat::NTriples,
        }
    }
}

impl FromStr for StoreFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ntriples" | "nt" => Ok(StoreFormat::NTriples),
            "turtle" | "ttl" => Ok(StoreFormat::Turtle),
            other => Err(format!("Unknown format: {other}. Use 'ntriples' or 'turtle'.")),
        }
    }
}

impl fmt::Display for StoreFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreFormat::NTriples => write!(f, "ntriples"),
            StoreFormat::Turtle => write!(f, "turtle"),
        }
    }
}

/// Options controlling where and how the ontology is stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderOptions {
    /// Base identifier the ontology's IRIs are minted from.
    pub base_iri: String,
    /// Explicit file location; derived from a `file://` base IRI when unset.
    pub path: Option<PathBuf>,
    /// Explicit format; derived from the file extension when unset.
    pub format: Option<StoreFormat>,
}

impl Default for ProviderOptions {
    fn default() -> Self {
        Self {
            base_iri: DEFAULT_BASE_IRI.to_string(),
            path: None,
            format: None,
        }
    }
}

impl ProviderOptions {
    #[must_use]
    pub fn with_base_iri(base_iri: impl Into<String>) -> Self {
        Self {
            base_iri: base_iri.into(),
            ..Self::default()
        }
    }

    /// File the ontology lives in: the explicit path, or the percent-decoded
    /// path part of a `file://` base IRI (fragment dropped).
    #[must_use]
    pub fn location(&self) -> Option<PathBuf> {
        if let Some(path) = &self.path {
            return Some(path.clone());
        }
        let rest = self.base_iri.strip_prefix("file://")?;
        let rest = rest.split('#').next().unwrap_or(rest);
        if rest.is_empty() {
            None
        } else {
            Some(PathBuf::from(
                percent_decode_str(rest).decode_utf8_lossy().into_owned(),
            ))
        }
    }

    /// The explicit format, else the one implied by `path`.
    #[must_use]
    pub fn format_for(&self, path: &Path) -> StoreFormat {
        self.format.unwrap_or_else(|| StoreFormat::from_path(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_location_is_relative_file() {
        let options = ProviderOptions::default();
        assert_eq!(options.location(), Some(PathBuf::from("ontology.owl")));
    }

    #[test]
    fn absolute_file_iri_maps_to_absolute_path() {
        let options = ProviderOptions::with_base_iri("file:///tmp/music.ttl#");
        assert_eq!(options.location(), Some(PathBuf::from("/tmp/music.ttl")));
        assert_eq!(
            options.format_for(&PathBuf::from("/tmp/music.ttl")),
            StoreFormat::Turtle
        );
    }

    #[test]
    fn file_iri_path_is_percent_decoded() {
        let options = ProviderOptions::with_base_iri("file:///tmp/my%20music.owl");
        assert_eq!(options.location(), Some(PathBuf::from("/tmp/my music.owl")));
    }

    #[test]
    fn http_base_has_no_location_without_path() {
        let options = ProviderOptions::with_base_iri("http://example.org/music");
        assert_eq!(options.location(), None);

        let options = ProviderOptions {
            path: Some(PathBuf::from("music.nt")),
            ..options
        };
        assert_eq!(options.location(), Some(PathBuf::from("music.nt")));
    }

    #[test]
    fn format_parses_short_and_long_names() {
        assert_eq!("nt".parse::<StoreFormat>(), Ok(StoreFormat::NTriples));
        assert_eq!("Turtle".parse::<StoreFormat>(), Ok(StoreFormat::Turtle));
        assert!("rdfxml".parse::<StoreFormat>().is_err());
    }
}
