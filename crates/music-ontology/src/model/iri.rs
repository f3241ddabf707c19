//! IRI minting for ontology terms and individuals.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters that need percent-encoding in an IRI fragment.
/// We keep alphanumeric, -, _, ., ~ as unreserved per RFC 3987.
const IRI_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'!')
    .add(b'"')
    .add(b'#')
    .add(b'$')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'*')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Generates consistent IRIs for everything living in one ontology.
///
/// A base of `file://ontology.owl` yields the ontology IRI
/// `file://ontology.owl` and entity IRIs such as `file://ontology.owl#Track`.
/// A base already ending in `#` or `/` is used as the namespace verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IriMinter {
    ontology_iri: String,
    namespace: String,
}

impl IriMinter {
    pub fn new(base_iri: &str) -> Self {
        let base_iri = base_iri.trim();
        if base_iri.ends_with('#') || base_iri.ends_with('/') {
            Self {
                ontology_iri: base_iri.trim_end_matches('#').to_string(),
                namespace: base_iri.to_string(),
            }
        } else {
            Self {
                ontology_iri: base_iri.to_string(),
                namespace: format!("{base_iri}#"),
            }
        }
    }

    /// IRI of the ontology header node.
    pub fn ontology_iri(&self) -> &str {
        &self.ontology_iri
    }

    /// Namespace every class, property and individual is minted under.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Escape a string for use in an IRI fragment.
    fn escape(value: &str) -> String {
        utf8_percent_encode(value, IRI_ENCODE_SET).to_string()
    }

    /// IRI for a schema term (class or property local name).
    pub fn term_iri(&self, local_name: &str) -> String {
        format!("{}{}", self.namespace, Self::escape(local_name))
    }

    /// IRI for a named individual.
    pub fn individual_iri(&self, name: &str) -> String {
        self.term_iri(name)
    }

    /// Recover the unescaped local name of an IRI minted by this minter.
    ///
    /// Returns `None` for IRIs outside the namespace or whose escapes do not
    /// decode to UTF-8.
    pub fn local_name(&self, iri: &str) -> Option<String> {
        let local = iri.strip_prefix(&self.namespace)?;
        if local.is_empty() {
            return None;
        }
        percent_decode_str(local)
            .decode_utf8()
            .ok()
            .map(|name| name.into_owned())
    }
}
