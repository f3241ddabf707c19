use std::collections::BTreeMap;
use std::io::{BufReader, Cursor, ErrorKind};
use std::path::Path;

use sophia::api::prelude::*;
use sophia::api::source::StreamError;
use sophia::api::term::TermKind;
use tracing::{debug, info};

use super::check_base_iri;
use crate::config::StoreFormat;
use crate::error::{OntologyError, Result, StorageError};
use crate::model::graph::{Graph, Value};
use crate::model::iri::IriMinter;
use crate::model::schema::{Range, Schema};
use crate::model::vocab::standard;

/// Object position of a parsed statement.
#[derive(Debug)]
enum Object {
    Iri(String),
    Literal { lexical: String, datatype: String },
}

#[derive(Debug)]
struct Statement {
    subject: String,
    predicate: String,
    object: Object,
}

/// Classes and facts collected for one individual before it is rebuilt.
#[derive(Debug, Default)]
struct Pending {
    types: Vec<&'static str>,
    facts: Vec<(&'static str, Value)>,
}

/// Read the graph stored at `path`, rebuilding it through the same
/// constraint-checked operations used to create it.
pub fn load(path: &Path, format: StoreFormat, base_iri: &str, schema: Schema) -> Result<Graph> {
    let iris = IriMinter::new(base_iri);
    check_base_iri(&iris)?;
    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => StorageError::Missing {
            path: path.to_path_buf(),
        },
        _ => StorageError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let statements = parse(path, &bytes, format)?;
    let triples = statements.len();

    let mut reader = Reader {
        path,
        iris,
        schema: &schema,
        pending: BTreeMap::new(),
    };
    reader.check_header(&statements)?;
    for statement in &statements {
        reader.collect(statement)?;
    }
    let pending = reader.finish()?;

    let mut graph = Graph::new(base_iri, schema);
    rebuild(&mut graph, pending).map_err(|err| match err {
        OntologyError::Constraint(violation) => corrupt(path, violation.to_string()).into(),
        other => other,
    })?;

    info!(
        path = %path.display(),
        %format,
        triples,
        individuals = graph.len(),
        "loaded ontology"
    );
    Ok(graph)
}

/// Replay the collected individuals: names first, then types, then facts.
fn rebuild(graph: &mut Graph, pending: BTreeMap<String, Pending>) -> Result<()> {
    for name in pending.keys() {
        graph.add_individual(name)?;
    }
    for (name, individual) in &pending {
        for class in &individual.types {
            graph.assert_type(name, class)?;
        }
    }
    for (name, individual) in pending {
        for (property, value) in individual.facts {
            graph.assert_value(&name, property, value)?;
        }
    }
    Ok(())
}

fn parse(path: &Path, bytes: &[u8], format: StoreFormat) -> Result<Vec<Statement>, StorageError> {
    let reader = BufReader::new(Cursor::new(bytes));
    let mut out = Vec::new();
    let result = match format {
        StoreFormat::NTriples => sophia::turtle::parser::nt::parse_bufread(reader)
            .try_for_each_triple(|t| -> Result<(), StorageError> {
                out.push(statement(path, &t)?);
                Ok(())
            }),
        StoreFormat::Turtle => sophia::turtle::parser::turtle::parse_bufread(reader)
            .try_for_each_triple(|t| -> Result<(), StorageError> {
                out.push(statement(path, &t)?);
                Ok(())
            }),
    };
    match result {
        Ok(()) => Ok(out),
        Err(StreamError::SourceError(e)) => Err(StorageError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        }),
        Err(StreamError::SinkError(e)) => Err(e),
    }
}

fn is_integer_type(datatype: &str) -> bool {
    datatype == standard::XSD_INTEGER || datatype == standard::XSD_NON_NEGATIVE_INTEGER
}

fn corrupt(path: &Path, message: impl Into<String>) -> StorageError {
    StorageError::Corrupt {
        path: path.to_path_buf(),
        message: message.into(),
    }
}

fn statement<T: Triple>(path: &Path, triple: &T) -> Result<Statement, StorageError> {
    Ok(Statement {
        subject: node(path, &triple.s())?,
        predicate: node(path, &triple.p())?,
        object: object(path, &triple.o())?,
    })
}

fn node<T: Term>(path: &Path, term: &T) -> Result<String, StorageError> {
    match term.kind() {
        TermKind::Iri => term
            .iri()
            .map(|iri| iri.as_str().to_string())
            .ok_or_else(|| corrupt(path, "IRI term without an IRI")),
        TermKind::BlankNode => Err(corrupt(path, "blank nodes are not supported")),
        other => Err(corrupt(path, format!("unexpected {other:?} in subject or predicate"))),
    }
}

fn object<T: Term>(path: &Path, term: &T) -> Result<Object, StorageError> {
    if term.kind() != TermKind::Literal {
        return node(path, term).map(Object::Iri);
    }
    let lexical = term
        .lexical_form()
        .map(|lex| lex.to_string())
        .ok_or_else(|| corrupt(path, "literal without a lexical form"))?;
    let datatype = term
        .datatype()
        .map(|dt| dt.as_str().to_string())
        .unwrap_or_else(|| standard::XSD_STRING.to_string());
    Ok(Object::Literal { lexical, datatype })
}

struct Reader<'a> {
    path: &'a Path,
    iris: IriMinter,
    schema: &'a Schema,
    pending: BTreeMap<String, Pending>,
}

impl Reader<'_> {
    fn unknown(&self, term: &str) -> StorageError {
        StorageError::UnknownTerm {
            path: self.path.to_path_buf(),
            term: term.to_string(),
        }
    }

    fn check_header(&self, statements: &[Statement]) -> Result<(), StorageError> {
        let header = statements.iter().find(|s| {
            s.predicate == standard::RDF_TYPE
                && matches!(&s.object, Object::Iri(class) if class == standard::OWL_ONTOLOGY)
        });
        let Some(header) = header else {
            return Err(corrupt(self.path, "no owl:Ontology declaration"));
        };
        if header.subject != self.iris.ontology_iri() {
            return Err(StorageError::OntologyMismatch {
                path: self.path.to_path_buf(),
                expected: self.iris.ontology_iri().to_string(),
                found: header.subject.clone(),
            });
        }
        Ok(())
    }

    /// Sort one statement into the pending individuals. Header and schema
    /// statements are skipped; the schema is rebuilt from code.
    fn collect(&mut self, statement: &Statement) -> Result<(), StorageError> {
        if statement.subject == self.iris.ontology_iri() {
            return Ok(());
        }
        let Some(subject) = self.iris.local_name(&statement.subject) else {
            return Err(self.unknown(&statement.subject));
        };
        if self.schema.is_term(&subject) {
            return Ok(());
        }

        if statement.predicate == standard::RDF_TYPE {
            let Object::Iri(class_iri) = &statement.object else {
                return Err(corrupt(self.path, format!("`{subject}` has a literal type")));
            };
            let class = self.class(class_iri)?;
            let entry = self.pending.entry(subject).or_default();
            if let Some(class) = class {
                entry.types.push(class);
            }
            return Ok(());
        }

        let schema = self.schema;
        let property = self
            .iris
            .local_name(&statement.predicate)
            .and_then(|local| schema.properties().iter().find(|p| p.name == local))
            .ok_or_else(|| self.unknown(&statement.predicate))?;
        let value = match (property.range, &statement.object) {
            (Range::Class(_), Object::Iri(iri)) => {
                let object = self.iris.local_name(iri).ok_or_else(|| self.unknown(iri))?;
                Value::Individual(object)
            }
            (Range::Integer | Range::NonNegativeInteger, Object::Literal { lexical, datatype })
                if is_integer_type(datatype) =>
            {
                let n = lexical.trim().parse::<i64>().map_err(|_| {
                    corrupt(
                        self.path,
                        format!("`{subject}` {}: `{lexical}` is not an integer", property.name),
                    )
                })?;
                Value::Integer(n)
            }
            (Range::Text, Object::Literal { lexical, .. }) => Value::Text(lexical.clone()),
            (_, object) => {
                return Err(corrupt(
                    self.path,
                    format!("`{subject}` {}: unexpected value {object:?}", property.name),
                ));
            }
        };
        self.pending
            .entry(subject)
            .or_default()
            .facts
            .push((property.name, value));
        Ok(())
    }

    /// `None` for `owl:NamedIndividual`, the class name for a schema class.
    fn class(&self, iri: &str) -> Result<Option<&'static str>, StorageError> {
        if iri == standard::OWL_NAMED_INDIVIDUAL {
            return Ok(None);
        }
        self.iris
            .local_name(iri)
            .and_then(|local| self.schema.class(&local))
            .map(|def| Some(def.name))
            .ok_or_else(|| self.unknown(iri))
    }

    /// Check every referenced individual is described in the file.
    fn finish(self) -> Result<BTreeMap<String, Pending>, StorageError> {
        for individual in self.pending.values() {
            for (_, value) in &individual.facts {
                if let Value::Individual(object) = value {
                    if !self.pending.contains_key(object) {
                        return Err(self.unknown(&self.iris.individual_iri(object)));
                    }
                }
            }
        }
        debug!(individuals = self.pending.len(), "collected individuals");
        Ok(self.pending)
    }
}
