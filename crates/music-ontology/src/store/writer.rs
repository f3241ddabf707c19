use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use tracing::info;

use crate::config::StoreFormat;
use crate::emitter::ntriples::NTriplesEmitter;
use crate::emitter::turtle::TurtleEmitter;
use crate::emitter::TriplesEmitter;
use super::check_base_iri;
use crate::error::{Result, StorageError};
use crate::model::graph::{Graph, Value};
use crate::model::schema::Range;
use crate::model::vocab::{music, standard};

/// Write `graph` to `path`, replacing any existing file. Returns the number
/// of triples written.
pub fn save(graph: &Graph, path: &Path, format: StoreFormat) -> Result<u64> {
    check_base_iri(graph.iris())?;
    let io_error = |source: io::Error| StorageError::Io {
        path: path.to_path_buf(),
        source,
    };
    let writer = BufWriter::new(File::create(path).map_err(io_error)?);
    let count = match format {
        StoreFormat::NTriples => {
            let mut emitter = NTriplesEmitter::new(writer);
            write_graph(graph, &mut emitter).map_err(io_error)?;
            emitter.flush().map_err(io_error)?;
            emitter.triple_count()
        }
        StoreFormat::Turtle => {
            let mut emitter = TurtleEmitter::new(writer);
            write_graph(graph, &mut emitter).map_err(io_error)?;
            emitter.flush().map_err(io_error)?;
            emitter.triple_count()
        }
    };
    info!(
        path = %path.display(),
        %format,
        triples = count,
        individuals = graph.len(),
        "saved ontology"
    );
    Ok(count)
}

/// Emit the header, schema and individuals of `graph`.
pub fn write_graph<E: TriplesEmitter>(graph: &Graph, emitter: &mut E) -> io::Result<()> {
    let iris = graph.iris();
    emitter.add_prefix("rdf", standard::RDF)?;
    emitter.add_prefix("rdfs", standard::RDFS)?;
    emitter.add_prefix("owl", standard::OWL)?;
    emitter.add_prefix("xsd", standard::XSD)?;
    emitter.add_prefix(music::PREFIX, iris.namespace())?;

    emitter.emit_iri(iris.ontology_iri(), standard::RDF_TYPE, standard::OWL_ONTOLOGY)?;
    write_schema(graph, emitter)?;
    write_individuals(graph, emitter)
}

fn write_schema<E: TriplesEmitter>(graph: &Graph, emitter: &mut E) -> io::Result<()> {
    let iris = graph.iris();
    let schema = graph.schema();

    for class in schema.classes() {
        let id = iris.term_iri(class.name);
        emitter.emit_iri(&id, standard::RDF_TYPE, standard::OWL_CLASS)?;
        for parent in class.parents {
            emitter.emit_iri(&id, standard::RDFS_SUBCLASS_OF, &iris.term_iri(parent))?;
        }
        for other in class.disjoint_with {
            emitter.emit_iri(&id, standard::OWL_DISJOINT_WITH, &iris.term_iri(other))?;
        }
        if !class.comment.is_empty() {
            emitter.emit_literal(&id, standard::RDFS_COMMENT, class.comment)?;
        }
    }

    for derived in schema.derived_classes() {
        let id = iris.term_iri(derived.name);
        emitter.emit_iri(&id, standard::RDF_TYPE, standard::OWL_CLASS)?;
        emitter.emit_iri(&id, standard::RDFS_SUBCLASS_OF, &iris.term_iri(derived.base))?;
        let definition = format!(
            "{} Equivalent to: {} and {}",
            derived.comment, derived.base, derived.condition
        );
        emitter.emit_literal(&id, standard::RDFS_COMMENT, definition.trim_start())?;
    }

    for property in schema.properties() {
        let id = iris.term_iri(property.name);
        let kind = if property.range.is_object() {
            standard::OWL_OBJECT_PROPERTY
        } else {
            standard::OWL_DATATYPE_PROPERTY
        };
        emitter.emit_iri(&id, standard::RDF_TYPE, kind)?;
        if property.functional {
            emitter.emit_iri(&id, standard::RDF_TYPE, standard::OWL_FUNCTIONAL_PROPERTY)?;
        }
        emitter.emit_iri(&id, standard::RDFS_DOMAIN, &iris.term_iri(property.domain))?;
        let range = match property.range {
            Range::Class(class) => iris.term_iri(class),
            Range::Integer => standard::XSD_INTEGER.to_string(),
            Range::NonNegativeInteger => standard::XSD_NON_NEGATIVE_INTEGER.to_string(),
            Range::Text => standard::XSD_STRING.to_string(),
        };
        emitter.emit_iri(&id, standard::RDFS_RANGE, &range)?;
        if let Some(inverse) = property.inverse {
            emitter.emit_iri(&id, standard::OWL_INVERSE_OF, &iris.term_iri(inverse))?;
        }
        if !property.comment.is_empty() {
            emitter.emit_literal(&id, standard::RDFS_COMMENT, property.comment)?;
        }
    }
    Ok(())
}

fn write_individuals<E: TriplesEmitter>(graph: &Graph, emitter: &mut E) -> io::Result<()> {
    let iris = graph.iris();
    for individual in graph.individuals() {
        let id = iris.individual_iri(individual.name());
        emitter.emit_iri(&id, standard::RDF_TYPE, standard::OWL_NAMED_INDIVIDUAL)?;
        for class in individual.types() {
            emitter.emit_iri(&id, standard::RDF_TYPE, &iris.term_iri(class))?;
        }
        for (property, values) in individual.facts() {
            let predicate = iris.term_iri(property);
            for value in values {
                match value {
                    Value::Individual(object) => {
                        emitter.emit_iri(&id, &predicate, &iris.individual_iri(object))?
                    }
                    Value::Integer(n) => emitter.emit_int(&id, &predicate, *n)?,
                    Value::Text(text) => emitter.emit_literal(&id, &predicate, text)?,
                }
            }
        }
    }
    Ok(())
}
