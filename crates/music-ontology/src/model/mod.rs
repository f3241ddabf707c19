pub mod derived;
pub mod graph;
pub mod iri;
pub mod schema;
pub mod vocab;
