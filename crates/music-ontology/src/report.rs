//! Serializable catalog summary used by the `show` command.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::Result;
use crate::model::graph::Graph;

/// One individual with every class it currently belongs to.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct IndividualReport {
    pub name: String,
    pub classes: Vec<String>,
}

/// Catalog overview: individuals per class, asserted and derived.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CatalogReport {
    pub ontology_iri: String,
    pub individual_count: usize,
    /// Class name to member names, for every class with at least one member.
    pub classes: BTreeMap<String, Vec<String>>,
    pub individuals: Vec<IndividualReport>,
}

impl CatalogReport {
    pub fn from_graph(graph: &Graph) -> Result<Self> {
        let mut classes: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut individuals = Vec::with_capacity(graph.len());
        for individual in graph.individuals() {
            let name = individual.name().to_string();
            let memberships = graph.classes_of(individual.name())?;
            for class in &memberships {
                classes
                    .entry((*class).to_string())
                    .or_default()
                    .push(name.clone());
            }
            individuals.push(IndividualReport {
                name,
                classes: memberships.into_iter().map(str::to_string).collect(),
            });
        }
        Ok(Self {
            ontology_iri: graph.iris().ontology_iri().to_string(),
            individual_count: graph.len(),
            classes,
            individuals,
        })
    }

    /// Members of `class`, empty when it has none.
    pub fn members(&self, class: &str) -> &[String] {
        self.classes.get(class).map(Vec::as_slice).unwrap_or_default()
    }
}

impl std::fmt::Display for CatalogReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Ontology {} ({} individuals)", self.ontology_iri, self.individual_count)?;
        for (class, members) in &self.classes {
            writeln!(f, "{class} ({}):", members.len())?;
            for member in members {
                writeln!(f, "  {member}")?;
            }
        }
        Ok(())
    }
}
