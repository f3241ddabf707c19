//! Derived class evaluation.
//!
//! Membership of a derived class is a pure function of the graph's current
//! facts. Nothing here caches, so a mutation is reflected by the next call.
//! Evaluation is closed-world: a missing fact counts as absent.

use super::graph::{Graph, Value};
use super::schema::{Condition, DerivedClassDef};
use crate::error::Result;

/// Whether `name` satisfies `def`: it is an instance of the base class and
/// the condition holds over its current values.
pub fn is_member(graph: &Graph, name: &str, def: &DerivedClassDef) -> Result<bool> {
    if !graph.is_instance_of(name, def.base)? {
        return Ok(false);
    }
    let values = graph.values(name, def.condition.property())?;
    let holds = match def.condition {
        Condition::HasValue { individual, .. } => values
            .iter()
            .any(|value| value.as_individual() == Some(individual)),
        Condition::ExactCount { count, .. } => values.len() == count,
        Condition::MinCount { count, .. } => values.len() >= count,
        Condition::NoValue { .. } => values.is_empty(),
        Condition::AllValuesIn { class, .. } => {
            !values.is_empty() && all_instances_of(graph, &values, class)?
        }
    };
    Ok(holds)
}

fn all_instances_of(graph: &Graph, values: &[&Value], class: &str) -> Result<bool> {
    for value in values {
        let Some(object) = value.as_individual() else {
            return Ok(false);
        };
        if !graph.is_instance_of(object, class)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Names of every derived class `name` currently belongs to, in schema order.
pub fn classes_of(graph: &Graph, name: &str) -> Result<Vec<&'static str>> {
    let mut out = Vec::new();
    for def in graph.schema().derived_classes() {
        if is_member(graph, name, def)? {
            out.push(def.name);
        }
    }
    Ok(out)
}

/// Names of every current member of the derived class `def`.
pub fn members<'g>(graph: &'g Graph, def: &DerivedClassDef) -> Result<Vec<&'g str>> {
    let mut out = Vec::new();
    for individual in graph.individuals() {
        if is_member(graph, individual.name(), def)? {
            out.push(individual.name());
        }
    }
    Ok(out)
}
