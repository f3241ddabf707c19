//! The graph handle: named individuals, their asserted classes and their
//! property values.
//!
//! Every mutation goes through [`Graph::assert_type`] or
//! [`Graph::assert_value`], which enforce the schema's disjointness, domain,
//! range and functional constraints and keep inverse properties mutually
//! consistent. Derived class membership is never stored; it is evaluated by
//! [`derived`](super::derived) whenever it is asked for.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use tracing::debug;

use super::derived;
use super::iri::IriMinter;
use super::schema::{PropertyDef, Range, Schema};
use crate::error::{ConstraintViolation, OntologyError, Result};

/// A property value.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Value {
    /// Reference to another individual, by name.
    Individual(String),
    Integer(i64),
    Text(String),
}

impl Value {
    #[must_use]
    pub fn as_individual(&self) -> Option<&str> {
        match self {
            Value::Individual(name) => Some(name),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Individual(name) => write!(f, "{name}"),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Text(text) => write!(f, "{text:?}"),
        }
    }
}

/// A named individual with its asserted classes and property values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Individual {
    name: String,
    types: BTreeSet<&'static str>,
    facts: BTreeMap<&'static str, BTreeSet<Value>>,
}

impl Individual {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            types: BTreeSet::new(),
            facts: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Asserted classes only; see [`Graph::classes_of`] for the full set.
    #[must_use]
    pub fn types(&self) -> &BTreeSet<&'static str> {
        &self.types
    }

    /// Property values keyed by property IRI local name.
    #[must_use]
    pub fn facts(&self) -> &BTreeMap<&'static str, BTreeSet<Value>> {
        &self.facts
    }
}

/// An in-memory ontology: a validated schema plus the individuals described
/// with it.
///
/// Two graphs compare equal when they share base IRI and schema and hold the
/// same individuals with the same classes and values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    iris: IriMinter,
    schema: Schema,
    individuals: BTreeMap<String, Individual>,
}

impl Graph {
    /// Create an empty graph for `schema` rooted at `base_iri`.
    #[must_use]
    pub fn new(base_iri: &str, schema: Schema) -> Self {
        Self {
            iris: IriMinter::new(base_iri),
            schema,
            individuals: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn iris(&self) -> &IriMinter {
        &self.iris
    }

    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Individuals in name order.
    pub fn individuals(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.values()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.individuals.contains_key(name)
    }

    pub fn individual(&self, name: &str) -> Result<&Individual> {
        self.individuals
            .get(name)
            .ok_or_else(|| OntologyError::individual_not_found(name))
    }

    fn property(&self, key: &str) -> Result<PropertyDef> {
        self.schema
            .property(key)
            .cloned()
            .ok_or_else(|| OntologyError::property_not_found(key))
    }

    /// Add an individual without any class.
    pub fn add_individual(&mut self, name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(ConstraintViolation::new(name, "individual names cannot be blank").into());
        }
        if self.schema.is_term(name) {
            return Err(
                ConstraintViolation::new(name, "name is already used by a schema term").into(),
            );
        }
        if self.individuals.contains_key(name) {
            return Err(ConstraintViolation::new(name, "individual is already declared").into());
        }
        self.individuals
            .insert(name.to_string(), Individual::new(name));
        Ok(())
    }

    /// Add a new individual of `class`.
    pub fn declare(&mut self, class: &str, name: &str) -> Result<()> {
        self.assertable_class(name, class)?;
        self.add_individual(name)?;
        self.assert_type(name, class)?;
        debug!(class, name, "declared individual");
        Ok(())
    }

    fn assertable_class(&self, subject: &str, class: &str) -> Result<&'static str> {
        if let Some(def) = self.schema.class(class) {
            return Ok(def.name);
        }
        if self.schema.derived_class(class).is_some() {
            return Err(ConstraintViolation::new(
                subject,
                format!("`{class}` is derived and cannot be asserted"),
            )
            .into());
        }
        Err(OntologyError::class_not_found(class))
    }

    /// Assert that `name` is an instance of `class`, rejecting classes
    /// disjoint with one it already has.
    pub fn assert_type(&mut self, name: &str, class: &str) -> Result<()> {
        let class = self.assertable_class(name, class)?;
        let individual = self.individual(name)?;
        for existing in individual.types() {
            if let Some((a, b)) = self.schema.disjoint_pair(existing, class) {
                return Err(ConstraintViolation::new(
                    name,
                    format!("cannot be both `{existing}` and `{class}`: `{a}` and `{b}` are disjoint"),
                )
                .into());
            }
        }
        if let Some(individual) = self.individuals.get_mut(name) {
            individual.types.insert(class);
        }
        Ok(())
    }

    /// Whether `name` has an asserted class that is `class` or one of its
    /// subclasses.
    fn has_type(&self, name: &str, class: &str) -> bool {
        self.individuals.get(name).is_some_and(|individual| {
            individual
                .types
                .iter()
                .any(|asserted| self.schema.is_subclass_of(asserted, class))
        })
    }

    fn stored(&self, name: &str, property: &str) -> Option<&BTreeSet<Value>> {
        self.individuals
            .get(name)
            .and_then(|individual| individual.facts.get(property))
    }

    fn insert_fact(&mut self, name: &str, property: &'static str, value: Value) {
        if let Some(individual) = self.individuals.get_mut(name) {
            individual.facts.entry(property).or_default().insert(value);
        }
    }

    /// Assert `subject property value`, recording the inverse fact when the
    /// property has an inverse. Re-asserting an existing fact is a no-op.
    pub fn assert_value(&mut self, subject: &str, property: &str, value: Value) -> Result<()> {
        let property = self.property(property)?;
        self.individual(subject)?;
        if !self.has_type(subject, property.domain) {
            return Err(ConstraintViolation::new(
                subject,
                format!("`{}` only applies to `{}`", property.accessor, property.domain),
            )
            .into());
        }
        self.check_range(subject, &property, &value)?;

        let current = self.stored(subject, property.name);
        if current.is_some_and(|values| values.contains(&value)) {
            return Ok(());
        }
        if property.functional {
            if let Some(existing) = current.and_then(|values| values.iter().next()) {
                return Err(ConstraintViolation::new(
                    subject,
                    format!(
                        "`{}` is functional and already holds {existing}, cannot add {value}",
                        property.accessor
                    ),
                )
                .into());
            }
        }

        let inverse = match (self.schema.inverse_of(&property).cloned(), &value) {
            (Some(inverse), Value::Individual(object)) => {
                let back = Value::Individual(subject.to_string());
                let held = self.stored(object, inverse.name);
                if inverse.functional && !held.is_some_and(|values| values.contains(&back)) {
                    if let Some(existing) = held.and_then(|values| values.iter().next()) {
                        return Err(ConstraintViolation::new(
                            object.as_str(),
                            format!(
                                "`{}` is functional and already holds {existing}, cannot add {subject}",
                                inverse.accessor
                            ),
                        )
                        .into());
                    }
                }
                Some((object.clone(), inverse.name, back))
            }
            _ => None,
        };

        debug!(subject, property = property.name, %value, "asserted fact");
        self.insert_fact(subject, property.name, value);
        if let Some((object, inverse, back)) = inverse {
            self.insert_fact(&object, inverse, back);
        }
        Ok(())
    }

    fn check_range(&self, subject: &str, property: &PropertyDef, value: &Value) -> Result<()> {
        let mismatch = |expected: &str| -> OntologyError {
            ConstraintViolation::new(
                subject,
                format!("`{}` expects {expected}, got {value}", property.accessor),
            )
            .into()
        };
        match (property.range, value) {
            (Range::Class(class), Value::Individual(object)) => {
                self.individual(object)?;
                if self.has_type(object, class) {
                    Ok(())
                } else {
                    Err(mismatch(&format!("a `{class}`")))
                }
            }
            (Range::Integer, Value::Integer(_)) | (Range::Text, Value::Text(_)) => Ok(()),
            (Range::NonNegativeInteger, Value::Integer(n)) if *n >= 0 => Ok(()),
            (Range::Class(class), _) => Err(mismatch(&format!("a `{class}`"))),
            (Range::Integer, _) => Err(mismatch("an integer")),
            (Range::NonNegativeInteger, _) => Err(mismatch("a non-negative integer")),
            (Range::Text, _) => Err(mismatch("text")),
        }
    }

    /// Link `subject` to the individual `object`.
    pub fn relate(&mut self, subject: &str, property: &str, object: &str) -> Result<()> {
        self.assert_value(subject, property, Value::Individual(object.to_string()))
    }

    pub fn set_integer(&mut self, subject: &str, property: &str, value: i64) -> Result<()> {
        self.assert_value(subject, property, Value::Integer(value))
    }

    pub fn set_text(&mut self, subject: &str, property: &str, value: &str) -> Result<()> {
        self.assert_value(subject, property, Value::Text(value.to_string()))
    }

    /// All values of `property` on `name`, in value order.
    pub fn values(&self, name: &str, property: &str) -> Result<Vec<&Value>> {
        let property = self.property(property)?;
        self.individual(name)?;
        Ok(self
            .stored(name, property.name)
            .map(|values| values.iter().collect())
            .unwrap_or_default())
    }

    /// Names of the individuals `name` is linked to through `property`.
    pub fn objects(&self, name: &str, property: &str) -> Result<Vec<&str>> {
        Ok(self
            .values(name, property)?
            .into_iter()
            .filter_map(Value::as_individual)
            .collect())
    }

    /// The single object of a functional property, if set.
    pub fn object(&self, name: &str, property: &str) -> Result<Option<&str>> {
        Ok(self.objects(name, property)?.into_iter().next())
    }

    pub fn integer(&self, name: &str, property: &str) -> Result<Option<i64>> {
        Ok(self
            .values(name, property)?
            .into_iter()
            .find_map(Value::as_integer))
    }

    pub fn text(&self, name: &str, property: &str) -> Result<Option<&str>> {
        Ok(self
            .values(name, property)?
            .into_iter()
            .find_map(Value::as_text))
    }

    /// Whether `name` belongs to `class`, either through an asserted
    /// (sub)class or by satisfying a derived class's condition.
    pub fn is_instance_of(&self, name: &str, class: &str) -> Result<bool> {
        self.individual(name)?;
        if let Some(def) = self.schema.derived_class(class) {
            return derived::is_member(self, name, def);
        }
        if self.schema.class(class).is_none() {
            return Err(OntologyError::class_not_found(class));
        }
        Ok(self.has_type(name, class))
    }

    /// Names of every instance of `class`, in name order.
    pub fn instances_of(&self, class: &str) -> Result<Vec<&str>> {
        if !self.schema.has_class(class) {
            return Err(OntologyError::class_not_found(class));
        }
        let mut out = Vec::new();
        for individual in self.individuals.values() {
            if self.is_instance_of(&individual.name, class)? {
                out.push(individual.name.as_str());
            }
        }
        Ok(out)
    }

    /// Every class `name` belongs to: asserted classes, their ancestors and
    /// derived classes whose condition currently holds.
    pub fn classes_of(&self, name: &str) -> Result<BTreeSet<&'static str>> {
        let individual = self.individual(name)?;
        let mut classes: BTreeSet<&'static str> = individual
            .types
            .iter()
            .flat_map(|class| self.schema.ancestors(class))
            .collect();
        classes.extend(derived::classes_of(self, name)?);
        Ok(classes)
    }
}
