//! Explicit schema description: classes, properties, axioms and derived
//! classes.
//!
//! A [`Schema`] is plain data assembled through a [`SchemaBuilder`], which
//! rejects any declaration that contradicts one made before it. The graph
//! store consumes the finished schema generically; nothing about the music
//! domain is hard-coded here.

use std::collections::BTreeSet;
use std::fmt;

use tracing::debug;

use crate::error::SchemaError;

/// An OWL class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassDef {
    pub name: &'static str,
    pub comment: &'static str,
    /// Direct parents (`rdfs:subClassOf`).
    pub parents: &'static [&'static str],
    /// Classes no individual may share with this one (`owl:disjointWith`).
    /// Declaring it on one side is enough.
    pub disjoint_with: &'static [&'static str],
}

/// What a property's values may be.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Range {
    /// Individuals of the given class.
    Class(&'static str),
    Integer,
    NonNegativeInteger,
    Text,
}

impl Range {
    #[must_use]
    pub fn class(self) -> Option<&'static str> {
        match self {
            Range::Class(class) => Some(class),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_object(self) -> bool {
        matches!(self, Range::Class(_))
    }
}

/// An OWL object or datatype property.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyDef {
    /// Local name of the property IRI (e.g. `has_track`).
    pub name: &'static str,
    /// Short name used when reading and writing facts (e.g. `tracks`).
    pub accessor: &'static str,
    pub comment: &'static str,
    pub domain: &'static str,
    pub range: Range,
    /// At most one value per subject (`owl:FunctionalProperty`).
    pub functional: bool,
    /// Name of the inverse property (`owl:inverseOf`). Both sides must
    /// declare each other.
    pub inverse: Option<&'static str>,
}

/// Membership condition of a derived class, evaluated over current facts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition {
    /// The property has the named individual among its values.
    HasValue {
        property: &'static str,
        individual: &'static str,
    },
    /// The property has exactly `count` values.
    ExactCount { property: &'static str, count: usize },
    /// The property has at least `count` values.
    MinCount { property: &'static str, count: usize },
    /// The property has no value at all.
    NoValue { property: &'static str },
    /// The property has at least one value and every value is an instance
    /// of `class`.
    AllValuesIn {
        property: &'static str,
        class: &'static str,
    },
}

impl Condition {
    #[must_use]
    pub fn property(&self) -> &'static str {
        match *self {
            Condition::HasValue { property, .. }
            | Condition::ExactCount { property, .. }
            | Condition::MinCount { property, .. }
            | Condition::NoValue { property }
            | Condition::AllValuesIn { property, .. } => property,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::HasValue {
                property,
                individual,
            } => write!(f, "{property} value {individual}"),
            Condition::ExactCount { property, count } => write!(f, "{property} exactly {count}"),
            Condition::MinCount { property, count } => write!(f, "{property} min {count}"),
            Condition::NoValue { property } => write!(f, "{property} exactly 0"),
            Condition::AllValuesIn { property, class } => {
                write!(f, "{property} some {class} and {property} only {class}")
            }
        }
    }
}

/// A class whose membership is computed, never asserted
/// (`owl:equivalentClass` of `base and condition`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DerivedClassDef {
    pub name: &'static str,
    pub comment: &'static str,
    pub base: &'static str,
    pub condition: Condition,
}

/// A validated schema.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Schema {
    classes: Vec<ClassDef>,
    properties: Vec<PropertyDef>,
    derived: Vec<DerivedClassDef>,
}

impl Schema {
    /// Start declaring a new schema.
    #[must_use]
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Asserted classes in declaration order.
    #[must_use]
    pub fn classes(&self) -> &[ClassDef] {
        &self.classes
    }

    /// Properties in declaration order.
    #[must_use]
    pub fn properties(&self) -> &[PropertyDef] {
        &self.properties
    }

    /// Derived classes in declaration order.
    #[must_use]
    pub fn derived_classes(&self) -> &[DerivedClassDef] {
        &self.derived
    }

    #[must_use]
    pub fn class(&self, name: &str) -> Option<&ClassDef> {
        self.classes.iter().find(|c| c.name == name)
    }

    #[must_use]
    pub fn derived_class(&self, name: &str) -> Option<&DerivedClassDef> {
        self.derived.iter().find(|d| d.name == name)
    }

    /// Whether `name` is an asserted or derived class.
    #[must_use]
    pub fn has_class(&self, name: &str) -> bool {
        self.class(name).is_some() || self.derived_class(name).is_some()
    }

    /// Look up a property by IRI local name or by accessor.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&PropertyDef> {
        self.properties
            .iter()
            .find(|p| p.name == key || p.accessor == key)
    }

    /// The inverse of `property`, if it declares one.
    #[must_use]
    pub fn inverse_of(&self, property: &PropertyDef) -> Option<&PropertyDef> {
        property.inverse.and_then(|inverse| self.property(inverse))
    }

    /// Whether `name` is the local name of any class or property IRI.
    #[must_use]
    pub fn is_term(&self, name: &str) -> bool {
        self.has_class(name) || self.properties.iter().any(|p| p.name == name)
    }

    /// `class` and everything it is a subclass of. Empty for unknown names.
    #[must_use]
    pub fn ancestors(&self, class: &str) -> BTreeSet<&'static str> {
        let mut out = BTreeSet::new();
        let mut pending: Vec<&'static str> = Vec::new();
        if let Some(def) = self.class(class) {
            pending.push(def.name);
        } else if let Some(def) = self.derived_class(class) {
            out.insert(def.name);
            pending.push(def.base);
        }
        while let Some(next) = pending.pop() {
            if !out.insert(next) {
                continue;
            }
            if let Some(def) = self.class(next) {
                pending.extend(def.parents.iter().copied());
            } else if let Some(def) = self.derived_class(next) {
                pending.push(def.base);
            }
        }
        out
    }

    #[must_use]
    pub fn is_subclass_of(&self, class: &str, ancestor: &str) -> bool {
        self.ancestors(class).contains(ancestor)
    }

    /// Whether `a` and `b` are declared disjoint (in either direction).
    #[must_use]
    pub fn are_disjoint(&self, a: &str, b: &str) -> bool {
        let declares = |x: &str, y: &str| {
            self.class(x)
                .is_some_and(|def| def.disjoint_with.iter().any(|other| *other == y))
        };
        declares(a, b) || declares(b, a)
    }

    /// First pair of disjoint classes found among the ancestors of `a` and
    /// `b`, if any.
    #[must_use]
    pub fn disjoint_pair(&self, a: &str, b: &str) -> Option<(&'static str, &'static str)> {
        let left = self.ancestors(a);
        let right = self.ancestors(b);
        left.iter()
            .flat_map(|x| right.iter().map(move |y| (*x, *y)))
            .find(|(x, y)| self.are_disjoint(x, y))
    }
}

/// Incrementally declares a [`Schema`], validating each declaration against
/// the ones before it.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    schema: Schema,
}

impl SchemaBuilder {
    fn ensure_unique(&self, name: &str) -> Result<(), SchemaError> {
        let taken = self.schema.has_class(name)
            || self
                .schema
                .properties
                .iter()
                .any(|p| p.name == name || p.accessor == name);
        if taken {
            return Err(SchemaError::Duplicate(name.to_string()));
        }
        Ok(())
    }

    fn ensure_class(&self, owner: &str, class: &str) -> Result<(), SchemaError> {
        if self.schema.has_class(class) {
            Ok(())
        } else {
            Err(SchemaError::UnknownClass {
                owner: owner.to_string(),
                class: class.to_string(),
            })
        }
    }

    /// Declare a class. Parents and disjoint classes must already exist.
    pub fn add_class(&mut self, class: ClassDef) -> Result<&mut Self, SchemaError> {
        self.ensure_unique(class.name)?;
        for parent in class.parents {
            self.ensure_class(class.name, parent)?;
        }
        for other in class.disjoint_with {
            if *other == class.name {
                return Err(SchemaError::SelfDisjoint(class.name.to_string()));
            }
            self.ensure_class(class.name, other)?;
        }
        debug!(class = class.name, "declared class");
        self.schema.classes.push(class);
        Ok(self)
    }

    /// Declare a property. When its inverse is already declared the pair is
    /// checked immediately; otherwise at [`build`](Self::build).
    pub fn add_property(&mut self, property: PropertyDef) -> Result<&mut Self, SchemaError> {
        self.ensure_unique(property.name)?;
        if property.accessor != property.name {
            self.ensure_unique(property.accessor)?;
        }
        if self.schema.class(property.domain).is_none() {
            return Err(SchemaError::UnknownClass {
                owner: property.name.to_string(),
                class: property.domain.to_string(),
            });
        }
        if let Range::Class(range) = property.range {
            self.ensure_class(property.name, range)?;
        }
        if let Some(inverse) = property.inverse {
            if !property.range.is_object() {
                return Err(inconsistent(
                    &property,
                    inverse,
                    "a datatype property has no inverse",
                ));
            }
            if let Some(other) = self.schema.property(inverse) {
                check_inverse_pair(&property, other)?;
            }
        }
        debug!(
            property = property.name,
            functional = property.functional,
            "declared property"
        );
        self.schema.properties.push(property);
        Ok(self)
    }

    /// Declare a derived class. Its base, the condition's property and any
    /// class the condition names must already exist.
    pub fn add_derived(&mut self, derived: DerivedClassDef) -> Result<&mut Self, SchemaError> {
        self.ensure_unique(derived.name)?;
        self.ensure_class(derived.name, derived.base)?;

        let property_name = derived.condition.property();
        let property = self.schema.property(property_name).ok_or_else(|| {
            SchemaError::UnknownProperty {
                owner: derived.name.to_string(),
                property: property_name.to_string(),
            }
        })?;
        if !self.schema.is_subclass_of(derived.base, property.domain) {
            return Err(SchemaError::InvalidDerivedClass {
                class: derived.name.to_string(),
                reason: format!(
                    "`{}` does not apply to `{}`",
                    property.name, derived.base
                ),
            });
        }
        match derived.condition {
            Condition::HasValue { .. } if !property.range.is_object() => {
                return Err(SchemaError::InvalidDerivedClass {
                    class: derived.name.to_string(),
                    reason: format!("`{}` does not relate individuals", property.name),
                });
            }
            Condition::AllValuesIn { class, .. } => {
                let Some(range) = property.range.class() else {
                    return Err(SchemaError::InvalidDerivedClass {
                        class: derived.name.to_string(),
                        reason: format!("`{}` does not relate individuals", property.name),
                    });
                };
                self.ensure_class(derived.name, class)?;
                if !self.schema.is_subclass_of(class, range) {
                    return Err(SchemaError::InvalidDerivedClass {
                        class: derived.name.to_string(),
                        reason: format!("`{class}` is outside the range of `{}`", property.name),
                    });
                }
            }
            _ => {}
        }
        debug!(class = derived.name, condition = %derived.condition, "declared derived class");
        self.schema.derived.push(derived);
        Ok(self)
    }

    /// Finish the schema, checking that every declared inverse exists.
    pub fn build(&mut self) -> Result<Schema, SchemaError> {
        for property in &self.schema.properties {
            if let Some(inverse) = property.inverse {
                let other = self.schema.property(inverse).ok_or_else(|| {
                    SchemaError::UnknownProperty {
                        owner: property.name.to_string(),
                        property: inverse.to_string(),
                    }
                })?;
                check_inverse_pair(property, other)?;
            }
        }
        Ok(std::mem::take(&mut self.schema))
    }
}

fn inconsistent(property: &PropertyDef, inverse: &str, reason: impl Into<String>) -> SchemaError {
    SchemaError::InconsistentInverse {
        property: property.name.to_string(),
        inverse: inverse.to_string(),
        reason: reason.into(),
    }
}

fn check_inverse_pair(property: &PropertyDef, other: &PropertyDef) -> Result<(), SchemaError> {
    if other.inverse != Some(property.name) {
        return Err(inconsistent(
            property,
            other.name,
            format!("`{}` does not declare `{}` as its inverse", other.name, property.name),
        ));
    }
    if property.range != Range::Class(other.domain) || other.range != Range::Class(property.domain)
    {
        return Err(inconsistent(
            property,
            other.name,
            "domain and range do not mirror each other",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thing(name: &'static str) -> ClassDef {
        ClassDef {
            name,
            comment: "",
            parents: &[],
            disjoint_with: &[],
        }
    }

    fn relation(
        name: &'static str,
        domain: &'static str,
        range: &'static str,
        inverse: Option<&'static str>,
    ) -> PropertyDef {
        PropertyDef {
            name,
            accessor: name,
            comment: "",
            domain,
            range: Range::Class(range),
            functional: false,
            inverse,
        }
    }

    #[test]
    fn mutual_inverse_pair_is_accepted() {
        let mut builder = Schema::builder();
        builder.add_class(thing("A")).unwrap();
        builder.add_class(thing("B")).unwrap();
        builder
            .add_property(relation("a_to_b", "A", "B", Some("b_to_a")))
            .unwrap();
        builder
            .add_property(relation("b_to_a", "B", "A", Some("a_to_b")))
            .unwrap();
        let schema = builder.build().unwrap();
        let forward = schema.property("a_to_b").unwrap();
        assert_eq!(schema.inverse_of(forward).unwrap().name, "b_to_a");
    }

    #[test]
    fn one_sided_inverse_is_rejected() {
        let mut builder = Schema::builder();
        builder.add_class(thing("A")).unwrap();
        builder.add_class(thing("B")).unwrap();
        builder.add_property(relation("b_to_a", "B", "A", None)).unwrap();
        let err = builder
            .add_property(relation("a_to_b", "A", "B", Some("b_to_a")))
            .unwrap_err();
        assert!(matches!(err, SchemaError::InconsistentInverse { .. }));
    }

    #[test]
    fn dangling_inverse_fails_at_build() {
        let mut builder = Schema::builder();
        builder.add_class(thing("A")).unwrap();
        builder
            .add_property(relation("a_to_a", "A", "A", Some("missing")))
            .unwrap();
        assert!(matches!(
            builder.build(),
            Err(SchemaError::UnknownProperty { .. })
        ));
    }

    #[test]
    fn mismatched_inverse_ranges_are_rejected() {
        let mut builder = Schema::builder();
        builder.add_class(thing("A")).unwrap();
        builder.add_class(thing("B")).unwrap();
        builder
            .add_property(relation("a_to_b", "A", "B", Some("b_to_b")))
            .unwrap();
        let err = builder
            .add_property(relation("b_to_b", "B", "B", Some("a_to_b")))
            .unwrap_err();
        assert!(matches!(err, SchemaError::InconsistentInverse { .. }));
    }

    #[test]
    fn unknown_parent_is_rejected() {
        let mut builder = Schema::builder();
        let err = builder
            .add_class(ClassDef {
                parents: &["Missing"],
                ..thing("Child")
            })
            .unwrap_err();
        assert!(matches!(err, SchemaError::UnknownClass { .. }));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut builder = Schema::builder();
        builder.add_class(thing("A")).unwrap();
        assert_eq!(
            builder.add_class(thing("A")).unwrap_err(),
            SchemaError::Duplicate("A".to_string())
        );
    }

    #[test]
    fn ancestors_follow_parents_and_derived_bases() {
        let mut builder = Schema::builder();
        builder.add_class(thing("Top")).unwrap();
        builder
            .add_class(ClassDef {
                parents: &["Top"],
                ..thing("Mid")
            })
            .unwrap();
        builder.add_property(relation("link", "Mid", "Top", None)).unwrap();
        builder
            .add_derived(DerivedClassDef {
                name: "Linked",
                comment: "",
                base: "Mid",
                condition: Condition::MinCount {
                    property: "link",
                    count: 1,
                },
            })
            .unwrap();
        let schema = builder.build().unwrap();
        let ancestors: Vec<_> = schema.ancestors("Linked").into_iter().collect();
        assert_eq!(ancestors, vec!["Linked", "Mid", "Top"]);
    }

    #[test]
    fn derived_condition_must_apply_to_base() {
        let mut builder = Schema::builder();
        builder.add_class(thing("A")).unwrap();
        builder.add_class(thing("B")).unwrap();
        builder.add_property(relation("link", "A", "B", None)).unwrap();
        let err = builder
            .add_derived(DerivedClassDef {
                name: "Broken",
                comment: "",
                base: "B",
                condition: Condition::NoValue { property: "link" },
            })
            .unwrap_err();
        assert!(matches!(err, SchemaError::InvalidDerivedClass { .. }));
    }

    #[test]
    fn disjointness_is_symmetric_and_inherited() {
        let mut builder = Schema::builder();
        builder.add_class(thing("Top")).unwrap();
        builder
            .add_class(ClassDef {
                parents: &["Top"],
                ..thing("Left")
            })
            .unwrap();
        builder
            .add_class(ClassDef {
                parents: &["Top"],
                disjoint_with: &["Left"],
                ..thing("Right")
            })
            .unwrap();
        builder
            .add_class(ClassDef {
                parents: &["Left"],
                ..thing("LeftChild")
            })
            .unwrap();
        let schema = builder.build().unwrap();
        assert!(schema.are_disjoint("Left", "Right"));
        assert!(schema.are_disjoint("Right", "Left"));
        assert_eq!(
            schema.disjoint_pair("LeftChild", "Right"),
            Some(("Left", "Right"))
        );
        assert_eq!(schema.disjoint_pair("Left", "Top"), None);
    }
}
