//! Concept nodes (tones, platforms, creative types) and the weighted edges between them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The three kinds of domain concept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConceptKind {
    /// A communication style, e.g. "fun".
    Tone,
    /// A destination channel with capacity and style constraints.
    Platform,
    /// A campaign objective, e.g. "conversion".
    CreativeType,
}

impl ConceptKind {
    pub const ALL: [ConceptKind; 3] = [Self::Tone, Self::Platform, Self::CreativeType];

    /// Parse from string (matching the serde rename).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s {
            "tone" => Some(Self::Tone),
            "platform" => Some(Self::Platform),
            "creative_type" => Some(Self::CreativeType),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tone => "tone",
            Self::Platform => "platform",
            Self::CreativeType => "creative_type",
        }
    }
}

impl std::fmt::Display for ConceptKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A property value. Platforms carry numbers and flags, creative types also carry text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl PropertyValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// A static domain concept. Immutable once the graph is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptNode {
    pub id: String,
    pub kind: ConceptKind,
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyValue>,
}

impl ConceptNode {
    pub fn new(id: impl Into<String>, kind: ConceptKind) -> Self {
        Self {
            id: id.into(),
            kind,
            properties: BTreeMap::new(),
        }
    }

    /// Builder-style property setter.
    pub fn with_property(mut self, name: impl Into<String>, value: PropertyValue) -> Self {
        self.properties.insert(name.into(), value);
        self
    }

    /// Numeric property, `None` if absent or not a number.
    pub fn number(&self, name: &str) -> Option<f64> {
        self.properties.get(name).and_then(PropertyValue::as_f64)
    }

    /// Boolean property, `None` if absent or not a flag.
    pub fn flag(&self, name: &str) -> Option<bool> {
        self.properties.get(name).and_then(PropertyValue::as_bool)
    }

    /// Text property, `None` if absent or not text.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.properties.get(name).and_then(PropertyValue::as_text)
    }
}

/// A directed, labelled, weighted edge. Higher weight means stronger compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationEdge {
    pub from: String,
    pub to: String,
    pub relationship: String,
    /// Strength in [0, 1].
    pub weight: f64,
}

impl RelationEdge {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        relationship: impl Into<String>,
        weight: f64,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            relationship: relationship.into(),
            weight,
        }
    }

    /// Path cost of this edge: strong edges are cheap.
    pub fn distance(&self) -> f64 {
        1.0 - self.weight
    }

    /// Whether the weight is finite and in [0, 1].
    pub fn has_valid_weight(&self) -> bool {
        self.weight.is_finite() && (0.0..=1.0).contains(&self.weight)
    }
}
