//! Parameter and descriptor types shared across the workspace.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A single named numeric parameter. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    /// Parameter name.
    pub name: String,
    /// Parameter value.
    pub value: f64,
}

impl Param {
    /// Create a new named parameter.
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self { name: name.into(), value }
    }
}

/// Ordered, name-unique collection of [`Param`].
///
/// Insertion order is preserved and significant for reproducible
/// serialization. No numeric validation happens here: NaN and negative
/// values are accepted, the engine defines legality per family.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamSet(Vec<Param>);

impl ParamSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Build from `(name, value)` pairs, dropping entries whose value is
    /// `None`.
    ///
    /// Optional parameters are absent from the set, never stored as a null
    /// sentinel.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, Option<f64>)>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for (name, value) in pairs {
            if let Some(value) = value {
                set.insert(Param::new(name, value));
            }
        }
        set
    }

    /// Insert a parameter, replacing any existing parameter with the same
    /// name (the original position is kept).
    pub fn insert(&mut self, param: Param) {
        match self.0.iter_mut().find(|p| p.name == param.name) {
            Some(existing) => *existing = param,
            None => self.0.push(param),
        }
    }

    /// Look up a parameter value by name.
    pub fn get(&self, name: &str) -> Result<f64> {
        self.0
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value)
            .ok_or_else(|| Error::ParameterNotFound(name.to_string()))
    }

    /// Look up a parameter a family declares as optional.
    pub fn get_opt(&self, name: &str) -> Option<f64> {
        self.0.iter().find(|p| p.name == name).map(|p| p.value)
    }

    /// Parameters in insertion order.
    pub fn params(&self) -> &[Param] {
        &self.0
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Engine handoff descriptor: a family tag plus ordered named parameters.
///
/// This is the only shape the engine boundary understands; the composition
/// layer renders its typed families into descriptors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionDescriptor {
    /// Family tag, e.g. `"normal"` or `"noncentral_d"`.
    pub family: String,
    /// Ordered named parameters.
    pub params: ParamSet,
}

impl DistributionDescriptor {
    /// Create a new descriptor.
    pub fn new(family: impl Into<String>, params: ParamSet) -> Self {
        Self { family: family.into(), params }
    }
}
