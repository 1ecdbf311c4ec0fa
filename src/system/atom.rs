/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Atoms of the abstract system model

use super::property::PropertyValue;
use super::species::Species;
use crate::atoms::Vector3D;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// An atom with a position, a species and an open set of named properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbstractAtom {
    species: Species,
    /// Position in the owning system's length unit
    position: Vector3D,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    properties: BTreeMap<String, PropertyValue>,
}

impl AbstractAtom {
    /// Create an atom without extra properties
    pub fn new(species: Species, position: Vector3D) -> Self {
        Self {
            species,
            position,
            properties: BTreeMap::new(),
        }
    }

    /// Return this atom with the property `name` set to `value`
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Return this atom with its properties replaced by `properties`
    pub fn with_properties(mut self, properties: BTreeMap<String, PropertyValue>) -> Self {
        self.properties = properties;
        self
    }

    pub fn species(&self) -> &Species {
        &self.species
    }

    pub fn atomic_number(&self) -> u32 {
        self.species.atomic_number()
    }

    pub fn position(&self) -> Vector3D {
        self.position
    }

    pub fn properties(&self) -> &BTreeMap<String, PropertyValue> {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }
}

impl fmt::Display for AbstractAtom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.species, self.position)
    }
}
