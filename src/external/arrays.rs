/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Parallel per-atom arrays

use crate::atoms::Vector3D;
use crate::system::{PropertyValue, ValueKind};
use serde::{Deserialize, Serialize};

/// One value per atom, all of the same kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArrayValue {
    Bool(Vec<bool>),
    Int(Vec<i64>),
    Float(Vec<f64>),
    Text(Vec<String>),
    Vector(Vec<[f64; 3]>),
}

impl ArrayValue {
    pub fn len(&self) -> usize {
        match self {
            ArrayValue::Bool(values) => values.len(),
            ArrayValue::Int(values) => values.len(),
            ArrayValue::Float(values) => values.len(),
            ArrayValue::Text(values) => values.len(),
            ArrayValue::Vector(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            ArrayValue::Bool(_) => ValueKind::Bool,
            ArrayValue::Int(_) => ValueKind::Int,
            ArrayValue::Float(_) => ValueKind::Float,
            ArrayValue::Text(_) => ValueKind::Text,
            ArrayValue::Vector(_) => ValueKind::Vector,
        }
    }

    /// Integer arrays as float arrays, any other array unchanged
    pub fn widen_to_float(self) -> Self {
        match self {
            ArrayValue::Int(values) => ArrayValue::Float(values.into_iter().map(|v| v as f64).collect()),
            other => other,
        }
    }

    /// Value for the atom at `index`
    pub fn get(&self, index: usize) -> Option<PropertyValue> {
        match self {
            ArrayValue::Bool(values) => values.get(index).map(|&v| PropertyValue::Bool(v)),
            ArrayValue::Int(values) => values.get(index).map(|&v| PropertyValue::Int(v)),
            ArrayValue::Float(values) => values.get(index).map(|&v| PropertyValue::Float(v)),
            ArrayValue::Text(values) => values.get(index).map(|v| PropertyValue::Text(v.clone())),
            ArrayValue::Vector(values) => values
                .get(index)
                .map(|&v| PropertyValue::Vector(Vector3D::from(v))),
        }
    }

    /// Gather per-atom values into an array
    ///
    /// Returns `None` when there are no values or when they are not all of
    /// the same kind.
    pub fn from_values<'a>(values: impl IntoIterator<Item = &'a PropertyValue>) -> Option<Self> {
        let mut values = values.into_iter().peekable();
        let mut array = match values.peek()?.kind() {
            ValueKind::Bool => ArrayValue::Bool(Vec::new()),
            ValueKind::Int => ArrayValue::Int(Vec::new()),
            ValueKind::Float => ArrayValue::Float(Vec::new()),
            ValueKind::Text => ArrayValue::Text(Vec::new()),
            ValueKind::Vector => ArrayValue::Vector(Vec::new()),
        };

        for value in values {
            match (&mut array, value) {
                (ArrayValue::Bool(out), PropertyValue::Bool(v)) => out.push(*v),
                (ArrayValue::Int(out), PropertyValue::Int(v)) => out.push(*v),
                (ArrayValue::Float(out), PropertyValue::Float(v)) => out.push(*v),
                (ArrayValue::Text(out), PropertyValue::Text(v)) => out.push(v.clone()),
                (ArrayValue::Vector(out), PropertyValue::Vector(v)) => out.push(v.to_array()),
                _ => return None,
            }
        }

        Some(array)
    }
}
