/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Values of per-atom and per-system properties

use crate::atoms::Vector3D;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Property names with a fixed meaning in this crate
pub mod names {
    /// Per-atom velocity, in length unit per femtosecond
    pub const VELOCITY: &str = "velocity";
    /// Per-atom charge, in elementary charges
    pub const CHARGE: &str = "charge";
    /// Per-atom magnetic moment in Bohr magnetons, scalar or 3-vector
    pub const MAGNETIC_MOMENT: &str = "magnetic_moment";
    /// Per-atom integer tag
    pub const TAG: &str = "tag";
    /// Per-atom pseudopotential identifier
    pub const PSEUDOPOTENTIAL: &str = "pseudopotential";
}

/// Element type shared by property values and external arrays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Float,
    Int,
    Bool,
    Text,
    Vector,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Float => "float",
            ValueKind::Int => "int",
            ValueKind::Bool => "bool",
            ValueKind::Text => "text",
            ValueKind::Vector => "vector",
        };
        f.write_str(name)
    }
}

/// A scalar or 3-vector property value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Vector(Vector3D),
}

impl PropertyValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            PropertyValue::Bool(_) => ValueKind::Bool,
            PropertyValue::Int(_) => ValueKind::Int,
            PropertyValue::Float(_) => ValueKind::Float,
            PropertyValue::Text(_) => ValueKind::Text,
            PropertyValue::Vector(_) => ValueKind::Vector,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match *self {
            PropertyValue::Float(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match *self {
            PropertyValue::Int(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<Vector3D> {
        match *self {
            PropertyValue::Vector(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Float(value)
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        PropertyValue::Int(value)
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

impl From<Vector3D> for PropertyValue {
    fn from(value: Vector3D) -> Self {
        PropertyValue::Vector(value)
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Bool(value) => write!(f, "{}", value),
            PropertyValue::Int(value) => write!(f, "{}", value),
            PropertyValue::Float(value) => write!(f, "{}", value),
            PropertyValue::Text(value) => write!(f, "{:?}", value),
            PropertyValue::Vector(value) => write!(f, "{}", value),
        }
    }
}
