/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for the conversion engine

use crate::external::ExternalError;
use crate::system::SystemError;
use std::fmt;
use thiserror::Error;

/// Identifies an element that could not be resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementId {
    Number(u32),
    Symbol(String),
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementId::Number(z) => write!(f, "atomic number {}", z),
            ElementId::Symbol(symbol) => write!(f, "symbol '{}'", symbol),
        }
    }
}

/// Errors that can occur while converting between the two models
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Unknown element: {0}")]
    UnknownElement(ElementId),

    #[error("External atoms need exactly 3 spatial dimensions, got {found}")]
    DimensionalityMismatch { found: usize },

    #[error("Metadata key '{0}' does not match any species in the system")]
    InvalidMetadataKey(String),

    #[error(transparent)]
    System(#[from] SystemError),

    #[error(transparent)]
    External(#[from] ExternalError),
}

/// Result type for conversions
pub type Result<T> = std::result::Result<T, ConversionError>;
