/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for the external atoms model

use crate::system::ValueKind;
use thiserror::Error;

/// Errors raised while building or loading external atoms
#[derive(Error, Debug)]
pub enum ExternalError {
    #[error("Expected {expected} positions, got {found}")]
    PositionCount { expected: usize, found: usize },

    #[error("Array '{name}' has {found} entries for {expected} atoms")]
    ArrayLength {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("Array '{name}' must hold {expected} values, got {found}")]
    ArrayKind {
        name: String,
        expected: String,
        found: ValueKind,
    },

    #[error("Mass of atom {index} must be positive and finite, got {mass}")]
    InvalidMass { index: usize, mass: f64 },

    #[error("Symbol list has {found} entries for {expected} atoms")]
    SymbolCount { expected: usize, found: usize },

    #[error("'{0}' is reserved and cannot be stored as a per-atom array")]
    ReservedName(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for external atoms operations
pub type Result<T> = std::result::Result<T, ExternalError>;
