/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Error types for the abstract system model

use thiserror::Error;

/// Errors raised while building or loading an abstract system
#[derive(Error, Debug)]
pub enum SystemError {
    #[error("Cell must be a {expected}x{expected} matrix to match the boundary conditions, got {rows}x{cols}")]
    CellShape {
        expected: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Expected {expected} atoms, got {found}")]
    AtomCount { expected: usize, found: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for abstract system operations
pub type Result<T> = std::result::Result<T, SystemError>;
