/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! External simulation-atoms model
//!
//! Mirrors the data layout of the ASE `Atoms` object: atomic numbers,
//! positions in Ångström, a 3x3 cell, a periodicity flag triple, named
//! per-atom arrays and an `info` dictionary.

pub mod arrays;
pub mod atoms;
pub mod errors;
pub mod schema;

pub use arrays::ArrayValue;
pub use atoms::ExternalAtoms;
pub use errors::{ExternalError, Result};
