/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Abstract system model
//!
//! A generic atomistic structure: ordered atoms with open-ended properties,
//! a declared length unit, a cell of any dimension and one boundary
//! condition per axis.

pub mod atom;
pub mod errors;
pub mod property;
pub mod species;
#[allow(clippy::module_inception)]
pub mod system;

pub use atom::AbstractAtom;
pub use errors::{Result, SystemError};
pub use property::{names, PropertyValue, ValueKind};
pub use species::Species;
pub use system::{AbstractSystem, BoundaryCondition};
