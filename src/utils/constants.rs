/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Physical constants shared by both data models

/// Bohr radius in Angstroms (CODATA 2014)
pub const BOHR_RADIUS: f64 = 0.529_177_210_67;

/// Angstroms per nanometer
pub const NANOMETER: f64 = 10.0;

/// One femtosecond expressed in the external toolkit's internal time unit,
/// Å·sqrt(amu/eV)
pub const ASE_FEMTOSECOND: f64 = 0.098_226_947_884_640_63;
