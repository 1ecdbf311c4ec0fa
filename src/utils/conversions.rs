/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Length units and unit conversion helpers

use super::constants;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length unit in which an abstract system declares its positions and cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Ångström, the external model's only length unit
    #[default]
    Angstrom,
    /// Bohr radius (atomic units)
    Bohr,
    Nanometer,
}

impl LengthUnit {
    /// Multiplicative factor taking a length in this unit to Ångström
    pub fn to_angstrom(self) -> f64 {
        match self {
            LengthUnit::Angstrom => 1.0,
            LengthUnit::Bohr => constants::BOHR_RADIUS,
            LengthUnit::Nanometer => constants::NANOMETER,
        }
    }

    /// Multiplicative factor taking a length in this unit to `target`
    pub fn factor_to(self, target: LengthUnit) -> f64 {
        self.to_angstrom() / target.to_angstrom()
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LengthUnit::Angstrom => "Å",
            LengthUnit::Bohr => "bohr",
            LengthUnit::Nanometer => "nm",
        };
        f.write_str(name)
    }
}

/// Convert a velocity in Å/fs to the external toolkit's velocity unit
pub fn angstrom_per_fs_to_ase(velocity: f64) -> f64 {
    velocity / constants::ASE_FEMTOSECOND
}

/// Convert a velocity in the external toolkit's unit to Å/fs
pub fn ase_to_angstrom_per_fs(velocity: f64) -> f64 {
    velocity * constants::ASE_FEMTOSECOND
}
