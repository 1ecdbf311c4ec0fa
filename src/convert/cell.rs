/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Cell and periodicity codec
//!
//! The abstract model has one boundary condition per axis and any number of
//! axes; the external model has exactly three axes with a periodic flag
//! each. Axes are mapped positionally and only when there are exactly
//! three of them.

use super::errors::{ConversionError, Result};
use crate::system::BoundaryCondition;
use crate::utils::LengthUnit;
use ndarray::{arr2, Array2};

/// Convert an abstract cell (in `unit`) and its boundary conditions to the
/// external cell in Ångström and its periodicity flags
pub fn to_external_cell(
    cell: &Array2<f64>,
    boundary_conditions: &[BoundaryCondition],
    unit: LengthUnit,
) -> Result<([[f64; 3]; 3], [bool; 3])> {
    let found = boundary_conditions.len();
    let conditions = <[BoundaryCondition; 3]>::try_from(boundary_conditions)
        .map_err(|_| ConversionError::DimensionalityMismatch { found })?;
    if cell.dim() != (3, 3) {
        return Err(ConversionError::DimensionalityMismatch { found: cell.nrows() });
    }

    let factor = unit.to_angstrom();
    let mut matrix = [[0.0; 3]; 3];
    for ((i, j), value) in cell.indexed_iter() {
        matrix[i][j] = value * factor;
    }

    Ok((matrix, conditions.map(BoundaryCondition::is_periodic)))
}

/// Convert an external cell and periodicity flags back to the abstract
/// representation; the cell stays in Ångström
pub fn to_abstract_cell(cell: &[[f64; 3]; 3], pbc: [bool; 3]) -> (Array2<f64>, Vec<BoundaryCondition>) {
    let conditions = pbc.iter().map(|&periodic| BoundaryCondition::from(periodic)).collect();
    (arr2(cell), conditions)
}
