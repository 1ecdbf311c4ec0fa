/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! The abstract system: ordered atoms, a cell of arbitrary dimension and
//! per-axis boundary conditions

use super::atom::AbstractAtom;
use super::errors::{Result, SystemError};
use super::property::{names, PropertyValue};
use crate::atoms::formula::hill_formula;
use crate::utils::LengthUnit;
use ndarray::{arr2, Array2};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Boundary condition along one lattice direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryCondition {
    Periodic,
    /// Non-periodic: the wave function or density vanishes at the boundary
    DirichletZero,
}

impl BoundaryCondition {
    pub fn is_periodic(self) -> bool {
        self == BoundaryCondition::Periodic
    }
}

impl From<bool> for BoundaryCondition {
    fn from(periodic: bool) -> Self {
        if periodic {
            BoundaryCondition::Periodic
        } else {
            BoundaryCondition::DirichletZero
        }
    }
}

/// Generic, extensible atomistic system
///
/// Row `i` of the cell is lattice vector `i`. Positions and cell are
/// expressed in `length_unit`. The number of boundary conditions is the
/// dimensionality of the system and always matches the side of the cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SystemRecord")]
pub struct AbstractSystem {
    atoms: Vec<AbstractAtom>,
    #[serde(serialize_with = "serialize_rows")]
    cell: Array2<f64>,
    boundary_conditions: Vec<BoundaryCondition>,
    length_unit: LengthUnit,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    properties: BTreeMap<String, PropertyValue>,
}

/// Unvalidated form of an `AbstractSystem`, as found in JSON files
#[derive(Deserialize)]
struct SystemRecord {
    atoms: Vec<AbstractAtom>,
    cell: Vec<Vec<f64>>,
    boundary_conditions: Vec<BoundaryCondition>,
    #[serde(default)]
    length_unit: LengthUnit,
    #[serde(default)]
    properties: BTreeMap<String, PropertyValue>,
}

impl TryFrom<SystemRecord> for AbstractSystem {
    type Error = SystemError;

    fn try_from(record: SystemRecord) -> Result<Self> {
        let expected = record.boundary_conditions.len();
        let rows = record.cell.len();
        let cols = record.cell.first().map_or(0, Vec::len);
        if let Some(ragged) = record.cell.iter().find(|row| row.len() != cols) {
            return Err(SystemError::CellShape {
                expected,
                rows,
                cols: ragged.len(),
            });
        }

        let data = record.cell.into_iter().flatten().collect();
        let cell = Array2::from_shape_vec((rows, cols), data).map_err(|_| {
            SystemError::CellShape {
                expected,
                rows,
                cols,
            }
        })?;

        let system = AbstractSystem::new(
            record.atoms,
            cell,
            record.boundary_conditions,
            record.length_unit,
        )?;
        Ok(system.with_properties(record.properties))
    }
}

fn serialize_rows<S: Serializer>(cell: &Array2<f64>, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    let rows: Vec<Vec<f64>> = cell.rows().into_iter().map(|row| row.to_vec()).collect();
    rows.serialize(serializer)
}

impl AbstractSystem {
    /// Create a system, checking that the cell is square with one row per
    /// boundary condition
    pub fn new(
        atoms: Vec<AbstractAtom>,
        cell: Array2<f64>,
        boundary_conditions: Vec<BoundaryCondition>,
        length_unit: LengthUnit,
    ) -> Result<Self> {
        let expected = boundary_conditions.len();
        let (rows, cols) = cell.dim();
        if rows != expected || cols != expected {
            return Err(SystemError::CellShape {
                expected,
                rows,
                cols,
            });
        }

        Ok(Self {
            atoms,
            cell,
            boundary_conditions,
            length_unit,
            properties: BTreeMap::new(),
        })
    }

    /// Create a three-dimensional system from its lattice vectors
    pub fn from_lattice(
        atoms: Vec<AbstractAtom>,
        lattice: [[f64; 3]; 3],
        boundary_conditions: [BoundaryCondition; 3],
        length_unit: LengthUnit,
    ) -> Self {
        Self {
            atoms,
            cell: arr2(&lattice),
            boundary_conditions: boundary_conditions.to_vec(),
            length_unit,
            properties: BTreeMap::new(),
        }
    }

    /// Three-dimensional system periodic along every lattice vector
    pub fn periodic(atoms: Vec<AbstractAtom>, lattice: [[f64; 3]; 3], length_unit: LengthUnit) -> Self {
        Self::from_lattice(atoms, lattice, [BoundaryCondition::Periodic; 3], length_unit)
    }

    /// Three-dimensional system without periodicity and with a zero cell
    pub fn isolated(atoms: Vec<AbstractAtom>, length_unit: LengthUnit) -> Self {
        Self::from_lattice(
            atoms,
            [[0.0; 3]; 3],
            [BoundaryCondition::DirichletZero; 3],
            length_unit,
        )
    }

    /// Return this system with the system-level property `name` set
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Return this system with additional system-level properties
    pub fn with_properties(mut self, properties: BTreeMap<String, PropertyValue>) -> Self {
        self.properties.extend(properties);
        self
    }

    /// A copy of this system holding `atoms` instead of the current atoms
    ///
    /// The replacement must have the same number of atoms.
    pub fn replace_atoms(&self, atoms: Vec<AbstractAtom>) -> Result<Self> {
        if atoms.len() != self.atoms.len() {
            return Err(SystemError::AtomCount {
                expected: self.atoms.len(),
                found: atoms.len(),
            });
        }

        Ok(Self {
            atoms,
            cell: self.cell.clone(),
            boundary_conditions: self.boundary_conditions.clone(),
            length_unit: self.length_unit,
            properties: self.properties.clone(),
        })
    }

    pub fn atoms(&self) -> &[AbstractAtom] {
        &self.atoms
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn cell(&self) -> &Array2<f64> {
        &self.cell
    }

    pub fn boundary_conditions(&self) -> &[BoundaryCondition] {
        &self.boundary_conditions
    }

    /// Number of spatial dimensions
    pub fn dimension(&self) -> usize {
        self.boundary_conditions.len()
    }

    pub fn length_unit(&self) -> LengthUnit {
        self.length_unit
    }

    pub fn properties(&self) -> &BTreeMap<String, PropertyValue> {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// The same system expressed in another length unit
    ///
    /// Positions, cell and velocities are rescaled; everything else is
    /// copied unchanged.
    pub fn in_unit(&self, length_unit: LengthUnit) -> Self {
        let factor = self.length_unit.factor_to(length_unit);
        let atoms = self
            .atoms
            .iter()
            .map(|atom| {
                let mut properties = atom.properties().clone();
                if let Some(PropertyValue::Vector(velocity)) = properties.get_mut(names::VELOCITY) {
                    *velocity = *velocity * factor;
                }
                AbstractAtom::new(*atom.species(), atom.position() * factor)
                    .with_properties(properties)
            })
            .collect();

        Self {
            atoms,
            cell: self.cell.mapv(|x| x * factor),
            boundary_conditions: self.boundary_conditions.clone(),
            length_unit,
            properties: self.properties.clone(),
        }
    }

    /// Hill-order formula, with "X" for atoms of unknown elements
    pub fn chemical_formula(&self) -> String {
        hill_formula(
            self.atoms
                .iter()
                .map(|atom| atom.species().symbol().unwrap_or("X")),
        )
    }

    /// Load a system from its JSON representation
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write this system as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for AbstractSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let periodicity: Vec<&str> = self
            .boundary_conditions
            .iter()
            .map(|bc| if bc.is_periodic() { "T" } else { "F" })
            .collect();
        write!(
            f,
            "AbstractSystem({}, {} atoms, {}D, pbc=[{}], unit={})",
            self.chemical_formula(),
            self.atoms.len(),
            self.dimension(),
            periodicity.join(", "),
            self.length_unit
        )
    }
}
