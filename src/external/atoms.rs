/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Simulation atoms with the external toolkit's fixed schema

use super::arrays::ArrayValue;
use super::errors::{ExternalError, Result};
use super::schema;
use crate::atoms::database;
use crate::atoms::formula::hill_formula;
use crate::system::{PropertyValue, ValueKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Atoms as stored by an ASE-style simulation toolkit
///
/// Lengths are in Ångström and the cell rows are the lattice vectors.
/// Periodicity is a single flag per Cartesian axis. Every entry of `arrays`
/// holds exactly one value per atom; `info` holds system-level values.
/// Optional `symbols` label the atoms as written by the producer of the
/// data; they are checked against `numbers` when converting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AtomsRecord")]
pub struct ExternalAtoms {
    numbers: Vec<u32>,
    positions: Vec<[f64; 3]>,
    cell: [[f64; 3]; 3],
    pbc: [bool; 3],
    #[serde(skip_serializing_if = "Option::is_none")]
    symbols: Option<Vec<String>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    arrays: BTreeMap<String, ArrayValue>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    info: BTreeMap<String, PropertyValue>,
}

#[derive(Deserialize)]
struct AtomsRecord {
    numbers: Vec<u32>,
    positions: Vec<[f64; 3]>,
    #[serde(default)]
    cell: [[f64; 3]; 3],
    #[serde(default)]
    pbc: [bool; 3],
    #[serde(default)]
    symbols: Option<Vec<String>>,
    #[serde(default)]
    arrays: BTreeMap<String, ArrayValue>,
    #[serde(default)]
    info: BTreeMap<String, PropertyValue>,
}

impl TryFrom<AtomsRecord> for ExternalAtoms {
    type Error = ExternalError;

    fn try_from(record: AtomsRecord) -> Result<Self> {
        let mut atoms = ExternalAtoms::new(record.numbers, record.positions, record.cell, record.pbc)?;
        if let Some(symbols) = record.symbols {
            atoms = atoms.with_symbols(symbols)?;
        }
        for (name, array) in record.arrays {
            atoms = atoms.with_array(name, array)?;
        }
        atoms.info = record.info;
        Ok(atoms)
    }
}

impl ExternalAtoms {
    /// Create atoms from atomic numbers and positions (Å)
    pub fn new(
        numbers: Vec<u32>,
        positions: Vec<[f64; 3]>,
        cell: [[f64; 3]; 3],
        pbc: [bool; 3],
    ) -> Result<Self> {
        if positions.len() != numbers.len() {
            return Err(ExternalError::PositionCount {
                expected: numbers.len(),
                found: positions.len(),
            });
        }

        Ok(Self {
            numbers,
            positions,
            cell,
            pbc,
            symbols: None,
            arrays: BTreeMap::new(),
            info: BTreeMap::new(),
        })
    }

    /// Return these atoms with the per-atom array `name` set
    ///
    /// The array must have one entry per atom, and recognized arrays must
    /// hold the element kind the toolkit expects for them. Integer arrays
    /// are widened where floats are expected, and masses must be positive.
    pub fn with_array(mut self, name: impl Into<String>, mut array: ArrayValue) -> Result<Self> {
        let name = name.into();
        if schema::is_reserved(&name) {
            return Err(ExternalError::ReservedName(name));
        }

        if array.len() != self.numbers.len() {
            return Err(ExternalError::ArrayLength {
                name,
                expected: self.numbers.len(),
                found: array.len(),
            });
        }

        if let Some(kinds) = schema::expected_kinds(&name) {
            if array.kind() == ValueKind::Int && !kinds.contains(&ValueKind::Int) && kinds.contains(&ValueKind::Float) {
                array = array.widen_to_float();
            }
            if !array.is_empty() && !kinds.contains(&array.kind()) {
                let expected: Vec<String> = kinds.iter().map(ToString::to_string).collect();
                return Err(ExternalError::ArrayKind {
                    name,
                    expected: expected.join(" or "),
                    found: array.kind(),
                });
            }
        }

        if let (schema::MASSES, ArrayValue::Float(masses)) = (name.as_str(), &array) {
            if let Some((index, &mass)) = masses
                .iter()
                .enumerate()
                .find(|(_, mass)| !(mass.is_finite() && **mass > 0.0))
            {
                return Err(ExternalError::InvalidMass { index, mass });
            }
        }

        self.arrays.insert(name, array);
        Ok(self)
    }

    /// Return these atoms labelled with one element symbol per atom
    pub fn with_symbols(mut self, symbols: Vec<String>) -> Result<Self> {
        if symbols.len() != self.numbers.len() {
            return Err(ExternalError::SymbolCount {
                expected: self.numbers.len(),
                found: symbols.len(),
            });
        }
        self.symbols = Some(symbols);
        Ok(self)
    }

    /// Return these atoms with the system-level value `key` set
    pub fn with_info(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.info.insert(key.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    pub fn numbers(&self) -> &[u32] {
        &self.numbers
    }

    pub fn positions(&self) -> &[[f64; 3]] {
        &self.positions
    }

    pub fn cell(&self) -> &[[f64; 3]; 3] {
        &self.cell
    }

    pub fn pbc(&self) -> [bool; 3] {
        self.pbc
    }

    /// Symbol labels, if the atoms carry them
    pub fn symbols(&self) -> Option<&[String]> {
        self.symbols.as_deref()
    }

    pub fn arrays(&self) -> &BTreeMap<String, ArrayValue> {
        &self.arrays
    }

    pub fn array(&self, name: &str) -> Option<&ArrayValue> {
        self.arrays.get(name)
    }

    pub fn has_array(&self, name: &str) -> bool {
        self.arrays.contains_key(name)
    }

    pub fn info(&self) -> &BTreeMap<String, PropertyValue> {
        &self.info
    }

    /// Explicit per-atom masses (amu), if the masses array is set
    pub fn masses(&self) -> Option<&[f64]> {
        match self.arrays.get(schema::MASSES) {
            Some(ArrayValue::Float(masses)) => Some(masses),
            _ => None,
        }
    }

    /// Element symbols in atom order, "X" for unknown atomic numbers
    pub fn chemical_symbols(&self) -> Vec<&'static str> {
        self.numbers
            .iter()
            .map(|&z| database::element_symbol(z).unwrap_or("X"))
            .collect()
    }

    /// Hill-order chemical formula
    pub fn chemical_formula(&self) -> String {
        hill_formula(self.chemical_symbols())
    }

    /// Load atoms from their JSON representation
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write these atoms as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for ExternalAtoms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Atoms(symbols='{}', pbc={:?}, cell={:?})",
            self.chemical_formula(),
            self.pbc,
            self.cell
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn magnesium_oxide() -> ExternalAtoms {
        ExternalAtoms::new(
            vec![12, 8],
            vec![[0.0, 0.0, 0.0], [2.1, 0.0, 0.0]],
            [[4.2, 0.0, 0.0], [0.0, 4.2, 0.0], [0.0, 0.0, 4.2]],
            [true, true, false],
        )
        .unwrap()
    }

    #[test]
    fn test_atoms_creation() {
        let atoms = magnesium_oxide();
        assert_eq!(atoms.len(), 2);
        assert_eq!(atoms.chemical_symbols(), ["Mg", "O"]);
        assert_eq!(atoms.chemical_formula(), "MgO");
        assert_eq!(atoms.pbc(), [true, true, false]);
        assert!(atoms.masses().is_none());
    }

    #[test]
    fn test_position_count_is_checked() {
        let result = ExternalAtoms::new(vec![1, 1], vec![[0.0; 3]], [[0.0; 3]; 3], [false; 3]);
        assert!(matches!(
            result,
            Err(ExternalError::PositionCount { expected: 2, found: 1 })
        ));
    }

    #[test]
    fn test_array_validation() {
        let atoms = magnesium_oxide();

        let too_short = atoms.clone().with_array(schema::TAGS, ArrayValue::Int(vec![1]));
        assert!(matches!(too_short, Err(ExternalError::ArrayLength { found: 1, .. })));

        let wrong_kind = atoms
            .clone()
            .with_array(schema::MOMENTA, ArrayValue::Float(vec![1.0, 2.0]));
        match wrong_kind {
            Err(ExternalError::ArrayKind { expected, found, .. }) => {
                assert_eq!(expected, "vector");
                assert_eq!(found, ValueKind::Float);
            }
            other => panic!("unexpected result: {:?}", other),
        }

        let reserved = atoms
            .clone()
            .with_array("positions", ArrayValue::Vector(vec![[0.0; 3]; 2]));
        assert!(matches!(reserved, Err(ExternalError::ReservedName(_))));

        let atoms = atoms
            .with_array(schema::MASSES, ArrayValue::Float(vec![24.0, 16.0]))
            .unwrap()
            .with_array("spacegroup_kinds", ArrayValue::Int(vec![0, 1]))
            .unwrap();
        assert_eq!(atoms.masses(), Some(&[24.0, 16.0][..]));
        assert!(atoms.has_array("spacegroup_kinds"));
    }

    #[test]
    fn test_integer_arrays_are_widened_to_floats() {
        let atoms = magnesium_oxide()
            .with_array(schema::INITIAL_CHARGES, ArrayValue::Int(vec![2, -2]))
            .unwrap()
            .with_array(schema::MASSES, ArrayValue::Int(vec![24, 16]))
            .unwrap()
            .with_array(schema::TAGS, ArrayValue::Int(vec![1, 2]))
            .unwrap();
        assert_eq!(
            atoms.array(schema::INITIAL_CHARGES),
            Some(&ArrayValue::Float(vec![2.0, -2.0]))
        );
        assert_eq!(atoms.masses(), Some(&[24.0, 16.0][..]));
        assert_eq!(atoms.array(schema::TAGS), Some(&ArrayValue::Int(vec![1, 2])));

        let json = r#"{
            "numbers": [12, 8],
            "positions": [[0.0, 0.0, 0.0], [2.1, 0.0, 0.0]],
            "arrays": {"initial_charges": [2, -2], "initial_magmoms": [1, 0], "masses": [24, 16]}
        }"#;
        let atoms = ExternalAtoms::from_json(json).unwrap();
        assert_eq!(
            atoms.array(schema::INITIAL_CHARGES),
            Some(&ArrayValue::Float(vec![2.0, -2.0]))
        );
        assert_eq!(
            atoms.array(schema::INITIAL_MAGMOMS),
            Some(&ArrayValue::Float(vec![1.0, 0.0]))
        );
        assert_eq!(atoms.masses(), Some(&[24.0, 16.0][..]));
    }

    #[test]
    fn test_masses_must_be_positive() {
        for bad in [0.0, -1.0, f64::INFINITY] {
            let result = magnesium_oxide().with_array(schema::MASSES, ArrayValue::Float(vec![24.305, bad]));
            match result {
                Err(ExternalError::InvalidMass { index, .. }) => assert_eq!(index, 1),
                other => panic!("unexpected result: {:?}", other),
            }
        }

        let json = r#"{"numbers": [1], "positions": [[0.0, 0.0, 0.0]], "arrays": {"masses": [0]}}"#;
        assert!(ExternalAtoms::from_json(json).is_err());
    }

    #[test]
    fn test_symbols() {
        let atoms = magnesium_oxide()
            .with_symbols(vec!["Mg".to_string(), "O".to_string()])
            .unwrap();
        assert_eq!(atoms.symbols(), Some(&["Mg".to_string(), "O".to_string()][..]));
        assert!(magnesium_oxide().symbols().is_none());

        let short = magnesium_oxide().with_symbols(vec!["Mg".to_string()]);
        assert!(matches!(short, Err(ExternalError::SymbolCount { expected: 2, found: 1 })));

        let json = r#"{"numbers": [1, 8], "positions": [[0.0, 0.0, 0.0], [0.0, 0.0, 1.0]], "symbols": ["H", "O"]}"#;
        let atoms = ExternalAtoms::from_json(json).unwrap();
        let back = ExternalAtoms::from_json(&atoms.to_json().unwrap()).unwrap();
        assert_eq!(back, atoms);
    }

    #[test]
    fn test_json_roundtrip() {
        let atoms = magnesium_oxide()
            .with_array(schema::INITIAL_MAGMOMS, ArrayValue::Float(vec![0.5, 0.0]))
            .unwrap()
            .with_info("energy", -12.5);

        let json = atoms.to_json().unwrap();
        let back = ExternalAtoms::from_json(&json).unwrap();
        assert_eq!(back, atoms);
    }

    #[test]
    fn test_json_is_validated() {
        let json = r#"{
            "numbers": [1, 1],
            "positions": [[0.0, 0.0, 0.0], [0.0, 0.0, 0.74]],
            "arrays": {"tags": [0]}
        }"#;
        assert!(ExternalAtoms::from_json(json).is_err());
    }
}
