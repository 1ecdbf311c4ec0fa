/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Chemical species of an atom

use crate::atoms::database;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Element identity of an atom, optionally qualified by an isotope mass
///
/// The atomic number is not validated here; the converters reject numbers
/// without a known element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Species {
    atomic_number: u32,
    /// Isotope mass in amu, `None` for the element's standard atomic weight
    #[serde(default, skip_serializing_if = "Option::is_none")]
    isotope_mass: Option<f64>,
}

impl Species {
    /// Species with the element's standard atomic weight
    pub fn new(atomic_number: u32) -> Self {
        Self {
            atomic_number,
            isotope_mass: None,
        }
    }

    /// Species with an explicit isotope mass in amu
    pub fn with_isotope_mass(atomic_number: u32, mass: f64) -> Self {
        Self {
            atomic_number,
            isotope_mass: Some(mass),
        }
    }

    pub fn atomic_number(&self) -> u32 {
        self.atomic_number
    }

    pub fn isotope_mass(&self) -> Option<f64> {
        self.isotope_mass
    }

    /// Element symbol, `None` if the atomic number is unknown
    pub fn symbol(&self) -> Option<&'static str> {
        database::element_symbol(self.atomic_number)
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.symbol() {
            Some(symbol) => write!(f, "{}", symbol)?,
            None => write!(f, "Z={}", self.atomic_number)?,
        }
        if let Some(mass) = self.isotope_mass {
            write!(f, "({} amu)", mass)?;
        }
        Ok(())
    }
}
