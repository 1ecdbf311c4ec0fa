/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Species mapping between the abstract and external models

use super::errors::{ConversionError, ElementId, Result};
use crate::atoms::database;
use crate::system::{AbstractAtom, Species};

/// Species of one atom as seen by the external model
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesDescriptor {
    pub atomic_number: u32,
    /// Mass override in amu; `None` means the element's default mass
    pub mass: Option<f64>,
    /// Symbol override, checked against the atomic number
    pub symbol: Option<String>,
}

impl SpeciesDescriptor {
    pub fn new(atomic_number: u32) -> Self {
        Self {
            atomic_number,
            mass: None,
            symbol: None,
        }
    }

    /// Mass actually carried by the atom: the override or the default
    pub fn effective_mass(&self) -> Result<f64> {
        match self.mass {
            Some(mass) => Ok(mass),
            None => default_mass(self.atomic_number),
        }
    }
}

/// Standard atomic weight of an element, in amu
pub fn default_mass(atomic_number: u32) -> Result<f64> {
    database::atomic_weight(atomic_number)
        .ok_or(ConversionError::UnknownElement(ElementId::Number(atomic_number)))
}

/// Describe the species of an abstract atom for the external model
///
/// An explicit isotope mass is passed on as the mass override.
pub fn to_external_species(atom: &AbstractAtom) -> Result<SpeciesDescriptor> {
    let species = atom.species();
    let atomic_number = species.atomic_number();
    if !database::is_known(atomic_number) {
        return Err(ConversionError::UnknownElement(ElementId::Number(atomic_number)));
    }

    Ok(SpeciesDescriptor {
        atomic_number,
        mass: species.isotope_mass(),
        symbol: None,
    })
}

/// Build the abstract species for an external descriptor
///
/// A mass differing from the default by more than `mass_tolerance`
/// (relative) becomes the isotope mass.
pub fn to_abstract_species(descriptor: &SpeciesDescriptor, mass_tolerance: f64) -> Result<Species> {
    let atomic_number = descriptor.atomic_number;
    let standard = default_mass(atomic_number)?;

    if let Some(symbol) = &descriptor.symbol {
        if database::atomic_number_from_symbol(symbol) != Some(atomic_number) {
            return Err(ConversionError::UnknownElement(ElementId::Symbol(symbol.clone())));
        }
    }

    match descriptor.mass {
        Some(mass) if (mass - standard).abs() > mass_tolerance * standard => {
            Ok(Species::with_isotope_mass(atomic_number, mass))
        }
        _ => Ok(Species::new(atomic_number)),
    }
}
