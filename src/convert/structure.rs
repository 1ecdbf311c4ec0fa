/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Structure converters between abstract systems and external atoms

use super::attributes::{self, AttributeContext};
use super::cell;
use super::config::ConversionOptions;
use super::errors::Result;
use super::species::{self, SpeciesDescriptor};
use crate::external::{schema, ArrayValue, ExternalAtoms};
use crate::system::{AbstractAtom, AbstractSystem};
use crate::utils::LengthUnit;
use log::debug;

/// Convert an abstract system to external atoms with default options
pub fn to_external(system: &AbstractSystem) -> Result<ExternalAtoms> {
    to_external_with(system, &ConversionOptions::default())
}

/// Convert an abstract system to external atoms
///
/// Fails if the system is not three-dimensional or contains an unknown
/// element. Recognized properties set on every atom are exported, all other
/// per-atom properties are dropped. A masses array is written only when at
/// least one atom carries an isotope mass.
pub fn to_external_with(system: &AbstractSystem, options: &ConversionOptions) -> Result<ExternalAtoms> {
    let unit = system.length_unit();
    let (cell, pbc) = cell::to_external_cell(system.cell(), system.boundary_conditions(), unit)?;

    let descriptors = system
        .atoms()
        .iter()
        .map(species::to_external_species)
        .collect::<Result<Vec<_>>>()?;
    let masses = descriptors
        .iter()
        .map(SpeciesDescriptor::effective_mass)
        .collect::<Result<Vec<_>>>()?;

    let factor = unit.to_angstrom();
    let numbers = descriptors.iter().map(|d| d.atomic_number).collect();
    let positions = system
        .atoms()
        .iter()
        .map(|atom| (atom.position() * factor).to_array())
        .collect();

    let mut atoms = ExternalAtoms::new(numbers, positions, cell, pbc)?;
    if descriptors.iter().any(|d| d.mass.is_some()) {
        atoms = atoms.with_array(schema::MASSES, ArrayValue::Float(masses.clone()))?;
    }

    let context = AttributeContext {
        masses: &masses,
        length_factor: factor,
    };
    let exported = attributes::export_attributes(system.atoms(), &context);
    for (name, array) in exported.arrays {
        atoms = atoms.with_array(name, array)?;
    }

    if options.copy_system_properties {
        for (key, value) in system.properties() {
            atoms = atoms.with_info(key.clone(), value.clone());
        }
    }

    debug!("converted {} to {}", system, atoms);
    Ok(atoms)
}

/// Convert external atoms to an abstract system with default options
pub fn to_abstract(atoms: &ExternalAtoms) -> Result<AbstractSystem> {
    to_abstract_with(atoms, &ConversionOptions::default())
}

/// Convert external atoms to an abstract system in Ångström
///
/// Masses that differ from the element default become isotope masses, and
/// every external array except masses becomes a per-atom property.
pub fn to_abstract_with(atoms: &ExternalAtoms, options: &ConversionOptions) -> Result<AbstractSystem> {
    let explicit_masses = atoms.masses();
    let symbols = atoms.symbols();
    let descriptors: Vec<SpeciesDescriptor> = atoms
        .numbers()
        .iter()
        .enumerate()
        .map(|(index, &atomic_number)| SpeciesDescriptor {
            atomic_number,
            mass: explicit_masses.map(|masses| masses[index]),
            symbol: symbols.map(|symbols| symbols[index].clone()),
        })
        .collect();

    let all_species = descriptors
        .iter()
        .map(|descriptor| species::to_abstract_species(descriptor, options.mass_tolerance))
        .collect::<Result<Vec<_>>>()?;
    let masses = descriptors
        .iter()
        .map(SpeciesDescriptor::effective_mass)
        .collect::<Result<Vec<_>>>()?;

    let context = AttributeContext {
        masses: &masses,
        length_factor: LengthUnit::Angstrom.to_angstrom(),
    };
    let properties = attributes::import_attributes(atoms, &context);

    let abstract_atoms = all_species
        .into_iter()
        .zip(atoms.positions())
        .zip(properties)
        .map(|((species, &position), properties)| {
            AbstractAtom::new(species, position.into()).with_properties(properties)
        })
        .collect();

    let (cell, boundary_conditions) = cell::to_abstract_cell(atoms.cell(), atoms.pbc());
    let mut system = AbstractSystem::new(abstract_atoms, cell, boundary_conditions, LengthUnit::Angstrom)?;
    if options.copy_system_properties {
        system = system.with_properties(atoms.info().clone());
    }

    debug!("converted {} to {}", atoms, system);
    Ok(system)
}
