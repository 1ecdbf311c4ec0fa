/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! # atoms-bridge
//!
//! Conversion between two in-memory representations of atomistic
//! structures:
//!
//! * [`AbstractSystem`]: a generic system with arbitrary per-atom and
//!   per-system properties, a declared length unit and one boundary
//!   condition per axis;
//! * [`ExternalAtoms`]: the fixed schema of an ASE-style simulation toolkit,
//!   with positions in Ångström, a 3x3 cell, a periodicity flag triple and
//!   named per-atom arrays.
//!
//! ```
//! use atoms_bridge::{to_abstract, to_external, AbstractAtom, AbstractSystem, Species};
//! use atoms_bridge::atoms::Vector3D;
//! use atoms_bridge::utils::LengthUnit;
//!
//! let atoms = vec![
//!     AbstractAtom::new(Species::new(12), Vector3D::new(0.0, 0.0, 0.0)),
//!     AbstractAtom::new(Species::new(8), Vector3D::new(2.1, 0.0, 0.0)),
//! ];
//! let lattice = [[4.2, 0.0, 0.0], [0.0, 4.2, 0.0], [0.0, 0.0, 4.2]];
//! let system = AbstractSystem::periodic(atoms, lattice, LengthUnit::Angstrom);
//!
//! let external = to_external(&system).unwrap();
//! assert_eq!(external.chemical_formula(), "MgO");
//! assert_eq!(external.pbc(), [true, true, true]);
//!
//! let back = to_abstract(&external).unwrap();
//! assert_eq!(back.len(), 2);
//! ```

pub mod atoms;
pub mod cli;
pub mod convert;
pub mod external;
pub mod system;
pub mod utils;

pub use convert::{
    attach, attach_pseudopotentials, to_abstract, to_abstract_with, to_external, to_external_with,
    ConversionError, ConversionOptions, MetadataMap,
};
pub use external::{ArrayValue, ExternalAtoms};
pub use system::{AbstractAtom, AbstractSystem, BoundaryCondition, PropertyValue, Species};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
