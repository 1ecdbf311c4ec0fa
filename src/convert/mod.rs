/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Conversion engine
//!
//! Converts between [`AbstractSystem`](crate::system::AbstractSystem) and
//! [`ExternalAtoms`](crate::external::ExternalAtoms). The structure
//! converters delegate species to [`species`], cell and periodicity to
//! [`cell`] and per-atom properties to [`attributes`]. Metadata attachment
//! works on abstract systems only.

pub mod attributes;
pub mod cell;
pub mod config;
pub mod errors;
pub mod metadata;
pub mod species;
pub mod structure;

pub use config::ConversionOptions;
pub use errors::{ConversionError, ElementId, Result};
pub use metadata::{attach, attach_pseudopotentials, MetadataMap};
pub use species::SpeciesDescriptor;
pub use structure::{to_abstract, to_abstract_with, to_external, to_external_with};
