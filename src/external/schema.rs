/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Names and element kinds of the per-atom arrays the external toolkit
//! understands

use crate::system::ValueKind;

pub const MASSES: &str = "masses";
pub const MOMENTA: &str = "momenta";
pub const INITIAL_CHARGES: &str = "initial_charges";
pub const INITIAL_MAGMOMS: &str = "initial_magmoms";
pub const TAGS: &str = "tags";

/// Names stored as dedicated fields rather than in the array map
pub const RESERVED: [&str; 5] = ["numbers", "positions", "cell", "pbc", "symbols"];

/// Element kinds accepted for a recognized array, `None` for extras arrays
pub fn expected_kinds(name: &str) -> Option<&'static [ValueKind]> {
    match name {
        MASSES | INITIAL_CHARGES => Some(&[ValueKind::Float]),
        MOMENTA => Some(&[ValueKind::Vector]),
        INITIAL_MAGMOMS => Some(&[ValueKind::Float, ValueKind::Vector]),
        TAGS => Some(&[ValueKind::Int]),
        _ => None,
    }
}

/// True for the arrays with a fixed meaning in the external schema
pub fn is_recognized(name: &str) -> bool {
    expected_kinds(name).is_some()
}

pub fn is_reserved(name: &str) -> bool {
    RESERVED.contains(&name)
}
