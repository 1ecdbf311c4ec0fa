/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Chemical formulas in Hill notation

use std::collections::BTreeMap;

/// Build a Hill-order formula from a sequence of element symbols
///
/// Carbon comes first and hydrogen second when carbon is present; every
/// other element (and H without C) follows alphabetically.
pub fn hill_formula<'a>(symbols: impl IntoIterator<Item = &'a str>) -> String {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for symbol in symbols {
        *counts.entry(symbol).or_insert(0) += 1;
    }

    let mut ordered = Vec::with_capacity(counts.len());
    if counts.contains_key("C") {
        for first in ["C", "H"] {
            if let Some(count) = counts.remove(first) {
                ordered.push((first, count));
            }
        }
    }
    ordered.extend(counts);

    ordered
        .into_iter()
        .map(|(symbol, count)| {
            if count == 1 {
                symbol.to_string()
            } else {
                format!("{}{}", symbol, count)
            }
        })
        .collect()
}
