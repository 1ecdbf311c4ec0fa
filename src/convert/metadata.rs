/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Attaching per-species metadata such as pseudopotentials

use super::errors::{ConversionError, Result};
use crate::system::{names, AbstractSystem, PropertyValue};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Metadata payloads keyed by element symbol
///
/// `kind` is the name of the per-atom property the payload is stored under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataMap {
    kind: String,
    entries: BTreeMap<String, PropertyValue>,
}

impl MetadataMap {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Empty map of pseudopotential identifiers
    pub fn pseudopotentials() -> Self {
        Self::new(names::PSEUDOPOTENTIAL)
    }

    /// Return this map with `payload` registered for `symbol`
    pub fn with_entry(mut self, symbol: impl Into<String>, payload: impl Into<PropertyValue>) -> Self {
        self.entries.insert(symbol.into(), payload.into());
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn entries(&self) -> &BTreeMap<String, PropertyValue> {
        &self.entries
    }

    pub fn get(&self, symbol: &str) -> Option<&PropertyValue> {
        self.entries.get(symbol)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Return a copy of `system` where every atom whose element symbol has an
/// entry in `metadata` carries the payload as the property `metadata.kind()`
///
/// Atoms of elements without an entry are left as they are. Every key must
/// name an element present in the system.
pub fn attach(system: &AbstractSystem, metadata: &MetadataMap) -> Result<AbstractSystem> {
    let present: BTreeSet<&str> = system
        .atoms()
        .iter()
        .filter_map(|atom| atom.species().symbol())
        .collect();

    if let Some(key) = metadata.entries().keys().find(|key| !present.contains(key.as_str())) {
        return Err(ConversionError::InvalidMetadataKey(key.clone()));
    }

    let atoms = system
        .atoms()
        .iter()
        .map(|atom| match atom.species().symbol().and_then(|symbol| metadata.get(symbol)) {
            Some(payload) => atom.clone().with_property(metadata.kind(), payload.clone()),
            None => atom.clone(),
        })
        .collect();

    Ok(system.replace_atoms(atoms)?)
}

/// Attach pseudopotential identifiers, given as (symbol, identifier) pairs
pub fn attach_pseudopotentials<S, P>(
    system: &AbstractSystem,
    pseudopotentials: impl IntoIterator<Item = (S, P)>,
) -> Result<AbstractSystem>
where
    S: Into<String>,
    P: Into<String>,
{
    let metadata = pseudopotentials
        .into_iter()
        .fold(MetadataMap::pseudopotentials(), |map, (symbol, identifier)| {
            map.with_entry(symbol, PropertyValue::Text(identifier.into()))
        });
    attach(system, &metadata)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::Vector3D;
    use crate::system::{AbstractAtom, Species};
    use crate::utils::LengthUnit;

    fn magnesium_oxide() -> AbstractSystem {
        let atoms = vec![
            AbstractAtom::new(Species::new(12), Vector3D::new(0.0, 0.0, 0.0)),
            AbstractAtom::new(Species::new(8), Vector3D::new(2.1, 0.0, 0.0)),
        ];
        AbstractSystem::isolated(atoms, LengthUnit::Angstrom)
    }

    #[test]
    fn test_partial_coverage() {
        let system = magnesium_oxide();
        let metadata = MetadataMap::pseudopotentials().with_entry("Mg", "hgh/lda/mg-q2");

        let attached = attach(&system, &metadata).unwrap();
        assert_eq!(
            attached.atoms()[0].property(names::PSEUDOPOTENTIAL),
            Some(&PropertyValue::Text("hgh/lda/mg-q2".to_string()))
        );
        assert!(!attached.atoms()[1].has_property(names::PSEUDOPOTENTIAL));
        assert!(!system.atoms()[0].has_property(names::PSEUDOPOTENTIAL));
    }

    #[test]
    fn test_unknown_key() {
        let metadata = MetadataMap::new("basis").with_entry("Xx", "dzp");
        match attach(&magnesium_oxide(), &metadata) {
            Err(ConversionError::InvalidMetadataKey(key)) => assert_eq!(key, "Xx"),
            other => panic!("unexpected result: {:?}", other),
        }

        // a real element that is not in the system is rejected as well
        let metadata = MetadataMap::pseudopotentials().with_entry("Fe", "hgh/lda/fe-q8");
        assert!(attach(&magnesium_oxide(), &metadata).is_err());
    }

    #[test]
    fn test_attach_pseudopotentials() {
        let attached =
            attach_pseudopotentials(&magnesium_oxide(), [("Mg", "hgh/lda/mg-q2"), ("O", "hgh/lda/o-q6")]).unwrap();
        let identifiers: Vec<&str> = attached
            .atoms()
            .iter()
            .filter_map(|atom| atom.property(names::PSEUDOPOTENTIAL)?.as_text())
            .collect();
        assert_eq!(identifiers, ["hgh/lda/mg-q2", "hgh/lda/o-q6"]);
    }

    #[test]
    fn test_empty_map_changes_nothing() {
        let system = magnesium_oxide();
        let attached = attach(&system, &MetadataMap::new("basis")).unwrap();
        assert_eq!(attached, system);
    }
}
