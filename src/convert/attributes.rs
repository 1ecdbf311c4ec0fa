/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Attribute bridge
//!
//! Per-atom properties with a counterpart in the external schema are
//! converted through a fixed table of rules, one per property. A rule is
//! applied only when its property is set on every atom; properties without
//! a rule are not exported. On import, recognized arrays go through the
//! inverse rule and any other array is copied verbatim.

use crate::atoms::Vector3D;
use crate::external::{schema, ArrayValue, ExternalAtoms};
use crate::system::{names, AbstractAtom, PropertyValue, ValueKind};
use crate::utils::conversions::{angstrom_per_fs_to_ase, ase_to_angstrom_per_fs};
use log::{debug, warn};
use std::collections::{BTreeMap, BTreeSet};

/// Per-atom data the conversion rules depend on
#[derive(Debug, Clone, Copy)]
pub struct AttributeContext<'a> {
    /// Mass of every atom, in amu
    pub masses: &'a [f64],
    /// Factor taking the abstract length unit to Ångström
    pub length_factor: f64,
}

/// Result of exporting the properties of a list of atoms
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportedAttributes {
    /// External arrays, keyed by their external name
    pub arrays: BTreeMap<String, ArrayValue>,
    /// Recognized properties left out because they were missing on some
    /// atoms or held values of the wrong kind
    pub skipped: Vec<String>,
    /// Properties without an external counterpart
    pub residual: Vec<String>,
}

type ExportFn = fn(&[&PropertyValue], &AttributeContext) -> Option<ArrayValue>;
type ImportFn = fn(&ArrayValue, &AttributeContext) -> Option<Vec<PropertyValue>>;

/// Two-way conversion between an abstract property and an external array
struct AttributeRule {
    property: &'static str,
    array: &'static str,
    export: ExportFn,
    import: ImportFn,
}

static RULES: [AttributeRule; 4] = [
    AttributeRule {
        property: names::VELOCITY,
        array: schema::MOMENTA,
        export: export_momenta,
        import: import_velocities,
    },
    AttributeRule {
        property: names::CHARGE,
        array: schema::INITIAL_CHARGES,
        export: export_floats,
        import: import_verbatim,
    },
    AttributeRule {
        property: names::MAGNETIC_MOMENT,
        array: schema::INITIAL_MAGMOMS,
        export: export_magnetic_moments,
        import: import_verbatim,
    },
    AttributeRule {
        property: names::TAG,
        array: schema::TAGS,
        export: export_ints,
        import: import_verbatim,
    },
];

fn rule_for_property(name: &str) -> Option<&'static AttributeRule> {
    RULES.iter().find(|rule| rule.property == name)
}

/// Abstract property names with a conversion rule
pub fn recognized_properties() -> impl Iterator<Item = &'static str> {
    RULES.iter().map(|rule| rule.property)
}

/// External array name a recognized property is exported to
pub fn external_name(property: &str) -> Option<&'static str> {
    rule_for_property(property).map(|rule| rule.array)
}

// p = m v, with v taken from length unit / fs to the toolkit's velocity unit
fn export_momenta(values: &[&PropertyValue], context: &AttributeContext) -> Option<ArrayValue> {
    values
        .iter()
        .zip(context.masses)
        .map(|(value, &mass)| {
            let velocity = value.as_vector()?;
            let velocity = velocity.scale(angstrom_per_fs_to_ase(context.length_factor));
            Some((velocity * mass).to_array())
        })
        .collect::<Option<Vec<_>>>()
        .map(ArrayValue::Vector)
}

fn import_velocities(array: &ArrayValue, context: &AttributeContext) -> Option<Vec<PropertyValue>> {
    let ArrayValue::Vector(momenta) = array else {
        return None;
    };

    let factor = ase_to_angstrom_per_fs(1.0) / context.length_factor;
    momenta
        .iter()
        .zip(context.masses)
        .map(|(&momentum, &mass)| {
            let velocity = Vector3D::from(momentum) / mass * factor;
            Some(PropertyValue::Vector(velocity))
        })
        .collect()
}

fn export_of_kind(values: &[&PropertyValue], kinds: &[ValueKind]) -> Option<ArrayValue> {
    let array = ArrayValue::from_values(values.iter().copied())?;
    kinds.contains(&array.kind()).then_some(array)
}

// integers widen to floats without loss
fn export_floats(values: &[&PropertyValue], _: &AttributeContext) -> Option<ArrayValue> {
    values
        .iter()
        .map(|value| match **value {
            PropertyValue::Float(value) => Some(value),
            PropertyValue::Int(value) => Some(value as f64),
            _ => None,
        })
        .collect::<Option<Vec<_>>>()
        .map(ArrayValue::Float)
}

fn export_ints(values: &[&PropertyValue], _: &AttributeContext) -> Option<ArrayValue> {
    export_of_kind(values, &[ValueKind::Int])
}

// collinear (scalar) or non-collinear (vector), but the same for all atoms
fn export_magnetic_moments(values: &[&PropertyValue], context: &AttributeContext) -> Option<ArrayValue> {
    export_floats(values, context).or_else(|| export_of_kind(values, &[ValueKind::Vector]))
}

fn import_verbatim(array: &ArrayValue, _: &AttributeContext) -> Option<Vec<PropertyValue>> {
    (0..array.len()).map(|i| array.get(i)).collect()
}

/// Convert the recognized properties of `atoms` into external arrays
pub fn export_attributes(atoms: &[AbstractAtom], context: &AttributeContext) -> ExportedAttributes {
    let mut exported = ExportedAttributes::default();

    for rule in &RULES {
        let values: Vec<&PropertyValue> = atoms
            .iter()
            .filter_map(|atom| atom.property(rule.property))
            .collect();

        if values.is_empty() {
            continue;
        }

        if values.len() != atoms.len() {
            debug!(
                "'{}' is set on {} of {} atoms, not exporting it",
                rule.property,
                values.len(),
                atoms.len()
            );
            exported.skipped.push(rule.property.to_string());
            continue;
        }

        match (rule.export)(&values, context) {
            Some(array) => {
                exported.arrays.insert(rule.array.to_string(), array);
            }
            None => {
                warn!(
                    "'{}' holds values that cannot be stored in '{}', not exporting it",
                    rule.property, rule.array
                );
                exported.skipped.push(rule.property.to_string());
            }
        }
    }

    let residual: BTreeSet<&String> = atoms
        .iter()
        .flat_map(|atom| atom.properties().keys())
        .filter(|name| rule_for_property(name).is_none())
        .collect();
    if !residual.is_empty() {
        debug!("no external counterpart for {:?}, dropping them", residual);
    }
    exported.residual = residual.into_iter().cloned().collect();

    exported
}

/// Convert the per-atom arrays of `atoms` into per-atom properties
///
/// The masses array is not a property: it is consumed by the species
/// mapping.
pub fn import_attributes(atoms: &ExternalAtoms, context: &AttributeContext) -> Vec<BTreeMap<String, PropertyValue>> {
    let mut properties = vec![BTreeMap::new(); atoms.len()];

    // extras first, so that a converted array wins over an extras array of
    // the same name
    for (name, array) in atoms.arrays() {
        if schema::is_recognized(name) {
            continue;
        }
        for (index, atom_properties) in properties.iter_mut().enumerate() {
            if let Some(value) = array.get(index) {
                atom_properties.insert(name.clone(), value);
            }
        }
    }

    for rule in &RULES {
        let Some(array) = atoms.array(rule.array) else {
            continue;
        };

        match (rule.import)(array, context) {
            Some(values) => {
                for (atom_properties, value) in properties.iter_mut().zip(values) {
                    atom_properties.insert(rule.property.to_string(), value);
                }
            }
            None => warn!(
                "'{}' holds {} values that cannot be converted to '{}', skipping it",
                rule.array,
                array.kind(),
                rule.property
            ),
        }
    }

    properties
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::Species;
    use crate::utils::constants::ASE_FEMTOSECOND;
    use approx::assert_relative_eq;

    fn context(masses: &[f64]) -> AttributeContext<'_> {
        AttributeContext {
            masses,
            length_factor: 1.0,
        }
    }

    fn atom(z: u32) -> AbstractAtom {
        AbstractAtom::new(Species::new(z), Vector3D::default())
    }

    #[test]
    fn test_rule_table() {
        let names: Vec<&str> = recognized_properties().collect();
        assert_eq!(names, ["velocity", "charge", "magnetic_moment", "tag"]);
        assert_eq!(external_name("velocity"), Some("momenta"));
        assert_eq!(external_name("pseudopotential"), None);
    }

    #[test]
    fn test_velocity_to_momentum() {
        let atoms = vec![atom(1).with_property(names::VELOCITY, Vector3D::new(0.1, 0.0, -0.2))];
        let masses = [2.0];
        let exported = export_attributes(&atoms, &context(&masses));

        let Some(ArrayValue::Vector(momenta)) = exported.arrays.get(schema::MOMENTA) else {
            panic!("momenta were not exported");
        };
        assert_relative_eq!(momenta[0][0], 2.0 * 0.1 / ASE_FEMTOSECOND, epsilon = 1e-12);
        assert_relative_eq!(momenta[0][1], 0.0);
        assert_relative_eq!(momenta[0][2], 2.0 * -0.2 / ASE_FEMTOSECOND, epsilon = 1e-12);

        let velocities = import_velocities(&ArrayValue::Vector(momenta.clone()), &context(&masses)).unwrap();
        let velocity = velocities[0].as_vector().unwrap();
        assert_relative_eq!(velocity.x, 0.1, epsilon = 1e-12);
        assert_relative_eq!(velocity.z, -0.2, epsilon = 1e-12);
    }

    #[test]
    fn test_length_factor_applies_to_velocity() {
        let atoms = vec![atom(1).with_property(names::VELOCITY, Vector3D::new(1.0, 0.0, 0.0))];
        let masses = [1.0];
        let in_nm = AttributeContext {
            masses: &masses,
            length_factor: 10.0,
        };
        let exported = export_attributes(&atoms, &in_nm);
        let Some(ArrayValue::Vector(momenta)) = exported.arrays.get(schema::MOMENTA) else {
            panic!("momenta were not exported");
        };
        assert_relative_eq!(momenta[0][0], 10.0 / ASE_FEMTOSECOND, epsilon = 1e-9);
    }

    #[test]
    fn test_partial_property_is_not_exported() {
        let mut atoms: Vec<AbstractAtom> = (0..9)
            .map(|i| atom(8).with_property(names::CHARGE, -0.1 * i as f64))
            .collect();
        atoms.push(atom(8));

        let masses = vec![15.999; 10];
        let exported = export_attributes(&atoms, &context(&masses));
        assert!(!exported.arrays.contains_key(schema::INITIAL_CHARGES));
        assert_eq!(exported.skipped, ["charge"]);
    }

    #[test]
    fn test_mixed_magnetic_moments_are_not_exported() {
        let atoms = vec![
            atom(26).with_property(names::MAGNETIC_MOMENT, 2.2),
            atom(26).with_property(names::MAGNETIC_MOMENT, Vector3D::new(0.0, 0.0, 2.2)),
        ];
        let masses = [55.845; 2];
        let exported = export_attributes(&atoms, &context(&masses));
        assert!(exported.arrays.is_empty());
        assert_eq!(exported.skipped, ["magnetic_moment"]);

        let collinear = vec![
            atom(26).with_property(names::MAGNETIC_MOMENT, 2.2),
            atom(26).with_property(names::MAGNETIC_MOMENT, -2.2),
        ];
        let exported = export_attributes(&collinear, &context(&masses));
        assert_eq!(
            exported.arrays.get(schema::INITIAL_MAGMOMS),
            Some(&ArrayValue::Float(vec![2.2, -2.2]))
        );
    }

    #[test]
    fn test_integer_scalars_are_widened() {
        let atoms = vec![
            atom(12)
                .with_property(names::CHARGE, 2_i64)
                .with_property(names::MAGNETIC_MOMENT, 1_i64),
            atom(8)
                .with_property(names::CHARGE, -2_i64)
                .with_property(names::MAGNETIC_MOMENT, 0.5),
        ];
        let exported = export_attributes(&atoms, &context(&[24.305, 15.999]));
        assert_eq!(
            exported.arrays.get(schema::INITIAL_CHARGES),
            Some(&ArrayValue::Float(vec![2.0, -2.0]))
        );
        assert_eq!(
            exported.arrays.get(schema::INITIAL_MAGMOMS),
            Some(&ArrayValue::Float(vec![1.0, 0.5]))
        );
        assert!(exported.skipped.is_empty());
    }

    #[test]
    fn test_wrong_kind_is_not_exported() {
        let atoms = vec![atom(1).with_property(names::TAG, 1.5)];
        let exported = export_attributes(&atoms, &context(&[1.008]));
        assert!(exported.arrays.is_empty());
        assert_eq!(exported.skipped, ["tag"]);
    }

    #[test]
    fn test_unrecognized_properties_are_residual() {
        let atoms = vec![
            atom(12).with_property("pseudopotential", "hgh/lda/mg-q2").with_property(names::TAG, 1_i64),
            atom(8).with_property("label", "O1").with_property(names::TAG, 2_i64),
        ];
        let exported = export_attributes(&atoms, &context(&[24.305, 15.999]));
        assert_eq!(exported.arrays.get(schema::TAGS), Some(&ArrayValue::Int(vec![1, 2])));
        assert_eq!(exported.residual, ["label", "pseudopotential"]);
        assert!(exported.skipped.is_empty());
    }

    #[test]
    fn test_import_copies_extras_verbatim() {
        let atoms = ExternalAtoms::new(vec![1, 1], vec![[0.0; 3]; 2], [[0.0; 3]; 3], [false; 3])
            .unwrap()
            .with_array(schema::TAGS, ArrayValue::Int(vec![3, 4]))
            .unwrap()
            .with_array(schema::MASSES, ArrayValue::Float(vec![1.008, 2.014]))
            .unwrap()
            .with_array("forces", ArrayValue::Vector(vec![[0.0, 0.0, 1.0], [0.0, 0.0, -1.0]]))
            .unwrap();

        let properties = import_attributes(&atoms, &context(&[1.008, 2.014]));
        assert_eq!(properties.len(), 2);
        assert_eq!(properties[0].get("tag"), Some(&PropertyValue::Int(3)));
        assert_eq!(
            properties[1].get("forces"),
            Some(&PropertyValue::Vector(Vector3D::new(0.0, 0.0, -1.0)))
        );
        assert!(!properties[0].contains_key("masses"));
        assert!(!properties[0].contains_key("tags"));
    }
}
