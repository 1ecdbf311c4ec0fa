/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

//! Options controlling a conversion

use serde::{Deserialize, Serialize};

/// Conversion options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    /// Relative difference under which an external mass is taken to be the
    /// element's standard atomic weight rather than an isotope
    pub mass_tolerance: f64,
    /// Copy system-level properties to and from the external `info` values
    pub copy_system_properties: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            mass_tolerance: 1e-6,
            copy_system_properties: true,
        }
    }
}

impl ConversionOptions {
    /// Read options from JSON; missing fields keep their default
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let options = ConversionOptions::from_json(r#"{"copy_system_properties": false}"#).unwrap();
        assert!(!options.copy_system_properties);
        assert_eq!(options.mass_tolerance, ConversionOptions::default().mass_tolerance);

        assert_eq!(ConversionOptions::from_json("{}").unwrap(), ConversionOptions::default());
    }
}
