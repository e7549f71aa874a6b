//! Lookup - Validated queries against the knowledge tables
//!
//! All queries are pure functions of the static tables and their inputs.
//! An unknown key yields a [`LookupError`] whose message lists the valid
//! keys at that level; it is meant to be shown to the user as-is.
//!
//! # Key normalization
//! - Materials and thickness categories: trimmed, lowercased, spaces to
//!   underscores (`Mild Steel` -> `mild_steel`)
//! - Thicknesses and wire sizes: trimmed, trailing inch mark dropped
//!   (`1/8"` -> `1/8`)
//! - Brands: matched case-insensitively, echoed back in title case

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::report::{MachineReport, MaterialReport, ProcessReport, WireSpeedReport};
use super::tables::{
    ArcKind, ArcMaterial, Keyed, MachineBrand, MaterialInfo, MigMaterial, ThicknessCategory,
    TigMaterial, WireSpeedMaterial, ARC_TABLE, MACHINE_BRANDS, MATERIALS, MIG_TABLE, TIG_TABLE,
    WIRE_SPEED_TABLE,
};

/// Welding process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Process {
    Mig,
    Tig,
    /// Shielded metal arc (stick)
    Arc,
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Process::Mig => write!(f, "MIG"),
            Process::Tig => write!(f, "TIG"),
            Process::Arc => write!(f, "Arc"),
        }
    }
}

impl FromStr for Process {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mig" => Ok(Process::Mig),
            "tig" => Ok(Process::Tig),
            "arc" | "stick" => Ok(Process::Arc),
            _ => anyhow::bail!("Unknown process: {}. Use mig, tig or arc.", s),
        }
    }
}

/// A lookup key that is not in the table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Material '{material}' not found. Available: {available}")]
    UnknownMaterial { material: String, available: String },

    #[error("Thickness '{thickness}' not found for {material}. Available: {available}")]
    UnknownThickness {
        material: String,
        thickness: String,
        available: String,
    },

    #[error("Thickness required for {material}. Available: {available}")]
    MissingThickness { material: String, available: String },

    #[error("Wire size '{wire_size}' not found for {material}. Available: {available}")]
    UnknownWireSize {
        material: String,
        wire_size: String,
        available: String,
    },

    #[error("Thickness category '{category}' not found. Available: {available}")]
    UnknownCategory { category: String, available: String },

    #[error("Brand '{brand}' not found. Available: {available}")]
    UnknownBrand { brand: String, available: String },
}

/// Normalize a material or category key
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace(' ', "_")
}

/// Normalize a thickness or wire size (`1/8"` -> `1/8`)
pub fn normalize_dimension(raw: &str) -> &str {
    raw.trim().trim_end_matches('"').trim_end()
}

/// Title-case each word (`esab` -> `Esab`)
pub fn title_case(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn find<T: Keyed>(table: &'static [T], key: &str) -> Option<&'static T> {
    table.iter().find(|entry| entry.key() == key)
}

fn available<T: Keyed>(table: &[T]) -> String {
    table
        .iter()
        .map(|entry| entry.key())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Read-only view over the welding tables
#[derive(Debug, Clone, Copy)]
pub struct KnowledgeBase {
    mig: &'static [MigMaterial],
    tig: &'static [TigMaterial],
    arc: &'static [ArcMaterial],
    wire_speeds: &'static [WireSpeedMaterial],
    brands: &'static [MachineBrand],
    materials: &'static [MaterialInfo],
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self {
            mig: MIG_TABLE,
            tig: TIG_TABLE,
            arc: ARC_TABLE,
            wire_speeds: WIRE_SPEED_TABLE,
            brands: MACHINE_BRANDS,
            materials: MATERIALS,
        }
    }

    /// Settings for a process, material and thickness
    ///
    /// Arc cast iron has a single procedure and ignores `thickness`.
    pub fn process_settings(
        &self,
        process: Process,
        material: &str,
        thickness: Option<&str>,
    ) -> Result<ProcessReport, LookupError> {
        let material = normalize_key(material);

        match process {
            Process::Mig => {
                let entry = self.material_entry(self.mig, &material)?;
                let setting = select_thickness(entry.material, entry.thicknesses, thickness)?;
                Ok(ProcessReport::Mig {
                    material: entry,
                    setting,
                })
            }
            Process::Tig => {
                let entry = self.material_entry(self.tig, &material)?;
                let setting = select_thickness(entry.material, entry.thicknesses, thickness)?;
                Ok(ProcessReport::Tig {
                    material: entry,
                    setting,
                })
            }
            Process::Arc => {
                let entry = self.material_entry(self.arc, &material)?;
                match entry.kind {
                    ArcKind::Fixed {
                        electrode,
                        preheat,
                        technique,
                        notes,
                    } => Ok(ProcessReport::FixedArc {
                        material: entry.material,
                        electrode,
                        preheat,
                        technique,
                        notes,
                    }),
                    ArcKind::Graded {
                        thicknesses,
                        travel_angle,
                        arc_length,
                        notes,
                    } => {
                        let setting = select_thickness(entry.material, thicknesses, thickness)?;
                        Ok(ProcessReport::Arc {
                            material: entry.material,
                            setting,
                            travel_angle,
                            arc_length,
                            notes,
                        })
                    }
                }
            }
        }
    }

    /// Wire feed speed for a material, wire diameter and thickness category
    pub fn wire_speed(
        &self,
        material: &str,
        wire_size: &str,
        category: &str,
    ) -> Result<WireSpeedReport, LookupError> {
        let material = normalize_key(material);
        let entry = self.material_entry(self.wire_speeds, &material)?;

        let wire_size = normalize_dimension(wire_size);
        let size = find(entry.sizes, wire_size).ok_or_else(|| LookupError::UnknownWireSize {
            material: entry.material.to_string(),
            wire_size: wire_size.to_string(),
            available: available(entry.sizes),
        })?;

        let wanted = category.parse::<ThicknessCategory>().ok();
        let (category, speed) = size
            .speeds
            .iter()
            .find(|(cat, _)| Some(*cat) == wanted)
            .copied()
            .ok_or_else(|| LookupError::UnknownCategory {
                category: normalize_key(category),
                available: size
                    .speeds
                    .iter()
                    .map(|(cat, _)| cat.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })?;

        Ok(WireSpeedReport {
            material: entry.material,
            wire_size: size.size,
            category,
            speed,
        })
    }

    /// One brand, or every brand in table order when `brand` is `None`
    pub fn machine_info(&self, brand: Option<&str>) -> Result<MachineReport, LookupError> {
        let Some(brand) = brand else {
            return Ok(MachineReport::Catalog(self.brands));
        };

        let wanted = brand.trim();
        self.brands
            .iter()
            .find(|b| b.name.eq_ignore_ascii_case(wanted))
            .map(MachineReport::Brand)
            .ok_or_else(|| LookupError::UnknownBrand {
                brand: title_case(wanted),
                available: available(self.brands),
            })
    }

    /// Material properties and welding considerations
    pub fn material_info(&self, material: &str) -> Result<MaterialReport, LookupError> {
        let material = normalize_key(material);
        self.material_entry(self.materials, &material)
            .map(MaterialReport)
    }

    fn material_entry<T: Keyed>(
        &self,
        table: &'static [T],
        material: &str,
    ) -> Result<&'static T, LookupError> {
        find(table, material).ok_or_else(|| LookupError::UnknownMaterial {
            material: material.to_string(),
            available: available(table),
        })
    }
}

fn select_thickness<T: Keyed>(
    material: &str,
    table: &'static [T],
    thickness: Option<&str>,
) -> Result<&'static T, LookupError> {
    let Some(thickness) = thickness.map(normalize_dimension).filter(|t| !t.is_empty()) else {
        return Err(LookupError::MissingThickness {
            material: material.to_string(),
            available: available(table),
        });
    };

    find(table, thickness).ok_or_else(|| LookupError::UnknownThickness {
        material: material.to_string(),
        thickness: thickness.to_string(),
        available: available(table),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kb() -> KnowledgeBase {
        KnowledgeBase::new()
    }

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("Mild Steel"), "mild_steel");
        assert_eq!(normalize_key("  STAINLESS_steel "), "stainless_steel");
        assert_eq!(normalize_key("very thick"), "very_thick");
    }

    #[test]
    fn test_normalize_dimension() {
        assert_eq!(normalize_dimension("1/8\""), "1/8");
        assert_eq!(normalize_dimension(" 3/16 "), "3/16");
        assert_eq!(normalize_dimension("0.035"), "0.035");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("miller"), "Miller");
        assert_eq!(title_case("LINCOLN electric"), "Lincoln Electric");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_process_from_str() {
        assert_eq!("MIG".parse::<Process>().unwrap(), Process::Mig);
        assert_eq!("stick".parse::<Process>().unwrap(), Process::Arc);
        assert!("oxy".parse::<Process>().is_err());
    }

    #[test]
    fn test_mig_mild_steel() {
        let report = kb()
            .process_settings(Process::Mig, "mild_steel", Some("1/8"))
            .unwrap()
            .to_string();
        assert!(report.contains("17-19V"));
        assert!(report.contains("250-350 IPM"));
        assert!(report.contains("75% Ar / 25% CO2"));
        assert!(report.contains("Travel Speed: 8-12 IPM"));
        assert!(report.contains("Stick Out: 3/8 to 1/2 inch"));
    }

    #[test]
    fn test_material_spelling_variants_match() {
        let a = kb()
            .process_settings(Process::Tig, "Mild Steel", Some("1/8\""))
            .unwrap()
            .to_string();
        let b = kb()
            .process_settings(Process::Tig, "mild_steel", Some("1/8"))
            .unwrap()
            .to_string();
        assert_eq!(a, b);
    }

    #[test]
    fn test_tig_aluminum_shared_fields() {
        let report = kb()
            .process_settings(Process::Tig, "aluminum", Some("1/4"))
            .unwrap()
            .to_string();
        assert!(report.contains("190-240A"));
        assert!(report.contains("Polarity: AC (Alternating Current)"));
        assert!(report.contains("Frequency: 60-120 Hz"));
        assert!(report.contains("Balance: 70% EN / 30% EP"));
        assert!(report.contains("Notes: Clean with stainless brush and acetone"));
    }

    #[test]
    fn test_arc_cast_iron_ignores_thickness() {
        for thickness in [None, Some(""), Some("1/4"), Some("bogus")] {
            let report = kb()
                .process_settings(Process::Arc, "cast iron", thickness)
                .unwrap()
                .to_string();
            assert!(report.contains("ENi-CI"));
            assert!(report.contains("200-400°F"));
            assert!(report.starts_with("=== ARC/STICK WELDING - CAST IRON ==="));
        }
    }

    #[test]
    fn test_arc_stainless() {
        let report = kb()
            .process_settings(Process::Arc, "stainless_steel", Some("3/16"))
            .unwrap()
            .to_string();
        assert!(report.contains("105-145A"));
        assert!(report.contains("E308L-16"));
        assert!(report.contains("Notes: Keep heat input low"));
        assert!(!report.contains("Travel Angle"));
    }

    #[test]
    fn test_cast_iron_is_arc_only() {
        let err = kb()
            .process_settings(Process::Mig, "cast_iron", Some("1/8"))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Material 'cast_iron' not found. Available: mild_steel, stainless_steel, aluminum"
        );
    }

    #[test]
    fn test_unknown_thickness_lists_alternatives() {
        let err = kb()
            .process_settings(Process::Arc, "mild_steel", Some("1/16"))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Thickness '1/16' not found for mild_steel. Available: 1/8, 3/16, 1/4, 3/8"
        );
    }

    #[test]
    fn test_missing_thickness() {
        let err = kb()
            .process_settings(Process::Mig, "aluminum", None)
            .unwrap_err();
        assert!(matches!(err, LookupError::MissingThickness { .. }));
        assert!(err.to_string().contains("1/16, 1/8, 3/16, 1/4"));
    }

    #[test]
    fn test_wire_speed() {
        let report = kb()
            .wire_speed("mild_steel", "0.035", "medium")
            .unwrap()
            .to_string();
        assert!(report.contains("Wire Speed: 300-400 IPM"));
        assert!(report.contains("Wire Size: 0.035\""));

        let report = kb()
            .wire_speed("Aluminum", "3/64\"", "Very Thick")
            .unwrap()
            .to_string();
        assert!(report.contains("450-600 IPM"));
        assert!(report.contains("Thickness: very_thick"));
    }

    #[test]
    fn test_wire_speed_not_found_levels() {
        let err = kb().wire_speed("copper", "0.035", "thin").unwrap_err();
        assert!(matches!(err, LookupError::UnknownMaterial { .. }));

        let err = kb().wire_speed("stainless_steel", "3/64", "thin").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Wire size '3/64' not found for stainless_steel. Available: 0.030, 0.035, 0.045"
        );

        let err = kb().wire_speed("mild_steel", "0.023", "thick").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Thickness category 'thick' not found. Available: thin, medium"
        );

        let err = kb().wire_speed("mild_steel", "0.030", "Paper Thin").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Thickness category 'paper_thin' not found. Available: thin, medium, thick"
        );
    }

    #[test]
    fn test_machine_info() {
        let report = kb().machine_info(Some("miller")).unwrap().to_string();
        assert!(report.contains("=== MILLER WELDING MACHINES ==="));
        assert!(report.contains("  - Millermatic 211"));
        assert!(report.contains("  - Dynasty 210"));

        let report = kb().machine_info(Some("esab")).unwrap().to_string();
        assert!(report.contains("Rebel EMP 215ic"));

        let report = kb().machine_info(None).unwrap().to_string();
        for brand in ["Miller", "Lincoln", "ESAB", "Hobart", "Everlast", "Fronius"] {
            assert!(report.contains(brand));
        }
    }

    #[test]
    fn test_unknown_brand_is_title_cased() {
        let err = kb().machine_info(Some("kemppi")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Brand 'Kemppi' not found. Available: Miller, Lincoln, ESAB, Hobart, Everlast, Fronius"
        );
    }

    #[test]
    fn test_material_info() {
        let report = kb().material_info("aluminum").unwrap().to_string();
        assert!(report.contains("6061"));
        assert!(report.contains("Moderate"));
        assert!(report.contains("Preparation: Remove oxide"));

        let report = kb().material_info("Cast Iron").unwrap().to_string();
        assert!(report.contains("Technique: Nickel rods"));
        assert!(report.contains("Notes: Often better to braze than weld"));

        let err = kb().material_info("titanium").unwrap_err();
        assert!(err.to_string().contains("not found"));
        assert!(err.to_string().contains("cast_iron"));
    }

    #[test]
    fn test_every_table_value_is_reported() {
        let kb = kb();

        for mat in MIG_TABLE {
            for s in mat.thicknesses {
                let report = kb
                    .process_settings(Process::Mig, mat.material, Some(s.thickness))
                    .unwrap()
                    .to_string();
                for value in [s.voltage, s.wire_speed, s.gas, s.wire_size] {
                    assert!(report.contains(value), "{} missing from {}", value, report);
                }
            }
        }

        for mat in TIG_TABLE {
            for s in mat.thicknesses {
                let report = kb
                    .process_settings(Process::Tig, mat.material, Some(s.thickness))
                    .unwrap()
                    .to_string();
                for value in [s.amperage, s.tungsten, s.gas, s.flow_rate, mat.polarity] {
                    assert!(report.contains(value), "{} missing from {}", value, report);
                }
            }
        }

        for mat in ARC_TABLE {
            if let ArcKind::Graded { thicknesses, .. } = mat.kind {
                for s in thicknesses {
                    let report = kb
                        .process_settings(Process::Arc, mat.material, Some(s.thickness))
                        .unwrap()
                        .to_string();
                    for value in [s.electrode, s.amperage, s.polarity] {
                        assert!(report.contains(value), "{} missing from {}", value, report);
                    }
                }
            }
        }

        for mat in WIRE_SPEED_TABLE {
            for size in mat.sizes {
                for (category, speed) in size.speeds {
                    let report = kb
                        .wire_speed(mat.material, size.size, category.as_str())
                        .unwrap()
                        .to_string();
                    assert!(report.contains(speed));
                }
            }
        }
    }
}
