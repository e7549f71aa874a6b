//! Report - Text rendering for lookup results
//!
//! One report type per entity. Each holds references into the static
//! tables and renders itself through `Display`; optional attributes are
//! written only when the table defines them.

use std::fmt;

use super::tables::{
    ArcSetting, MachineBrand, MaterialInfo, MigMaterial, MigSetting, ThicknessCategory,
    TigMaterial, TigSetting,
};

/// Table key to heading text (`mild_steel` -> `MILD STEEL`)
pub fn display_name(key: &str) -> String {
    key.replace('_', " ").to_uppercase()
}

fn optional(f: &mut fmt::Formatter<'_>, label: &str, value: Option<&str>) -> fmt::Result {
    match value {
        Some(v) => writeln!(f, "{}: {}", label, v),
        None => Ok(()),
    }
}

/// Settings for one process/material/thickness lookup
#[derive(Debug, Clone, Copy)]
pub enum ProcessReport {
    Mig {
        material: &'static MigMaterial,
        setting: &'static MigSetting,
    },
    Tig {
        material: &'static TigMaterial,
        setting: &'static TigSetting,
    },
    Arc {
        material: &'static str,
        setting: &'static ArcSetting,
        travel_angle: Option<&'static str>,
        arc_length: Option<&'static str>,
        notes: Option<&'static str>,
    },
    /// Arc procedure without a thickness dimension
    FixedArc {
        material: &'static str,
        electrode: &'static str,
        preheat: &'static str,
        technique: &'static str,
        notes: &'static str,
    },
}

impl fmt::Display for ProcessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessReport::Mig { material, setting } => {
                writeln!(
                    f,
                    "=== MIG WELDING - {} - {}\" ===",
                    display_name(material.material),
                    setting.thickness
                )?;
                writeln!(f, "Voltage: {}", setting.voltage)?;
                writeln!(f, "Wire Speed: {}", setting.wire_speed)?;
                writeln!(f, "Gas: {}", setting.gas)?;
                writeln!(f, "Wire Size: {}", setting.wire_size)?;
                optional(f, "Travel Speed", material.travel_speed)?;
                optional(f, "Stick Out", material.stick_out)?;
                optional(f, "Notes", material.notes)
            }
            ProcessReport::Tig { material, setting } => {
                writeln!(
                    f,
                    "=== TIG WELDING - {} - {}\" ===",
                    display_name(material.material),
                    setting.thickness
                )?;
                writeln!(f, "Amperage: {}", setting.amperage)?;
                writeln!(f, "Tungsten: {}", setting.tungsten)?;
                writeln!(f, "Gas: {}", setting.gas)?;
                writeln!(f, "Flow Rate: {}", setting.flow_rate)?;
                writeln!(f, "Polarity: {}", material.polarity)?;
                optional(f, "Frequency", material.frequency)?;
                optional(f, "Balance", material.balance)?;
                optional(f, "Notes", material.notes)
            }
            ProcessReport::Arc {
                material,
                setting,
                travel_angle,
                arc_length,
                notes,
            } => {
                writeln!(
                    f,
                    "=== ARC/STICK WELDING - {} - {}\" ===",
                    display_name(material),
                    setting.thickness
                )?;
                writeln!(f, "Electrode: {}", setting.electrode)?;
                writeln!(f, "Amperage: {}", setting.amperage)?;
                writeln!(f, "Polarity: {}", setting.polarity)?;
                optional(f, "Travel Angle", *travel_angle)?;
                optional(f, "Arc Length", *arc_length)?;
                optional(f, "Notes", *notes)
            }
            ProcessReport::FixedArc {
                material,
                electrode,
                preheat,
                technique,
                notes,
            } => {
                writeln!(f, "=== ARC/STICK WELDING - {} ===", display_name(material))?;
                writeln!(f, "Electrode: {}", electrode)?;
                writeln!(f, "Preheat: {}", preheat)?;
                writeln!(f, "Technique: {}", technique)?;
                writeln!(f, "Notes: {}", notes)
            }
        }
    }
}

/// Wire feed speed for a material, wire size and thickness category
#[derive(Debug, Clone, Copy)]
pub struct WireSpeedReport {
    pub material: &'static str,
    pub wire_size: &'static str,
    pub category: ThicknessCategory,
    pub speed: &'static str,
}

impl fmt::Display for WireSpeedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== WIRE SPEED - {} ===", display_name(self.material))?;
        writeln!(f, "Wire Size: {}\"", self.wire_size)?;
        writeln!(f, "Thickness: {}", self.category)?;
        writeln!(f, "Wire Speed: {}", self.speed)
    }
}

/// One brand, or the whole brand catalog
#[derive(Debug, Clone, Copy)]
pub enum MachineReport {
    Catalog(&'static [MachineBrand]),
    Brand(&'static MachineBrand),
}

impl fmt::Display for MachineReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MachineReport::Catalog(brands) => {
                writeln!(f, "=== WELDING MACHINE BRANDS ===")?;
                for brand in brands.iter() {
                    writeln!(f)?;
                    writeln!(f, "{}:", brand.name)?;
                    writeln!(f, "  Specialty: {}", brand.specialty)?;
                    writeln!(f, "  Reputation: {}", brand.reputation)?;
                    writeln!(f, "  Popular Models: {}", brand.popular_models.join(", "))?;
                }
                Ok(())
            }
            MachineReport::Brand(brand) => {
                writeln!(f, "=== {} WELDING MACHINES ===", brand.name.to_uppercase())?;
                writeln!(f, "Specialty: {}", brand.specialty)?;
                writeln!(f, "Reputation: {}", brand.reputation)?;
                writeln!(f, "Popular Models:")?;
                for model in brand.popular_models {
                    writeln!(f, "  - {}", model)?;
                }
                Ok(())
            }
        }
    }
}

/// Material properties
#[derive(Debug, Clone, Copy)]
pub struct MaterialReport(pub &'static MaterialInfo);

impl fmt::Display for MaterialReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let info = self.0;
        writeln!(f, "=== {} ===", display_name(info.material))?;
        writeln!(f, "Composition: {}", info.composition)?;
        writeln!(f, "Weldability: {}", info.weldability)?;
        optional(f, "Preheat", info.preheat)?;
        optional(f, "Concerns", info.concerns)?;
        optional(f, "Preparation", info.preparation)?;
        optional(f, "Technique", info.technique)?;
        optional(f, "Common Uses", info.common_uses)?;
        if !info.grades.is_empty() {
            writeln!(f, "Grades:")?;
            for (grade, desc) in info.grades {
                writeln!(f, "  {}: {}", grade, desc)?;
            }
        }
        optional(f, "Notes", info.notes)
    }
}
