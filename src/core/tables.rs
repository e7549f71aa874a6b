//! Tables - The static welding knowledge base
//!
//! Every table is a `static` slice of typed records, so the data is fully
//! populated at compile time and can never be mutated. Slice order is the
//! order used when listing available keys.
//!
//! # Tables
//! - **MIG / TIG / Arc**: material -> thickness -> settings, plus shared
//!   per-material attributes
//! - **Wire speeds**: material -> wire size -> thickness category -> speed
//! - **Machine brands**: brand -> specialty, reputation, popular models
//! - **Materials**: composition, weldability and optional handling notes

use std::fmt;
use std::str::FromStr;

/// Something stored in a table under a lookup key
pub trait Keyed {
    fn key(&self) -> &'static str;
}

/// MIG settings for one thickness
#[derive(Debug, Clone, Copy)]
pub struct MigSetting {
    pub thickness: &'static str,
    pub voltage: &'static str,
    pub wire_speed: &'static str,
    pub gas: &'static str,
    pub wire_size: &'static str,
}

/// MIG table entry for one material
#[derive(Debug, Clone, Copy)]
pub struct MigMaterial {
    pub material: &'static str,
    pub thicknesses: &'static [MigSetting],
    pub travel_speed: Option<&'static str>,
    pub stick_out: Option<&'static str>,
    pub notes: Option<&'static str>,
}

/// TIG settings for one thickness
#[derive(Debug, Clone, Copy)]
pub struct TigSetting {
    pub thickness: &'static str,
    pub amperage: &'static str,
    pub tungsten: &'static str,
    pub gas: &'static str,
    pub flow_rate: &'static str,
}

/// TIG table entry for one material
#[derive(Debug, Clone, Copy)]
pub struct TigMaterial {
    pub material: &'static str,
    pub thicknesses: &'static [TigSetting],
    pub polarity: &'static str,
    pub frequency: Option<&'static str>,
    pub balance: Option<&'static str>,
    pub notes: Option<&'static str>,
}

/// Arc/Stick settings for one thickness
#[derive(Debug, Clone, Copy)]
pub struct ArcSetting {
    pub thickness: &'static str,
    pub electrode: &'static str,
    pub amperage: &'static str,
    pub polarity: &'static str,
}

/// Arc/Stick table entry for one material
#[derive(Debug, Clone, Copy)]
pub struct ArcMaterial {
    pub material: &'static str,
    pub kind: ArcKind,
}

/// Arc materials either vary by thickness or have one fixed procedure
#[derive(Debug, Clone, Copy)]
pub enum ArcKind {
    /// Settings per thickness with shared attributes
    Graded {
        thicknesses: &'static [ArcSetting],
        travel_angle: Option<&'static str>,
        arc_length: Option<&'static str>,
        notes: Option<&'static str>,
    },
    /// A single procedure regardless of thickness (cast iron)
    Fixed {
        electrode: &'static str,
        preheat: &'static str,
        technique: &'static str,
        notes: &'static str,
    },
}

/// Coarse thickness bucket used by wire speed lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThicknessCategory {
    Thin,
    Medium,
    Thick,
    VeryThick,
}

impl ThicknessCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThicknessCategory::Thin => "thin",
            ThicknessCategory::Medium => "medium",
            ThicknessCategory::Thick => "thick",
            ThicknessCategory::VeryThick => "very_thick",
        }
    }
}

impl fmt::Display for ThicknessCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThicknessCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(' ', "_").as_str() {
            "thin" => Ok(ThicknessCategory::Thin),
            "medium" => Ok(ThicknessCategory::Medium),
            "thick" => Ok(ThicknessCategory::Thick),
            "very_thick" => Ok(ThicknessCategory::VeryThick),
            _ => anyhow::bail!("Unknown thickness category: {}", s),
        }
    }
}

/// Wire speeds for one wire diameter
#[derive(Debug, Clone, Copy)]
pub struct WireSize {
    pub size: &'static str,
    pub speeds: &'static [(ThicknessCategory, &'static str)],
}

/// Wire speed table entry for one material
#[derive(Debug, Clone, Copy)]
pub struct WireSpeedMaterial {
    pub material: &'static str,
    pub sizes: &'static [WireSize],
}

/// Welding machine manufacturer
#[derive(Debug, Clone, Copy)]
pub struct MachineBrand {
    pub name: &'static str,
    pub specialty: &'static str,
    pub reputation: &'static str,
    pub popular_models: &'static [&'static str],
}

/// Material properties and welding considerations
#[derive(Debug, Clone, Copy)]
pub struct MaterialInfo {
    pub material: &'static str,
    pub composition: &'static str,
    pub weldability: &'static str,
    pub preheat: Option<&'static str>,
    pub concerns: Option<&'static str>,
    pub preparation: Option<&'static str>,
    pub technique: Option<&'static str>,
    pub common_uses: Option<&'static str>,
    /// (grade, description)
    pub grades: &'static [(&'static str, &'static str)],
    pub notes: Option<&'static str>,
}

impl Keyed for MigSetting {
    fn key(&self) -> &'static str {
        self.thickness
    }
}

impl Keyed for MigMaterial {
    fn key(&self) -> &'static str {
        self.material
    }
}

impl Keyed for TigSetting {
    fn key(&self) -> &'static str {
        self.thickness
    }
}

impl Keyed for TigMaterial {
    fn key(&self) -> &'static str {
        self.material
    }
}

impl Keyed for ArcSetting {
    fn key(&self) -> &'static str {
        self.thickness
    }
}

impl Keyed for ArcMaterial {
    fn key(&self) -> &'static str {
        self.material
    }
}

impl Keyed for WireSize {
    fn key(&self) -> &'static str {
        self.size
    }
}

impl Keyed for WireSpeedMaterial {
    fn key(&self) -> &'static str {
        self.material
    }
}

impl Keyed for MachineBrand {
    fn key(&self) -> &'static str {
        self.name
    }
}

impl Keyed for MaterialInfo {
    fn key(&self) -> &'static str {
        self.material
    }
}

// ============================================================================
// MIG
// ============================================================================

const MIX_75_25: &str = "75% Ar / 25% CO2";
const MIX_98_2: &str = "98% Ar / 2% CO2";
const PURE_ARGON: &str = "100% Ar";

#[rustfmt::skip]
pub static MIG_TABLE: &[MigMaterial] = &[
    MigMaterial {
        material: "mild_steel",
        thicknesses: &[
            MigSetting { thickness: "1/16", voltage: "16-18V", wire_speed: "200-300 IPM", gas: MIX_75_25, wire_size: "0.023\"" },
            MigSetting { thickness: "1/8", voltage: "17-19V", wire_speed: "250-350 IPM", gas: MIX_75_25, wire_size: "0.030\"" },
            MigSetting { thickness: "3/16", voltage: "18-21V", wire_speed: "300-400 IPM", gas: MIX_75_25, wire_size: "0.035\"" },
            MigSetting { thickness: "1/4", voltage: "20-23V", wire_speed: "350-450 IPM", gas: MIX_75_25, wire_size: "0.045\"" },
        ],
        travel_speed: Some("8-12 IPM"),
        stick_out: Some("3/8 to 1/2 inch"),
        notes: None,
    },
    MigMaterial {
        material: "stainless_steel",
        thicknesses: &[
            MigSetting { thickness: "1/16", voltage: "16-18V", wire_speed: "180-280 IPM", gas: MIX_98_2, wire_size: "0.030\"" },
            MigSetting { thickness: "1/8", voltage: "17-20V", wire_speed: "230-330 IPM", gas: MIX_98_2, wire_size: "0.035\"" },
            MigSetting { thickness: "3/16", voltage: "19-22V", wire_speed: "280-380 IPM", gas: MIX_98_2, wire_size: "0.035\"" },
            MigSetting { thickness: "1/4", voltage: "21-24V", wire_speed: "330-430 IPM", gas: MIX_98_2, wire_size: "0.045\"" },
        ],
        travel_speed: None,
        stick_out: None,
        notes: None,
    },
    MigMaterial {
        material: "aluminum",
        thicknesses: &[
            MigSetting { thickness: "1/16", voltage: "17-19V", wire_speed: "300-400 IPM", gas: PURE_ARGON, wire_size: "0.030\"" },
            MigSetting { thickness: "1/8", voltage: "18-21V", wire_speed: "350-450 IPM", gas: PURE_ARGON, wire_size: "0.035\"" },
            MigSetting { thickness: "3/16", voltage: "20-23V", wire_speed: "400-500 IPM", gas: PURE_ARGON, wire_size: "3/64\"" },
            MigSetting { thickness: "1/4", voltage: "22-25V", wire_speed: "450-550 IPM", gas: PURE_ARGON, wire_size: "3/64\"" },
        ],
        travel_speed: None,
        stick_out: None,
        notes: Some("Use spool gun or push-pull system. Clean surface thoroughly."),
    },
];

// ============================================================================
// TIG
// ============================================================================

const DCEN: &str = "DCEN (DC Electrode Negative)";

#[rustfmt::skip]
pub static TIG_TABLE: &[TigMaterial] = &[
    TigMaterial {
        material: "mild_steel",
        thicknesses: &[
            TigSetting { thickness: "1/16", amperage: "40-60A", tungsten: "1/16\" 2% Thoriated", gas: PURE_ARGON, flow_rate: "15-20 CFH" },
            TigSetting { thickness: "1/8", amperage: "70-90A", tungsten: "3/32\" 2% Thoriated", gas: PURE_ARGON, flow_rate: "15-20 CFH" },
            TigSetting { thickness: "3/16", amperage: "100-130A", tungsten: "1/8\" 2% Thoriated", gas: PURE_ARGON, flow_rate: "15-25 CFH" },
            TigSetting { thickness: "1/4", amperage: "140-180A", tungsten: "1/8\" 2% Thoriated", gas: PURE_ARGON, flow_rate: "20-25 CFH" },
        ],
        polarity: DCEN,
        frequency: None,
        balance: None,
        notes: Some("Add filler rod as needed"),
    },
    TigMaterial {
        material: "stainless_steel",
        thicknesses: &[
            TigSetting { thickness: "1/16", amperage: "40-60A", tungsten: "1/16\" 2% Lanthanated", gas: PURE_ARGON, flow_rate: "15-20 CFH" },
            TigSetting { thickness: "1/8", amperage: "70-95A", tungsten: "3/32\" 2% Lanthanated", gas: PURE_ARGON, flow_rate: "15-20 CFH" },
            TigSetting { thickness: "3/16", amperage: "105-140A", tungsten: "1/8\" 2% Lanthanated", gas: PURE_ARGON, flow_rate: "15-25 CFH" },
            TigSetting { thickness: "1/4", amperage: "150-190A", tungsten: "1/8\" 2% Lanthanated", gas: PURE_ARGON, flow_rate: "20-25 CFH" },
        ],
        polarity: DCEN,
        frequency: None,
        balance: None,
        notes: Some("Backpurge on critical applications"),
    },
    TigMaterial {
        material: "aluminum",
        thicknesses: &[
            TigSetting { thickness: "1/16", amperage: "60-90A", tungsten: "1/16\" Pure or Zirconated", gas: PURE_ARGON, flow_rate: "15-20 CFH" },
            TigSetting { thickness: "1/8", amperage: "100-130A", tungsten: "3/32\" Pure or Zirconated", gas: PURE_ARGON, flow_rate: "15-20 CFH" },
            TigSetting { thickness: "3/16", amperage: "140-180A", tungsten: "1/8\" Pure or Zirconated", gas: PURE_ARGON, flow_rate: "20-25 CFH" },
            TigSetting { thickness: "1/4", amperage: "190-240A", tungsten: "1/8\" Pure or Zirconated", gas: PURE_ARGON, flow_rate: "20-30 CFH" },
        ],
        polarity: "AC (Alternating Current)",
        frequency: Some("60-120 Hz for optimal cleaning"),
        balance: Some("70% EN / 30% EP for cleaning action"),
        notes: Some("Clean with stainless brush and acetone"),
    },
];

// ============================================================================
// Arc / Stick
// ============================================================================

#[rustfmt::skip]
pub static ARC_TABLE: &[ArcMaterial] = &[
    ArcMaterial {
        material: "mild_steel",
        kind: ArcKind::Graded {
            thicknesses: &[
                ArcSetting { thickness: "1/8", electrode: "1/8\" E6010 or E7018", amperage: "90-120A", polarity: "DCEP (E6010) or AC (E7018)" },
                ArcSetting { thickness: "3/16", electrode: "5/32\" E7018", amperage: "110-150A", polarity: "AC or DCEP" },
                ArcSetting { thickness: "1/4", electrode: "3/16\" E7018", amperage: "140-190A", polarity: "AC or DCEP" },
                ArcSetting { thickness: "3/8", electrode: "1/4\" E7018", amperage: "180-250A", polarity: "AC or DCEP" },
            ],
            travel_angle: Some("5-15 degrees drag"),
            arc_length: Some("Tight arc (electrode diameter)"),
            notes: None,
        },
    },
    ArcMaterial {
        material: "stainless_steel",
        kind: ArcKind::Graded {
            thicknesses: &[
                ArcSetting { thickness: "1/8", electrode: "1/8\" E308L-16", amperage: "85-115A", polarity: "DCEP" },
                ArcSetting { thickness: "3/16", electrode: "5/32\" E308L-16", amperage: "105-145A", polarity: "DCEP" },
                ArcSetting { thickness: "1/4", electrode: "3/16\" E308L-16", amperage: "135-185A", polarity: "DCEP" },
            ],
            travel_angle: None,
            arc_length: None,
            notes: Some("Keep heat input low to prevent sensitization"),
        },
    },
    ArcMaterial {
        material: "cast_iron",
        kind: ArcKind::Fixed {
            electrode: "ENi-CI (Nickel)",
            preheat: "200-400°F",
            technique: "Short beads (1-2 inches), peening, slow cooling",
            notes: "Keep interpass temp below 200°F",
        },
    },
];

// ============================================================================
// Wire speeds
// ============================================================================

use ThicknessCategory::{Medium, Thick, Thin, VeryThick};

#[rustfmt::skip]
pub static WIRE_SPEED_TABLE: &[WireSpeedMaterial] = &[
    WireSpeedMaterial {
        material: "mild_steel",
        sizes: &[
            WireSize { size: "0.023", speeds: &[(Thin, "200-300 IPM"), (Medium, "250-350 IPM")] },
            WireSize { size: "0.030", speeds: &[(Thin, "250-350 IPM"), (Medium, "300-400 IPM"), (Thick, "350-450 IPM")] },
            WireSize { size: "0.035", speeds: &[(Medium, "300-400 IPM"), (Thick, "350-500 IPM")] },
            WireSize { size: "0.045", speeds: &[(Thick, "350-550 IPM"), (VeryThick, "400-600 IPM")] },
        ],
    },
    WireSpeedMaterial {
        material: "stainless_steel",
        sizes: &[
            WireSize { size: "0.030", speeds: &[(Thin, "230-330 IPM"), (Medium, "280-380 IPM")] },
            WireSize { size: "0.035", speeds: &[(Medium, "280-380 IPM"), (Thick, "330-430 IPM")] },
            WireSize { size: "0.045", speeds: &[(Thick, "330-480 IPM")] },
        ],
    },
    WireSpeedMaterial {
        material: "aluminum",
        sizes: &[
            WireSize { size: "0.030", speeds: &[(Thin, "300-400 IPM"), (Medium, "350-450 IPM")] },
            WireSize { size: "0.035", speeds: &[(Medium, "350-450 IPM"), (Thick, "400-500 IPM")] },
            WireSize { size: "3/64", speeds: &[(Thick, "400-550 IPM"), (VeryThick, "450-600 IPM")] },
        ],
    },
];

// ============================================================================
// Machine brands
// ============================================================================

#[rustfmt::skip]
pub static MACHINE_BRANDS: &[MachineBrand] = &[
    MachineBrand {
        name: "Miller",
        specialty: "Professional grade, excellent TIG machines",
        reputation: "Industry standard, highly reliable",
        popular_models: &["Millermatic 211", "Dynasty 210", "Syncrowave 210", "Diversion 180"],
    },
    MachineBrand {
        name: "Lincoln",
        specialty: "Wide range, strong stick welders",
        reputation: "Workhorse machines, great value",
        popular_models: &["PowerMIG 210 MP", "Square Wave TIG 200", "Tombstone AC225", "Precision TIG 225"],
    },
    MachineBrand {
        name: "ESAB",
        specialty: "Multi-process machines, industrial equipment",
        reputation: "Innovative, European quality",
        popular_models: &["Rebel EMP 215ic", "Caddy Tig 2200i", "Warrior 500i"],
    },
    MachineBrand {
        name: "Hobart",
        specialty: "Hobbyist to professional, value-oriented",
        reputation: "Reliable, good entry-level machines",
        popular_models: &["Handler 190", "IronMan 230", "Stickmate 160i"],
    },
    MachineBrand {
        name: "Everlast",
        specialty: "Budget multi-process, inverter technology",
        reputation: "Good value, improving quality",
        popular_models: &["PowerTIG 210EXT", "PowerMTS 211Si", "Lightning MTS 275"],
    },
    MachineBrand {
        name: "Fronius",
        specialty: "Premium industrial, advanced technology",
        reputation: "Top-tier quality, expensive",
        popular_models: &["TransPocket 180", "MagicWave 230i", "TransSteel 2200"],
    },
];

// ============================================================================
// Materials
// ============================================================================

pub static MATERIALS: &[MaterialInfo] = &[
    MaterialInfo {
        material: "mild_steel",
        composition: "Low carbon steel (< 0.3% carbon)",
        weldability: "Excellent",
        preheat: Some("Not required unless thick or cold"),
        concerns: None,
        preparation: None,
        technique: None,
        common_uses: Some("Structural, automotive, general fabrication"),
        grades: &[],
        notes: None,
    },
    MaterialInfo {
        material: "stainless_steel",
        composition: "Iron + Chromium (10.5%+) + Nickel",
        weldability: "Good with proper filler",
        preheat: None,
        concerns: Some("Distortion, carbide precipitation, heat control"),
        preparation: None,
        technique: None,
        common_uses: None,
        grades: &[
            ("304", "Most common, general purpose"),
            ("316", "Marine grade, better corrosion resistance"),
            ("309", "Dissimilar metal filler"),
        ],
        notes: None,
    },
    MaterialInfo {
        material: "aluminum",
        composition: "Pure aluminum or alloys (6061, 5052, 7075)",
        weldability: "Moderate - requires AC TIG or MIG with spool gun",
        preheat: None,
        concerns: Some("Oxide layer, heat conductivity, distortion"),
        preparation: Some("Remove oxide with stainless brush, clean with acetone"),
        technique: None,
        common_uses: None,
        grades: &[],
        notes: None,
    },
    MaterialInfo {
        material: "cast_iron",
        composition: "Iron + high carbon (2-4%)",
        weldability: "Difficult - brittle, cracks easily",
        preheat: None,
        concerns: None,
        preparation: None,
        technique: Some("Nickel rods, preheat, short beads, slow cool"),
        common_uses: None,
        grades: &[],
        notes: Some("Often better to braze than weld"),
    },
];
