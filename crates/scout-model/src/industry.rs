//! Industry sectors and their matching keyword tables.

use std::fmt;
use std::str::FromStr;

/// Industry sectors a search can target.
///
/// The set is fixed: it mirrors the sectors the buyer datasets are curated
/// for. Each sector carries an English keyword table used for substring
/// matching against product descriptions and company names; the tables are
/// data, kept separate from the scoring code so they can be extended and
/// tested on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Industry {
    /// 화장품/뷰티
    Cosmetics,
    /// 전자제품
    Electronics,
    /// 식품
    Food,
    /// 섬유/의류
    Textiles,
    /// 자동차 부품
    AutoParts,
    /// 기계/설비
    Machinery,
    /// 의료기기
    MedicalDevices,
    /// 기타
    Other,
}

impl Industry {
    /// Every supported sector, in display order.
    pub const ALL: [Industry; 8] = [
        Industry::Cosmetics,
        Industry::Electronics,
        Industry::Food,
        Industry::Textiles,
        Industry::AutoParts,
        Industry::Machinery,
        Industry::MedicalDevices,
        Industry::Other,
    ];

    /// Korean display label, as shown to users and echoed into results.
    pub fn label(&self) -> &'static str {
        match self {
            Industry::Cosmetics => "화장품/뷰티",
            Industry::Electronics => "전자제품",
            Industry::Food => "식품",
            Industry::Textiles => "섬유/의류",
            Industry::AutoParts => "자동차 부품",
            Industry::Machinery => "기계/설비",
            Industry::MedicalDevices => "의료기기",
            Industry::Other => "기타",
        }
    }

    /// English keywords matched (lowercase, substring) against product text
    /// and company names. The buyer datasets describe goods in English even
    /// when the rest of the row is Korean.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Industry::Cosmetics => &[
                "cosmetics",
                "beauty",
                "skincare",
                "skin care",
                "makeup",
                "personal care",
                "lotion",
                "cream",
                "serum",
                "toner",
                "cleanser",
                "sunscreen",
                "mask",
                "fragrance",
            ],
            Industry::Electronics => &[
                "electronics",
                "electronic",
                "device",
                "gadget",
                "semiconductor",
                "chip",
                "display",
                "battery",
                "charger",
                "adapter",
                "smart",
                "iot",
                "sensor",
                "led",
            ],
            Industry::Food => &[
                "food",
                "beverage",
                "snack",
                "drink",
                "coffee",
                "tea",
                "sauce",
                "noodle",
                "ramen",
                "instant",
                "frozen",
                "seafood",
                "meat",
                "fruit",
            ],
            Industry::Textiles => &[
                "apparel",
                "clothing",
                "garment",
                "textile",
                "fabric",
                "fashion",
                "yarn",
                "cotton",
                "polyester",
                "knit",
                "denim",
                "outerwear",
                "sportswear",
            ],
            Industry::AutoParts => &[
                "auto",
                "automotive",
                "car",
                "vehicle",
                "spare parts",
                "parts",
                "engine",
                "brake",
                "filter",
                "tire",
                "tyre",
                "transmission",
                "sensor",
            ],
            Industry::Machinery => &[
                "machinery",
                "equipment",
                "industrial",
                "manufacturing",
                "factory",
                "pump",
                "valve",
                "compressor",
                "tool",
                "robot",
                "automation",
                "cnc",
            ],
            Industry::MedicalDevices => &[
                "medical",
                "healthcare",
                "diagnostic",
                "surgical",
                "hospital",
                "clinic",
                "monitor",
                "disposable",
                "sterile",
            ],
            Industry::Other => &["import", "export", "trade", "sourcing", "procurement"],
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Industry {
    type Err = String;

    /// Parse either the Korean label or an ASCII alias (e.g. "cosmetics").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        for industry in Industry::ALL {
            if trimmed == industry.label() {
                return Ok(industry);
            }
        }
        match trimmed.to_lowercase().as_str() {
            "cosmetics" | "beauty" => Ok(Industry::Cosmetics),
            "electronics" => Ok(Industry::Electronics),
            "food" => Ok(Industry::Food),
            "textiles" | "apparel" => Ok(Industry::Textiles),
            "auto-parts" | "autoparts" => Ok(Industry::AutoParts),
            "machinery" => Ok(Industry::Machinery),
            "medical-devices" | "medical" => Ok(Industry::MedicalDevices),
            "other" => Ok(Industry::Other),
            _ => Err(format!("Unknown industry: {}", s)),
        }
    }
}
