//! PC component slots and the components that fill them.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The fixed set of slots a PC build can populate.
///
/// A build holds at most one [`Component`] per slot. The ordering derives
/// from the declaration order, which matches the way builds are presented
/// (board first, peripherals last).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum ComponentSlot {
    Motherboard,
    Cpu,
    Ram,
    Storage,
    Gpu,
    PowerSupply,
    Case,
    Cooling,
    Keyboard,
    Monitor,
}

impl ComponentSlot {
    /// All slots, in presentation order.
    pub const ALL: [Self; 10] = [
        Self::Motherboard,
        Self::Cpu,
        Self::Ram,
        Self::Storage,
        Self::Gpu,
        Self::PowerSupply,
        Self::Case,
        Self::Cooling,
        Self::Keyboard,
        Self::Monitor,
    ];

    /// Resolve a catalog category string to a slot.
    ///
    /// Catalog data uses a handful of spellings per category; anything
    /// unrecognized maps to `None` and is skipped by callers.
    #[must_use]
    pub fn from_category(category: &str) -> Option<Self> {
        match category.trim().to_lowercase().as_str() {
            "motherboard" | "mainboard" => Some(Self::Motherboard),
            "cpu" | "processor" => Some(Self::Cpu),
            "ram" | "memory" => Some(Self::Ram),
            "storage" | "ssd" | "hdd" | "disk" => Some(Self::Storage),
            "gpu" | "graphics" | "graphics-card" => Some(Self::Gpu),
            "powersupply" | "power-supply" | "psu" => Some(Self::PowerSupply),
            "case" | "tower" => Some(Self::Case),
            "cooling" | "cooler" => Some(Self::Cooling),
            "keyboard" => Some(Self::Keyboard),
            "monitor" | "screen" => Some(Self::Monitor),
            _ => None,
        }
    }
}

impl fmt::Display for ComponentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Motherboard => "motherboard",
            Self::Cpu => "cpu",
            Self::Ram => "ram",
            Self::Storage => "storage",
            Self::Gpu => "gpu",
            Self::PowerSupply => "powerSupply",
            Self::Case => "case",
            Self::Cooling => "cooling",
            Self::Keyboard => "keyboard",
            Self::Monitor => "monitor",
        };
        write!(f, "{name}")
    }
}

/// A catalog component selected into a build slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    /// Display name.
    pub name: String,
    /// Catalog reference (unique per component).
    pub reference: String,
    /// Unit price; missing prices default to zero rather than failing.
    #[serde(default)]
    pub unit_price: Decimal,
    /// Catalog category the component came from.
    pub category: String,
}
