use core::str::FromStr;

use serde::{Deserialize, Serialize};

use pizzeria_core::DomainError;

/// The closed pizza catalog.
///
/// Declaration order doubles as catalog order: the lenient substitution rule
/// ("first pizza in catalog order with nonzero stock") and inventory snapshots
/// both rely on it, via the derived `Ord`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pizza {
    Margherita,
    Salami,
    Funghi,
}

impl Pizza {
    pub const CATALOG: [Pizza; 3] = [Pizza::Margherita, Pizza::Salami, Pizza::Funghi];

    pub fn as_str(&self) -> &'static str {
        match self {
            Pizza::Margherita => "margherita",
            Pizza::Salami => "salami",
            Pizza::Funghi => "funghi",
        }
    }

    /// Unit price in cents.
    pub fn unit_price_cents(&self) -> u64 {
        match self {
            Pizza::Margherita => 750,
            Pizza::Salami => 850,
            Pizza::Funghi => 800,
        }
    }
}

impl core::fmt::Display for Pizza {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pizza {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "margherita" => Ok(Pizza::Margherita),
            "salami" => Ok(Pizza::Salami),
            "funghi" => Ok(Pizza::Funghi),
            other => Err(DomainError::invalid_order(format!("unknown pizza: {other}"))),
        }
    }
}
