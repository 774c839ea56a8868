//! Ticket prices and the split of visitors between price tiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    common::{DayType, Percent},
    error::ValidationError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Ticket tiers sold for every session.
pub enum PriceTierKind {
    Standard,
    Discounted,
}

impl fmt::Display for PriceTierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PriceTierKind::Standard => "Standard",
            PriceTierKind::Discounted => "Discounted",
        };
        f.write_str(label)
    }
}

/// Share of visitors buying standard versus discounted tickets.
///
/// Only the standard share is stored; the discounted share is its complement,
/// so the pair always totals exactly 100%.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DistributionParts", into = "DistributionParts")]
pub struct TierDistribution {
    standard: Percent,
}

impl TierDistribution {
    /// Builds a distribution from a standard share; the discounted share follows.
    pub fn with_standard(standard: Percent) -> Self {
        Self { standard }
    }

    /// Accepts an explicit pair, rejecting it unless it totals 100%.
    pub fn from_parts(standard: u8, discounted: u8) -> Result<Self, ValidationError> {
        if u16::from(standard) + u16::from(discounted) != 100 {
            return Err(ValidationError::InvalidDistribution {
                standard,
                discounted,
            });
        }
        Ok(Self {
            standard: Percent::new(standard)?,
        })
    }

    pub fn standard(&self) -> Percent {
        self.standard
    }

    pub fn discounted(&self) -> Percent {
        self.standard.complement()
    }

    pub fn share(&self, tier: PriceTierKind) -> Percent {
        match tier {
            PriceTierKind::Standard => self.standard(),
            PriceTierKind::Discounted => self.discounted(),
        }
    }

    /// Edits the standard share; the input is clamped before the complement is derived.
    pub fn set_standard(&mut self, value: i64) {
        self.standard = Percent::clamped(value);
    }

    /// Edits the discounted share; the input is clamped before the complement is derived.
    pub fn set_discounted(&mut self, value: i64) {
        self.standard = Percent::clamped(value).complement();
    }

    pub fn set_share(&mut self, tier: PriceTierKind, value: i64) {
        match tier {
            PriceTierKind::Standard => self.set_standard(value),
            PriceTierKind::Discounted => self.set_discounted(value),
        }
    }
}

impl Default for TierDistribution {
    fn default() -> Self {
        Self::with_standard(Percent::clamped(70))
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct DistributionParts {
    standard: u8,
    discounted: u8,
}

impl TryFrom<DistributionParts> for TierDistribution {
    type Error = ValidationError;

    fn try_from(parts: DistributionParts) -> Result<Self, Self::Error> {
        TierDistribution::from_parts(parts.standard, parts.discounted)
    }
}

impl From<TierDistribution> for DistributionParts {
    fn from(value: TierDistribution) -> Self {
        Self {
            standard: value.standard().value(),
            discounted: value.discounted().value(),
        }
    }
}

/// Prices and tier split for one kind of day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceTier {
    pub standard_price: f64,
    pub discounted_price: f64,
    pub distribution: TierDistribution,
}

impl PriceTier {
    pub fn new(standard_price: f64, discounted_price: f64, distribution: TierDistribution) -> Self {
        Self {
            standard_price,
            discounted_price,
            distribution,
        }
    }

    pub fn price(&self, tier: PriceTierKind) -> f64 {
        match tier {
            PriceTierKind::Standard => self.standard_price,
            PriceTierKind::Discounted => self.discounted_price,
        }
    }

    /// Rejects prices that are negative, infinite, or NaN.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for tier in [PriceTierKind::Standard, PriceTierKind::Discounted] {
            let price = self.price(tier);
            if !price.is_finite() || price < 0.0 {
                return Err(ValidationError::InvalidPrice { tier, price });
            }
        }
        Ok(())
    }

    /// Average ticket price weighted by the tier split.
    pub fn blended_price(&self) -> f64 {
        self.distribution.standard().of(self.standard_price)
            + self.distribution.discounted().of(self.discounted_price)
    }
}

/// Weekday and weekend pricing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingProfile {
    pub weekday: PriceTier,
    pub weekend: PriceTier,
}

impl PricingProfile {
    pub fn for_day(&self, day: DayType) -> &PriceTier {
        match day {
            DayType::Weekday => &self.weekday,
            DayType::Weekend => &self.weekend,
        }
    }

    pub fn for_day_mut(&mut self, day: DayType) -> &mut PriceTier {
        match day {
            DayType::Weekday => &mut self.weekday,
            DayType::Weekend => &mut self.weekend,
        }
    }
}
