use anyhow::{Result, bail};

use super::types::{RankPoints, Tier};

/// Inclusive point range owned by one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierBand {
    pub tier: Tier,
    pub lower: RankPoints,
    pub upper: RankPoints,
}

impl TierBand {
    pub const fn new(tier: Tier, lower: RankPoints, upper: RankPoints) -> Self {
        Self { tier, lower, upper }
    }

    pub fn contains(&self, points: RankPoints) -> bool {
        points >= self.lower && points <= self.upper
    }
}

/// Contiguous, inclusive on both ends. Rookie owns 100, Bronze III starts at 101,
/// and Gold I is open-ended so every non-negative total lands in a band.
const STANDARD_BANDS: [TierBand; 10] = [
    TierBand::new(Tier::Rookie, 0, 100),
    TierBand::new(Tier::BronzeIII, 101, 150),
    TierBand::new(Tier::BronzeII, 151, 200),
    TierBand::new(Tier::BronzeI, 201, 250),
    TierBand::new(Tier::SilverIII, 251, 300),
    TierBand::new(Tier::SilverII, 301, 350),
    TierBand::new(Tier::SilverI, 351, 400),
    TierBand::new(Tier::GoldIII, 401, 450),
    TierBand::new(Tier::GoldII, 451, 500),
    TierBand::new(Tier::GoldI, 501, RankPoints::MAX),
];

/// Ordered tier bands, lowest first.
#[derive(Debug, Clone)]
pub struct TierTable {
    bands: Vec<TierBand>,
}

impl TierTable {
    pub fn standard() -> Self {
        Self {
            bands: STANDARD_BANDS.to_vec(),
        }
    }

    /// Builds a custom table. Bands must be non-empty, ascending and
    /// non-overlapping; gaps are allowed and resolve to `Unranked`.
    pub fn new(bands: Vec<TierBand>) -> Result<Self> {
        validate_bands(&bands)?;
        Ok(Self { bands })
    }

    pub fn tier_for(&self, points: RankPoints) -> Tier {
        if let Some(band) = self.bands.iter().find(|band| band.contains(points)) {
            return band.tier;
        }
        self.boundary_tier(points).unwrap_or(Tier::Unranked)
    }

    pub fn bands(&self) -> &[TierBand] {
        &self.bands
    }

    fn boundary_tier(&self, points: RankPoints) -> Option<Tier> {
        let first = self.bands.first()?;
        let last = self.bands.last()?;

        if points < first.lower {
            Some(first.tier)
        } else if points > last.upper {
            Some(last.tier)
        } else {
            None
        }
    }
}

impl Default for TierTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn validate_bands(bands: &[TierBand]) -> Result<()> {
    if bands.is_empty() {
        bail!("Tier table must contain at least one band");
    }

    for band in bands {
        if band.lower > band.upper {
            bail!(
                "Tier {} has lower bound {} above upper bound {}",
                band.tier, band.lower, band.upper
            );
        }
    }

    for pair in bands.windows(2) {
        let (previous, next) = (&pair[0], &pair[1]);
        if next.lower <= previous.upper {
            bail!("Tier {} overlaps tier {}", next.tier, previous.tier);
        }
        if next.tier <= previous.tier {
            bail!("Tier {} is listed out of order after {}", next.tier, previous.tier);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_is_contiguous() {
        let table = TierTable::standard();
        for pair in table.bands().windows(2) {
            assert_eq!(pair[1].lower, pair[0].upper + 1);
        }
        assert_eq!(table.bands().first().unwrap().lower, 0);
    }

    #[test]
    fn boundaries_resolve_to_single_tier() {
        let table = TierTable::standard();
        assert_eq!(table.tier_for(0), Tier::Rookie);
        assert_eq!(table.tier_for(100), Tier::Rookie);
        assert_eq!(table.tier_for(101), Tier::BronzeIII);
        assert_eq!(table.tier_for(150), Tier::BronzeIII);
        assert_eq!(table.tier_for(151), Tier::BronzeII);
        assert_eq!(table.tier_for(400), Tier::SilverI);
        assert_eq!(table.tier_for(401), Tier::GoldIII);
        assert_eq!(table.tier_for(501), Tier::GoldI);
    }

    #[test]
    fn out_of_range_totals_clamp_to_edge_tiers() {
        let table = TierTable::standard();
        assert_eq!(table.tier_for(-5), Tier::Rookie);
        assert_eq!(table.tier_for(10_000), Tier::GoldI);
    }

    #[test]
    fn gap_in_custom_table_is_unranked() {
        let table = TierTable::new(vec![
            TierBand::new(Tier::Rookie, 0, 100),
            TierBand::new(Tier::BronzeIII, 110, 150),
        ])
        .unwrap();

        assert_eq!(table.tier_for(105), Tier::Unranked);
        assert_eq!(table.tier_for(200), Tier::BronzeIII);
    }

    #[test]
    fn overlapping_bands_are_rejected() {
        let result = TierTable::new(vec![
            TierBand::new(Tier::Rookie, 0, 100),
            TierBand::new(Tier::BronzeIII, 100, 150),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn empty_and_inverted_tables_are_rejected() {
        assert!(TierTable::new(Vec::new()).is_err());
        assert!(TierTable::new(vec![TierBand::new(Tier::Rookie, 10, 0)]).is_err());
    }
}
