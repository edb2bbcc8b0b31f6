//! Visual tier mapping for carousel items.
//!
//! Every item gets a signed offset from the active item and, if it lies within
//! the render radius, a band describing how it should be drawn. The mapping is a
//! pure function of `(index, active, len)` and the policy.

use serde::{Deserialize, Serialize};

use super::index::circular_distance;
use crate::{Error, Result};

/// Coarse visual bucket derived from band position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Center,
    Adjacent,
    Far,
}

impl Tier {
    fn from_band(band: usize) -> Self {
        match band {
            0 => Tier::Center,
            1 => Tier::Adjacent,
            _ => Tier::Far,
        }
    }
}

/// Rendering hints for one band. Values are relative: `scale` and `opacity` of
/// 1.0 mean "as drawn", `blur` and `layer` are small ordinal levels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisualStyle {
    pub scale: f32,
    pub opacity: f32,
    #[serde(default)]
    pub blur: u8,
    /// Stacking order, higher is drawn on top
    #[serde(default)]
    pub layer: u8,
}

/// Style applied to items whose distance is at most `max_distance`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierBand {
    pub max_distance: usize,
    #[serde(flatten)]
    pub style: VisualStyle,
}

/// Derived placement of one item relative to the active item
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TierAssignment {
    /// Signed circular distance from the active item (negative = to the left)
    pub offset: isize,
    pub tier: Tier,
    /// Index into the policy's band list
    pub band: usize,
    pub style: VisualStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TierPolicy {
    bands: Vec<TierBand>,
    render_radius: usize,
}

impl Default for TierPolicy {
    fn default() -> Self {
        Self {
            bands: Self::default_bands(),
            render_radius: 2,
        }
    }
}

impl TierPolicy {
    /// Validate and build a policy.
    ///
    /// Bands must be non-empty, strictly ascending by `max_distance` and start
    /// at distance 0. Scale and opacity must lie in `(0, 2]`.
    pub fn new(bands: Vec<TierBand>, render_radius: usize) -> Result<Self> {
        let first = bands
            .first()
            .ok_or_else(|| Error::Config("carousel.tiers must not be empty".to_string()))?;

        if first.max_distance != 0 {
            return Err(Error::Config(format!(
                "first carousel tier must cover distance 0, got {}",
                first.max_distance
            )));
        }

        for pair in bands.windows(2) {
            if pair[1].max_distance <= pair[0].max_distance {
                return Err(Error::Config(format!(
                    "carousel tiers must be strictly ascending by max_distance ({} then {})",
                    pair[0].max_distance, pair[1].max_distance
                )));
            }
        }

        for band in &bands {
            let VisualStyle { scale, opacity, .. } = band.style;
            if !(scale > 0.0 && scale <= 2.0) || !(opacity > 0.0 && opacity <= 2.0) {
                return Err(Error::Config(format!(
                    "carousel tier at distance {} has out-of-range scale {} / opacity {}",
                    band.max_distance, scale, opacity
                )));
            }
        }

        Ok(Self {
            bands,
            render_radius,
        })
    }

    /// Center / adjacent / far bands
    pub fn default_bands() -> Vec<TierBand> {
        vec![
            TierBand {
                max_distance: 0,
                style: VisualStyle { scale: 1.05, opacity: 1.0, blur: 0, layer: 10 },
            },
            TierBand {
                max_distance: 1,
                style: VisualStyle { scale: 0.9, opacity: 0.7, blur: 1, layer: 5 },
            },
            TierBand {
                max_distance: 2,
                style: VisualStyle { scale: 0.75, opacity: 0.4, blur: 2, layer: 0 },
            },
        ]
    }

    pub fn bands(&self) -> &[TierBand] {
        &self.bands
    }

    pub fn render_radius(&self) -> usize {
        self.render_radius
    }

    /// Tier of `index` when `active` is centered, or `None` when the item lies
    /// outside the render radius (or the list is empty / the index invalid).
    pub fn tier_of(&self, index: usize, active: usize, len: usize) -> Option<TierAssignment> {
        if index >= len || active >= len {
            return None;
        }

        let offset = circular_distance(index, active, len);
        let distance = offset.unsigned_abs();
        if distance > self.render_radius {
            return None;
        }

        let band = self
            .bands
            .iter()
            .position(|b| b.max_distance >= distance)
            .unwrap_or(self.bands.len() - 1);

        Some(TierAssignment {
            offset,
            tier: Tier::from_band(band),
            band,
            style: self.bands[band].style,
        })
    }

    /// All visible items ordered left to right by offset
    pub fn window(&self, active: usize, len: usize) -> Vec<(usize, TierAssignment)> {
        let mut visible: Vec<(usize, TierAssignment)> = (0..len)
            .filter_map(|i| self.tier_of(i, active, len).map(|t| (i, t)))
            .collect();
        visible.sort_by_key(|(_, t)| t.offset);
        visible
    }
}
