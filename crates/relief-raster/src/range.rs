use crate::grid::ElevationGrid;

/// Shared `[min, max]` normalization basis for a tile block.
///
/// `EMPTY` is the identity of `merge`, so folding is independent of the order
/// in which samples or grids are visited.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElevationRange {
    pub min: f32,
    pub max: f32,
}

impl Default for ElevationRange {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl ElevationRange {
    pub const EMPTY: ElevationRange = ElevationRange {
        min: f32::INFINITY,
        max: f32::NEG_INFINITY,
    };

    #[inline]
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    #[inline]
    pub fn include(self, v: f32) -> Self {
        Self::new(self.min.min(v), self.max.max(v))
    }

    #[inline]
    pub fn merge(self, other: ElevationRange) -> Self {
        Self::new(self.min.min(other.min), self.max.max(other.max))
    }

    pub fn of_samples(samples: &[f32]) -> Self {
        samples.iter().copied().fold(Self::EMPTY, Self::include)
    }

    pub fn fold<'a, I>(grids: I) -> Self
    where
        I: IntoIterator<Item = &'a ElevationGrid>,
    {
        grids
            .into_iter()
            .map(|g| Self::of_samples(g.samples()))
            .fold(Self::EMPTY, Self::merge)
    }

    /// Affine map of `value` from `[min, max]` onto `[0, out_max]`, unclamped.
    /// A degenerate range maps everything to 0.
    #[inline]
    pub fn normalize(&self, value: f32, out_max: f32) -> f32 {
        let span = f64::from(self.max) - f64::from(self.min);
        if !(span > 0.0) {
            return 0.0;
        }
        ((f64::from(value) - f64::from(self.min)) / span * f64::from(out_max)) as f32
    }
}
