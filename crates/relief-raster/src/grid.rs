use crate::error::RasterError;

/// Square, row-major grid of elevations in meters.
#[derive(Clone, Debug, PartialEq)]
pub struct ElevationGrid {
    size: usize,
    samples: Vec<f32>,
}

impl ElevationGrid {
    /// Fails unless `samples.len() == size * size`.
    pub fn new(size: usize, samples: Vec<f32>) -> Result<Self, RasterError> {
        if size == 0 || samples.len() != size * size {
            let side = (samples.len() as f64).sqrt() as u32;
            return Err(RasterError::Dimensions {
                expected: size,
                width: side,
                height: side,
            });
        }
        Ok(Self { size, samples })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.samples[row * self.size + col]
    }

    #[inline]
    pub fn row(&self, row: usize) -> &[f32] {
        let start = row * self.size;
        &self.samples[start..start + self.size]
    }

    pub fn column(&self, col: usize) -> impl Iterator<Item = f32> + '_ {
        (0..self.size).map(move |row| self.get(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_and_columns() {
        let g = ElevationGrid::new(3, (0..9).map(|v| v as f32).collect()).unwrap();
        assert_eq!(g.row(0), &[0.0, 1.0, 2.0]);
        assert_eq!(g.row(2), &[6.0, 7.0, 8.0]);
        assert_eq!(g.column(0).collect::<Vec<_>>(), vec![0.0, 3.0, 6.0]);
        assert_eq!(g.column(2).collect::<Vec<_>>(), vec![2.0, 5.0, 8.0]);
        assert_eq!(g.get(1, 2), 5.0);
    }

    #[test]
    fn wrong_sample_count_is_rejected() {
        assert!(matches!(
            ElevationGrid::new(4, vec![0.0; 9]),
            Err(RasterError::Dimensions { expected: 4, .. })
        ));
    }
}
