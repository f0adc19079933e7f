//! Breakpoints stretching a colormap.

use crate::error::{Error, Result};

/// Ascending data values (e.g. salinity in g/kg) at which successive
/// colors of a stretched colormap are placed.
///
/// Invariants: at least 2 finite values, strictly increasing, with a
/// positive maximum and a non-negative minimum so that every
/// normalized position `level / max` lies in \[0, 1\].
#[derive(Debug, Clone, PartialEq)]
pub struct Levels(Vec<f64>);

impl Levels {
    /// Validate `levels`.
    pub fn new(levels: impl Into<Vec<f64>>) -> Result<Self> {
        let levels = levels.into();
        if levels.len() < 2 {
            return Err(Error::levels(format!(
                "at least 2 levels are required, got {}", levels.len())));
        }
        if let Some(x) = levels.iter().find(|x| !x.is_finite()) {
            return Err(Error::levels(format!("level {x} is not finite")));
        }
        if let Some(w) = levels.windows(2).find(|w| w[0] >= w[1]) {
            return Err(Error::levels(format!(
                "levels must be strictly increasing ({} >= {})", w[0], w[1])));
        }
        let max = levels[levels.len() - 1];
        if max == 0. {
            return Err(Error::levels("the maximum level is zero"));
        }
        if levels[0] < 0. {
            return Err(Error::levels(format!(
                "level {} normalizes to {} which is outside [0, 1]",
                levels[0], levels[0] / max)));
        }
        Ok(Levels(levels))
    }

    /// The default salinity levels: 10 values from 0 to 35 with
    /// larger steps at low salinity, `36 - 36^((9 - i) / 9)`.
    pub fn salinity_default() -> Self {
        Levels((0 .. 10).map(|i| 36. - 36_f64.powf((9 - i) as f64 / 9.))
               .collect())
    }

    /// Number of levels.
    pub fn len(&self) -> usize { self.0.len() }

    /// The largest level, used as the normalization divisor.
    pub fn max(&self) -> f64 { self.0[self.0.len() - 1] }

    /// The levels as a slice.
    pub fn as_slice(&self) -> &[f64] { &self.0 }

    /// Positions of the levels on the normalized axis, `level / max`.
    pub fn normalized(&self) -> Vec<f64> {
        let max = self.max();
        self.0.iter().map(|x| x / max).collect()
    }

    /// Integer labels (truncated levels) for the levels at `indices`,
    /// used to tick a colorbar at stretched intervals.
    pub fn ticks(&self, indices: &[usize]) -> Result<Vec<i64>> {
        indices.iter().map(|&i| match self.0.get(i) {
            Some(x) => Ok(x.trunc() as i64),
            None => Err(Error::param("ticks", format!(
                "index {i} out of range for {} levels", self.0.len()))),
        }).collect()
    }
}

impl AsRef<[f64]> for Levels {
    fn as_ref(&self) -> &[f64] { &self.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salinity_default() {
        let l = Levels::salinity_default();
        assert_eq!(l.len(), 10);
        assert_eq!(l.as_slice()[0], 0.);
        assert_eq!(l.max(), 35.);
        // The default levels pass validation.
        assert_eq!(Levels::new(l.as_slice()).unwrap(), l);
        // Steps shrink as salinity grows.
        let steps: Vec<_> = l.as_slice().windows(2).map(|w| w[1] - w[0])
            .collect();
        assert!(steps.windows(2).all(|s| s[0] > s[1]), "{steps:?}");
    }

    #[test]
    fn ticks() {
        let l = Levels::salinity_default();
        assert_eq!(l.ticks(&[0, 1, 2, 3, 4, 5, 8]).unwrap(),
                   vec![0, 11, 19, 25, 28, 31, 34]);
        assert!(matches!(l.ticks(&[10]),
                         Err(Error::InvalidParameter { .. })));
    }

    #[test]
    fn normalized() {
        let l = Levels::new(vec![0., 2.5, 5., 10.]).unwrap();
        assert_eq!(l.normalized(), vec![0., 0.25, 0.5, 1.]);
    }

    #[test]
    fn invalid() {
        let invalid = |v: &[f64]| matches!(Levels::new(v),
                                           Err(Error::InvalidLevels { .. }));
        assert!(invalid(&[]));
        assert!(invalid(&[1.]));
        assert!(invalid(&[0., 2., 1.]));
        assert!(invalid(&[0., 1., 1.]));
        assert!(invalid(&[0., f64::NAN, 1.]));
        assert!(invalid(&[0., f64::INFINITY]));
        // Zero maximum.
        assert!(invalid(&[-2., -1., 0.]));
        // Normalized positions would fall outside [0, 1].
        assert!(invalid(&[-3., -2., -1.]));
        assert!(invalid(&[-1., 5.]));
    }
}
