//! Named base ramps.

use rgb::RGB;
use tracing::warn;

use crate::ColorRange;
use crate::error::{Error, Result};
use crate::palettes::{self, ty::RampData};
pub use crate::palettes::ty::RampType;

/// A continuous base ramp parametrized by reals in \[0, 1\]: the
/// linear RGB interpolation of control colors placed at uniform
/// positions.
#[derive(Clone, Copy)]
pub struct Ramp {
    name: &'static str,
    data: &'static RampData,
    reversed: bool,
}

/// Look up the base ramp `name`, e.g. `"YlGnBu"`.  Appending `_r`
/// selects the reversed ramp, as in matplotlib.
///
/// # Example
///
/// ```
/// use cmpong::{ramp, ColorRange};
/// let ylgnbu = ramp("YlGnBu")?;
/// assert_eq!(ylgnbu.rgb(1.), ramp("YlGnBu_r")?.rgb(0.));
/// # Ok::<(), cmpong::Error>(())
/// ```
pub fn ramp(name: &str) -> Result<Ramp> {
    let (base, reversed) = match name.strip_suffix("_r") {
        Some(base) => (base, true),
        None => (name, false),
    };
    match palettes::RAMPS.get_key_value(base) {
        Some((&name, data)) => Ok(Ramp { name, data, reversed }),
        None => {
            warn!(ramp = name, "unknown color ramp");
            Err(Error::UnknownRamp { name: name.to_string() })
        }
    }
}

/// Names of all registered ramps (without the `_r` variants).
pub fn ramp_names() -> impl Iterator<Item = &'static str> {
    palettes::RAMPS.keys().copied()
}

impl Ramp {
    /// Name of the ramp, with the `_r` suffix if it is reversed.
    pub fn name(&self) -> String {
        if self.reversed { format!("{}_r", self.name) }
        else { self.name.to_string() }
    }

    /// Whether the ramp runs from its last control color to its
    /// first one.
    pub fn is_reversed(&self) -> bool { self.reversed }

    /// Says whether the ramp is `Seq`uential or `Div`ergent.
    pub fn typ(&self) -> RampType { self.data.typ }

    /// Number of control colors (at least 2).
    pub fn len(&self) -> usize { self.data.rgb.len() }

    /// Returns the control colors in the order the ramp runs through
    /// them.
    pub fn colors(&self) -> Vec<RGB<f64>> {
        if self.reversed { self.data.rgb.iter().rev().copied().collect() }
        else { self.data.rgb.clone() }
    }

    /// Return the colors at `n` uniformly spaced positions in
    /// \[0, 1\], both ends included.
    pub fn sample(&self, n: usize) -> Vec<RGB<f64>> {
        self.samples(n)
    }

    /// Returns a copy running in the opposite direction.
    pub fn reversed(self) -> Self {
        Ramp { reversed: !self.reversed, ..self }
    }
}

impl ColorRange for Ramp {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\] (`t` is
    /// clamped to that interval; NaN yields NaN components).
    fn rgb(&self, t: f64) -> RGB<f64> {
        let t = t.clamp(0., 1.);
        let t = if self.reversed { 1. - t } else { t };
        let c = &self.data.rgb;
        let n = c.len() - 1;
        let tn = t * n as f64;
        let i = (tn.trunc() as usize).min(n - 1);
        lerp(c[i], c[i + 1], tn - i as f64)
    }
}

#[inline]
fn lerp(c0: RGB<f64>, c1: RGB<f64>, t: f64) -> RGB<f64> {
    let s = 1. - t;
    RGB { r: s * c0.r + t * c1.r,
          g: s * c0.g + t * c1.g,
          b: s * c0.b + t * c1.b }
}
