//! Stretched colormaps for salinity.
//!
//! - [`salinity`] builds a [`SegmentedColormap`] from a base [`Ramp`]
//!   and [`Levels`]
//! - [`ramp`] looks up a base ramp by name
//!
//! [`ColorRange`]
//!
//! The base ramps are the [schemes by Cynthia
//! Brewer](https://colorbrewer2.org/) under their matplotlib names
//! (e.g. `"YlGnBu"`, or `"YlGnBu_r"` for the reversed ramp).
//!
//! # Example
//!
//! ```
//! use cmpong::{ramp, salinity, ColorRange, Levels};
//! let levels = Levels::salinity_default();
//! let cmap = salinity("YlGnBu", levels.as_slice())?;
//! // Equal color steps cover uneven salinity intervals.
//! let x = levels.normalized();
//! let c = cmap.rgb(x[3]);
//! let expected = ramp("YlGnBu")?.sample(10)[3];
//! assert!((c.r - expected.r).abs() < 1e-12);
//! assert!((c.g - expected.g).abs() < 1e-12);
//! assert!((c.b - expected.b).abs() < 1e-12);
//! # Ok::<(), cmpong::Error>(())
//! ```

use rgb::{RGB, RGB8, RGB16, RGBA8};

mod colormap;
mod error;
mod levels;
mod palettes;
mod ramp;
mod style;

pub use colormap::{salinity, salinity_default, stretch, ChannelTable,
                   ControlPoint, Normalize, SegmentedColormap,
                   DEFAULT_RAMP, RESOLUTION};
pub use error::{Error, Result};
pub use levels::Levels;
pub use ramp::{ramp, ramp_names, Ramp, RampType};
pub use style::{Mathtext, Style};

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\], with
    /// components in \[0, 1\].
    fn rgb(&self, t: f64) -> RGB<f64>;

    /// Returns the color corresponding to `t` in the encoding `C`.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use cmpong::{ramp, ColorRange};
    /// let c: RGB8 = ramp("YlGnBu")?.color(0.);
    /// assert_eq!(c, RGB8::new(255, 255, 217));
    /// # Ok::<(), cmpong::Error>(())
    /// ```
    fn color<C: RGBColor>(&self, t: f64) -> C where Self: Sized {
        C::from_rgb(self.rgb(t))
    }

    /// Return the colors at `n` uniformly spaced values of `t` in
    /// \[0, 1\], both ends included (and evaluated exactly at 0 and 1).
    fn samples(&self, n: usize) -> Vec<RGB<f64>> {
        if n <= 1 { return (0 .. n).map(|_| self.rgb(0.)).collect() }
        let last = (n - 1) as f64;
        (0 .. n).map(|k| {
            if k == n - 1 { self.rgb(1.) } else { self.rgb(k as f64 / last) }
        }).collect()
    }

    /// Return an iterator yielding uniform sampling of `n` points
    /// between `a` and `b` (with the bounds `a` and `b` included in
    /// the list of points) together with colors.  It is not required
    /// that `a <= b`.  The colors are those of `t` running uniformly
    /// over \[0, 1\].
    fn range(&self, mut a: f64, mut b: f64, n: usize) -> Range<'_, Self>
    where Self: Sized {
        if a == f64::INFINITY { a = f64::MAX; }
        else if a == f64::NEG_INFINITY { a = f64::MIN };
        if b == f64::NEG_INFINITY { b = f64::MIN; }
        else if b == f64::INFINITY { b = f64::MAX };
        // `a` or `b` NaN will give an iterator yielding NaN.
        if n == 0 {
            Range { range: self, a, b, flast: 0., last: 0,
                    i: 1, j: 0 } // Empty iterator
        } else {
            Range { range: self, a, b, flast: (n - 1) as f64,
                    last: n - 1, i: 0, j: n - 1 }
        }
    }
}

/// An iterator yielding `f64` in a given range together with colors.
///
/// Created by [`ColorRange::range`].
pub struct Range<'a, R> {
    range: &'a R,
    a: f64, // finite or NaN
    b: f64, // finite or NaN
    flast: f64, // `last` as a floating-point number
    last: usize,
    i: usize, // first position to be consumed (i ≤ j)
    j: usize, // last position to be consumed
}

impl<'a, R: ColorRange> Range<'a, R> {
    /// Return the float and color of the position `k` (assuming it is
    /// in the range `0 ..= self.last`).  The end points are evaluated
    /// exactly at 0 and 1.
    fn rgb(&self, k: usize) -> (f64, RGB<f64>) {
        if k == 0 {
            (self.a, self.range.rgb(0.))
        } else if k == self.last {
            (self.b, self.range.rgb(1.))
        } else {
            let alpha = (self.last - k) as f64;
            let beta = k as f64;
            let t = beta / self.flast;
            let mut x = (alpha * self.a + beta * self.b) / self.flast;
            if x.is_infinite() {
                x = (1. - t) * self.a + t * self.b;
            }
            (x, self.range.rgb(t))
        }
    }
}

impl<'a, R: ColorRange> Iterator for Range<'a, R> {
    type Item = (f64, RGB<f64>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.rgb(self.i);
            self.i += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (self.j + 1).saturating_sub(self.i);
        (len, Some(len))
    }
}

impl<'a, R: ColorRange> ExactSizeIterator for Range<'a, R> {}

impl<'a, R: ColorRange> DoubleEndedIterator for Range<'a, R> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.rgb(self.j);
            if self.j == 0 {
                self.i = 1
            } else {
                self.j -= 1;
            }
            Some(item)
        } else {
            None
        }
    }
}

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green and blue components of the color (in
    /// \[0, 1\]).
    fn to_rgb(&self) -> RGB<f64>;

    /// Create a color from its RGB components (in \[0, 1\]).
    /// Components outside that interval are clamped.
    fn from_rgb(rgb: RGB<f64>) -> Self;

    /// Convert the color to grayscale.
    fn to_gray(&self) -> Self {
        let RGB { r, g, b } = Self::to_rgb(self);
        let x = 0.299 * r + 0.587 * g + 0.114 * b;
        Self::from_rgb(RGB { r: x, g: x, b: x })
    }
}

#[inline]
fn to_u8(x: f64) -> u8 { (x.clamp(0., 1.) * 255.).round() as u8 }

#[inline]
fn to_u16(x: f64) -> u16 { (x.clamp(0., 1.) * 65535.).round() as u16 }

impl RGBColor for RGB<f64> {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> { *self }

    #[inline]
    fn from_rgb(c: RGB<f64>) -> Self { c }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> {
        RGB { r: self.r as f64 / 255., g: self.g as f64 / 255.,
              b: self.b as f64 / 255. }
    }

    #[inline]
    fn from_rgb(c: RGB<f64>) -> Self {
        RGB8 { r: to_u8(c.r), g: to_u8(c.g), b: to_u8(c.b) }
    }
}

impl RGBColor for RGB16 {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> {
        RGB { r: self.r as f64 / 65535., g: self.g as f64 / 65535.,
              b: self.b as f64 / 65535. }
    }

    #[inline]
    fn from_rgb(c: RGB<f64>) -> Self {
        RGB16 { r: to_u16(c.r), g: to_u16(c.g), b: to_u16(c.b) }
    }
}

/// Opaque colors; the alpha component is dropped by [`to_rgb`].
///
/// [`to_rgb`]: RGBColor::to_rgb
impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgb(&self) -> RGB<f64> {
        RGB { r: self.r as f64 / 255., g: self.g as f64 / 255.,
              b: self.b as f64 / 255. }
    }

    #[inline]
    fn from_rgb(c: RGB<f64>) -> Self {
        RGBA8 { r: to_u8(c.r), g: to_u8(c.g), b: to_u8(c.b), a: 255 }
    }
}
