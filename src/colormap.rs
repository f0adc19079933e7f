//! Piecewise-linear colormaps and their construction from levels.

use rgb::{RGB, RGB8};
use tracing::debug;

use crate::{ColorRange, RGBColor};
use crate::error::{Error, Result};
use crate::levels::Levels;
use crate::ramp::{self, Ramp};

/// Number of discrete colors of the colormaps built by [`salinity`].
pub const RESOLUTION: usize = 256;

/// Base ramp of [`salinity_default`].
pub const DEFAULT_RAMP: &str = "YlGnBu_r";

/// A control point of a [`ChannelTable`]: at position `x`, the
/// channel tends to `before` from the left and to `after` from the
/// right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    pub x: f64,
    pub before: f64,
    pub after: f64,
}

/// Piecewise-linear function over one color channel.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelTable {
    points: Vec<ControlPoint>, // Invariant: ≥ 2 points, x ascending in [0, 1]
}

impl ChannelTable {
    /// Create a table from control points ordered by position.
    pub fn new(points: Vec<ControlPoint>) -> Result<Self> {
        if points.len() < 2 {
            return Err(Error::param("points", format!(
                "a channel table needs at least 2 points, got {}",
                points.len())));
        }
        for p in &points {
            if !(0. ..= 1.).contains(&p.x) {
                return Err(Error::param("points", format!(
                    "position {} outside [0, 1]", p.x)));
            }
            if !p.before.is_finite() || !p.after.is_finite() {
                return Err(Error::param("points", "non-finite value"));
            }
        }
        if points.windows(2).any(|w| w[0].x > w[1].x) {
            return Err(Error::param("points", "positions must be ascending"));
        }
        Ok(ChannelTable { points })
    }

    /// The control points.
    pub fn points(&self) -> &[ControlPoint] { &self.points }

    /// Positions of the control points.
    pub fn positions(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.x)
    }

    /// Value of the channel at `t`.  Before the first (resp. after
    /// the last) control point, the channel is constant.
    pub fn eval(&self, t: f64) -> f64 {
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];
        if t.is_nan() { return f64::NAN }
        if t <= first.x { return first.after }
        if t >= last.x { return last.before }
        // first.x < t < last.x so 1 ≤ i < len.
        let i = self.points.partition_point(|p| p.x <= t);
        let (p0, p1) = (self.points[i - 1], self.points[i]);
        let s = (t - p0.x) / (p1.x - p0.x);
        (1. - s) * p0.after + s * p1.before
    }
}

/// A colormap defined by one [`ChannelTable`] per channel, together
/// with its lookup table of `resolution` colors.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentedColormap {
    name: String,
    red: ChannelTable,
    green: ChannelTable,
    blue: ChannelTable,
    lut: Vec<RGB<f64>>,
}

impl SegmentedColormap {
    /// Assemble a colormap with `resolution` ≥ 2 discrete colors.
    pub fn new(name: impl Into<String>, red: ChannelTable,
               green: ChannelTable, blue: ChannelTable,
               resolution: usize) -> Result<Self> {
        if resolution < 2 {
            return Err(Error::param("resolution", format!(
                "at least 2 colors are required, got {resolution}")));
        }
        Ok(Self::assemble(name.into(), red, green, blue, resolution))
    }

    fn assemble(name: String, red: ChannelTable, green: ChannelTable,
                blue: ChannelTable, resolution: usize) -> Self {
        let mut cmap = SegmentedColormap { name, red, green, blue,
                                           lut: vec![] };
        cmap.lut = cmap.samples(resolution);
        cmap
    }

    pub fn name(&self) -> &str { &self.name }

    /// Number of colors of the lookup table.
    pub fn resolution(&self) -> usize { self.lut.len() }

    pub fn red(&self) -> &ChannelTable { &self.red }

    pub fn green(&self) -> &ChannelTable { &self.green }

    pub fn blue(&self) -> &ChannelTable { &self.blue }

    /// The lookup table: the colormap evaluated at `resolution`
    /// uniformly spaced positions of \[0, 1\].
    pub fn lut(&self) -> &[RGB<f64>] { &self.lut }

    /// Quantized color of `t` ∈ \[0, 1\]: entry `⌊t · resolution⌋` of
    /// the lookup table.  Values outside \[0, 1\] get the end colors
    /// and NaN gets the first one.
    pub fn lookup(&self, t: f64) -> RGB<f64> {
        let n = self.lut.len();
        let i = (t.clamp(0., 1.) * n as f64) as usize;
        self.lut[i.min(n - 1)]
    }

    /// 8-bit pixel of `t` ∈ \[0, 1\], through [`lookup`](Self::lookup).
    pub fn to_rgb8(&self, t: f64) -> RGB8 {
        RGB8::from_rgb(self.lookup(t))
    }

    /// 8-bit pixel of the data `value` normalized by `norm`, `None`
    /// for masked (non-finite) data.
    pub fn map_value(&self, norm: &Normalize, value: f64) -> Option<RGB8> {
        norm.apply(value).map(|t| self.to_rgb8(t))
    }
}

impl ColorRange for SegmentedColormap {
    /// Exact piecewise-linear color at `t` ∈ \[0., 1.\].
    fn rgb(&self, t: f64) -> RGB<f64> {
        let t = t.clamp(0., 1.);
        RGB { r: self.red.eval(t), g: self.green.eval(t),
              b: self.blue.eval(t) }
    }
}

/// Colormap for salinity, with bigger chunks of salinity per color
/// section at lower salinity than higher.
///
/// The colors of the ramp `ramp_name` are sampled uniformly (one per
/// level) and placed at the positions `levels[i] / max(levels)`, so
/// equal color steps cover the, possibly uneven, intervals between
/// consecutive levels.
///
/// # Example
///
/// ```
/// use cmpong::{salinity, ColorRange};
/// let levels: Vec<f64> = (0 .. 10).map(f64::from).collect();
/// let cmap = salinity("YlGnBu", &levels)?;
/// assert_eq!(cmap.resolution(), 256);
/// assert_eq!(cmap.red().points().len(), 10);
/// # Ok::<(), cmpong::Error>(())
/// ```
pub fn salinity(ramp_name: &str, levels: &[f64]) -> Result<SegmentedColormap> {
    let ramp = ramp::ramp(ramp_name)?;
    let levels = Levels::new(levels)?;
    Ok(stretch(&ramp, &levels))
}

/// [`salinity`] with the [`DEFAULT_RAMP`] and
/// [`Levels::salinity_default`].
pub fn salinity_default() -> Result<SegmentedColormap> {
    let ramp = ramp::ramp(DEFAULT_RAMP)?;
    Ok(stretch(&ramp, &Levels::salinity_default()))
}

/// Stretch `ramp` so that its colors sampled at `levels.len()`
/// uniform positions land at the normalized levels.
pub fn stretch(ramp: &Ramp, levels: &Levels) -> SegmentedColormap {
    let colors = ramp.sample(levels.len());
    let x = levels.normalized();
    let table = |channel: fn(&RGB<f64>) -> f64| ChannelTable {
        points: x.iter().zip(&colors)
            .map(|(&x, c)| ControlPoint { x, before: channel(c),
                                          after: channel(c) })
            .collect()
    };
    let red = table(|c| c.r);
    let green = table(|c| c.g);
    let blue = table(|c| c.b);
    debug!(ramp = %ramp.name(), levels = levels.len(), max = levels.max(),
           "stretched colormap");
    SegmentedColormap::assemble(format!("{}_stretched", ramp.name()),
                                red, green, blue, RESOLUTION)
}

/// Linear map of data values in \[`vmin`, `vmax`\] onto the
/// normalized axis \[0, 1\] of a colormap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalize {
    vmin: f64,
    vmax: f64,
}

impl Normalize {
    pub fn new(vmin: f64, vmax: f64) -> Result<Self> {
        if !vmin.is_finite() || !vmax.is_finite() {
            return Err(Error::param("vmin/vmax", "bounds must be finite"));
        }
        if vmax <= vmin {
            return Err(Error::param("vmin/vmax", format!(
                "vmax = {vmax} must be larger than vmin = {vmin}")));
        }
        Ok(Normalize { vmin, vmax })
    }

    pub fn vmin(&self) -> f64 { self.vmin }

    pub fn vmax(&self) -> f64 { self.vmax }

    /// Normalized position of `value`, `None` if it is not finite
    /// (masked data).  The result is not clamped.
    pub fn apply(&self, value: f64) -> Option<f64> {
        if value.is_finite() {
            Some((value - self.vmin) / (self.vmax - self.vmin))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ramp::ramp;

    const EPS: f64 = 1e-12;

    fn close(c0: RGB<f64>, c1: RGB<f64>) -> bool {
        (c0.r - c1.r).abs() <= EPS && (c0.g - c1.g).abs() <= EPS
            && (c0.b - c1.b).abs() <= EPS
    }

    fn zero_to_nine() -> Vec<f64> { (0 .. 10).map(f64::from).collect() }

    #[test]
    fn positions_match_levels() {
        let cmap = salinity("YlGnBu", &zero_to_nine()).unwrap();
        for table in [cmap.red(), cmap.green(), cmap.blue()] {
            assert_eq!(table.points().len(), 10);
            for (i, x) in table.positions().enumerate() {
                assert!((x - i as f64 / 9.).abs() <= EPS, "{x} ≉ {i}/9");
            }
            assert_eq!(table.points()[9].x, 1.);
        }
    }

    #[test]
    fn colors_at_levels() {
        let levels = Levels::salinity_default();
        let cmap = salinity("YlGnBu", levels.as_slice()).unwrap();
        let colors = ramp("YlGnBu").unwrap().sample(levels.len());
        for (x, &c) in levels.normalized().iter().zip(&colors) {
            assert!(close(cmap.rgb(*x), c), "{x}: {:?} ≉ {c:?}", cmap.rgb(*x));
        }
        for p in cmap.red().points() {
            assert_eq!(p.before, p.after);
        }
    }

    #[test]
    fn linear_between_levels() {
        let cmap = salinity("Reds", &[0., 1., 4.]).unwrap();
        let colors = ramp("Reds").unwrap().sample(3);
        let mid = cmap.rgb(0.625);
        let avg = RGB { r: (colors[1].r + colors[2].r) / 2.,
                        g: (colors[1].g + colors[2].g) / 2.,
                        b: (colors[1].b + colors[2].b) / 2. };
        assert!(close(mid, avg), "{mid:?} ≉ {avg:?}");
    }

    #[test]
    fn top_endpoint() {
        let cmap = salinity("YlGnBu", &zero_to_nine()).unwrap();
        let top = ramp("YlGnBu").unwrap().rgb(1.);
        assert_eq!(cmap.rgb(1.), top);
        assert_eq!(cmap.lut()[255], top);
    }

    #[test]
    fn two_levels() {
        let cmap = salinity("YlGnBu", &[0., 1.]).unwrap();
        let r = ramp("YlGnBu").unwrap();
        let x: Vec<_> = cmap.green().positions().collect();
        assert_eq!(x, vec![0., 1.]);
        assert_eq!(cmap.rgb(0.), r.rgb(0.));
        assert_eq!(cmap.rgb(1.), r.rgb(1.));
        assert_eq!(cmap.rgb(0.), RGB { r: 1., g: 1., b: 217. / 255. });
    }

    #[test]
    fn first_level_above_zero() {
        let cmap = salinity("Blues", &[1., 2., 4.]).unwrap();
        let x: Vec<_> = cmap.blue().positions().collect();
        assert_eq!(x, vec![0.25, 0.5, 1.]);
        let first = ramp("Blues").unwrap().rgb(0.);
        assert_eq!(cmap.rgb(0.), first);
        assert_eq!(cmap.rgb(0.1), first);
    }

    #[test]
    fn idempotent() {
        let levels = Levels::salinity_default();
        let c0 = salinity(DEFAULT_RAMP, levels.as_slice()).unwrap();
        let c1 = salinity(DEFAULT_RAMP, levels.as_slice()).unwrap();
        assert_eq!(c0, c1);
        assert_eq!(c0, salinity_default().unwrap());
        assert_eq!(c0.name(), "YlGnBu_r_stretched");
    }

    #[test]
    fn errors() {
        assert!(matches!(salinity("YlGnBu", &[-2., -1., 0.]),
                         Err(Error::InvalidLevels { .. })));
        assert!(matches!(salinity("YlGnBu", &[-3., -2., -1.]),
                         Err(Error::InvalidLevels { .. })));
        assert!(matches!(salinity("YlGnBu", &[1.]),
                         Err(Error::InvalidLevels { .. })));
        assert!(matches!(salinity("NotARamp", &[0., 1.]),
                         Err(Error::UnknownRamp { .. })));
    }

    #[test]
    fn lookup_table() {
        let cmap = salinity_default().unwrap();
        assert_eq!(cmap.resolution(), RESOLUTION);
        assert_eq!(cmap.lut()[0], cmap.rgb(0.));
        assert_eq!(cmap.lut()[255], cmap.rgb(1.));
        assert_eq!(cmap.lookup(0.), cmap.lut()[0]);
        assert_eq!(cmap.lookup(0.5), cmap.lut()[128]);
        assert_eq!(cmap.lookup(1.), cmap.lut()[255]);
        assert_eq!(cmap.lookup(2.), cmap.lut()[255]);
        assert_eq!(cmap.lookup(-1.), cmap.lut()[0]);
        assert_eq!(cmap.lookup(f64::NAN), cmap.lut()[0]);
    }

    #[test]
    fn pixels() {
        let cmap = salinity_default().unwrap();
        let lut = cmap.lut();
        assert_eq!(cmap.to_rgb8(0.), RGB8::from_rgb(lut[0]));
        assert_eq!(cmap.to_rgb8(0.5), RGB8::from_rgb(lut[128]));
        assert_eq!(cmap.to_rgb8(1.), RGB8::from_rgb(lut[255]));
        // Out of range values get the end colors.
        assert_eq!(cmap.to_rgb8(2.), RGB8::from_rgb(lut[255]));
        assert_eq!(cmap.to_rgb8(-1.), RGB8::from_rgb(lut[0]));
    }

    #[test]
    fn map_data_values() {
        let cmap = salinity_default().unwrap();
        let norm = Normalize::new(0., 36.).unwrap();
        assert_eq!(cmap.map_value(&norm, f64::NAN), None);
        assert_eq!(cmap.map_value(&norm, f64::INFINITY), None);
        assert_eq!(cmap.map_value(&norm, 0.), Some(cmap.to_rgb8(0.)));
        assert_eq!(cmap.map_value(&norm, 18.), Some(cmap.to_rgb8(0.5)));
        assert_eq!(cmap.map_value(&norm, 40.), Some(cmap.to_rgb8(1.)));
        assert_eq!(cmap.map_value(&norm, -5.), Some(cmap.to_rgb8(0.)));
        // Colorbar ticks sit at tick / 36 along the bar.
        let ticks = Levels::salinity_default().ticks(&[0, 1, 2, 3, 4, 5, 8])
            .unwrap();
        let x: Vec<_> = ticks.iter()
            .map(|&t| norm.apply(t as f64).unwrap()).collect();
        for (&t, &x) in ticks.iter().zip(&x) {
            assert!((x - t as f64 / 36.).abs() <= EPS, "{t}: {x}");
        }
        assert_eq!(x[0], 0.);
        assert!(x.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn channel_table_validation() {
        let p = |x| ControlPoint { x, before: 0.5, after: 0.5 };
        assert!(ChannelTable::new(vec![p(0.)]).is_err());
        assert!(ChannelTable::new(vec![p(0.), p(1.5)]).is_err());
        assert!(ChannelTable::new(vec![p(0.5), p(0.)]).is_err());
        let step = ChannelTable::new(vec![
            ControlPoint { x: 0., before: 0., after: 0. },
            ControlPoint { x: 0.5, before: 0., after: 1. },
            ControlPoint { x: 1., before: 1., after: 1. }]).unwrap();
        assert_eq!(step.eval(0.25), 0.);
        assert_eq!(step.eval(0.5), 1.);
        assert_eq!(step.eval(0.75), 1.);
        let r = step.clone();
        let cmap = SegmentedColormap::new("step", r, step.clone(), step, 4)
            .unwrap();
        assert_eq!(cmap.resolution(), 4);
        assert_eq!(cmap.lookup(0.3), cmap.lut()[1]);
    }

    #[test]
    fn normalize() {
        let norm = Normalize::new(0., 36.).unwrap();
        assert_eq!(norm.apply(18.), Some(0.5));
        assert_eq!(norm.apply(f64::NAN), None);
        assert_eq!(norm.apply(72.), Some(2.));
        assert!(Normalize::new(1., 1.).is_err());
        assert!(Normalize::new(0., f64::INFINITY).is_err());
    }
}
