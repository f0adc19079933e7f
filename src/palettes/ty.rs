pub(crate) use rgb::RGB;

/// Control colors of a base ramp.
pub(crate) struct RampData {
    pub(crate) rgb: Vec<RGB<f64>>, // Invariant: length ≥ 2, components in [0, 1]
    pub(crate) typ: RampType,
}

impl RampData {
    /// Build from `0xRRGGBB` literals.
    pub(crate) fn from_hex(typ: RampType, hex: &[u32]) -> Self {
        let rgb = hex.iter().map(|&h| {
            let c = |shift: u32| ((h >> shift) & 0xff) as f64 / 255.;
            RGB { r: c(16), g: c(8), b: c(0) }
        }).collect();
        RampData { rgb, typ }
    }
}

/// Type of base ramp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RampType {
    /// Sequential color scheme, suited to ordered data that progress
    /// from low to high. Lightness steps dominate the look of these
    /// schemes, with light colors for low data values to dark colors
    /// for high data values.
    Seq,
    /// Divergent color scheme.  They put equal emphasis on mid-range
    /// critical values and extremes at both ends of the data
    /// range.
    Div,
}
