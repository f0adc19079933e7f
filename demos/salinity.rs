//! Renders a synthetic surface salinity field with the default
//! stretched colormap to `figures/test.png`, and a colorbar labelled
//! at the stretched levels to `figures/test.html`.

use std::{fs::{self, File},
          io::{BufWriter, Write},
          error::Error};
use image::{Rgba, RgbaImage};
use rgb::RGB8;
use tracing::info;
use cmpong::{salinity_default, Levels, Normalize, RGBColor,
             SegmentedColormap, Style};

type Err = Box<dyn Error>;

const WIDTH: u32 = 340;
const HEIGHT: u32 = 180;
/// Land, as a light gray.
const LAND: Rgba<u8> = Rgba([204, 204, 204, 255]);

/// Salinity of a river plume spreading from the middle of the coast
/// (top edge), NaN on land.
fn field(x: u32, y: u32) -> f64 {
    let coast = 20. + 8. * (x as f64 / 25.).sin();
    let y = y as f64;
    if y < coast { return f64::NAN }
    let dx = (x as f64 - WIDTH as f64 / 2.) / 1.5;
    let d = (dx * dx + (y - coast) * (y - coast)).sqrt();
    36. * (1. - (-d / 60.).exp())
}

fn render(cmap: &SegmentedColormap, norm: &Normalize) -> RgbaImage {
    RgbaImage::from_fn(WIDTH, HEIGHT, |x, y| {
        match cmap.map_value(norm, field(x, y)) {
            Some(c) => Rgba([c.r, c.g, c.b, 255]),
            None => LAND,
        }
    })
}

fn colorbar(fh: &mut impl Write, cmap: &SegmentedColormap, norm: &Normalize,
            ticks: &[i64], style: &Style) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px; border-spacing: 0px\"><tr>")?;
    for &c in cmap.lut() {
        let c = RGB8::from_rgb(c);
        writeln!(fh, "  <td style=\"width: 2px; height: 20px; \
                      background-color: #{:02x}{:02x}{:02x}\"></td>",
                 c.r, c.g, c.b)?;
    }
    writeln!(fh, "</tr></table>")?;
    writeln!(fh, "<div style=\"position: relative; width: {}px; \
                  height: 1.5em; {}\">",
             2 * cmap.resolution(), style.css(style.tick_label_size))?;
    for &tick in ticks {
        let t = norm.apply(tick as f64).unwrap_or(0.).clamp(0., 1.);
        writeln!(fh, "  <span style=\"position: absolute; left: {:.1}%\">\
                      {tick}</span>", 100. * t)?;
    }
    writeln!(fh, "</div>")?;
    writeln!(fh, "<p style=\"{}\">Surface salinity [g&middot;kg<sup>-1</sup>]</p>",
             style.css(style.label_size))?;
    Ok(())
}

fn main() -> Result<(), Err> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG")
                         .unwrap_or_else(|_| "debug".to_string()))
        .init();

    let style = Style::default();
    let levels = Levels::salinity_default();
    let ticks = levels.ticks(&[0, 1, 2, 3, 4, 5, 8])?;
    let cmap = salinity_default()?;
    let norm = Normalize::new(0., 36.)?;

    fs::create_dir_all("figures")?;
    render(&cmap, &norm).save("figures/test.png")?;
    info!(path = "figures/test.png", "salinity field written");

    let mut fh = BufWriter::new(File::create("figures/test.html")?);
    writeln!(fh, "<html>\n<head><title>{}</title></head>\n\
                  <body style=\"{}\">",
             cmap.name(), style.css(style.font_size))?;
    writeln!(fh, "<img src=\"test.png\"/><br/>")?;
    colorbar(&mut fh, &cmap, &norm, &ticks, &style)?;
    writeln!(fh, "</body>\n</html>")?;
    info!(path = "figures/test.html", ?ticks, "colorbar written");
    Ok(())
}
