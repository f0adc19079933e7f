//! Writes `ramps.html` showing every base ramp, plain and stretched
//! with the default salinity levels.

use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use rgb::RGB8;
use cmpong::{ramp, ramp_names, stretch, ColorRange, Levels, RGBColor};

type Err = Box<dyn Error>;

fn css_string(c: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

fn table_of_colors(fh: &mut impl Write, colors: &[RGB8],
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for &c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {}\"></td>",
                css_string(c))?;
    }
    writeln!(fh, "<td rowspan=\"2\" style=\"padding-left: 7px\">\
                  {comment}</td></tr><tr>")?;
    for &c in colors {
        let c = c.to_gray();
        writeln!(fh, "  <td style=\"width: {width}px; height: 12px; \
                      background-color: {}\"></td>",
                 css_string(c))?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

fn range(fh: &mut impl Write, r: &impl ColorRange, n: usize,
         width: u32, comment: &str) -> Result<(), Err> {
    let colors: Vec<RGB8> = r.range(0., 1., n)
        .map(|(_, c)| RGB8::from_rgb(c)).collect();
    table_of_colors(fh, &colors, width, comment)
}

fn main() -> Result<(), Err> {
    let levels = Levels::salinity_default();
    let mut fh = BufWriter::new(File::create("ramps.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>cmpong: {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;
    for name in ramp_names() {
        let r = ramp(name)?;
        writeln!(fh, "<h3>{name}</h3>")?;
        let colors: Vec<RGB8> = r.colors().into_iter()
            .map(RGB8::from_rgb).collect();
        table_of_colors(&mut fh, &colors, 40,
                        &format!("{name} ({} colors)", r.len()))?;
        range(&mut fh, &r, 256, 1, "interpolated")?;
        range(&mut fh, &stretch(&r, &levels), 256, 1, "stretched")?;
    }
    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
