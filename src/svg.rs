//! Writes an analog clock face as an SVG document.

use crate::clockface::{Face, Point};
use crate::time::TimeOfDay;
use std::io::{self, Write};

const PROLOG: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">"#;

const HAND_STYLE: &str = "fill:none;stroke-linecap:round;";

/// Draws the bezel and the hour, minute, and second hands of `face` at time
/// `t` into `w`.
pub fn write<W: Write>(mut w: W, face: &Face, t: TimeOfDay) -> io::Result<()> {
    writeln!(w, "{}", PROLOG)?;
    writeln!(
        w,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="100%" height="100%" viewBox="0 0 {} {}" version="2.0">"#,
        face.centre.x * 2.0,
        face.centre.y * 2.0,
    )?;
    bezel(&mut w, face)?;
    hand(&mut w, face.centre, face.hour_hand(t), "#000", 7.0)?;
    hand(&mut w, face.centre, face.minute_hand(t), "#000", 5.0)?;
    hand(&mut w, face.centre, face.second_hand(t), "#f00", 3.0)?;
    writeln!(w, "</svg>")
}

fn bezel<W: Write>(w: &mut W, face: &Face) -> io::Result<()> {
    writeln!(
        w,
        r#"<circle cx="{:.3}" cy="{:.3}" r="{:.3}" style="fill:#fff;stroke:#000;stroke-width:5px;"/>"#,
        face.centre.x, face.centre.y, face.bezel_radius,
    )
}

fn hand<W: Write>(
    w: &mut W,
    from: Point,
    to: Point,
    colour: &str,
    width: f64,
) -> io::Result<()> {
    writeln!(
        w,
        r#"<line x1="{:.3}" y1="{:.3}" x2="{:.3}" y2="{:.3}" style="{}stroke:{};stroke-width:{}px;"/>"#,
        from.x, from.y, to.x, to.y, HAND_STYLE, colour, width,
    )
}
