//! ASCII banner with a color gradient (ARTICLE CREW).
//! Uses figlet's bundled standard font.

use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::ExecutableCommand;
use figlet_rs::FIGfont;
use std::io::{stdout, Write};

/// Ink Blue (#1f6feb).
const INK_BLUE: (u8, u8, u8) = (0x1f, 0x6f, 0xeb);
/// Parchment Gold (#e3b341).
const PARCHMENT_GOLD: (u8, u8, u8) = (0xe3, 0xb3, 0x41);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

/// Prints the welcome banner: "ARTICLE CREW" in figlet ASCII with a gradient
/// from Ink Blue to Parchment Gold, then the version line.
pub fn print_welcome() {
    let mut out = stdout();
    let font = FIGfont::standard().expect("figlet standard font");
    let figure = font.convert("ARTICLE CREW").expect("figlet convert ARTICLE CREW");
    let art = figure.to_string();
    let lines: Vec<&str> = art.lines().collect();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(INK_BLUE, PARCHMENT_GOLD, t);
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }

    let version = env!("CARGO_PKG_VERSION");
    let _ = out.execute(SetForegroundColor(Color::Rgb {
        r: PARCHMENT_GOLD.0,
        g: PARCHMENT_GOLD.1,
        b: PARCHMENT_GOLD.2,
    }));
    let _ = out.execute(Print(format!("v{}\r\n", version)));
    let _ = out.execute(Print("Transcripts in, research article out.\r\n"));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}
