//! Banner for interactive sessions.

use owo_colors::{OwoColorize, Stream};

use crate::domain::{Rgb, Theme};

const ART: [&str; 3] = [
    "  ╔╦╗╦═╗╔═╗╔╦╗╔═╗  ╦═╗╦╔═╗╦╔═",
    "   ║ ╠╦╝╠═╣ ║║║╣   ╠╦╝║╚═╗╠╩╗",
    "   ╩ ╩╚═╩ ╩═╩╝╚═╝  ╩╚═╩╚═╝╩ ╩",
];

const TAGLINE: &str = "   size the trade, not the hope";

fn tint(text: &str, colour: Rgb, bold: bool) -> String {
    text.if_supports_color(Stream::Stdout, |t| {
        let coloured = t.truecolor(colour.0, colour.1, colour.2);
        if bold {
            coloured.bold().to_string()
        } else {
            coloured.to_string()
        }
    })
    .to_string()
}

/// The traderisk banner in the theme's gradient.
///
/// Colour follows `--color` and terminal detection like the rest of the
/// output.
#[must_use]
pub fn render_banner(theme: Theme) -> String {
    let palette = theme.palette();
    let [top, bottom] = palette.gradient;

    let mut lines = vec![String::new()];
    lines.extend(ART.iter().enumerate().map(|(idx, line)| {
        let colour = if idx + 1 == ART.len() { bottom } else { top };
        tint(line, colour, true)
    }));
    lines.push(tint(TAGLINE, palette.hint, false));
    lines.push(String::new());
    lines.join("\n")
}

/// Prints the traderisk banner to stdout.
pub fn print_banner(theme: Theme) {
    println!("{}", render_banner(theme));
}
