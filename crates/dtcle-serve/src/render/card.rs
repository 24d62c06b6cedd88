//! Social preview card generation.
//!
//! Cards are composed as an in-memory SVG (black background, centered
//! text) and rasterized to PNG with resvg. No network, no disk: the only
//! external input is the font database loaded at startup.

use anyhow::{Context, anyhow};
use dtcle_core::Severity;
use resvg::{tiny_skia, usvg};

use crate::fonts::DisplayFonts;

/// Card dimensions (standard Open Graph).
pub const CARD_WIDTH: u32 = 1200;
pub const CARD_HEIGHT: u32 = 630;

/// Vertical center of the headline text.
const HEADLINE_Y: u32 = 300;

/// First description line baseline; lines advance by `LINE_STEP`.
const DESCRIPTION_Y: u32 = 392;
const LINE_STEP: u32 = 36;

/// Render the status card for a tier: big headline in the tier color,
/// description lines in white below.
pub fn status_card(severity: Severity, fonts: &DisplayFonts) -> anyhow::Result<Vec<u8>> {
    let family = fonts.family();
    let mut body = String::with_capacity(1024);

    body.push_str(&format!(
        r##"<text x="600" y="{y}" text-anchor="middle" dominant-baseline="central" font-family="{family}" font-size="120" font-weight="700" fill="{color}">{headline}</text>"##,
        y = HEADLINE_Y,
        color = severity.color(),
        headline = severity.headline(),
    ));

    for (i, line) in severity.card_lines().iter().enumerate() {
        body.push_str(&format!(
            r##"<text x="600" y="{y}" text-anchor="middle" font-family="{family}" font-size="32" fill="#fff">{line}</text>"##,
            y = DESCRIPTION_Y + i as u32 * LINE_STEP,
        ));
    }

    rasterize(&svg_document(&body), fonts)
}

/// Render the apology card used when neither the snapshot nor the static
/// fallback image is available.
pub fn apology_card(fonts: &DisplayFonts) -> anyhow::Result<Vec<u8>> {
    let body = format!(
        r##"<text x="600" y="315" text-anchor="middle" dominant-baseline="central" font-family="{family}" font-size="48" fill="#fff">Maybe? Sorry, check back later.</text>"##,
        family = fonts.family(),
    );

    rasterize(&svg_document(&body), fonts)
}

/// Wrap card content in the SVG shell: fixed dimensions, black background.
fn svg_document(body: &str) -> String {
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}"><rect width="{w}" height="{h}" fill="#000"/>{body}</svg>"##,
        w = CARD_WIDTH,
        h = CARD_HEIGHT,
    )
}

/// Parse the SVG and render it into a PNG-encoded pixel buffer.
fn rasterize(svg: &str, fonts: &DisplayFonts) -> anyhow::Result<Vec<u8>> {
    let mut options = usvg::Options::default();
    options.font_family = fonts.family().to_string();
    options.fontdb = fonts.database();

    let tree = usvg::Tree::from_str(svg, &options).context("SVG parse error")?;

    let mut pixmap = tiny_skia::Pixmap::new(CARD_WIDTH, CARD_HEIGHT)
        .ok_or_else(|| anyhow!("failed to create pixmap"))?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    pixmap.encode_png().context("PNG encode error")
}
