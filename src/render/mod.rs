mod annotate;
mod chart;
mod table;

pub use annotate::annotate;
pub use chart::{class_counts, render_class_chart};
pub use table::{DetectionRow, table_rows};

use std::sync::OnceLock;

use ab_glyph::FontRef;

static FONT_BYTES: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");

/// Font used for index labels and chart text.
pub(crate) fn label_font() -> &'static FontRef<'static> {
    static FONT: OnceLock<FontRef<'static>> = OnceLock::new();
    FONT.get_or_init(|| FontRef::try_from_slice(FONT_BYTES).expect("embedded font parses"))
}
