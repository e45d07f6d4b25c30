use crate::{
    convert::{config::ConversionConfig, row::RowPath},
    foundation::core::{Canvas, Point},
};

const GROUP_ID: &str = "polargraph-paths";
const STROKE: &str = "black";
const STROKE_WIDTH: &str = "0.5";

/// SVG path data for a polyline: `M x,y L x,y ...` with two fractional digits.
///
/// Returns an empty string for no points; callers skip such rows entirely.
pub fn points_to_path_string(points: &[Point]) -> String {
    let Some((first, rest)) = points.split_first() else {
        return String::new();
    };

    // "L 123.45,-6.78 " is at most ~16 bytes for typical canvases.
    let mut d = String::with_capacity(points.len() * 16);
    d.push_str(&format!("M {:.2},{:.2}", first.x, first.y));
    for p in rest {
        d.push_str(&format!(" L {:.2},{:.2}", p.x, p.y));
    }
    d
}

/// Serialize row paths into a standalone SVG document.
///
/// The canvas is `width` wide and `height * line_spacing` tall. All rows share one stroked group;
/// rows with no points contribute no element. Lines are joined with `\n` and the document has no
/// trailing newline.
pub fn assemble_document(
    rows: &[RowPath],
    width: u32,
    height: u32,
    config: &ConversionConfig,
) -> String {
    let canvas = Canvas::for_grid(width, height, config.line_spacing);

    let mut lines = Vec::with_capacity(rows.len() + 5);
    lines.push(r#"<?xml version="1.0" encoding="UTF-8"?>"#.to_string());
    lines.push(format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h:.2}" viewBox="0 0 {w} {h:.2}">"#,
        w = canvas.width,
        h = canvas.height,
    ));
    lines.push(format!(
        r#"  <g id="{GROUP_ID}" stroke="{STROKE}" stroke-width="{STROKE_WIDTH}" fill="none" stroke-linecap="round" stroke-linejoin="round">"#
    ));

    for row in rows {
        let d = points_to_path_string(row.points());
        if d.is_empty() {
            continue;
        }
        lines.push(format!(r#"    <path d="{d}"/>"#));
    }

    lines.push("  </g>".to_string());
    lines.push("</svg>".to_string());
    lines.join("\n")
}

#[cfg(test)]
#[path = "../../tests/unit/document/svg.rs"]
mod tests;
