//! Printer's marks rendering for imposed sheets
//!
//! Content stream operations for the fold/trim guide line and for placing
//! page XObjects.

use crate::constants::GUIDE_LINE_WIDTH;
use crate::layout::{Line, Transform};

/// Stroke a guide line as PDF content stream operations
pub fn guide_line_ops(line: &Line) -> String {
    let mut ops = String::new();

    // Save graphics state
    ops.push_str("q\n");
    ops.push_str("0 0 0 RG\n");
    ops.push_str(&format!("{} w\n", GUIDE_LINE_WIDTH));
    ops.push_str("[] 0 d\n");
    ops.push_str(&format!(
        "{} {} m {} {} l S\n",
        line.x0, line.y0, line.x1, line.y1
    ));
    // Restore graphics state
    ops.push_str("Q\n");

    ops
}

/// Draw the named XObject under `transform`
pub fn placement_ops(xobject_name: &str, transform: &Transform) -> String {
    let [a, b, c, d, e, f] = transform.matrix();
    format!(
        "q {} {} {} {} {} {} cm /{} Do Q\n",
        a, b, c, d, e, f, xobject_name
    )
}
