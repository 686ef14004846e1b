//! Rendering of the working cell buffer into the final output string.
//!
//! In partial mode unfilled cells are simply omitted. In full-mask mode
//! every unfilled cell is back-filled with the configured placeholder
//! (for swappable positions) or the mask's own character. Whitespace is
//! trimmed once from the joined string, never per cell.

use super::scan::Cell;
use crate::options::MaskingOptions;

pub(crate) fn assemble(cells: &[Cell], mask: &[char], options: &MaskingOptions) -> String {
    let mut joined = String::with_capacity(mask.len());

    for (index, cell) in cells.iter().enumerate() {
        match cell {
            Cell::Filled(ch) => joined.push(*ch),
            // A blank cell was matched, not unfilled; it stays empty in
            // both modes.
            Cell::Blank => {}
            Cell::Unfilled => {
                if options.partial_output {
                    continue;
                }
                let back_fill = match options.placeholder {
                    Some(placeholder) if options.is_swappable(mask[index]) => placeholder,
                    _ => mask[index],
                };
                joined.push(back_fill);
            }
        }
    }

    joined.trim().to_string()
}
