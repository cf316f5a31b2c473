//! Signature page ordering
//!
//! Computes which logical page lands in each physical slot for saddle-stitch
//! signatures. Each sheet of a signature carries one page from the end of the
//! signature and one from the start on its outer face, then the next pair
//! inward on its inner face:
//!
//! ```text
//! One sheet per signature (8 pages, indices):
//!
//!   sheet 1 front: [7, 0]    sheet 1 back: [1, 6]
//!   sheet 2 front: [5, 2]    sheet 2 back: [3, 4]
//! ```
//!
//! Folding each signature at the spine and stacking them recovers reading
//! order.

use crate::constants::PAGES_PER_SHEET;
use crate::types::*;

use super::Slot;

// =============================================================================
// Imposed Order
// =============================================================================

/// Slots in output order. Consecutive pairs fill the left and right halves
/// of one output sheet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImposedOrder {
    slots: Vec<Slot>,
    pages_per_signature: usize,
}

impl ImposedOrder {
    /// Build an order from arbitrary slots, treated as a single signature
    pub fn from_slots(slots: Vec<Slot>) -> Self {
        let pages_per_signature = slots.len();
        Self {
            slots,
            pages_per_signature,
        }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn iter(&self) -> impl Iterator<Item = Slot> + '_ {
        self.slots.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slots in each signature
    pub fn pages_per_signature(&self) -> usize {
        self.pages_per_signature
    }

    /// Number of signatures; a short trailing group counts as one
    pub fn signature_count(&self) -> usize {
        if self.pages_per_signature == 0 {
            return 0;
        }
        self.slots.len().div_ceil(self.pages_per_signature)
    }

    /// Number of padding slots
    pub fn blank_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_blank()).count()
    }

    /// Number of output sheets the renderer will commit (two slots each,
    /// a trailing odd slot still gets its own sheet)
    pub fn sheet_count(&self) -> usize {
        self.slots.len().div_ceil(2)
    }
}

impl From<Vec<Slot>> for ImposedOrder {
    fn from(slots: Vec<Slot>) -> Self {
        Self::from_slots(slots)
    }
}

// =============================================================================
// Order Calculation
// =============================================================================

/// Compute the imposed order for `total_pages` pages bound in signatures of
/// `sheets_per_signature` sheets.
///
/// The result is padded with [`Slot::Blank`] up to a whole number of
/// signatures. Zero pages yield an empty order.
pub fn compute_order(total_pages: usize, sheets_per_signature: usize) -> Result<ImposedOrder> {
    if sheets_per_signature == 0 {
        return Err(ImposeError::Config(
            "Sheets per signature must be at least 1".to_string(),
        ));
    }

    let pages_per_signature = sheets_per_signature
        .checked_mul(PAGES_PER_SHEET)
        .ok_or_else(|| {
            ImposeError::Config(format!(
                "Sheets per signature is too large: {}",
                sheets_per_signature
            ))
        })?;

    let signatures = total_pages.div_ceil(pages_per_signature);
    let mut raw = Vec::with_capacity(signatures * pages_per_signature);

    for offset in (0..total_pages).step_by(pages_per_signature) {
        let mut top = offset + pages_per_signature - 1;
        let mut bottom = offset;

        for _ in 0..sheets_per_signature {
            raw.push(top);
            top -= 1;
            raw.push(bottom);
            bottom += 1;
            raw.push(bottom);
            bottom += 1;
            raw.push(top);
            top -= 1;
        }
    }

    let slots = raw
        .into_iter()
        .map(|index| {
            if index < total_pages {
                Slot::Page(index)
            } else {
                Slot::Blank
            }
        })
        .collect();

    Ok(ImposedOrder {
        slots,
        pages_per_signature,
    })
}

// =============================================================================
// Tests
// =============================================================================
