//! Tooltip/popup placement geometry.
//!
//! Positions are computed from an estimated size before the popup is ever
//! painted, so it never visibly jumps once real measurements exist.

use crate::constants::{
    POPUP_AVG_GLYPH_WIDTH, POPUP_LINE_HEIGHT, POPUP_MARGIN, POPUP_MAX_WIDTH, POPUP_PADDING,
};

/// Axis-aligned anchor rectangle in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl AnchorRect {
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.left + self.width / 2.0
    }
}

/// Viewport dimensions in the same coordinate space as the anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

/// Which side of the anchor the popup occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Above,
    Below,
}

/// Computed popup position. Derived state, recomputed on every change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopupGeometry {
    pub left: f32,
    pub top: f32,
    pub placement: Placement,
}

/// Estimate popup dimensions from content length alone.
///
/// # Returns
/// `(width, height)`: characters × average glyph width plus padding, wrapped
/// against the maximum width.
pub fn estimate_size(content_len: usize) -> (f32, f32) {
    let text_width = content_len as f32 * POPUP_AVG_GLYPH_WIDTH;
    let width = (text_width + POPUP_PADDING * 2.0).min(POPUP_MAX_WIDTH);
    let usable = POPUP_MAX_WIDTH - POPUP_PADDING * 2.0;
    let lines = (text_width / usable).ceil().max(1.0);
    let height = lines * POPUP_LINE_HEIGHT + POPUP_PADDING;
    (width, height)
}

/// Compute popup placement for an anchor within a viewport.
///
/// The side with more free space (minus the margin) wins; ties go above.
/// Horizontally the popup is centered on the anchor and clamped so both
/// edges stay inside the viewport minus the margin.
pub fn compute_position(
    anchor: AnchorRect,
    viewport: ViewportSize,
    content_len: usize,
) -> PopupGeometry {
    let (width, height) = estimate_size(content_len);

    let space_above = anchor.top - POPUP_MARGIN;
    let space_below = viewport.height - anchor.bottom() - POPUP_MARGIN;
    let placement = if space_above >= space_below {
        Placement::Above
    } else {
        Placement::Below
    };

    let top = match placement {
        Placement::Above => anchor.top - height - POPUP_MARGIN,
        Placement::Below => anchor.bottom() + POPUP_MARGIN,
    };

    let max_left = viewport.width - POPUP_MARGIN - width;
    let left = (anchor.center_x() - width / 2.0).clamp(POPUP_MARGIN, max_left.max(POPUP_MARGIN));

    PopupGeometry {
        left,
        top,
        placement,
    }
}

/// Collapses bursts of scroll/resize signals into one recompute per frame.
///
/// The host calls [`RecomputeCoalescer::request`] from every signal and
/// [`RecomputeCoalescer::take`] exactly once per frame; only the first take
/// after one or more requests reports work to do.
#[derive(Debug, Default)]
pub struct RecomputeCoalescer {
    pending: bool,
}

impl RecomputeCoalescer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self) {
        self.pending = true;
    }

    /// Consume the pending flag for this frame.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}
