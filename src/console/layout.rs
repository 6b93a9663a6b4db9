//! Console overlay geometry and hit-testing.
//!
//! The overlay covers the whole frame. Inside it sits the content box: a
//! one-row header (title on the left, close control on the right) above the
//! bordered console body.

use ratatui::layout::Rect;
use thiserror::Error;

/// Largest content width, in columns.
pub const MAX_CONTENT_WIDTH: u16 = 64;

/// Largest content height, in rows.
pub const MAX_CONTENT_HEIGHT: u16 = 20;

/// Smallest usable content size.
pub const MIN_CONTENT_WIDTH: u16 = 24;
/// Smallest usable content height.
pub const MIN_CONTENT_HEIGHT: u16 = 6;

/// Width of the close control, `[x]`.
pub const CLOSE_CONTROL_WIDTH: u16 = 3;

/// Errors while laying out the overlay.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    /// The frame cannot fit the smallest content box.
    #[error("frame {width}x{height} is too small for the console overlay (need {min_width}x{min_height})")]
    TooSmall {
        /// Frame width.
        width: u16,
        /// Frame height.
        height: u16,
        /// Required width.
        min_width: u16,
        /// Required height.
        min_height: u16,
    },
}

/// What a pointer position lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The close control in the header.
    CloseControl,
    /// Anywhere inside the content box other than the close control.
    Content,
    /// The overlay itself, outside the content box.
    Backdrop,
    /// Outside the overlay, or no overlay laid out.
    Outside,
}

/// Rectangles of one rendered overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleLayout {
    /// Overlay root; covers the frame.
    pub overlay: Rect,
    /// Inner content box.
    pub content: Rect,
    /// Header row of the content box.
    pub header: Rect,
    /// Close control inside the header.
    pub close: Rect,
    /// Console body below the header.
    pub body: Rect,
}

impl ConsoleLayout {
    /// Lays out the overlay inside `area`.
    ///
    /// The content box takes 90% of the width and 80% of the height, capped
    /// at [`MAX_CONTENT_WIDTH`] x [`MAX_CONTENT_HEIGHT`], centered.
    pub fn compute(area: Rect) -> Result<Self, LayoutError> {
        let width = (area.width.saturating_mul(9) / 10).min(MAX_CONTENT_WIDTH);
        let height = (area.height.saturating_mul(8) / 10).min(MAX_CONTENT_HEIGHT);

        if width < MIN_CONTENT_WIDTH || height < MIN_CONTENT_HEIGHT {
            return Err(LayoutError::TooSmall {
                width: area.width,
                height: area.height,
                min_width: MIN_CONTENT_WIDTH,
                min_height: MIN_CONTENT_HEIGHT,
            });
        }

        let x = area.x + (area.width - width) / 2;
        let y = area.y + (area.height - height) / 2;
        let content = Rect::new(x, y, width, height);
        let header = Rect::new(x, y, width, 1);
        let close = Rect::new(
            x + width - CLOSE_CONTROL_WIDTH - 1,
            y,
            CLOSE_CONTROL_WIDTH,
            1,
        );
        let body = Rect::new(x, y + 1, width, height - 1);

        Ok(Self {
            overlay: area,
            content,
            header,
            close,
            body,
        })
    }

    /// Returns what the position `(column, row)` lands on.
    pub fn hit_test(&self, column: u16, row: u16) -> HitTarget {
        if contains(self.close, column, row) {
            HitTarget::CloseControl
        } else if contains(self.content, column, row) {
            HitTarget::Content
        } else if contains(self.overlay, column, row) {
            HitTarget::Backdrop
        } else {
            HitTarget::Outside
        }
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}
