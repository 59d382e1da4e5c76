//! Dismiss region for the summary modal.
//!
//! While the modal is shown a region is registered that resolves clicks
//! against the rectangles the modal was last drawn in.

use ratatui::layout::{Position, Rect};

/// Which part of the modal a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The overlay around the content
    Backdrop,
    /// The inner content area
    Content,
    /// The close control drawn on the content border
    CloseControl,
    /// Not on the modal at all, or the modal has not been drawn yet
    Outside,
}

/// Placement of the modal in the last rendered frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalBounds {
    pub backdrop: Rect,
    pub content: Rect,
    pub close: Rect,
}

#[derive(Debug, Clone, Default)]
pub struct DismissRegion {
    bounds: Option<ModalBounds>,
}

impl DismissRegion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record where the modal was drawn
    pub fn place(&mut self, bounds: ModalBounds) {
        self.bounds = Some(bounds);
    }

    pub fn bounds(&self) -> Option<ModalBounds> {
        self.bounds
    }

    /// Resolve the target of a click at `column`, `row`
    pub fn target(&self, column: u16, row: u16) -> ClickTarget {
        let Some(bounds) = self.bounds else {
            return ClickTarget::Outside;
        };
        let position = Position::new(column, row);

        // The close control sits on the content border, so test it first.
        if bounds.close.contains(position) {
            ClickTarget::CloseControl
        } else if bounds.content.contains(position) {
            ClickTarget::Content
        } else if bounds.backdrop.contains(position) {
            ClickTarget::Backdrop
        } else {
            ClickTarget::Outside
        }
    }

    /// True when a click at `column`, `row` should hide the modal
    pub fn dismisses(&self, column: u16, row: u16) -> bool {
        matches!(
            self.target(column, row),
            ClickTarget::Backdrop | ClickTarget::CloseControl
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region() -> DismissRegion {
        let mut region = DismissRegion::new();
        region.place(ModalBounds {
            backdrop: Rect::new(0, 0, 80, 24),
            content: Rect::new(20, 6, 40, 12),
            close: Rect::new(55, 6, 3, 1),
        });
        region
    }

    #[test]
    fn unplaced_region_resolves_everything_outside() {
        let region = DismissRegion::new();
        assert_eq!(region.target(0, 0), ClickTarget::Outside);
        assert!(!region.dismisses(0, 0));
    }

    #[test]
    fn backdrop_click_dismisses() {
        let region = region();
        assert_eq!(region.target(2, 2), ClickTarget::Backdrop);
        assert!(region.dismisses(2, 2));
        // Just past the right edge of the content
        assert_eq!(region.target(60, 10), ClickTarget::Backdrop);
    }

    #[test]
    fn content_click_does_not_dismiss() {
        let region = region();
        assert_eq!(region.target(20, 6), ClickTarget::Content);
        assert_eq!(region.target(59, 17), ClickTarget::Content);
        assert!(!region.dismisses(30, 10));
    }

    #[test]
    fn close_control_takes_precedence_over_content() {
        let region = region();
        assert_eq!(region.target(56, 6), ClickTarget::CloseControl);
        assert!(region.dismisses(56, 6));
    }

    #[test]
    fn click_beyond_backdrop_is_outside() {
        let region = region();
        assert_eq!(region.target(100, 30), ClickTarget::Outside);
        assert!(!region.dismisses(100, 30));
    }
}
