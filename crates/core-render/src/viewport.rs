//! Horizontal viewport: how many columns a session may paint, and the width
//! of the sliding window over the buffer when one is configured.
//!
//! The composer and the renderer both derive their width from the same
//! `Viewport`, so the region blanked before a repaint is exactly the region
//! the composed text may occupy.

use core_config::ReadOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Columns from the anchor to the right edge, after any configured cap.
    pub available: usize,
    /// Width of the window re-centered on the cursor, if windowing is active.
    pub window: Option<usize>,
}

impl Viewport {
    pub fn new(available: usize, window: Option<usize>) -> Self {
        Self { available, window }
    }

    /// Resolve from terminal geometry and the display-length settings.
    ///
    /// `max_display = Some(m)` yields a window of `m` columns, or of
    /// `base - m` columns when `subtract` is set. Windowing is only active
    /// for a non-zero window.
    pub fn resolve(
        term_cols: u16,
        anchor_col: u16,
        max_display: Option<usize>,
        subtract: bool,
    ) -> Self {
        let base = usize::from(term_cols.saturating_sub(anchor_col));
        match max_display {
            None => Self::new(base, None),
            Some(m) => {
                let w = if subtract { base.saturating_sub(m) } else { m };
                Self::new(base.min(w), (w > 0).then_some(w))
            }
        }
    }

    pub fn for_options(term_cols: u16, anchor_col: u16, opts: &ReadOptions) -> Self {
        Self::resolve(
            term_cols,
            anchor_col,
            opts.max_display_length,
            opts.subtract_from_available_space,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_uses_remaining_columns() {
        let vp = Viewport::resolve(80, 10, None, false);
        assert_eq!(vp, Viewport::new(70, None));
    }

    #[test]
    fn cap_mode_limits_available_and_sets_window() {
        assert_eq!(Viewport::resolve(80, 0, Some(20), false), Viewport::new(20, Some(20)));
        // cap wider than the terminal: window stays, available is the terminal
        assert_eq!(Viewport::resolve(30, 0, Some(50), false), Viewport::new(30, Some(50)));
    }

    #[test]
    fn subtract_mode_reserves_trailing_columns() {
        assert_eq!(Viewport::resolve(80, 10, Some(20), true), Viewport::new(50, Some(50)));
        assert_eq!(Viewport::resolve(20, 0, Some(40), true), Viewport::new(0, None));
    }

    #[test]
    fn anchor_past_edge_leaves_nothing() {
        assert_eq!(Viewport::resolve(10, 12, None, false).available, 0);
    }
}
