//! Pan boundaries for a given scale.
//!
//! Content larger than the container must cover it; content smaller than the
//! container must stay inside it (or sit centered when configured so).

use crate::numeric::clamp;
use crate::points::Dims;

/// Legal offset range on one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    /// Range for scaled content of length `content` inside `container`.
    ///
    /// `slack` widens the range on both ends, for elastic overhang while a
    /// gesture is in progress.
    pub fn new(content: f64, container: f64, slack: f64, center_small: bool) -> Self {
        let free = container - content;
        if free > 0.0 && center_small {
            let centered = free / 2.0;
            return Self {
                min: centered - slack,
                max: centered + slack,
            };
        }

        Self {
            min: free.min(0.0) - slack,
            max: free.max(0.0) + slack,
        }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        clamp(self.min, self.max, value)
    }
}

/// Legal `left`/`top` ranges for content at one scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanBounds {
    pub left: AxisRange,
    pub top: AxisRange,
}

impl PanBounds {
    pub fn new(
        content: &Dims,
        container: &Dims,
        scale: f64,
        slack: f64,
        center_small: bool,
    ) -> Self {
        let scaled = content.scaled(scale);
        Self {
            left: AxisRange::new(scaled.width, container.width, slack, center_small),
            top: AxisRange::new(scaled.height, container.height, slack, center_small),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn larger_content_must_cover_container() {
        let range = AxisRange::new(300.0, 100.0, 0.0, true);
        assert_eq!(range, AxisRange { min: -200.0, max: 0.0 });
        assert_eq!(range.clamp(-500.0), -200.0);
        assert_eq!(range.clamp(40.0), 0.0);
    }

    #[test]
    fn smaller_content_stays_inside_when_not_centered() {
        let range = AxisRange::new(60.0, 100.0, 0.0, false);
        assert_eq!(range, AxisRange { min: 0.0, max: 40.0 });
    }

    #[test]
    fn smaller_content_is_centered_when_configured() {
        let range = AxisRange::new(60.0, 100.0, 0.0, true);
        assert_eq!(range, AxisRange { min: 20.0, max: 20.0 });
        assert_eq!(range.clamp(-7.0), 20.0);
    }

    #[test]
    fn slack_widens_both_ends() {
        let range = AxisRange::new(300.0, 100.0, 25.0, true);
        assert_eq!(range, AxisRange { min: -225.0, max: 25.0 });
        assert_eq!(range.clamp(30.0), 25.0);
    }

    #[test]
    fn exact_fit_has_single_legal_offset() {
        let range = AxisRange::new(100.0, 100.0, 0.0, false);
        assert_eq!(range, AxisRange { min: 0.0, max: 0.0 });
    }

    #[test]
    fn pan_bounds_scale_content_first() {
        let bounds = PanBounds::new(
            &Dims::new(100.0, 50.0),
            &Dims::new(100.0, 100.0),
            2.0,
            0.0,
            true,
        );
        assert_eq!(bounds.left, AxisRange { min: -100.0, max: 0.0 });
        assert_eq!(bounds.top, AxisRange { min: 0.0, max: 0.0 });
    }
}
