//! Configuration threaded through every arrangement pass.

#[cfg(not(feature = "std"))]
use num_traits::Float;

use crate::error::LayoutError;
use crate::geometry::Rect;

/// Gap between consecutive stack cells when a stack has no explicit spacing.
pub const DEFAULT_SPACING: f64 = 6.0;

/// Deepest container nesting an arrangement pass will follow.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Layout settings shared by a whole tree.
///
/// There is no global state: everything an arrangement pass depends on
/// beyond the tree itself lives here.
///
/// ```
/// use boxlayout::LayoutContext;
///
/// let ctx = LayoutContext::default()
///     .with_spacing(4.0)
///     .with_pixel_scale(2.0);
/// assert_eq!(ctx.default_spacing, 4.0);
/// assert_eq!(ctx.max_depth, 64);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutContext {
    /// Spacing used by stacks that don't set their own.
    pub default_spacing: f64,
    /// Recursion limit for nested containers.
    pub max_depth: usize,
    /// Re-offer slack refused by a cell clamped at its `max_size` to the
    /// other expanding (or shrinking) cells. Off by default: the refused
    /// slack is left empty.
    pub redistribute_clamped_slack: bool,
    /// Device pixels per layout unit. When set, every assigned rect is
    /// rounded to the device-pixel grid.
    pub pixel_scale: Option<f64>,
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self {
            default_spacing: DEFAULT_SPACING,
            max_depth: DEFAULT_MAX_DEPTH,
            redistribute_clamped_slack: false,
            pixel_scale: None,
        }
    }
}

impl LayoutContext {
    /// Set the default stack spacing.
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.default_spacing = spacing;
        self
    }

    /// Set the nesting limit.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Enable or disable slack redistribution past clamped cells.
    pub fn with_redistribution(mut self, enabled: bool) -> Self {
        self.redistribute_clamped_slack = enabled;
        self
    }

    /// Snap assigned rects to a device-pixel grid of `scale` pixels per unit.
    /// Non-positive or non-finite scales disable snapping.
    pub fn with_pixel_scale(mut self, scale: f64) -> Self {
        self.pixel_scale = (scale.is_finite() && scale > 0.0).then_some(scale);
        self
    }

    /// Round `rect`'s edges to the pixel grid, if one is configured.
    ///
    /// Edges are snapped rather than origin and size separately, so adjacent
    /// rects that share an edge still share it afterwards.
    pub fn snap(&self, rect: Rect) -> Rect {
        let Some(scale) = self.pixel_scale else {
            return rect;
        };
        let round = |v: f64| (v * scale).round() / scale;
        let x = round(rect.x);
        let y = round(rect.y);
        Rect::new(x, y, round(rect.max_x()) - x, round(rect.max_y()) - y)
    }

    /// Fail when `depth` is past the nesting limit.
    pub(crate) fn check_depth(&self, depth: usize, container: &str) -> Result<(), LayoutError> {
        if depth > self.max_depth {
            tracing::error!(
                container,
                depth,
                limit = self.max_depth,
                "container nesting too deep, arrangement aborted"
            );
            return Err(LayoutError::DepthExceeded {
                limit: self.max_depth,
            });
        }
        Ok(())
    }
}
