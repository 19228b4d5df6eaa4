//! Placing content of a given size inside a frame.
//!
//! [`Rect::align`] is the primitive every container uses: size the content
//! according to the expand/shrink/scale flags, then position it on each
//! axis according to the positional flags.
//!
//! ```
//! use boxlayout::{Alignment, Rect, Size};
//!
//! let frame = Rect::new(0.0, 0.0, 100.0, 100.0);
//! let placed = frame.align(Size::new(20.0, 20.0), Alignment::CENTER, Size::ZERO, Size::ZERO);
//! assert_eq!(placed, Rect::new(40.0, 40.0, 20.0, 20.0));
//! ```

use crate::alignment::Alignment;
use crate::geometry::{Pos, Rect, Size};

/// Where content sits along one axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Anchor {
    Leading,
    Middle,
    Trailing,
}

impl Anchor {
    /// No positional flag on an axis centers, same as the middle flag.
    fn of(alignment: Alignment, vertical: bool) -> Self {
        if alignment.contains(Alignment::leading(vertical)) {
            Anchor::Leading
        } else if alignment.contains(Alignment::trailing(vertical)) {
            Anchor::Trailing
        } else {
            Anchor::Middle
        }
    }
}

impl Rect {
    /// Rectangle at which content of `size` should be drawn inside `self`.
    ///
    /// `margin` insets the frame on the anchored side (both sides when
    /// centered), or shifts the content when [`Alignment::MARGIN_IS_OFFSET`]
    /// is set. A zero component of `max_size` means that axis is unbounded.
    ///
    /// Sizing, in order:
    /// - [`SCALE_TO_FIT_PROPORTIONALLY`](Alignment::SCALE_TO_FIT_PROPORTIONALLY)
    ///   scales uniformly to fit the usable frame, centered. Nothing else applies.
    /// - Both expand flags: fill the frame with [`NON_PROP`](Alignment::NON_PROP),
    ///   otherwise grow uniformly until one axis fills it.
    /// - A single expand flag fills its axis only with `NON_PROP`.
    /// - Both shrink flags (without `NON_PROP`): shrink uniformly so both axes
    ///   fit, or only until one axis fits when both out flags are set.
    ///   Otherwise each shrink flag clamps its axis to the frame.
    /// - `max_size` caps each axis.
    ///
    /// This is a pure function. Degenerate input (zero frame, zero content)
    /// produces zero-size results, never NaN. A zero content axis takes no
    /// part in uniform scaling; the other axis decides the factor.
    ///
    /// A negative or non-finite `size` is a caller bug: it is logged at
    /// error level and placed as an empty size.
    pub fn align(&self, size: Size, alignment: Alignment, margin: Size, max_size: Size) -> Rect {
        let size = if size.is_valid() {
            size
        } else {
            tracing::error!(?size, %alignment, "invalid content size, aligning an empty size instead");
            Size::ZERO
        };
        let frame = Size::new(
            usable_extent(self.width, margin.width, alignment, false),
            usable_extent(self.height, margin.height, alignment, true),
        );

        if alignment.contains(Alignment::SCALE_TO_FIT_PROPORTIONALLY) {
            let scale = uniform_scale(frame, size, f64::min);
            return Rect::from_pos_size(Pos::ZERO, size * scale).centered(self.center());
        }

        let content = fit_content(size, frame, alignment);
        let content = Size::new(
            cap(content.width, max_size.width),
            cap(content.height, max_size.height),
        );

        let x = position(self.x, self.width, frame.width, content.width, margin.width, alignment, false);
        let y = position(self.y, self.height, frame.height, content.height, margin.height, alignment, true);
        Rect::from_pos_size(Pos::new(x, y), content)
    }
}

/// Frame extent left for content on one axis after the margin.
fn usable_extent(extent: f64, margin: f64, alignment: Alignment, vertical: bool) -> f64 {
    if alignment.contains(Alignment::MARGIN_IS_OFFSET) {
        return extent.max(0.0);
    }
    let sides = if Anchor::of(alignment, vertical) == Anchor::Middle {
        2.0
    } else {
        1.0
    };
    (extent - margin * sides).max(0.0)
}

/// `frame / content` on one axis. `None` when the content is empty, since
/// any factor leaves it empty.
fn ratio(frame: f64, content: f64) -> Option<f64> {
    if content <= 0.0 {
        None
    } else if frame <= 0.0 {
        Some(0.0)
    } else {
        Some(frame / content)
    }
}

/// Combine the per-axis ratios with `pick`, ignoring empty axes. 0 when
/// both axes are empty.
fn uniform_scale(frame: Size, content: Size, pick: fn(f64, f64) -> f64) -> f64 {
    match (ratio(frame.width, content.width), ratio(frame.height, content.height)) {
        (Some(sx), Some(sy)) => pick(sx, sy),
        (Some(s), None) | (None, Some(s)) => s,
        (None, None) => 0.0,
    }
}

fn cap(extent: f64, max: f64) -> f64 {
    if max > 0.0 { extent.min(max) } else { extent }
}

/// Apply the expand and shrink flags to `size` against the usable frame.
fn fit_content(size: Size, frame: Size, alignment: Alignment) -> Size {
    let non_prop = alignment.contains(Alignment::NON_PROP);
    let mut content = size;

    if alignment.contains(Alignment::EXPAND) {
        if non_prop {
            content = frame;
        } else {
            let scale = uniform_scale(frame, size, f64::min);
            if scale > 1.0 {
                content = size * scale;
            }
        }
    } else if non_prop {
        if alignment.contains(Alignment::HOR_EXPAND) && content.width < frame.width {
            content.width = frame.width;
        }
        if alignment.contains(Alignment::VERT_EXPAND) && content.height < frame.height {
            content.height = frame.height;
        }
    }

    if alignment.contains(Alignment::SHRINK) && !non_prop {
        let overflows = content.width > frame.width || content.height > frame.height;
        if overflows {
            let scale = if alignment.contains(Alignment::OUT) {
                uniform_scale(frame, content, f64::max).min(1.0)
            } else {
                uniform_scale(frame, content, f64::min)
            };
            return content * scale;
        }
        return content;
    }

    if alignment.contains(Alignment::HOR_SHRINK) && content.width > frame.width {
        content.width = frame.width;
    }
    if alignment.contains(Alignment::VERT_SHRINK) && content.height > frame.height {
        content.height = frame.height;
    }
    content
}

/// Leading coordinate of the content on one axis.
fn position(
    start: f64,
    extent: f64,
    usable: f64,
    content: f64,
    margin: f64,
    alignment: Alignment,
    vertical: bool,
) -> f64 {
    let anchor = Anchor::of(alignment, vertical);
    if alignment.contains(Alignment::out_on(vertical)) {
        return match anchor {
            Anchor::Leading => start - margin - content,
            Anchor::Middle => start + (extent - content) / 2.0,
            Anchor::Trailing => start + extent + margin,
        };
    }
    match anchor {
        Anchor::Leading => start + margin,
        Anchor::Middle => start + margin + (usable - content) / 2.0,
        Anchor::Trailing => start + extent - content - margin,
    }
}
