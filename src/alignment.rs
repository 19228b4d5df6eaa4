//! Alignment flags: position, sizing policy and margin interpretation.
//!
//! An [`Alignment`] combines flags over two orthogonal axes plus policy
//! bits. Every placement decomposes independently per axis, so a cell's
//! alignment must carry at least one horizontal and one vertical flag
//! (see [`Alignment::has_both_axes`]).
//!
//! ```text
//!     TOP_LEFT      TOP_CENTER      TOP_RIGHT
//!          ┌─────────────┬─────────────┐
//!          │             │             │
//!   CENTER_LEFT ───── CENTER ───── CENTER_RIGHT
//!          │             │             │
//!          └─────────────┴─────────────┘
//!   BOTTOM_LEFT    BOTTOM_CENTER    BOTTOM_RIGHT
//! ```
//!
//! # String form
//!
//! Alignments encode losslessly as sorted, `|`-joined lowercase flag names:
//!
//! ```
//! use boxlayout::Alignment;
//!
//! let a = Alignment::LEFT | Alignment::VERT_CENTER | Alignment::HOR_EXPAND;
//! assert_eq!(a.to_string(), "horexpand|left|vertcenter");
//! assert_eq!("horexpand|left|vertcenter".parse::<Alignment>().unwrap(), a);
//! ```

use core::fmt;
use core::str::FromStr;

use alloc::string::ToString;
use bitflags::bitflags;
#[cfg(not(feature = "std"))]
use num_traits::Float;

use crate::error::ParseAlignmentError;
use crate::geometry::Pos;

bitflags! {
    /// Positional, sizing and policy flags for placing content in a frame.
    ///
    /// Positional flags are mutually exclusive per axis; both axes may be
    /// set at once. Composite constants are plain unions with no extra
    /// meaning.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Alignment: u32 {
        /// Anchor to the left edge.
        const LEFT                        = 1;
        /// Center horizontally.
        const HOR_CENTER                  = 1 << 1;
        /// Anchor to the right edge.
        const RIGHT                       = 1 << 2;
        /// Anchor to the top edge.
        const TOP                         = 1 << 3;
        /// Center vertically.
        const VERT_CENTER                 = 1 << 4;
        /// Anchor to the bottom edge.
        const BOTTOM                      = 1 << 5;
        /// Consume horizontal slack.
        const HOR_EXPAND                  = 1 << 6;
        /// Consume vertical slack.
        const VERT_EXPAND                 = 1 << 7;
        /// May be compressed horizontally.
        const HOR_SHRINK                  = 1 << 8;
        /// May be compressed vertically.
        const VERT_SHRINK                 = 1 << 9;
        /// Place outside the frame, beyond the horizontal anchor.
        const HOR_OUT                     = 1 << 10;
        /// Place outside the frame, beyond the vertical anchor.
        const VERT_OUT                    = 1 << 11;
        /// Ignore aspect-preserving constraints when expanding or shrinking.
        const NON_PROP                    = 1 << 12;
        /// Reserved.
        const HOR_JUSTIFY                 = 1 << 13;
        /// Treat the margin as an offset rather than an inward inset.
        const MARGIN_IS_OFFSET            = 1 << 14;
        /// Scale uniformly to fit the frame, centered.
        const SCALE_TO_FIT_PROPORTIONALLY = 1 << 15;

        const CENTER = Self::HOR_CENTER.bits() | Self::VERT_CENTER.bits();
        const EXPAND = Self::HOR_EXPAND.bits() | Self::VERT_EXPAND.bits();
        const SHRINK = Self::HOR_SHRINK.bits() | Self::VERT_SHRINK.bits();
        const OUT = Self::HOR_OUT.bits() | Self::VERT_OUT.bits();
        const HOR_SCALE = Self::HOR_EXPAND.bits() | Self::HOR_SHRINK.bits();
        const VERT_SCALE = Self::VERT_EXPAND.bits() | Self::VERT_SHRINK.bits();
        const SCALE = Self::HOR_SCALE.bits() | Self::VERT_SCALE.bits();

        const TOP_LEFT = Self::TOP.bits() | Self::LEFT.bits();
        const TOP_CENTER = Self::TOP.bits() | Self::HOR_CENTER.bits();
        const TOP_RIGHT = Self::TOP.bits() | Self::RIGHT.bits();
        const CENTER_LEFT = Self::VERT_CENTER.bits() | Self::LEFT.bits();
        const CENTER_RIGHT = Self::VERT_CENTER.bits() | Self::RIGHT.bits();
        const BOTTOM_LEFT = Self::BOTTOM.bits() | Self::LEFT.bits();
        const BOTTOM_CENTER = Self::BOTTOM.bits() | Self::HOR_CENTER.bits();
        const BOTTOM_RIGHT = Self::BOTTOM.bits() | Self::RIGHT.bits();

        /// Every flag that says something about the horizontal axis.
        const HORIZONTAL = Self::LEFT.bits()
            | Self::HOR_CENTER.bits()
            | Self::RIGHT.bits()
            | Self::HOR_EXPAND.bits()
            | Self::HOR_SHRINK.bits()
            | Self::HOR_OUT.bits();
        /// Every flag that says something about the vertical axis.
        const VERTICAL = Self::TOP.bits()
            | Self::VERT_CENTER.bits()
            | Self::BOTTOM.bits()
            | Self::VERT_EXPAND.bits()
            | Self::VERT_SHRINK.bits()
            | Self::VERT_OUT.bits();
    }
}

/// Single-flag names, sorted by name. Drives both `Display` and `FromStr`.
const FLAG_NAMES: &[(&str, Alignment)] = &[
    ("bottom", Alignment::BOTTOM),
    ("horcenter", Alignment::HOR_CENTER),
    ("horexpand", Alignment::HOR_EXPAND),
    ("horjustify", Alignment::HOR_JUSTIFY),
    ("horout", Alignment::HOR_OUT),
    ("horshrink", Alignment::HOR_SHRINK),
    ("left", Alignment::LEFT),
    ("marginisoffset", Alignment::MARGIN_IS_OFFSET),
    ("nonprop", Alignment::NON_PROP),
    ("right", Alignment::RIGHT),
    ("scaletofitproportionally", Alignment::SCALE_TO_FIT_PROPORTIONALLY),
    ("top", Alignment::TOP),
    ("vertcenter", Alignment::VERT_CENTER),
    ("vertexpand", Alignment::VERT_EXPAND),
    ("vertout", Alignment::VERT_OUT),
    ("vertshrink", Alignment::VERT_SHRINK),
];

/// Composite names accepted when parsing. Never produced by `Display`.
const COMPOSITE_NAMES: &[(&str, Alignment)] = &[
    ("center", Alignment::CENTER),
    ("expand", Alignment::EXPAND),
    ("horscale", Alignment::HOR_SCALE),
    ("out", Alignment::OUT),
    ("scale", Alignment::SCALE),
    ("shrink", Alignment::SHRINK),
    ("vertscale", Alignment::VERT_SCALE),
];

impl Alignment {
    /// Whether at least one horizontal and one vertical flag is set.
    ///
    /// Cells violating this cannot be placed; arranging a container that
    /// holds one fails with [`LayoutError::MissingAxis`](crate::LayoutError::MissingAxis).
    pub fn has_both_axes(self) -> bool {
        self.intersects(Self::HORIZONTAL) && self.intersects(Self::VERTICAL)
    }

    /// Swap `LEFT` and `RIGHT`, preserving every other flag.
    pub fn flipped_horizontal(self) -> Self {
        let mut r = self - (Self::LEFT | Self::RIGHT);
        r.set(Self::RIGHT, self.contains(Self::LEFT));
        r.set(Self::LEFT, self.contains(Self::RIGHT));
        r
    }

    /// Swap `TOP` and `BOTTOM`, preserving every other flag.
    pub fn flipped_vertical(self) -> Self {
        let mut r = self - (Self::TOP | Self::BOTTOM);
        r.set(Self::BOTTOM, self.contains(Self::TOP));
        r.set(Self::TOP, self.contains(Self::BOTTOM));
        r
    }

    /// Keep only the flags of one axis (plus axis-less policy bits).
    ///
    /// `only(true)` drops every horizontal flag; `only(false)` drops every
    /// vertical flag.
    pub fn only(self, vertical: bool) -> Self {
        if vertical {
            self - Self::HORIZONTAL
        } else {
            self - Self::VERTICAL
        }
    }

    /// The leading-edge anchor along an axis: `TOP` or `LEFT`.
    pub const fn leading(vertical: bool) -> Self {
        if vertical { Self::TOP } else { Self::LEFT }
    }

    /// The trailing-edge anchor along an axis: `BOTTOM` or `RIGHT`.
    pub const fn trailing(vertical: bool) -> Self {
        if vertical { Self::BOTTOM } else { Self::RIGHT }
    }

    /// The centering flag along an axis.
    pub const fn middle(vertical: bool) -> Self {
        if vertical {
            Self::VERT_CENTER
        } else {
            Self::HOR_CENTER
        }
    }

    /// The expand flag along an axis.
    pub const fn expand_on(vertical: bool) -> Self {
        if vertical {
            Self::VERT_EXPAND
        } else {
            Self::HOR_EXPAND
        }
    }

    /// The shrink flag along an axis.
    pub const fn shrink_on(vertical: bool) -> Self {
        if vertical {
            Self::VERT_SHRINK
        } else {
            Self::HOR_SHRINK
        }
    }

    /// The out flag along an axis.
    pub const fn out_on(vertical: bool) -> Self {
        if vertical { Self::VERT_OUT } else { Self::HOR_OUT }
    }

    /// Compass alignment pointed at by a direction vector.
    ///
    /// The vector uses the mathematical orientation (0° points right, angles
    /// grow counter-clockwise, so `(0, 1)` maps to `TOP`). Each of the eight
    /// compass directions owns a 45° sector. A zero vector has no direction
    /// and gives the empty set.
    pub fn from_vector(vector: Pos) -> Self {
        if vector.x == 0.0 && vector.y == 0.0 {
            return Self::empty();
        }
        let mut angle = vector.y.atan2(vector.x).to_degrees();
        if angle < 0.0 {
            angle += 360.0;
        }
        const SECTORS: [Alignment; 8] = [
            Alignment::RIGHT,
            Alignment::TOP_RIGHT,
            Alignment::TOP,
            Alignment::TOP_LEFT,
            Alignment::LEFT,
            Alignment::BOTTOM_LEFT,
            Alignment::BOTTOM,
            Alignment::BOTTOM_RIGHT,
        ];
        let sector = ((angle + 22.5) / 45.0) as usize % 8;
        SECTORS[sector]
    }
}

impl fmt::Display for Alignment {
    /// Sorted, `|`-joined flag names; `none` for the empty set.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, flag) in FLAG_NAMES {
            if self.contains(*flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        if first {
            f.write_str("none")?;
        }
        Ok(())
    }
}

impl FromStr for Alignment {
    type Err = ParseAlignmentError;

    /// Parse flag names separated by `|` or whitespace.
    ///
    /// Names are case-insensitive; composite names (`center`, `expand`, ...)
    /// and `none` are accepted. Unknown names are an error rather than being
    /// skipped, so a typo cannot silently drop a flag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut alignment = Self::empty();
        for token in s.split(|c: char| c == '|' || c.is_whitespace()) {
            if token.is_empty() || token.eq_ignore_ascii_case("none") {
                continue;
            }
            let flag = FLAG_NAMES
                .iter()
                .chain(COMPOSITE_NAMES)
                .find(|(name, _)| name.eq_ignore_ascii_case(token))
                .map(|(_, flag)| *flag)
                .ok_or_else(|| ParseAlignmentError {
                    token: token.to_string(),
                })?;
            alignment |= flag;
        }
        Ok(alignment)
    }
}
