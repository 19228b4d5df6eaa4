//! Plain 2D value types: positions, sizes, rectangles and insets.
//!
//! All coordinates are `f64` in a y-down space. These types have no
//! lifecycle; they are copied by value everywhere.
//!
//! # Example
//!
//! ```
//! use boxlayout::{Insets, Pos, Rect, Size};
//!
//! let frame = Rect::new(0.0, 0.0, 300.0, 200.0);
//! let content = frame.inset(Insets::uniform(10.0));
//!
//! assert_eq!(content, Rect::new(10.0, 10.0, 280.0, 180.0));
//! assert_eq!(content.center(), Pos::new(150.0, 100.0));
//! assert_eq!(content.size(), Size::new(280.0, 180.0));
//! ```

use core::fmt;
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// A point.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Pos {
    pub x: f64,
    pub y: f64,
}

impl Pos {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new position.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component along the main axis: `y` when `vertical`, else `x`.
    pub fn along(self, vertical: bool) -> f64 {
        if vertical { self.y } else { self.x }
    }

    /// Mutable component along the main axis.
    pub fn along_mut(&mut self, vertical: bool) -> &mut f64 {
        if vertical { &mut self.y } else { &mut self.x }
    }

    /// Reinterpret as a size.
    pub fn to_size(self) -> Size {
        Size::new(self.x, self.y)
    }

    /// Component-wise minimum.
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum.
    pub fn max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }
}

impl Add for Pos {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Pos {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Pos {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Pos {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Pos {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

/// Width × height.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Zero width and height.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Component along the main axis: `height` when `vertical`, else `width`.
    pub fn along(self, vertical: bool) -> f64 {
        if vertical { self.height } else { self.width }
    }

    /// Mutable component along the main axis.
    pub fn along_mut(&mut self, vertical: bool) -> &mut f64 {
        if vertical {
            &mut self.height
        } else {
            &mut self.width
        }
    }

    /// Reinterpret as a position.
    pub fn to_pos(self) -> Pos {
        Pos::new(self.width, self.height)
    }

    /// Whether either dimension is zero or negative.
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Whether both dimensions are finite and non-negative.
    ///
    /// Sizes that fail this check are contract violations when reported by
    /// a child as its natural size.
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }

    /// Clamp both dimensions to at least zero.
    pub fn non_negative(self) -> Self {
        Self::new(self.width.max(0.0), self.height.max(0.0))
    }

    /// Grow each dimension to at least `other`'s.
    pub fn maximize(&mut self, other: Self) {
        self.width = self.width.max(other.width);
        self.height = self.height.max(other.height);
    }

    /// Like [`maximize`](Self::maximize), but zero components of `other` are ignored.
    pub fn maximize_non_zero(&mut self, other: Self) {
        if other.width != 0.0 {
            self.width = self.width.max(other.width);
        }
        if other.height != 0.0 {
            self.height = self.height.max(other.height);
        }
    }

    /// Shrink each dimension to at most `other`'s.
    pub fn minimize(&mut self, other: Self) {
        self.width = self.width.min(other.width);
        self.height = self.height.min(other.height);
    }
}

/// Formats as `WxH`.
impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl Add for Size {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.width + rhs.width, self.height + rhs.height)
    }
}

impl AddAssign for Size {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Size {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.width - rhs.width, self.height - rhs.height)
    }
}

impl SubAssign for Size {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<f64> for Size {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.width * rhs, self.height * rhs)
    }
}

impl Div<f64> for Size {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self::new(self.width / rhs, self.height / rhs)
    }
}

/// Axis-aligned rectangle: origin plus size.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// The null rect: zero origin, zero size.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a new rect.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create from an origin and a size.
    pub const fn from_pos_size(pos: Pos, size: Size) -> Self {
        Self::new(pos.x, pos.y, size.width, size.height)
    }

    /// Create from two opposite corners.
    pub fn from_min_max(min: Pos, max: Pos) -> Self {
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    pub fn pos(&self) -> Pos {
        Pos::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Top-left corner.
    pub fn min(&self) -> Pos {
        self.pos()
    }

    /// Bottom-right corner.
    pub fn max(&self) -> Pos {
        Pos::new(self.max_x(), self.max_y())
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Pos {
        Pos::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Whether origin and size are all zero.
    pub fn is_null(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.width == 0.0 && self.height == 0.0
    }

    /// Move the left edge, keeping the right edge fixed.
    pub fn set_min_x(&mut self, x: f64) {
        self.width += self.x - x;
        self.x = x;
    }

    /// Move the top edge, keeping the bottom edge fixed.
    pub fn set_min_y(&mut self, y: f64) {
        self.height += self.y - y;
        self.y = y;
    }

    /// Move the right edge, keeping the left edge fixed.
    pub fn set_max_x(&mut self, x: f64) {
        self.width = x - self.x;
    }

    /// Move the bottom edge, keeping the top edge fixed.
    pub fn set_max_y(&mut self, y: f64) {
        self.height = y - self.y;
    }

    /// Leading edge along the main axis.
    pub fn start(&self, vertical: bool) -> f64 {
        if vertical { self.y } else { self.x }
    }

    /// Trailing edge along the main axis.
    pub fn end(&self, vertical: bool) -> f64 {
        if vertical { self.max_y() } else { self.max_x() }
    }

    /// Extent along the main axis.
    pub fn extent(&self, vertical: bool) -> f64 {
        if vertical { self.height } else { self.width }
    }

    /// Move the leading edge along the main axis, keeping the trailing edge fixed.
    pub fn set_start(&mut self, vertical: bool, value: f64) {
        if vertical {
            self.set_min_y(value);
        } else {
            self.set_min_x(value);
        }
    }

    /// Move the trailing edge along the main axis, keeping the leading edge fixed.
    pub fn set_end(&mut self, vertical: bool, value: f64) {
        if vertical {
            self.set_max_y(value);
        } else {
            self.set_max_x(value);
        }
    }

    /// Grow outward by `by` on every side (shrink for negative values).
    pub fn expanded(&self, by: Size) -> Self {
        Self::from_pos_size(self.pos() - by.to_pos(), self.size() + by * 2.0)
    }

    /// Same size, re-centered on `center`.
    pub fn centered(&self, center: Pos) -> Self {
        Self::from_pos_size(center - self.size().to_pos() / 2.0, self.size())
    }

    /// Offset the origin by `delta`.
    pub fn translated(&self, delta: Pos) -> Self {
        Self::from_pos_size(self.pos() + delta, self.size())
    }

    /// Shrink by `insets`; width and height are clamped to at least zero.
    pub fn inset(&self, insets: Insets) -> Self {
        Self::new(
            self.x + insets.left,
            self.y + insets.top,
            (self.width - insets.left - insets.right).max(0.0),
            (self.height - insets.top - insets.bottom).max(0.0),
        )
    }

    /// Whether the interiors of the two rects intersect.
    pub fn overlaps(&self, other: &Rect) -> bool {
        other.x < self.max_x()
            && other.y < self.max_y()
            && other.max_x() > self.x
            && other.max_y() > self.y
    }

    /// Whether `pos` lies inside or on the border.
    pub fn contains(&self, pos: Pos) -> bool {
        pos.x >= self.x && pos.x <= self.max_x() && pos.y >= self.y && pos.y <= self.max_y()
    }

    /// Smallest rect covering both. A null rect on either side is ignored.
    pub fn union(&self, other: &Rect) -> Self {
        if other.is_null() {
            return *self;
        }
        if self.is_null() {
            return *other;
        }
        Self::from_min_max(self.min().min(other.min()), self.max().max(other.max()))
    }

    /// Overlapping region. Disjoint rects give a zero-size rect at the
    /// clamped corner rather than a negative size.
    pub fn intersected(&self, other: &Rect) -> Self {
        let min = self.min().max(other.min());
        let max = self.max().min(other.max());
        Self::from_pos_size(min, (max - min).to_size().non_negative())
    }

    /// Translate so this rect lies within `bounds` where possible,
    /// favoring the top-left edge when it does not fit.
    pub fn move_into(&self, bounds: &Rect) -> Self {
        let mut r = *self;
        r.x = r.x.max(bounds.x);
        r.y = r.y.max(bounds.y);
        let overflow = r.max().min(bounds.max()) - r.max();
        r.translated(overflow).max_with_origin(bounds.pos())
    }

    fn max_with_origin(mut self, origin: Pos) -> Self {
        self.x = self.x.max(origin.x);
        self.y = self.y.max(origin.y);
        self
    }
}

/// Insets from each edge of a rectangle, CSS order.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Insets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Insets {
    /// No insets.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create insets (CSS order: top, right, bottom, left).
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The same inset on every edge.
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// `size.width` on left and right, `size.height` on top and bottom.
    pub const fn symmetric(size: Size) -> Self {
        Self::new(size.height, size.width, size.height, size.width)
    }

    /// Combined horizontal and vertical insets.
    pub fn total(&self) -> Size {
        Size::new(self.left + self.right, self.top + self.bottom)
    }
}
