//! Container cells: one per child, holding how the child is placed.
//!
//! Cells are created from a [`CellSpec`] builder and addressed afterwards by
//! the [`CellId`] handle returned when they are added. Handles stay valid
//! across insertions, removals and re-sorting of other cells.

use core::fmt;

#[cfg(not(feature = "std"))]
use alloc::boxed::Box;

use crate::alignment::Alignment;
use crate::container::Placeable;
use crate::geometry::Size;

/// Stable handle to a cell within its container.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub(crate) u32);

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cell #{}", self.0)
    }
}

/// One child of a container plus its placement settings.
pub struct Cell {
    id: CellId,
    view: Box<dyn Placeable>,
    /// How the child is positioned and sized. Must name both axes unless
    /// the cell is collapsed.
    pub alignment: Alignment,
    /// Inward padding per axis, or an offset with
    /// [`Alignment::MARGIN_IS_OFFSET`].
    pub margin: Size,
    /// Lower bound when a stack shrinks this cell along its main axis.
    pub min_size: Size,
    /// Per-axis ceiling; 0 means unbounded.
    pub max_size: Size,
    /// Relative share of stack slack. Non-positive weights count as 1.
    pub weight: f64,
    /// Skipped by layout entirely, but kept for later restoration.
    pub collapsed: bool,
    /// Placed against the whole container rect instead of in the flow.
    pub free: bool,
}

impl Cell {
    pub(crate) fn from_spec(id: CellId, spec: CellSpec) -> Self {
        Self {
            id,
            view: spec.view,
            alignment: spec.alignment,
            margin: spec.margin,
            min_size: spec.min_size,
            max_size: spec.max_size,
            weight: spec.weight,
            collapsed: spec.collapsed,
            free: spec.free,
        }
    }

    pub fn id(&self) -> CellId {
        self.id
    }

    pub fn view(&self) -> &dyn Placeable {
        self.view.as_ref()
    }

    pub fn view_mut(&mut self) -> &mut (dyn Placeable + 'static) {
        self.view.as_mut()
    }

    pub(crate) fn replace_view(&mut self, view: Box<dyn Placeable>) -> Box<dyn Placeable> {
        core::mem::replace(&mut self.view, view)
    }

    pub(crate) fn into_view(self) -> Box<dyn Placeable> {
        self.view
    }

    /// The child's name.
    pub fn name(&self) -> &str {
        self.view.name()
    }

    /// Whether the cell takes part in linear flow (not collapsed, not free).
    pub fn is_flowed(&self) -> bool {
        !self.collapsed && !self.free
    }

    /// Room the margin takes along one axis: nothing for an offset margin,
    /// both sides when centered on that axis, one side otherwise.
    pub fn margin_span(&self, vertical: bool) -> f64 {
        if self.alignment.contains(Alignment::MARGIN_IS_OFFSET) {
            return 0.0;
        }
        let m = self.margin.along(vertical);
        let centered = !self.alignment.contains(Alignment::leading(vertical))
            && !self.alignment.contains(Alignment::trailing(vertical));
        if centered { m * 2.0 } else { m }
    }

    /// Space offered to the child when asking for its natural size inside
    /// `total`.
    pub fn available_in(&self, total: Size) -> Size {
        Size::new(
            total.width - self.margin_span(false),
            total.height - self.margin_span(true),
        )
        .non_negative()
    }

    pub(crate) fn weight_or_default(&self) -> f64 {
        if self.weight.is_finite() && self.weight > 0.0 {
            self.weight
        } else {
            1.0
        }
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cell")
            .field("id", &self.id)
            .field("name", &self.name())
            .field("alignment", &self.alignment)
            .field("margin", &self.margin)
            .field("min_size", &self.min_size)
            .field("max_size", &self.max_size)
            .field("weight", &self.weight)
            .field("collapsed", &self.collapsed)
            .field("free", &self.free)
            .finish_non_exhaustive()
    }
}

/// Builder for a new cell.
///
/// ```
/// use boxlayout::{Alignment, CellSpec, ContainerView, FixedView, Size};
///
/// let mut row = ContainerView::new("row");
/// let id = row.add_cell(
///     CellSpec::new(FixedView::new("icon", Size::new(16.0, 16.0)), Alignment::CENTER_LEFT)
///         .margin(Size::new(4.0, 0.0))
///         .max_size(Size::new(32.0, 0.0)),
/// );
/// assert_eq!(row.cell(id).unwrap().margin, Size::new(4.0, 0.0));
/// ```
pub struct CellSpec {
    view: Box<dyn Placeable>,
    alignment: Alignment,
    margin: Size,
    min_size: Size,
    max_size: Size,
    weight: f64,
    collapsed: bool,
    free: bool,
    pub(crate) index: Option<usize>,
}

impl CellSpec {
    pub fn new(view: impl Placeable + 'static, alignment: Alignment) -> Self {
        Self::boxed(Box::new(view), alignment)
    }

    /// Like [`new`](Self::new) for an already boxed child.
    pub fn boxed(view: Box<dyn Placeable>, alignment: Alignment) -> Self {
        Self {
            view,
            alignment,
            margin: Size::ZERO,
            min_size: Size::ZERO,
            max_size: Size::ZERO,
            weight: 1.0,
            collapsed: false,
            free: false,
            index: None,
        }
    }

    pub fn margin(mut self, margin: Size) -> Self {
        self.margin = margin;
        self
    }

    pub fn min_size(mut self, min_size: Size) -> Self {
        self.min_size = min_size;
        self
    }

    /// Per-axis ceiling; leave an axis at 0 for no limit.
    pub fn max_size(mut self, max_size: Size) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Take the cell out of linear flow.
    pub fn free(mut self) -> Self {
        self.free = true;
        self
    }

    /// Add the cell already collapsed.
    pub fn collapsed(mut self) -> Self {
        self.collapsed = true;
        self
    }

    /// Insert at `index` instead of appending. Indices past the end append.
    pub fn at_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }
}

impl fmt::Debug for CellSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellSpec")
            .field("name", &self.view.name())
            .field("alignment", &self.alignment)
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}
