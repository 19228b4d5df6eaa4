//! Containers and the placeable capability.
//!
//! A [`Placeable`] is anything a container can size and position. A
//! [`Container`] is a placeable that owns cells and arranges them.
//! [`ContainerView`] is the general container: every cell is aligned
//! independently inside the container's content rect, so cells may overlap.
//! [`StackView`](crate::StackView) builds on it to lay cells out in a line.
//!
//! Child rects are in the parent's local coordinates: a container arranges
//! its children inside `(0, 0, width, height)` of its own rect.
//!
//! ```
//! use boxlayout::{Alignment, Container, ContainerView, FixedView, LayoutContext, Rect, Size};
//!
//! let mut panel = ContainerView::new("panel");
//! let badge = panel.add(FixedView::new("badge", Size::new(10.0, 10.0)), Alignment::TOP_RIGHT);
//! let body = panel.add(FixedView::new("body", Size::ZERO), Alignment::EXPAND | Alignment::NON_PROP | Alignment::CENTER);
//!
//! panel.layout(Rect::new(0.0, 0.0, 100.0, 50.0), &LayoutContext::default()).unwrap();
//! assert_eq!(panel.child(badge).unwrap().rect(), Rect::new(90.0, 0.0, 10.0, 10.0));
//! assert_eq!(panel.child(body).unwrap().rect(), Rect::new(0.0, 0.0, 100.0, 50.0));
//! ```

use core::cmp::Ordering;

#[cfg(not(feature = "std"))]
use alloc::{boxed::Box, string::String, vec::Vec};

use crate::alignment::Alignment;
use crate::cell::{Cell, CellId, CellSpec};
use crate::context::LayoutContext;
use crate::error::LayoutError;
use crate::geometry::{Insets, Pos, Rect, Size};

/// Something a container can measure and position.
pub trait Placeable {
    /// Size this child would like when offered `available`.
    ///
    /// Must be finite and non-negative; anything else aborts the
    /// arrangement of the parent.
    fn natural_size(&self, available: Size, ctx: &LayoutContext) -> Size;

    /// Accept the rect assigned by the parent.
    fn set_rect(&mut self, rect: Rect);

    /// The last rect assigned.
    fn rect(&self) -> Rect;

    fn name(&self) -> &str {
        ""
    }

    /// The container behind this child, if it is one.
    fn as_container(&self) -> Option<&dyn Container> {
        None
    }

    /// Mutable access to the container behind this child, if it is one.
    /// Arrangement recurses through this.
    fn as_container_mut(&mut self) -> Option<&mut dyn Container> {
        None
    }
}

/// A placeable that owns cells and arranges them.
pub trait Container: Placeable {
    /// The cell list and shared container state.
    fn base(&self) -> &ContainerView;

    fn base_mut(&mut self) -> &mut ContainerView;

    /// Place every non-collapsed cell inside the current rect and recurse
    /// into child containers. `depth` is this container's nesting level.
    ///
    /// Contract violations are reported before any child of this container
    /// is moved.
    fn arrange_children(&mut self, ctx: &LayoutContext, depth: usize) -> Result<(), LayoutError>;

    /// Assign `rect` to this container and arrange the whole tree below it.
    ///
    /// The tree is checked for alignment and nesting errors first, so a bad
    /// cell anywhere leaves every child where it was.
    fn layout(&mut self, rect: Rect, ctx: &LayoutContext) -> Result<(), LayoutError> {
        self.base().validate_tree(ctx, 0)?;
        self.set_rect(ctx.snap(rect));
        self.arrange_children(ctx, 0)
    }
}

/// General container: aligns each cell independently in its content rect.
pub struct ContainerView {
    pub(crate) name: String,
    pub(crate) rect: Rect,
    pub(crate) insets: Insets,
    pub(crate) min_size: Size,
    pub(crate) cells: Vec<Cell>,
    next_id: u32,
}

impl ContainerView {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rect: Rect::ZERO,
            insets: Insets::ZERO,
            min_size: Size::ZERO,
            cells: Vec::new(),
            next_id: 0,
        }
    }

    /// Set the inset between the container's rect and its content rect.
    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    /// Set the smallest natural size the container reports.
    pub fn with_min_size(mut self, min_size: Size) -> Self {
        self.min_size = min_size;
        self
    }

    pub fn set_insets(&mut self, insets: Insets) {
        self.insets = insets;
    }

    pub fn insets(&self) -> Insets {
        self.insets
    }

    pub fn set_min_size(&mut self, min_size: Size) {
        self.min_size = min_size;
    }

    pub fn min_size(&self) -> Size {
        self.min_size
    }

    /// Add a cell, returning its handle.
    pub fn add_cell(&mut self, spec: CellSpec) -> CellId {
        let id = CellId(self.next_id);
        self.next_id += 1;
        let index = spec.index.map_or(self.cells.len(), |i| i.min(self.cells.len()));
        self.cells.insert(index, Cell::from_spec(id, spec));
        id
    }

    /// Append `view` with `alignment` and default settings.
    pub fn add(&mut self, view: impl Placeable + 'static, alignment: Alignment) -> CellId {
        self.add_cell(CellSpec::new(view, alignment))
    }

    /// Remove a cell, handing back its child.
    pub fn remove_cell(&mut self, id: CellId) -> Result<Box<dyn Placeable>, LayoutError> {
        let index = self.index_of(id)?;
        Ok(self.cells.remove(index).into_view())
    }

    /// Remove every cell.
    pub fn remove_all(&mut self) {
        self.cells.clear();
    }

    /// Swap the child of a cell, keeping the cell's settings. Returns the
    /// previous child.
    pub fn replace_child(
        &mut self,
        id: CellId,
        view: impl Placeable + 'static,
    ) -> Result<Box<dyn Placeable>, LayoutError> {
        let index = self.index_of(id)?;
        Ok(self.cells[index].replace_view(Box::new(view)))
    }

    /// Collapse or restore a cell. Returns whether the state changed.
    pub fn set_collapsed(&mut self, id: CellId, collapsed: bool) -> Result<bool, LayoutError> {
        let cell = self.cell_mut(id).ok_or(LayoutError::CellNotFound(id))?;
        let changed = cell.collapsed != collapsed;
        cell.collapsed = collapsed;
        Ok(changed)
    }

    pub fn set_alignment(&mut self, id: CellId, alignment: Alignment) -> Result<(), LayoutError> {
        let cell = self.cell_mut(id).ok_or(LayoutError::CellNotFound(id))?;
        cell.alignment = alignment;
        Ok(())
    }

    pub fn set_margin(&mut self, id: CellId, margin: Size) -> Result<(), LayoutError> {
        let cell = self.cell_mut(id).ok_or(LayoutError::CellNotFound(id))?;
        cell.margin = margin;
        Ok(())
    }

    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.iter().find(|c| c.id() == id)
    }

    pub fn cell_mut(&mut self, id: CellId) -> Option<&mut Cell> {
        self.cells.iter_mut().find(|c| c.id() == id)
    }

    /// Cells in layout order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn child(&self, id: CellId) -> Option<&dyn Placeable> {
        self.cell(id).map(Cell::view)
    }

    pub fn child_mut(&mut self, id: CellId) -> Option<&mut (dyn Placeable + 'static)> {
        self.cell_mut(id).map(Cell::view_mut)
    }

    /// Children in layout order, optionally including collapsed ones.
    pub fn children(&self, include_collapsed: bool) -> impl Iterator<Item = &dyn Placeable> {
        self.cells
            .iter()
            .filter(move |c| include_collapsed || !c.collapsed)
            .map(Cell::view)
    }

    /// First cell whose child has `name`.
    pub fn find_cell_by_name(&self, name: &str) -> Option<&Cell> {
        self.cells.iter().find(|c| c.name() == name)
    }

    pub fn contains(&self, id: CellId) -> bool {
        self.cell(id).is_some()
    }

    /// Reorder cells. The sort is stable and handles stay valid.
    pub fn sort_cells_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Cell, &Cell) -> Ordering,
    {
        self.cells.sort_by(compare);
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The container's own rect moved to the origin.
    pub fn local_rect(&self) -> Rect {
        Rect::from_pos_size(Pos::ZERO, self.rect.size())
    }

    /// [`local_rect`](Self::local_rect) reduced by the insets.
    pub fn content_rect(&self) -> Rect {
        self.local_rect().inset(self.insets)
    }

    fn index_of(&self, id: CellId) -> Result<usize, LayoutError> {
        self.cells
            .iter()
            .position(|c| c.id() == id)
            .ok_or(LayoutError::CellNotFound(id))
    }

    /// Every non-collapsed cell must name both axes.
    pub(crate) fn validate(&self) -> Result<(), LayoutError> {
        for cell in self.cells.iter().filter(|c| !c.collapsed) {
            if !cell.alignment.has_both_axes() {
                tracing::error!(
                    container = %self.name,
                    cell = %cell.id(),
                    child = cell.name(),
                    alignment = %cell.alignment,
                    "cell alignment lacks an axis, arrangement aborted"
                );
                return Err(LayoutError::MissingAxis {
                    cell: cell.id(),
                    alignment: cell.alignment,
                });
            }
        }
        Ok(())
    }

    /// [`validate`](Self::validate) this container and every container
    /// below it, enforcing the nesting limit.
    pub(crate) fn validate_tree(&self, ctx: &LayoutContext, depth: usize) -> Result<(), LayoutError> {
        ctx.check_depth(depth, &self.name)?;
        self.validate()?;
        for cell in self.cells.iter().filter(|c| !c.collapsed) {
            if let Some(child) = cell.view().as_container() {
                child.base().validate_tree(ctx, depth + 1)?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for ContainerView {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ContainerView")
            .field("name", &self.name)
            .field("rect", &self.rect)
            .field("insets", &self.insets)
            .field("min_size", &self.min_size)
            .field("cells", &self.cells)
            .finish()
    }
}

impl Placeable for ContainerView {
    fn natural_size(&self, _available: Size, _ctx: &LayoutContext) -> Size {
        self.min_size
    }

    fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    fn rect(&self) -> Rect {
        self.rect
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn as_container(&self) -> Option<&dyn Container> {
        Some(self)
    }

    fn as_container_mut(&mut self) -> Option<&mut dyn Container> {
        Some(self)
    }
}

impl Container for ContainerView {
    fn base(&self) -> &ContainerView {
        self
    }

    fn base_mut(&mut self) -> &mut ContainerView {
        self
    }

    fn arrange_children(&mut self, ctx: &LayoutContext, depth: usize) -> Result<(), LayoutError> {
        ctx.check_depth(depth, &self.name)?;
        self.validate()?;
        let local = self.local_rect();
        let content = self.content_rect();
        // Measure everything before moving anything.
        let sizes = self
            .cells
            .iter()
            .map(|cell| {
                if cell.collapsed {
                    Ok(None)
                } else {
                    let frame = if cell.free { local } else { content };
                    measure(cell, frame.size(), ctx).map(Some)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            container = %self.name,
            cells = self.cells.len(),
            placed = sizes.iter().flatten().count(),
            "arranging container"
        );

        // Flow cells first, then free cells.
        for free_pass in [false, true] {
            for (cell, size) in self.cells.iter_mut().zip(&sizes) {
                let Some(size) = size else { continue };
                if cell.free != free_pass {
                    continue;
                }
                let frame = if cell.free { local } else { content };
                let rect = frame.align(*size, cell.alignment, cell.margin, cell.max_size);
                assign(cell, rect, ctx, depth)?;
            }
        }
        Ok(())
    }
}

/// Ask a cell's child for its natural size inside `total`, rejecting
/// negative, NaN or infinite answers.
pub(crate) fn measure(cell: &Cell, total: Size, ctx: &LayoutContext) -> Result<Size, LayoutError> {
    let size = cell.view().natural_size(cell.available_in(total), ctx);
    if !size.is_valid() {
        tracing::error!(
            cell = %cell.id(),
            child = cell.name(),
            ?size,
            "child reported an invalid natural size, arrangement aborted"
        );
        return Err(LayoutError::InvalidSize {
            cell: cell.id(),
            size,
        });
    }
    Ok(size)
}

/// Give a cell's child its final rect and arrange its own children.
/// Returns the rect actually assigned (after pixel snapping).
pub(crate) fn assign(
    cell: &mut Cell,
    rect: Rect,
    ctx: &LayoutContext,
    depth: usize,
) -> Result<Rect, LayoutError> {
    let rect = ctx.snap(rect);
    tracing::trace!(cell = %cell.id(), child = cell.name(), ?rect, "placed");
    let view = cell.view_mut();
    view.set_rect(rect);
    if let Some(container) = view.as_container_mut() {
        container.arrange_children(ctx, depth + 1)?;
    }
    Ok(rect)
}

/// A leaf with a fixed natural size: spacers, icons, test fixtures.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedView {
    name: String,
    size: Size,
    rect: Rect,
}

impl FixedView {
    pub fn new(name: impl Into<String>, size: Size) -> Self {
        Self {
            name: name.into(),
            size,
            rect: Rect::ZERO,
        }
    }

    /// An unnamed leaf, typically used as flexible space.
    pub fn spacer(size: Size) -> Self {
        Self::new("", size)
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }
}

impl Placeable for FixedView {
    fn natural_size(&self, _available: Size, _ctx: &LayoutContext) -> Size {
        self.size
    }

    fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    fn rect(&self) -> Rect {
        self.rect
    }

    fn name(&self) -> &str {
        &self.name
    }
}
