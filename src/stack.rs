//! Linear layout: cells in a row or column.
//!
//! A [`StackView`] places its flowed cells one after another along its main
//! axis, separated by a fixed spacing. An arrangement pass:
//!
//! 1. measures every non-collapsed cell,
//! 2. places free cells against the whole container rect,
//! 3. distributes the main-axis slack (frame extent minus natural total)
//!    over expanding cells when positive, or shrinking cells when negative,
//! 4. places edge cells (leading or trailing anchor on the main axis) in
//!    list order, each consuming space from its end of the remaining rect,
//! 5. places the remaining cells as one block centered in what is left.
//!
//! ```text
//!  ┌────────────────────────────────────────────────────────┐
//!  │ [lead][lead]        [mid][mid][mid]        [trail]     │
//!  │ ──────────▶         ◀── centered ──▶         ◀──────── │
//!  └────────────────────────────────────────────────────────┘
//! ```
//!
//! ```
//! use boxlayout::{Alignment, Container, FixedView, LayoutContext, Rect, Size, StackView};
//!
//! let mut row = StackView::horizontal("row").with_spacing(10.0);
//! let cells: Vec<_> = (0..3)
//!     .map(|i| row.add(FixedView::new(format!("c{i}"), Size::new(50.0, 20.0)), Alignment::CENTER))
//!     .collect();
//!
//! row.layout(Rect::new(0.0, 0.0, 300.0, 20.0), &LayoutContext::default()).unwrap();
//! assert_eq!(row.child(cells[0]).unwrap().rect().x, 65.0);
//! assert_eq!(row.child(cells[2]).unwrap().rect().max_x(), 235.0);
//! ```

use core::ops::{Deref, DerefMut};

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

use crate::alignment::Alignment;
use crate::cell::Cell;
use crate::container::{Container, ContainerView, Placeable, assign, measure};
use crate::context::LayoutContext;
use crate::error::LayoutError;
use crate::geometry::{Rect, Size};

/// Container that lays its cells out along one axis.
#[derive(Debug)]
pub struct StackView {
    base: ContainerView,
    vertical: bool,
    spacing: Option<f64>,
}

impl StackView {
    pub fn new(name: impl Into<String>, vertical: bool) -> Self {
        Self {
            base: ContainerView::new(name),
            vertical,
            spacing: None,
        }
    }

    /// A stack whose main axis is horizontal (a row).
    pub fn horizontal(name: impl Into<String>) -> Self {
        Self::new(name, false)
    }

    /// A stack whose main axis is vertical (a column).
    pub fn vertical(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }

    /// Set the gap between consecutive flowed cells.
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = Some(spacing);
        self
    }

    pub fn set_spacing(&mut self, spacing: f64) {
        self.spacing = Some(spacing);
    }

    /// This stack's spacing, falling back to the context default.
    pub fn spacing(&self, ctx: &LayoutContext) -> f64 {
        self.spacing.unwrap_or(ctx.default_spacing)
    }

    pub fn is_vertical(&self) -> bool {
        self.vertical
    }

    /// Consume the stack, keeping its cells as a plain container.
    pub fn into_inner(self) -> ContainerView {
        self.base
    }
}

impl Deref for StackView {
    type Target = ContainerView;

    fn deref(&self) -> &ContainerView {
        &self.base
    }
}

impl DerefMut for StackView {
    fn deref_mut(&mut self) -> &mut ContainerView {
        &mut self.base
    }
}

/// Which part of the main axis a flowed cell is placed in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Edge {
    Leading,
    Trailing,
    Centered,
}

impl Edge {
    fn of(alignment: Alignment, vertical: bool) -> Self {
        if alignment.contains(Alignment::leading(vertical)) {
            Edge::Leading
        } else if alignment.contains(Alignment::trailing(vertical)) {
            Edge::Trailing
        } else {
            Edge::Centered
        }
    }
}

/// Per-pass sizing state for one flowed cell. Discarded after the pass.
#[derive(Clone, Debug)]
struct Slot {
    index: usize,
    edge: Edge,
    /// Content size; the main axis is adjusted by distribution.
    size: Size,
    /// Natural main-axis extent.
    natural: f64,
    /// Main-axis room taken by the margin.
    margin: f64,
    expand: bool,
    shrink: bool,
    weight: f64,
    min: f64,
    max: f64,
}

impl Slot {
    fn new(index: usize, cell: &Cell, natural: Size, vertical: bool) -> Self {
        Self {
            index,
            edge: Edge::of(cell.alignment, vertical),
            size: natural,
            natural: natural.along(vertical),
            margin: cell.margin_span(vertical),
            expand: cell.alignment.contains(Alignment::expand_on(vertical)),
            shrink: cell.alignment.contains(Alignment::shrink_on(vertical)),
            weight: cell.weight_or_default(),
            min: cell.min_size.along(vertical),
            max: cell.max_size.along(vertical),
        }
    }

    /// Main-axis room including the margin.
    fn extent(&self, vertical: bool) -> f64 {
        self.size.along(vertical) + self.margin
    }

    /// Clamp a proposed main-axis extent to this cell's bounds.
    ///
    /// Growth stops at `max` (when set). Shrinking stops at `min`, but never
    /// forces a cell above its natural extent, and never below zero.
    fn bound(&self, target: f64) -> f64 {
        let floor = self.min.min(self.natural).max(0.0);
        let mut v = target.max(floor);
        if self.max > 0.0 {
            v = v.min(self.max.max(self.natural));
        }
        v
    }
}

/// Spread `diff` over the slots that accept it: expanding slots when
/// positive, shrinking slots when negative. Shares are proportional to
/// weight.
///
/// Returns the part of `diff` refused by clamped slots. With `redistribute`
/// the refused part is offered again to the slots that were not clamped,
/// until nothing is refused or every slot is clamped.
fn distribute(slots: &mut [Slot], diff: f64, vertical: bool, redistribute: bool) -> f64 {
    let grow = diff > 0.0;
    let mut open: Vec<usize> = slots
        .iter()
        .enumerate()
        .filter(|(_, s)| if grow { s.expand } else { s.shrink })
        .map(|(i, _)| i)
        .collect();
    if diff == 0.0 || open.is_empty() {
        return 0.0;
    }

    let mut remaining = diff;
    loop {
        let total_weight: f64 = open.iter().map(|&i| slots[i].weight).sum();
        let mut refused = 0.0;
        let mut unclamped = Vec::with_capacity(open.len());
        for &i in &open {
            let slot = &mut slots[i];
            let target = slot.size.along(vertical) + remaining * slot.weight / total_weight;
            let bounded = slot.bound(target);
            *slot.size.along_mut(vertical) = bounded;
            if bounded == target {
                unclamped.push(i);
            } else {
                refused += target - bounded;
            }
        }
        if !redistribute || refused == 0.0 || unclamped.is_empty() {
            return refused;
        }
        remaining = refused;
        open = unclamped;
    }
}

impl Placeable for StackView {
    /// Main axis: natural extents plus margins and spacing. Cross axis: the
    /// largest natural extent plus margin. Both include the insets and are
    /// at least the container's `min_size`.
    fn natural_size(&self, available: Size, ctx: &LayoutContext) -> Size {
        let v = self.vertical;
        let spacing = self.spacing(ctx);
        let total = (available - self.base.insets.total()).non_negative();

        let mut size = Size::ZERO;
        let mut flowed = 0usize;
        for cell in self.base.cells.iter().filter(|c| c.is_flowed()) {
            let natural = cell.view().natural_size(cell.available_in(total), ctx);
            *size.along_mut(v) += natural.along(v) + cell.margin_span(v);
            let cross = natural.along(!v) + cell.margin_span(!v);
            *size.along_mut(!v) = size.along(!v).max(cross);
            flowed += 1;
        }
        if flowed > 1 {
            *size.along_mut(v) += spacing * (flowed - 1) as f64;
        }
        size += self.base.insets.total();
        size.maximize(self.base.min_size);
        size
    }

    fn set_rect(&mut self, rect: Rect) {
        self.base.rect = rect;
    }

    fn rect(&self) -> Rect {
        self.base.rect
    }

    fn name(&self) -> &str {
        &self.base.name
    }

    fn as_container(&self) -> Option<&dyn Container> {
        Some(self)
    }

    fn as_container_mut(&mut self) -> Option<&mut dyn Container> {
        Some(self)
    }
}

impl Container for StackView {
    fn base(&self) -> &ContainerView {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ContainerView {
        &mut self.base
    }

    fn arrange_children(&mut self, ctx: &LayoutContext, depth: usize) -> Result<(), LayoutError> {
        ctx.check_depth(depth, &self.base.name)?;
        self.base.validate()?;

        let v = self.vertical;
        let spacing = self.spacing(ctx);
        let local = self.base.local_rect();
        let content = self.base.content_rect();
        let ContainerView { name, cells, .. } = &mut self.base;

        // Measure everything before moving anything.
        let mut free = Vec::new();
        let mut slots = Vec::new();
        for (index, cell) in cells.iter().enumerate() {
            if cell.collapsed {
                continue;
            }
            if cell.free {
                free.push((index, measure(cell, local.size(), ctx)?));
            } else {
                let natural = measure(cell, content.size(), ctx)?;
                slots.push(Slot::new(index, cell, natural, v));
            }
        }

        let natural_total = slots.iter().map(|s| s.extent(v)).sum::<f64>()
            + spacing * slots.len().saturating_sub(1) as f64;
        let diff = content.extent(v) - natural_total;
        let refused = distribute(&mut slots, diff, v, ctx.redistribute_clamped_slack);
        tracing::debug!(
            container = %name,
            vertical = v,
            flowed = slots.len(),
            free = free.len(),
            diff,
            "arranging stack"
        );
        if refused != 0.0 {
            tracing::debug!(
                container = %name,
                refused,
                redistributed = ctx.redistribute_clamped_slack,
                "slack refused by clamped cells left unused"
            );
        }

        for (index, size) in free {
            let cell = &mut cells[index];
            let rect = local.align(size, cell.alignment, cell.margin, cell.max_size);
            assign(cell, rect, ctx, depth)?;
        }

        // Edge cells eat into `r` from both ends, in list order.
        let last_flowed = slots.last().map(|s| s.index);
        let mut r = content;
        for slot in slots.iter().filter(|s| s.edge != Edge::Centered) {
            let cell = &mut cells[slot.index];
            let mut alignment = cell.alignment;
            // Only the last flowed cell may fill leftover room.
            if Some(slot.index) != last_flowed {
                alignment -= Alignment::expand_on(v);
            }
            let placed = r.align(slot.size, alignment, cell.margin, cell.max_size);
            let placed = assign(cell, placed, ctx, depth)?;
            if slot.edge == Edge::Leading {
                let start = r.start(v).max(placed.end(v) + spacing).min(r.end(v));
                r.set_start(v, start);
            } else {
                let end = r.end(v).min(placed.start(v) - spacing).max(r.start(v));
                r.set_end(v, end);
            }
        }

        // The rest go in a single block centered in what remains.
        let centered: Vec<&Slot> = slots.iter().filter(|s| s.edge == Edge::Centered).collect();
        if centered.is_empty() {
            return Ok(());
        }
        let block = centered.iter().map(|s| s.extent(v)).sum::<f64>()
            + spacing * (centered.len() - 1) as f64;
        let mid = r.start(v) + r.extent(v) / 2.0;
        let start = r.start(v).max(mid - block / 2.0);
        let end = r.end(v).min(mid + block / 2.0).max(start);
        r.set_start(v, start);
        r.set_end(v, end);

        for slot in centered {
            let cell = &mut cells[slot.index];
            let alignment = (cell.alignment - Alignment::middle(v) - Alignment::expand_on(v))
                | Alignment::leading(v);
            let placed = r.align(slot.size, alignment, cell.margin, cell.max_size);
            let placed = assign(cell, placed, ctx, depth)?;
            // Centered cells carry their margin on both sides.
            let next = placed.end(v) + slot.margin / 2.0 + spacing;
            r.set_start(v, next);
        }
        Ok(())
    }
}
