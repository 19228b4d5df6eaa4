//! Box layout computation: alignment flags, rect alignment, and linear stacks.
//!
//! Pure geometry over a tree of placeable children. No rendering, no
//! global state, `no_std` compatible (needs `alloc`).
//!
//! # Modules
//!
//! - [`alignment`]: `Alignment` flags, flips, string encoding
//! - [`geometry`]: `Pos`, `Size`, `Rect`, `Insets`
//! - [`align`]: `Rect::align`, placing content of a given size in a frame
//! - [`cell`]: per-child placement settings and the `CellSpec` builder
//! - [`container`]: `Placeable`/`Container` traits and `ContainerView`
//! - [`stack`]: `StackView`, linear distribution along one axis
//! - [`context`]: `LayoutContext`, settings shared by a whole tree
//!
//! # Example
//!
//! ```
//! use boxlayout::{Alignment, CellSpec, Container, FixedView, LayoutContext, Rect, Size, StackView};
//!
//! let mut bar = StackView::horizontal("bar").with_spacing(0.0);
//! let back = bar.add(FixedView::new("back", Size::new(50.0, 20.0)), Alignment::CENTER_LEFT);
//! let search = bar.add_cell(
//!     CellSpec::new(FixedView::new("search", Size::new(50.0, 20.0)), Alignment::CENTER_LEFT | Alignment::HOR_EXPAND),
//! );
//! let menu = bar.add(FixedView::new("menu", Size::new(50.0, 20.0)), Alignment::CENTER_RIGHT);
//!
//! bar.layout(Rect::new(0.0, 0.0, 300.0, 40.0), &LayoutContext::default()).unwrap();
//! assert_eq!(bar.child(back).unwrap().rect(), Rect::new(0.0, 10.0, 50.0, 20.0));
//! assert_eq!(bar.child(search).unwrap().rect(), Rect::new(50.0, 10.0, 200.0, 20.0));
//! assert_eq!(bar.child(menu).unwrap().rect(), Rect::new(250.0, 10.0, 50.0, 20.0));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod align;
pub mod alignment;
pub mod cell;
pub mod container;
pub mod context;
pub mod error;
pub mod geometry;
pub mod stack;

#[cfg(feature = "svg")]
pub mod svg;

pub use alignment::Alignment;
pub use cell::{Cell, CellId, CellSpec};
pub use container::{Container, ContainerView, FixedView, Placeable};
pub use context::{DEFAULT_MAX_DEPTH, DEFAULT_SPACING, LayoutContext};
pub use error::{LayoutError, ParseAlignmentError};
pub use geometry::{Insets, Pos, Rect, Size};
pub use stack::StackView;
