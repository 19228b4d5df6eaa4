//! End-to-end arrangement of stacks and containers.
//!
//! Each test builds a small tree of fixed-size leaves, lays it out in a
//! frame, and checks the rects the leaves were given.

use boxlayout::*;

// ---- Helpers ----

fn leaf(name: &str, w: f64, h: f64) -> FixedView {
    FixedView::new(name, Size::new(w, h))
}

fn rect_of(c: &ContainerView, id: CellId) -> Rect {
    c.child(id).unwrap().rect()
}

fn row(spacing: f64) -> StackView {
    StackView::horizontal("row").with_spacing(spacing)
}

fn ctx() -> LayoutContext {
    LayoutContext::default()
}

/// A leaf whose natural size is whatever it was constructed with, even
/// if that is invalid.
struct BrokenView(Size, Rect);

impl Placeable for BrokenView {
    fn natural_size(&self, _available: Size, _ctx: &LayoutContext) -> Size {
        self.0
    }
    fn set_rect(&mut self, rect: Rect) {
        self.1 = rect;
    }
    fn rect(&self) -> Rect {
        self.1
    }
}

// ---- Reference scenarios ----

#[test]
fn scenario_a_centered_block() {
    let mut s = row(10.0);
    let ids: Vec<_> = (0..3)
        .map(|i| s.add(leaf(&format!("c{i}"), 50.0, 20.0), Alignment::CENTER))
        .collect();
    s.layout(Rect::new(0.0, 0.0, 300.0, 20.0), &ctx()).unwrap();

    assert_eq!(rect_of(&s, ids[0]).x, 65.0);
    assert_eq!(rect_of(&s, ids[1]).x, 125.0);
    assert_eq!(rect_of(&s, ids[2]).x, 185.0);
    assert_eq!(rect_of(&s, ids[2]).max_x(), 235.0);
}

#[test]
fn scenario_b_opposite_edges() {
    let mut s = StackView::horizontal("row");
    let left = s.add(leaf("l", 50.0, 20.0), Alignment::CENTER_LEFT);
    let right = s.add(leaf("r", 50.0, 20.0), Alignment::CENTER_RIGHT);
    s.layout(Rect::new(0.0, 0.0, 300.0, 20.0), &ctx()).unwrap();

    let l = rect_of(&s, left);
    let r = rect_of(&s, right);
    assert_eq!((l.x, l.max_x()), (0.0, 50.0));
    assert_eq!((r.x, r.max_x()), (250.0, 300.0));
    assert_eq!(r.x - l.max_x(), 200.0);
}

#[test]
fn scenario_c_expanding_edge_takes_slack() {
    let mut s = row(0.0);
    let left = s.add(leaf("l", 50.0, 20.0), Alignment::CENTER_LEFT | Alignment::HOR_EXPAND);
    let right = s.add(leaf("r", 50.0, 20.0), Alignment::CENTER_RIGHT);
    s.layout(Rect::new(0.0, 0.0, 300.0, 20.0), &ctx()).unwrap();

    let l = rect_of(&s, left);
    let r = rect_of(&s, right);
    assert_eq!((l.x, l.max_x()), (0.0, 250.0));
    assert_eq!((r.x, r.max_x()), (250.0, 300.0));
}

#[test]
fn scenario_d_rect_align_center() {
    let r = Rect::new(0.0, 0.0, 100.0, 100.0).align(
        Size::new(20.0, 20.0),
        Alignment::CENTER,
        Size::ZERO,
        Size::ZERO,
    );
    assert_eq!(r, Rect::new(40.0, 40.0, 20.0, 20.0));
}

// ---- Axis and spacing ----

#[test]
fn vertical_stack() {
    let mut s = StackView::vertical("col").with_spacing(4.0);
    let a = s.add(leaf("a", 10.0, 10.0), Alignment::TOP_LEFT);
    let b = s.add(leaf("b", 20.0, 10.0), Alignment::TOP_CENTER);
    let z = s.add(leaf("z", 10.0, 30.0), Alignment::BOTTOM_RIGHT);
    s.layout(Rect::new(0.0, 0.0, 50.0, 200.0), &ctx()).unwrap();

    assert_eq!(rect_of(&s, a), Rect::new(0.0, 0.0, 10.0, 10.0));
    assert_eq!(rect_of(&s, b), Rect::new(15.0, 14.0, 20.0, 10.0));
    assert_eq!(rect_of(&s, z), Rect::new(40.0, 170.0, 10.0, 30.0));
}

#[test]
fn spacing_defaults_to_context() {
    let mut s = StackView::horizontal("row");
    s.add(leaf("a", 10.0, 10.0), Alignment::CENTER_LEFT);
    let b = s.add(leaf("b", 10.0, 10.0), Alignment::CENTER_LEFT);

    s.layout(Rect::new(0.0, 0.0, 100.0, 10.0), &ctx()).unwrap();
    assert_eq!(rect_of(&s, b).x, 16.0);

    s.layout(Rect::new(0.0, 0.0, 100.0, 10.0), &ctx().with_spacing(20.0))
        .unwrap();
    assert_eq!(rect_of(&s, b).x, 30.0);
}

#[test]
fn margins_offset_edge_cells() {
    let mut s = row(0.0);
    let a = s.add_cell(
        CellSpec::new(leaf("a", 10.0, 10.0), Alignment::CENTER_LEFT).margin(Size::new(5.0, 0.0)),
    );
    let b = s.add(leaf("b", 10.0, 10.0), Alignment::CENTER_LEFT);
    s.layout(Rect::new(0.0, 0.0, 100.0, 10.0), &ctx()).unwrap();
    assert_eq!(rect_of(&s, a).x, 5.0);
    assert_eq!(rect_of(&s, b).x, 15.0);
}

// ---- Distribution ----

#[test]
fn weights_split_slack() {
    let mut s = row(0.0);
    let a = s.add_cell(CellSpec::new(leaf("a", 0.0, 10.0), Alignment::CENTER_LEFT | Alignment::HOR_EXPAND));
    let b = s.add_cell(
        CellSpec::new(leaf("b", 0.0, 10.0), Alignment::CENTER_LEFT | Alignment::HOR_EXPAND).weight(3.0),
    );
    s.layout(Rect::new(0.0, 0.0, 300.0, 10.0), &ctx()).unwrap();
    assert_eq!(rect_of(&s, a).width, 75.0);
    assert_eq!(rect_of(&s, b), Rect::new(75.0, 0.0, 225.0, 10.0));
}

fn clamped_pair() -> (StackView, CellId, CellId) {
    let mut s = row(0.0);
    let a = s.add_cell(
        CellSpec::new(leaf("a", 50.0, 10.0), Alignment::CENTER_LEFT | Alignment::HOR_EXPAND)
            .max_size(Size::new(60.0, 0.0)),
    );
    let b = s.add(leaf("b", 50.0, 10.0), Alignment::CENTER_LEFT | Alignment::HOR_EXPAND);
    (s, a, b)
}

#[test]
fn clamped_expander_leaves_slack_unused_by_default() {
    let (mut s, a, b) = clamped_pair();
    s.layout(Rect::new(0.0, 0.0, 300.0, 10.0), &ctx()).unwrap();
    assert_eq!(rect_of(&s, a).width, 60.0);
    assert_eq!(rect_of(&s, b), Rect::new(60.0, 0.0, 150.0, 10.0));
}

#[test]
fn clamped_expander_slack_redistributed_when_enabled() {
    let (mut s, a, b) = clamped_pair();
    s.layout(Rect::new(0.0, 0.0, 300.0, 10.0), &ctx().with_redistribution(true))
        .unwrap();
    assert_eq!(rect_of(&s, a).width, 60.0);
    assert_eq!(rect_of(&s, b), Rect::new(60.0, 0.0, 240.0, 10.0));
}

#[test]
fn shrink_cells_absorb_deficit() {
    let mut s = row(0.0);
    let a = s.add(leaf("a", 80.0, 10.0), Alignment::CENTER_LEFT | Alignment::HOR_SHRINK);
    let b = s.add(leaf("b", 80.0, 10.0), Alignment::CENTER_LEFT | Alignment::HOR_SHRINK);
    s.layout(Rect::new(0.0, 0.0, 100.0, 10.0), &ctx()).unwrap();
    assert_eq!(rect_of(&s, a), Rect::new(0.0, 0.0, 50.0, 10.0));
    assert_eq!(rect_of(&s, b), Rect::new(50.0, 0.0, 50.0, 10.0));
}

#[test]
fn shrink_respects_min_size() {
    let mut s = row(0.0);
    let a = s.add_cell(
        CellSpec::new(leaf("a", 80.0, 10.0), Alignment::CENTER_LEFT | Alignment::HOR_SHRINK)
            .min_size(Size::new(70.0, 0.0)),
    );
    let b = s.add(leaf("b", 80.0, 10.0), Alignment::CENTER_LEFT | Alignment::HOR_SHRINK);
    s.layout(Rect::new(0.0, 0.0, 100.0, 10.0), &ctx()).unwrap();
    assert_eq!(rect_of(&s, a).width, 70.0);
    assert_eq!(rect_of(&s, b).x, 70.0);
}

#[test]
fn cells_without_flags_ignore_slack() {
    let mut s = row(0.0);
    let a = s.add(leaf("a", 40.0, 10.0), Alignment::CENTER_LEFT);
    s.layout(Rect::new(0.0, 0.0, 30.0, 10.0), &ctx()).unwrap();
    assert_eq!(rect_of(&s, a).width, 40.0);
}

// ---- Collapse and free cells ----

#[test]
fn collapsing_closes_the_gap() {
    let mut s = row(5.0);
    s.add(leaf("a", 10.0, 10.0), Alignment::CENTER_LEFT);
    let b = s.add(leaf("b", 10.0, 10.0), Alignment::CENTER_LEFT);
    let c = s.add(leaf("c", 10.0, 10.0), Alignment::CENTER_LEFT);
    s.layout(Rect::new(0.0, 0.0, 100.0, 10.0), &ctx()).unwrap();
    assert_eq!(rect_of(&s, c).x, 30.0);

    s.set_collapsed(b, true).unwrap();
    s.layout(Rect::new(0.0, 0.0, 100.0, 10.0), &ctx()).unwrap();
    assert_eq!(rect_of(&s, c).x, 15.0);
    assert_eq!(s.children(false).count(), 2);

    s.set_collapsed(b, false).unwrap();
    s.layout(Rect::new(0.0, 0.0, 100.0, 10.0), &ctx()).unwrap();
    assert_eq!(rect_of(&s, c).x, 30.0);
}

#[test]
fn all_collapsed_is_a_no_op() {
    let mut s = row(5.0);
    let a = s.add_cell(CellSpec::new(leaf("a", 10.0, 10.0), Alignment::CENTER).collapsed());
    let b = s.add_cell(CellSpec::new(leaf("b", 10.0, 10.0), Alignment::CENTER).collapsed());
    s.layout(Rect::new(0.0, 0.0, 100.0, 10.0), &ctx()).unwrap();
    assert_eq!(rect_of(&s, a), Rect::ZERO);
    assert_eq!(rect_of(&s, b), Rect::ZERO);
}

#[test]
fn free_cells_stay_out_of_the_flow() {
    let mut s = row(0.0);
    s.set_insets(Insets::uniform(4.0));
    let badge = s.add_cell(CellSpec::new(leaf("badge", 8.0, 8.0), Alignment::TOP_RIGHT).free());
    let a = s.add(leaf("a", 10.0, 10.0), Alignment::CENTER_RIGHT);
    s.layout(Rect::new(0.0, 0.0, 100.0, 30.0), &ctx()).unwrap();
    assert_eq!(rect_of(&s, badge), Rect::new(92.0, 0.0, 8.0, 8.0));
    assert_eq!(rect_of(&s, a), Rect::new(86.0, 10.0, 10.0, 10.0));
}

// ---- Recursion ----

#[test]
fn nested_stack_is_arranged_after_its_parent() {
    let mut inner = row(6.0);
    let a = inner.add(leaf("a", 10.0, 10.0), Alignment::CENTER_LEFT);
    let b = inner.add(leaf("b", 10.0, 10.0), Alignment::CENTER_RIGHT);

    let mut outer = StackView::vertical("outer").with_spacing(0.0);
    let header = outer.add(
        leaf("header", 10.0, 20.0),
        Alignment::TOP | Alignment::HOR_EXPAND | Alignment::NON_PROP,
    );
    let body = outer.add(inner, Alignment::TOP | Alignment::EXPAND | Alignment::NON_PROP);
    outer
        .layout(Rect::new(0.0, 0.0, 100.0, 200.0), &ctx())
        .unwrap();

    assert_eq!(rect_of(&outer, header), Rect::new(0.0, 0.0, 100.0, 20.0));
    assert_eq!(rect_of(&outer, body), Rect::new(0.0, 20.0, 100.0, 180.0));

    let inner = outer.child(body).unwrap().as_container().unwrap().base();
    assert_eq!(rect_of(inner, a), Rect::new(0.0, 85.0, 10.0, 10.0));
    assert_eq!(rect_of(inner, b), Rect::new(90.0, 85.0, 10.0, 10.0));
}

#[test]
fn stack_inside_generic_container() {
    let mut toolbar = row(0.0);
    let icon = toolbar.add(leaf("icon", 16.0, 16.0), Alignment::CENTER_LEFT);

    let mut root = ContainerView::new("root").with_insets(Insets::uniform(10.0));
    let bar = root.add(
        toolbar,
        Alignment::TOP_CENTER | Alignment::HOR_EXPAND | Alignment::NON_PROP,
    );
    root.layout(Rect::new(0.0, 0.0, 200.0, 100.0), &ctx()).unwrap();

    assert_eq!(rect_of(&root, bar), Rect::new(10.0, 10.0, 180.0, 16.0));
    let toolbar = root.child(bar).unwrap().as_container().unwrap().base();
    assert_eq!(rect_of(toolbar, icon), Rect::new(0.0, 0.0, 16.0, 16.0));
}

// ---- Errors ----

#[test]
fn missing_axis_aborts_without_moving_cells() {
    let mut s = row(0.0);
    let ok = s.add(leaf("ok", 10.0, 10.0), Alignment::CENTER_LEFT);
    let bad = s.add(leaf("bad", 10.0, 10.0), Alignment::TOP | Alignment::VERT_EXPAND);
    let err = s
        .layout(Rect::new(0.0, 0.0, 100.0, 10.0), &ctx())
        .unwrap_err();
    assert_eq!(
        err,
        LayoutError::MissingAxis {
            cell: bad,
            alignment: Alignment::TOP | Alignment::VERT_EXPAND,
        }
    );
    assert_eq!(rect_of(&s, ok), Rect::ZERO);
}

#[test]
fn nested_missing_axis_aborts_the_whole_tree() {
    let mut inner = row(0.0);
    inner.add(leaf("bad", 10.0, 10.0), Alignment::HOR_CENTER);
    let mut outer = row(0.0);
    let first = outer.add(leaf("first", 10.0, 10.0), Alignment::CENTER_LEFT);
    outer.add(inner, Alignment::CENTER_LEFT);

    let err = outer
        .layout(Rect::new(0.0, 0.0, 100.0, 10.0), &ctx())
        .unwrap_err();
    assert!(matches!(err, LayoutError::MissingAxis { .. }));
    assert_eq!(rect_of(&outer, first), Rect::ZERO);
}

#[test]
fn negative_natural_size_is_an_error() {
    let mut inner = row(0.0);
    let broken = inner.add(
        BrokenView(Size::new(-1.0, 5.0), Rect::ZERO),
        Alignment::CENTER_LEFT,
    );
    let mut outer = StackView::vertical("outer");
    outer.add(inner, Alignment::TOP_LEFT);
    let err = outer
        .layout(Rect::new(0.0, 0.0, 100.0, 100.0), &ctx())
        .unwrap_err();
    assert_eq!(
        err,
        LayoutError::InvalidSize {
            cell: broken,
            size: Size::new(-1.0, 5.0),
        }
    );
}

#[test]
fn nesting_deeper_than_limit_fails() {
    let mut tree = row(0.0);
    tree.add(leaf("leaf", 1.0, 1.0), Alignment::CENTER);
    for i in 0..5 {
        let mut parent = StackView::horizontal(format!("level{i}"));
        parent.add(tree, Alignment::CENTER);
        tree = parent;
    }
    let frame = Rect::new(0.0, 0.0, 50.0, 50.0);
    assert_eq!(
        tree.layout(frame, &ctx().with_max_depth(3)),
        Err(LayoutError::DepthExceeded { limit: 3 })
    );
    assert!(tree.layout(frame, &ctx()).is_ok());
}

#[test]
fn stale_handle_is_reported() {
    let mut s = row(0.0);
    let a = s.add(leaf("a", 1.0, 1.0), Alignment::CENTER);
    s.remove_cell(a).unwrap();
    assert_eq!(s.set_collapsed(a, true), Err(LayoutError::CellNotFound(a)));
    assert_eq!(
        s.set_alignment(a, Alignment::CENTER),
        Err(LayoutError::CellNotFound(a))
    );
}

// ---- Degenerate geometry ----

#[test]
fn zero_frame_gives_finite_rects() {
    let mut s = row(6.0);
    let ids = [
        s.add(leaf("a", 30.0, 10.0), Alignment::CENTER_LEFT | Alignment::HOR_SHRINK),
        s.add(leaf("b", 30.0, 10.0), Alignment::CENTER | Alignment::SHRINK),
        s.add(leaf("c", 30.0, 10.0), Alignment::CENTER_RIGHT | Alignment::HOR_EXPAND),
    ];
    s.layout(Rect::ZERO, &ctx()).unwrap();
    for id in ids {
        let r = rect_of(&s, id);
        assert!(r.x.is_finite() && r.y.is_finite(), "{r:?}");
        assert!(r.width >= 0.0 && r.height >= 0.0, "{r:?}");
    }
}

#[test]
fn single_cell_zero_spacing() {
    let mut s = row(0.0);
    let a = s.add(leaf("a", 10.0, 10.0), Alignment::CENTER);
    s.layout(Rect::new(0.0, 0.0, 30.0, 30.0), &ctx()).unwrap();
    assert_eq!(rect_of(&s, a), Rect::new(10.0, 10.0, 10.0, 10.0));
}

#[test]
fn empty_stack() {
    let mut s = row(6.0);
    assert!(s.layout(Rect::new(0.0, 0.0, 30.0, 30.0), &ctx()).is_ok());
    assert_eq!(s.natural_size(Size::ZERO, &ctx()), Size::ZERO);
}

// ---- Pixel snapping ----

#[test]
fn pixel_scale_snaps_every_rect() {
    let mut s = row(0.0);
    let ids: Vec<_> = (0..3)
        .map(|i| s.add(leaf(&format!("c{i}"), 33.3, 10.0), Alignment::CENTER))
        .collect();
    s.layout(Rect::new(0.0, 0.0, 100.0, 10.0), &ctx().with_pixel_scale(1.0))
        .unwrap();
    for id in &ids {
        let r = rect_of(&s, *id);
        assert_eq!(r.x.fract(), 0.0, "{r:?}");
        assert_eq!(r.width.fract(), 0.0, "{r:?}");
    }
    // Neighbours still abut after snapping.
    assert_eq!(rect_of(&s, ids[0]).max_x(), rect_of(&s, ids[1]).x);
}
