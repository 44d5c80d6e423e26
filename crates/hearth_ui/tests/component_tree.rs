//! Component tree behavior through the public API.

use hearth_core::Handle;
use hearth_ui::{
    Button, Component, ComponentTree, InputEvent, Label, Panel, ProgressBar, Rect, RenderCommand,
    RenderList,
};
use proptest::prelude::*;

fn render(tree: &mut ComponentTree) -> RenderList {
    let mut out = RenderList::new();
    tree.render(&mut out);
    out
}

proptest! {
    #[test]
    fn render_order_is_by_z_then_insertion(zs in prop::collection::vec(-4i8..4, 1..64)) {
        let mut tree = ComponentTree::new(64 * 1024);
        for (i, z) in zs.iter().enumerate() {
            tree.add_child(Label::new(i.to_string(), 0.0, 0.0).with_z(f32::from(*z)));
        }

        let out = render(&mut tree);
        let order: Vec<usize> = out.texts().map(|t| t.parse().unwrap()).collect();
        prop_assert_eq!(order.len(), zs.len());

        for pair in order.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!(zs[a] < zs[b] || (zs[a] == zs[b] && a < b));
        }
    }

    #[test]
    fn handles_resolve_to_their_own_child(count in 1usize..200) {
        let mut tree = ComponentTree::new(64 * 1024);
        let handles: Vec<Handle> = (0..count)
            .map(|i| tree.add_child(Label::new(i.to_string(), 0.0, 0.0)))
            .collect();

        for (i, handle) in handles.iter().enumerate() {
            prop_assert_eq!(handle.index() as usize, i);
            let expected = i.to_string();
            prop_assert_eq!(tree.get_child::<Label>(*handle).map(Label::text), Some(expected.as_str()));
        }
    }
}

#[test]
fn mixed_widgets_render_in_z_order() {
    let mut tree = ComponentTree::new(8 * 1024);
    tree.add_child(Label::new("title", 10.0, 10.0).with_z(2.0));
    tree.add_child(Panel::new(Rect::new(0.0, 0.0, 200.0, 100.0)));
    tree.add_child(ProgressBar::new(Rect::new(10.0, 40.0, 100.0, 8.0), 0.5).with_z(1.0));

    let out = render(&mut tree);
    let commands = out.commands();
    assert!(matches!(commands[0], RenderCommand::Rect { bounds, .. } if bounds.width == 200.0));
    assert!(matches!(commands[1], RenderCommand::Rect { bounds, .. } if bounds.width == 100.0));
    assert!(matches!(commands.last(), Some(RenderCommand::Text { .. })));
}

#[test]
fn wrong_type_and_stale_handles_give_none() {
    let mut tree = ComponentTree::new(4096);
    let label = tree.add_child(Label::new("x", 0.0, 0.0));

    assert!(tree.get_child::<Button>(label).is_none());
    assert!(tree.get_child::<Label>(label).is_some());

    tree.clear();
    assert!(tree.get_child::<Label>(label).is_none());
    assert!(tree.is_empty());
}

#[test]
fn click_goes_to_topmost_overlapping_button() {
    let bounds = Rect::new(0.0, 0.0, 50.0, 20.0);
    let mut tree = ComponentTree::new(4096);
    let lower = tree.add_child(Button::new(bounds, "lower"));
    let upper = tree.add_child(Button::new(bounds, "upper").with_z(1.0));

    assert!(tree.handle_input(&InputEvent::click(5.0, 5.0)));
    assert!(tree.handle_input(&InputEvent::release(5.0, 5.0)));

    assert_eq!(tree.get_child::<Button>(upper).unwrap().clicks(), 1);
    assert_eq!(tree.get_child::<Button>(lower).unwrap().clicks(), 0);
}

#[test]
fn update_then_render_reflects_new_state() {
    let mut tree = ComponentTree::new(4096);
    let bar = tree.add_child(ProgressBar::new(Rect::new(0.0, 0.0, 100.0, 8.0), 0.25));

    tree.update(2.0);

    let progress = tree.get_child::<ProgressBar>(bar).unwrap().progress();
    assert!((progress - 0.5).abs() < 1e-6);
    assert_eq!(render(&mut tree).len(), 2);
}

#[test]
fn nested_tree_participates_in_input() {
    let mut inner = ComponentTree::with_z_index(4096, 5.0);
    let inner_button = inner.add_child(Button::new(Rect::new(0.0, 0.0, 10.0, 10.0), "inner"));

    let mut outer = ComponentTree::new(16 * 1024);
    let below = outer.add_child(Button::new(Rect::new(0.0, 0.0, 10.0, 10.0), "below"));
    let nested = outer.add_child(inner);

    outer.handle_input(&InputEvent::click(1.0, 1.0));
    outer.handle_input(&InputEvent::release(1.0, 1.0));

    let inner = outer.get_child::<ComponentTree>(nested).unwrap();
    assert_eq!(inner.get_child::<Button>(inner_button).unwrap().clicks(), 1);
    assert_eq!(inner.z_index(), 5.0);
    assert_eq!(outer.get_child::<Button>(below).unwrap().clicks(), 0);
}

#[test]
fn rebuilds_reuse_the_arena() {
    let mut tree = ComponentTree::new(1024);
    for round in 0..100u16 {
        for i in 0..8 {
            tree.add_child(Label::new(format!("{round}:{i}"), 0.0, 0.0));
        }
        assert_eq!(tree.len(), 8);
        tree.clear();
        assert_eq!(tree.generation(), round + 1);
        assert_eq!(tree.arena_used(), 0);
    }
}
