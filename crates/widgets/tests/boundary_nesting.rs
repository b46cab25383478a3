use anyhow::Error;
use widgets::{ContainerConfig, WidgetKind, WidgetTree};

fn boundary() -> WidgetKind {
    WidgetKind::ScrollBoundary { config: ContainerConfig::default() }
}

/// A widget outside any container resolves to no registration at all.
#[test]
fn lookup_outside_any_container_is_none() -> Result<(), Error> {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut tree = WidgetTree::new();
    let block = tree.insert(tree.root(), WidgetKind::Block)?;
    assert_eq!(tree.scroll_boundary_of(block), None);
    assert_eq!(tree.scroll_boundary_of(tree.root()), None);
    Ok(())
}

/// Descendants of a single container all resolve to it, however deep.
#[test]
fn descendants_resolve_to_enclosing_container() -> Result<(), Error> {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut tree = WidgetTree::new();
    let container = tree.insert(tree.root(), boundary())?;
    let middle = tree.insert(container, WidgetKind::Block)?;
    let leaf = tree.insert(middle, WidgetKind::Paragraph)?;

    assert_eq!(tree.scroll_boundary_of(middle), Some(container));
    assert_eq!(tree.scroll_boundary_of(leaf), Some(container));
    // The container itself sits outside its own scope.
    assert_eq!(tree.scroll_boundary_of(container), None);
    Ok(())
}

/// Nesting shadows: a descendant of the inner container never sees the outer.
#[test]
fn inner_container_shadows_outer() -> Result<(), Error> {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut tree = WidgetTree::new();
    let outer = tree.insert(tree.root(), boundary())?;
    let between = tree.insert(outer, WidgetKind::Block)?;
    let inner = tree.insert(between, boundary())?;
    let anchored = tree.insert(inner, WidgetKind::Button)?;

    assert_eq!(tree.scroll_boundary_of(anchored), Some(inner));
    assert_eq!(tree.scroll_boundary_of(between), Some(outer));
    // The inner container is itself a descendant of the outer scope.
    assert_eq!(tree.scroll_boundary_of(inner), Some(outer));
    Ok(())
}

/// Siblings of a nested container stay bound to the outer scope.
#[test]
fn sibling_of_inner_container_keeps_outer_binding() -> Result<(), Error> {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut tree = WidgetTree::new();
    let outer = tree.insert(tree.root(), boundary())?;
    let inner = tree.insert(outer, boundary())?;
    let inside_inner = tree.insert(inner, WidgetKind::Block)?;
    let sibling = tree.insert(outer, WidgetKind::Block)?;

    assert_eq!(tree.scroll_boundary_of(inside_inner), Some(inner));
    assert_eq!(tree.scroll_boundary_of(sibling), Some(outer));
    Ok(())
}

/// Unmounting a container subtree clears every registration it owned.
#[test]
fn unmount_clears_registrations() -> Result<(), Error> {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut tree = WidgetTree::new();
    let container = tree.insert(tree.root(), boundary())?;
    let child = tree.insert(container, WidgetKind::Block)?;
    assert_eq!(tree.scroll_boundary_of(child), Some(container));

    tree.remove(container)?;
    assert_eq!(tree.scroll_boundary_of(child), None);
    assert!(tree.widget(container).is_none());
    assert!(tree.widget(child).is_none());
    Ok(())
}

/// The incremental bindings kept during mutation agree with a full remount
/// walk over the same tree.
#[test]
fn incremental_bindings_match_full_rebuild() -> Result<(), Error> {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut tree = WidgetTree::new();
    let outer = tree.insert(tree.root(), boundary())?;
    let inner = tree.insert(outer, boundary())?;
    let a = tree.insert(inner, WidgetKind::Block)?;
    let b = tree.insert(outer, WidgetKind::Paragraph)?;
    let c = tree.insert(tree.root(), WidgetKind::Block)?;

    let incremental: Vec<_> = tree
        .document_order()
        .into_iter()
        .map(|key| (key, tree.scroll_boundary_of(key)))
        .collect();

    tree.rebuild_bindings();
    let rebuilt: Vec<_> = tree
        .document_order()
        .into_iter()
        .map(|key| (key, tree.scroll_boundary_of(key)))
        .collect();

    assert_eq!(incremental, rebuilt);
    assert_eq!(tree.scroll_boundary_of(a), Some(inner));
    assert_eq!(tree.scroll_boundary_of(b), Some(outer));
    assert_eq!(tree.scroll_boundary_of(c), None);
    Ok(())
}
