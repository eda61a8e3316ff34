//! End-to-end carousel behavior: navigation, resizes, item list swaps
//! and action dispatch.

use super::*;
use crate::types::Product;

fn products(n: usize) -> Vec<Product> {
    (1..=n)
        .map(|i| Product {
            id: format!("p{i}"),
            name: format!("Product {i}"),
            price: None,
            image: format!("/img/p{i}.png"),
        })
        .collect()
}

fn visible_ids(carousel: &FeaturedCarousel<Product>) -> Vec<&str> {
    carousel.visible().iter().map(|p| p.id.as_str()).collect()
}

#[test]
fn test_ten_items_four_per_page_walkthrough() {
    let mut carousel = FeaturedCarousel::new(products(10));
    carousel.set_page_size(PageSize::Four);

    let sizes: Vec<usize> = carousel.pages().iter().map(|p| p.len()).collect();
    assert_eq!(sizes, vec![4, 4, 2]);
    assert_eq!(carousel.index(), 0);

    assert!(carousel.next());
    assert_eq!(carousel.index(), 1);
    assert_eq!(visible_ids(&carousel), vec!["p5", "p6", "p7", "p8"]);

    assert!(carousel.next());
    assert_eq!(carousel.index(), 2);
    assert_eq!(visible_ids(&carousel), vec!["p9", "p10"]);

    assert!(!carousel.next());
    assert_eq!(carousel.index(), 2);
}

#[test]
fn test_empty_list_shows_empty_state() {
    let carousel: FeaturedCarousel<Product> = FeaturedCarousel::new(Vec::new());
    let view = carousel.view();

    assert!(carousel.pages().is_empty());
    assert!(view.is_empty());
    assert!(!view.show_controls());
    assert!(view.indicators().is_empty());
    assert!(!view.can_go_next && !view.can_go_previous);
    assert!(view.empty_state().is_some());
}

#[test]
fn test_navigation_on_empty_list_is_harmless() {
    let mut carousel: FeaturedCarousel<Product> = FeaturedCarousel::default();
    assert!(!carousel.next());
    assert!(!carousel.previous());
    assert_eq!(carousel.index(), 0);
    assert!(carousel.jump_to(0).is_err());
    assert!(carousel.visible().is_empty());
}

#[test]
fn test_shrinking_page_size_keeps_valid_index() {
    let mut carousel = FeaturedCarousel::new(products(5));
    carousel.set_page_size(PageSize::Four);
    carousel.next();
    assert_eq!(carousel.index(), 1);

    carousel.set_page_size(PageSize::Two);
    assert_eq!(carousel.page_count(), 3);
    assert_eq!(carousel.index(), 1);
}

#[test]
fn test_growing_page_size_reconciles_index() {
    let mut carousel = FeaturedCarousel::new(products(5));
    carousel.set_page_size(PageSize::One);
    carousel.jump_to(4).unwrap();
    assert_eq!(carousel.page_count(), 5);

    carousel.set_page_size(PageSize::Four);
    assert_eq!(carousel.page_count(), 2);
    assert_eq!(carousel.index(), 1);
    assert_eq!(visible_ids(&carousel), vec!["p5"]);
}

#[test]
fn test_resize_crossing_breakpoint_reconciles() {
    let mut carousel = FeaturedCarousel::with_width(products(8), 375);
    assert_eq!(carousel.page_size(), PageSize::One);
    carousel.jump_to(7).unwrap();

    assert!(!carousel.resize(500));
    assert!(carousel.resize(1400));
    assert_eq!(carousel.page_size(), PageSize::Four);
    assert_eq!(carousel.index(), 1);
    assert_eq!(visible_ids(&carousel), vec!["p5", "p6", "p7", "p8"]);
}

#[test]
fn test_items_arriving_after_mount() {
    let mut carousel: FeaturedCarousel<Product> = FeaturedCarousel::with_width(Vec::new(), 800);
    assert_eq!(carousel.page_count(), 0);

    carousel.set_items(products(3));
    assert_eq!(carousel.page_count(), 2);
    assert!(carousel.view().show_controls());

    carousel.next();
    carousel.set_items(products(1));
    assert_eq!(carousel.index(), 0);
    assert!(!carousel.view().show_controls());
}

#[test]
fn test_view_offsets_follow_index() {
    let mut carousel = FeaturedCarousel::with_width(products(6), 700);
    carousel.next();
    carousel.next();

    let view = carousel.view();
    assert_eq!(view.index, 2);
    assert_eq!(view.offset_px(640.0), 1280.0);
    assert!(view.can_go_previous);
    assert!(!view.can_go_next);

    let active: Vec<usize> = view
        .indicators()
        .iter()
        .filter(|d| d.active)
        .map(|d| d.index)
        .collect();
    assert_eq!(active, vec![2]);
}

#[test]
fn test_dispatch_passes_exact_item_to_sink() {
    let mut carousel = FeaturedCarousel::with_width(products(6), 1100);
    carousel.next();

    let mut received: Vec<String> = Vec::new();
    let mut sink = |p: &Product| received.push(p.id.clone());

    let item = carousel.dispatch_action("p5", &mut sink).unwrap();
    assert_eq!(item.id, "p5");
    assert_eq!(received, vec!["p5".to_string()]);
}

#[test]
fn test_dispatch_rejects_item_off_page() {
    let carousel = FeaturedCarousel::with_width(products(6), 1100);

    let mut calls = 0;
    let mut sink = |_: &Product| calls += 1;

    let err = carousel.dispatch_action("p5", &mut sink).unwrap_err();
    assert_eq!(err, CoreError::ItemNotVisible("p5".to_string()));
    assert_eq!(calls, 0);
}

#[test]
fn test_snapshot_carries_visible_products() {
    let mut carousel = FeaturedCarousel::with_width(products(3), 700);
    carousel.next();

    let snap = carousel.view().to_snapshot(Some(700.0));
    assert_eq!(snap.items.len(), 1);
    assert_eq!(snap.items[0].id, "p3");
    assert_eq!(snap.offset_px, Some(700.0));
    assert!(snap.empty_state.is_none());
}
