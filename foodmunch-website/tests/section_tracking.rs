// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Drives the tracker against real layout in a browser: sections are plain
// blocks of known height and the window is actually scrolled.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use foodmunch_website::sections::SectionId;
use foodmunch_website::tracker::ActiveSectionTracker;
use support::{block, cleanup, create_mount_point, scroll_into};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

const OFFSET: f64 = 100.0;

/// A tall spacer, the four sections, then enough trailing room to scroll
/// every section under the reference point.
fn layout(mount: &web_sys::Element) -> Vec<(SectionId, web_sys::Element)> {
    block(mount, "div", 2000);
    let sections = SectionId::ALL
        .into_iter()
        .map(|id| (id, block(mount, "section", 600)))
        .collect();
    block(mount, "div", 4000);
    sections
}

fn tracker(sections: &[(SectionId, web_sys::Element)]) -> ActiveSectionTracker<web_sys::Element> {
    sections
        .iter()
        .cloned()
        .fold(ActiveSectionTracker::new(OFFSET), |tracker, (id, el)| {
            tracker.with_region(id, el)
        })
}

#[wasm_bindgen_test]
fn nothing_is_active_at_the_top_of_the_page() {
    let mount = create_mount_point();
    let sections = layout(&mount);
    let mut tracker = tracker(&sections);

    gloo_utils::window().scroll_to_with_x_and_y(0.0, 0.0);
    assert_eq!(tracker.on_scroll(), None);

    cleanup(&mount);
}

#[wasm_bindgen_test]
fn follows_the_section_under_the_reference_point() {
    let mount = create_mount_point();
    let sections = layout(&mount);
    let mut tracker = tracker(&sections);

    for (id, el) in &sections {
        scroll_into(el, 300.0, OFFSET);
        assert_eq!(tracker.on_scroll(), Some(*id), "scrolled into {id}");
    }

    cleanup(&mount);
}

#[wasm_bindgen_test]
fn keeps_the_last_section_once_scrolled_past_it() {
    let mount = create_mount_point();
    let sections = layout(&mount);
    let mut tracker = tracker(&sections);

    let (last, el) = &sections[sections.len() - 1];
    scroll_into(el, 300.0, OFFSET);
    assert_eq!(tracker.on_scroll(), Some(*last));

    // 1000px past the top of the last section lands in the trailing spacer.
    scroll_into(el, 1000.0, OFFSET);
    assert_eq!(tracker.locate(), None);
    assert_eq!(tracker.on_scroll(), Some(*last));

    cleanup(&mount);
}
