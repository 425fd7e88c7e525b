// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared harness for the browser tests.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use std::time::Duration;

use gloo_timers::future::sleep;

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
    gloo_utils::window().scroll_to_with_x_and_y(0.0, 0.0);
}

/// Append a block of fixed height to `parent`.
pub fn block(parent: &web_sys::Element, tag: &str, height_px: u32) -> web_sys::Element {
    let el = gloo_utils::document().create_element(tag).unwrap();
    el.set_attribute(
        "style",
        &format!("display: block; margin: 0; padding: 0; height: {height_px}px;"),
    )
    .unwrap();
    parent.append_child(&el).unwrap();
    el
}

/// Top edge of `el` in page coordinates.
pub fn page_top(el: &web_sys::Element) -> f64 {
    let scroll_y = gloo_utils::window().scroll_y().unwrap_or_default();
    el.get_bounding_client_rect().top() + scroll_y
}

/// Scroll so that the point `depth` pixels into `el` sits `offset` pixels
/// below the viewport top.
pub fn scroll_into(el: &web_sys::Element, depth: f64, offset: f64) {
    let target = page_top(el) + depth - offset;
    gloo_utils::window().scroll_to_with_x_and_y(0.0, target);
}

/// Fire a synthetic `scroll` event on the window.
pub fn dispatch_scroll() {
    let event = web_sys::Event::new("scroll").unwrap();
    gloo_utils::window().dispatch_event(&event).unwrap();
}

/// Let pending reactive updates reach the DOM.
pub async fn settle() {
    sleep(Duration::ZERO).await;
}
