// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Renders the full landing page and checks the wiring between scrolling,
// the nav links and the two UI flags.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use foodmunch_website::app::App;
use foodmunch_website::config::SiteConfig;
use foodmunch_website::sections::SectionId;
use leptos::prelude::*;
use support::{cleanup, create_mount_point, dispatch_scroll, scroll_into, settle};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn nav_link(mount: &web_sys::Element, id: SectionId) -> web_sys::Element {
    mount
        .query_selector(&format!("nav a[href='{}']", id.href()))
        .unwrap()
        .unwrap_or_else(|| panic!("nav link for {id} missing"))
}

fn button_with_text(mount: &web_sys::Element, text: &str) -> web_sys::HtmlElement {
    let buttons = mount.query_selector_all("button").unwrap();
    (0..buttons.length())
        .filter_map(|i| buttons.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .find(|button| button.text_content().unwrap_or_default().trim() == text)
        .unwrap_or_else(|| panic!("no button labelled {text:?}"))
}

#[wasm_bindgen_test]
async fn renders_every_tracked_section_and_nav_link() {
    let mount = create_mount_point();
    let handle = leptos::mount::mount_to(mount.clone().unchecked_into(), || {
        view! { <App config=SiteConfig::default() /> }
    });

    for id in SectionId::ALL {
        assert!(
            gloo_utils::document().get_element_by_id(id.anchor()).is_some(),
            "section #{id} missing"
        );
        assert_eq!(nav_link(&mount, id).text_content().as_deref(), Some(id.label()));
    }

    let text = mount.text_content().unwrap_or_default();
    assert!(text.contains("Get Delicious Food Anytime"), "hero missing");
    assert!(text.contains("50% OFF"), "best offers highlight missing");
    assert!(text.contains("foodmunch@email.com"), "footer missing");

    drop(handle);
    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn scrolling_highlights_the_matching_nav_link() {
    let mount = create_mount_point();
    let handle = leptos::mount::mount_to(mount.clone().unchecked_into(), || {
        view! { <App config=SiteConfig::default() /> }
    });

    for id in SectionId::ALL {
        assert!(!nav_link(&mount, id).class_name().ends_with(" text-amber-500"));
    }

    let explore = gloo_utils::document()
        .get_element_by_id(SectionId::ExploreMenu.anchor())
        .unwrap();
    scroll_into(&explore, 10.0, 100.0);
    dispatch_scroll();
    settle().await;

    assert!(nav_link(&mount, SectionId::ExploreMenu)
        .class_name()
        .ends_with(" text-amber-500"));
    assert!(nav_link(&mount, SectionId::WhyChooseUs)
        .class_name()
        .contains("text-gray-700"));

    drop(handle);
    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn unmounting_stops_section_tracking() {
    let mount = create_mount_point();
    let handle = leptos::mount::mount_to(mount.clone().unchecked_into(), || {
        view! { <App config=SiteConfig::default() /> }
    });

    let explore = gloo_utils::document()
        .get_element_by_id(SectionId::ExploreMenu.anchor())
        .unwrap();
    scroll_into(&explore, 10.0, 100.0);
    dispatch_scroll();
    settle().await;
    assert!(nav_link(&mount, SectionId::ExploreMenu)
        .class_name()
        .ends_with(" text-amber-500"));

    let follow_us = gloo_utils::document()
        .get_element_by_id(SectionId::FollowUs.anchor())
        .unwrap();
    drop(handle);
    settle().await;

    assert!(mount.query_selector("nav").unwrap().is_none());
    for id in SectionId::ALL {
        assert!(gloo_utils::document().get_element_by_id(id.anchor()).is_none());
    }

    // The detached element still reports a rect; nothing may act on it.
    scroll_into(&follow_us, 10.0, 100.0);
    dispatch_scroll();
    settle().await;
    assert!(mount.query_selector("nav").unwrap().is_none());
    assert_eq!(mount.child_element_count(), 0);

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn gift_modal_opens_and_closes() {
    let mount = create_mount_point();
    let handle = leptos::mount::mount_to(mount.clone().unchecked_into(), || {
        view! { <App config=SiteConfig::default() /> }
    });

    assert!(mount.query_selector("[role='dialog']").unwrap().is_none());

    button_with_text(&mount, "Redeem Gift").click();
    settle().await;
    assert!(mount.query_selector("[role='dialog']").unwrap().is_some());

    button_with_text(&mount, "Close").click();
    settle().await;
    assert!(mount.query_selector("[role='dialog']").unwrap().is_none());

    drop(handle);
    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn mobile_menu_toggles_and_closes_on_navigation() {
    let mount = create_mount_point();
    let handle = leptos::mount::mount_to(mount.clone().unchecked_into(), || {
        view! { <App config=SiteConfig::default() /> }
    });

    let links = |mount: &web_sys::Element| {
        mount
            .query_selector_all(&format!("nav a[href='{}']", SectionId::FollowUs.href()))
            .unwrap()
            .length()
    };
    assert_eq!(links(&mount), 1);

    let toggle = mount
        .query_selector("button[aria-label='Toggle navigation menu']")
        .unwrap()
        .unwrap()
        .unchecked_into::<web_sys::HtmlElement>();
    toggle.click();
    settle().await;
    assert_eq!(links(&mount), 2, "mobile menu should repeat the nav links");

    let mobile_link = mount
        .query_selector_all(&format!("nav a[href='{}']", SectionId::FollowUs.href()))
        .unwrap()
        .item(1)
        .unwrap()
        .unchecked_into::<web_sys::HtmlElement>();
    mobile_link.click();
    settle().await;
    assert_eq!(links(&mount), 1, "following a link closes the menu");

    drop(handle);
    cleanup(&mount);
}
