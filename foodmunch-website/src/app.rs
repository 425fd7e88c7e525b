/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use crate::config::SiteConfig;
use crate::content::{StructuredData, BRAND, CONTACT_ADDRESS, HERO};
use crate::pages::Home::*;
use leptos::prelude::*;
use leptos_meta::*;

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    let formatter = |text: String| format!("{text} - {BRAND}");
    provide_meta_context();
    provide_context(config);

    let description = format!("{}. {}. Fresh food delivered from {CONTACT_ADDRESS}", HERO.title, HERO.tagline);
    let json_ld = match StructuredData::restaurant().to_json() {
        Ok(json) => json,
        Err(e) => {
            log::warn!("couldn't serialize structured data: {e}");
            String::new()
        }
    };

    view! {
        <Title formatter=formatter />
        <Meta name="description" content=description.clone() />
        <Meta name="keywords" content="food delivery, online food order, healthy food, offers, food munch" />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:site_name" content=BRAND />
        <Meta property="og:title" content=format!("{BRAND} - {}", HERO.title) />
        <Meta property="og:description" content=description />

        <Home />
        <script type="application/ld+json">{json_ld}</script>
    }
}
