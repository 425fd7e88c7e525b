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

#![allow(non_snake_case)]

pub mod app;
pub mod components;
pub mod config;
pub mod content;
pub mod errors;
pub mod logging;
pub mod pages;
pub mod sections;
pub mod state;
pub mod tracker;

use app::App;
use config::SiteConfig;
use leptos::prelude::*;

/// Installs panic and log hooks, then renders the page into `<body>`.
pub fn mount() {
    console_error_panic_hook::set_once();

    let (config, rejected) = SiteConfig::from_build_env();
    if let Err(e) = logging::init(config.log_level) {
        leptos::logging::error!("{e}");
    }
    for e in rejected {
        log::warn!("{e}, using the default");
    }

    log::info!("mounting {}", content::BRAND);
    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
