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

use leptos::prelude::*;

use crate::content::{CONTACT_ADDRESS, CONTACT_EMAIL, LOGO};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 bg-gray-800 text-white">
            <div class="container mx-auto px-4 text-center">
                <img
                    src=LOGO.src()
                    alt=LOGO.alt
                    width=LOGO.width.to_string()
                    height=LOGO.height.to_string()
                    class="h-10 w-auto mx-auto mb-4"
                />
                <p class="text-lg mb-2">
                    <a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
                </p>
                <p class="text-gray-400">{CONTACT_ADDRESS}</p>
            </div>
        </footer>
    }
}
