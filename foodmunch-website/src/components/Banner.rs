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

use crate::components::CTAButton::*;
use crate::content::HERO;

#[component]
pub fn Banner() -> impl IntoView {
    let background = format!("background-image: url('{}');", HERO.background.src());

    view! {
        <div
            class="pt-24 pb-16 md:pt-32 md:pb-24 bg-gradient-to-r from-amber-50 to-orange-50 bg-cover bg-center bg-blend-overlay animate-fade-in-up"
            style=background
        >
            <div class="container mx-auto px-4 text-center">
                <h1 class="text-3xl md:text-5xl font-bold text-gray-800 mb-3">{HERO.title}</h1>
                <p class="text-lg md:text-xl text-gray-600 mb-8">{HERO.tagline}</p>
                <div class="flex flex-col sm:flex-row justify-center gap-4">
                    <CTAButton>"View Menu"</CTAButton>
                    <CTAButton variant=ButtonVariant::Outline>"Order Now"</CTAButton>
                </div>
            </div>
        </div>
    }
}
