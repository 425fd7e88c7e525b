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

use leptos::html;
use leptos::prelude::*;

use crate::components::Icons::*;
use crate::content::{menu_image, MENU_CATEGORIES};
use crate::sections::SectionId;

#[component]
pub fn ExploreMenu(section_ref: NodeRef<html::Section>) -> impl IntoView {
    view! {
        <section id=SectionId::ExploreMenu.anchor() node_ref=section_ref class="py-16">
            <div class="container mx-auto px-4">
                <div class="text-center mb-12 animate-fade-in-up">
                    <h2 class="text-3xl font-bold text-gray-800 mb-3">"Explore Menu"</h2>
                </div>

                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                    {MENU_CATEGORIES
                        .into_iter()
                        .map(|category| view! { <MenuCard category=category /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn MenuCard(category: &'static str) -> impl IntoView {
    let image = menu_image(category);

    view! {
        <div class="bg-white rounded-lg shadow-md overflow-hidden hover:-translate-y-1 hover:scale-[1.03] transition-transform duration-300">
            <div class="relative h-48">
                <img src=image.src() alt=image.alt class="absolute inset-0 h-full w-full object-cover" />
            </div>
            <div class="p-4">
                <h3 class="text-lg font-semibold text-gray-800 mb-2">{category}</h3>
                <a href="#" class="group inline-flex items-center text-amber-500 hover:text-amber-600 font-medium">
                    "View All"
                    <span class="transition-transform duration-300 group-hover:translate-x-1">
                        <ArrowRightIcon />
                    </span>
                </a>
            </div>
        </div>
    }
}
