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

use crate::content::{FeatureCard, FEATURE_CARDS, WHY_CHOOSE_US_INTRO};
use crate::sections::SectionId;

#[component]
pub fn WhyChooseUs(section_ref: NodeRef<html::Section>) -> impl IntoView {
    view! {
        <section id=SectionId::WhyChooseUs.anchor() node_ref=section_ref class="py-16 bg-gray-50">
            <div class="container mx-auto px-4">
                <div class="text-center mb-12 animate-fade-in-up">
                    <h2 class="text-3xl font-bold text-gray-800 mb-3">"Why Choose Us?"</h2>
                    <p class="text-gray-600 max-w-2xl mx-auto">{WHY_CHOOSE_US_INTRO}</p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {FEATURE_CARDS.iter().map(|card| view! { <Card card=card /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Card(card: &'static FeatureCard) -> impl IntoView {
    let (before, highlight, after) = card.description_parts();

    view! {
        <div class="bg-white p-6 rounded-lg shadow-md hover:-translate-y-2 transition-transform duration-300">
            <div class="flex justify-center mb-4">
                <img
                    src=card.image.src()
                    alt=card.image.alt
                    width=card.image.width.to_string()
                    height=card.image.height.to_string()
                    class="h-20 w-20 object-contain"
                />
            </div>
            <h3 class="text-xl font-semibold text-gray-800 mb-3">{card.title}</h3>
            <p class="text-gray-600">
                {before}
                {highlight.map(|h| view! { <span class="text-amber-500 font-semibold">{h}</span> })}
                {after}
            </p>
        </div>
    }
}
