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

use crate::content::Promo;

/// An image beside a block of copy. The image comes first in the markup and
/// sits on the left unless `reverse` is set.
#[component]
pub fn PromoSection(
    promo: &'static Promo,
    children: Children,
    #[prop(optional)] reverse: bool,
    #[prop(optional)] tinted: bool,
    #[prop(optional)] id: Option<&'static str>,
    #[prop(optional)] section_ref: Option<NodeRef<html::Section>>,
) -> impl IntoView {
    let section_ref = section_ref.unwrap_or_else(NodeRef::new);
    let section_class = if tinted { "py-16 bg-amber-50" } else { "py-16" };
    let row_class = if reverse {
        "flex flex-col md:flex-row-reverse items-center gap-8"
    } else {
        "flex flex-col md:flex-row items-center gap-8"
    };

    view! {
        <section id=id node_ref=section_ref class=section_class>
            <div class="container mx-auto px-4">
                <div class=row_class>
                    <div class="md:w-5/12 animate-fade-in">
                        <div class="relative h-64 md:h-96 w-full">
                            <img
                                src=promo.image.src()
                                alt=promo.image.alt
                                class="absolute inset-0 h-full w-full object-contain"
                            />
                        </div>
                    </div>

                    <div class="md:w-7/12 animate-fade-in-up">
                        <h2 class="text-2xl md:text-3xl font-bold text-gray-800 mb-4">{promo.title}</h2>
                        <p class="text-gray-600 mb-6">{promo.body}</p>
                        {children()}
                    </div>
                </div>
            </div>
        </section>
    }
}
