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
use crate::content::Social;
use crate::sections::SectionId;

#[component]
pub fn FollowUs(section_ref: NodeRef<html::Section>) -> impl IntoView {
    view! {
        <section id=SectionId::FollowUs.anchor() node_ref=section_ref class="py-16">
            <div class="container mx-auto px-4">
                <div class="text-center mb-8 animate-fade-in-up">
                    <h2 class="text-3xl font-bold text-gray-800">"Follow Us"</h2>
                </div>

                <div class="flex justify-center gap-6">
                    {Social::ALL
                        .into_iter()
                        .map(|social| {
                            view! {
                                <a
                                    href="#"
                                    aria-label=social.name()
                                    class=format!(
                                        "{} text-white p-4 rounded-full flex items-center justify-center shadow-md hover:-translate-y-1 hover:scale-110 transition-transform duration-300",
                                        social.color(),
                                    )
                                >
                                    <SocialIcon social=social />
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
