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

use crate::components::Icons::*;
use crate::content::LOGO;
use crate::sections::SectionId;
use crate::state::MobileMenuOpen;

pub fn desktop_link_class(is_active: bool) -> &'static str {
    if is_active {
        "text-sm font-medium transition-colors duration-200 text-amber-500"
    } else {
        "text-sm font-medium transition-colors duration-200 text-gray-700 hover:text-amber-500"
    }
}

pub fn mobile_link_class(is_active: bool) -> &'static str {
    if is_active {
        "block text-sm font-medium text-amber-500"
    } else {
        "block text-sm font-medium text-gray-700"
    }
}

#[component]
pub fn NavBar(active: ReadSignal<Option<SectionId>>) -> impl IntoView {
    view! {
        <nav class="bg-white shadow-md fixed top-0 left-0 right-0 z-50">
            <div class="container mx-auto px-4 py-3 flex items-center justify-between">
                <a href="/" class="flex items-center animate-slide-in">
                    <img
                        src=LOGO.src()
                        alt=LOGO.alt
                        width=LOGO.width.to_string()
                        height=LOGO.height.to_string()
                        class="h-10 w-auto"
                    />
                </a>

                <div class="hidden md:flex space-x-6">
                    {SectionId::ALL
                        .into_iter()
                        .map(|id| view! { <NavLink id=id active=active /> })
                        .collect_view()}
                </div>

                <MobileMenuButton />
            </div>

            <MobileMenu active=active />
        </nav>
    }
}

#[component]
fn NavLink(id: SectionId, active: ReadSignal<Option<SectionId>>) -> impl IntoView {
    view! {
        <a href=id.href() class=move || desktop_link_class(active.get() == Some(id))>
            {id.label()}
        </a>
    }
}

#[component]
fn MobileMenuButton() -> impl IntoView {
    let menu = MobileMenuOpen::expect();

    view! {
        <button
            class="md:hidden text-gray-700"
            aria-label="Toggle navigation menu"
            on:click=move |_| menu.toggle()
        >
            {move || if menu.is_open() { view! { <CloseIcon /> }.into_any() } else { view! { <MenuIcon /> }.into_any() }}
        </button>
    }
}

#[component]
fn MobileMenu(active: ReadSignal<Option<SectionId>>) -> impl IntoView {
    let menu = MobileMenuOpen::expect();

    let panel = move || {
        menu.is_open().then(|| {
            view! {
                <div class="md:hidden bg-white animate-expand">
                    <div class="px-4 py-2 space-y-3">
                        {SectionId::ALL
                            .into_iter()
                            .map(|id| {
                                view! {
                                    <a
                                        href=id.href()
                                        class=move || mobile_link_class(active.get() == Some(id))
                                        on:click=move |_| menu.close()
                                    >
                                        {id.label()}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            }
        })
    };

    view! { {panel} }
}
