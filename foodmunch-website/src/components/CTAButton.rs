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

#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    /// Filled amber, the default call to action.
    Solid,
    /// Amber outline on a transparent background.
    Outline,
    /// Grey, used for dismiss actions.
    Muted,
}

impl ButtonVariant {
    pub fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Solid => "px-6 py-3 bg-amber-500 text-white font-medium rounded-full shadow-md hover:bg-amber-600 hover:scale-105 active:scale-95 transition duration-300",
            ButtonVariant::Outline => "px-6 py-3 border-2 border-amber-500 text-amber-500 font-medium rounded-full hover:bg-amber-50 hover:scale-105 active:scale-95 transition duration-300",
            ButtonVariant::Muted => "px-4 py-2 bg-gray-200 text-gray-800 rounded hover:bg-gray-300 transition-colors",
        }
    }
}

#[component]
pub fn CTAButton(
    children: Children,
    #[prop(default = ButtonVariant::Solid)] variant: ButtonVariant,
    #[prop(into, default = String::new())] class: String,
) -> impl IntoView {
    let combined_class = format!("{} {}", variant.classes(), class);

    // Click handlers are attached by callers with `on:click` on the component.
    view! { <button class=combined_class>{children()}</button> }
}
