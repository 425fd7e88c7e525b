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

use crate::components::sections::Promo::*;
use crate::components::CTAButton::*;
use crate::content::THANK_YOU;
use crate::state::GiftModalOpen;

#[component]
pub fn ThankYou() -> impl IntoView {
    let modal = GiftModalOpen::expect();

    view! {
        <PromoSection promo={&THANK_YOU} reverse=true tinted=true>
            <CTAButton on:click=move |_| modal.open()>{THANK_YOU.action}</CTAButton>
        </PromoSection>
    }
}
