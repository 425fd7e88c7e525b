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

use crate::components::sections::Promo::*;
use crate::components::CTAButton::*;
use crate::content::{DELIVERY_AND_PAYMENT, PAYMENT_METHODS};
use crate::sections::SectionId;

#[component]
pub fn DeliveryPayment(section_ref: NodeRef<html::Section>) -> impl IntoView {
    view! {
        <PromoSection
            promo={&DELIVERY_AND_PAYMENT}
            reverse=true
            id=SectionId::DeliveryAndPayment.anchor()
            section_ref=section_ref
        >
            <CTAButton class="mb-4">{DELIVERY_AND_PAYMENT.action}</CTAButton>
            <div class="flex gap-4 mt-4">
                {PAYMENT_METHODS
                    .iter()
                    .map(|method| {
                        view! {
                            <div class="hover:-translate-y-1 transition-transform duration-200">
                                <img
                                    src=method.src()
                                    alt=method.alt
                                    width=method.width.to_string()
                                    height=method.height.to_string()
                                    class="h-10 w-auto object-contain"
                                />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </PromoSection>
    }
}
