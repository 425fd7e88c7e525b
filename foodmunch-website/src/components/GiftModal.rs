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
use crate::components::Icons::*;
use crate::content::GIFT_VOUCHER;
use crate::state::GiftModalOpen;

#[component]
pub fn GiftModal() -> impl IntoView {
    let modal = GiftModalOpen::expect();

    let dialog = move || {
        modal.is_open().then(|| {
            view! {
                // Clicking the backdrop closes the dialog, clicks inside it don't.
                <div
                    class="fixed inset-0 bg-black bg-opacity-50 z-50 flex items-center justify-center p-4 animate-fade-in"
                    on:click=move |_| modal.close()
                >
                    <div
                        class="bg-white rounded-lg shadow-xl max-w-md w-full overflow-hidden animate-zoom-in"
                        role="dialog"
                        aria-modal="true"
                        on:click=|ev| ev.stop_propagation()
                    >
                        <div class="flex justify-between items-center p-4 border-b">
                            <h3 class="text-xl font-semibold text-gray-800">"Gift Voucher"</h3>
                            <button
                                class="text-gray-500 hover:text-gray-700"
                                aria-label="Close"
                                on:click=move |_| modal.close()
                            >
                                <CloseIcon />
                            </button>
                        </div>
                        <div class="p-4">
                            <img
                                src=GIFT_VOUCHER.src()
                                alt=GIFT_VOUCHER.alt
                                width=GIFT_VOUCHER.width.to_string()
                                height=GIFT_VOUCHER.height.to_string()
                                class="w-full h-auto"
                            />
                        </div>
                        <div class="p-4 border-t flex justify-end">
                            <CTAButton variant=ButtonVariant::Muted on:click=move |_| modal.close()>
                                "Close"
                            </CTAButton>
                        </div>
                    </div>
                </div>
            }
        })
    };

    view! { {dialog} }
}
