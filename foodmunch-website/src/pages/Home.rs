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

use crate::components::sections::DeliveryPayment::*;
use crate::components::sections::ExploreMenu::*;
use crate::components::sections::FollowUs::*;
use crate::components::sections::HealthyFood::*;
use crate::components::sections::ThankYou::*;
use crate::components::sections::WhyChooseUs::*;
use crate::components::Banner::*;
use crate::components::GiftModal::*;
use crate::components::NavBar::*;
use crate::components::Page::*;
use crate::config::SiteConfig;
use crate::state::{GiftModalOpen, MobileMenuOpen};
use crate::tracker::{use_active_section, SectionRefs};
use leptos::prelude::*;
use leptos_meta::*;

#[component]
pub fn Home() -> impl IntoView {
    let config = use_context::<SiteConfig>().unwrap_or_default();
    MobileMenuOpen::provide();
    GiftModalOpen::provide();

    let refs = SectionRefs::new();
    let active = use_active_section(refs, config.nav_offset_px);

    view! {
        <Title text="Home" />
        <Page>
            <NavBar active=active />
            <Banner />
            <WhyChooseUs section_ref=refs.why_choose_us />
            <ExploreMenu section_ref=refs.explore_menu />
            <HealthyFood />
            <DeliveryPayment section_ref=refs.delivery_and_payment />
            <ThankYou />
            <GiftModal />
            <FollowUs section_ref=refs.follow_us />
        </Page>
    }
}
