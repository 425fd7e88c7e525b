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

pub mod Banner;
pub mod CTAButton;
pub mod Footer;
pub mod GiftModal;
pub mod Icons;
pub mod NavBar;
pub mod Page;

// Section components
pub mod sections {
    pub mod DeliveryPayment;
    pub mod ExploreMenu;
    pub mod FollowUs;
    pub mod HealthyFood;
    pub mod Promo;
    pub mod ThankYou;
    pub mod WhyChooseUs;
}

pub use Banner::*;
pub use CTAButton::*;
pub use Footer::*;
pub use GiftModal::*;
pub use NavBar::*;
pub use Page::*;
