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

//! The fixed, ordered catalogue of page sections tracked by the navigation.
//!
//! Besides the anchors and labels the page renders, the catalogue parses an
//! anchor or `#fragment` back into a [`SectionId`] through [`FromStr`], for
//! callers that start from a URL fragment or a link's `href`.

use std::fmt;
use std::str::FromStr;

use crate::errors::SectionError;

/// A named, anchorable region of the landing page.
///
/// Variants are declared in page order and the derived `Ord` follows that
/// order, so the tracker can rely on it for its first-match scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionId {
    WhyChooseUs,
    ExploreMenu,
    DeliveryAndPayment,
    FollowUs,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::WhyChooseUs,
        SectionId::ExploreMenu,
        SectionId::DeliveryAndPayment,
        SectionId::FollowUs,
    ];

    /// The DOM id of the section element.
    pub const fn anchor(self) -> &'static str {
        match self {
            SectionId::WhyChooseUs => "wcuSection",
            SectionId::ExploreMenu => "exploreMenuSection",
            SectionId::DeliveryAndPayment => "deliveryPaymentSection",
            SectionId::FollowUs => "followUsSection",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            SectionId::WhyChooseUs => "Why Choose Us?",
            SectionId::ExploreMenu => "Explore Menu",
            SectionId::DeliveryAndPayment => "Delivery & Payment",
            SectionId::FollowUs => "Follow Us",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

impl FromStr for SectionId {
    type Err = SectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let anchor = s.strip_prefix('#').unwrap_or(s);
        SectionId::ALL
            .into_iter()
            .find(|id| id.anchor() == anchor)
            .ok_or_else(|| SectionError::Unknown(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_order_matches_page_order() {
        let mut sorted = SectionId::ALL;
        sorted.sort();
        assert_eq!(sorted, SectionId::ALL);
        assert!(SectionId::WhyChooseUs < SectionId::FollowUs);
    }

    #[test]
    fn anchors_match_nav_targets() {
        let anchors: Vec<_> = SectionId::ALL.iter().map(|id| id.anchor()).collect();
        assert_eq!(
            anchors,
            vec![
                "wcuSection",
                "exploreMenuSection",
                "deliveryPaymentSection",
                "followUsSection"
            ]
        );
        assert_eq!(SectionId::DeliveryAndPayment.href(), "#deliveryPaymentSection");
        assert_eq!(SectionId::ExploreMenu.to_string(), "exploreMenuSection");
    }

    #[test]
    fn parses_anchor_with_or_without_hash() {
        assert_eq!(
            "followUsSection".parse::<SectionId>().ok(),
            Some(SectionId::FollowUs)
        );
        assert_eq!(
            "#wcuSection".parse::<SectionId>().ok(),
            Some(SectionId::WhyChooseUs)
        );
    }

    #[test]
    fn unknown_anchor_is_an_error() {
        let err = "pricing".parse::<SectionId>().unwrap_err();
        assert_eq!(err, SectionError::Unknown("pricing".to_string()));
    }
}
