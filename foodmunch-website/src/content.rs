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

//! Static copy and placeholder imagery for the landing page.

use serde::Serialize;

pub const BRAND: &str = "Food Munch";
pub const LOGO: Image = Image::placeholder(40, 120, "Food Munch Logo");

pub const CONTACT_EMAIL: &str = "foodmunch@email.com";
pub const CONTACT_ADDRESS: &str = "Chandigarh University Mohali, Punjab, India.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Image {
    pub height: u32,
    pub width: u32,
    pub alt: &'static str,
}

impl Image {
    pub const fn placeholder(height: u32, width: u32, alt: &'static str) -> Self {
        Self { height, width, alt }
    }

    pub fn src(&self) -> String {
        format!("/placeholder.svg?height={}&width={}", self.height, self.width)
    }
}

pub struct Hero {
    pub title: &'static str,
    pub tagline: &'static str,
    pub background: Image,
}

pub const HERO: Hero = Hero {
    title: "Get Delicious Food Anytime",
    tagline: "Eat Smart & Healthy",
    background: Image::placeholder(800, 1600, ""),
};

pub const WHY_CHOOSE_US_INTRO: &str =
    "We use both original recipes and classic versions of famous food items.";

/// A feature card; `highlight` is a phrase in the description rendered with emphasis.
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
    pub highlight: Option<&'static str>,
    pub image: Image,
}

impl FeatureCard {
    /// Splits the description around the first occurrence of the highlight.
    pub fn description_parts(&self) -> (&'static str, Option<&'static str>, &'static str) {
        let description = self.description;
        match self
            .highlight
            .and_then(|h| description.find(h).map(|at| (h, at)))
        {
            Some((h, at)) => (&description[..at], Some(h), &description[at + h.len()..]),
            None => (description, None, ""),
        }
    }
}

pub static FEATURE_CARDS: [FeatureCard; 3] = [
    FeatureCard {
        title: "Food Service",
        description: "Experience fine dining at the comfort of your home. All our orders are carefully packed and arranged to give you the nothing less than perfect.",
        highlight: None,
        image: Image::placeholder(80, 80, "Food Service"),
    },
    FeatureCard {
        title: "Fresh Food",
        description: "The Fresh Food group provides fresh-cut fruits and vegetables directly picked from our partner farms and farm houses so that you always get them tree to plate.",
        highlight: None,
        image: Image::placeholder(80, 80, "Fresh Food"),
    },
    FeatureCard {
        title: "Best Offers",
        description: "Food Coupons & Offers upto 50% OFF and Exclusive Promo Codes on All Online Food Orders.",
        highlight: Some("50% OFF"),
        image: Image::placeholder(80, 80, "Best Offers"),
    },
];

pub const MENU_CATEGORIES: [&str; 8] = [
    "Non-Veg Starters",
    "Veg Starters",
    "Soups",
    "Fish & Sea food",
    "Main Course",
    "Noodles",
    "Salads",
    "Desserts",
];

pub fn menu_image(category: &'static str) -> Image {
    Image::placeholder(200, 300, category)
}

/// One of the alternating image/text promos.
pub struct Promo {
    pub title: &'static str,
    pub body: &'static str,
    pub action: &'static str,
    pub image: Image,
}

pub static HEALTHY_FOOD: Promo = Promo {
    title: "Fresh, Healthy, Organic, Delicious Fruits",
    body: "Say no to harmful chemicals and go fully organic with our range of fresh fruits and veggies. Pamper your body and your senses with the true and unadulterated gifts from mother nature. with the true and unadulterated gifts from mother nature.",
    action: "Watch Video",
    image: Image::placeholder(400, 400, "Healthy Food Plate"),
};

pub static DELIVERY_AND_PAYMENT: Promo = Promo {
    title: "Delivery and Payment",
    body: "Enjoy hassle-free payment with the plenitude of payment options available for you. Get live tracking and locate your food on a live map. It's quite a sight to see your food arrive to your door. Plus, you get a 5% discount on every order every time you pay online.",
    action: "Order Now",
    image: Image::placeholder(400, 400, "Delivery and Payment"),
};

pub static THANK_YOU: Promo = Promo {
    title: "Thank you for being a valuable customer to us.",
    body: "We have a surprise gift for you",
    action: "Redeem Gift",
    image: Image::placeholder(400, 400, "Thank You"),
};

pub static PAYMENT_METHODS: [Image; 3] = [
    Image::placeholder(40, 60, "Payment Method 1"),
    Image::placeholder(40, 60, "Payment Method 2"),
    Image::placeholder(40, 60, "Payment Method 3"),
];

pub const GIFT_VOUCHER: Image = Image::placeholder(300, 500, "Gift Voucher");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Social {
    Twitter,
    Instagram,
    Facebook,
}

impl Social {
    pub const ALL: [Social; 3] = [Social::Twitter, Social::Instagram, Social::Facebook];

    pub const fn name(self) -> &'static str {
        match self {
            Social::Twitter => "Twitter",
            Social::Instagram => "Instagram",
            Social::Facebook => "Facebook",
        }
    }

    /// Tailwind background class of the round button.
    pub const fn color(self) -> &'static str {
        match self {
            Social::Twitter => "bg-blue-400",
            Social::Instagram => "bg-pink-500",
            Social::Facebook => "bg-blue-600",
        }
    }
}

/// schema.org `Restaurant` markup for the document head.
#[derive(Serialize)]
pub struct StructuredData {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub kind: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub email: &'static str,
    pub address: &'static str,
    #[serde(rename = "servesCuisine")]
    pub serves_cuisine: Vec<&'static str>,
}

impl StructuredData {
    pub fn restaurant() -> Self {
        Self {
            context: "https://schema.org",
            kind: "Restaurant",
            name: BRAND,
            description: HERO.title,
            email: CONTACT_EMAIL,
            address: CONTACT_ADDRESS,
            serves_cuisine: MENU_CATEGORIES.to_vec(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
