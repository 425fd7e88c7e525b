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

//! Boolean UI flags shared through context.
//!
//! Each flag gets its own newtype so the two `RwSignal<bool>`s don't shadow
//! each other in the context map.

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct MobileMenuOpen(pub RwSignal<bool>);

#[derive(Clone, Copy)]
pub struct GiftModalOpen(pub RwSignal<bool>);

macro_rules! flag_impl {
    ($flag:ident) => {
        impl $flag {
            pub fn new() -> Self {
                Self(RwSignal::new(false))
            }

            pub fn provide() -> Self {
                let flag = Self::new();
                provide_context(flag);
                flag
            }

            pub fn expect() -> Self {
                expect_context::<Self>()
            }

            pub fn is_open(&self) -> bool {
                self.0.get()
            }

            pub fn open(&self) {
                self.0.set(true);
            }

            pub fn close(&self) {
                self.0.set(false);
            }

            pub fn toggle(&self) {
                self.0.update(|open| *open = !*open);
            }
        }

        impl Default for $flag {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

flag_impl!(MobileMenuOpen);
flag_impl!(GiftModalOpen);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_start_closed_and_flip() {
        let owner = Owner::new();
        owner.with(|| {
            let menu = MobileMenuOpen::new();
            assert!(!menu.0.get_untracked());
            menu.toggle();
            assert!(menu.0.get_untracked());
            menu.toggle();
            assert!(!menu.0.get_untracked());

            let modal = GiftModalOpen::new();
            modal.open();
            assert!(modal.0.get_untracked());
            modal.close();
            assert!(!modal.0.get_untracked());
        });
    }

    #[test]
    fn flags_are_independent_in_context() {
        let owner = Owner::new();
        owner.with(|| {
            let menu = MobileMenuOpen::provide();
            let modal = GiftModalOpen::provide();

            modal.open();
            assert!(!MobileMenuOpen::expect().0.get_untracked());
            assert!(GiftModalOpen::expect().0.get_untracked());

            menu.open();
            modal.close();
            assert!(MobileMenuOpen::expect().0.get_untracked());
            assert!(!GiftModalOpen::expect().0.get_untracked());
        });
    }
}
