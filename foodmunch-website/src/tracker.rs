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

//! Scroll-driven tracking of the section currently in view.
//!
//! The tracker holds one region handle per section, captured once when the
//! page mounts. Each scroll tick it walks the sections in declared order and
//! picks the first one whose vertical extent contains a reference point a
//! fixed distance below the viewport top. A tick with no qualifying section
//! leaves the active section untouched.

use leptos::html;
use leptos::prelude::*;

use crate::config::DEFAULT_NAV_OFFSET_PX;
use crate::sections::SectionId;

/// The vertical part of a bounding client rect, in viewport pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VerticalExtent {
    pub top: f64,
    pub bottom: f64,
}

impl VerticalExtent {
    pub const fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Inclusive on both edges.
    pub fn contains(&self, y: f64) -> bool {
        self.top <= y && y <= self.bottom
    }
}

impl From<&web_sys::DomRect> for VerticalExtent {
    fn from(rect: &web_sys::DomRect) -> Self {
        Self::new(rect.top(), rect.bottom())
    }
}

/// Something on the page whose position relative to the viewport can be read.
pub trait SectionRegion {
    /// `None` when the region isn't currently part of the document.
    fn extent(&self) -> Option<VerticalExtent>;
}

impl SectionRegion for VerticalExtent {
    fn extent(&self) -> Option<VerticalExtent> {
        Some(*self)
    }
}

impl SectionRegion for web_sys::Element {
    fn extent(&self) -> Option<VerticalExtent> {
        Some(VerticalExtent::from(&self.get_bounding_client_rect()))
    }
}

impl SectionRegion for NodeRef<html::Section> {
    fn extent(&self) -> Option<VerticalExtent> {
        self.get_untracked()
            .map(|section| VerticalExtent::from(&section.get_bounding_client_rect()))
    }
}

pub struct ActiveSectionTracker<R> {
    /// Kept sorted by `SectionId`, i.e. in declared page order.
    regions: Vec<(SectionId, R)>,
    reference_offset: f64,
    active: Option<SectionId>,
    attached: bool,
}

impl<R: SectionRegion> Default for ActiveSectionTracker<R> {
    fn default() -> Self {
        Self::new(DEFAULT_NAV_OFFSET_PX)
    }
}

impl<R: SectionRegion> ActiveSectionTracker<R> {
    pub fn new(reference_offset: f64) -> Self {
        Self {
            regions: Vec::with_capacity(SectionId::ALL.len()),
            reference_offset,
            active: None,
            attached: true,
        }
    }

    pub fn with_region(mut self, id: SectionId, region: R) -> Self {
        self.register(id, region);
        self
    }

    /// Registers the handle for `id`, replacing any previous one.
    pub fn register(&mut self, id: SectionId, region: R) {
        match self.regions.binary_search_by_key(&id, |(section, _)| *section) {
            Ok(index) => self.regions[index].1 = region,
            Err(index) => self.regions.insert(index, (id, region)),
        }
    }

    /// The first section, in declared order, containing the reference point.
    pub fn locate(&self) -> Option<SectionId> {
        self.regions
            .iter()
            .find(|(_, region)| {
                region
                    .extent()
                    .is_some_and(|extent| extent.contains(self.reference_offset))
            })
            .map(|(id, _)| *id)
    }

    /// Re-evaluates on a scroll tick and returns the active section.
    ///
    /// Once detached this never changes the active section.
    pub fn on_scroll(&mut self) -> Option<SectionId> {
        if !self.attached {
            return self.active;
        }
        if let Some(found) = self.locate() {
            if self.active != Some(found) {
                log::debug!("active section: {found}");
            }
            self.active = Some(found);
        }
        self.active
    }

    pub fn active(&self) -> Option<SectionId> {
        self.active
    }

    pub fn reference_offset(&self) -> f64 {
        self.reference_offset
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn detach(&mut self) {
        self.attached = false;
    }
}

/// Region handles for the four tracked sections, created once per page.
#[derive(Clone, Copy)]
pub struct SectionRefs {
    pub why_choose_us: NodeRef<html::Section>,
    pub explore_menu: NodeRef<html::Section>,
    pub delivery_and_payment: NodeRef<html::Section>,
    pub follow_us: NodeRef<html::Section>,
}

impl SectionRefs {
    pub fn new() -> Self {
        Self {
            why_choose_us: NodeRef::new(),
            explore_menu: NodeRef::new(),
            delivery_and_payment: NodeRef::new(),
            follow_us: NodeRef::new(),
        }
    }

    pub fn get(&self, id: SectionId) -> NodeRef<html::Section> {
        match id {
            SectionId::WhyChooseUs => self.why_choose_us,
            SectionId::ExploreMenu => self.explore_menu,
            SectionId::DeliveryAndPayment => self.delivery_and_payment,
            SectionId::FollowUs => self.follow_us,
        }
    }

    pub fn tracker(&self, reference_offset: f64) -> ActiveSectionTracker<NodeRef<html::Section>> {
        SectionId::ALL
            .into_iter()
            .fold(ActiveSectionTracker::new(reference_offset), |tracker, id| {
                tracker.with_region(id, self.get(id))
            })
    }
}

impl Default for SectionRefs {
    fn default() -> Self {
        Self::new()
    }
}

/// Tracks the active section for the lifetime of the calling component.
///
/// The window scroll listener is removed, and the tracker detached, when the
/// owning reactive scope is cleaned up.
pub fn use_active_section(refs: SectionRefs, reference_offset: f64) -> ReadSignal<Option<SectionId>> {
    let (active, set_active) = signal(None::<SectionId>);
    let tracker = StoredValue::new_local(refs.tracker(reference_offset));
    detach_on_cleanup(tracker);

    let handle = window_event_listener(leptos::ev::scroll, move |_| {
        publish_scroll(tracker, active, set_active);
    });
    log::trace!("section tracker listening at {reference_offset}px");

    on_cleanup(move || {
        handle.remove();
        log::trace!("section tracker removed");
    });

    active
}

type StoredTracker<R> = StoredValue<ActiveSectionTracker<R>, LocalStorage>;

/// Stops `tracker` from reacting to scrolls once the current owner is cleaned up.
fn detach_on_cleanup<R: SectionRegion + 'static>(tracker: StoredTracker<R>) {
    on_cleanup(move || {
        tracker.try_update_value(|t| t.detach());
    });
}

/// Runs one scroll tick and writes the result only when it changed.
fn publish_scroll<R: SectionRegion + 'static>(
    tracker: StoredTracker<R>,
    active: ReadSignal<Option<SectionId>>,
    set_active: WriteSignal<Option<SectionId>>,
) {
    let found = tracker.try_update_value(|t| t.on_scroll()).flatten();
    if found.is_some() && active.get_untracked() != found {
        set_active.set(found);
    }
}
