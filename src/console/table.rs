use std::collections::BTreeSet;

use crate::model::{Hotel, HotelId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    /// The last fetch failed; the list is empty until a fetch succeeds.
    Failed(String),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HotelStats {
    pub total: usize,
    pub verified: usize,
    pub valid: usize,
}

/// The loaded hotel list plus the per-row busy markers.
#[derive(Clone, Debug)]
pub struct HotelTable {
    hotels: Vec<Hotel>,
    load: LoadState,
    verified_only: bool,
    search_term: String,
    busy: BTreeSet<HotelId>,
}

impl HotelTable {
    pub(super) fn new(verified_only: bool) -> Self {
        Self {
            hotels: Vec::new(),
            load: LoadState::Loading,
            verified_only,
            search_term: String::new(),
            busy: BTreeSet::new(),
        }
    }

    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    pub fn get(&self, id: &HotelId) -> Option<&Hotel> {
        self.hotels.iter().find(|h| &h.hotel_id == id)
    }

    pub fn position(&self, id: &HotelId) -> Option<usize> {
        self.hotels.iter().position(|h| &h.hotel_id == id)
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn verified_only(&self) -> bool {
        self.verified_only
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn is_busy(&self, id: &HotelId) -> bool {
        self.busy.contains(id)
    }

    pub fn stats(&self) -> HotelStats {
        HotelStats {
            total: self.hotels.len(),
            verified: self.hotels.iter().filter(|h| h.verified).count(),
            valid: self.hotels.iter().filter(|h| h.valid).count(),
        }
    }

    pub(super) fn set_verified_only(&mut self, on: bool) {
        self.verified_only = on;
    }

    pub(super) fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
    }

    pub(super) fn start_loading(&mut self) {
        self.load = LoadState::Loading;
    }

    pub(super) fn replace_all(&mut self, hotels: Vec<Hotel>) {
        self.hotels = hotels;
        self.load = LoadState::Ready;
    }

    pub(super) fn fail(&mut self, message: String) {
        self.hotels.clear();
        self.load = LoadState::Failed(message);
    }

    /// Swaps in the acknowledged copy of one row. Returns false when the row
    /// is gone (a reload replaced the list in the meantime).
    pub(super) fn replace_one(&mut self, hotel: Hotel) -> bool {
        match self.position(&hotel.hotel_id) {
            Some(idx) => {
                self.hotels[idx] = hotel;
                true
            }
            None => false,
        }
    }

    pub(super) fn row_mut(&mut self, id: &HotelId) -> Option<&mut Hotel> {
        self.hotels.iter_mut().find(|h| &h.hotel_id == id)
    }

    pub(super) fn mark_busy(&mut self, id: &HotelId) {
        self.busy.insert(id.clone());
    }

    pub(super) fn clear_busy(&mut self, id: &HotelId) {
        self.busy.remove(id);
    }
}
