//! Client-side state of the admin console and the operations over it.
//!
//! `Console` owns the loaded hotel list, the edit session, the duplicate
//! merge selection and the dish editor. Every operation takes `&mut self`,
//! so one operation runs at a time; requests inside a batch are the only
//! thing that runs in parallel.

use anyhow::{Context, Result};

use crate::model::{Hotel, HotelField, HotelId};
use crate::remote::{HotelApi, HotelVideo, NewDish, VerifyRequest};

mod batch;
pub use self::batch::{Batch, BatchState, run_concurrent, run_sequential};

mod dishes;
pub use self::dishes::{DishAnnotation, DishDraft};

mod edit;
pub use self::edit::EditSession;

mod error;
pub use self::error::ConsoleError;

mod fetch;
pub use self::fetch::SEARCH_THRESHOLD;

mod merge;
pub use self::merge::{
    DeleteOutcome, MERGE_CONFIRM_PROMPT, MergeReport, MergeSelection, MergeStage,
};

mod table;
pub use self::table::{HotelStats, HotelTable, LoadState};

mod verify;

pub struct Console<A: HotelApi> {
    api: A,
    table: HotelTable,
    edit: EditSession,
    selection: MergeSelection,
    stage: MergeStage,
    dishes: Option<DishAnnotation>,
    last_count: Option<serde_json::Value>,
}

impl<A: HotelApi> Console<A> {
    pub fn new(api: A, verified_only: bool) -> Self {
        Self {
            api,
            table: HotelTable::new(verified_only),
            edit: EditSession::Idle,
            selection: MergeSelection::default(),
            stage: MergeStage::Idle,
            dishes: None,
            last_count: None,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn table(&self) -> &HotelTable {
        &self.table
    }

    pub fn edit_session(&self) -> &EditSession {
        &self.edit
    }

    pub fn selection(&self) -> &MergeSelection {
        &self.selection
    }

    pub fn merge_stage(&self) -> &MergeStage {
        &self.stage
    }

    pub fn dishes(&self) -> Option<&DishAnnotation> {
        self.dishes.as_ref()
    }

    pub fn last_count(&self) -> Option<&serde_json::Value> {
        self.last_count.as_ref()
    }

    fn loaded(&self, id: &HotelId) -> Result<&Hotel> {
        self.table
            .get(id)
            .ok_or_else(|| ConsoleError::UnknownHotel(id.clone()).into())
    }
}
