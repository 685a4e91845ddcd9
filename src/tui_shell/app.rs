use std::io;
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::console::{Console, DeleteOutcome, MERGE_CONFIRM_PROMPT, MergeStage};
use crate::model::{Hotel, HotelField, HotelId};
use crate::remote::RemoteClient;

use time::OffsetDateTime;
use time::format_description::FormatItem;
use time::format_description::well_known::Rfc3339;

use super::input::Input;
use super::modal;
use super::view::HotelsView;

mod actions;
mod event_loop;
mod lifecycle;
mod log_types;
mod modal_output;
mod modal_types;
mod render;
mod time_utils;

use self::log_types::{EntryKind, ScrollEntry};
pub(super) use self::actions::timing_line;
pub(super) use self::lifecycle::run;
pub(super) use self::modal_types::{DishField, Modal, ModalKind, TextInputAction};
use self::time_utils::{fmt_ts_ui, now_ts};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Focus {
    Table,
    Search,
}

pub(super) struct App {
    pub(super) console: Console<RemoteClient>,
    pub(super) base_url: String,

    pub(super) view: HotelsView,
    pub(super) input: Input,
    pub(super) focus: Focus,

    log: Vec<ScrollEntry>,
    pub(super) modal: Option<Modal>,

    quit: bool,
}

impl App {
    pub(super) fn new(client: RemoteClient, opts: &crate::tui::TuiRunOptions) -> Self {
        Self {
            console: Console::new(client, opts.verified_only),
            base_url: opts.base_url.clone(),
            view: HotelsView::default(),
            input: Input::default(),
            focus: Focus::Table,
            log: Vec::new(),
            modal: None,
            quit: false,
        }
    }

    pub(super) fn selected_hotel(&self) -> Option<&Hotel> {
        self.view.selected(self.console.table().hotels())
    }

    pub(super) fn selected_id(&self) -> Option<HotelId> {
        self.selected_hotel().map(|h| h.hotel_id.clone())
    }

    pub(super) fn modal_mut(&mut self) -> Option<&mut Modal> {
        self.modal.as_mut()
    }
}
