//! Key-bound operations. Each one drives the console and reports the
//! outcome to the log; none of them returns an error to the event loop.

use super::*;

impl App {
    fn report<T>(&mut self, res: Result<T>) -> Option<T> {
        match res {
            Ok(v) => Some(v),
            Err(err) => {
                self.push_error(format!("{:#}", err));
                None
            }
        }
    }

    fn require_selected(&mut self) -> Option<HotelId> {
        let id = self.selected_id();
        if id.is_none() {
            self.push_error("no hotel under the cursor".to_string());
        }
        id
    }

    fn after_fetch(&mut self, res: Result<usize>) {
        if let Some(n) = self.report(res) {
            self.push_output(vec![format!("{} hotel(s) loaded", n)]);
        }
        self.view.clamp(self.console.table().hotels().len());
    }

    pub(super) fn reload(&mut self) {
        let res = self.console.load_all();
        self.after_fetch(res);
    }

    pub(super) fn run_search(&mut self) {
        let query = self.input.buf.clone();
        self.input.push_history(&query);
        let res = self.console.search(&query);
        self.after_fetch(res);
        self.focus = Focus::Table;
    }

    pub(super) fn toggle_verified_only(&mut self) {
        let on = !self.console.table().verified_only();
        let res = self.console.set_verified_only(on);
        self.after_fetch(res);
    }

    pub(super) fn approve_selected(&mut self, valid: bool) {
        let Some(id) = self.require_selected() else {
            return;
        };
        let res = self.console.approve(&id, valid);
        if self.report(res).is_some() {
            self.push_output(vec![format!("Hotel with ID {} approved.", id)]);
        }
        self.view.clamp(self.console.table().hotels().len());
    }

    pub(super) fn begin_edit_selected(&mut self) {
        let Some(id) = self.require_selected() else {
            return;
        };
        let res = self.console.begin_edit(&id);
        if self.report(res).is_some() {
            self.open_edit_form(0);
        }
    }

    pub(in crate::tui_shell) fn edit_field_prompt(&mut self, selected: usize) {
        let Some(field) = HotelField::ALL.get(selected).copied() else {
            return;
        };
        let current = self
            .console
            .edit_session()
            .draft()
            .map(|h| h.field_value(field))
            .unwrap_or_default();
        self.open_text_input_modal(
            format!("Edit {}", field.label()),
            format!("{}: ", field.label()),
            TextInputAction::EditField {
                field,
                form_selected: selected,
            },
            Some(current),
        );
    }

    pub(in crate::tui_shell) fn apply_text_input(&mut self, action: TextInputAction, value: String) {
        match action {
            TextInputAction::EditField {
                field,
                form_selected,
            } => {
                let res = self.console.update_field(field, &value);
                self.report(res);
                self.open_edit_form(form_selected);
            }
        }
    }

    pub(in crate::tui_shell) fn commit_edit(&mut self) {
        self.close_modal();
        let res = self.console.commit();
        if let Some(id) = self.report(res) {
            self.push_output(vec![format!("Hotel {} updated.", id)]);
        }
    }

    pub(in crate::tui_shell) fn cancel_edit(&mut self) {
        self.close_modal();
        if self.console.cancel_edit() {
            self.push_output(vec!["edit discarded".to_string()]);
        }
    }

    pub(super) fn toggle_select_current(&mut self) {
        let Some(id) = self.require_selected() else {
            return;
        };
        let res = self.console.toggle_select(&id);
        self.report(res);
        self.view.move_down(self.console.table().hotels().len());
    }

    pub(super) fn toggle_select_all(&mut self) {
        let all = self.console.table().hotels().len();
        let on = self.console.selection().selected().len() < all;
        let res = self.console.select_all(on);
        if let Some(n) = self.report(res) {
            self.push_output(vec![format!("{} hotel(s) selected", n)]);
        }
    }

    pub(super) fn set_original_current(&mut self) {
        let Some(id) = self.require_selected() else {
            return;
        };
        let res = self.console.set_canonical(&id);
        if self.report(res).is_some() {
            self.push_output(vec![format!("original hotel: {}", id)]);
        }
    }

    pub(super) fn merge_selected(&mut self) {
        let res = self.console.merge();
        if let Some(report) = self.report(res) {
            self.push_output(vec![format!(
                "merged {} video(s) into hotel {}",
                report.merged.len(),
                report.canonical
            )]);
            self.open_confirm_delete_modal(&report.merged);
        }
    }

    pub(in crate::tui_shell) fn answer_delete_prompt(&mut self, confirmed: bool) {
        self.close_modal();
        let res = self.console.confirm_delete(confirmed);
        if let Some(outcome) = self.report(res) {
            let mut lines = vec![outcome.message()];
            if let DeleteOutcome::Deleted(ids) = &outcome {
                lines.extend(ids.iter().map(|id| format!("deleted {}", id)));
            }
            self.push_output(lines);
        }
        self.view.clamp(self.console.table().hotels().len());
    }

    pub(super) fn open_dishes_selected(&mut self) {
        let Some(id) = self.require_selected() else {
            return;
        };
        let res = self.console.open_dishes(&id);
        if self.report(res).is_some() {
            let name = self
                .console
                .dishes()
                .map(|d| d.hotel().display_name().to_string())
                .unwrap_or_default();
            self.open_dishes_modal(&name);
        }
    }

    /// Copies the dish modal's text box into the draft field it edits.
    pub(in crate::tui_shell) fn store_dish_field(&mut self, field: DishField, value: &str) {
        if let Ok(editor) = self.console.dishes_mut() {
            match field {
                DishField::Name => editor.set_draft_name(value),
                DishField::Price => editor.set_draft_price(value),
            }
        }
    }

    pub(in crate::tui_shell) fn dish_field_value(&self, field: DishField) -> String {
        self.console
            .dishes()
            .map(|d| match field {
                DishField::Name => d.draft().dish_name.clone(),
                DishField::Price => d.draft().dish_price.clone(),
            })
            .unwrap_or_default()
    }

    pub(in crate::tui_shell) fn add_dish_draft(&mut self) -> bool {
        let res = self.console.dishes_mut().and_then(|d| d.add_draft());
        self.report(res).is_some()
    }

    pub(in crate::tui_shell) fn unstage_last_dish(&mut self) {
        let res = self.console.dishes_mut().map(|d| d.unstage_last());
        if let Some(Some(dish)) = self.report(res) {
            self.push_output(vec![format!("unstaged {}", dish.dish_name)]);
        }
    }

    pub(in crate::tui_shell) fn submit_dishes(&mut self) {
        let res = self.console.submit_dishes();
        if let Some(n) = self.report(res) {
            self.push_output(vec![format!("{} dish(es) added", n)]);
        }
    }

    pub(in crate::tui_shell) fn close_dishes(&mut self) {
        self.close_modal();
        if let Some(editor) = self.console.close_dishes() {
            if !editor.staged().is_empty() {
                self.push_output(vec![format!(
                    "{} staged dish(es) discarded",
                    editor.staged().len()
                )]);
            }
        }
    }

    pub(super) fn show_details(&mut self) {
        let Some(h) = self.selected_hotel() else {
            return;
        };
        let title = format!("Hotel {}", h.hotel_id);
        let lines = detail_lines(h);
        self.open_modal(title, lines);
    }
}

pub(in crate::tui_shell) fn timing_line(h: &Hotel) -> String {
    match h.hotel_timings.first() {
        None => "timings: -".to_string(),
        Some(t) => {
            let slot = |s: &Option<crate::model::TimingSlot>| {
                s.as_ref().map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
            };
            format!(
                "timings: morning {}  noon {}  evening {}  late night {}",
                slot(&t.morning),
                slot(&t.noon),
                slot(&t.evening),
                slot(&t.late_night)
            )
        }
    }
}

fn detail_lines(h: &Hotel) -> Vec<String> {
    let mut lines: Vec<String> = HotelField::ALL
        .iter()
        .map(|f| format!("{:<9} {}", f.label(), h.field_value(*f)))
        .collect();
    if h.hotel_map_location_link.is_some() && !h.map_link_is_url() {
        lines.push("          (map link does not look like a url)".to_string());
    }
    lines.push(format!(
        "verified  {}   valid {}",
        if h.verified { "yes" } else { "no" },
        if h.valid { "yes" } else { "no" }
    ));
    lines.push(format!("video     {}", h.video_preview()));
    if let Some(views) = h.vlog_video_view_count.as_ref() {
        lines.push(format!("views     {}", views));
    }
    if let Some(mobile) = h.user_mobile_number.as_deref() {
        lines.push(format!("submitter {}", mobile));
    }
    lines.push(timing_line(h));
    lines.push(String::new());
    if h.hotel_signature_dishes.is_empty() {
        lines.push("no signature dishes".to_string());
    } else {
        lines.push("signature dishes:".to_string());
        for d in &h.hotel_signature_dishes {
            lines.push(format!("  {}  {}", d.dish_name, d.dish_price));
        }
    }
    lines
}
