use super::*;

const LOG_LIMIT: usize = 200;

impl App {
    fn push_entry(&mut self, kind: EntryKind, lines: Vec<String>) {
        self.log.push(ScrollEntry {
            ts: now_ts(),
            kind,
            lines,
        });
        if self.log.len() > LOG_LIMIT {
            let excess = self.log.len() - LOG_LIMIT;
            self.log.drain(..excess);
        }
    }

    pub(in crate::tui_shell) fn push_output(&mut self, lines: Vec<String>) {
        self.push_entry(EntryKind::Output, lines);
    }

    pub(in crate::tui_shell) fn push_error(&mut self, msg: String) {
        let lines = msg.lines().map(str::to_string).collect();
        self.push_entry(EntryKind::Error, lines);
    }

    pub(super) fn open_modal(&mut self, title: impl Into<String>, lines: Vec<String>) {
        self.modal = Some(Modal {
            title: title.into(),
            lines,
            scroll: 0,
            kind: ModalKind::Viewer,
            input: Input::default(),
        });
    }

    pub(super) fn open_confirm_delete_modal(&mut self, duplicates: &[HotelId]) {
        let ids = duplicates
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        self.modal = Some(Modal {
            title: "Delete duplicates".to_string(),
            lines: vec![
                MERGE_CONFIRM_PROMPT.to_string(),
                String::new(),
                format!("duplicates: {}", ids),
                String::new(),
                "y: delete   n/Esc: keep".to_string(),
            ],
            scroll: 0,
            kind: ModalKind::ConfirmDelete,
            input: Input::default(),
        });
    }

    pub(in crate::tui_shell) fn open_edit_form(&mut self, selected: usize) {
        let title = match self.console.edit_session().editing_id() {
            Some(id) => format!("Edit hotel {}", id),
            None => "Edit".to_string(),
        };
        self.modal = Some(Modal {
            title,
            lines: Vec::new(),
            scroll: 0,
            kind: ModalKind::EditForm {
                selected: selected.min(HotelField::ALL.len() - 1),
            },
            input: Input::default(),
        });
    }

    pub(in crate::tui_shell) fn open_text_input_modal(
        &mut self,
        title: impl Into<String>,
        prompt: impl Into<String>,
        action: TextInputAction,
        initial: Option<String>,
    ) {
        let mut input = Input::default();
        if let Some(s) = initial {
            input.set(s);
        }
        self.modal = Some(Modal {
            title: title.into(),
            lines: vec!["Enter to apply; Esc to go back.".to_string()],
            scroll: 0,
            kind: ModalKind::TextInput {
                prompt: prompt.into(),
                action,
            },
            input,
        });
    }

    pub(super) fn open_dishes_modal(&mut self, name: &str) {
        self.modal = Some(Modal {
            title: format!("Signature dishes: {}", name),
            lines: Vec::new(),
            scroll: 0,
            kind: ModalKind::Dishes {
                field: DishField::Name,
            },
            input: Input::default(),
        });
    }

    pub(in crate::tui_shell) fn close_modal(&mut self) {
        self.modal = None;
    }
}
