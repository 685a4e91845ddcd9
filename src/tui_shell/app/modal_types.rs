use crate::model::HotelField;

use super::Input;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum TextInputAction {
    EditField { field: HotelField, form_selected: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum DishField {
    Name,
    Price,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum ModalKind {
    /// Read-only lines (hotel details).
    Viewer,
    /// The pause between merging videos and deleting the duplicates.
    ConfirmDelete,
    EditForm {
        selected: usize,
    },
    TextInput {
        prompt: String,
        action: TextInputAction,
    },
    Dishes {
        field: DishField,
    },
}

#[derive(Debug)]
pub(in crate::tui_shell) struct Modal {
    pub(in crate::tui_shell) title: String,
    pub(in crate::tui_shell) lines: Vec<String>,
    pub(in crate::tui_shell) scroll: usize,
    pub(in crate::tui_shell) kind: ModalKind,
    pub(in crate::tui_shell) input: Input,
}
