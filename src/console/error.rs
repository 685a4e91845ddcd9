use crate::model::{FieldError, HotelId};

/// Client-side precondition failures. They surface through `anyhow::Error`
/// like transport failures, but can be downcast when the cause matters.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConsoleError {
    #[error("Please select the original hotel")]
    NoOriginalSelected,
    #[error("original hotel {0} is not among the selected hotels")]
    OriginalNotSelected(HotelId),
    #[error("select at least two hotels to merge")]
    TooFewSelected,
    #[error("One of the hotel is not verified ({})", join_ids(.0))]
    NotVerified(Vec<HotelId>),
    #[error("none of the selected duplicates is in the loaded list")]
    NothingToMerge,
    #[error("a merge is waiting for delete confirmation")]
    MergeAwaitingConfirmation,
    #[error("no merge is waiting for confirmation")]
    NothingToConfirm,

    #[error("hotel {0} is already being edited")]
    EditInProgress(HotelId),
    #[error("no hotel is being edited")]
    NoEditSession,
    #[error(transparent)]
    InvalidField(#[from] FieldError),

    #[error("hotel {0} is not in the loaded list")]
    UnknownHotel(HotelId),

    #[error("dish name and price are both required")]
    EmptyDishField,
    #[error("no dishes staged")]
    NothingStaged,
    #[error("dish editor is not open")]
    NoDishEditor,
}

fn join_ids(ids: &[HotelId]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
