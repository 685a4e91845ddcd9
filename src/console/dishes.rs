use super::*;
use crate::model::SignatureDish;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DishDraft {
    pub dish_name: String,
    pub dish_price: String,
}

impl DishDraft {
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            dish_name: name.into(),
            dish_price: price.into(),
        }
    }

    fn is_complete(&self) -> bool {
        !self.dish_name.trim().is_empty() && !self.dish_price.trim().is_empty()
    }
}

/// Signature-dish editor for one hotel.
///
/// Dishes are staged locally and sent one by one. Whatever the backend
/// accepted leaves the staged list; the rest stays there for another try.
#[derive(Clone, Debug, PartialEq)]
pub struct DishAnnotation {
    hotel: Hotel,
    draft: DishDraft,
    staged: Vec<DishDraft>,
}

impl DishAnnotation {
    pub fn open(hotel: Hotel) -> Self {
        Self {
            hotel,
            draft: DishDraft::default(),
            staged: Vec::new(),
        }
    }

    pub fn hotel(&self) -> &Hotel {
        &self.hotel
    }

    pub fn draft(&self) -> &DishDraft {
        &self.draft
    }

    pub fn staged(&self) -> &[DishDraft] {
        &self.staged
    }

    pub fn set_draft_name(&mut self, name: &str) {
        self.draft.dish_name = name.to_string();
    }

    pub fn set_draft_price(&mut self, price: &str) {
        self.draft.dish_price = price.to_string();
    }

    /// Moves the draft to the staged list and starts a fresh one.
    pub fn add_draft(&mut self) -> Result<()> {
        if !self.draft.is_complete() {
            return Err(ConsoleError::EmptyDishField.into());
        }
        let draft = std::mem::take(&mut self.draft);
        self.staged.push(DishDraft::new(
            draft.dish_name.trim(),
            draft.dish_price.trim(),
        ));
        Ok(())
    }

    pub fn stage(&mut self, dish: DishDraft) -> Result<()> {
        self.draft = dish;
        self.add_draft()
    }

    /// Takes back the most recently staged dish.
    pub fn unstage_last(&mut self) -> Option<DishDraft> {
        self.staged.pop()
    }

    fn submit_all(&mut self, api: &impl HotelApi) -> Batch<usize> {
        let items: Vec<(usize, NewDish)> = self
            .staged
            .iter()
            .enumerate()
            .map(|(idx, d)| {
                (
                    idx,
                    NewDish {
                        hotel_id: self.hotel.hotel_id.clone(),
                        dish_name: d.dish_name.clone(),
                        dish_price: d.dish_price.clone(),
                    },
                )
            })
            .collect();

        let batch = run_sequential("add dishes", &items, |dish| api.create_dish(dish));

        let accepted = batch.succeeded();
        let mut kept = Vec::with_capacity(self.staged.len() - accepted.len());
        for (idx, dish) in std::mem::take(&mut self.staged).into_iter().enumerate() {
            if accepted.contains(&idx) {
                self.hotel.hotel_signature_dishes.push(SignatureDish {
                    hotel_signature_dish_id: None,
                    dish_name: dish.dish_name,
                    dish_price: dish.dish_price,
                });
            } else {
                kept.push(dish);
            }
        }
        self.staged = kept;
        batch
    }
}

impl<A: HotelApi> Console<A> {
    /// Opens the dish editor on a copy of the row. Any editor already open
    /// is dropped with its staged dishes.
    pub fn open_dishes(&mut self, id: &HotelId) -> Result<()> {
        let hotel = self.loaded(id)?.clone();
        if let Some(prev) = self.dishes.as_ref() {
            if !prev.staged.is_empty() {
                tracing::warn!(
                    hotel_id = %prev.hotel.hotel_id,
                    count = prev.staged.len(),
                    "dropping staged dishes"
                );
            }
        }
        self.dishes = Some(DishAnnotation::open(hotel));
        Ok(())
    }

    pub fn dishes_mut(&mut self) -> Result<&mut DishAnnotation> {
        self.dishes
            .as_mut()
            .ok_or_else(|| ConsoleError::NoDishEditor.into())
    }

    /// Sends every staged dish in order, stopping at the first rejection.
    /// Returns how many were added. Accepted dishes are copied into the
    /// loaded row as well.
    pub fn submit_dishes(&mut self) -> Result<usize> {
        let api = &self.api;
        let Some(editor) = self.dishes.as_mut() else {
            return Err(ConsoleError::NoDishEditor.into());
        };
        if editor.staged.is_empty() {
            return Err(ConsoleError::NothingStaged.into());
        }

        let names: Vec<String> = editor.staged.iter().map(|d| d.dish_name.clone()).collect();
        let batch = editor.submit_all(api);
        let added = batch.succeeded().len();

        let hotel_id = editor.hotel.hotel_id.clone();
        let dishes = editor.hotel.hotel_signature_dishes.clone();
        if added > 0 {
            match self.table.row_mut(&hotel_id) {
                Some(row) => row.hotel_signature_dishes = dishes,
                None => tracing::warn!(hotel_id = %hotel_id, "dish owner no longer in the list"),
            }
        }

        if let Some(msg) = batch.failure_message(|idx| {
            names
                .get(*idx)
                .map(|n| format!("dish `{}`", n))
                .unwrap_or_else(|| format!("dish #{}", idx))
        }) {
            anyhow::bail!(msg);
        }
        tracing::info!(hotel_id = %hotel_id, count = added, "dishes added");
        Ok(added)
    }

    /// Closes the editor and writes its dish list back to the loaded row.
    pub fn close_dishes(&mut self) -> Option<DishAnnotation> {
        let editor = self.dishes.take()?;
        if let Some(row) = self.table.row_mut(&editor.hotel.hotel_id) {
            row.hotel_signature_dishes = editor.hotel.hotel_signature_dishes.clone();
        }
        Some(editor)
    }
}

#[cfg(test)]
#[path = "../tests/console/dishes_tests.rs"]
mod tests;
