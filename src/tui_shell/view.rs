use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap};

use crate::console::{Console, LoadState};
use crate::model::Hotel;
use crate::remote::HotelApi;

/// Cursor and scroll position over the loaded hotel list.
#[derive(Debug, Default)]
pub(super) struct HotelsView {
    cursor: usize,
    offset: usize,
}

impl HotelsView {
    pub(super) fn selected<'a>(&self, hotels: &'a [Hotel]) -> Option<&'a Hotel> {
        hotels.get(self.cursor)
    }

    pub(super) fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub(super) fn move_down(&mut self, len: usize) {
        if self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    pub(super) fn page(&mut self, len: usize, down: bool) {
        self.cursor = if down {
            (self.cursor + 10).min(len.saturating_sub(1))
        } else {
            self.cursor.saturating_sub(10)
        };
    }

    /// Keeps the cursor on a row after the list was replaced.
    pub(super) fn clamp(&mut self, len: usize) {
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    fn window(&self, visible: usize) -> usize {
        if visible == 0 {
            return 0;
        }
        if self.cursor < self.offset {
            self.cursor
        } else if self.cursor >= self.offset + visible {
            self.cursor + 1 - visible
        } else {
            self.offset
        }
    }

    pub(super) fn render<A: HotelApi>(
        &mut self,
        frame: &mut ratatui::Frame,
        area: Rect,
        console: &Console<A>,
    ) {
        let table = console.table();
        let title = format!(
            "Hotels{}{}",
            if table.verified_only() {
                " (verified only)"
            } else {
                ""
            },
            if table.search_term().trim().is_empty() {
                String::new()
            } else {
                format!(" matching `{}`", table.search_term().trim())
            }
        );
        let block = Block::default().borders(Borders::ALL).title(title);

        match table.load_state() {
            LoadState::Loading => {
                frame.render_widget(Paragraph::new("Loading...").block(block), area);
                return;
            }
            LoadState::Failed(msg) => {
                let lines = vec![
                    Line::styled("Could not load hotels", Style::default().fg(Color::Red)),
                    Line::from(""),
                    Line::from(msg.as_str()),
                    Line::from(""),
                    Line::from("r: retry"),
                ];
                frame.render_widget(
                    Paragraph::new(lines).wrap(Wrap { trim: false }).block(block),
                    area,
                );
                return;
            }
            LoadState::Ready => {}
        }

        let hotels = table.hotels();
        if hotels.is_empty() {
            frame.render_widget(Paragraph::new("No hotels").block(block), area);
            return;
        }

        let visible = area.height.saturating_sub(3) as usize;
        self.clamp(hotels.len());
        self.offset = self.window(visible);

        let selection = console.selection();
        let editing = console.edit_session().editing_id();
        let rows = hotels
            .iter()
            .enumerate()
            .skip(self.offset)
            .take(visible)
            .map(|(idx, h)| {
                let marks = format!(
                    "{}{}{}",
                    if selection.is_selected(&h.hotel_id) {
                        "x"
                    } else {
                        " "
                    },
                    if selection.is_canonical(&h.hotel_id) {
                        "*"
                    } else {
                        " "
                    },
                    if table.is_busy(&h.hotel_id) {
                        "~"
                    } else if editing == Some(&h.hotel_id) {
                        "e"
                    } else {
                        " "
                    },
                );
                let mut style = Style::default();
                if !h.verified {
                    style = style.fg(Color::Yellow);
                }
                if idx == self.cursor {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                Row::new(vec![
                    Cell::from(marks),
                    Cell::from(h.hotel_id.to_string()),
                    Cell::from(h.display_name().to_string()),
                    Cell::from(h.hotel_city.clone().unwrap_or_default()),
                    Cell::from(h.hotel_category.clone().unwrap_or_default()),
                    Cell::from(yes_no(h.verified)),
                    Cell::from(yes_no(h.valid)),
                    Cell::from(h.video_preview().to_string()),
                ])
                .style(style)
            });

        let widths = [
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Percentage(28),
            Constraint::Percentage(14),
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Length(5),
            Constraint::Min(12),
        ];
        let header = Row::new(vec![
            "", "id", "name", "city", "category", "verified", "valid", "video",
        ])
        .style(Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(Table::new(rows, widths).header(header).block(block), area);
    }
}

fn yes_no(b: bool) -> &'static str {
    if b { "yes" } else { "no" }
}

#[cfg(test)]
#[path = "../tests/tui_shell/view_tests.rs"]
mod tests;
