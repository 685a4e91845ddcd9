use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::HotelField;

use super::app::timing_line;
use super::{App, DishField, Modal, ModalKind, TextInputAction};

pub(super) fn draw_modal(frame: &mut ratatui::Frame, app: &App) {
    let Some(modal) = app.modal.as_ref() else {
        return;
    };
    let area = frame.area();
    let w = area.width.saturating_sub(6).clamp(20, 90);
    let h = area.height.saturating_sub(6).clamp(8, 24);
    let box_area = Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    };

    frame.render_widget(ratatui::widgets::Clear, box_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(modal.title.as_str());
    frame.render_widget(block.clone(), box_area);
    let inner = block.inner(box_area);

    match &modal.kind {
        ModalKind::Viewer | ModalKind::ConfirmDelete => {
            let lines: Vec<Line> = modal.lines.iter().map(|s| Line::from(s.as_str())).collect();
            let scroll = modal.scroll.min(modal.lines.len().saturating_sub(1)) as u16;
            frame.render_widget(
                Paragraph::new(lines)
                    .wrap(Wrap { trim: false })
                    .scroll((scroll, 0)),
                inner,
            );
        }

        ModalKind::EditForm { selected } => {
            let draft = app.console.edit_session().draft();
            let mut lines: Vec<Line> = HotelField::ALL
                .iter()
                .enumerate()
                .map(|(i, f)| {
                    let value = draft.map(|d| d.field_value(*f)).unwrap_or_default();
                    let style = if i == *selected {
                        Style::default().add_modifier(Modifier::REVERSED)
                    } else {
                        Style::default()
                    };
                    Line::from(vec![
                        Span::styled(format!("{:<9}", f.label()), style),
                        Span::raw(" "),
                        Span::raw(value),
                    ])
                })
                .collect();
            lines.push(Line::from(""));
            lines.push(Line::styled(
                "Enter: edit field   s: save   Esc: discard",
                Style::default().fg(Color::DarkGray),
            ));
            frame.render_widget(Paragraph::new(lines), inner);
        }

        ModalKind::TextInput { prompt, .. } => {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(3)])
                .split(inner);
            let lines: Vec<Line> = modal.lines.iter().map(|s| Line::from(s.as_str())).collect();
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), parts[0]);
            let input_line = Line::from(vec![
                Span::styled(prompt.as_str(), Style::default().fg(Color::Yellow)),
                Span::raw(modal.input.buf.as_str()),
            ]);
            frame.render_widget(
                Paragraph::new(input_line)
                    .block(Block::default().borders(Borders::ALL).title("Edit")),
                parts[1],
            );
            let x = prompt.chars().count() as u16 + modal.input.cursor as u16;
            frame.set_cursor_position((parts[1].x + 1 + x, parts[1].y + 1));
        }

        ModalKind::Dishes { field } => draw_dishes(frame, app, modal, *field, inner),
    }
}

fn draw_dishes(frame: &mut ratatui::Frame, app: &App, modal: &Modal, field: DishField, inner: Rect) {
    let Some(editor) = app.console.dishes() else {
        return;
    };
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(inner);

    let hotel = editor.hotel();
    let mut lines = vec![Line::from(timing_line(hotel)), Line::from("")];
    if hotel.hotel_signature_dishes.is_empty() {
        lines.push(Line::from("no signature dishes yet"));
    }
    for d in &hotel.hotel_signature_dishes {
        lines.push(Line::from(format!("  {}  {}", d.dish_name, d.dish_price)));
    }
    if !editor.staged().is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::styled("staged:", Style::default().fg(Color::Cyan)));
        for d in editor.staged() {
            lines.push(Line::from(format!("+ {}  {}", d.dish_name, d.dish_price)));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "Tab: name/price   Enter: stage   Ctrl-D: unstage last   Ctrl-S: send staged   Esc: close",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), parts[0]);

    let (name, price) = match field {
        DishField::Name => (modal.input.buf.clone(), editor.draft().dish_price.clone()),
        DishField::Price => (editor.draft().dish_name.clone(), modal.input.buf.clone()),
    };
    let active = Style::default().fg(Color::Yellow);
    let (name_style, price_style) = match field {
        DishField::Name => (active, Style::default()),
        DishField::Price => (Style::default(), active),
    };
    let input_line = Line::from(vec![
        Span::styled("name: ", name_style),
        Span::raw(name.clone()),
        Span::raw("   "),
        Span::styled("price: ", price_style),
        Span::raw(price),
    ]);
    frame.render_widget(
        Paragraph::new(input_line).block(Block::default().borders(Borders::ALL).title("New dish")),
        parts[1],
    );
    let x = match field {
        DishField::Name => 6 + modal.input.cursor,
        DishField::Price => 6 + name.chars().count() + 3 + 7 + modal.input.cursor,
    };
    frame.set_cursor_position((parts[1].x + 1 + x as u16, parts[1].y + 1));
}

pub(super) fn handle_modal_key(app: &mut App, key: KeyEvent) {
    enum ModalAction {
        None,
        Close,
        AnswerDelete(bool),
        EditField(usize),
        SaveEdit,
        DiscardEdit,
        SubmitTextInput {
            action: TextInputAction,
            value: String,
        },
        BackToForm(usize),
        SwitchDishField {
            from: DishField,
            value: String,
        },
        StageDish {
            field: DishField,
            value: String,
        },
        SendDishes {
            field: DishField,
            value: String,
        },
        UnstageLastDish,
        CloseDishes,
    }

    let action = {
        let Some(m) = app.modal_mut() else {
            return;
        };

        match &mut m.kind {
            ModalKind::Viewer => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => ModalAction::Close,
                KeyCode::Up => {
                    m.scroll = m.scroll.saturating_sub(1);
                    ModalAction::None
                }
                KeyCode::Down => {
                    if m.scroll < m.lines.len().saturating_sub(1) {
                        m.scroll += 1;
                    }
                    ModalAction::None
                }
                _ => ModalAction::None,
            },

            ModalKind::ConfirmDelete => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => ModalAction::AnswerDelete(true),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    ModalAction::AnswerDelete(false)
                }
                _ => ModalAction::None,
            },

            ModalKind::EditForm { selected } => match key.code {
                KeyCode::Up => {
                    *selected = selected.saturating_sub(1);
                    ModalAction::None
                }
                KeyCode::Down => {
                    *selected = (*selected + 1).min(HotelField::ALL.len() - 1);
                    ModalAction::None
                }
                KeyCode::Enter => ModalAction::EditField(*selected),
                KeyCode::Char('s') => ModalAction::SaveEdit,
                KeyCode::Esc => ModalAction::DiscardEdit,
                _ => ModalAction::None,
            },

            ModalKind::TextInput { action, .. } => match key.code {
                KeyCode::Esc => match action {
                    TextInputAction::EditField { form_selected, .. } => {
                        ModalAction::BackToForm(*form_selected)
                    }
                },
                KeyCode::Enter => ModalAction::SubmitTextInput {
                    action: *action,
                    value: m.input.buf.trim().to_string(),
                },
                code => {
                    edit_input(&mut m.input, code, key.modifiers);
                    ModalAction::None
                }
            },

            ModalKind::Dishes { field } => {
                let field = *field;
                match key.code {
                    KeyCode::Esc => ModalAction::CloseDishes,
                    KeyCode::Tab | KeyCode::BackTab => ModalAction::SwitchDishField {
                        from: field,
                        value: m.input.buf.clone(),
                    },
                    KeyCode::Enter => ModalAction::StageDish {
                        field,
                        value: m.input.buf.clone(),
                    },
                    KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        ModalAction::SendDishes {
                            field,
                            value: m.input.buf.clone(),
                        }
                    }
                    KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        ModalAction::UnstageLastDish
                    }
                    code => {
                        edit_input(&mut m.input, code, key.modifiers);
                        ModalAction::None
                    }
                }
            }
        }
    };

    match action {
        ModalAction::None => {}
        ModalAction::Close => app.close_modal(),
        ModalAction::AnswerDelete(confirmed) => app.answer_delete_prompt(confirmed),
        ModalAction::EditField(selected) => app.edit_field_prompt(selected),
        ModalAction::SaveEdit => app.commit_edit(),
        ModalAction::DiscardEdit => app.cancel_edit(),
        ModalAction::SubmitTextInput { action, value } => app.apply_text_input(action, value),
        ModalAction::BackToForm(selected) => app.open_edit_form(selected),
        ModalAction::SwitchDishField { from, value } => {
            app.store_dish_field(from, &value);
            let to = match from {
                DishField::Name => DishField::Price,
                DishField::Price => DishField::Name,
            };
            let next = app.dish_field_value(to);
            set_dish_modal(app, to, next);
        }
        ModalAction::StageDish { field, value } => {
            app.store_dish_field(field, &value);
            if app.add_dish_draft() {
                set_dish_modal(app, DishField::Name, String::new());
            }
        }
        ModalAction::SendDishes { field, value } => {
            app.store_dish_field(field, &value);
            app.submit_dishes();
        }
        ModalAction::UnstageLastDish => app.unstage_last_dish(),
        ModalAction::CloseDishes => app.close_dishes(),
    }
}

fn set_dish_modal(app: &mut App, field: DishField, value: String) {
    if let Some(m) = app.modal_mut() {
        m.kind = ModalKind::Dishes { field };
        m.input.set(value);
    }
}

fn edit_input(input: &mut super::input::Input, code: KeyCode, modifiers: KeyModifiers) {
    match code {
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Char(c) => {
            if !modifiers.contains(KeyModifiers::CONTROL) && !modifiers.contains(KeyModifiers::ALT)
            {
                input.insert_char(c);
            }
        }
        _ => {}
    }
}
