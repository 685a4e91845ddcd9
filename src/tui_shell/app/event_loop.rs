use super::*;

pub(super) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| super::render::draw(f, app))
            .context("draw")?;
        if app.quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(50)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => handle_key(app, k),
                _ => {}
            }
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit = true;
        return;
    }
    if app.modal.is_some() {
        modal::handle_modal_key(app, key);
        return;
    }
    match app.focus {
        Focus::Search => handle_search_key(app, key),
        Focus::Table => handle_table_key(app, key),
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.focus = Focus::Table,
        KeyCode::Enter => app.run_search(),
        KeyCode::Backspace => app.input.backspace(),
        KeyCode::Delete => app.input.delete(),
        KeyCode::Left => app.input.move_left(),
        KeyCode::Right => app.input.move_right(),
        KeyCode::Up => app.input.history_up(),
        KeyCode::Down => app.input.history_down(),
        KeyCode::Char(c) => {
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT)
            {
                app.input.insert_char(c);
            }
        }
        _ => {}
    }
}

fn handle_table_key(app: &mut App, key: KeyEvent) {
    let len = app.console.table().hotels().len();
    let pending = match app.console.merge_stage() {
        MergeStage::AwaitingDeleteConfirmation { duplicates, .. } => Some(duplicates.clone()),
        MergeStage::Idle => None,
    };
    if let Some(duplicates) = pending {
        match key.code {
            KeyCode::Char('y') => return app.answer_delete_prompt(true),
            KeyCode::Char('n') => return app.answer_delete_prompt(false),
            KeyCode::Char('m') => return app.open_confirm_delete_modal(&duplicates),
            _ => {}
        }
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Char('/') => app.focus = Focus::Search,
        KeyCode::Up | KeyCode::Char('k') => app.view.move_up(),
        KeyCode::Down | KeyCode::Char('j') => app.view.move_down(len),
        KeyCode::PageUp => app.view.page(len, false),
        KeyCode::PageDown => app.view.page(len, true),
        KeyCode::Enter => app.show_details(),
        KeyCode::Char('r') => app.reload(),
        KeyCode::Char('v') => app.toggle_verified_only(),
        KeyCode::Char('a') => app.approve_selected(true),
        KeyCode::Char('i') => app.approve_selected(false),
        KeyCode::Char('e') => app.begin_edit_selected(),
        KeyCode::Char(' ') => app.toggle_select_current(),
        KeyCode::Char('*') => app.toggle_select_all(),
        KeyCode::Char('o') => app.set_original_current(),
        KeyCode::Char('m') => app.merge_selected(),
        KeyCode::Char('d') => app.open_dishes_selected(),
        KeyCode::Char('?') => app.open_modal("Keys", help_lines()),
        _ => {}
    }
}

fn help_lines() -> Vec<String> {
    [
        "/          search (Enter runs, Esc returns to the list)",
        "Up/Down    move",
        "Enter      hotel details",
        "space      select / unselect for merge",
        "*          select all / none",
        "o          mark the original hotel",
        "m          merge selected videos into the original",
        "e          edit (Enter edits a field, s saves, Esc discards)",
        "a / i      approve as valid / invalid",
        "d          signature dishes (Tab switches field, Enter stages, Ctrl-D unstages, Ctrl-S sends)",
        "v          toggle verified only",
        "r          reload",
        "q          quit",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
