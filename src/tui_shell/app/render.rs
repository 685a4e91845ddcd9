use super::*;

pub(super) fn draw(frame: &mut ratatui::Frame, app: &mut App) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(8),
            Constraint::Length(1),
        ])
        .split(frame.area());

    frame.render_widget(Paragraph::new(header_line(app)), parts[0]);
    draw_search(frame, app, parts[1]);
    app.view.render(frame, parts[2], &app.console);
    draw_log(frame, app, parts[3]);
    frame.render_widget(
        Paragraph::new(help_line(app)).style(Style::default().fg(Color::DarkGray)),
        parts[4],
    );

    if app.modal.is_some() {
        modal::draw_modal(frame, app);
    }
}

fn header_line(app: &App) -> Line<'static> {
    let stats = app.console.table().stats();
    let mut spans = vec![
        Span::styled(
            "hotel-admin ",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(app.base_url.clone()),
        Span::raw(format!(
            "  shown: {}  verified: {}  valid: {}",
            stats.total, stats.verified, stats.valid
        )),
    ];
    if let Some(count) = app.console.last_count() {
        spans.push(Span::raw(format!("  records: {}", count)));
    }
    let selection = app.console.selection();
    if !selection.selected().is_empty() {
        spans.push(Span::styled(
            format!("  selected: {}", selection.selected().len()),
            Style::default().fg(Color::Cyan),
        ));
    }
    if let Some(id) = selection.canonical() {
        spans.push(Span::styled(
            format!("  original: {}", id),
            Style::default().fg(Color::Cyan),
        ));
    }
    Line::from(spans)
}

fn draw_search(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    let focused = app.focus == Focus::Search && app.modal.is_none();
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    frame.render_widget(
        Paragraph::new(app.input.buf.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(style)
                .title("Search (more than 4 characters searches by name)"),
        ),
        area,
    );
    if focused {
        frame.set_cursor_position((area.x + 1 + app.input.cursor as u16, area.y + 1));
    }
}

fn draw_log(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    let height = area.height.saturating_sub(2) as usize;
    let mut lines: Vec<Line> = Vec::new();
    for entry in &app.log {
        let style = match entry.kind {
            EntryKind::Output => Style::default(),
            EntryKind::Error => Style::default().fg(Color::Red),
        };
        for (i, l) in entry.lines.iter().enumerate() {
            let prefix = if i == 0 {
                format!("{} ", fmt_ts_ui(&entry.ts))
            } else {
                " ".repeat(9)
            };
            lines.push(Line::from(vec![
                Span::styled(prefix, Style::default().fg(Color::DarkGray)),
                Span::styled(l.clone(), style),
            ]));
        }
    }
    let skip = lines.len().saturating_sub(height);
    let lines: Vec<Line> = lines.into_iter().skip(skip).collect();
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Log")),
        area,
    );
}

fn help_line(app: &App) -> &'static str {
    if app.modal.is_some() {
        return "";
    }
    match app.focus {
        Focus::Search => "Enter: search  Up/Down: history  Esc: back to list",
        Focus::Table => match app.console.merge_stage() {
            MergeStage::AwaitingDeleteConfirmation { .. } => "y: delete duplicates  n: keep them",
            MergeStage::Idle => {
                "/ search  space select  * all  o original  m merge  e edit  a approve  i approve invalid  d dishes  v verified only  r reload  Enter details  q quit"
            }
        },
    }
}
