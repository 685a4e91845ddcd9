use std::io::IsTerminal;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};

use super::*;

pub(in crate::tui_shell) fn run(opts: crate::tui::TuiRunOptions) -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("TUI requires an interactive terminal (TTY)");
    }
    let client = RemoteClient::new(&opts.base_url)?;

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let mut app = App::new(client, &opts);
    tracing::info!(base_url = %opts.base_url, "tui started");
    terminal
        .draw(|f| super::render::draw(f, &mut app))
        .context("draw")?;
    app.startup();
    let res = super::event_loop::run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    res
}

impl App {
    /// First fetch: the record count, then the list.
    fn startup(&mut self) {
        match self.console.refresh_count(None) {
            Ok(count) => self.push_output(vec![format!("record count: {}", count)]),
            Err(err) => self.push_error(format!("{:#}", err)),
        }
        self.reload();
        self.push_output(vec![
            "/ search   space select   o original   m merge   e edit   a approve   d dishes   ? help"
                .to_string(),
        ]);
    }
}
