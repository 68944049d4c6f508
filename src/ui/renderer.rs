use crate::api::create_services;
use crate::config::Config;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{Component, EventHandler, EventType};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;

/// Run the TUI until the user quits.
///
/// The terminal is restored even when the loop fails.
pub async fn run_app(config: Config) -> anyhow::Result<()> {
    let services = create_services(&config.api)?;
    let mut app = AppComponent::new(services, config.samples);
    let mut event_handler = EventHandler::new();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| app.render(f, f.area()))?;
            needs_render = false;
        }

        let event_result = event_handler.next_event().await?;

        match event_result {
            EventType::Key(_) | EventType::Resize(_, _) => {
                app.handle_event(event_result);
                needs_render = true;
            }
            EventType::Tick => {
                // Only redraw when a request came back
                for action in app.process_background_actions() {
                    app.dispatch(action);
                    needs_render = true;
                }
            }
            EventType::Other => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
