use std::time::Duration;

use aibubble::app::App;
use aibubble::bubble::{Bubble, BubbleView, render_to_string};
use aibubble::cli::{Cli, fragments_json};
use aibubble::config::load_config;
use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

/// Typing indicator frame interval
const TICK_RATE: Duration = Duration::from_millis(300);

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    env_logger::init();

    let cli = Cli::parse();
    let message = cli.load_message()?;

    if cli.fragments {
        println!("{}", fragments_json(&message)?);
        return Ok(());
    }

    let config_result = load_config();

    if cli.print {
        if let Some(warning) = &config_result.warning {
            eprintln!("{}", warning);
        }
        let bubble = Bubble::from_message(&message);
        let view = BubbleView::new(&bubble, &config_result.config);
        println!("{}", render_to_string(view, cli.width));
        return Ok(());
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    // Run the application
    let result = run(terminal, App::new(message, config_result));

    // Restore terminal (automatic cleanup)
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        // Render the UI
        terminal.draw(|frame| app.render(frame))?;

        // Wait for input, advancing the typing animation on timeout
        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (avoid duplicates)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        } else {
            app.on_tick();
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
