//! Terminal calculator.
//!
//! Run with: cargo run --example calculator_tui --features tui
//!
//! Pass `--skin midnight` for the dark skin, or press Tab to switch live.
//! Buttons respond to mouse clicks; digits and operators to the keyboard.

use std::io;

use clap::{Parser, ValueEnum};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tenkey::tui::{pane_layout, render, CalculatorApp, InputHandler, Skin};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SkinArg {
    Plain,
    Midnight,
}

impl From<SkinArg> for Skin {
    fn from(value: SkinArg) -> Self {
        match value {
            SkinArg::Plain => Skin::Plain,
            SkinArg::Midnight => Skin::Midnight,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "calculator_tui", about = "Button-driven terminal calculator")]
struct Args {
    /// Visual skin to start with.
    #[arg(long, value_enum, default_value = "plain")]
    skin: SkinArg,

    /// Maximum number of tape entries to keep.
    #[arg(long, default_value_t = 100)]
    tape_limit: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Log to stderr only when asked; stdout belongs to the TUI.
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init();
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = CalculatorApp::with_skin_and_tape_limit(args.skin.into(), args.tape_limit);
    let result = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: CalculatorApp,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = InputHandler::new();

    loop {
        terminal.draw(|frame| render(&app, frame))?;

        match event::read()? {
            Event::Key(key) => {
                if app.apply(input.handle_key(key)) {
                    break;
                }
            }
            Event::Mouse(mouse) => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                    let size = terminal.size()?;
                    let frame_area = Rect::new(0, 0, size.width, size.height);
                    let (_, keypad_area, _, _) = pane_layout(frame_area);
                    app.click(keypad_area, mouse.column, mouse.row);
                }
            }
            _ => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
