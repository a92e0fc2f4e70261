//! Pinfield demo - pincode entry in the terminal
//!
//! This application shows the pincode component end to end: pick a preset,
//! paste or type a code (typing is filtered to backspace only), and confirm
//! with Enter.

// Module declarations
mod constants;

use anyhow::Result;
use clap::Parser;
use constants::{APP_BINARY_NAME, APP_NAME};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    text::Line,
    widgets::Paragraph,
    Frame,
};
use std::time::Duration;

use pinfield::style::Preset;
use pinfield::tui::{self, Component, PincodeEvent, PincodeView, Tui};
use pinfield::PincodeStyle;

/// Pinfield - pincode entry component demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Preset style to use (defaults to OS dark/light detection)
    #[arg(short, long, value_name = "NAME")]
    preset: Option<String>,

    /// List available presets and exit
    #[arg(long)]
    list_presets: bool,

    /// Override the preset's code length
    #[arg(short = 'n', long, value_name = "CELLS")]
    length: Option<usize>,

    /// Mask entered characters
    #[arg(short, long)]
    masked: bool,
}

/// How the demo session ended.
enum Outcome {
    Submitted(String),
    Cancelled,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list_presets {
        println!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));
        println!("Available presets:");
        for preset in Preset::ALL {
            let style = preset.style();
            println!(
                "  {:<10} {} cells, {:?} code",
                preset.name(),
                style.code_length,
                style.code_kind
            );
        }
        return Ok(());
    }

    let preset = match &cli.preset {
        Some(name) => match Preset::from_name(name) {
            Some(preset) => preset,
            None => {
                eprintln!("Error: Unknown preset: {name}");
                eprintln!();
                eprintln!("To see the available presets, run:");
                eprintln!("  {APP_BINARY_NAME} --list-presets");
                std::process::exit(1);
            }
        },
        None => Preset::detect(),
    };

    let mut style = preset.style();
    if let Some(length) = cli.length {
        // Host-side override, applied before the style is handed to the view
        style.code_length = length;
    }

    let mut terminal = tui::init_terminal()?;
    let result = run_demo(&mut terminal, &style, cli.masked);
    tui::restore_terminal(&mut terminal)?;

    match result? {
        Outcome::Submitted(code) => println!("Code entered: {code}"),
        Outcome::Cancelled => println!("Cancelled"),
    }
    Ok(())
}

/// Runs the demo loop until the user confirms or cancels.
fn run_demo(terminal: &mut Tui, style: &PincodeStyle, masked: bool) -> Result<Outcome> {
    let mut view = PincodeView::new(style).configure(|core| {
        core.masked = masked;
        core.placeholder = Some('\u{b7}');
    });

    // The bound code string - the single source of truth for the value
    let mut code = String::new();
    let mut status: Option<String> = None;

    loop {
        view.sync(&code);
        terminal.draw(|f| render(f, &view, style, status.as_deref()))?;

        // Poll for events with 100ms timeout so the cooldown countdown ticks
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        let pincode_event = match event::read()? {
            Event::Key(key) if is_clipboard_paste(&key) => {
                match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.get_text()) {
                    Ok(text) => {
                        let accepted = view.handle_paste(&text);
                        if accepted.is_none() {
                            status = Some("Clipboard content is not a valid code".to_string());
                        }
                        accepted
                    }
                    Err(e) => {
                        status = Some(format!("Failed to read clipboard: {e}"));
                        None
                    }
                }
            }
            Event::Key(key) => {
                status = None;
                view.handle_input(key)
            }
            Event::Paste(text) => view.handle_paste(&text),
            _ => None, // Resize etc. re-renders on the next loop
        };

        match pincode_event {
            Some(PincodeEvent::Changed(value)) => code = value,
            Some(PincodeEvent::Submitted(value)) => return Ok(Outcome::Submitted(value)),
            Some(PincodeEvent::Cancelled) => return Ok(Outcome::Cancelled),
            Some(PincodeEvent::ResendRequested) => {
                status = Some("New code requested".to_string());
            }
            None => {}
        }
    }
}

/// Ctrl+V fallback for terminals without bracketed paste.
fn is_clipboard_paste(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('v') && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn render(f: &mut Frame, view: &PincodeView, style: &PincodeStyle, status: Option<&str>) {
    let area = f.area();
    let (width, height) = PincodeView::footprint(style);
    view.render(f, centered(area, width, height), style);

    // Help/status line at the bottom of the screen
    let text = status.unwrap_or(
        "Paste code \u{b7} Backspace erase \u{b7} Enter confirm \u{b7} Ctrl+R resend \u{b7} Esc quit",
    );
    if area.height > 1 {
        let row = Rect::new(area.x, area.bottom() - 1, area.width, 1);
        let line = Paragraph::new(Line::from(text)).alignment(Alignment::Center);
        f.render_widget(line, row);
    }
}

/// Helper to center a fixed-size rectangle inside an area.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
