//! plotdeck - a terminal pager for plot frames.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use plotdeck::app::{App, ColorPalette, Theme};
use plotdeck::sequence::{FrameSequence, NumberPlacement, SequenceConfig};
use plotdeck::{demo, ui};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "plotdeck", version)]
#[command(about = "Page through a deck of plot frames in the terminal", long_about = None)]
struct Args {
    /// Color theme
    #[arg(long, value_enum, default_value_t = Theme::GruvboxDark)]
    theme: Theme,

    /// Palette for images and line series
    #[arg(long, value_enum, default_value_t = ColorPalette::Viridis)]
    palette: ColorPalette,

    /// Start with the frame-number label shown
    #[arg(long)]
    numbers: bool,

    /// Put the frame-number label under the bottom-right corner
    #[arg(long)]
    numbers_bottom: bool,

    /// Print the frames and exit without opening the viewer
    #[arg(long)]
    list: bool,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)?;
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(log_file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting plotdeck");
    }

    let config = SequenceConfig {
        numbering: args.numbers,
        placement: if args.numbers_bottom {
            NumberPlacement::Bottom
        } else {
            NumberPlacement::Top
        },
    };
    let mut sequence = FrameSequence::with_config(config);
    demo::populate(&mut sequence)?;

    if args.list {
        let total = sequence.len();
        for frame in sequence.frames() {
            println!("{}/{} {}", frame.ordinal() + 1, total, frame.summary());
        }
        tracing::info!("Listed {} frames", total);
        return Ok(());
    }

    // Start on the first frame
    sequence.switch_to(0)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(sequence, args.theme, args.palette);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("plotdeck exited");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        if app.needs_redraw() {
            terminal.draw(|f| ui::draw(f, &app))?;
        }

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if !app.handle_key(key) {
                        return Ok(());
                    }
                },
                Event::Resize(_, _) => app.request_redraw(),
                _ => {},
            }
        }
    }
}
