//! Plotcanvas - live plots of simulated signals in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use plotcanvas::app::App;
use plotcanvas::curve::DEFAULT_CURVE_CAPACITY;
use plotcanvas::{export, script, ui, CanvasConfig, CurveRegistry, PlotCanvas, SimulatedSignals};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "plotcanvas")]
#[command(about = "Live plots of simulated signals in the terminal", long_about = None)]
struct Args {
    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Milliseconds between simulation ticks
    #[arg(long, default_value_t = 100)]
    tick_ms: u64,

    /// Samples kept per curve
    #[arg(long, default_value_t = DEFAULT_CURVE_CAPACITY)]
    max_points: usize,

    /// Canvas title
    #[arg(long)]
    title: Option<String>,

    /// Run a canvas script headless instead of opening the terminal UI
    #[arg(long)]
    script: Option<PathBuf>,

    /// Write plotted data as CSV after the script finishes
    #[arg(long, requires = "script")]
    export: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(log_file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting plotcanvas");
    }

    let config = CanvasConfig {
        curve_capacity: args.max_points.max(1),
        ..CanvasConfig::default()
    };
    let dt = args.tick_ms as f64 / 1000.0;

    if let Some(script_path) = &args.script {
        return run_script(script_path, &args, config, dt);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let mut app = App::new(config, dt);
    if let Some(title) = &args.title {
        app.canvas.set_title(title.as_str());
    }
    let res = run_app(&mut terminal, app, Duration::from_millis(args.tick_ms.max(1)));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    tracing::info!("plotcanvas exited");
    Ok(())
}

fn run_script(path: &std::path::Path, args: &Args, config: CanvasConfig, dt: f64) -> Result<()> {
    let source = script::read_script(path)?;
    let mut canvas = PlotCanvas::with_config(config, CurveRegistry::shared());
    if let Some(title) = &args.title {
        canvas.set_title(title.as_str());
    }
    let mut stdout = io::stdout().lock();
    script::run_script(&source, &mut canvas, &SimulatedSignals::new(), dt, &mut stdout)?;

    if let Some(export_path) = args.export.as_deref() {
        export::write_csv(&canvas, export_path)?;
    }
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    tick_rate: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Relabel mode - handle separately
                if app.relabel_buffer().is_some() {
                    match key.code {
                        KeyCode::Enter => app.relabel_commit(),
                        KeyCode::Esc => app.relabel_cancel(),
                        KeyCode::Backspace => app.relabel_backspace(),
                        KeyCode::Char(c) => app.relabel_input(c),
                        _ => {},
                    }
                    continue;
                }

                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),
                    (KeyModifiers::NONE, KeyCode::Char('x')) => app.delete_canvas(),

                    // Selection
                    (KeyModifiers::NONE, KeyCode::Down)
                    | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                        app.select_next();
                    },
                    (KeyModifiers::NONE, KeyCode::Up)
                    | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                        app.select_prev();
                    },

                    // Variables and plots
                    (KeyModifiers::NONE, KeyCode::Char('a')) => app.add_signal(),
                    (KeyModifiers::SHIFT, KeyCode::Char('A')) => {
                        app.add_signal_to_selected_plot();
                    },
                    (KeyModifiers::NONE, KeyCode::Char('d')) => app.remove_selected(),
                    (KeyModifiers::SHIFT, KeyCode::Char('D')) => app.remove_selected_plot(),
                    (KeyModifiers::NONE, KeyCode::Char('m')) => {
                        app.move_selected_to_next_plot();
                    },
                    (KeyModifiers::SHIFT, KeyCode::Char('M')) => {
                        app.move_selected_to_new_plot();
                    },
                    (KeyModifiers::SHIFT, KeyCode::Char('L')) => app.start_relabel(),

                    // Run control
                    (KeyModifiers::NONE, KeyCode::Char('r')) => app.restart(),
                    (KeyModifiers::NONE, KeyCode::Char('c')) => app.clear(),
                    (KeyModifiers::NONE, KeyCode::Char(' ')) => app.toggle_pause(),

                    // Features
                    (KeyModifiers::NONE, KeyCode::Char('e')) => app.copy_csv(),
                    (KeyModifiers::SHIFT, KeyCode::Char('T')) => app.cycle_theme(),

                    _ => {},
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
        if app.should_quit {
            return Ok(());
        }
    }
}
