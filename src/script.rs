//! Headless canvas scripts.
//!
//! A script is a list of commands, one per line. Blank lines and lines
//! starting with `#` are skipped.
//!
//! ```text
//! add sim/sine          # new plot
//! add sim/cosine 0      # into plot 0
//! tick 20
//! restart
//! print
//! ```

use std::io::Write;
use std::path::Path;

use crate::canvas::PlotCanvas;
use crate::error::{PlotCanvasError, Result};
use crate::plot::PlotId;
use crate::signal::SignalSource;
use crate::slots::VariableId;

/// One parsed script command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `add <name> [plot]`
    Add {
        /// Variable name.
        name: String,
        /// Destination plot.
        plot: Option<PlotId>,
    },
    /// `add-plot`
    AddPlot,
    /// `remove <var>`
    Remove(VariableId),
    /// `remove-plot <plot>`
    RemovePlot(PlotId),
    /// `move <var> [target-var]`
    Move {
        /// Variable to move.
        variable: VariableId,
        /// Variable whose plot receives it.
        target: Option<VariableId>,
    },
    /// `label <var> <text>`
    Label {
        /// Variable to relabel.
        variable: VariableId,
        /// New label.
        text: String,
    },
    /// `restart`
    Restart,
    /// `tick <n>`
    Tick(u32),
    /// `clear`
    Clear,
    /// `update`
    Update,
    /// `print`
    Print,
}

/// Read a script file.
pub fn read_script(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| PlotCanvasError::script_read(path.to_path_buf(), e))
}

/// Parse one line. Returns `None` for blank lines and comments.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let mut args = rest.split_whitespace();

    let command = match word {
        "add" => {
            let name = args
                .next()
                .ok_or_else(|| PlotCanvasError::script(line_no, "add needs a variable name"))?;
            let plot = args
                .next()
                .map(|a| parse_number(line_no, a).map(PlotId::new))
                .transpose()?;
            Command::Add {
                name: name.to_string(),
                plot,
            }
        },
        "add-plot" => Command::AddPlot,
        "remove" => Command::Remove(VariableId::new(required(line_no, args.next(), "remove")?)),
        "remove-plot" => {
            Command::RemovePlot(PlotId::new(required(line_no, args.next(), "remove-plot")?))
        },
        "move" => {
            let variable = VariableId::new(required(line_no, args.next(), "move")?);
            let target = args
                .next()
                .map(|a| parse_number(line_no, a).map(VariableId::new))
                .transpose()?;
            Command::Move { variable, target }
        },
        "label" => {
            let (id, text) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| PlotCanvasError::script(line_no, "label needs a variable and text"))?;
            Command::Label {
                variable: VariableId::new(parse_number(line_no, id)?),
                text: text.trim().to_string(),
            }
        },
        "restart" => Command::Restart,
        "tick" => Command::Tick(required(line_no, args.next(), "tick")?),
        "clear" => Command::Clear,
        "update" => Command::Update,
        "print" => Command::Print,
        other => {
            return Err(PlotCanvasError::script(
                line_no,
                format!("unknown command `{}`", other),
            ))
        },
    };
    Ok(Some(command))
}

/// Run `source` against `canvas`, sampling `signals` every `dt` seconds of
/// simulated time. `print` output goes to `out`.
pub fn run_script<W: Write>(
    source: &str,
    canvas: &mut PlotCanvas,
    signals: &dyn SignalSource,
    dt: f64,
    out: &mut W,
) -> Result<()> {
    let mut time = 0.0;
    for (index, line) in source.lines().enumerate() {
        let Some(command) = parse_line(index + 1, line)? else {
            continue;
        };
        tracing::debug!(line = index + 1, ?command, "script command");

        match command {
            Command::Add { name, plot } => {
                canvas.add_variable_to(&name, plot);
            },
            Command::AddPlot => {
                canvas.add_plot();
            },
            Command::Remove(id) => canvas.remove_variable(id),
            Command::RemovePlot(id) => canvas.remove_plot(id),
            Command::Move { variable, target } => canvas.move_variable(variable, target),
            Command::Label { variable, text } => canvas.set_variable_label(variable, &text),
            Command::Restart => {
                canvas.restart();
                time = 0.0;
            },
            Command::Tick(steps) => {
                for _ in 0..steps {
                    canvas.registry().borrow_mut().sample_all(time, signals);
                    time += dt;
                }
                canvas.update();
            },
            Command::Clear => canvas.clear(),
            Command::Update => canvas.update(),
            Command::Print => print_canvas(canvas, out)?,
        }
    }
    Ok(())
}

/// Write a stable textual summary of the canvas.
pub fn print_canvas<W: Write>(canvas: &PlotCanvas, out: &mut W) -> Result<()> {
    writeln!(
        out,
        "canvas {:?} plots={}",
        canvas.config().title,
        canvas.plot_count()
    )?;
    if canvas.is_empty() {
        writeln!(out, "placeholder")?;
    }
    for record in canvas.records() {
        writeln!(out, "plot {}", record.id())?;
        for (variable, _) in record.variables() {
            let (name, label) = canvas
                .slots()
                .slot(variable)
                .map(|s| (s.name(), s.label()))
                .unwrap_or(("?", "?"));
            let points = record.curve_for(variable).map_or(0, |c| c.borrow().len());
            writeln!(
                out,
                "  var {} {:?} name={} points={}",
                variable, label, name, points
            )?;
        }
    }
    Ok(())
}

fn required(line_no: usize, arg: Option<&str>, command: &str) -> Result<u32> {
    let arg = arg.ok_or_else(|| {
        PlotCanvasError::script(line_no, format!("{} needs a numeric argument", command))
    })?;
    parse_number(line_no, arg)
}

fn parse_number(line_no: usize, arg: &str) -> Result<u32> {
    arg.parse()
        .map_err(|_| PlotCanvasError::script(line_no, format!("expected a number, got `{}`", arg)))
}
