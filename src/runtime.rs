//! Line-driven event loop around `update`
//!
//! Reads one command per line, dispatches the resulting message, delivers
//! shell callbacks and prints a fresh frame whenever a command asks for a
//! redraw.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::cli::{SeedSource, StartupConfig};
use crate::commands::{Cmd, SourceListener};
use crate::config;
use crate::input::{parse_command, Input, HELP};
use crate::model::{AppModel, Forest, SourceConfig};
use crate::tree::TreeError;
use crate::update::update;
use crate::view::render_frame;

/// Build the initial model from startup configuration
pub fn build_model(startup: &StartupConfig) -> Result<AppModel> {
    let mut seed = match &startup.seed {
        SeedSource::Demo => SourceConfig::demo(),
        SeedSource::Empty => SourceConfig::default(),
        SeedSource::File(path) => config::load_seed(path)?,
    };
    if let Some(max) = startup.max_sources {
        seed.max_sources = max;
    }
    Ok(AppModel::new(seed))
}

/// Shell-side record of the callbacks the widgets emitted
#[derive(Debug, Default)]
pub struct EventLog {
    pub lines: Vec<String>,
}

impl SourceListener for EventLog {
    fn on_source_select(&mut self, id: &str, name: &str) {
        tracing::info!(id, name, "source selected");
        self.lines.push(format!("selected: '{}' ({})", name, id));
    }

    fn on_sources_change(&mut self, sources: &Forest) {
        tracing::info!(
            roots = sources.root_count(),
            nodes = sources.node_count(),
            "sources changed"
        );
        self.lines.push(format!(
            "sources: {} top-level, {} total",
            sources.root_count(),
            sources.node_count()
        ));
    }

    fn on_max_sources_change(&mut self, max: u32) {
        tracing::info!(max, "max sources changed");
        self.lines.push(format!("max sources: {}", max));
    }

    fn on_rejected(&mut self, error: &TreeError) {
        self.lines.push(format!("ignored: {}", error));
    }
}

/// Whether the loop should keep reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Runtime {
    pub model: AppModel,
    pub events: EventLog,
    indent_px: u32,
}

impl Runtime {
    pub fn new(model: AppModel, indent_px: u32) -> Self {
        Self {
            model,
            events: EventLog::default(),
            indent_px,
        }
    }

    /// Process one input line, writing any output to `out`
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> Result<Flow> {
        let msg = match parse_command(line) {
            Ok(Input::Msg(msg)) => msg,
            Ok(Input::Show) => {
                self.render(out)?;
                return Ok(Flow::Continue);
            }
            Ok(Input::Help) => {
                writeln!(out, "{}", HELP)?;
                return Ok(Flow::Continue);
            }
            Ok(Input::Blank) => return Ok(Flow::Continue),
            Err(e) => {
                writeln!(out, "{}", e)?;
                return Ok(Flow::Continue);
            }
        };

        let Some(cmd) = update(&mut self.model, msg) else {
            return Ok(Flow::Continue);
        };
        self.process_cmd(&cmd, out)
    }

    fn process_cmd(&mut self, cmd: &Cmd, out: &mut impl Write) -> Result<Flow> {
        let first_new = self.events.lines.len();
        cmd.dispatch(&mut self.events);
        for line in &self.events.lines[first_new..] {
            writeln!(out, "> {}", line)?;
        }

        if cmd.is_quit() {
            return Ok(Flow::Quit);
        }
        if cmd.needs_redraw() {
            self.render(out)?;
        }
        Ok(Flow::Continue)
    }

    pub fn render(&self, out: &mut impl Write) -> Result<()> {
        write!(out, "{}", render_frame(&self.model, self.indent_px))?;
        out.flush()?;
        Ok(())
    }

    /// Run until the input ends or a quit command arrives
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> Result<()> {
        self.render(out)?;
        for line in input.lines() {
            let line = line.context("failed to read command input")?;
            if self.handle_line(&line, out)? == Flow::Quit {
                tracing::debug!("quit requested");
                break;
            }
        }
        Ok(())
    }
}
