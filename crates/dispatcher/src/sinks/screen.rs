//! Screen sink initializer - interactive output with terminal-aware color

use std::io;

use is_terminal::IsTerminal;

use contracts::{colorize, Severity};

use crate::dispatcher::Dispatcher;
use crate::format::TextFormatter;
use crate::sink::WriterSink;

/// Map verbosity options to a screen threshold
///
/// `trace` wins over `debug`; with neither set the caller-supplied default
/// applies (`Info` for interactive invocations, `Fatal` for silent ones).
pub fn log_level_for(debug: bool, trace: bool, default: Severity) -> Severity {
    if trace {
        Severity::Trace
    } else if debug {
        Severity::Debug
    } else {
        default
    }
}

/// Build the screen sink for the given threshold
///
/// Detects whether stdout is attached to an interactive terminal; when it
/// is, output is colorized and the process-wide color flag is raised for
/// other text-rendering collaborators. Timestamps are suppressed unless
/// the threshold is at debug verbosity or beyond.
pub fn screen_sink(level: Severity) -> WriterSink {
    let interactive = io::stdout().is_terminal();
    screen_sink_to(Box::new(io::stdout()), interactive, level)
}

fn screen_sink_to(
    writer: Box<dyn io::Write + Send>,
    interactive: bool,
    level: Severity,
) -> WriterSink {
    if interactive {
        colorize().set(true);
    }

    let formatter = TextFormatter {
        disable_timestamp: level < Severity::Debug,
        force_colors: interactive,
        ..Default::default()
    };

    WriterSink::new("screen", writer, formatter, level)
}

/// Construct the screen sink and register it
pub fn init_screen(dispatcher: &Dispatcher, level: Severity) {
    dispatcher.register(Box::new(screen_sink(level)));
}
