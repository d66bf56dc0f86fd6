use std::{
    io::{self, Write},
    rc::Rc,
};

use anyhow::Context;
use clap::Parser;
use slog::Drain;
use windeck_framework::{Describe, Indent, ObjectFactory, RenderWindow, RenderWindowCollection};

mod cli;

/// Our crates log everything, the rest only warnings. `RUST_LOG` directives
/// are applied on top.
fn level_filter<D>(drain: D, directives: Option<&str>) -> slog_envlogger::EnvLogger<D>
where
    D: Drain<Ok = (), Err = slog::Never>,
{
    let mut builder = slog_envlogger::LogBuilder::new(drain)
        .filter(Some("windeck"), slog::FilterLevel::Trace)
        .filter(Some("windeck_framework"), slog::FilterLevel::Trace)
        .filter(None, slog::FilterLevel::Warning);

    if let Some(directives) = directives {
        builder = builder.parse(directives);
    }

    builder.build()
}

fn init_log() -> slog::Logger {
    let rust_log = std::env::var("RUST_LOG").ok();
    let terminal_drain = level_filter(
        slog_term::CompactFormat::new(slog_term::TermDecorator::new().stderr().build())
            .build()
            .fuse(),
        rust_log.as_deref(),
    )
    .fuse();

    let terminal_drain = slog_async::Async::default(terminal_drain).fuse();

    let log = slog::Logger::root(terminal_drain.fuse(), slog::o!());

    slog_stdlog::init().expect("Could not setup log backend");

    log
}

fn build_collection(
    factory: &ObjectFactory,
    opt: &cli::WindeckCliOptions,
) -> anyhow::Result<RenderWindowCollection> {
    let mut windows: RenderWindowCollection = factory
        .create("RenderWindowCollection")
        .context("Could not create the window collection")?;

    for spec in &opt.windows {
        let window: Rc<dyn RenderWindow> = Rc::new(spec.build());
        slog_scope::debug!("Adding window"; "title" => window.title());
        windows.add(window);
    }

    for title in &opt.removals {
        let window = windows.find_by_title(title).cloned();
        match window {
            Some(window) => {
                windows.remove(&window);
            }
            None => slog_scope::warn!("No window to remove"; "title" => title.as_str()),
        }
    }

    Ok(windows)
}

fn print_description(
    out: &mut dyn Write,
    windows: &RenderWindowCollection,
    indent: Indent,
    reverse: bool,
) -> io::Result<()> {
    writeln!(out, "{}RenderWindowCollection", indent)?;
    windows.describe(out, indent.next_level())?;

    let nested = indent.next_level().next_level();
    let mut describe_window = |window: &Rc<dyn RenderWindow>| -> io::Result<()> {
        writeln!(out, "{}{}:", indent.next_level(), window.title())?;
        window.describe(&mut *out, nested)
    };

    if reverse {
        windows.iter().rev().try_for_each(&mut describe_window)
    } else {
        windows.iter().try_for_each(&mut describe_window)
    }
}

fn main() -> anyhow::Result<()> {
    let log = init_log();
    let _guard = slog_scope::set_global_logger(log);

    let opt = cli::WindeckCliOptions::parse();

    let factory = ObjectFactory::with_defaults();
    let windows = build_collection(&factory, &opt)?;

    slog_scope::info!("Collection ready"; "windows" => windows.count());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_description(&mut out, &windows, Indent::new(opt.indent), opt.reverse)
        .context("Could not write the description")?;
    out.flush()?;

    Ok(())
}
