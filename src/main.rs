mod logging;
use anyhow::{bail, Context};
use lexopt::{Arg, Parser, ValueExt};
use std::ffi::OsString;
use std::path::PathBuf;
use tekufah::{
    gregorian_to_sacred, parse_date, sabbaths, CycleDate, DayCell, Presets, SacredDate,
    SacredMonth,
};
use time::{Date, OffsetDateTime};

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run { options: Options, action: Action },
    Help,
    Version,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Options {
    anchor: Option<Date>,
    preset: Option<String>,
    config: Option<PathBuf>,
    verbosity: u8,
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum Action {
    ToSacred { date: Option<Date> },
    ToGregorian { month: u8, day: u8 },
    Month { month: u8 },
    Sabbaths,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut options = Options::default();
        let mut args = Vec::new();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('a') | Arg::Long("anchor") => {
                    options.anchor = Some(parse_date_arg(parser.value()?.string()?)?);
                }
                Arg::Short('p') | Arg::Long("preset") => {
                    options.preset = Some(parser.value()?.string()?);
                }
                Arg::Short('c') | Arg::Long("config") => {
                    options.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('v') | Arg::Long("verbose") => {
                    options.verbosity = options.verbosity.saturating_add(1);
                }
                Arg::Value(value) => args.push(value.string()?),
                _ => return Err(arg.unexpected()),
            }
        }
        let action = match args.as_slice() {
            [] => Action::ToSacred { date: None },
            [cmd, month, day] if cmd == "gregorian" => Action::ToGregorian {
                month: parse_number(month)?,
                day: parse_number(day)?,
            },
            [cmd, month] if cmd == "month" => Action::Month {
                month: parse_number(month)?,
            },
            [cmd] if cmd == "sabbaths" => Action::Sabbaths,
            [cmd, ..] if cmd == "gregorian" => {
                return Err(lexopt::Error::from("gregorian requires MONTH and DAY"))
            }
            [cmd, ..] if cmd == "month" => {
                return Err(lexopt::Error::from("month requires a single MONTH"))
            }
            [date] => Action::ToSacred {
                date: Some(parse_date_arg(date.clone())?),
            },
            [_, extra, ..] => {
                return Err(lexopt::Error::UnexpectedArgument(OsString::from(extra)))
            }
        };
        Ok(Command::Run { options, action })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run { options, action } => {
                logging::init(options.verbosity);
                action.run(&options)
            }
            Command::Help => {
                println!("Usage: tekufah [OPTIONS] [YYYY-MM-DD]");
                println!("       tekufah [OPTIONS] gregorian <MONTH> <DAY>");
                println!("       tekufah [OPTIONS] month <MONTH>");
                println!("       tekufah [OPTIONS] sabbaths");
                println!();
                println!("Convert between Gregorian dates and the 364-day Tekufah calendar");
                println!();
                println!("Options:");
                println!("  -a, --anchor <YYYY-MM-DD>");
                println!("                    Gregorian date of Month 1, Day 1");
                println!("  -p, --preset <NAME>");
                println!("                    Use the named anchor preset");
                println!("  -c, --config <PATH>");
                println!("                    Read anchor presets from PATH");
                println!("  -v, --verbose     Increase logging verbosity (repeatable)");
                println!("  -h, --help        Display this help message and exit");
                println!("  -V, --version     Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

impl Action {
    fn run(self, options: &Options) -> anyhow::Result<()> {
        match self {
            Action::ToSacred { date } => {
                let target = match date {
                    Some(date) => date,
                    None => today()?,
                };
                let anchor = resolve_anchor(options, Some(target))?;
                if let Some(sd) = gregorian_to_sacred(anchor, target) {
                    println!("{target}: {sd}{}", describe(sd));
                } else {
                    let cd = CycleDate::locate(anchor, target);
                    tracing::warn!(%target, %anchor, "Date is outside the anchored cycle");
                    println!("{target}: outside the cycle beginning {anchor}; falls on {cd}");
                }
            }
            Action::ToGregorian { month, day } => {
                let sd = SacredDate::new(month, day)?;
                let anchor = resolve_anchor(options, None)?;
                let date = sd.to_gregorian(anchor)?;
                println!("{sd}: {date}{}", describe(sd));
            }
            Action::Month { month } => {
                let month = SacredMonth::new(resolve_anchor(options, None)?, month)?;
                println!("Month {} ({} days)", month.month(), month.day_count());
                for cell in month.days()? {
                    print_cell(cell);
                }
            }
            Action::Sabbaths => {
                for cell in sabbaths(resolve_anchor(options, None)?) {
                    print_cell(cell);
                }
            }
        }
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn today() -> anyhow::Result<Date> {
    Ok(OffsetDateTime::now_local()
        .context("failed to determine local date")?
        .date())
}

/// Determines the anchor to use for `target` (today, if not given),
/// preferring, in order: an explicit `--anchor`, an explicit `--preset`, the
/// latest preset on or before the target, and the presets file's default.
fn resolve_anchor(options: &Options, target: Option<Date>) -> anyhow::Result<Date> {
    let anchor = resolve_anchor_with(options, target, today)?;
    tracing::info!(%anchor, "Using anchor");
    Ok(anchor)
}

/// [`resolve_anchor`] with the source of today's date supplied by the caller
fn resolve_anchor_with<F>(
    options: &Options,
    target: Option<Date>,
    clock: F,
) -> anyhow::Result<Date>
where
    F: FnOnce() -> anyhow::Result<Date>,
{
    if let Some(anchor) = options.anchor {
        return Ok(anchor);
    }
    let presets = load_presets(options)?;
    if let Some(name) = options.preset.as_deref() {
        return presets
            .get(name)
            .with_context(|| format!("no anchor preset named {name:?}"));
    }
    // Only consult the clock when a preset has to be picked by date
    let target = match target {
        Some(target) => Some(target),
        None if presets.is_empty() => None,
        None => match clock() {
            Ok(today) => Some(today),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Could not determine today's date; falling back to default preset"
                );
                None
            }
        },
    };
    if let Some(target) = target {
        if let Some(anchor) = presets.anchor_for(target) {
            tracing::debug!(%target, %anchor, "Selected preset anchor for date");
            return Ok(anchor);
        }
    }
    if let Some(anchor) = presets.default_anchor() {
        return Ok(anchor);
    }
    bail!("no anchor date configured; pass --anchor or define presets")
}

fn load_presets(options: &Options) -> anyhow::Result<Presets> {
    if let Some(path) = options.config.as_deref() {
        return Presets::load(path)
            .with_context(|| format!("failed to load presets from {}", path.display()));
    }
    match Presets::default_path() {
        Some(path) if path.exists() => Presets::load(&path)
            .with_context(|| format!("failed to load presets from {}", path.display())),
        _ => {
            tracing::debug!("No presets file found; continuing without presets");
            Ok(Presets::default())
        }
    }
}

fn describe(sd: SacredDate) -> &'static str {
    if sd.is_sabbath() {
        " (Sabbath)"
    } else if sd.is_tekufah_day() {
        " (Tekufah day)"
    } else if sd.is_transitional() {
        " (transitional day)"
    } else {
        ""
    }
}

fn print_cell(cell: DayCell) {
    println!("{}  {}{}", cell.gregorian, cell.sacred, describe(cell.sacred));
}

fn parse_date_arg(value: String) -> Result<Date, lexopt::Error> {
    match parse_date(&value) {
        Ok(d) => Ok(d),
        Err(e) => Err(lexopt::Error::ParsingFailed {
            value,
            error: Box::new(e),
        }),
    }
}

fn parse_number(value: &str) -> Result<u8, lexopt::Error> {
    value
        .parse::<u8>()
        .map_err(|e| lexopt::Error::ParsingFailed {
            value: value.to_owned(),
            error: Box::new(e),
        })
}
