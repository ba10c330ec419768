mod cli;

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use phugpa_rs::{
    DatePair, DayKind, DayRecord, IcalOptions, MonthKind, TibetanQuery, calendars,
    day_records_for, month_records, render_ical, solar_dates_for, table, tibetan_date_for,
};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

/// Filter directive for the `phugpa*` crates at the given `-v` count.
fn log_directive(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Targets match by prefix, so this covers every workspace crate.
    format!("phugpa={level}")
}

/// Log to stderr; `RUST_LOG` wins over `-v` when set.
fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_directive(verbosity)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity > 1)
        .with_writer(io::stderr)
        .init();
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Tibetan { date, json } => {
            let tibetan = tibetan_date_for(date)?
                .with_context(|| format!("{date} is outside the calendar era"))?;
            if json {
                print_json(&tibetan)?;
            } else {
                println!("{date}: {tibetan}");
            }
        }

        Command::Solar {
            rabjung,
            year,
            month,
            day,
            json,
        } => {
            let query = TibetanQuery {
                rabjung,
                year,
                month,
                day,
            };
            let pairs = solar_dates_for(query)?;
            debug!(count = pairs.len(), "matched Tibetan dates");
            if json {
                print_json(&pairs)?;
            } else {
                print_pairs(&pairs)?;
            }
        }

        Command::Days { from, to, json } => {
            let records = day_records_for(from, to)?;
            print_records(&records, json)?;
        }

        Command::Month { year, month, json } => {
            let records = month_records(year, month)?;
            print_records(&records, json)?;
        }

        Command::Calendars { json } => {
            if json {
                print_json(calendars())?;
            } else {
                for c in calendars() {
                    println!(
                        "{:<16} {:<18} {} {} {}",
                        c.kind.code(),
                        c.title,
                        c.color,
                        c.background_color,
                        c.color_name
                    );
                }
            }
        }

        Command::Ical {
            from,
            to,
            calendars,
            url,
            name,
        } => {
            let records = day_records_for(from, to)?;
            let mut options = IcalOptions {
                url,
                ..IcalOptions::default()
            };
            if let Some(name) = name {
                options.calendar_name = name;
            }
            let ics = render_ical(&records, &calendars, &options);
            io::stdout().write_all(ics.as_bytes())?;
        }

        Command::Table { rabjung } => {
            let table = table()?;
            let mut out = io::stdout().lock();
            writeln!(
                out,
                "RABJUNG\tYEAR\tMONTH\tKIND\tINDEX\tSKIP1\tSKIP2\tDOUBLE1\tDOUBLE2\tSTART"
            )?;
            for m in table
                .months()
                .iter()
                .filter(|m| rabjung.is_none_or(|r| m.rabjung == r))
            {
                let kind = match m.kind {
                    MonthKind::Normal => 'N',
                    MonthKind::FirstOfDouble => 'F',
                    MonthKind::SecondOfDouble => 'S',
                };
                let start = m.start.map_or_else(|| "-".to_string(), |d| d.to_string());
                writeln!(
                    out,
                    "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
                    m.rabjung,
                    m.year,
                    m.month,
                    kind,
                    m.index,
                    m.skips[0],
                    m.skips[1],
                    m.doubles[0],
                    m.doubles[1],
                    start
                )?;
            }
        }
    }
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_pairs(pairs: &[DatePair]) -> Result<()> {
    let mut out = io::stdout().lock();
    for p in pairs {
        match p.solar {
            Some(date) => writeln!(out, "{}\t{}", p.tibetan, date)?,
            None => writeln!(out, "{}\tskipped", p.tibetan)?,
        }
    }
    Ok(())
}

fn print_records(records: &[DayRecord], json: bool) -> Result<()> {
    if json {
        return print_json(records);
    }
    let mut out = io::stdout().lock();
    for r in records {
        let t = &r.tibetan;
        let month_mark = if t.month_kind == MonthKind::SecondOfDouble {
            "'"
        } else {
            ""
        };
        let day_mark = match t.day_kind {
            DayKind::Normal => "",
            DayKind::FirstOfDouble => " (1st of double)",
            DayKind::SecondOfDouble => " (2nd of double)",
        };
        writeln!(
            out,
            "{}  {}/{}/{}{}/{}{}",
            r.date, t.rabjung, t.year, t.month, month_mark, t.day, day_mark
        )?;
        for o in &r.observances {
            writeln!(out, "    [{}] {}", o.kind.code(), o.name)?;
        }
    }
    Ok(())
}
