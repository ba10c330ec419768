use clap::{Parser, Subcommand};
use phugpa_rs::{CivilDate, ObservanceType};

/// Tibetan Phugpa calendar and practice dates.
#[derive(Parser)]
#[command(name = "phugpa", version, about = "Tibetan Phugpa calendar CLI")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Tibetan date of a solar date
    Tibetan {
        /// Solar date (YYYY-MM-DD or YYYYMMDD)
        #[arg(long)]
        date: CivilDate,
        #[arg(long)]
        json: bool,
    },
    /// Solar dates of matching Tibetan dates; omitted fields match anything
    Solar {
        /// Rabjung (60-year cycle)
        #[arg(long)]
        rabjung: Option<i32>,
        /// Year within the cycle (1-60)
        #[arg(long)]
        year: Option<u32>,
        /// Tibetan month (1-12)
        #[arg(long)]
        month: Option<u32>,
        /// Lunar day (1-30)
        #[arg(long)]
        day: Option<u32>,
        #[arg(long)]
        json: bool,
    },
    /// Observances for a range of solar dates
    Days {
        /// First date, inclusive
        #[arg(long)]
        from: CivilDate,
        /// Last date, inclusive
        #[arg(long)]
        to: CivilDate,
        #[arg(long)]
        json: bool,
    },
    /// Observances for one solar month
    Month {
        #[arg(long)]
        year: i32,
        /// Month (1-12)
        #[arg(long)]
        month: u32,
        #[arg(long)]
        json: bool,
    },
    /// List the practice calendars
    Calendars {
        #[arg(long)]
        json: bool,
    },
    /// iCalendar export on stdout
    Ical {
        /// First date, inclusive
        #[arg(long)]
        from: CivilDate,
        /// Last date, inclusive
        #[arg(long)]
        to: CivilDate,
        /// Calendar codes to include (comma separated); all when omitted
        #[arg(long, value_delimiter = ',')]
        calendars: Vec<ObservanceType>,
        /// Subscription URL written to the calendar header
        #[arg(long)]
        url: Option<String>,
        /// Calendar name shown by clients
        #[arg(long)]
        name: Option<String>,
    },
    /// Dump the month table as tab-separated text
    Table {
        /// Only months of this rabjung
        #[arg(long)]
        rabjung: Option<i32>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_dates_and_calendar_codes() {
        let cli = Cli::try_parse_from([
            "phugpa",
            "-vv",
            "ical",
            "--from",
            "20240101",
            "--to",
            "2024-12-31",
            "--calendars",
            "tsog,PRECEPTS",
        ])
        .expect("valid arguments");
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Ical {
                from, calendars, ..
            } => {
                assert_eq!(from.to_string(), "2024-01-01");
                assert_eq!(
                    calendars,
                    [ObservanceType::TsogOffering, ObservanceType::EightPrecepts]
                );
            }
            _ => panic!("expected ical"),
        }
    }

    #[test]
    fn rejects_bad_input() {
        assert!(Cli::try_parse_from(["phugpa", "tibetan", "--date", "2024-02-30"]).is_err());
        assert!(Cli::try_parse_from(["phugpa", "calendars-x"]).is_err());
        assert!(
            Cli::try_parse_from([
                "phugpa", "ical", "--from", "2024-01-01", "--to", "2024-01-02", "--calendars",
                "SOJONG"
            ])
            .is_err()
        );
    }
}
