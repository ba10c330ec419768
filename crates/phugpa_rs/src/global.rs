//! Process-wide month table.

use std::sync::{Mutex, OnceLock};

use phugpa_calendar::{CalendarConfig, MonthTable};

use crate::error::PhugpaError;

static TABLE: OnceLock<MonthTable> = OnceLock::new();
static BUILD: Mutex<()> = Mutex::new(());

fn get_or_build(config: &CalendarConfig) -> Result<(&'static MonthTable, bool), PhugpaError> {
    if let Some(t) = TABLE.get() {
        return Ok((t, false));
    }
    // One build at a time; a failed build leaves the table unset.
    let _guard = BUILD.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    if let Some(t) = TABLE.get() {
        return Ok((t, false));
    }
    let built = MonthTable::build(config)?;
    Ok((TABLE.get_or_init(|| built), true))
}

/// Build the shared table from `config`.
///
/// Returns [`PhugpaError::AlreadyInitialized`] if the table already exists,
/// whether from an earlier `init` or from first use with the default config.
pub fn init(config: &CalendarConfig) -> Result<(), PhugpaError> {
    match get_or_build(config)? {
        (_, true) => Ok(()),
        (_, false) => Err(PhugpaError::AlreadyInitialized),
    }
}

/// Whether the shared table has been built.
pub fn is_initialized() -> bool {
    TABLE.get().is_some()
}

/// The shared table, built with [`CalendarConfig::default`] on first use.
pub fn table() -> Result<&'static MonthTable, PhugpaError> {
    get_or_build(&CalendarConfig::default()).map(|(t, _)| t)
}
