//! Display metadata for each observance type.

use serde::Serialize;

use crate::observance::ObservanceType;

/// How a practice calendar is shown to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarInfo {
    pub kind: ObservanceType,
    pub title: &'static str,
    /// Foreground color, `#rrggbb`.
    pub color: &'static str,
    /// Background color, `#rrggbb`.
    pub background_color: &'static str,
    /// CSS color name closest to the background.
    pub color_name: &'static str,
}

const fn info(
    kind: ObservanceType,
    title: &'static str,
    background_color: &'static str,
    color_name: &'static str,
) -> CalendarInfo {
    CalendarInfo {
        kind,
        title,
        color: "#ffffff",
        background_color,
        color_name,
    }
}

static CALENDARS: [CalendarInfo; 8] = [
    info(ObservanceType::BuddhaCommemoration, "Buddha Days", "#c06000", "coral"),
    info(ObservanceType::LunarPhase, "Full and New Moon", "#000000", "black"),
    info(ObservanceType::TsogOffering, "Tsog", "#7a0000", "firebrick"),
    info(ObservanceType::Tara, "Tara", "#258d25", "forestgreen"),
    info(ObservanceType::MedicineBuddha, "Medicine Buddha", "#3061cd", "cornflowerblue"),
    info(ObservanceType::EightPrecepts, "Precepts", "#a50000", "brown"),
    info(ObservanceType::ProtectorPuja, "Protector Puja", "#490071", "darkmagenta"),
    info(ObservanceType::Other, "Other", "#666666", "dimgrey"),
];

/// All practice calendars in display order.
pub fn calendars() -> &'static [CalendarInfo] {
    &CALENDARS
}

/// Calendar of an observance type.
pub fn calendar_for(kind: ObservanceType) -> &'static CalendarInfo {
    CALENDARS
        .iter()
        .find(|c| c.kind == kind)
        .unwrap_or(&CALENDARS[CALENDARS.len() - 1])
}
