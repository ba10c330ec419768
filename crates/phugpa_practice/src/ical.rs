//! iCalendar (RFC 5545) export of day records.

use crate::calendars::calendar_for;
use crate::days::DayRecord;
use crate::observance::ObservanceType;

/// Column at which description text is wrapped.
const WRAP_COLUMN: usize = 55;
/// Line break inside a folded property value.
const FOLD: &str = "\r\n\t ";

/// Calendar-level properties of an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IcalOptions {
    /// `PRODID` of the calendar.
    pub product_id: String,
    /// `X-WR-CALNAME` shown by calendar clients.
    pub calendar_name: String,
    /// Domain part of every event `UID`.
    pub domain: String,
    /// Subscription URL, emitted as `URL` when set.
    pub url: Option<String>,
}

impl Default for IcalOptions {
    fn default() -> Self {
        Self {
            product_id: "-//phugpa//Practice Dates//EN".to_string(),
            calendar_name: "Practice Dates".to_string(),
            domain: "phugpa.localhost".to_string(),
            url: None,
        }
    }
}

/// Escape a TEXT property value.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | ';' | ',' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}

/// Word-wrap `text` at `width` characters, joining lines with `sep`.
///
/// Breaks at the last space within the width; a word longer than the width
/// stays whole and breaks at the next space. Spaces at break points are
/// dropped, as is a space starting a wrapped line.
fn wrap(text: &str, width: usize, sep: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    let mut out = String::with_capacity(text.len() + text.len() / width * sep.len());
    let mut offset = 0;

    while len - offset > width {
        if chars[offset] == ' ' {
            offset += 1;
            continue;
        }
        let limit = offset + width;
        let at = chars[offset..=limit]
            .iter()
            .rposition(|&c| c == ' ')
            .map(|i| offset + i)
            .or_else(|| {
                chars[limit..]
                    .iter()
                    .position(|&c| c == ' ')
                    .map(|i| limit + i)
            });
        match at {
            Some(at) => {
                out.extend(&chars[offset..at]);
                out.push_str(sep);
                offset = at + 1;
            }
            None => break,
        }
    }
    out.extend(&chars[offset..]);
    out
}

fn compact(date: phugpa_time::CivilDate) -> String {
    format!("{:04}{:02}{:02}", date.year(), date.month(), date.day())
}

/// Render day records as an iCalendar document.
///
/// One all-day event is emitted per observance whose type is in `kinds`;
/// an empty `kinds` selects every type. Lines end with CRLF.
pub fn render_ical(records: &[DayRecord], kinds: &[ObservanceType], options: &IcalOptions) -> String {
    let mut out = String::new();
    let mut line = |s: &str| {
        out.push_str(s);
        out.push_str("\r\n");
    };

    line("BEGIN:VCALENDAR");
    line("VERSION:2.0");
    line(&format!("PRODID:{}", options.product_id));
    line(&format!("X-WR-CALNAME:{}", escape_text(&options.calendar_name)));
    line("REFRESH-INTERVAL;VALUE=DURATION:PT168H");
    line("METHOD:PUBLISH");
    if let Some(url) = &options.url {
        line(&format!("URL:{url}"));
    }

    for record in records {
        let day = compact(record.date);
        let next = compact(record.date.succ());
        let year = record.date.year();
        for obs in &record.observances {
            if !kinds.is_empty() && !kinds.contains(&obs.kind) {
                continue;
            }
            let cal = calendar_for(obs.kind);
            line(&format!(
                "BEGIN:VEVENT\r\n\
                 CLASS:PUBLIC\r\n\
                 UID:{day}_{code}@{domain}\r\n\
                 CREATED:{year:04}0101T000000Z\r\n\
                 DTSTART;VALUE=DATE:{day}\r\n\
                 DTEND;VALUE=DATE:{next}\r\n\
                 DTSTAMP:{year:04}0101T000000Z\r\n\
                 LAST-MODIFIED:{year:04}0101T000000Z\r\n\
                 SUMMARY:{summary}\r\n\
                 DESCRIPTION:{description}\r\n\
                 TRANSP:TRANSPARENT\r\n\
                 X-MICROSOFT-CDO-BUSYSTATUS:FREE\r\n\
                 X-MICROSOFT-CDO-ALLDAYEVENT:TRUE\r\n\
                 X-MICROSOFT-MSNCALENDAR-ALLDAYEVENT:TRUE:FREE\r\n\
                 X-APPLE-CALENDAR-COLOR:{bg}\r\n\
                 COLOR:{color}\r\n\
                 END:VEVENT",
                code = obs.kind.code(),
                domain = options.domain,
                summary = escape_text(&obs.name),
                description = wrap(&escape_text(&obs.description), WRAP_COLUMN, FOLD),
                bg = cal.background_color,
                color = cal.color_name,
            ));
        }
    }

    line("END:VCALENDAR");
    out
}
