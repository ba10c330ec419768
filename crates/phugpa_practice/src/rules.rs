//! Observance rules for a single Tibetan date.
//!
//! On a doubled lunar day the observances fall on its second solar day, so
//! the first occurrence gets none (apart from the New Year precept window).
//! Buddha days are kept in the first of two doubled months.

use phugpa_calendar::{DayKind, MonthKind, TibetanDate};

use crate::observance::{Observance, ObservanceType};

const PRECEPTS_BUDDHA_DAY: &str = "Buddha days and eclipses are considered to be particularly \
powerful days for taking the Eight Mahayana Precepts.";

fn buddha_days(date: &TibetanDate, out: &mut Vec<Observance>) {
    use ObservanceType::*;
    match (date.month, date.day) {
        (1, 1) => out.push(Observance::new(
            Other,
            "Tibetan New Year",
            "Beginning of the new Tibetan year (Losar). During the first fifteen days, \
             fifteen 'Miracle Days' are celebrated which commemorate fifteen miracles that \
             the Buddha is said to have performed.",
        )),
        (1, 15) => out.push(Observance::new(
            BuddhaCommemoration,
            "Day of Miracles",
            "Day of Miracles (Chötrul Düchen). The fifteenth day of a new Tibetan year is the \
             culmination of the fifteen 'Miracle Days' which commemorate fifteen miracles that \
             the Buddha is said to have performed. The Day of Miracles is one of four important \
             Tibetan holidays related to the Buddha.",
        )),
        (4, 15) => out.push(Observance::new(
            BuddhaCommemoration,
            "Buddha's Birth, Enlightenment and Paranirvana",
            "Celebration of the Buddha's birth, enlightenment and paranirvana (Saka Dawa \
             Düchen). Saka Dawa is one of four important Tibetan holidays related to the Buddha.",
        )),
        (6, 4) => {
            out.push(Observance::new(
                BuddhaCommemoration,
                "Buddha's first teaching",
                "Celebration of the Buddha's first 'turning of the wheel of Dharma' (Chökhor \
                 Düchen). Chökhor Düchen is one of four important Tibetan holidays related to \
                 the Buddha.",
            ));
            out.push(Observance::new(EightPrecepts, "Precepts", PRECEPTS_BUDDHA_DAY));
        }
        (9, 22) => {
            out.push(Observance::new(
                BuddhaCommemoration,
                "Buddha's descent from Tushita",
                "Celebration of the Buddha's descent from the god realm of Tushita (Lhabab \
                 Düchen) after teaching the Dharma to his mother there. Lhabab Düchen is one of \
                 four important Tibetan holidays related to the Buddha.",
            ));
            out.push(Observance::new(EightPrecepts, "Precepts", PRECEPTS_BUDDHA_DAY));
        }
        (10, 25) => out.push(Observance::new(
            Other,
            "Lama Tsongkhapa Day",
            "Anniversary of the parinirvana of Lama Tsongkhapa (Ganden Ngamchö), \
             traditionally celebrated with light offerings.",
        )),
        _ => {}
    }
}

/// Note for the special Tsog days of months 11 and 12 in a doubled month.
fn special_tsog_warning(date: &TibetanDate) -> String {
    if date.month < 11 {
        return String::new();
    }
    let other = match date.month_kind {
        MonthKind::Normal => return String::new(),
        MonthKind::FirstOfDouble => "one lunar month later",
        MonthKind::SecondOfDouble => "one lunar month earlier",
    };
    format!(
        " NOTE: During this year the {}th Tibetan month is doubled. It is not clear if the \
         special Tsog day is on this day or {other}.",
        date.month
    )
}

fn monthly_days(date: &TibetanDate, out: &mut Vec<Observance>) {
    use ObservanceType::*;
    // Month 1 has its own precept window covering days 1-15.
    let monthly_precepts = date.month != 1 || date.month_kind == MonthKind::SecondOfDouble;

    match date.day {
        8 => {
            out.push(Observance::new(
                Tara,
                "Tara",
                "The eighth day of each Tibetan lunar month is considered to be a particularly \
                 suitable day for performing Tara pujas.",
            ));
            out.push(Observance::new(
                MedicineBuddha,
                "Medicine Buddha",
                "The eighth day of each Tibetan lunar month is considered to be a particularly \
                 suitable day for performing Medicine Buddha pujas.",
            ));
            if monthly_precepts {
                out.push(Observance::new(
                    EightPrecepts,
                    "Precepts",
                    "The eighth day of each Tibetan lunar month is considered to be a powerful \
                     day for taking the Eight Mahayana Precepts.",
                ));
            }
        }
        10 if date.month == 12 => out.push(Observance::new(
            TsogOffering,
            "Tsog (Special Heruka Tsog)",
            format!(
                "Tsog offering (Daka Tsog). The tenth day of each Tibetan month is one of the \
                 two days each month when Tsog offerings should be performed. The Tsog offering \
                 on the 10th day of the 12th Tibetan month is considered to be one of the two \
                 most important Tsog days of the entire year. Lama Zopa Rinpoche explained: \
                 'The Tibetan 12th month is a special time for father tantra, a special time \
                 for Chakrasamvara, and a special month to offer Chakrasamvara tsog.' \
                 Phabongkha Rinpoche writes: '...the twenty-fifth day of the eleventh month is \
                 the holy time of the Mother, and the tenth day of the twelfth month is the \
                 holy time of the Father'.{}",
                special_tsog_warning(date)
            ),
        )),
        10 => out.push(Observance::new(
            TsogOffering,
            "Tsog",
            "Tsog offering (Daka Tsog). The tenth day of each Tibetan month is one of the two \
             days each month when Tsog offerings should be performed.",
        )),
        15 => {
            out.push(Observance::new(
                LunarPhase,
                "Full Moon",
                "Full moon days are considered to be powerful days for positive practices.",
            ));
            out.push(Observance::new(
                MedicineBuddha,
                "Medicine Buddha",
                "The fifteenth day of each Tibetan lunar month is considered to be a \
                 particularly suitable day for performing Medicine Buddha pujas.",
            ));
            if monthly_precepts {
                out.push(Observance::new(
                    EightPrecepts,
                    "Precepts",
                    "Full moon days are considered to be powerful days for taking the Eight \
                     Mahayana Precepts.",
                ));
            }
        }
        25 if date.month == 11 => out.push(Observance::new(
            TsogOffering,
            "Tsog (Special Vajrayogini Tsog)",
            format!(
                "Tsog offering (Dakini Tsog). The twenty-fifth day of each Tibetan month is one \
                 of the two days per month when Tsog offerings should be performed. The Tsog \
                 offering on the 25th day of the 11th Tibetan month is considered to be one of \
                 the two most important Tsog days of the entire year. Lama Zopa Rinpoche \
                 explained that 'The Tibetan 11th month (Gyal Dawa) is a special time for \
                 mother tantra, a special time for Vajrayogini, and a special month to offer \
                 Vajrayogini tsog.' Phabongkha Rinpoche writes: '...the twenty-fifth day of the \
                 eleventh month is the holy time of the Mother, and the tenth day of the twelfth \
                 month is the holy time of the Father'.{}",
                special_tsog_warning(date)
            ),
        )),
        25 => out.push(Observance::new(
            TsogOffering,
            "Tsog",
            "Tsog offering (Dakini Tsog). The twenty-fifth day of each Tibetan month is one of \
             the two days per month when Tsog offerings should be performed.",
        )),
        29 => out.push(Observance::new(
            ProtectorPuja,
            "Protector Puja",
            "The twenty-ninth day of each Tibetan month is considered to be beneficial for \
             protector pujas.",
        )),
        30 => {
            out.push(Observance::new(
                LunarPhase,
                "New Moon",
                "New moon days are considered to be powerful days for positive practices.",
            ));
            out.push(Observance::new(
                EightPrecepts,
                "Precepts",
                "New moon days are considered to be powerful days for taking the Eight \
                 Mahayana Precepts.",
            ));
        }
        _ => {}
    }
}

fn prefix(date: &TibetanDate) -> String {
    let day_word = if date.day_kind == DayKind::SecondOfDouble {
        "Repeated day"
    } else {
        "Day"
    };
    let shown = if date.virtual_skipped {
        date.day - 1
    } else {
        date.day
    };
    let repeated = if date.month_kind == MonthKind::SecondOfDouble {
        "repeated "
    } else {
        ""
    };
    format!("{day_word} {shown} of {repeated}Tibetan month {}: ", date.month)
}

/// Observances of a Tibetan date, in rule order.
///
/// When `date.virtual_skipped` is set the date is a skipped day number
/// observed on the solar day before it; descriptions then name the previous
/// day number and carry a remark about the skip.
pub fn observances(date: &TibetanDate) -> Vec<Observance> {
    let mut out = Vec::new();

    if date.day_kind != DayKind::FirstOfDouble {
        if date.month_kind != MonthKind::SecondOfDouble {
            buddha_days(date, &mut out);
        }
        monthly_days(date, &mut out);
    }

    if date.month == 1 && date.month_kind != MonthKind::SecondOfDouble && date.day <= 15 {
        out.push(Observance::new(
            ObservanceType::EightPrecepts,
            "Precepts",
            PRECEPTS_BUDDHA_DAY,
        ));
    }

    let head = prefix(date);
    let remark = if date.virtual_skipped {
        format!(
            " Normally this event would be on the {n}th day of the Tibetan month but day {n} \
             is skipped this month, so it is observed on the previous date.",
            n = date.day
        )
    } else {
        String::new()
    };
    for o in &mut out {
        o.description = format!("{head}{}{remark}", o.description);
    }
    out
}
