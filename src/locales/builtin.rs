//! Locale tables shipped with the crate.

use crate::models::TimeStrings;
use crate::pluralize;

/// Locale used when a caller does not pick one.
pub const DEFAULT_LOCALE: &str = "en-US";

fn table(units: [&[&str]; 8]) -> TimeStrings {
    let [milliseconds, seconds, minutes, hours, days, weeks, months, years] =
        units.map(|spellings| pluralize(spellings, 1));
    TimeStrings {
        milliseconds,
        seconds,
        minutes,
        hours,
        days,
        weeks,
        months,
        years,
    }
}

/// English (United States).
pub fn en_us() -> TimeStrings {
    table([
        &["ms", "msec", "millisecond"],
        &["s", "sec", "second"],
        &["m", "min", "minute"],
        &["h", "hr", "hour"],
        &["d", "day"],
        &["w", "wk", "week"],
        &["mo", "month"],
        &["y", "yr", "year"],
    ])
}

/// Portuguese (Brazil). Shares `s` and `m` with later units; seconds and minutes win.
pub fn pt_br() -> TimeStrings {
    table([
        &["ms", "msec", "milissegundo"],
        &["s", "seg", "segundo"],
        &["m", "min", "minuto"],
        &["h", "hr", "hora"],
        &["d", "dia"],
        &["s", "sem", "semana"],
        &["m", "mes"],
        &["a", "ano"],
    ])
}

/// Spanish.
pub fn es() -> TimeStrings {
    table([
        &["ms", "mseg", "milisegundo"],
        &["s", "seg", "segundo"],
        &["m", "min", "minuto"],
        &["h", "hr", "hora"],
        &["d", "dia"],
        &["s", "sem", "semana"],
        &["m", "mes"],
        &["a", "ano"],
    ])
}

/// Every shipped locale with its identifier.
pub fn builtin_locales() -> Vec<(&'static str, TimeStrings)> {
    vec![(DEFAULT_LOCALE, en_us()), ("pt-BR", pt_br()), ("es", es())]
}
