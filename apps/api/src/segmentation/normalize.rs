//! Text normalization shared by both extraction paths.

/// US states plus DC as `(full name, two-letter code)`.
///
/// Multi-word names precede any name they contain so regex alternations built
/// from this table prefer the longer spelling ("West Virginia" before "Virginia").
pub const US_STATES: &[(&str, &str)] = &[
    ("Alabama", "AL"),
    ("Alaska", "AK"),
    ("Arizona", "AZ"),
    ("Arkansas", "AR"),
    ("California", "CA"),
    ("Colorado", "CO"),
    ("Connecticut", "CT"),
    ("Delaware", "DE"),
    ("District of Columbia", "DC"),
    ("Florida", "FL"),
    ("Georgia", "GA"),
    ("Hawaii", "HI"),
    ("Idaho", "ID"),
    ("Illinois", "IL"),
    ("Indiana", "IN"),
    ("Iowa", "IA"),
    ("Kansas", "KS"),
    ("Kentucky", "KY"),
    ("Louisiana", "LA"),
    ("Maine", "ME"),
    ("Maryland", "MD"),
    ("Massachusetts", "MA"),
    ("Michigan", "MI"),
    ("Minnesota", "MN"),
    ("Mississippi", "MS"),
    ("Missouri", "MO"),
    ("Montana", "MT"),
    ("Nebraska", "NE"),
    ("Nevada", "NV"),
    ("New Hampshire", "NH"),
    ("New Jersey", "NJ"),
    ("New Mexico", "NM"),
    ("New York", "NY"),
    ("North Carolina", "NC"),
    ("North Dakota", "ND"),
    ("Ohio", "OH"),
    ("Oklahoma", "OK"),
    ("Oregon", "OR"),
    ("Pennsylvania", "PA"),
    ("Rhode Island", "RI"),
    ("South Carolina", "SC"),
    ("South Dakota", "SD"),
    ("Tennessee", "TN"),
    ("Texas", "TX"),
    ("Utah", "UT"),
    ("Vermont", "VT"),
    ("West Virginia", "WV"),
    ("Virginia", "VA"),
    ("Washington", "WA"),
    ("Wisconsin", "WI"),
    ("Wyoming", "WY"),
];

/// Uppercases the first letter of each whitespace-separated token and lowercases
/// the rest of it. Tokens are rejoined with single spaces.
pub fn capitalize_words(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Two-letter code for a state given by full name or code (case-insensitive,
/// surrounding whitespace and internal spacing ignored).
pub fn state_code(state: &str) -> Option<&'static str> {
    let wanted = state.split_whitespace().collect::<Vec<_>>().join(" ");
    US_STATES
        .iter()
        .find(|(name, code)| name.eq_ignore_ascii_case(&wanted) || code.eq_ignore_ascii_case(&wanted))
        .map(|(_, code)| *code)
}

/// Formats `"City, ST"`. The state is reduced to its code when recognized and
/// passed through trimmed otherwise; trailing commas are dropped from the city.
pub fn normalize_location(city: &str, state: &str) -> String {
    let city = city.trim().trim_end_matches(',').trim_end();
    let state = state.trim();
    let state = state_code(state).unwrap_or(state);
    format!("{city}, {state}")
}
