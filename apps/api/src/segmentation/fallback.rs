//! Pattern fallback — deterministic, regex-based approximation of `JobSegments`.
//!
//! Each field owns an ordered bank of `PatternRule`s. Rules are tried in order and
//! the first one whose regex matches AND whose extractor accepts the capture wins.
//! There is no scoring and no merging of partial matches across rules; a field no
//! rule accepts stays empty. The fallback never fails.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use tracing::debug;

use crate::segmentation::models::JobSegments;
use crate::segmentation::normalize::{capitalize_words, normalize_location, US_STATES};

/// A single entry of a field's pattern bank.
pub struct PatternRule {
    pub name: &'static str,
    pub pattern: Regex,
    /// Turns a match into the field value. `None` rejects the match and lets the
    /// next rule run.
    pub extract: fn(&Captures<'_>) -> Option<String>,
}

impl PatternRule {
    fn new(name: &'static str, pattern: &str, extract: fn(&Captures<'_>) -> Option<String>) -> Self {
        let pattern = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("fallback pattern '{name}' does not compile: {e}"));
        Self {
            name,
            pattern,
            extract,
        }
    }

    fn apply(&self, text: &str) -> Option<String> {
        let caps = self.pattern.captures(text)?;
        (self.extract)(&caps).filter(|value| !value.is_empty())
    }
}

/// Runs `rules` in order and returns the first accepted value.
pub fn first_match(rules: &[PatternRule], text: &str) -> Option<String> {
    rules.iter().find_map(|rule| {
        let value = rule.apply(text)?;
        debug!(rule = rule.name, %value, "fallback rule matched");
        Some(value)
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Shared pattern fragments
// ────────────────────────────────────────────────────────────────────────────

const DAY: &str = r"(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday)";
const TIME: &str = r"\d{1,2}(?::\d{2})?(?:\s?(?:am|pm))?";
const AMOUNT: &str = r"\d+(?:[,.]?\d+)*(?:\s*-\s*\$?\d+(?:[,.]?\d+)*)?";
const HOURLY: &str = r"(?:per\s+hour|/hour|/hr|hourly)";
const YEARLY: &str = r"(?:per\s+year|/year|annually|yearly)";
const PAY_KEYWORD: &str = r"\b(?:salary|wage|pay|rate)[:\s]*";
const BUSINESS_NOUN: &str = r"(?:restaurant|company|corp|inc|llc|store|shop|cafe|sandwiches)";
/// Capitalized city words, matched lazily so multi-word state names win.
const CITY: &str = r"([A-Z][a-zA-Z.'\-]*(?:\s+[A-Z][a-zA-Z.'\-]*)*?)";

/// Minimum accepted company-name length, in characters.
const MIN_COMPANY_LEN: usize = 3;

fn state_alternation() -> String {
    let names = US_STATES.iter().map(|(name, _)| regex::escape(name).replace(' ', r"\s+"));
    let codes = US_STATES.iter().map(|(_, code)| code.to_string());
    names.chain(codes).collect::<Vec<_>>().join("|")
}

fn day_range_then_time(prefix: &str) -> String {
    format!(
        r"(?i){prefix}\b({DAY})(?:(?:\s*-\s*|\s+(?:to|through|thru)\s+)({DAY}))?[,\s]*({TIME}\s*-\s*{TIME})"
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Pattern banks
// ────────────────────────────────────────────────────────────────────────────

lazy_static! {
    static ref JOB_TITLE_RULES: Vec<PatternRule> = vec![
        // "a job as a waiter at ...", "looking for a line cook to ...", "hiring an electrician."
        PatternRule::new(
            "job_title.introduced",
            r"(?i)\b(?:job\s+as|work\s+as|position\s+as|as\s+an?|looking\s+for|seeking|hiring)\s+(?:an?\s+)?([a-z/\-]+(?:\s+[a-z/\-]+)*?)(?:\s+(?:at|that|who|in|for|with|to)\b|\s*[,.!;]|\s*$)",
            title_from_capture,
        ),
        // "Night shift position available", "we have a cashier job open"
        PatternRule::new(
            "job_title.trailing_noun",
            r"(?i)(?:^|[.:;!]\s*|\b(?:a|an|the|our|this)\s+)((?:[a-z]+\s+)?[a-z]+)\s+(?:job|position|role)\b",
            title_from_capture,
        ),
    ];

    static ref COMPANY_RULES: Vec<PatternRule> = vec![
        // "at Thien Huong sandwiches, ...", "for Acme Corp in Austin"
        PatternRule::new(
            "company.preposition",
            r"(?i)\b(?:at|for|with)\s+((?-i:[A-Z])[a-z&'.\-\s]*?)(?:\s*,|\s*\.(?:\s|$)|\s*$|\s+(?:(?:that|in|at|located|san|los|new|salary|wage|pay)\b|\d))",
            company_from_capture,
        ),
        // "Tony's Pizza restaurant", "Best Buy store"
        PatternRule::new(
            "company.business_noun",
            &format!(
                r"(?i)(?:^|\s)((?-i:[A-Z])[a-z&'.\-]*(?:\s+(?-i:[A-Z])[a-z&'.\-]*)*)\s+{BUSINESS_NOUN}\b"
            ),
            company_from_capture,
        ),
    ];

    static ref LOCATION_RULES: Vec<PatternRule> = {
        let states = state_alternation();
        vec![
            // "located in San Jose, California", "at in San Jose CA"
            PatternRule::new(
                "location.introduced",
                &format!(r"\b(?i:located\s+in|located|in|at|near)\s+{CITY},?\s+({states})\b"),
                location_from_capture,
            ),
            // "Reno, NV" anywhere in the text
            PatternRule::new(
                "location.bare",
                &format!(r"\b{CITY},?\s+({states})\b"),
                location_from_capture,
            ),
        ]
    };

    static ref SALARY_RULES: Vec<PatternRule> = vec![
        PatternRule::new(
            "salary.keyword_hourly",
            &format!(r"(?i){PAY_KEYWORD}(\$?{AMOUNT})\s*{HOURLY}"),
            hourly_salary,
        ),
        PatternRule::new(
            "salary.currency_hourly",
            &format!(r"(?i)(\${AMOUNT})\s*{HOURLY}"),
            hourly_salary,
        ),
        PatternRule::new(
            "salary.keyword_yearly",
            &format!(r"(?i){PAY_KEYWORD}(\$?{AMOUNT})\s*{YEARLY}"),
            yearly_salary,
        ),
        PatternRule::new(
            "salary.currency_yearly",
            &format!(r"(?i)(\${AMOUNT})\s*{YEARLY}"),
            yearly_salary,
        ),
    ];

    static ref SCHEDULE_RULES: Vec<PatternRule> = vec![
        // "night shift from Monday - Wednesday, 5pm - 10pm"
        PatternRule::new(
            "schedule.introduced",
            &day_range_then_time(r"\b(?:shift|schedule|hours|work|time)\s+(?:from\s+)?"),
            schedule_from_capture,
        ),
        // "Saturday 9am - 1pm"
        PatternRule::new("schedule.bare", &day_range_then_time(""), schedule_from_capture),
    ];
}

// ────────────────────────────────────────────────────────────────────────────
// Extractors
// ────────────────────────────────────────────────────────────────────────────

fn title_from_capture(caps: &Captures<'_>) -> Option<String> {
    Some(capitalize_words(caps.get(1)?.as_str()))
}

fn company_from_capture(caps: &Captures<'_>) -> Option<String> {
    let name = caps.get(1)?.as_str().trim();
    (name.chars().count() >= MIN_COMPANY_LEN).then(|| name.to_string())
}

fn location_from_capture(caps: &Captures<'_>) -> Option<String> {
    Some(normalize_location(caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

fn salary_with_period(caps: &Captures<'_>, period: &str) -> Option<String> {
    let amount = caps.get(1)?.as_str().trim();
    let currency = if amount.starts_with('$') { "" } else { "$" };
    Some(format!("{currency}{amount} {period}"))
}

fn hourly_salary(caps: &Captures<'_>) -> Option<String> {
    salary_with_period(caps, "per hour")
}

fn yearly_salary(caps: &Captures<'_>) -> Option<String> {
    salary_with_period(caps, "per year")
}

fn schedule_from_capture(caps: &Captures<'_>) -> Option<String> {
    let first_day = capitalize_words(caps.get(1)?.as_str());
    let days = match caps.get(2) {
        Some(last) => format!("{first_day} - {}", capitalize_words(last.as_str())),
        None => first_day,
    };
    let hours = caps.get(3)?.as_str().trim();
    Some(format!("{days}, {hours}"))
}

// ────────────────────────────────────────────────────────────────────────────
// Entry point
// ────────────────────────────────────────────────────────────────────────────

/// Extracts every field it can from `description` using the pattern banks.
pub fn extract_fallback(description: &str) -> JobSegments {
    let segments = JobSegments {
        job_title: first_match(&JOB_TITLE_RULES, description).unwrap_or_default(),
        company_name: first_match(&COMPANY_RULES, description).unwrap_or_default(),
        location: first_match(&LOCATION_RULES, description).unwrap_or_default(),
        salary_range: first_match(&SALARY_RULES, description).unwrap_or_default(),
        work_schedule: first_match(&SCHEDULE_RULES, description).unwrap_or_default(),
        // No pattern bank; contact details are only ever supplied by the remote path.
        contact_info: String::new(),
    };

    if segments.is_empty() {
        debug!("no fallback rule matched");
    } else {
        debug!(fields = ?segments.populated_fields(), "fallback extraction finished");
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    const WAITER_POSTING: &str = "a job as a waiter at Thien Huong sandwiches, that works night shift from Monday - Wednesday, 5pm - 10pm, at in San Jose CA, salary $16-18 per hour";

    #[test]
    fn test_all_banks_compile() {
        for bank in [
            &*JOB_TITLE_RULES,
            &*COMPANY_RULES,
            &*LOCATION_RULES,
            &*SALARY_RULES,
            &*SCHEDULE_RULES,
        ] {
            assert!(!bank.is_empty());
        }
    }

    #[test]
    fn test_reference_posting() {
        let segments = extract_fallback(WAITER_POSTING);
        assert!(segments.job_title.contains("Waiter"));
        assert_eq!(segments.job_title, "Waiter");
        assert_eq!(segments.company_name, "Thien Huong sandwiches");
        assert_eq!(segments.location, "San Jose, CA");
        assert_eq!(segments.salary_range, "$16-18 per hour");
        assert_eq!(segments.work_schedule, "Monday - Wednesday, 5pm - 10pm");
        assert_eq!(segments.contact_info, "");
    }

    #[test]
    fn test_fallback_is_idempotent() {
        assert_eq!(extract_fallback(WAITER_POSTING), extract_fallback(WAITER_POSTING));
    }

    #[test]
    fn test_empty_input_yields_empty_record() {
        assert!(extract_fallback("").is_empty());
        assert!(extract_fallback("   \n\t").is_empty());
    }

    #[test]
    fn test_missing_salary_leaves_other_fields_intact() {
        let text = "a job as a waiter at Thien Huong sandwiches, that works night shift from Monday - Wednesday, 5pm - 10pm, at in San Jose CA, pay negotiable";
        let segments = extract_fallback(text);
        assert_eq!(segments.salary_range, "");
        assert_eq!(segments.job_title, "Waiter");
        assert_eq!(segments.location, "San Jose, CA");
        assert_eq!(segments.work_schedule, "Monday - Wednesday, 5pm - 10pm");
        assert_eq!(segments.company_name, "Thien Huong sandwiches");
    }

    // ── job title ──────────────────────────────────────────────────────────

    #[test]
    fn test_job_title_introducing_phrases() {
        assert_eq!(
            first_match(&JOB_TITLE_RULES, "We are looking for a line cook to join our team").as_deref(),
            Some("Line Cook")
        );
        assert_eq!(
            first_match(&JOB_TITLE_RULES, "Now hiring an experienced BARISTA.").as_deref(),
            Some("Experienced Barista")
        );
        assert_eq!(
            first_match(&JOB_TITLE_RULES, "seeking delivery driver for weekend shifts").as_deref(),
            Some("Delivery Driver")
        );
    }

    #[test]
    fn test_job_title_trailing_noun() {
        assert_eq!(
            first_match(&JOB_TITLE_RULES, "Night shift position available").as_deref(),
            Some("Night Shift")
        );
        assert_eq!(
            first_match(&JOB_TITLE_RULES, "We have a cashier job open now").as_deref(),
            Some("Cashier")
        );
    }

    #[test]
    fn test_job_title_first_rule_wins_over_trailing_noun() {
        let text = "Great position! Hiring a dishwasher at Luigi's";
        assert_eq!(first_match(&JOB_TITLE_RULES, text).as_deref(), Some("Dishwasher"));
    }

    // ── company ───────────────────────────────────────────────────────────

    #[test]
    fn test_company_after_preposition() {
        assert_eq!(
            first_match(&COMPANY_RULES, "Cook wanted for Blue Bottle in Oakland").as_deref(),
            Some("Blue Bottle")
        );
        assert_eq!(
            first_match(&COMPANY_RULES, "Barista wanted at Sightglass, apply within").as_deref(),
            Some("Sightglass")
        );
    }

    #[test]
    fn test_company_requires_capitalized_start() {
        assert_eq!(first_match(&COMPANY_RULES, "looking for a waiter, apply today"), None);
    }

    #[test]
    fn test_company_shorter_than_three_characters_is_rejected() {
        let segments = extract_fallback("Cook needed at Jo, pay negotiable");
        assert_eq!(segments.company_name, "");
    }

    #[test]
    fn test_company_before_business_noun() {
        assert_eq!(
            first_match(&COMPANY_RULES, "Join Tony's Pizza restaurant tonight").as_deref(),
            Some("Join Tony's Pizza")
        );
        assert_eq!(
            first_match(&COMPANY_RULES, "cashiers wanted: Main Street Hardware store").as_deref(),
            Some("Main Street Hardware")
        );
    }

    // ── location ──────────────────────────────────────────────────────────

    #[test]
    fn test_location_normalizes_full_state_names() {
        assert_eq!(
            first_match(&LOCATION_RULES, "Located in Los Angeles, California near the beach").as_deref(),
            Some("Los Angeles, CA")
        );
        assert_eq!(
            first_match(&LOCATION_RULES, "Bakery in Buffalo, New York is hiring").as_deref(),
            Some("Buffalo, NY")
        );
    }

    #[test]
    fn test_location_prefers_multi_word_state() {
        assert_eq!(
            first_match(&LOCATION_RULES, "office in Charleston West Virginia").as_deref(),
            Some("Charleston, WV")
        );
    }

    #[test]
    fn test_location_without_leading_keyword() {
        assert_eq!(
            first_match(&LOCATION_RULES, "Downtown Reno, NV - apply now").as_deref(),
            Some("Downtown Reno, NV")
        );
    }

    #[test]
    fn test_location_ignores_unknown_regions() {
        assert_eq!(first_match(&LOCATION_RULES, "Work in Toronto, Ontario"), None);
    }

    // ── salary ────────────────────────────────────────────────────────────

    #[test]
    fn test_salary_hourly_variants() {
        assert_eq!(
            first_match(&SALARY_RULES, "Pays $17/hr plus tips").as_deref(),
            Some("$17 per hour")
        );
        assert_eq!(
            first_match(&SALARY_RULES, "wage: 18.50 hourly").as_deref(),
            Some("$18.50 per hour")
        );
    }

    #[test]
    fn test_salary_yearly_with_separators() {
        assert_eq!(
            first_match(&SALARY_RULES, "Compensation $120,000 - $160,000 per year").as_deref(),
            Some("$120,000 - $160,000 per year")
        );
        assert_eq!(
            first_match(&SALARY_RULES, "salary 55,000 annually").as_deref(),
            Some("$55,000 per year")
        );
    }

    #[test]
    fn test_salary_requires_rate_keyword() {
        assert_eq!(first_match(&SALARY_RULES, "Bonus of $500 after 90 days"), None);
    }

    // ── schedule ──────────────────────────────────────────────────────────

    #[test]
    fn test_schedule_single_day_and_minutes() {
        assert_eq!(
            first_match(&SCHEDULE_RULES, "Open shift saturday 9:30am - 1pm").as_deref(),
            Some("Saturday, 9:30am - 1pm")
        );
    }

    #[test]
    fn test_schedule_normalizes_day_range_separator() {
        assert_eq!(
            first_match(&SCHEDULE_RULES, "hours: MONDAY to friday 9 - 5pm").as_deref(),
            Some("Monday - Friday, 9 - 5pm")
        );
        assert_eq!(
            first_match(&SCHEDULE_RULES, "tuesday-thursday, 6am-2pm").as_deref(),
            Some("Tuesday - Thursday, 6am-2pm")
        );
    }

    #[test]
    fn test_schedule_requires_time_range() {
        assert_eq!(first_match(&SCHEDULE_RULES, "Closed on Sunday"), None);
    }
}
