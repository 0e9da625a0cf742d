use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Structured fields pulled out of a free-text job posting.
///
/// Every field is independently optional; an absent field is the empty string.
/// Produced fresh per extraction and owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobSegments {
    pub job_title: String,
    pub company_name: String,
    /// `"City, ST"` when a recognized US state was found.
    pub location: String,
    /// e.g. `"$16-18 per hour"`.
    pub salary_range: String,
    /// e.g. `"Monday - Wednesday, 5pm - 10pm"`.
    pub work_schedule: String,
    pub contact_info: String,
}

impl JobSegments {
    /// Builds a record from the model's JSON object, reading the camelCase keys.
    ///
    /// Strings are trimmed, numbers and booleans are stringified, and null, arrays
    /// or nested objects count as absent. Returns `None` when `value` is not an object.
    pub fn from_json_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let field = |key: &str| object.get(key).map(lenient_string).unwrap_or_default();

        Some(Self {
            job_title: field("jobTitle"),
            company_name: field("companyName"),
            location: field("location"),
            salary_range: field("salaryRange"),
            work_schedule: field("workSchedule"),
            contact_info: field("contactInfo"),
        })
    }

    /// True when no field carries a value.
    pub fn is_empty(&self) -> bool {
        self.populated_fields().is_empty()
    }

    /// Wire names of the fields that carry a value, in declaration order.
    pub fn populated_fields(&self) -> Vec<&'static str> {
        [
            ("jobTitle", &self.job_title),
            ("companyName", &self.company_name),
            ("location", &self.location),
            ("salaryRange", &self.salary_range),
            ("workSchedule", &self.work_schedule),
            ("contactInfo", &self.contact_info),
        ]
        .into_iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

fn lenient_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}
