// LLM prompt constants for job-description segmentation.
// Reuses the cross-cutting JSON directive from llm_client::prompts.

use crate::llm_client::prompts::JSON_ONLY_DIRECTIVE;

/// Segmentation prompt template. Replace `{description}` before sending.
pub const SEGMENTATION_PROMPT_TEMPLATE: &str = r#"You are an expert job description analyzer. Your task is to extract specific information from job descriptions with high accuracy.

Job Description: "{description}"

Extract the following information and return ONLY a valid JSON object with these exact fields:
- jobTitle: The job position/role (e.g., "Waiter", "Software Engineer")
- companyName: The business/company name (e.g., "Thien Huong sandwiches")
- location: The work location as city, state format (e.g., "San Jose, CA")
- salaryRange: The salary/wage with currency and period (e.g., "$16-18 per hour", "$50,000/year")
- workSchedule: The work days and hours (e.g., "Monday - Wednesday, 5pm - 10pm")
- contactInfo: Any contact person mentioned (leave empty if none)

Rules:
1. Extract exact information from the text
2. For location, use "City, ST" format with the two-letter state code
3. For salary, preserve the original format but ensure the currency symbol is included
4. For schedule, include both days and times if available
5. If information is not available, use empty string ""

Example:
Input: "a job as a waiter at Thien Huong sandwiches, that works night shift from Monday - Wednesday, 5pm - 10pm, at in San Jose CA , salary $16-18 per hour"
Output:
{
  "jobTitle": "Waiter",
  "companyName": "Thien Huong sandwiches",
  "location": "San Jose, CA",
  "salaryRange": "$16-18 per hour",
  "workSchedule": "Monday - Wednesday, 5pm - 10pm",
  "contactInfo": ""
}

"#;

/// Builds the full prompt for one description, ending with the JSON-only directive.
pub fn build_segmentation_prompt(description: &str) -> String {
    let mut prompt = SEGMENTATION_PROMPT_TEMPLATE.replace("{description}", description.trim());
    prompt.push_str(JSON_ONLY_DIRECTIVE);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_description_once() {
        let prompt = build_segmentation_prompt("  barista at Blue Bottle in Oakland, CA  ");
        assert!(prompt.contains("Job Description: \"barista at Blue Bottle in Oakland, CA\""));
        assert!(!prompt.contains("{description}"));
    }

    #[test]
    fn test_prompt_names_every_field() {
        let prompt = build_segmentation_prompt("anything");
        for field in [
            "jobTitle",
            "companyName",
            "location",
            "salaryRange",
            "workSchedule",
            "contactInfo",
        ] {
            assert!(prompt.contains(field), "prompt is missing {field}");
        }
    }

    #[test]
    fn test_prompt_ends_with_json_only_directive() {
        let prompt = build_segmentation_prompt("anything");
        assert!(prompt.ends_with(JSON_ONLY_DIRECTIVE));
    }

    #[test]
    fn test_prompt_carries_one_worked_example() {
        let prompt = build_segmentation_prompt("anything");
        assert_eq!(prompt.matches("Input:").count(), 1);
        assert_eq!(prompt.matches("Output:").count(), 1);
        assert!(prompt.contains("\"location\": \"San Jose, CA\""));
    }
}
