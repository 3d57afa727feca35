// Prompt templates for resume evaluation.
// The scoring rubric below is read by the model; nothing here computes a score.

use crate::llm_client::prompts::NOT_FOUND;

/// Role line of the system prompt; the JSON-only rules are appended by the caller.
pub const EVALUATION_ROLE: &str =
    "You are a ruthless, industry-standard AI resume parser and evaluator.";

/// Context clause used when the caller supplied no job description.
pub const ROLE_INFERENCE_CONTEXT: &str =
    "CONTEXT: No Job Description provided. INFER the target role from the resume content first.";

const JD_CONTEXT_TEMPLATE: &str =
    "CONTEXT: Analyze the resume against this JOB DESCRIPTION: '{jd_text}'";

const EXTRACTION_TASK: &str = r#"TASK 1: EXTRACTION
Extract these exact details. Return "{not_found}" if missing.
- "name": Full Name
- "email": Email Address
- "phone": Phone Number
- "education": List of strings (e.g., ["B.Tech CS, 2024"])
- "skills": List of strings (All technical skills found)"#;

const SCORING_RUBRIC: &str = r#"TASK 2: EVALUATION
SCORING ALGORITHM (STRICT PENALTY SYSTEM):
1. Start with a Base Score of 100.
2. Detect the Target Role (inferred from the resume or taken from the provided job description).
3. Apply Deductions:
   - CRITICAL SKILL GAP (-25 points): the candidate is missing a FOUNDATIONAL skill for their specific role.
     * Example: 'Full Stack Dev' missing Databases (SQL/NoSQL).
     * Example: 'Data Scientist' missing Python/R.
     * Example: 'Marketer' missing SEO/Analytics.
   - EXPERIENCE GAP (-10 points): bullet points are vague, generic, or lack quantifiable metrics (numbers/%).
   - FORMATTING (-5 points): the layout is messy or basic contact info is missing.
4. Final Calculation: Score = 100 - Total Deductions (minimum 0)."#;

const OUTPUT_FORMAT: &str = r#"OUTPUT FORMAT (MANDATORY):
Return ONLY a valid JSON object. Do not add markdown blocks.
{
    "name": "...",
    "email": "...",
    "phone": "...",
    "education": ["..."],
    "skills": ["..."],
    "match_percentage": 0,
    "detected_role": "...",
    "missing_keywords": ["..."],
    "profile_summary": "...",
    "scoring_reasoning": "Started at 100. Deducted 25 for missing SQL. Deducted 10 for vague metrics. Final: 65."
}"#;

const SECTION_DIVIDER: &str = "---";

/// Builds the instruction prompt sent alongside the resume text.
///
/// A job description with any non-whitespace character is quoted verbatim;
/// otherwise the model is told to infer the role itself.
pub fn build_instruction_prompt(job_description: &str) -> String {
    let context = if job_description.trim().is_empty() {
        ROLE_INFERENCE_CONTEXT.to_string()
    } else {
        JD_CONTEXT_TEMPLATE.replace("{jd_text}", job_description)
    };

    let extraction = EXTRACTION_TASK.replace("{not_found}", NOT_FOUND);

    [
        "You have TWO mandatory tasks.",
        context.as_str(),
        SECTION_DIVIDER,
        extraction.as_str(),
        SECTION_DIVIDER,
        SCORING_RUBRIC,
        SECTION_DIVIDER,
        OUTPUT_FORMAT,
    ]
    .join("\n\n")
}

/// Appends the resume text to the instructions, forming the user message.
pub fn build_user_prompt(instructions: &str, resume_text: &str) -> String {
    format!("{instructions}\n\n{SECTION_DIVIDER}\n\nRESUME TEXT:\n{resume_text}")
}
