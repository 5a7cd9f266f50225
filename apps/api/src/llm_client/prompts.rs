//! Prompt templates for the AI endpoints. Kept in one place so wording
//! changes never hide inside handler code.

/// Prompt for the job-description analysis endpoint.
pub fn analyze_job_prompt(job_description: &str) -> String {
    format!(
        "Analyze the following job description.\n\
         1. Extract key skills and requirements.\n\
         2. Summarize the role in 2 sentences.\n\n\
         Job Description:\n{job_description}"
    )
}

/// Prompt for inferring a structured profile from raw resume text.
///
/// The response must be bare JSON matching the profile shape the adapter
/// normalizes; the handler strips code fences before parsing, and anything
/// unparseable surfaces as a validation error.
pub fn infer_profile_prompt(resume_text: &str) -> String {
    format!(
        "Extract a structured candidate profile from the resume text below.\n\
         Respond with JSON only, no commentary, using exactly this shape:\n\
         {{\n\
         \x20 \"name\": string,\n\
         \x20 \"email\": string?,\n\
         \x20 \"phone\": string?,\n\
         \x20 \"linkedin\": string?,\n\
         \x20 \"education\": [{{\"school\": string, \"degree\": string?, \"year\": string?}}],\n\
         \x20 \"experience\": [{{\"company\": string, \"role\": string?, \"location\": string?, \"dates\": string?, \"bullets\": [string]}}],\n\
         \x20 \"skills\": [string]\n\
         }}\n\
         Omit any field you cannot find; never invent values.\n\n\
         Resume text:\n{resume_text}"
    )
}
