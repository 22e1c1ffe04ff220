//! Prompt templates for the three capabilities.
//!
//! Medical text is interpolated verbatim; callers own the data they send.

use crate::view::ViewType;

const DOCTOR_SECTIONS: &str = r#"1. current_medications: Array of objects with {name, dose, frequency, renewal_date}
2. appointments: Object with {last_visit, upcoming_visits}
3. recent_labs: Array of lab results with {test_name, value, unit, normal_range, status} where status is "normal", "high", or "low"
4. major_surgeries: Object with {previous, scheduled}
5. conditions: Object with {major, minor}
6. recent_imaging: Array of relevant imaging studies with {type, date, findings, relevance}
7. clinical_trial_notes: Any relevant information for clinical trial screening"#;

const PATIENT_SECTIONS: &str = r#"1. conditions_summary: Simple explanation of current health conditions
2. medications: Array of objects with {name, what_it_does, dose, when_to_take, renewal_date}
3. upcoming_care: Array of {type, date, what_to_expect}
4. recent_tests: Simple explanation of recent test results
5. surgeries: Simple explanation of past or upcoming procedures
6. allergies: List of known allergies
7. reminders: Important dates and actions needed"#;

/// Build the single-turn prompt asking for a JSON summary for `view`.
pub fn summary_prompt(medical_text: &str, view: ViewType) -> String {
    match view {
        ViewType::Doctor => format!(
            "Analyze the following medical records and provide a comprehensive summary for a healthcare provider. Structure the output as JSON with these sections:

{DOCTOR_SECTIONS}

Medical Records:
{medical_text}

Respond with ONLY valid JSON, no additional text."
        ),
        ViewType::Patient => format!(
            "Analyze the following medical records and provide a patient-friendly summary in simple, layman's terms. Structure the output as JSON with these sections:

{PATIENT_SECTIONS}

Medical Records:
{medical_text}

Use simple language that anyone can understand. Avoid medical jargon. Respond with ONLY valid JSON, no additional text."
        ),
    }
}

/// System preamble for the conversational endpoint.
pub fn chat_preamble(medical_text: &str, view: ViewType) -> String {
    format!(
        "You are a helpful medical assistant. You have access to the following medical records:

{medical_text}

Answer questions about these medical records. If the user is a patient (view_type='patient'), use simple, layman's terms. If the user is a doctor (view_type='doctor'), you can use medical terminology.

Current view type: {view}

Be concise, accurate, and helpful. If information is not in the records, say so clearly."
    )
}

pub fn explain_term_prompt(term: &str, context: &str) -> String {
    format!(
        "Explain the medical term \"{term}\" in simple, layman's terms that anyone can understand.

Context from medical records: {context}

Provide:
1. Simple definition
2. Why it matters for this patient
3. Any actions or precautions related to it

Keep the explanation brief and easy to understand."
    )
}
