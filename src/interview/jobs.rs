// src/interview/jobs.rs
// Fixed job catalog and the question templating rule.
// Process-wide static configuration: read-only, no lifecycle beyond startup.

use super::types::Question;

/// The enumerated job catalog, in the order `GET /test/jobs` returns it.
pub const JOB_CATALOG: [&str; 5] = [
    "Backend Developer",
    "Frontend Developer",
    "Designer",
    "Data Analyst",
    "AI Engineer",
];

/// Templates for the three questions every session starts with.
/// `{job}` is replaced with the selected job name.
const QUESTION_TEMPLATES: [&str; 3] = [
    "Tell me about a recent project you worked on as a {job}.",
    "What do you consider the hardest part of working as a {job}?",
    "How do you keep your skills as a {job} up to date?",
];

/// Build the fixed question set for a job, `qno` ascending from 1.
pub fn build_questions(job: &str) -> Vec<Question> {
    QUESTION_TEMPLATES
        .iter()
        .enumerate()
        .map(|(i, template)| Question {
            qno: (i + 1) as u32,
            text: template.replace("{job}", job),
        })
        .collect()
}
