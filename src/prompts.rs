//! Prompt templates, one per capability.
//!
//! Request fields are interpolated verbatim. The template wording and section
//! order are a contract with the model; reordering them degrades how well the
//! model sticks to the requested structure.

pub fn ask(question: &str, topic: &str, difficulty: &str) -> String {
    format!(
        r#"You are an experienced technical interviewer.
Answer the following question clearly and concisely at {difficulty} level
in the topic {topic}.

Structure your response as:
- Definition / core idea
- Key points
- Example (if applicable)
- Pitfalls / trade-offs

User Question: {question}"#
    )
}

pub fn suggest(topic: &str, difficulty: &str) -> String {
    format!(
        r#"Generate 5 popular {difficulty}-level interview questions
from the topic {topic}.
Return them as a clean numbered list (1., 2., 3., etc).
Do NOT include answers."#
    )
}

pub fn evaluate(question: &str, user_answer: &str) -> String {
    format!(
        r#"You are an experienced technical interviewer.

Interview Question: {question}
Candidate's Answer: {user_answer}

Evaluate the answer strictly using this JSON format:
{{
  "clarity_score": (1-5),
  "clarity_feedback": "one line",
  "correctness_score": (1-5),
  "correctness_feedback": "one line",
  "completeness_score": (1-5),
  "completeness_feedback": "one line",
  "advice": ["point 1", "point 2", "point 3"]
}}

Rules:
- Only output valid JSON.
- No markdown, no explanation, no extra text."#
    )
}

pub fn code_review(language: &str, code: &str, title: Option<&str>) -> String {
    // A blank title counts as absent, same as an omitted one.
    let title = title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or("[not provided]");

    format!(
        r#"You are a senior engineer reviewing candidate code.

Language: {language}
Problem (if provided): {title}

Candidate's Code:
{code}

Provide structured feedback in markdown:
- Correctness
- Complexity
- Readability & style
- Edge cases
- Suggestions
- Follow-up variation"#
    )
}

pub fn explain(title: &str, url: &str, difficulty: &str, pattern: &str) -> String {
    format!(
        r#"You are an expert interview coach.

Problem: {title}
Pattern: {pattern}
Difficulty: {difficulty}
LeetCode URL: {url}

Explain step by step:
1) Restate the problem in simple words.
2) Give a short example input/output.
3) Give a brute-force approach.
4) Optimize to the best-known approach for this pattern (explain idea).
5) Provide time and space complexity.
6) Mention common pitfalls and edge cases.
7) Suggest one harder follow-up variation.

Use clear markdown headings and bullet points."#
    )
}
