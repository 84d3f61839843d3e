//! Lesson Prompt Composer
//!
//! Renders the fixed nine-section lesson instruction for a `LessonRequest`.
//! The template text is static; only the `{topic}`, `{level}` and
//! `{preference}` placeholders vary.

use crate::lesson::LessonRequest;

/// The raw instruction template, with placeholders.
pub const LESSON_TEMPLATE: &str = include_str!("../prompts/lesson.md");

/// Section headings of the lesson, in the order the template asks for them.
pub const SECTION_TITLES: [&str; 9] = [
    "Introduction",
    "Learning Objectives",
    "Key Concepts",
    "Practical Application",
    "Common Mistakes and Misconceptions",
    "Exercises and Activities",
    "Advanced Exploration",
    "Summary and Key Takeaways",
    "Feedback and Reflection",
];

/// Builds the instruction sent to the generative service.
pub fn compose(request: &LessonRequest) -> String {
    render(LESSON_TEMPLATE, |name| match name {
        "topic" => Some(request.topic.as_str()),
        "level" => Some(request.level.as_str()),
        "preference" => Some(request.preference.as_str()),
        _ => None,
    })
}

/// Single-pass placeholder substitution. Substituted values are not rescanned,
/// and braces that do not name a known placeholder are copied through.
fn render<'a>(template: &str, lookup: impl Fn(&str) -> Option<&'a str>) -> String {
    let mut out = String::with_capacity(template.len() + 128);
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let substitution = after
            .find('}')
            .and_then(|end| lookup(&after[..end]).map(|value| (end, value)));
        match substitution {
            Some((end, value)) => {
                out.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
