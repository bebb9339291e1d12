//! Fixed prompt templates for roadmap generation.
//!
//! Three styles exist: a markdown chart with checklists and tables, a looser
//! plain-markdown variant, and a structured variant that asks the model for a
//! bare JSON object. The aspiration text is substituted verbatim, never
//! escaped or trimmed.

use std::fmt;
use std::str::FromStr;

/// Which prompt template the service renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStyle {
    /// Markdown chart: checklist/table milestones with a timeline column.
    Checklist,
    /// Same content categories, looser formatting instruction.
    Markdown,
    /// Bare JSON object with steps/resources/skills/tips.
    Structured,
}

impl FromStr for PromptStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "checklist" => Ok(PromptStyle::Checklist),
            "markdown" => Ok(PromptStyle::Markdown),
            "structured" | "json" => Ok(PromptStyle::Structured),
            other => Err(format!(
                "unknown prompt style '{other}' (expected checklist, markdown, or structured)"
            )),
        }
    }
}

impl fmt::Display for PromptStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PromptStyle::Checklist => "checklist",
            PromptStyle::Markdown => "markdown",
            PromptStyle::Structured => "structured",
        };
        f.write_str(name)
    }
}

/// Render the prompt for `style`, substituting the aspiration verbatim.
pub fn render(style: PromptStyle, aspiration: &str) -> String {
    match style {
        PromptStyle::Checklist => checklist_prompt(aspiration),
        PromptStyle::Markdown => markdown_prompt(aspiration),
        PromptStyle::Structured => structured_prompt(aspiration),
    }
}

fn checklist_prompt(aspiration: &str) -> String {
    format!(
        r#"I want to achieve the following aspiration: "{aspiration}"

Please provide a detailed roadmap to achieve this goal.
Format the roadmap as a visual chart using markdown elements such as checklists, tables, or flow diagrams.
Include:
- Key steps and milestones (use a checklist or table)
- Recommended resources (books, websites, courses) in a table
- Important skills to learn (bullet points)
- Suggested timeline for each step (add a timeline column in the table)
- Tips for staying motivated and overcoming common challenges (bullet points)

Make the roadmap visually clear and easy to follow. Use markdown formatting for all sections.
"#
    )
}

fn markdown_prompt(aspiration: &str) -> String {
    format!(
        r#"I want to achieve the following aspiration: "{aspiration}"

Please provide a detailed roadmap to achieve this goal. Include:
- Key steps and milestones
- Recommended resources (books, websites, courses)
- Important skills to learn
- Suggested timeline for each step
- Tips for staying motivated and overcoming common challenges

Present the roadmap in a clear, structured way using markdown formatting.
"#
    )
}

fn structured_prompt(aspiration: &str) -> String {
    format!(
        r#"I want to achieve the following aspiration: "{aspiration}"

Create a detailed roadmap to achieve this goal. Return ONLY a JSON object, with no surrounding text or markdown fences, using exactly these keys:
- "steps": an array of objects, each with "step" (integer), "title" (string), "description" (string), "timeline" (string), "status" (boolean, always false), and "notes" (string)
- "resources": an array of recommended resources (books, websites, courses)
- "skills": an array of important skills to learn
- "tips": an array of tips for staying motivated and overcoming common challenges

Example of the expected shape:
{{"steps": [{{"step": 1, "title": "Get a medical certificate", "description": "Schedule an exam with an aviation medical examiner.", "timeline": "1 month", "status": false, "notes": ""}}], "resources": ["FAA Airman Certification Standards"], "skills": ["Radio communication"], "tips": ["Fly at least twice a week to retain skills"]}}
"#
    )
}
