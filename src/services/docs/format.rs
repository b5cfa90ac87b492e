use std::fmt::Write;

use serde_json::Value;

use super::models::{value_text, Documentation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TechCategory {
    Languages,
    Frameworks,
    Databases,
    Tools,
    Libraries,
    Other,
}

impl TechCategory {
    /// Display order of the grouped technology section.
    pub const ORDERED: [TechCategory; 6] = [
        Self::Languages,
        Self::Frameworks,
        Self::Databases,
        Self::Tools,
        Self::Libraries,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Languages => "languages",
            Self::Frameworks => "frameworks",
            Self::Databases => "databases",
            Self::Tools => "tools",
            Self::Libraries => "libraries",
            Self::Other => "other",
        }
    }
}

const TECH_TABLE: &[(TechCategory, &[&str])] = &[
    (
        TechCategory::Languages,
        &["Python", "JavaScript", "TypeScript", "Java", "C++", "Go", "Rust"],
    ),
    (
        TechCategory::Frameworks,
        &["React", "Vue.js", "Angular", "Django", "Flask", "FastAPI", "Spring"],
    ),
    (
        TechCategory::Databases,
        &["MongoDB", "PostgreSQL", "MySQL", "Redis", "SQLite"],
    ),
    (
        TechCategory::Tools,
        &["Docker", "Kubernetes", "Git", "Jenkins", "Streamlit", "Jupyter"],
    ),
    (
        TechCategory::Libraries,
        &["Pandas", "NumPy", "TensorFlow", "PyTorch", "scikit-learn"],
    ),
];

/// Exact, case-sensitive lookup; unknown names are `Other`.
pub fn categorize_technology(name: &str) -> TechCategory {
    TECH_TABLE
        .iter()
        .find(|(_, names)| names.contains(&name))
        .map(|(category, _)| *category)
        .unwrap_or(TechCategory::Other)
}

/// Render documentation as sectioned plain text.
pub fn format_documentation(docs: &Documentation) -> String {
    let mut out = String::new();
    let name = docs.project_name.as_deref().unwrap_or("(unnamed project)");
    let _ = writeln!(out, "Documentation: {name}");

    let _ = writeln!(out, "\n## Project Overview");
    let description = docs
        .project_info
        .description
        .as_deref()
        .or(docs.overview.as_deref())
        .unwrap_or("No description available");
    let _ = writeln!(out, "{description}");
    if let Some(summary) = &docs.analysis.summary {
        let _ = writeln!(out, "\n{summary}");
    }
    if let Some(architecture) = &docs.architecture {
        let _ = writeln!(out, "\n## Architecture\n{architecture}");
    }

    let technologies = &docs.project_info.technologies;
    if !technologies.is_empty() {
        let _ = writeln!(out, "\n## Technologies Used");
        for category in TechCategory::ORDERED {
            let names: Vec<&str> = technologies
                .iter()
                .map(String::as_str)
                .filter(|t| categorize_technology(t) == category)
                .collect();
            if !names.is_empty() {
                let _ = writeln!(out, "- {}: {}", category.as_str(), names.join(", "));
            }
        }
    }

    let _ = writeln!(out, "\n## Dependencies");
    let dependencies = if docs.project_info.dependencies.is_empty() {
        &docs.dependencies
    } else {
        &docs.project_info.dependencies
    };
    if dependencies.is_empty() {
        let _ = writeln!(out, "No dependencies found");
    }
    for dep in dependencies {
        let _ = writeln!(out, "- {}", value_text(dep));
    }

    if !docs.analysis.components.is_empty() {
        let _ = writeln!(out, "\n## Components Analysis");
    }
    for component in &docs.analysis.components {
        let _ = writeln!(out, "\n### {}", component.file);
        if let Some(description) = &component.description {
            let _ = writeln!(out, "{description}");
        }
        if !component.functions.is_empty() {
            let _ = writeln!(out, "Functions:");
            for func in &component.functions {
                let args = if func.args.is_empty() {
                    "None".to_string()
                } else {
                    func.args.join(", ")
                };
                let _ = writeln!(out, "  - {} (Arguments: {args})", func.name);
                if let Some(doc) = &func.docstring {
                    let _ = writeln!(out, "    {doc}");
                }
            }
        }
        if !component.classes.is_empty() {
            let _ = writeln!(out, "Classes:");
            for class in &component.classes {
                let _ = writeln!(out, "  - {}", class.name);
                if let Some(doc) = &class.docstring {
                    let _ = writeln!(out, "    {doc}");
                }
                let _ = writeln!(out, "    Methods: {}", class.methods.join(", "));
            }
        }
    }

    write_items(&mut out, "Modules", &docs.modules, &["name"]);
    write_items(&mut out, "Functions", &docs.functions, &["name"]);
    write_items(&mut out, "Classes", &docs.classes, &["name"]);
    write_items(&mut out, "API Endpoints", &docs.apis, &["method", "endpoint"]);

    let quality = &docs.analysis.code_quality;
    let _ = writeln!(out, "\n## Code Quality Analysis");
    let _ = writeln!(out, "Total Lines: {}", quality.total_lines);
    let _ = writeln!(out, "Code Lines: {}", quality.code_lines);
    let _ = writeln!(out, "Comment Lines: {}", quality.comment_lines);
    let _ = writeln!(
        out,
        "Docstring Coverage: {:.1}%",
        quality.docstring_coverage
    );
    if let Some(recommendations) = &quality.recommendations {
        let _ = writeln!(out, "\n### Recommendations\n{recommendations}");
    }

    out
}

/// One `### <title>` block per item, then its description and any string
/// lists it carries (`dependencies` for modules, `methods` for classes).
fn write_items(out: &mut String, heading: &str, items: &[Value], title_keys: &[&str]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n## {heading}");
    for item in items {
        let title = match item {
            Value::Object(_) => title_keys
                .iter()
                .filter_map(|key| item.get(*key).map(value_text))
                .collect::<Vec<_>>()
                .join(" "),
            other => value_text(other),
        };
        let _ = writeln!(out, "\n### {title}");

        if let Some(description) = item.get("description").map(value_text) {
            let _ = writeln!(out, "{description}");
        }
        for list_key in ["dependencies", "methods"] {
            if let Some(Value::Array(entries)) = item.get(list_key) {
                let names: Vec<String> = entries
                    .iter()
                    .map(|entry| match entry.get("name") {
                        Some(name) => value_text(name),
                        None => value_text(entry),
                    })
                    .collect();
                if !names.is_empty() {
                    let _ = writeln!(out, "{}: {}", capitalize(list_key), names.join(", "));
                }
            }
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
