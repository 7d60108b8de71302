use std::fmt::Write as _;

use crate::schema::{Education, Experience, ResumeData, Skills};

const PLACEHOLDER_NAME: &str = "Your Name";

/// Output flavours for [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderFormat {
    /// Plain text with upper-case headings underlined by dashes.
    Text,
    Markdown,
}

/// Render a résumé in presentation order. Empty sections are omitted.
pub fn render(resume: &ResumeData, format: RenderFormat) -> String {
    let mut out = String::new();
    let p = &resume.personal_info;

    let name = if p.full_name.trim().is_empty() {
        PLACEHOLDER_NAME
    } else {
        p.full_name.as_str()
    };
    match format {
        RenderFormat::Text => {
            writeln!(&mut out, "{name}").ok();
        }
        RenderFormat::Markdown => {
            writeln!(&mut out, "# {name}").ok();
        }
    }
    let contact = [&p.phone, &p.email, &p.location, &p.linkedin, &p.portfolio]
        .iter()
        .filter(|v| !v.is_empty())
        .map(|v| v.as_str())
        .collect::<Vec<_>>()
        .join(" | ");
    if !contact.is_empty() {
        writeln!(&mut out, "{contact}").ok();
    }

    if !resume.summary.is_empty() {
        heading(&mut out, format, "PROFESSIONAL SUMMARY");
        writeln!(&mut out, "{}", resume.summary).ok();
    }

    if !resume.experience.is_empty() {
        heading(&mut out, format, "PROFESSIONAL EXPERIENCE");
        for (idx, exp) in resume.experience.iter().enumerate() {
            if idx > 0 {
                out.push('\n');
            }
            experience(&mut out, format, exp);
        }
    }

    if !resume.education.is_empty() {
        heading(&mut out, format, "EDUCATION");
        for (idx, edu) in resume.education.iter().enumerate() {
            if idx > 0 {
                out.push('\n');
            }
            education(&mut out, format, edu);
        }
    }

    if !resume.skills.is_empty() {
        heading(&mut out, format, "SKILLS");
        skills(&mut out, format, &resume.skills);
    }

    out
}

fn heading(out: &mut String, format: RenderFormat, title: &str) {
    out.push('\n');
    match format {
        RenderFormat::Text => {
            writeln!(out, "{title}").ok();
            writeln!(out, "{}", "-".repeat(title.chars().count())).ok();
        }
        RenderFormat::Markdown => {
            writeln!(out, "## {title}").ok();
            out.push('\n');
        }
    }
}

fn experience(out: &mut String, format: RenderFormat, exp: &Experience) {
    let location = if exp.location.is_empty() {
        String::new()
    } else {
        format!(", {}", exp.location)
    };
    match format {
        RenderFormat::Text => {
            writeln!(out, "{}", exp.job_title).ok();
            writeln!(out, "{}{} ({})", exp.company, location, exp.period()).ok();
        }
        RenderFormat::Markdown => {
            writeln!(out, "### {}", exp.job_title).ok();
            writeln!(out, "*{}*{} ({})", exp.company, location, exp.period()).ok();
        }
    }
    let mut listed = exp.listed_achievements().peekable();
    if listed.peek().is_some() && format == RenderFormat::Markdown {
        out.push('\n');
    }
    for achievement in listed {
        let bullet = match format {
            RenderFormat::Text => "  •",
            RenderFormat::Markdown => "-",
        };
        writeln!(out, "{bullet} {achievement}").ok();
    }
}

fn education(out: &mut String, format: RenderFormat, edu: &Education) {
    let title = if edu.major.is_empty() {
        edu.degree.clone()
    } else {
        format!("{}, {}", edu.degree, edu.major)
    };
    let year = if edu.graduation_year.is_empty() {
        String::new()
    } else {
        format!(" ({})", edu.graduation_year)
    };
    match format {
        RenderFormat::Text => {
            writeln!(out, "{title}").ok();
            writeln!(out, "{}{}", edu.university, year).ok();
        }
        RenderFormat::Markdown => {
            writeln!(out, "### {title}").ok();
            writeln!(out, "*{}*{}", edu.university, year).ok();
        }
    }
    let extras: Vec<String> = [
        edu.gpa
            .as_deref()
            .filter(|g| !g.is_empty())
            .map(|g| format!("GPA: {g}")),
        edu.honors
            .as_deref()
            .filter(|h| !h.is_empty())
            .map(str::to_string),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !extras.is_empty() {
        writeln!(out, "{}", extras.join(" | ")).ok();
    }
}

fn skills(out: &mut String, format: RenderFormat, skills: &Skills) {
    let rows = [
        ("Technical Skills", &skills.technical),
        ("Languages", &skills.languages),
        ("Certifications", &skills.certifications),
    ];
    for (label, items) in rows {
        if items.is_empty() {
            continue;
        }
        match format {
            RenderFormat::Text => {
                writeln!(out, "{label}: {}", items.join(", ")).ok();
            }
            RenderFormat::Markdown => {
                writeln!(out, "**{label}:** {}  ", items.join(", ")).ok();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::PersonalInfo;

    fn sample() -> ResumeData {
        let mut r = ResumeData::new(PersonalInfo {
            full_name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: "555-0100".into(),
            location: String::new(),
            linkedin: String::new(),
            portfolio: "jane.dev".into(),
        });
        r.summary = "Builder of reliable systems.".into();
        r.experience.push(Experience {
            id: "1".into(),
            job_title: "Staff Engineer".into(),
            company: "Acme".into(),
            location: "Remote".into(),
            start_date: "2021".into(),
            end_date: "2024".into(),
            current: true,
            achievements: vec!["Cut p99 latency by 30%".into(), " ".into()],
        });
        r.education.push(Education {
            id: "1".into(),
            degree: "BSc".into(),
            major: "Computer Science".into(),
            university: "State University".into(),
            graduation_year: "2015".into(),
            gpa: Some("3.8".into()),
            honors: None,
        });
        r.skills.languages = vec!["English".into(), "Spanish".into()];
        r
    }

    #[test]
    fn test_text_rendering() {
        let text = render(&sample(), RenderFormat::Text);
        let expected = "\
Jane Doe
555-0100 | jane@example.com | jane.dev

PROFESSIONAL SUMMARY
--------------------
Builder of reliable systems.

PROFESSIONAL EXPERIENCE
-----------------------
Staff Engineer
Acme, Remote (2021 - Present)
  • Cut p99 latency by 30%

EDUCATION
---------
BSc, Computer Science
State University (2015)
GPA: 3.8

SKILLS
------
Languages: English, Spanish
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_minimal_uses_placeholder_and_omits_sections() {
        let text = render(&ResumeData::default(), RenderFormat::Text);
        assert_eq!(text, "Your Name\n");
    }

    #[test]
    fn test_markdown_headings() {
        let md = render(&sample(), RenderFormat::Markdown);
        assert!(md.starts_with("# Jane Doe\n"));
        assert!(md.contains("## PROFESSIONAL EXPERIENCE"));
        assert!(md.contains("### Staff Engineer\n*Acme*, Remote (2021 - Present)"));
        assert!(md.contains("- Cut p99 latency by 30%"));
        assert!(md.contains("**Languages:** English, Spanish"));
    }

    #[test]
    fn test_education_without_major_or_extras() {
        let mut r = ResumeData::default();
        r.education.push(Education {
            degree: "MBA".into(),
            university: "Business School".into(),
            ..Education::default()
        });
        let text = render(&r, RenderFormat::Text);
        assert!(text.ends_with("MBA\nBusiness School\n"));
    }
}
