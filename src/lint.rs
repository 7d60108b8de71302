//! Convention checks the shape itself leaves unenforced.
//!
//! A finding never rejects a résumé. Callers decide whether warnings matter.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::schema::ResumeData;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Notice,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    DuplicateId,
    BlankId,
    CurrentWithEndDate,
    BlankAchievement,
}

impl Rule {
    pub fn severity(self) -> Severity {
        match self {
            Rule::DuplicateId | Rule::BlankId | Rule::CurrentWithEndDate => Severity::Warning,
            Rule::BlankAchievement => Severity::Notice,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Rule::DuplicateId => "duplicate-id",
            Rule::BlankId => "blank-id",
            Rule::CurrentWithEndDate => "current-with-end-date",
            Rule::BlankAchievement => "blank-achievement",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Finding {
    pub path: String,
    pub rule: Rule,
    pub message: String,
}

impl Finding {
    pub fn severity(&self) -> Severity {
        self.rule.severity()
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity() {
            Severity::Warning => "warning",
            Severity::Notice => "notice",
        };
        write!(
            f,
            "{level}[{}] {}: {}",
            self.rule.name(),
            self.path,
            self.message
        )
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LintReport {
    pub findings: Vec<Finding>,
}

impl LintReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity() == Severity::Warning)
    }

    pub fn has_warnings(&self) -> bool {
        self.warnings().next().is_some()
    }
}

/// Run every convention rule over the résumé.
pub fn lint(resume: &ResumeData) -> LintReport {
    let mut findings = Vec::new();

    let mut seen = HashSet::new();
    for (idx, exp) in resume.experience.iter().enumerate() {
        let path = format!("experience[{idx}]");
        check_id(&exp.id, &path, &mut seen, &mut findings);

        if exp.current && !exp.end_date.trim().is_empty() {
            findings.push(Finding {
                path: format!("{path}.endDate"),
                rule: Rule::CurrentWithEndDate,
                message: format!(
                    "position is marked current but has end date '{}'",
                    exp.end_date
                ),
            });
        }

        for (a_idx, achievement) in exp.achievements.iter().enumerate() {
            if achievement.trim().is_empty() {
                findings.push(Finding {
                    path: format!("{path}.achievements[{a_idx}]"),
                    rule: Rule::BlankAchievement,
                    message: "blank achievement will not be rendered".to_string(),
                });
            }
        }
    }

    // education ids form their own namespace
    let mut seen = HashSet::new();
    for (idx, edu) in resume.education.iter().enumerate() {
        check_id(&edu.id, &format!("education[{idx}]"), &mut seen, &mut findings);
    }

    LintReport { findings }
}

fn check_id<'a>(
    id: &'a str,
    path: &str,
    seen: &mut HashSet<&'a str>,
    findings: &mut Vec<Finding>,
) {
    if id.trim().is_empty() {
        findings.push(Finding {
            path: format!("{path}.id"),
            rule: Rule::BlankId,
            message: "entry has no id".to_string(),
        });
        return;
    }
    if !seen.insert(id) {
        findings.push(Finding {
            path: format!("{path}.id"),
            rule: Rule::DuplicateId,
            message: format!("id '{id}' is already used by an earlier entry"),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Education, Experience, PersonalInfo};

    fn resume() -> ResumeData {
        let mut r = ResumeData::new(PersonalInfo::named("Jane Doe"));
        let mut exp = Experience::blank("1");
        exp.achievements = vec!["Shipped v2".into()];
        r.experience.push(exp);
        r.education.push(Education::blank("1"));
        r
    }

    #[test]
    fn test_clean_resume() {
        assert!(lint(&resume()).is_clean());
    }

    #[test]
    fn test_same_id_across_sections_is_fine() {
        // experience "1" and education "1" live in different sequences
        let report = lint(&resume());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_duplicate_experience_id() {
        let mut r = resume();
        r.experience.push(Experience::blank("1"));
        let report = lint(&r);
        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].rule, Rule::DuplicateId);
        assert_eq!(report.findings[0].path, "experience[1].id");
    }

    #[test]
    fn test_duplicate_education_id() {
        let mut r = resume();
        r.education.push(Education::blank("1"));
        let report = lint(&r);
        assert_eq!(report.findings[0].path, "education[1].id");
    }

    #[test]
    fn test_current_with_end_date() {
        let mut r = resume();
        r.experience[0].current = true;
        r.experience[0].end_date = "2023".into();
        let report = lint(&r);
        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].rule, Rule::CurrentWithEndDate);
        assert!(report.has_warnings());
    }

    #[test]
    fn test_blank_achievement_is_notice() {
        let mut r = resume();
        r.experience[0].achievements.push("  ".into());
        let report = lint(&r);
        assert_eq!(report.findings.len(), 1);
        assert_eq!(report.findings[0].severity(), Severity::Notice);
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_blank_id() {
        let mut r = resume();
        r.education.push(Education::blank(""));
        let report = lint(&r);
        assert_eq!(report.findings[0].rule, Rule::BlankId);
    }

    #[test]
    fn test_finding_display() {
        let f = Finding {
            path: "experience[1].id".into(),
            rule: Rule::DuplicateId,
            message: "id '1' is already used by an earlier entry".into(),
        };
        assert_eq!(
            f.to_string(),
            "warning[duplicate-id] experience[1].id: id '1' is already used by an earlier entry"
        );
    }
}
