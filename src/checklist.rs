//! Weighted ATS readiness checklist computed from structured résumé data.

use serde::{Deserialize, Serialize};

use crate::schema::ResumeData;

const MIN_SUMMARY_CHARS: usize = 50;
const MIN_TECHNICAL_SKILLS: usize = 3;

const ACTION_VERBS: &[&str] = &[
    "led",
    "developed",
    "increased",
    "reduced",
    "implemented",
    "managed",
    "created",
    "designed",
    "improved",
    "achieved",
    "delivered",
    "launched",
    "optimized",
    "streamlined",
    "built",
];

/// One entry of the checklist.
#[derive(Debug, Clone, Copy)]
pub struct Check {
    pub id: &'static str,
    pub label: &'static str,
    pub weight: u32,
    test: fn(&ResumeData) -> bool,
}

impl Check {
    pub fn passes(&self, resume: &ResumeData) -> bool {
        (self.test)(resume)
    }
}

pub static CHECKS: &[Check] = &[
    Check {
        id: "contact",
        label: "Contact information complete",
        weight: 15,
        test: contact_complete,
    },
    Check {
        id: "summary",
        label: "Professional summary included",
        weight: 10,
        test: |r| r.summary.chars().count() >= MIN_SUMMARY_CHARS,
    },
    Check {
        id: "experience",
        label: "Work experience added",
        weight: 20,
        test: |r| !r.experience.is_empty(),
    },
    Check {
        id: "achievements",
        label: "Achievements with metrics",
        weight: 15,
        test: |r| achievements(r).any(|a| a.chars().any(|c| c.is_ascii_digit())),
    },
    Check {
        id: "education",
        label: "Education section complete",
        weight: 15,
        test: |r| !r.education.is_empty(),
    },
    Check {
        id: "skills",
        label: "Technical skills listed",
        weight: 10,
        test: |r| r.skills.technical.len() >= MIN_TECHNICAL_SKILLS,
    },
    Check {
        id: "action-verbs",
        label: "Action verbs used in achievements",
        weight: 10,
        test: uses_action_verbs,
    },
    Check {
        id: "formatting",
        label: "Standard formatting (no special characters)",
        weight: 5,
        test: |r| r.text_values().iter().all(|v| v.is_ascii()),
    },
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckOutcome {
    pub id: String,
    pub label: String,
    pub weight: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistReport {
    /// Sum of the weights of passed checks, 0..=100.
    pub score: u32,
    pub passed: Vec<CheckOutcome>,
    pub failed: Vec<CheckOutcome>,
}

impl ChecklistReport {
    pub fn is_perfect(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn recommendations(&self) -> Vec<String> {
        self.failed
            .iter()
            .map(|c| format!("Complete: {}", c.label))
            .collect()
    }
}

pub fn evaluate(resume: &ResumeData) -> ChecklistReport {
    let mut passed = Vec::new();
    let mut failed = Vec::new();
    for check in CHECKS {
        let outcome = CheckOutcome {
            id: check.id.to_string(),
            label: check.label.to_string(),
            weight: check.weight,
        };
        if check.passes(resume) {
            passed.push(outcome);
        } else {
            failed.push(outcome);
        }
    }
    let score = passed.iter().map(|c| c.weight).sum();
    ChecklistReport {
        score,
        passed,
        failed,
    }
}

fn contact_complete(r: &ResumeData) -> bool {
    let p = &r.personal_info;
    [&p.full_name, &p.email, &p.phone, &p.location]
        .iter()
        .all(|v| !v.is_empty())
}

fn uses_action_verbs(r: &ResumeData) -> bool {
    achievements(r).any(|a| {
        let lower = a.to_lowercase();
        ACTION_VERBS.iter().any(|verb| lower.contains(verb))
    })
}

fn achievements(r: &ResumeData) -> impl Iterator<Item = &String> {
    r.experience.iter().flat_map(|e| e.achievements.iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Education, Experience, PersonalInfo};

    fn complete() -> ResumeData {
        let mut r = ResumeData::new(PersonalInfo {
            full_name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: "555-0100".into(),
            location: "Austin, TX".into(),
            linkedin: String::new(),
            portfolio: String::new(),
        });
        r.summary = "Security engineer with eight years of experience in cloud compliance.".into();
        let mut exp = Experience::blank("1");
        exp.achievements = vec!["Reduced audit findings by 40%".into()];
        r.experience.push(exp);
        r.education.push(Education::blank("1"));
        r.skills.technical = vec!["AWS".into(), "Terraform".into(), "Rust".into()];
        r
    }

    #[test]
    fn test_weights_sum_to_100() {
        assert_eq!(CHECKS.iter().map(|c| c.weight).sum::<u32>(), 100);
    }

    #[test]
    fn test_complete_resume_is_perfect() {
        let report = evaluate(&complete());
        assert_eq!(report.score, 100);
        assert!(report.is_perfect());
        assert!(report.recommendations().is_empty());
    }

    #[test]
    fn test_minimal_resume_scores_formatting_only() {
        let report = evaluate(&ResumeData::new(PersonalInfo::named("Jane Doe")));
        assert_eq!(report.score, 5);
        assert_eq!(report.passed.len(), 1);
        assert_eq!(report.passed[0].id, "formatting");
    }

    #[test]
    fn test_short_summary_fails() {
        let mut r = complete();
        r.summary = "Engineer.".into();
        let report = evaluate(&r);
        assert_eq!(report.score, 90);
        assert_eq!(
            report.recommendations(),
            vec!["Complete: Professional summary included".to_string()]
        );
    }

    #[test]
    fn test_non_ascii_fails_formatting() {
        let mut r = complete();
        r.personal_info.full_name = "Zoë Café".into();
        let report = evaluate(&r);
        assert!(report.failed.iter().any(|c| c.id == "formatting"));
    }

    #[test]
    fn test_action_verbs_case_insensitive() {
        let mut r = complete();
        r.experience[0].achievements = vec!["LED a team of 4".into()];
        let report = evaluate(&r);
        assert!(report.passed.iter().any(|c| c.id == "action-verbs"));
    }

    #[test]
    fn test_missing_phone_fails_contact() {
        let mut r = complete();
        r.personal_info.phone.clear();
        let report = evaluate(&r);
        assert_eq!(report.score, 85);
    }
}
