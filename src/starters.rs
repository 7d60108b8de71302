use crate::error::{ResumeError, Result};
use crate::schema::{Education, Experience, PersonalInfo, ResumeData, Skills};

/// A named starting point for a new résumé.
#[derive(Debug, Clone)]
pub struct Starter {
    pub name: &'static str,
    pub description: &'static str,
    build: fn() -> ResumeData,
}

impl Starter {
    /// Produce a fresh copy of the starter résumé.
    pub fn build(&self) -> ResumeData {
        (self.build)()
    }
}

/// Registry of built-in starters recognised by the CLI.
pub struct StarterRegistry;

impl StarterRegistry {
    /// Return the set of available starters.
    pub fn list() -> Vec<&'static Starter> {
        vec![&MINIMAL, &BLANK, &SAMPLE]
    }

    /// Resolve a starter by name (case-insensitive).
    pub fn get(name: &str) -> Result<&'static Starter> {
        Self::list()
            .into_iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| ResumeError::UnknownStarter(name.to_string()))
    }
}

static MINIMAL: Starter = Starter {
    name: "minimal",
    description: "Name only; every section empty.",
    build: minimal,
};

static BLANK: Starter = Starter {
    name: "blank",
    description: "One empty experience and one empty education entry, ready to fill in.",
    build: blank,
};

static SAMPLE: Starter = Starter {
    name: "sample",
    description: "A completed example covering every field.",
    build: sample,
};

fn minimal() -> ResumeData {
    ResumeData::new(PersonalInfo::named("Jane Doe"))
}

fn blank() -> ResumeData {
    let mut exp = Experience::blank("1");
    exp.achievements.push(String::new());
    ResumeData {
        experience: vec![exp],
        education: vec![Education::blank("1")],
        ..ResumeData::default()
    }
}

fn sample() -> ResumeData {
    ResumeData {
        personal_info: PersonalInfo {
            full_name: "Jane Doe".to_string(),
            email: "jane.doe@example.com".to_string(),
            phone: "(555) 010-0100".to_string(),
            location: "Arlington, VA".to_string(),
            linkedin: "linkedin.com/in/janedoe".to_string(),
            portfolio: "janedoe.dev".to_string(),
        },
        summary: "Security compliance lead with eight years of experience running FedRAMP \
                  and NIST 800-53 assessment programs for cloud platforms."
            .to_string(),
        experience: vec![
            Experience {
                id: "1".to_string(),
                job_title: "ISSO".to_string(),
                company: "Northwind Cloud".to_string(),
                location: "Remote".to_string(),
                start_date: "Mar 2021".to_string(),
                end_date: String::new(),
                current: true,
                achievements: vec![
                    "Led FedRAMP Moderate authorization for 3 SaaS products".to_string(),
                    "Reduced open POA&M items by 45% through continuous monitoring".to_string(),
                ],
            },
            Experience {
                id: "2".to_string(),
                job_title: "Security Analyst".to_string(),
                company: "Contoso Federal".to_string(),
                location: "Washington, DC".to_string(),
                start_date: "Jun 2017".to_string(),
                end_date: "Feb 2021".to_string(),
                current: false,
                achievements: vec![
                    "Implemented vulnerability scanning across 1,200 hosts".to_string(),
                ],
            },
        ],
        education: vec![Education {
            id: "1".to_string(),
            degree: "BS".to_string(),
            major: "Information Systems".to_string(),
            university: "George Mason University".to_string(),
            graduation_year: "2017".to_string(),
            gpa: Some("3.7".to_string()),
            honors: Some("Magna Cum Laude".to_string()),
        }],
        skills: Skills {
            technical: vec![
                "NIST RMF".to_string(),
                "AWS".to_string(),
                "Splunk".to_string(),
                "ServiceNow GRC".to_string(),
            ],
            languages: vec!["English".to_string(), "Spanish".to_string()],
            certifications: vec!["CISSP".to_string(), "CISA".to_string()],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checklist;
    use crate::lint::lint;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(StarterRegistry::get("MINIMAL").unwrap().name, "minimal");
        assert!(matches!(
            StarterRegistry::get("fancy"),
            Err(ResumeError::UnknownStarter(_))
        ));
    }

    #[test]
    fn test_minimal_matches_documented_example() {
        let r = StarterRegistry::get("minimal").unwrap().build();
        assert_eq!(r.personal_info.full_name, "Jane Doe");
        assert!(r.summary.is_empty());
        assert!(r.experience.is_empty());
        assert!(r.education.is_empty());
        assert!(r.skills.is_empty());
    }

    #[test]
    fn test_blank_has_one_of_each() {
        let r = StarterRegistry::get("blank").unwrap().build();
        assert_eq!(r.experience.len(), 1);
        assert_eq!(r.experience[0].achievements, vec![String::new()]);
        assert_eq!(r.education.len(), 1);
    }

    #[test]
    fn test_sample_is_lint_clean_and_complete() {
        let r = StarterRegistry::get("sample").unwrap().build();
        assert!(lint(&r).is_clean());
        assert_eq!(checklist::evaluate(&r).score, 100);
    }
}
