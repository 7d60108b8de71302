//! Record shapes describing a résumé.
//!
//! Every type here is plain value data. Nothing validates on construction:
//! conformance of untyped input lives in [`crate::conform`] and the
//! conventions the shape leaves unenforced are reported by [`crate::lint`].

use serde::{Deserialize, Serialize};

/// Contact block shown at the top of a résumé. Empty strings are valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub portfolio: String,
}

impl PersonalInfo {
    /// Contact info carrying only a name.
    pub fn named<S: Into<String>>(full_name: S) -> Self {
        Self {
            full_name: full_name.into(),
            ..Self::default()
        }
    }
}

/// One position in the work history.
///
/// `id` is expected to be unique among the experience entries of a résumé,
/// but the shape does not reject duplicates. When `current` is set,
/// `end_date` is conventionally left empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub job_title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub current: bool,
    pub achievements: Vec<String>,
}

impl Experience {
    /// Empty entry with the given id, the shape an editing form starts from.
    pub fn blank<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Date span as displayed, e.g. `Jan 2020 - Present`.
    pub fn period(&self) -> String {
        if self.current {
            format!("{} - Present", self.start_date)
        } else {
            format!("{} - {}", self.start_date, self.end_date)
        }
    }

    /// Achievements that are not blank after trimming, in order.
    pub fn listed_achievements(&self) -> impl Iterator<Item = &str> {
        self.achievements
            .iter()
            .map(String::as_str)
            .filter(|a| !a.trim().is_empty())
    }
}

/// One education entry. `gpa` and `honors` are independently optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub degree: String,
    pub major: String,
    pub university: String,
    pub graduation_year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub honors: Option<String>,
}

impl Education {
    pub fn blank<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// Three independent skill lists.
///
/// `languages` is kept under its original label. Whether it means spoken
/// languages or programming languages is left to the consuming application.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Skills {
    pub technical: Vec<String>,
    pub languages: Vec<String>,
    pub certifications: Vec<String>,
}

impl Skills {
    pub fn is_empty(&self) -> bool {
        self.technical.is_empty() && self.languages.is_empty() && self.certifications.is_empty()
    }
}

/// Aggregate root owning every other record of a résumé.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Skills,
}

impl ResumeData {
    /// Résumé with the given contact block and nothing else.
    pub fn new(personal_info: PersonalInfo) -> Self {
        Self {
            personal_info,
            ..Self::default()
        }
    }

    /// Every free-text value in the résumé, in document order.
    pub fn text_values(&self) -> Vec<&str> {
        let p = &self.personal_info;
        let mut out = vec![
            p.full_name.as_str(),
            p.email.as_str(),
            p.phone.as_str(),
            p.location.as_str(),
            p.linkedin.as_str(),
            p.portfolio.as_str(),
            self.summary.as_str(),
        ];
        for exp in &self.experience {
            out.extend([
                exp.id.as_str(),
                exp.job_title.as_str(),
                exp.company.as_str(),
                exp.location.as_str(),
                exp.start_date.as_str(),
                exp.end_date.as_str(),
            ]);
            out.extend(exp.achievements.iter().map(String::as_str));
        }
        for edu in &self.education {
            out.extend([
                edu.id.as_str(),
                edu.degree.as_str(),
                edu.major.as_str(),
                edu.university.as_str(),
                edu.graduation_year.as_str(),
            ]);
            out.extend(edu.gpa.as_deref());
            out.extend(edu.honors.as_deref());
        }
        out.extend(self.skills.technical.iter().map(String::as_str));
        out.extend(self.skills.languages.iter().map(String::as_str));
        out.extend(self.skills.certifications.iter().map(String::as_str));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_names_are_camel_case() {
        let mut resume = ResumeData::new(PersonalInfo::named("Jane Doe"));
        resume.experience.push(Experience::blank("1"));
        resume.education.push(Education::blank("e1"));
        let value = serde_json::to_value(&resume).unwrap();
        assert_eq!(value["personalInfo"]["fullName"], json!("Jane Doe"));
        assert!(value["experience"][0].get("jobTitle").is_some());
        assert!(value["experience"][0].get("startDate").is_some());
        assert!(value["education"][0].get("graduationYear").is_some());
    }

    #[test]
    fn test_absent_optionals_are_omitted() {
        let value = serde_json::to_value(Education::blank("e1")).unwrap();
        assert!(value.get("gpa").is_none());
        assert!(value.get("honors").is_none());
    }

    #[test]
    fn test_null_optional_reads_as_none() {
        let edu: Education = serde_json::from_value(json!({
            "id": "e1", "degree": "BSc", "major": "", "university": "MIT",
            "graduationYear": "2019", "gpa": null
        }))
        .unwrap();
        assert_eq!(edu.gpa, None);
        assert_eq!(edu.honors, None);
    }

    #[test]
    fn test_missing_required_field_fails() {
        let res: Result<PersonalInfo, _> = serde_json::from_value(json!({
            "fullName": "Jane", "email": "", "phone": "", "location": "", "linkedin": ""
        }));
        assert!(res.is_err());
    }

    #[test]
    fn test_period_uses_present_for_current_roles() {
        let mut exp = Experience::blank("1");
        exp.start_date = "2020".into();
        exp.end_date = "2022".into();
        assert_eq!(exp.period(), "2020 - 2022");
        exp.current = true;
        assert_eq!(exp.period(), "2020 - Present");
    }

    #[test]
    fn test_listed_achievements_skip_blank() {
        let mut exp = Experience::blank("1");
        exp.achievements = vec!["Built it".into(), "   ".into(), "".into(), "Shipped".into()];
        let listed: Vec<&str> = exp.listed_achievements().collect();
        assert_eq!(listed, vec!["Built it", "Shipped"]);
    }

    #[test]
    fn test_skills_is_empty() {
        let mut skills = Skills::default();
        assert!(skills.is_empty());
        skills.certifications.push("CISSP".into());
        assert!(!skills.is_empty());
    }
}
