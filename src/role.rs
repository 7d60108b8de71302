//! Job role classification from a job description.
//!
//! Keyword coverage alone rates a strong hands-on résumé highly for a
//! director opening. Classifying the role's level and type lets the match
//! score be reduced when the résumé shows none of the experience the role
//! is really about.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

const DEFAULT_TITLE: &str = "Position";
const TITLE_SCAN_LINES: usize = 5;
const TITLE_MAX_LEN: usize = 100;

static TITLE_PREFIXES: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"(?i)^(director|manager|lead|senior|principal|staff|junior|associate)\s+")
            .expect("title prefix pattern"),
        Regex::new(r"(?i)^(vp|vice president)\s+").expect("title prefix pattern"),
    ]
});

static TITLE_IN_PROSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bThe\s+([A-Z][a-zA-Z\s]+?)\s+(manages|leads|oversees|is responsible)")
        .expect("title prose pattern")
});

const MANAGEMENT_INDICATORS: &[&str] = &[
    "manage team",
    "manages team",
    "team of",
    "direct reports",
    "p&l",
    "profit and loss",
    "revenue target",
    "book of business",
    "hiring",
    "performance management",
    "talent decisions",
];

const MANAGEMENT_TERMS: &[&str] = &[
    "manage team",
    "manages team",
    "team of",
    "p&l",
    "revenue",
    "book of business",
    "client escalations",
    "performance management",
    "hiring",
    "talent decisions",
    "gross profit",
    "budget",
];

const TECHNICAL_TERMS: &[&str] = &[
    "implement",
    "configure",
    "develop",
    "code",
    "script",
    "technical implementation",
    "hands-on",
    "build",
    "deploy",
];

const CONSULTING_TERMS: &[&str] = &[
    "consulting",
    "advisory",
    "client engagement",
    "assessment",
    "audit",
    "review",
    "recommendations",
    "advisory services",
];

const SALES_TERMS: &[&str] = &[
    "sales",
    "cross sell",
    "upsell",
    "renewals",
    "scoping",
    "pre-sales",
    "account management",
    "qbr",
    "quarterly business review",
];

const RESUME_MANAGEMENT: &[&str] = &[
    "managed team",
    "led team",
    "supervised",
    "direct reports",
    "hiring",
    "performance reviews",
    "mentored",
    "coached",
];
const RESUME_PL: &[&str] = &["p&l", "profit and loss", "revenue", "budget", "financial"];
const RESUME_SALES: &[&str] = &[
    "sales",
    "business development",
    "account management",
    "cross sell",
    "upsell",
    "renewals",
    "scoping",
];
const RESUME_CONSULTING: &[&str] = &[
    "consulting",
    "advisory",
    "client engagement",
    "assessment",
    "recommendations",
    "advisory services",
];

pub const FOCUS_TEAM: &str = "Team Management";
pub const FOCUS_SALES: &str = "Sales & Business Development";
pub const FOCUS_PL: &str = "P&L Responsibility";
pub const FOCUS_CONSULTING: &str = "Client Consulting";
pub const FOCUS_TECHNICAL: &str = "Technical Implementation";
pub const FOCUS_AUDIT: &str = "Audit & Assessment";

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RoleLevel {
    Entry,
    Mid,
    Senior,
    Lead,
    Manager,
    Director,
}

impl fmt::Display for RoleLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoleLevel::Entry => "entry",
            RoleLevel::Mid => "mid",
            RoleLevel::Senior => "senior",
            RoleLevel::Lead => "lead",
            RoleLevel::Manager => "manager",
            RoleLevel::Director => "director",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RoleType {
    Technical,
    Management,
    Hybrid,
    Sales,
    Consulting,
}

impl fmt::Display for RoleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoleType::Technical => "technical",
            RoleType::Management => "management",
            RoleType::Hybrid => "hybrid",
            RoleType::Sales => "sales",
            RoleType::Consulting => "consulting",
        };
        f.write_str(name)
    }
}

/// Level, type and focus areas inferred for a job.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RoleClassification {
    pub level: RoleLevel,
    pub kind: RoleType,
    pub focus: Vec<&'static str>,
    /// 0..=100
    pub confidence: u32,
}

/// Whether a résumé fits a classified role, and the score penalty when it does not.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RoleMatch {
    pub should_apply: bool,
    pub penalty: u32,
    pub reason: String,
    pub recommendation: String,
}

impl RoleMatch {
    fn fits(reason: &str) -> Self {
        Self {
            should_apply: false,
            penalty: 0,
            reason: reason.to_string(),
            recommendation: String::new(),
        }
    }

    fn mismatch(penalty: u32, reason: String, recommendation: &str) -> Self {
        Self {
            should_apply: true,
            penalty,
            reason,
            recommendation: recommendation.to_string(),
        }
    }

    /// Apply the penalty (if any) to a 0..=100 match score.
    pub fn adjust(&self, score: u32) -> u32 {
        if self.should_apply {
            score.saturating_sub(self.penalty)
        } else {
            score
        }
    }
}

fn count_in(text: &str, terms: &[&str]) -> usize {
    terms.iter().filter(|t| text.contains(*t)).count()
}

fn any_in(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|t| text.contains(t))
}

/// Guess the job title: a leading seniority word in the first few lines,
/// then "The <Title> manages/leads/oversees", else `Position`.
pub fn extract_job_title(job_description: &str) -> String {
    let lines = job_description
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .take(TITLE_SCAN_LINES);
    for line in lines {
        if line.len() < TITLE_MAX_LEN && TITLE_PREFIXES.iter().any(|re| re.is_match(line)) {
            return line.to_string();
        }
    }
    TITLE_IN_PROSE
        .captures(job_description)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string())
}

pub fn classify_role(job_title: &str, job_description: &str) -> RoleClassification {
    let title = job_title.to_lowercase();
    let desc = job_description.to_lowercase();

    let (level, level_confidence): (RoleLevel, u32) =
        if any_in(&title, &["director", "vp", "vice president"]) {
            (RoleLevel::Director, 95)
        } else if any_in(&title, &["manager", "head of"]) {
            (RoleLevel::Manager, 90)
        } else if any_in(&title, &["lead", "principal", "staff"]) {
            (RoleLevel::Lead, 85)
        } else if any_in(&title, &["senior", "sr."]) {
            (RoleLevel::Senior, 80)
        } else if any_in(&title, &["junior", "jr.", "associate"]) {
            (RoleLevel::Entry, 80)
        } else if count_in(&desc, MANAGEMENT_INDICATORS) >= 3 {
            (RoleLevel::Manager, 70)
        } else if desc.contains("lead") && desc.contains("team") {
            (RoleLevel::Lead, 65)
        } else {
            (RoleLevel::Mid, 0)
        };

    let management = count_in(&desc, MANAGEMENT_TERMS);
    let technical = count_in(&desc, TECHNICAL_TERMS);
    let consulting = count_in(&desc, CONSULTING_TERMS);
    let sales = count_in(&desc, SALES_TERMS);

    let (kind, type_confidence): (RoleType, u32) = if management >= 4 {
        (RoleType::Management, 90)
    } else if sales >= 3 {
        (RoleType::Sales, 85)
    } else if consulting >= 3 && management >= 2 {
        (RoleType::Hybrid, 80)
    } else if consulting >= 3 {
        (RoleType::Consulting, 75)
    } else if technical >= 3 {
        (RoleType::Technical, 80)
    } else {
        (RoleType::Hybrid, 60)
    };

    let mut focus = Vec::new();
    if management >= 2 {
        focus.push(FOCUS_TEAM);
    }
    if sales >= 2 {
        focus.push(FOCUS_SALES);
    }
    if any_in(&desc, &["p&l", "revenue", "profit"]) {
        focus.push(FOCUS_PL);
    }
    if consulting >= 2 {
        focus.push(FOCUS_CONSULTING);
    }
    if technical >= 2 {
        focus.push(FOCUS_TECHNICAL);
    }
    if any_in(&desc, &["audit", "assessment"]) {
        focus.push(FOCUS_AUDIT);
    }

    RoleClassification {
        level,
        kind,
        focus,
        confidence: (level_confidence + type_confidence).div_ceil(2),
    }
}

/// Compare a classified role against résumé text. The first matching rule wins.
pub fn assess_role_match(role: &RoleClassification, resume_text: &str) -> RoleMatch {
    let resume = resume_text.to_lowercase();
    let has_management = any_in(&resume, RESUME_MANAGEMENT);
    let has_pl = any_in(&resume, RESUME_PL);
    let has_sales = any_in(&resume, RESUME_SALES);
    let has_consulting = any_in(&resume, RESUME_CONSULTING);

    if matches!(role.level, RoleLevel::Director | RoleLevel::Manager) && !has_management {
        return RoleMatch::mismatch(
            30,
            format!(
                "This is a {} role requiring team management experience, but your resume \
                 doesn't show management responsibilities.",
                role.level.to_string().to_uppercase()
            ),
            "This role requires managing teams, P&L responsibility, and business development. \
             Your technical skills are strong, but this is a management position, not a \
             hands-on technical role.",
        );
    }

    if role.kind == RoleType::Management && role.focus.contains(&FOCUS_PL) && !has_pl {
        return RoleMatch::mismatch(
            25,
            "This role requires P&L responsibility and revenue management, which is not \
             evident in your resume."
                .to_string(),
            "This is a business-focused role. Your technical expertise is valuable, but the \
             role emphasizes business operations and financial management.",
        );
    }

    if role.kind == RoleType::Sales && !has_sales {
        return RoleMatch::mismatch(
            20,
            "This role requires significant sales and business development activities, which \
             are not shown in your resume."
                .to_string(),
            "This role involves cross-selling, upselling, renewals, and account management. \
             Your expertise is relevant, but the role is heavily sales-oriented.",
        );
    }

    match role.kind {
        RoleType::Consulting if has_consulting => {
            RoleMatch::fits("Good match - consulting role aligns with your experience.")
        }
        RoleType::Technical => {
            RoleMatch::fits("Good match - technical role aligns with your experience.")
        }
        RoleType::Hybrid => {
            let shows_management = has_management || has_pl;
            if !shows_management && role.focus.contains(&FOCUS_TEAM) {
                RoleMatch::mismatch(
                    15,
                    "This hybrid role requires both technical and management skills. Your \
                     resume shows strong technical skills but limited management experience."
                        .to_string(),
                    "Consider roles that are more technically focused, or highlight any \
                     leadership/mentorship experience you have.",
                )
            } else {
                RoleMatch::fits("Role type matches your experience.")
            }
        }
        _ => RoleMatch::fits("Role type matches your experience."),
    }
}

/// Multi-line warning for a mismatched role, `None` when the role fits.
pub fn mismatch_warning(role: &RoleClassification, assessment: &RoleMatch) -> Option<String> {
    if !assessment.should_apply {
        return None;
    }
    let mut lines = vec![
        "ROLE LEVEL MISMATCH".to_string(),
        String::new(),
        format!("Job Level: {}", role.level.to_string().to_uppercase()),
        format!("Job Type: {}", role.kind.to_string().to_uppercase()),
        format!("Focus Areas: {}", role.focus.join(", ")),
        String::new(),
        assessment.reason.clone(),
        String::new(),
        format!("Score Adjustment: -{}%", assessment.penalty),
    ];
    if !assessment.recommendation.is_empty() {
        lines.push(String::new());
        lines.push(assessment.recommendation.clone());
    }
    Some(lines.join("\n"))
}
