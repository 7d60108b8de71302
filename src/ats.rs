//! Text-level ATS validation of a résumé against a job description.
//!
//! Scores mirror what commercial applicant tracking tools weigh: keyword
//! match, keyword density, readability grade, formatting and the presence of
//! standard sections. Everything here works on plain text so it applies to
//! any rendering of a résumé.

use std::collections::HashSet;
use std::fmt::{self, Write as _};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::render::{RenderFormat, render};
use crate::role::{
    RoleClassification, RoleMatch, assess_role_match, classify_role, extract_job_title,
};
use crate::schema::ResumeData;

const DENSITY_MIN: f64 = 2.0;
const DENSITY_MAX: f64 = 4.0;
const DENSITY_CAP: f64 = 10.0;
const CRITICAL_WEIGHT: u32 = 4;

const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "with", "this", "that", "from", "will", "your", "our", "are", "have",
    "has",
];

/// A keyword and the alternative spellings that count as the same hit.
#[derive(Debug, Clone, Copy)]
pub struct KeywordGroup {
    pub primary: &'static str,
    pub synonyms: &'static [&'static str],
    /// 1..=5, 5 being most important.
    pub weight: u32,
    pub category: &'static str,
}

impl KeywordGroup {
    fn terms(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.primary).chain(self.synonyms.iter().copied())
    }

    fn occurs_in(&self, lowered: &str) -> bool {
        self.terms().any(|t| lowered.contains(t))
    }
}

macro_rules! kw {
    ($primary:expr, [$($syn:expr),* $(,)?], $weight:expr, $category:expr) => {
        KeywordGroup {
            primary: $primary,
            synonyms: &[$($syn),*],
            weight: $weight,
            category: $category,
        }
    };
}

/// Built-in governance, risk and compliance keyword groups.
pub static DEFAULT_KEYWORDS: &[KeywordGroup] = &[
    kw!("fedramp", ["fed ramp", "federal risk and authorization management program"], 5, "framework"),
    kw!("ato", ["authorization to operate", "authority to operate", "ato process"], 5, "authorization"),
    kw!("poam", ["poa&m", "plan of action and milestones", "plan of actions and milestones", "poams"], 5, "documentation"),
    kw!("ssp", ["system security plan", "system security plans", "ssps"], 5, "documentation"),
    kw!("rmf", ["risk management framework", "nist rmf", "rmf process"], 5, "framework"),
    kw!("fisma", ["federal information security management act", "fisma compliance"], 5, "framework"),
    kw!("nist 800-53", ["nist sp 800-53", "800-53", "nist 80053", "sp 800-53"], 5, "standard"),
    kw!("nist 800-37", ["nist sp 800-37", "800-37", "nist 80037", "sp 800-37"], 4, "standard"),
    kw!("nist 800-171", ["nist sp 800-171", "800-171", "nist 80171", "sp 800-171"], 4, "standard"),
    kw!("isso", ["information system security officer", "information systems security officer", "issos"], 4, "role"),
    kw!("issm", ["information system security manager", "information systems security manager"], 3, "role"),
    kw!("continuous monitoring", ["conmon", "ongoing monitoring", "continuous assessment"], 4, "process"),
    kw!("security assessment", ["security assessments", "sar", "security assessment report", "control assessment"], 4, "process"),
    kw!("risk assessment", ["risk assessments", "security risk assessment", "risk analysis"], 4, "process"),
    kw!("vulnerability management", ["vuln management", "vulnerability scanning", "vulnerability assessment"], 4, "process"),
    kw!("iso 27001", ["iso27001", "iso 27001:2013", "iso 27001:2022"], 3, "framework"),
    kw!("soc 2", ["soc2", "soc ii", "soc 2 type 2", "soc 2 type ii"], 3, "framework"),
    kw!("pci dss", ["pci-dss", "pci", "payment card industry"], 3, "framework"),
    kw!("servicenow", ["service now", "servicenow grc"], 2, "tool"),
    kw!("jira", ["atlassian jira", "jira software"], 2, "tool"),
    kw!("aws", ["amazon web services", "aws cloud"], 3, "cloud"),
    kw!("azure", ["microsoft azure", "azure cloud"], 3, "cloud"),
    kw!("cissp", ["certified information systems security professional"], 4, "certification"),
    kw!("cism", ["certified information security manager"], 4, "certification"),
    kw!("cisa", ["certified information systems auditor"], 3, "certification"),
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeywordDetail {
    pub keyword: String,
    pub found: bool,
    pub weight: u32,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    /// 0..=100, weighted share of relevant keyword groups found in the résumé.
    pub match_score: u32,
    pub found: Vec<String>,
    pub missing: Vec<String>,
    pub critical_missing: Vec<String>,
    pub details: Vec<KeywordDetail>,
}

/// Weighted keyword match. Only groups mentioned by the job description count.
pub fn smart_match(job_description: &str, resume: &str, groups: &[KeywordGroup]) -> MatchResult {
    let jd = job_description.to_lowercase();
    let resume = resume.to_lowercase();

    let mut details = Vec::new();
    let mut total_weight = 0u32;
    let mut matched_weight = 0u32;

    for group in groups {
        if !group.occurs_in(&jd) {
            continue;
        }
        total_weight += group.weight;
        let found = group.occurs_in(&resume);
        if found {
            matched_weight += group.weight;
        }
        details.push(KeywordDetail {
            keyword: group.primary.to_string(),
            found,
            weight: group.weight,
            category: group.category.to_string(),
        });
    }

    let match_score = if total_weight > 0 {
        (f64::from(matched_weight) / f64::from(total_weight) * 100.0).round() as u32
    } else {
        0
    };

    let pick = |pred: &dyn Fn(&KeywordDetail) -> bool| -> Vec<String> {
        details
            .iter()
            .filter(|d| pred(*d))
            .map(|d| d.keyword.clone())
            .collect()
    };
    let found = pick(&|d| d.found);
    let missing = pick(&|d| !d.found);
    let critical_missing = pick(&|d| !d.found && d.weight >= CRITICAL_WEIGHT);

    MatchResult {
        match_score,
        found,
        missing,
        critical_missing,
        details,
    }
}

/// Percentage of résumé words (longer than 3 characters) that are job keywords, capped at 10.
pub fn keyword_density(resume: &str, job_description: &str) -> f64 {
    let resume = resume.to_lowercase();
    let jd = job_description.to_lowercase();

    let resume_words: Vec<&str> = long_words(&resume).collect();
    if resume_words.is_empty() {
        return 0.0;
    }
    let keywords: HashSet<&str> = long_words(&jd)
        .filter(|w| !STOP_WORDS.contains(w))
        .collect();

    let hits = resume_words.iter().filter(|w| keywords.contains(*w)).count();
    let density = hits as f64 / resume_words.len() as f64 * 100.0;
    density.min(DENSITY_CAP)
}

fn long_words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace().filter(|w| w.chars().count() > 3)
}

/// Flesch-Kincaid grade level, clamped to 0..=20.
pub fn readability(text: &str) -> f64 {
    let sentences = text
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count();
    let words: Vec<&str> = text.split_whitespace().collect();
    if sentences == 0 || words.is_empty() {
        return 10.0;
    }
    let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();

    let words_per_sentence = words.len() as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words.len() as f64;
    let grade = 0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59;
    grade.clamp(0.0, 20.0)
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

fn is_soft(c: char) -> bool {
    c == 'l' || is_vowel(c)
}

/// Heuristic syllable count for an English word.
pub fn count_syllables(word: &str) -> usize {
    let mut chars: Vec<char> = word.to_lowercase().chars().collect();
    if chars.len() <= 3 {
        return 1;
    }

    // silent endings: consonant+es, ed, consonant+e
    let n = chars.len();
    if chars.ends_with(&['e', 's']) && !is_soft(chars[n - 3]) {
        chars.truncate(n - 3);
    } else if chars.ends_with(&['e', 'd']) {
        chars.truncate(n - 2);
    } else if chars.ends_with(&['e']) && !is_soft(chars[n - 2]) {
        chars.truncate(n - 2);
    }
    if chars.first() == Some(&'y') {
        chars.remove(0);
    }

    let mut count: usize = 0;
    let mut run: usize = 0;
    for c in chars {
        if is_vowel(c) {
            run += 1;
        } else {
            count += run.div_ceil(2);
            run = 0;
        }
    }
    count += run.div_ceil(2);
    count.max(1)
}

fn mentions_any(lowered: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| lowered.contains(n))
}

const EXPERIENCE_TERMS: &[&str] = &["experience", "employment", "work history"];
const EDUCATION_TERMS: &[&str] = &["education", "academic"];
const SKILL_HEADINGS: &[&str] = &["skills", "competencies", "expertise", "tools", "platforms"];
const SKILL_TERMS: &[&str] = &["skills", "competencies", "expertise"];
const CERTIFICATION_TERMS: &[&str] = &["certification", "license"];
const TABLE_GLYPHS: &[char] = &['│', '┤', '├'];

/// ATS friendliness of the text layout, 0..=100.
pub fn formatting_score(text: &str) -> u32 {
    let mut score: i32 = 100;
    if text.contains(TABLE_GLYPHS) {
        score -= 20;
    }
    if text.chars().filter(|c| !c.is_ascii()).count() > 10 {
        score -= 10;
    }
    let lowered = text.to_lowercase();
    if !mentions_any(&lowered, EXPERIENCE_TERMS) {
        score -= 20;
    }
    if !mentions_any(&lowered, EDUCATION_TERMS) {
        score -= 15;
    }
    if !mentions_any(&lowered, SKILL_HEADINGS) {
        score -= 15;
    }
    score.max(0) as u32
}

/// Share of the four required sections present in the text, 0..=100.
pub fn section_score(text: &str) -> f64 {
    let lowered = text.to_lowercase();
    let required = [EXPERIENCE_TERMS, EDUCATION_TERMS, SKILL_TERMS, CERTIFICATION_TERMS];
    let found = required
        .iter()
        .filter(|terms| mentions_any(&lowered, terms))
        .count();
    found as f64 / required.len() as f64 * 100.0
}

/// Weighted estimate of what commercial ATS tools would score, 0..=100.
pub fn estimate_industry_score(
    match_score: u32,
    keyword_density: f64,
    readability: f64,
    formatting_score: u32,
    section_score: f64,
) -> u32 {
    let density_score = if (DENSITY_MIN..=DENSITY_MAX).contains(&keyword_density) {
        100.0
    } else if keyword_density < DENSITY_MIN {
        keyword_density / DENSITY_MIN * 100.0
    } else {
        (100.0 - (keyword_density - DENSITY_MAX) * 20.0).max(0.0)
    };
    let readability_score = if (10.0..=12.0).contains(&readability) {
        100.0
    } else {
        (100.0 - (11.0 - readability).abs() * 10.0).max(0.0)
    };

    let weighted = f64::from(match_score) * 0.50
        + density_score * 0.20
        + f64::from(formatting_score) * 0.15
        + section_score * 0.10
        + readability_score * 0.05;
    weighted.round() as u32
}

/// Confidence that `ours` agrees with the industry estimate.
pub fn confidence(ours: u32, estimate: u32) -> u32 {
    match ours.abs_diff(estimate) {
        0..=5 => 95,
        6..=10 => 85,
        11..=15 => 75,
        16..=20 => 65,
        _ => 50,
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Benchmark {
    pub rating: &'static str,
    pub likelihood: &'static str,
    pub description: &'static str,
}

pub fn benchmark(score: u32) -> Benchmark {
    match score {
        90.. => Benchmark {
            rating: "Excellent",
            likelihood: "80-90% chance of passing ATS",
            description: "Your resume is highly optimized for ATS systems. You should get through most automated screenings.",
        },
        80..=89 => Benchmark {
            rating: "Very Good",
            likelihood: "70-80% chance of passing ATS",
            description: "Your resume is well-optimized. Minor improvements could increase your chances.",
        },
        70..=79 => Benchmark {
            rating: "Good",
            likelihood: "60-70% chance of passing ATS",
            description: "Your resume should pass most ATS systems, but there's room for improvement.",
        },
        60..=69 => Benchmark {
            rating: "Fair",
            likelihood: "40-60% chance of passing ATS",
            description: "Your resume may struggle with some ATS systems. Consider adding more relevant keywords.",
        },
        _ => Benchmark {
            rating: "Needs Improvement",
            likelihood: "20-40% chance of passing ATS",
            description: "Your resume needs significant optimization to pass ATS screening.",
        },
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndustryComparison {
    pub our_score: u32,
    pub estimated_ats_score: u32,
    pub confidence: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsValidation {
    pub score: u32,
    pub keyword_density: f64,
    pub readability: f64,
    pub formatting_score: u32,
    pub section_score: f64,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
    pub comparison: IndustryComparison,
}

/// Validate résumé text against a job description given an existing keyword match score.
pub fn validate(resume_text: &str, job_description: &str, match_score: u32) -> AtsValidation {
    let mut issues = Vec::new();
    let mut recommendations = Vec::new();

    let density = keyword_density(resume_text, job_description);
    if density < DENSITY_MIN {
        issues.push(format!(
            "Keyword density too low ({density:.1}%). ATS may rank you lower."
        ));
        recommendations.push(
            "Add more relevant keywords from the job description naturally throughout your resume."
                .to_string(),
        );
    } else if density > DENSITY_MAX {
        issues.push(format!(
            "Keyword density too high ({density:.1}%). May appear as keyword stuffing."
        ));
        recommendations.push(
            "Reduce keyword repetition. Focus on natural language and varied terminology."
                .to_string(),
        );
    }

    let grade = readability(resume_text);
    if grade < 8.0 {
        issues.push("Resume may be too complex for ATS parsing.".to_string());
        recommendations.push("Use simpler sentence structures and clearer language.".to_string());
    } else if grade > 14.0 {
        issues.push("Resume may be too simple. Add more technical depth.".to_string());
        recommendations
            .push("Include more specific technical terms and accomplishments.".to_string());
    }

    let formatting = formatting_score(resume_text);
    if formatting < 80 {
        issues.push("Resume may have ATS-unfriendly formatting.".to_string());
        recommendations.push(
            "Use standard section headings, avoid tables/columns, use simple bullet points."
                .to_string(),
        );
    }

    let sections = section_score(resume_text);
    if sections < 100.0 {
        issues.push("Missing critical resume sections that ATS looks for.".to_string());
        recommendations.push(
            "Ensure you have: Work Experience, Education, Skills, and Certifications sections."
                .to_string(),
        );
    }

    let estimated = estimate_industry_score(match_score, density, grade, formatting, sections);

    AtsValidation {
        score: match_score,
        keyword_density: density,
        readability: grade,
        formatting_score: formatting,
        section_score: sections,
        issues,
        recommendations,
        comparison: IndustryComparison {
            our_score: match_score,
            estimated_ats_score: estimated,
            confidence: confidence(match_score, estimated),
        },
    }
}

/// Suggested bullet points covering one category of missing keywords.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Enhancement {
    pub category: &'static str,
    pub heading: &'static str,
    pub bullets: Vec<String>,
}

impl fmt::Display for Enhancement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.heading)?;
        for bullet in &self.bullets {
            writeln!(f, "• {bullet}")?;
        }
        Ok(())
    }
}

fn enhancement(category: &'static str, heading: &'static str, bullets: &[&str]) -> Enhancement {
    Enhancement {
        category,
        heading,
        bullets: bullets.iter().map(|b| b.to_string()).collect(),
    }
}

/// Targeted enhancement blocks for missing keywords, one per category that
/// has a template. `missing` holds primary keywords as reported by [`smart_match`].
pub fn enhancements(missing: &[String], groups: &[KeywordGroup]) -> Vec<Enhancement> {
    let missing_in = |category: &str| -> Vec<&'static str> {
        groups
            .iter()
            .filter(|g| g.category == category && missing.iter().any(|m| m == g.primary))
            .map(|g| g.primary)
            .collect()
    };

    let mut out = Vec::new();
    if !missing_in("authorization").is_empty() {
        out.push(enhancement(
            "authorization",
            "AUTHORIZATION & COMPLIANCE EXPERIENCE",
            &[
                "Led FedRAMP Authorization to Operate (ATO) activities ensuring compliance with NIST 800-53 controls",
                "Managed authorization packages and continuous monitoring requirements for federal systems",
                "Coordinated with agency ISSOs and security teams to maintain authorization posture",
            ],
        ));
    }
    if !missing_in("documentation").is_empty() {
        out.push(enhancement(
            "documentation",
            "SECURITY DOCUMENTATION EXPERTISE",
            &[
                "Developed and maintained System Security Plans (SSPs), POA&Ms, and Security Assessment Reports (SARs)",
                "Created comprehensive security documentation aligned with NIST SP 800-37 RMF guidelines",
                "Managed artifact lifecycle from initial development through continuous updates",
            ],
        ));
    }
    let frameworks = missing_in("framework");
    if !frameworks.is_empty() {
        let names = frameworks
            .iter()
            .map(|f| f.to_uppercase())
            .collect::<Vec<_>>()
            .join(", ");
        let mut block = enhancement(
            "framework",
            "FRAMEWORK IMPLEMENTATION",
            &[
                "Performed gap assessments and control mapping across multiple compliance frameworks",
                "Supported audit preparation and evidence collection for framework compliance",
            ],
        );
        block.bullets.insert(
            0,
            format!("Applied {names} requirements to security control implementation and validation"),
        );
        out.push(block);
    }
    if !missing_in("process").is_empty() {
        out.push(enhancement(
            "process",
            "SECURITY ASSESSMENT & MONITORING",
            &[
                "Conducted comprehensive security assessments and risk analyses for federal systems",
                "Implemented continuous monitoring programs tracking control effectiveness and compliance posture",
                "Performed vulnerability assessments and coordinated remediation activities",
            ],
        ));
    }
    out
}

/// Everything `resume ats validate` reports for one résumé and job.
#[derive(Debug, Clone, Serialize)]
pub struct Screening {
    pub job_title: String,
    pub matched: MatchResult,
    pub role: RoleClassification,
    pub role_match: RoleMatch,
    pub validation: AtsValidation,
    pub enhancements: Vec<Enhancement>,
}

/// Match, classify the role, apply any role penalty, then validate.
pub fn screen_text(resume_text: &str, job_description: &str) -> Screening {
    let matched = smart_match(job_description, resume_text, DEFAULT_KEYWORDS);
    let job_title = extract_job_title(job_description);
    let role = classify_role(&job_title, job_description);
    let role_match = assess_role_match(&role, resume_text);
    let adjusted = role_match.adjust(matched.match_score);
    if role_match.should_apply {
        debug!(
            raw = matched.match_score,
            adjusted,
            level = %role.level,
            "role mismatch penalty applied"
        );
    }
    let validation = validate(resume_text, job_description, adjusted);
    let enhancements = enhancements(&matched.missing, DEFAULT_KEYWORDS);
    Screening {
        job_title,
        matched,
        role,
        role_match,
        validation,
        enhancements,
    }
}

/// Render a structured résumé to text and screen it against `job_description`.
pub fn screen(resume: &ResumeData, job_description: &str) -> Screening {
    screen_text(&render(resume, RenderFormat::Text), job_description)
}

/// Validation of a structured résumé, with the role penalty already applied to its score.
pub fn validate_resume(resume: &ResumeData, job_description: &str) -> AtsValidation {
    screen(resume, job_description).validation
}

impl AtsValidation {
    pub fn benchmark(&self) -> Benchmark {
        benchmark(self.comparison.estimated_ats_score)
    }

    /// Plain-text report suitable for a terminal.
    pub fn report(&self) -> String {
        let bench = self.benchmark();
        let cmp = &self.comparison;
        let mut out = String::new();
        writeln!(&mut out, "ATS VALIDATION REPORT").ok();
        writeln!(&mut out, "=====================").ok();
        writeln!(&mut out).ok();
        writeln!(&mut out, "Overall ATS Score: {}/100", cmp.estimated_ats_score).ok();
        writeln!(&mut out, "Rating: {}", bench.rating).ok();
        writeln!(&mut out, "{}", bench.likelihood).ok();
        writeln!(&mut out).ok();
        writeln!(&mut out, "DETAILED BREAKDOWN:").ok();
        writeln!(&mut out, "------------------").ok();
        writeln!(&mut out, "Keyword Match: {}%", self.score).ok();
        writeln!(
            &mut out,
            "Keyword Density: {:.1}% (Optimal: 2-4%)",
            self.keyword_density
        )
        .ok();
        writeln!(
            &mut out,
            "Readability: Grade {:.1} (Optimal: 10-12)",
            self.readability
        )
        .ok();
        writeln!(&mut out, "Formatting: {}/100", self.formatting_score).ok();
        writeln!(&mut out, "Sections: {:.0}/100", self.section_score).ok();
        writeln!(&mut out).ok();
        writeln!(&mut out, "CONFIDENCE: {}%", cmp.confidence).ok();
        writeln!(
            &mut out,
            "Our algorithm estimates {}% confidence that this score matches what industry ATS tools would give.",
            cmp.confidence
        )
        .ok();
        writeln!(&mut out).ok();
        if self.issues.is_empty() {
            writeln!(&mut out, "No major issues found.").ok();
        } else {
            writeln!(&mut out, "ISSUES FOUND:").ok();
            for (i, issue) in self.issues.iter().enumerate() {
                writeln!(&mut out, "{}. {}", i + 1, issue).ok();
            }
        }
        if !self.recommendations.is_empty() {
            writeln!(&mut out).ok();
            writeln!(&mut out, "RECOMMENDATIONS:").ok();
            for (i, rec) in self.recommendations.iter().enumerate() {
                writeln!(&mut out, "{}. {}", i + 1, rec).ok();
            }
        }
        writeln!(&mut out).ok();
        writeln!(&mut out, "INDUSTRY COMPARISON:").ok();
        writeln!(&mut out, "-------------------").ok();
        writeln!(
            &mut out,
            "Based on research of Jobscan, Resume Worded, Taleo, and Workday ATS systems:"
        )
        .ok();
        writeln!(
            &mut out,
            "- Your resume would likely score {}% on these platforms",
            cmp.estimated_ats_score
        )
        .ok();
        writeln!(&mut out, "- {}", bench.description).ok();
        writeln!(&mut out).ok();
        out.push_str(HOW_WE_COMPARE);
        out
    }
}

const HOW_WE_COMPARE: &str = "\
HOW WE COMPARE TO INDUSTRY TOOLS:
---------------------------------
Jobscan: Focuses heavily on keyword matching (50% weight)
Resume Worded: Emphasizes formatting and sections (30% weight)
Taleo/Workday: Balanced approach with keyword density checks (20% weight)

Our algorithm: Uses weighted scoring similar to industry leaders, with added
intelligence for synonym detection and context-aware matching.
";
