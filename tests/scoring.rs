use resumekit::ats;
use resumekit::checklist;
use resumekit::{RenderFormat, ResumeData, StarterRegistry, render};

#[test]
fn sample_resume_scores_against_matching_job() {
    let resume = StarterRegistry::get("sample").unwrap().build();
    let job = "We need an ISSO to lead FedRAMP and NIST 800-53 continuous monitoring on AWS.";

    let text = render(&resume, RenderFormat::Text);
    let matched = ats::smart_match(job, &text, ats::DEFAULT_KEYWORDS);
    assert_eq!(matched.match_score, 100);
    assert!(matched.missing.is_empty());

    let v = ats::validate_resume(&resume, job);
    assert_eq!(v.score, 100);
    assert_eq!(v.section_score, 100.0);
    assert_eq!(v.formatting_score, 100);
    assert!(v.comparison.estimated_ats_score <= 100);
}

#[test]
fn empty_resume_gets_low_estimate() {
    let resume = ResumeData::default();
    let v = ats::validate_resume(&resume, "Seeking a CISSP with SOC 2 experience");
    assert_eq!(v.score, 0);
    assert!(!v.issues.is_empty());
    assert_eq!(v.benchmark().rating, "Needs Improvement");
    let report = v.report();
    assert!(report.contains("ISSUES FOUND:"));
    assert!(report.contains("RECOMMENDATIONS:"));
}

#[test]
fn checklist_and_render_agree_on_sample() {
    let resume = StarterRegistry::get("sample").unwrap().build();
    assert!(checklist::evaluate(&resume).is_perfect());
    let md = render(&resume, RenderFormat::Markdown);
    assert!(md.contains("Mar 2021 - Present"));
    assert!(md.contains("GPA: 3.7 | Magna Cum Laude"));
}

#[test]
fn director_posting_lowers_sample_score_and_suggests_additions() {
    let resume = StarterRegistry::get("sample").unwrap().build();
    let job = "Director of Security Compliance\n\
               Own the ATO process plus SOC 2 and ISO 27001 programs.";

    let screening = ats::screen(&resume, job);
    assert_eq!(screening.job_title, "Director of Security Compliance");
    assert_eq!(screening.role.level, resumekit::RoleLevel::Director);
    assert!(screening.role_match.should_apply);
    assert_eq!(
        screening.validation.score,
        screening.matched.match_score.saturating_sub(30)
    );
    assert_eq!(
        ats::validate_resume(&resume, job).score,
        screening.validation.score
    );

    let categories: Vec<&str> = screening.enhancements.iter().map(|e| e.category).collect();
    assert_eq!(categories, vec!["authorization", "framework"]);
    assert!(screening.enhancements[1].bullets[0].starts_with("Applied ISO 27001, SOC 2 requirements"));
}
