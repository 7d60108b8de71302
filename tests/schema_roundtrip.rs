use pretty_assertions::assert_eq;
use resumekit::{
    Education, Experience, PersonalInfo, ResumeData, ResumeError, Skills, StarterRegistry,
    parse_resume, to_json_pretty,
};
use serde_json::json;

fn full() -> ResumeData {
    StarterRegistry::get("sample").unwrap().build()
}

#[test]
fn minimal_instance_round_trips_unchanged() {
    let json = r#"{
        "personalInfo": {
            "fullName": "Jane Doe", "email": "", "phone": "",
            "location": "", "linkedin": "", "portfolio": ""
        },
        "summary": "",
        "experience": [],
        "education": [],
        "skills": { "technical": [], "languages": [], "certifications": [] }
    }"#;
    let resume = parse_resume(json).unwrap();
    assert_eq!(resume.personal_info.full_name, "Jane Doe");
    assert_eq!(resume, ResumeData::new(PersonalInfo::named("Jane Doe")));

    let again = parse_resume(&to_json_pretty(&resume).unwrap()).unwrap();
    assert_eq!(again, resume);
}

#[test]
fn full_instance_round_trips_with_order_preserved() {
    let mut resume = full();
    resume.skills = Skills {
        technical: vec!["Zig".into(), "Ada".into(), "Rust".into()],
        languages: vec!["Spanish".into(), "English".into()],
        certifications: vec!["CISA".into(), "CISSP".into()],
    };
    resume.experience.reverse();

    let back = parse_resume(&to_json_pretty(&resume).unwrap()).unwrap();
    assert_eq!(back, resume);
    let ids: Vec<&str> = back.experience.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "1"]);
    assert_eq!(back.skills.technical, vec!["Zig", "Ada", "Rust"]);
}

#[test]
fn optional_education_fields_are_independent() {
    let base = Education {
        id: "1".into(),
        degree: "BA".into(),
        major: "History".into(),
        university: "Oberlin".into(),
        graduation_year: "2010".into(),
        gpa: None,
        honors: None,
    };
    let variants = [
        (None, None),
        (Some("3.2".to_string()), None),
        (None, Some("Honors".to_string())),
        (Some("3.9".to_string()), Some("Summa".to_string())),
    ];
    for (gpa, honors) in variants {
        let mut resume = ResumeData::default();
        resume.education.push(Education {
            gpa: gpa.clone(),
            honors: honors.clone(),
            ..base.clone()
        });
        let back = parse_resume(&to_json_pretty(&resume).unwrap()).unwrap();
        assert_eq!(back.education[0].gpa, gpa);
        assert_eq!(back.education[0].honors, honors);
    }
}

#[test]
fn empty_sequences_are_valid() {
    let mut resume = ResumeData::default();
    resume.experience.push(Experience::blank("1"));
    assert!(resume.experience[0].achievements.is_empty());
    let back = parse_resume(&to_json_pretty(&resume).unwrap()).unwrap();
    assert_eq!(back, resume);
}

#[test]
fn duplicate_ids_are_accepted_by_the_shape() {
    let mut resume = ResumeData::default();
    resume.experience.push(Experience::blank("same"));
    resume.experience.push(Experience::blank("same"));
    let back = parse_resume(&to_json_pretty(&resume).unwrap()).unwrap();
    assert_eq!(back.experience.len(), 2);

    let report = resumekit::lint::lint(&back);
    assert_eq!(report.findings.len(), 1);
    assert_eq!(report.findings[0].rule, resumekit::Rule::DuplicateId);
}

#[test]
fn wrong_kind_is_reported_with_field_path() {
    let mut value = serde_json::to_value(full()).unwrap();
    value["experience"][1]["achievements"] = json!("not a list");
    let err = parse_resume(&value.to_string()).unwrap_err();
    match err {
        ResumeError::Malformed { path, reason } => {
            assert_eq!(path, "experience[1].achievements");
            assert_eq!(reason, "expected sequence, found text");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_field_error_message_names_the_path() {
    let mut value = serde_json::to_value(full()).unwrap();
    value["skills"].as_object_mut().unwrap().remove("certifications");
    let err = parse_resume(&value.to_string()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "malformed résumé data at 'skills.certifications': required sequence field is missing"
    );
}
