//! Structural conformance of untyped JSON against the résumé shape.
//!
//! Serde stops at the first problem and does not say where it was. The
//! walker here reports every violation together with its field path so a
//! caller accepting external data can point at the offending field.

use std::fmt;

use serde_json::Value;
use tracing::debug;

use crate::error::{ResumeError, Result};
use crate::schema::ResumeData;

/// Value kinds the shape is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Object,
    Text,
    Boolean,
    Sequence,
    Number,
    Null,
}

impl ValueKind {
    fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Boolean,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::Text,
            Value::Array(_) => ValueKind::Sequence,
            Value::Object(_) => ValueKind::Object,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Object => write!(f, "object"),
            ValueKind::Text => write!(f, "text"),
            ValueKind::Boolean => write!(f, "boolean"),
            ValueKind::Sequence => write!(f, "sequence"),
            ValueKind::Number => write!(f, "number"),
            ValueKind::Null => write!(f, "null"),
        }
    }
}

/// What went wrong at a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationKind {
    Missing { expected: ValueKind },
    WrongKind { expected: ValueKind, found: ValueKind },
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::Missing { expected } => {
                write!(f, "required {} field is missing", expected)
            }
            ViolationKind::WrongKind { expected, found } => {
                write!(f, "expected {}, found {}", expected, found)
            }
        }
    }
}

/// A single structural failure, e.g. `experience[1].current: expected boolean, found text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub kind: ViolationKind,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)
    }
}

#[derive(Debug, Clone, Copy)]
enum Shape {
    Text,
    Boolean,
    TextList,
    OptionalText,
    Record(&'static [Field]),
    RecordList(&'static [Field]),
}

#[derive(Debug, Clone, Copy)]
struct Field {
    name: &'static str,
    shape: Shape,
}

macro_rules! field {
    ($name:expr, $shape:expr) => {
        Field {
            name: $name,
            shape: $shape,
        }
    };
}

static PERSONAL_INFO: &[Field] = &[
    field!("fullName", Shape::Text),
    field!("email", Shape::Text),
    field!("phone", Shape::Text),
    field!("location", Shape::Text),
    field!("linkedin", Shape::Text),
    field!("portfolio", Shape::Text),
];

static EXPERIENCE: &[Field] = &[
    field!("id", Shape::Text),
    field!("jobTitle", Shape::Text),
    field!("company", Shape::Text),
    field!("location", Shape::Text),
    field!("startDate", Shape::Text),
    field!("endDate", Shape::Text),
    field!("current", Shape::Boolean),
    field!("achievements", Shape::TextList),
];

static EDUCATION: &[Field] = &[
    field!("id", Shape::Text),
    field!("degree", Shape::Text),
    field!("major", Shape::Text),
    field!("university", Shape::Text),
    field!("graduationYear", Shape::Text),
    field!("gpa", Shape::OptionalText),
    field!("honors", Shape::OptionalText),
];

static SKILLS: &[Field] = &[
    field!("technical", Shape::TextList),
    field!("languages", Shape::TextList),
    field!("certifications", Shape::TextList),
];

static RESUME: &[Field] = &[
    field!("personalInfo", Shape::Record(PERSONAL_INFO)),
    field!("summary", Shape::Text),
    field!("experience", Shape::RecordList(EXPERIENCE)),
    field!("education", Shape::RecordList(EDUCATION)),
    field!("skills", Shape::Record(SKILLS)),
];

const ROOT: &str = "$";

/// Walk `value` against the `ResumeData` shape, returning every violation.
///
/// Unknown fields are tolerated. An empty result means the value conforms.
pub fn check(value: &Value) -> Vec<Violation> {
    let mut out = Vec::new();
    check_record(value, RESUME, ROOT, &mut out);
    out
}

/// Parse JSON text into a [`ResumeData`], reporting the first structural violation.
pub fn parse_resume(json: &str) -> Result<ResumeData> {
    let value: Value = serde_json::from_str(json)?;
    from_value(value)
}

/// Convert an already parsed value into a [`ResumeData`].
pub fn from_value(value: Value) -> Result<ResumeData> {
    let violations = check(&value);
    if let Some(first) = violations.first() {
        debug!(count = violations.len(), "résumé data failed conformance");
        return Err(ResumeError::Malformed {
            path: first.path.clone(),
            reason: first.kind.to_string(),
        });
    }
    Ok(serde_json::from_value(value)?)
}

/// Serialize a résumé as indented JSON.
pub fn to_json_pretty(resume: &ResumeData) -> Result<String> {
    Ok(serde_json::to_string_pretty(resume)?)
}

fn check_record(value: &Value, fields: &[Field], path: &str, out: &mut Vec<Violation>) {
    let Value::Object(map) = value else {
        out.push(wrong(path, ValueKind::Object, value));
        return;
    };
    for field in fields {
        let child = join(path, field.name);
        match map.get(field.name) {
            None => {
                if let Some(expected) = required_kind(field.shape) {
                    out.push(Violation {
                        path: child,
                        kind: ViolationKind::Missing { expected },
                    });
                }
            }
            Some(v) => check_shape(v, field.shape, &child, out),
        }
    }
}

fn check_shape(value: &Value, shape: Shape, path: &str, out: &mut Vec<Violation>) {
    match shape {
        Shape::Text => {
            if !value.is_string() {
                out.push(wrong(path, ValueKind::Text, value));
            }
        }
        Shape::OptionalText => {
            if !value.is_string() && !value.is_null() {
                out.push(wrong(path, ValueKind::Text, value));
            }
        }
        Shape::Boolean => {
            if !value.is_boolean() {
                out.push(wrong(path, ValueKind::Boolean, value));
            }
        }
        Shape::TextList => match value.as_array() {
            Some(items) => {
                for (idx, item) in items.iter().enumerate() {
                    if !item.is_string() {
                        out.push(wrong(&index(path, idx), ValueKind::Text, item));
                    }
                }
            }
            None => out.push(wrong(path, ValueKind::Sequence, value)),
        },
        Shape::Record(fields) => check_record(value, fields, path, out),
        Shape::RecordList(fields) => match value.as_array() {
            Some(items) => {
                for (idx, item) in items.iter().enumerate() {
                    check_record(item, fields, &index(path, idx), out);
                }
            }
            None => out.push(wrong(path, ValueKind::Sequence, value)),
        },
    }
}

fn required_kind(shape: Shape) -> Option<ValueKind> {
    match shape {
        Shape::OptionalText => None,
        Shape::Text => Some(ValueKind::Text),
        Shape::Boolean => Some(ValueKind::Boolean),
        Shape::TextList | Shape::RecordList(_) => Some(ValueKind::Sequence),
        Shape::Record(_) => Some(ValueKind::Object),
    }
}

fn wrong(path: &str, expected: ValueKind, found: &Value) -> Violation {
    Violation {
        path: path.to_string(),
        kind: ViolationKind::WrongKind {
            expected,
            found: ValueKind::of(found),
        },
    }
}

fn join(parent: &str, name: &str) -> String {
    if parent == ROOT {
        name.to_string()
    } else {
        format!("{parent}.{name}")
    }
}

fn index(parent: &str, idx: usize) -> String {
    format!("{parent}[{idx}]")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal() -> Value {
        json!({
            "personalInfo": {
                "fullName": "Jane Doe", "email": "", "phone": "",
                "location": "", "linkedin": "", "portfolio": ""
            },
            "summary": "",
            "experience": [],
            "education": [],
            "skills": { "technical": [], "languages": [], "certifications": [] }
        })
    }

    #[test]
    fn test_minimal_conforms() {
        assert!(check(&minimal()).is_empty());
    }

    #[test]
    fn test_root_must_be_object() {
        let v = check(&json!([1, 2]));
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].path, "$");
        assert_eq!(
            v[0].kind,
            ViolationKind::WrongKind {
                expected: ValueKind::Object,
                found: ValueKind::Sequence
            }
        );
    }

    #[test]
    fn test_missing_nested_field_has_path() {
        let mut value = minimal();
        value["personalInfo"].as_object_mut().unwrap().remove("email");
        let v = check(&value);
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].path, "personalInfo.email");
        assert_eq!(
            v[0].kind,
            ViolationKind::Missing {
                expected: ValueKind::Text
            }
        );
    }

    #[test]
    fn test_reports_every_violation() {
        let mut value = minimal();
        value["summary"] = json!(3);
        value["experience"] = json!([{
            "id": "1", "jobTitle": "Dev", "company": "Acme", "location": "",
            "startDate": "2020", "endDate": "", "current": "yes",
            "achievements": ["ok", 7]
        }]);
        value["skills"]["languages"] = json!("English");
        let paths: Vec<String> = check(&value).into_iter().map(|v| v.path).collect();
        assert_eq!(
            paths,
            vec![
                "summary",
                "experience[0].current",
                "experience[0].achievements[1]",
                "skills.languages",
            ]
        );
    }

    #[test]
    fn test_optional_fields_accept_absent_null_and_text() {
        let mut value = minimal();
        value["education"] = json!([
            { "id": "a", "degree": "", "major": "", "university": "", "graduationYear": "" },
            { "id": "b", "degree": "", "major": "", "university": "", "graduationYear": "",
              "gpa": null, "honors": "cum laude" },
            { "id": "c", "degree": "", "major": "", "university": "", "graduationYear": "",
              "gpa": 3.9 }
        ]);
        let v = check(&value);
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].path, "education[2].gpa");
    }

    #[test]
    fn test_unknown_fields_tolerated() {
        let mut value = minimal();
        value["theme"] = json!("dark");
        assert!(check(&value).is_empty());
    }

    #[test]
    fn test_parse_resume_reports_first_path() {
        let mut value = minimal();
        value["skills"] = json!(null);
        let err = from_value(value).unwrap_err();
        match err {
            ResumeError::Malformed { path, .. } => assert_eq!(path, "skills"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_resume_rejects_bad_json() {
        assert!(matches!(parse_resume("{"), Err(ResumeError::Json(_))));
    }

    #[test]
    fn test_violation_display() {
        let v = Violation {
            path: "experience[0].current".into(),
            kind: ViolationKind::WrongKind {
                expected: ValueKind::Boolean,
                found: ValueKind::Text,
            },
        };
        assert_eq!(v.to_string(), "experience[0].current: expected boolean, found text");
    }
}
