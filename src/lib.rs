//! Résumé data schema plus the tooling around it: conformance checks at the
//! JSON boundary, convention lints, ATS scoring, rendering and a small
//! multi-résumé library file.

pub mod ats;
pub mod checklist;
pub mod config;
pub mod conform;
mod error;
pub mod library;
pub mod lint;
pub mod render;
pub mod role;
mod schema;
mod starters;

pub use config::Config;
pub use conform::{Violation, ViolationKind, parse_resume, to_json_pretty};
pub use error::{Result, ResumeError};
pub use library::{AuditEvent, Library, MAX_RESUMES, StoredResume, fingerprint};
pub use lint::{Finding, LintReport, Rule, Severity};
pub use render::{RenderFormat, render};
pub use role::{RoleClassification, RoleLevel, RoleMatch, RoleType};
pub use schema::{Education, Experience, PersonalInfo, ResumeData, Skills};
pub use starters::{Starter, StarterRegistry};
