use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{ResumeError, Result};
use crate::schema::ResumeData;

const LIBRARY_VERSION: u8 = 1;

/// Upper bound on résumés kept in one library.
pub const MAX_RESUMES: usize = 5;

/// A résumé stored in a library file together with its bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredResume {
    pub id: String,
    pub name: String,
    pub saved_at: DateTime<Utc>,
    pub fingerprint: String,
    pub data: ResumeData,
}

/// Per-library metadata stored as the first record of the file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LibraryHeader {
    pub version: u8,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub selected: Option<String>,
    #[serde(default = "first_id")]
    pub next_id: u64,
    #[serde(default)]
    pub history: Vec<AuditEvent>,
}

fn first_id() -> u64 {
    1
}

impl LibraryHeader {
    pub fn new() -> Self {
        Self {
            version: LIBRARY_VERSION,
            created_at: Utc::now(),
            selected: None,
            next_id: first_id(),
            history: Vec::new(),
        }
    }
}

impl Default for LibraryHeader {
    fn default() -> Self {
        Self::new()
    }
}

/// Describes how the library has changed over time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuditEvent {
    pub timestamp: DateTime<Utc>,
    pub actor: String,
    pub action: String,
}

impl AuditEvent {
    /// Create an audit entry using the OS user (if available).
    pub fn new<S: Into<String>>(action: S) -> Self {
        let actor = std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .unwrap_or_else(|_| "unknown".to_string());
        Self {
            timestamp: Utc::now(),
            actor,
            action: action.into(),
        }
    }
}

/// SHA-256 over the compact JSON form of a résumé, as lowercase hex.
pub fn fingerprint(data: &ResumeData) -> Result<String> {
    let bytes = serde_json::to_vec(data)?;
    let digest = Sha256::digest(&bytes);
    Ok(format!("{digest:02x}"))
}

/// In-memory representation of a library file.
#[derive(Debug, Clone, Default)]
pub struct Library {
    pub header: LibraryHeader,
    entries: Vec<StoredResume>,
    pub path: Option<PathBuf>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self> {
        let file = OpenOptions::new().read(true).open(path)?;
        let reader = BufReader::new(file);

        let mut header: Option<LibraryHeader> = None;
        let mut entries: Vec<StoredResume> = Vec::new();
        let mut ids = HashSet::new();
        for (idx, raw) in reader.lines().enumerate() {
            let raw = raw?;
            let line_no = idx + 1;
            if raw.trim().is_empty() {
                continue;
            }
            match (parse_line(&raw, line_no)?, header.is_some()) {
                (LibraryLine::Header(found), false) => header = Some(found),
                (LibraryLine::Header(_), true) => {
                    return Err(ResumeError::LibraryFormat {
                        line: line_no,
                        reason: "multiple library headers".to_string(),
                    });
                }
                (LibraryLine::Entry(_), false) => {
                    return Err(ResumeError::LibraryFormat {
                        line: line_no,
                        reason: "expected library header before entries".to_string(),
                    });
                }
                (LibraryLine::Entry(entry), true) => {
                    if !ids.insert(entry.id.clone()) {
                        return Err(ResumeError::LibraryFormat {
                            line: line_no,
                            reason: format!("duplicate résumé id '{}'", entry.id),
                        });
                    }
                    if entries.len() >= MAX_RESUMES {
                        return Err(ResumeError::LibraryFormat {
                            line: line_no,
                            reason: format!("more than {MAX_RESUMES} résumés stored"),
                        });
                    }
                    entries.push(entry);
                }
            }
        }

        let mut header = header.ok_or_else(|| ResumeError::LibraryFormat {
            line: 1,
            reason: "file is empty".to_string(),
        })?;

        if let Some(selected) = header.selected.as_deref() {
            if !ids.contains(selected) {
                warn!(selected, "selected résumé not present in library; clearing selection");
                header.selected = None;
            }
        }

        debug!(path = %path.display(), entries = entries.len(), "loaded library");
        Ok(Self {
            header,
            entries,
            path: Some(path.to_path_buf()),
        })
    }

    pub fn save(&mut self, path: &Path) -> Result<()> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, &LibraryLineRef::Header(&self.header))?;
        writer.write_all(b"\n")?;
        for entry in &self.entries {
            serde_json::to_writer(&mut writer, &LibraryLineRef::Entry(entry))?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        self.path = Some(path.to_path_buf());
        info!(path = %path.display(), entries = self.entries.len(), "saved library");
        Ok(())
    }

    pub fn entries(&self) -> &[StoredResume] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&StoredResume> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// The currently selected résumé, if any.
    pub fn selected(&self) -> Option<&StoredResume> {
        self.header.selected.as_deref().and_then(|id| self.get(id))
    }

    /// Store a new résumé. The first résumé added becomes the selection.
    pub fn add<S: Into<String>>(&mut self, name: S, data: ResumeData) -> Result<&StoredResume> {
        if self.entries.len() >= MAX_RESUMES {
            return Err(ResumeError::LibraryFull { max: MAX_RESUMES });
        }
        let id = self.allocate_id();
        let name = name.into();
        let entry = StoredResume {
            id: id.clone(),
            name: name.clone(),
            saved_at: Utc::now(),
            fingerprint: fingerprint(&data)?,
            data,
        };
        self.entries.push(entry);
        if self.header.selected.is_none() {
            self.header.selected = Some(id.clone());
        }
        self.log_action(format!("add {id} ({name})"));
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Replace the data of a stored résumé, refreshing its timestamp and fingerprint.
    pub fn replace(&mut self, id: &str, data: ResumeData) -> Result<()> {
        let fp = fingerprint(&data)?;
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| ResumeError::UnknownResume(id.to_string()))?;
        if entry.fingerprint == fp {
            debug!(id, "replacement is identical; keeping stored copy");
            return Ok(());
        }
        entry.data = data;
        entry.fingerprint = fp;
        entry.saved_at = Utc::now();
        self.log_action(format!("replace {id}"));
        Ok(())
    }

    /// Remove a résumé. Removing the selection selects the first remaining entry.
    pub fn remove(&mut self, id: &str) -> Result<StoredResume> {
        let idx = self
            .position(id)
            .ok_or_else(|| ResumeError::UnknownResume(id.to_string()))?;
        let removed = self.entries.remove(idx);
        if self.header.selected.as_deref() == Some(id) {
            self.header.selected = self.entries.first().map(|e| e.id.clone());
        }
        self.log_action(format!("remove {id}"));
        Ok(removed)
    }

    pub fn select(&mut self, id: &str) -> Result<()> {
        if self.position(id).is_none() {
            return Err(ResumeError::UnknownResume(id.to_string()));
        }
        self.header.selected = Some(id.to_string());
        self.log_action(format!("select {id}"));
        Ok(())
    }

    /// Append an audit log entry.
    pub fn log_action<S: Into<String>>(&mut self, action: S) {
        self.header.history.push(AuditEvent::new(action));
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    fn allocate_id(&mut self) -> String {
        // skip ids taken by hand-edited files
        loop {
            let candidate = self.header.next_id.to_string();
            self.header.next_id += 1;
            if self.position(&candidate).is_none() {
                return candidate;
            }
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum LibraryLine {
    Header(LibraryHeader),
    Entry(StoredResume),
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum LibraryLineRef<'a> {
    Header(&'a LibraryHeader),
    Entry(&'a StoredResume),
}

fn parse_line(raw: &str, line: usize) -> Result<LibraryLine> {
    serde_json::from_str(raw).map_err(|e| ResumeError::LibraryFormat {
        line,
        reason: e.to_string(),
    })
}
