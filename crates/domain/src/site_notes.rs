use serde::{Deserialize, Serialize};

const MAX_TEXT_LEN: usize = 10_000;

pub const NOTE_COLORS: [&str; 6] = [
    "#fff9c4", "#ffccbc", "#c8e6c9", "#bbdefb", "#e1bee7", "#ffe0b2",
];

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NotePosition {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteNote {
    pub id: String,
    #[serde(default)]
    pub text: String,
    pub color: String,
    #[serde(default)]
    pub position: NotePosition,
    pub created_at: String,
    pub updated_at: String,
}

impl SiteNote {
    pub fn validate_text(text: &str) -> Result<(), String> {
        if text.chars().count() > MAX_TEXT_LEN {
            return Err(format!(
                "Note text cannot exceed {} characters",
                MAX_TEXT_LEN
            ));
        }
        Ok(())
    }

    pub fn validate_color(color: &str) -> Result<(), String> {
        if color.trim().is_empty() {
            return Err("Note color cannot be empty".to_string());
        }
        Ok(())
    }

    pub fn apply(&mut self, update: &SiteNoteUpdate, updated_at: String) {
        if let Some(ref text) = update.text {
            self.text = text.clone();
        }
        if let Some(ref color) = update.color {
            self.color = color.clone();
        }
        if let Some(position) = update.position {
            self.position = position;
        }
        self.updated_at = updated_at;
    }
}

/// Content for a new note; id and timestamps are assigned on creation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteNoteDraft {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub position: NotePosition,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteNoteUpdate {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub position: Option<NotePosition>,
}

impl SiteNoteUpdate {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(ref text) = self.text {
            SiteNote::validate_text(text)?;
        }
        if let Some(ref color) = self.color {
            SiteNote::validate_color(color)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainNotes {
    pub domain: String,
    #[serde(default)]
    pub notes: Vec<SiteNote>,
}

impl DomainNotes {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            notes: Vec::new(),
        }
    }

    pub fn find(&self, note_id: &str) -> Option<&SiteNote> {
        self.notes.iter().find(|n| n.id == note_id)
    }

    pub fn find_mut(&mut self, note_id: &str) -> Option<&mut SiteNote> {
        self.notes.iter_mut().find(|n| n.id == note_id)
    }

    /// `note-<millis>`, bumped until it is unique within this domain.
    pub fn next_note_id(&self, millis: i64) -> String {
        let mut candidate = millis;
        loop {
            let id = format!("note-{}", candidate);
            if self.find(&id).is_none() {
                return id;
            }
            candidate += 1;
        }
    }
}

pub fn pick_note_color(seed: i64) -> &'static str {
    NOTE_COLORS[seed.rem_euclid(NOTE_COLORS.len() as i64) as usize]
}
