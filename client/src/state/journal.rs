//! Journal entries and the editor selection.
//!
//! Entries are in-memory only and reset on reload.

#[cfg(test)]
#[path = "journal_test.rs"]
mod journal_test;

/// Self-reported mood attached to an entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoodLevel {
    Low,
    Okay,
    Good,
    Great,
}

impl MoodLevel {
    pub const ALL: [Self; 4] = [Self::Low, Self::Okay, Self::Good, Self::Great];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Okay => "Okay",
            Self::Good => "Good",
            Self::Great => "Great",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JournalEntry {
    pub id: String,
    pub title: String,
    pub content: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    pub mood: Option<MoodLevel>,
    pub tags: Vec<String>,
}

/// Entry list, newest first, plus the entry open in the editor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JournalState {
    pub entries: Vec<JournalEntry>,
    pub active_id: Option<String>,
    next_seq: u64,
}

impl Default for JournalState {
    fn default() -> Self {
        Self {
            entries: vec![
                JournalEntry {
                    id: "1".to_owned(),
                    title: "Today was challenging".to_owned(),
                    content: "I had a difficult meeting at work, but I practiced deep breathing and got through it."
                        .to_owned(),
                    date: "2023-08-15".to_owned(),
                    mood: Some(MoodLevel::Okay),
                    tags: vec!["work".to_owned(), "breathing".to_owned()],
                },
                JournalEntry {
                    id: "2".to_owned(),
                    title: "Progress with meditation".to_owned(),
                    content: "I've been meditating for a week now, and I'm starting to feel more centered throughout the day."
                        .to_owned(),
                    date: "2023-08-12".to_owned(),
                    mood: Some(MoodLevel::Good),
                    tags: vec!["meditation".to_owned()],
                },
            ],
            active_id: None,
            next_seq: 0,
        }
    }
}

impl JournalState {
    #[must_use]
    pub fn active(&self) -> Option<&JournalEntry> {
        let id = self.active_id.as_deref()?;
        self.entries.iter().find(|e| e.id == id)
    }

    /// Insert a blank entry dated `date` at the top and open it.
    ///
    /// `stamp` seeds the id; a sequence suffix keeps ids unique when two
    /// entries share a stamp.
    pub fn create(&mut self, date: &str, stamp: u64) -> &JournalEntry {
        self.next_seq += 1;
        let id = format!("entry-{stamp}-{}", self.next_seq);
        self.entries.insert(
            0,
            JournalEntry {
                id: id.clone(),
                title: "New Entry".to_owned(),
                content: String::new(),
                date: date.to_owned(),
                mood: None,
                tags: Vec::new(),
            },
        );
        self.active_id = Some(id);
        &self.entries[0]
    }

    /// Open `id` in the editor. Unknown ids are ignored.
    pub fn select(&mut self, id: &str) -> bool {
        if self.entries.iter().any(|e| e.id == id) {
            self.active_id = Some(id.to_owned());
            true
        } else {
            false
        }
    }

    /// Write the editor fields back to the active entry.
    ///
    /// Returns `false` when no entry is open.
    pub fn save_active(&mut self, title: &str, content: &str, mood: Option<MoodLevel>) -> bool {
        let Some(id) = self.active_id.clone() else {
            return false;
        };
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.title = title.to_owned();
                entry.content = content.to_owned();
                entry.mood = mood;
                true
            }
            None => false,
        }
    }

    /// Remove `id`, closing the editor if it was open.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.active_id.as_deref() == Some(id) {
            self.active_id = None;
        }
        self.entries.len() != before
    }
}
