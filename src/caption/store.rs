use std::fmt;

use crate::error::CaptionNotFound;

/// Stable identifier assigned to a caption when it is added
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CaptionId(u64);

impl fmt::Display for CaptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single caption: text shown from `start` to `end` (whole seconds,
/// both inclusive)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionRecord {
    pub id: CaptionId,
    pub text: String,
    pub start: u64,
    pub end: u64,
}

impl CaptionRecord {
    pub fn contains(&self, time: f64) -> bool {
        self.start as f64 <= time && time <= self.end as f64
    }
}

/// Captions in display order (the order they were added).
///
/// Ranges may overlap; lookups resolve overlaps by taking the first
/// match in display order. Ids come from a counter and are never reused.
#[derive(Debug, Default)]
pub struct CaptionStore {
    captions: Vec<CaptionRecord>,
    next_id: u64,
}

impl CaptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, text: impl Into<String>, start: u64, end: u64) -> &CaptionRecord {
        debug_assert!(start < end, "caption range must be non-empty");
        self.next_id += 1;
        let id = CaptionId(self.next_id);
        self.captions.push(CaptionRecord {
            id,
            text: text.into(),
            start,
            end,
        });
        &self.captions[self.captions.len() - 1]
    }

    /// Replace a caption's fields in place, keeping its id and position.
    pub fn update(
        &mut self,
        id: CaptionId,
        text: impl Into<String>,
        start: u64,
        end: u64,
    ) -> Result<&CaptionRecord, CaptionNotFound> {
        let caption = self
            .captions
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(CaptionNotFound(id))?;
        caption.text = text.into();
        caption.start = start;
        caption.end = end;
        Ok(&*caption)
    }

    pub fn remove(&mut self, id: CaptionId) -> bool {
        match self.captions.iter().position(|c| c.id == id) {
            Some(index) => {
                self.captions.remove(index);
                true
            }
            None => false,
        }
    }

    /// First caption in display order whose range contains `time`.
    pub fn active_at(&self, time: f64) -> Option<&CaptionRecord> {
        self.captions.iter().find(|c| c.contains(time))
    }

    pub fn get(&self, id: CaptionId) -> Option<&CaptionRecord> {
        self.captions.iter().find(|c| c.id == id)
    }

    pub fn as_slice(&self) -> &[CaptionRecord] {
        &self.captions
    }

    pub fn len(&self) -> usize {
        self.captions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.captions.is_empty()
    }
}
