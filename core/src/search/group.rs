//! Grouping of match records by file

use super::MatchRecord;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// Match records bucketed by reported file path.
///
/// Files keep first-seen order and lines keep input order; nothing is sorted.
/// Serializes as a JSON object whose keys follow that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedResults {
    groups: Vec<(String, Vec<MatchRecord>)>,
    index: HashMap<String, usize>,
}

impl GroupedResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to its file's bucket, creating the bucket if needed
    pub fn push(&mut self, record: MatchRecord) {
        match self.index.get(&record.file) {
            Some(&i) => self.groups[i].1.push(record),
            None => {
                self.index.insert(record.file.clone(), self.groups.len());
                self.groups.push((record.file.clone(), vec![record]));
            }
        }
    }

    /// Number of distinct files
    pub fn file_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of records across all files
    pub fn match_count(&self) -> usize {
        self.groups.iter().map(|(_, records)| records.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// File paths in first-seen order
    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(file, _)| file.as_str())
    }

    /// Records for one file
    pub fn get(&self, file: &str) -> Option<&[MatchRecord]> {
        self.index.get(file).map(|&i| self.groups[i].1.as_slice())
    }

    /// Iterate `(file, records)` in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[MatchRecord])> {
        self.groups
            .iter()
            .map(|(file, records)| (file.as_str(), records.as_slice()))
    }
}

/// Bucket records by file, preserving encounter order
pub fn group_by_file<I>(records: I) -> GroupedResults
where
    I: IntoIterator<Item = MatchRecord>,
{
    let mut grouped = GroupedResults::new();
    for record in records {
        grouped.push(record);
    }
    grouped
}

impl FromIterator<MatchRecord> for GroupedResults {
    fn from_iter<T: IntoIterator<Item = MatchRecord>>(iter: T) -> Self {
        group_by_file(iter)
    }
}

impl Serialize for GroupedResults {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (file, records) in &self.groups {
            map.serialize_entry(file, records)?;
        }
        map.end()
    }
}
