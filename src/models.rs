//! Frontend Models
//!
//! Data structures matching the remote GraphQL response shape, plus the
//! conversion into core entries.

use serde::Deserialize;

use score_engine::Entry;

/// Media title variants as the source reports them
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Title {
    pub romaji: Option<String>,
    pub english: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CoverImage {
    pub medium: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub id: u32,
    pub title: Title,
    pub cover_image: Option<CoverImage>,
}

/// One list entry: the user's score plus the media it scores
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListEntry {
    #[serde(default)]
    pub repeat: u32,
    pub score: f64,
    pub media: Media,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MediaList {
    pub name: String,
    pub entries: Vec<ListEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MediaListCollection {
    pub lists: Vec<MediaList>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QueryData {
    #[serde(rename = "MediaListCollection")]
    pub media_list_collection: MediaListCollection,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QueryResponse {
    pub data: Option<QueryData>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

impl From<ListEntry> for Entry {
    fn from(entry: ListEntry) -> Self {
        let title = entry
            .media
            .title
            .romaji
            .or(entry.media.title.english)
            .unwrap_or_else(|| format!("#{}", entry.media.id));
        Entry {
            id: entry.media.id,
            title,
            cover_url: entry.media.cover_image.and_then(|c| c.medium),
            score: Some(entry.score),
            pinned: false,
            repeat: entry.repeat,
        }
    }
}

/// Pick the named list and turn it into the session's working sequence,
/// sorted descending by the source-provided score (the rank order).
pub fn into_ranked_entries(lists: Vec<MediaList>, list_name: &str) -> Option<Vec<Entry>> {
    let list = lists.into_iter().find(|list| list.name == list_name)?;
    let mut entries: Vec<Entry> = list.entries.into_iter().map(Entry::from).collect();
    entries.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    Some(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_entry(id: u32, romaji: Option<&str>, english: Option<&str>, score: f64) -> ListEntry {
        ListEntry {
            repeat: 0,
            score,
            media: Media {
                id,
                title: Title {
                    romaji: romaji.map(String::from),
                    english: english.map(String::from),
                },
                cover_image: None,
            },
        }
    }

    #[test]
    fn test_title_fallback() {
        let entry: Entry = list_entry(1, None, Some("Berserk"), 9.0).into();
        assert_eq!(entry.title, "Berserk");

        let entry: Entry = list_entry(2, Some("Kingudamu"), Some("Kingdom"), 8.0).into();
        assert_eq!(entry.title, "Kingudamu");
    }

    #[test]
    fn test_into_ranked_entries_sorts_descending() {
        let lists = vec![
            MediaList {
                name: "Reading".to_string(),
                entries: vec![list_entry(9, Some("X"), None, 10.0)],
            },
            MediaList {
                name: "Completed".to_string(),
                entries: vec![
                    list_entry(1, Some("A"), None, 7.0),
                    list_entry(2, Some("B"), None, 9.0),
                    list_entry(3, Some("C"), None, 8.0),
                ],
            },
        ];

        let entries = into_ranked_entries(lists, "Completed").unwrap();
        let ids: Vec<u32> = entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert!(entries.iter().all(|e| !e.pinned));
    }

    #[test]
    fn test_missing_list_is_none() {
        assert!(into_ranked_entries(Vec::new(), "Completed").is_none());
    }
}
