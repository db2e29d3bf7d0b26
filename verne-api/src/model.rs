//! Wire types for the book catalog backend.
//!
//! Field names follow the backend's JSON (camelCase, snake_case status
//! values); everything else about presentation lives upstream.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BookStatus {
    Reading,
    Completed,
    NotStarted,
    Dropped,
    OnHold,
    /// Anything the backend sends that we do not recognize.
    #[serde(other)]
    #[default]
    Unknown,
}

impl BookStatus {
    /// The statuses a user can pick when editing.
    pub const SELECTABLE: [BookStatus; 5] = [
        BookStatus::Reading,
        BookStatus::Completed,
        BookStatus::NotStarted,
        BookStatus::Dropped,
        BookStatus::OnHold,
    ];

    /// The raw wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            BookStatus::Reading => "reading",
            BookStatus::Completed => "completed",
            BookStatus::NotStarted => "not_started",
            BookStatus::Dropped => "dropped",
            BookStatus::OnHold => "on_hold",
            BookStatus::Unknown => "unknown",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            BookStatus::Reading => "Reading",
            BookStatus::Completed => "Completed",
            BookStatus::NotStarted => "Not Started",
            BookStatus::Dropped => "Dropped",
            BookStatus::OnHold => "On Hold",
            BookStatus::Unknown => "Unknown",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: Uuid,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Genre {
    pub id: Uuid,
    pub name: String,
}

/// A book as stored by the backend.
///
/// Ids are generated client-side so a create is a plain POST of the
/// complete resource.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    pub author_id: Uuid,
    pub genre_id: Uuid,
    pub rating: Option<u8>,
    pub status: BookStatus,
    pub date_added: NaiveDate,
}

/// A book with its author and genre resolved by the backend's `_expand`.
///
/// The expansions are optional: a dangling foreign key expands to
/// nothing rather than failing the whole list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookExpanded {
    pub id: Uuid,
    pub title: String,
    pub author_id: Uuid,
    pub genre_id: Uuid,
    pub rating: Option<u8>,
    pub status: BookStatus,
    pub date_added: NaiveDate,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub genre: Option<Genre>,
}

impl BookExpanded {
    /// Strip the expansions back down to the storable resource.
    pub fn to_book(&self) -> Book {
        Book {
            id: self.id,
            title: self.title.clone(),
            author_id: self.author_id,
            genre_id: self.genre_id,
            rating: self.rating,
            status: self.status,
            date_added: self.date_added,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_uses_snake_case_on_the_wire() {
        let json = serde_json::to_string(&BookStatus::NotStarted).unwrap();
        assert_eq!(json, "\"not_started\"");

        let back: BookStatus = serde_json::from_str("\"on_hold\"").unwrap();
        assert_eq!(back, BookStatus::OnHold);
    }

    #[test]
    fn test_unrecognized_status_becomes_unknown() {
        let status: BookStatus = serde_json::from_str("\"archived\"").unwrap();
        assert_eq!(status, BookStatus::Unknown);
    }

    #[test]
    fn test_book_uses_camel_case_keys() {
        let book = Book {
            id: Uuid::nil(),
            title: "Dune".into(),
            author_id: Uuid::nil(),
            genre_id: Uuid::nil(),
            rating: None,
            status: BookStatus::Reading,
            date_added: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
        };
        let json = serde_json::to_value(&book).unwrap();
        assert!(json.get("authorId").is_some());
        assert!(json.get("genreId").is_some());
        assert_eq!(json["dateAdded"], "2024-06-15");
        assert!(json["rating"].is_null());
    }

    #[test]
    fn test_expanded_book_tolerates_missing_expansions() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000001",
            "title": "Solaris",
            "authorId": "00000000-0000-0000-0000-000000000002",
            "genreId": "00000000-0000-0000-0000-000000000003",
            "rating": 4,
            "status": "completed",
            "dateAdded": "2024-01-20"
        }"#;
        let book: BookExpanded = serde_json::from_str(json).unwrap();
        assert!(book.author.is_none());
        assert!(book.genre.is_none());
        assert_eq!(book.rating, Some(4));
    }
}
