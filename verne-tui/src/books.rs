//! The book domain mapped onto the table engine: row adapter, column
//! definitions, and the edit draft with its validation rules.

use std::collections::HashMap;

use chrono::NaiveDate;
use uuid::Uuid;
use verne_api::{Author, Book, BookExpanded, BookStatus, Genre};
use verne_table::{
    BadgeStyle, BadgeTone, ColumnSpec, ColumnWidth, DisplayKind, FieldValue, InputKind,
    LookupRef, TableRecord,
};

/// An expanded book viewed as a table record.
#[derive(Clone)]
pub struct BookRow(pub BookExpanded);

impl TableRecord for BookRow {
    fn id(&self) -> Uuid {
        self.0.id
    }

    fn field(&self, key: &str) -> FieldValue {
        let book = &self.0;
        match key {
            "title" => book.title.clone().into(),
            "author" => book
                .author
                .as_ref()
                .map(|a| LookupRef::new(a.id, a.name.clone()))
                .into(),
            "genre" => book
                .genre
                .as_ref()
                .map(|g| LookupRef::new(g.id, g.name.clone()))
                .into(),
            "status" => book.status.as_str().into(),
            "rating" => book.rating.map(i64::from).into(),
            "added" => book.date_added.into(),
            _ => FieldValue::Null,
        }
    }

    fn search_text(&self) -> Vec<String> {
        let book = &self.0;
        let mut text = vec![book.title.clone(), book.status.label().to_string()];
        if let Some(author) = &book.author {
            text.push(author.name.clone());
        }
        if let Some(genre) = &book.genre {
            text.push(genre.name.clone());
        }
        if let Some(rating) = book.rating {
            text.push(rating.to_string());
        }
        text.push(book.date_added.format("%d-%m-%Y").to_string());
        text
    }
}

fn status_badges() -> Vec<BadgeStyle> {
    vec![
        BadgeStyle::new("reading", "Reading", BadgeTone::Primary),
        BadgeStyle::new("completed", "Completed", BadgeTone::Success),
        BadgeStyle::new("not_started", "Not Started", BadgeTone::Secondary),
        BadgeStyle::new("dropped", "Dropped", BadgeTone::Danger),
        BadgeStyle::new("on_hold", "On Hold", BadgeTone::Outline),
        BadgeStyle::new("unknown", "Unknown", BadgeTone::Secondary),
    ]
}

pub fn book_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("title", "Title")
            .width(ColumnWidth::Flex(3))
            .input(InputKind::Text {
                placeholder: "Title".into(),
            }),
        ColumnSpec::new("author", "Author")
            .width(ColumnWidth::Flex(2))
            .display(DisplayKind::Lookup)
            .input(InputKind::Select {
                placeholder: "Select author".into(),
            }),
        ColumnSpec::new("genre", "Genre")
            .width(ColumnWidth::Flex(2))
            .display(DisplayKind::Lookup)
            .input(InputKind::Select {
                placeholder: "Select genre".into(),
            }),
        ColumnSpec::new("status", "Status")
            .width(ColumnWidth::Fixed(13))
            .display(DisplayKind::Badge(status_badges()))
            .input(InputKind::Select {
                placeholder: "Status".into(),
            }),
        ColumnSpec::new("rating", "Rating")
            .width(ColumnWidth::Fixed(11))
            .display(DisplayKind::Stars)
            .input(InputKind::Stars),
        ColumnSpec::new("added", "Added")
            .width(ColumnWidth::Fixed(10))
            .display(DisplayKind::Date)
            .input(InputKind::ReadOnly),
    ]
}

/// Working copy of a book while a row is being edited.
#[derive(Debug, Clone)]
pub struct BookDraft {
    pub id: Uuid,
    pub title: String,
    pub author: Option<(Uuid, String)>,
    pub genre: Option<(Uuid, String)>,
    pub rating: Option<u8>,
    pub status: BookStatus,
    pub date_added: NaiveDate,
}

impl BookDraft {
    pub fn from_book(book: &BookExpanded) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            author: book.author.as_ref().map(|a| (a.id, a.name.clone())),
            genre: book.genre.as_ref().map(|g| (g.id, g.name.clone())),
            rating: book.rating,
            status: book.status,
            date_added: book.date_added,
        }
    }

    /// A fresh draft for a book that does not exist yet. The id is
    /// generated here so create is a plain POST.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: String::new(),
            author: None,
            genre: None,
            rating: None,
            status: BookStatus::NotStarted,
            date_added: today,
        }
    }

    /// Field-level validation errors, keyed by column.
    pub fn validate(&self) -> HashMap<String, String> {
        let mut errors = HashMap::new();
        if self.title.trim().is_empty() {
            errors.insert("title".to_string(), "Title is required".to_string());
        }
        if self.author.is_none() {
            errors.insert("author".to_string(), "Author is required".to_string());
        }
        if self.genre.is_none() {
            errors.insert("genre".to_string(), "Genre is required".to_string());
        }
        match (self.status, self.rating) {
            (BookStatus::Completed, None) => {
                errors.insert(
                    "rating".to_string(),
                    "Rating is required for completed books".to_string(),
                );
            }
            (_, Some(r)) if !(1..=5).contains(&r) => {
                errors.insert(
                    "rating".to_string(),
                    "Rating must be between 1 and 5".to_string(),
                );
            }
            _ => {}
        }
        errors
    }

    /// The resource to send. Only completed books keep a rating; anything
    /// else saves with none. Requires author and genre to be chosen.
    pub fn to_book(&self) -> Option<Book> {
        let (author_id, _) = self.author.as_ref()?;
        let (genre_id, _) = self.genre.as_ref()?;
        let rating = if self.status == BookStatus::Completed {
            self.rating
        } else {
            None
        };
        Some(Book {
            id: self.id,
            title: self.title.trim().to_string(),
            author_id: *author_id,
            genre_id: *genre_id,
            rating,
            status: self.status,
            date_added: self.date_added,
        })
    }

    /// The draft as a displayable expanded book, so the editing row shows
    /// in-progress values instead of the saved ones.
    pub fn to_expanded(&self) -> BookExpanded {
        BookExpanded {
            id: self.id,
            title: self.title.clone(),
            author_id: self.author.as_ref().map(|(id, _)| *id).unwrap_or(Uuid::nil()),
            genre_id: self.genre.as_ref().map(|(id, _)| *id).unwrap_or(Uuid::nil()),
            rating: self.rating,
            status: self.status,
            date_added: self.date_added,
            author: self.author.as_ref().map(|(id, name)| Author {
                id: *id,
                name: name.clone(),
            }),
            genre: self.genre.as_ref().map(|(id, name)| Genre {
                id: *id,
                name: name.clone(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> BookDraft {
        let mut draft = BookDraft::new(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
        draft.title = "Dune".into();
        draft.author = Some((Uuid::new_v4(), "Frank Herbert".into()));
        draft.genre = Some((Uuid::new_v4(), "Science Fiction".into()));
        draft
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        assert!(draft().validate().is_empty());
    }

    #[test]
    fn test_missing_required_fields() {
        let empty = BookDraft::new(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap());
        let errors = empty.validate();
        assert!(errors.contains_key("title"));
        assert!(errors.contains_key("author"));
        assert!(errors.contains_key("genre"));
    }

    #[test]
    fn test_completed_requires_rating() {
        let mut d = draft();
        d.status = BookStatus::Completed;
        d.rating = None;
        assert!(d.validate().contains_key("rating"));

        d.rating = Some(4);
        assert!(d.validate().is_empty());
    }

    #[test]
    fn test_rating_dropped_unless_completed() {
        let mut d = draft();
        d.status = BookStatus::Reading;
        d.rating = Some(3);
        assert_eq!(d.to_book().unwrap().rating, None);

        d.status = BookStatus::Completed;
        assert_eq!(d.to_book().unwrap().rating, Some(3));
    }

    #[test]
    fn test_search_text_covers_all_facets() {
        let row = BookRow(draft().to_expanded());
        let text = row.search_text();
        assert!(text.iter().any(|t| t == "Dune"));
        assert!(text.iter().any(|t| t == "Frank Herbert"));
        assert!(text.iter().any(|t| t == "Science Fiction"));
        assert!(text.iter().any(|t| t == "Not Started"));
        assert!(text.iter().any(|t| t == "15-06-2024"));
    }
}
