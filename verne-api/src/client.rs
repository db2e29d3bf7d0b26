//! Async HTTP client for the catalog backend.

use log::debug;
use reqwest::Response;
use serde::de::DeserializeOwned;
use url::Url;
use uuid::Uuid;

use crate::error::ApiError;
use crate::model::{Author, Book, BookExpanded, Genre};

/// Thin wrapper over `reqwest` with the backend's conventions baked in:
/// list endpoints expand relations, writes send complete resources, and
/// every non-2xx response becomes an [`ApiError::Http`].
#[derive(Debug, Clone)]
pub struct VerneClient {
    http: reqwest::Client,
    base_url: Url,
}

impl VerneClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        // Relative joins drop the last path segment without this.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url =
            Url::parse(&normalized).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))
    }

    /// All books with author and genre expanded.
    pub async fn list_books(&self) -> Result<Vec<BookExpanded>, ApiError> {
        let mut url = self.endpoint("books")?;
        url.query_pairs_mut()
            .append_pair("_expand", "author")
            .append_pair("_expand", "genre");
        debug!("GET {url}");
        let response = self.http.get(url).send().await?;
        decode(response).await
    }

    pub async fn create_book(&self, book: &Book) -> Result<Book, ApiError> {
        let url = self.endpoint("books")?;
        debug!("POST {url} ({})", book.id);
        let response = self.http.post(url).json(book).send().await?;
        decode(response).await
    }

    pub async fn update_book(&self, book: &Book) -> Result<Book, ApiError> {
        let url = self.endpoint(&format!("books/{}", book.id))?;
        debug!("PUT {url}");
        let response = self.http.put(url).json(book).send().await?;
        decode(response).await
    }

    pub async fn delete_book(&self, id: Uuid) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("books/{id}"))?;
        debug!("DELETE {url}");
        let response = self.http.delete(url).send().await?;
        check_status(response).await?;
        Ok(())
    }

    /// Authors, optionally narrowed by a full-text query.
    pub async fn list_authors(&self, search: Option<&str>) -> Result<Vec<Author>, ApiError> {
        let mut url = self.endpoint("authors")?;
        if let Some(q) = search {
            url.query_pairs_mut().append_pair("q", q);
        }
        let response = self.http.get(url).send().await?;
        decode(response).await
    }

    pub async fn create_author(&self, name: &str) -> Result<Author, ApiError> {
        let author = Author {
            id: Uuid::new_v4(),
            name: name.to_string(),
        };
        let url = self.endpoint("authors")?;
        let response = self.http.post(url).json(&author).send().await?;
        decode(response).await
    }

    pub async fn list_genres(&self, search: Option<&str>) -> Result<Vec<Genre>, ApiError> {
        let mut url = self.endpoint("genres")?;
        if let Some(q) = search {
            url.query_pairs_mut().append_pair("q", q);
        }
        let response = self.http.get(url).send().await?;
        decode(response).await
    }

    pub async fn create_genre(&self, name: &str) -> Result<Genre, ApiError> {
        let genre = Genre {
            id: Uuid::new_v4(),
            name: name.to_string(),
        };
        let url = self.endpoint("genres")?;
        let response = self.http.post(url).json(&genre).send().await?;
        decode(response).await
    }
}

async fn check_status(response: Response) -> Result<String, ApiError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(ApiError::http(status.as_u16(), body));
    }
    Ok(body)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = check_status(response).await?;
    serde_json::from_str(&body).map_err(|e| ApiError::parse(e.to_string(), body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let client = VerneClient::new("http://localhost:3001/api").unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:3001/api/");

        let joined = client.base_url().join("books").unwrap();
        assert_eq!(joined.as_str(), "http://localhost:3001/api/books");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        assert!(matches!(
            VerneClient::new("not a url"),
            Err(ApiError::InvalidUrl(_))
        ));
    }
}
