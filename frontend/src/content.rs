use gloo_net::http::Request;
use log::{error, info};

use crate::config;
use crate::error::ContentError;
use crate::models::Book;

pub fn books_endpoint(base_url: &str, table: &str) -> String {
    format!(
        "{}/rest/v1/{}?select=*&order=id.asc",
        base_url.trim_end_matches('/'),
        urlencoding::encode(table)
    )
}

/// Decodes the row array and puts it in `id` order. Blank audio columns are
/// dropped so the card simply omits its player.
pub fn parse_books(body: &str) -> Result<Vec<Book>, ContentError> {
    let mut books: Vec<Book> = serde_json::from_str(body)?;
    for book in books.iter_mut() {
        if book.audio().is_none() {
            book.audio_url = None;
        }
    }
    books.sort_by_key(|book| book.id);
    Ok(books)
}

pub async fn fetch_books() -> Result<Vec<Book>, ContentError> {
    let key = config::get_content_key();
    let response = Request::get(&books_endpoint(config::get_content_url(), config::BOOKS_TABLE))
        .header("apikey", key)
        .header("Authorization", &format!("Bearer {}", key))
        .header("Accept", "application/json")
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    if !(200..300).contains(&status) {
        return Err(ContentError::Status { status, body });
    }
    parse_books(&body)
}

/// The page never shows a fetch error; it renders an empty library instead.
pub fn books_or_empty(result: Result<Vec<Book>, ContentError>) -> Vec<Book> {
    match result {
        Ok(books) => {
            info!("Loaded {} books", books.len());
            books
        }
        Err(e) => {
            error!("Erro ao carregar livros: {}", e);
            Vec::new()
        }
    }
}

pub async fn load_books() -> Vec<Book> {
    books_or_empty(fetch_books().await)
}
