//! Query text shared by the MySQL and SQLite backends.
//!
//! Both accept `?` placeholders, so only the DDL differs per backend.

use quotes_types::MovieQuote;

pub const TABLE: &str = "MovieQuotes";

pub const SELECT_ALL: &str = r#"
    SELECT Id AS id, Quote AS quote, Movie AS movie
    FROM MovieQuotes
    ORDER BY Id
"#;

pub const SELECT_BY_ID: &str = r#"
    SELECT Id AS id, Quote AS quote, Movie AS movie
    FROM MovieQuotes WHERE Id = ?
"#;

pub const SELECT_AT_OFFSET: &str = r#"
    SELECT Id AS id, Quote AS quote, Movie AS movie
    FROM MovieQuotes
    ORDER BY Id
    LIMIT 1 OFFSET ?
"#;

pub const COUNT: &str = "SELECT COUNT(*) FROM MovieQuotes";

pub const INSERT: &str = "INSERT INTO MovieQuotes (Quote, Movie) VALUES (?, ?)";

pub const INSERT_SEED: &str = "INSERT INTO MovieQuotes (Id, Quote, Movie) VALUES (?, ?, ?)";

pub const UPDATE: &str = "UPDATE MovieQuotes SET Quote = ?, Movie = ? WHERE Id = ?";

pub const DELETE: &str = "DELETE FROM MovieQuotes WHERE Id = ?";

// Helper struct for sqlx query_as
#[derive(sqlx::FromRow)]
pub struct QuoteRow {
    id: i32,
    quote: String,
    movie: String,
}

impl From<QuoteRow> for MovieQuote {
    fn from(r: QuoteRow) -> Self {
        MovieQuote {
            id: r.id,
            quote: r.quote,
            movie: r.movie,
        }
    }
}
