use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};

use crate::db::models::{Category, Question};
use crate::db::schema::SQLITE_INIT;
use crate::error::TriviaError;

pub type SqlitePool = Pool<Sqlite>;

#[derive(Clone)]
pub struct TriviaStorage {
    pool: SqlitePool,
}

impl TriviaStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating the file if needed) and pool a SQLite database.
    pub async fn connect(database_url: &str) -> Result<Self, TriviaError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        Ok(Self::new(pool))
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), TriviaError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, TriviaError> {
        let rows = sqlx::query_as::<_, Category>(
            r#"SELECT id, type FROM categories ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_category(&self, id: i64) -> Result<Option<Category>, TriviaError> {
        let row = sqlx::query_as::<_, Category>(
            r#"SELECT id, type FROM categories WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn create_category(&self, kind: &str) -> Result<i64, TriviaError> {
        let result = sqlx::query("INSERT INTO categories (type) VALUES (?)")
            .bind(kind)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn count_questions(&self) -> Result<i64, TriviaError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// One page of questions ordered by id.
    pub async fn list_questions_page(
        &self,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Question>, TriviaError> {
        let rows = sqlx::query_as::<_, Question>(
            r#"SELECT id, question, answer, category, difficulty
               FROM questions ORDER BY id LIMIT ? OFFSET ?"#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_question(&self, id: i64) -> Result<Option<Question>, TriviaError> {
        let row = sqlx::query_as::<_, Question>(
            r#"SELECT id, question, answer, category, difficulty
               FROM questions WHERE id = ?"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    pub async fn create_question(
        &self,
        question: &str,
        answer: &str,
        category: i64,
        difficulty: i64,
    ) -> Result<i64, TriviaError> {
        let result = sqlx::query(
            r#"INSERT INTO questions (question, answer, category, difficulty)
               VALUES (?, ?, ?, ?)"#,
        )
        .bind(question)
        .bind(answer)
        .bind(category)
        .bind(difficulty)
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Returns the number of rows removed (0 when the id is absent).
    pub async fn delete_question(&self, id: i64) -> Result<u64, TriviaError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Case-insensitive substring match on the question text.
    pub async fn search_questions(&self, term: &str) -> Result<Vec<Question>, TriviaError> {
        let pattern = format!("%{}%", escape_like(term));
        let rows = sqlx::query_as::<_, Question>(
            r#"SELECT id, question, answer, category, difficulty
               FROM questions WHERE question LIKE ? ESCAPE '\' ORDER BY id"#,
        )
        .bind(pattern)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn questions_in_category(
        &self,
        category: i64,
    ) -> Result<Vec<Question>, TriviaError> {
        let rows = sqlx::query_as::<_, Question>(
            r#"SELECT id, question, answer, category, difficulty
               FROM questions WHERE category = ? ORDER BY id"#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Candidate pool for the quiz: every question, or one category's worth.
    pub async fn quiz_candidates(
        &self,
        category: Option<i64>,
    ) -> Result<Vec<Question>, TriviaError> {
        match category {
            Some(id) => self.questions_in_category(id).await,
            None => {
                let rows = sqlx::query_as::<_, Question>(
                    r#"SELECT id, question, answer, category, difficulty
                       FROM questions ORDER BY id"#,
                )
                .fetch_all(&self.pool)
                .await?;
                Ok(rows)
            }
        }
    }
}

/// Escape `%`, `_` and the escape character itself so user input matches
/// literally inside a LIKE pattern.
fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
