//! SQL DDL for initializing the trivia database.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `categories`: id + display type
/// - `questions`: text, answer, a plain integer `category` column and a
///   1-5 `difficulty` score
/// - No foreign key constraint on `questions.category`; category existence
///   is enforced by the validation layer instead
/// - Non-unique index on `questions.category` for the by-category listing
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS categories (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    type TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS questions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    question TEXT NOT NULL,
    answer TEXT NOT NULL,
    category INTEGER NOT NULL,
    difficulty INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category);
"#;
