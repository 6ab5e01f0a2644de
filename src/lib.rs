pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod router;
pub mod validate;

pub use db::{Category, Question, TriviaStorage};
pub use error::TriviaError;
