//! `PostgREST` adapter for the remote task store.
//!
//! Speaks the generic REST-over-HTTP convention exposed by
//! `PostgREST`-style data APIs: `GET /tasks?select=*&order=created_at.desc`
//! for ordered listing, `POST /tasks` with a one-element array body for
//! insertion, and `PATCH /tasks?id=eq.<id>` for partial updates, the write
//! paths sending `Prefer: return=minimal`.

mod config;
mod models;
mod repository;

pub use config::{API_KEY_ENV, API_URL_ENV, PostgrestConfig, PostgrestConfigError};
pub use models::TaskRow;
pub use repository::PostgrestTaskRepository;

#[cfg(test)]
pub(crate) use repository::failure_message;
