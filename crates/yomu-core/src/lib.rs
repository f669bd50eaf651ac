//! Core state machine for a manga reading session.
//!
//! `yomu-core` owns reading-mode switching, page and chapter traversal,
//! read-position tracking, and viewport-driven page detection. Everything
//! that touches the outside world is a collaborator trait implemented by the
//! host: chapter catalogs and image lists ([`source`]), resume-position
//! persistence ([`position`]), and login state ([`auth`]).
//!
//! The session never owns a viewport or a network stack. Navigation intents
//! return a [`session::ScrollRequest`] the host applies, and the host feeds
//! observer notifications back through
//! [`session::ReaderSession::observe_visibility`].

pub mod auth;
pub mod error;
pub mod model;
pub mod position;
pub mod session;
pub mod source;

pub use error::ReaderError;
pub use model::{Chapter, ChapterId, Manga, MangaId, PageImage, ReadingMode};
pub use session::{PageVisibility, ReaderOptions, ReaderSession, ScrollRequest, TieBreak};
