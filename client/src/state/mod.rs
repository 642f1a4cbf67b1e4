//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `chat` owns the transcript and the transitions the page applies to it;
//! `panels` holds the per-response image and link panels it embeds.

pub mod chat;
pub mod panels;
