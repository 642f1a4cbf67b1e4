//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own conversation history and the LLM prompting logic so
//! route handlers can stay focused on cookies and status codes.

pub mod assistant;
pub mod conversation;
