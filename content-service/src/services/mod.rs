//! Clients for the external collaborators: the OpenAI completion API and the
//! Supabase auth/row-store surfaces.

pub mod openai;
pub mod supabase;

pub use openai::{CompletionParams, OpenAiClient, OpenAiError};
pub use supabase::{SupabaseClient, SupabaseError};
