//! Seam to the external generative backend.
//!
//! The engine hands a [`ResponseGenerator`] a finished system prompt and
//! message list. Transport, model choice and retries live in the
//! implementation, outside this crate.

use std::pin::Pin;

use async_trait::async_trait;
use futures_util::Stream;

use crate::conversation::ChatMessage;
use crate::error::Result;

/// A boxed stream of reply text chunks.
pub type ReplyStream = Pin<Box<dyn Stream<Item = Result<String>> + Send>>;

/// A backend that turns a prompt and history into assistant text.
#[async_trait]
pub trait ResponseGenerator: Send + Sync {
    /// Generate a complete reply.
    async fn generate(&self, system_prompt: &str, messages: &[ChatMessage]) -> Result<String>;

    /// Stream a reply in chunks.
    ///
    /// The default implementation yields the whole [`generate`](Self::generate)
    /// result as a single chunk.
    async fn stream(&self, system_prompt: &str, messages: &[ChatMessage]) -> Result<ReplyStream> {
        let reply = self.generate(system_prompt, messages).await?;
        Ok(Box::pin(futures_util::stream::once(async move { Ok(reply) })))
    }
}
