//! The conversation-partner seam.

use async_trait::async_trait;

use crate::conversation::Turn;
use crate::error::Result;

/// A simulated conversation partner.
///
/// Implementations send the full turn history (first turn is the hidden
/// persona `system` turn) to a chat-completion backend and return the
/// next assistant turn. This is the sole suspension point in a session:
/// single attempt, no retry, provider-default timeouts.
#[async_trait]
pub trait ConversationPartner: Send + Sync {
    /// Produces the partner's next turn for the given history.
    ///
    /// `turns` must be non-empty and begin with a `system` turn.
    ///
    /// # Errors
    ///
    /// Returns `Provider` on transport or API failure; the session
    /// controller converts that into a visible in-transcript error turn
    /// rather than aborting the conversation.
    async fn reply(&self, turns: &[Turn]) -> Result<Turn>;
}
