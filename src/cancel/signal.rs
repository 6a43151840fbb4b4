use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

/// Identifier attached to every signal so log lines of one operation can be correlated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct OperationId(pub String);

impl OperationId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl Default for OperationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for OperationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Cooperative cancellation flag handed to a single async operation.
///
/// Clones share state: cancelling any clone cancels all of them. Once cancelled a
/// signal never resets.
#[derive(Debug, Clone)]
pub struct CancellationSignal {
    id: OperationId,
    token: CancellationToken,
}

impl CancellationSignal {
    pub fn new() -> Self {
        Self {
            id: OperationId::new(),
            token: CancellationToken::new(),
        }
    }

    pub fn id(&self) -> &OperationId {
        &self.id
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Flips the signal. Calling it again is a no-op.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Completes once the signal has been cancelled.
    ///
    /// Meant to be raced against the real work with `tokio::select!`.
    pub async fn cancelled(&self) {
        self.token.cancelled().await
    }
}

impl Default for CancellationSignal {
    fn default() -> Self {
        Self::new()
    }
}
