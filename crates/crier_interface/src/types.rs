//! Identifier types returned by collaborators.

use serde::{Deserialize, Serialize};

/// Platform-specific post identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{}", _0)]
pub struct PostId(pub String);
