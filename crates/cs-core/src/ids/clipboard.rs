use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Identity of a history entry.
///
/// Only used to correlate UI rows with store entries, never for equality
/// of content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(String);

impl_id!(EntryId);
