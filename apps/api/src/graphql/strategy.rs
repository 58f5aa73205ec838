//! Resolution strategy selector

use std::fmt;

/// How `Query.books` and `Book.author` reach the store.
///
/// Fixed per server binary and stored in the schema data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// `books` in one query, then one query per `author`
    Naive,
    /// `books LEFT JOIN users` on every request
    EagerJoin,
    /// Join only when `books.author` is in the selection set
    ConditionalJoin,
    /// `books` in one query, authors through a per-request DataLoader
    Batched,
}

impl Strategy {
    /// Every strategy, in the order the tutorial introduces them
    pub const ALL: [Strategy; 4] = [
        Strategy::Naive,
        Strategy::EagerJoin,
        Strategy::ConditionalJoin,
        Strategy::Batched,
    ];

    /// Short name used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Naive => "naive",
            Self::EagerJoin => "join",
            Self::ConditionalJoin => "conditional-join",
            Self::Batched => "dataloader",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
