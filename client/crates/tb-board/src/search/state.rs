/// What a search view currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchState<T> {
    Idle,
    Loading { query: String },
    Results { query: String, items: Vec<T> },
    /// The displayed collection is cleared
    Failed { query: String, message: String },
}

impl<T> SearchState<T> {
    /// Query of the request in flight or last answered, `None` when idle
    pub fn query(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Loading { query } | Self::Results { query, .. } | Self::Failed { query, .. } => {
                Some(query)
            }
        }
    }

    /// Items to display; empty unless results arrived
    pub fn items(&self) -> &[T] {
        match self {
            Self::Results { items, .. } => items,
            _ => &[],
        }
    }
}
