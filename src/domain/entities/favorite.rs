use async_graphql::Enum;

/// Outcome of a favorite toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
#[graphql(rename_items = "lowercase")]
pub enum FavoriteAction {
    Added,
    Removed,
}
