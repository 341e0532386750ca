//! Posts feed messages.

use afya_model::Post;
use afya_store::StoreError;

/// Messages for the posts feed.
#[derive(Debug, Clone)]
pub enum PostsMessage {
    /// A posts fetch finished.
    Loaded(Result<Vec<Post>, StoreError>),
    /// User clicked the refresh button.
    RefreshClicked,
    /// User clicked the add post button.
    ComposeClicked,
}
