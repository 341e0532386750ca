//! Post composition messages.

use afya_model::{Post, PostType};
use afya_store::StoreError;

/// Messages for the post composition form.
#[derive(Debug, Clone)]
pub enum ComposeMessage {
    /// Title field changed.
    TitleChanged(String),
    /// Drug name field changed.
    DrugNameChanged(String),
    /// Content field changed.
    ContentChanged(String),
    /// Location field changed.
    LocationChanged(String),
    /// Image URL field changed.
    ImageUrlChanged(String),
    /// Post type picked.
    PostTypeSelected(PostType),
    /// User clicked submit.
    SubmitClicked,
    /// A submission finished.
    ///
    /// `seq` identifies the attempt; results from earlier attempts are
    /// dropped on arrival.
    Submitted {
        seq: u64,
        result: Result<Post, StoreError>,
    },
    /// User clicked reset after a finished submission.
    ResetClicked,
}
