//! Drugs catalog messages.

use afya_model::Drug;
use afya_store::StoreError;

/// Messages for the drugs catalog.
#[derive(Debug, Clone)]
pub enum DrugsMessage {
    /// A drugs fetch finished.
    Loaded(Result<Vec<Drug>, StoreError>),
    /// User clicked the refresh button.
    RefreshClicked,
    /// User clicked Request on a drug card.
    RequestClicked(Drug),
}
