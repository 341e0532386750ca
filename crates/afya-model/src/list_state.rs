/// Snapshot of an asynchronously loaded list as the UI observes it.
///
/// Holds the items together with the in-flight flag and the last load error.
/// Fields are private so every change goes through the lifecycle operations
/// below; the single writer is the application update loop, and each render
/// observes the latest snapshot. Item order is arrival order.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    items: Vec<T>,
    loading: bool,
    error: Option<String>,
}

impl<T> ListState<T> {
    /// An empty list that is neither loading nor failed.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }

    /// Marks a load as started. Clears any previous error; existing items
    /// stay visible until the load resolves.
    pub fn begin_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Resolves a load successfully, replacing the whole item set.
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// Appends a single item at the end.
    ///
    /// No dedup is attempted; callers are responsible for not submitting the
    /// same item twice.
    pub fn append(&mut self, item: T) {
        self.items.push(item);
    }

    /// Resolves a load with an error. Items already shown are kept.
    pub fn fail(&mut self, error: impl Into<String>) {
        self.loading = false;
        self.error = Some(error.into());
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self::new()
    }
}
