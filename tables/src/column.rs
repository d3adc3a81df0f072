//! Column descriptors.

use std::fmt;
use std::sync::Arc;

/// Pure function producing the displayed value of a cell.
pub type Renderer<R, V> = Arc<dyn Fn(&R) -> V + Send + Sync>;

/// Describes one column of a table: which field it shows, its header label,
/// whether it can be sorted, and an optional custom renderer.
pub struct Column<R, V = String> {
    key: String,
    header: String,
    sortable: bool,
    render: Option<Renderer<R, V>>,
}

impl<R, V> Column<R, V> {
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            sortable: false,
            render: None,
        }
    }

    /// Allow the column header to drive sorting.
    #[must_use]
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Replace the default text cell with the output of `render`.
    ///
    /// The closure must be free of side effects; it runs once per record per
    /// render pass in no particular order.
    #[must_use]
    pub fn render(mut self, render: impl Fn(&R) -> V + Send + Sync + 'static) -> Self {
        self.render = Some(Arc::new(render));
        self
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn header(&self) -> &str {
        &self.header
    }

    #[must_use]
    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    pub(crate) fn renderer(&self) -> Option<&Renderer<R, V>> {
        self.render.as_ref()
    }
}

impl<R, V> Clone for Column<R, V> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            header: self.header.clone(),
            sortable: self.sortable,
            render: self.render.clone(),
        }
    }
}

impl<R, V> fmt::Debug for Column<R, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("sortable", &self.sortable)
            .field("render", &self.render.is_some())
            .finish()
    }
}
