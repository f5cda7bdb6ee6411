use crate::view_model::FormattedView;

/// What the display surface should currently show.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DisplayContent {
    /// No accepted snapshot yet; every field shows a placeholder.
    #[default]
    Waiting,
    /// The view derived from the most recently accepted snapshot.
    Snapshot(FormattedView),
}

/// The single piece of mutable viewer state: the current content plus a
/// dirty flag the platform layer uses to coalesce redraws.
///
/// Content is always replaced wholesale, never merged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewerState {
    content: DisplayContent,
    dirty: bool,
}

impl ViewerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &DisplayContent {
        &self.content
    }

    /// Returns whether a redraw is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_waiting(&mut self) {
        self.content = DisplayContent::Waiting;
        self.dirty = true;
    }

    pub(crate) fn set_view(&mut self, view: FormattedView) {
        self.content = DisplayContent::Snapshot(view);
        self.dirty = true;
    }
}
