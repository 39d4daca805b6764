use crate::catalog::ProductRecord;

/// Presentation side of the browsing core.
///
/// Controllers never look up widgets themselves; they project their state
/// onto whatever surface is handed to them. Pager clicks come back as
/// commands on the controller, so the surface holds no callbacks.
pub trait RenderSurface {
    /// Replaces everything currently shown with `items`.
    fn render_list(&mut self, items: &[ProductRecord]);
    /// Replaces everything currently shown with a single message.
    fn render_empty(&mut self, message: &str);
    /// Adds pager controls numbered `1..=page_count` below the list.
    fn render_pager(&mut self, page_count: usize, current: usize);
    /// Marks the only visible entry of the current list.
    fn focus_item(&mut self, index: usize);
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SurfaceContent {
    #[default]
    Blank,
    List(Vec<ProductRecord>),
    Empty(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerControls {
    pub page_count: usize,
    pub current: usize,
}

impl PagerControls {
    pub fn pages(&self) -> impl Iterator<Item = usize> {
        1..=self.page_count
    }
}

/// Recording surface: keeps the last projected frame for a GUI to draw.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurfaceFrame {
    pub content: SurfaceContent,
    pub focused: Option<usize>,
    pub pager: Option<PagerControls>,
}

impl SurfaceFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items the viewer actually sees: the focused one when a focus is set.
    pub fn visible_items(&self) -> Vec<&ProductRecord> {
        match &self.content {
            SurfaceContent::List(items) => match self.focused {
                Some(index) => items.get(index).into_iter().collect(),
                None => items.iter().collect(),
            },
            _ => Vec::new(),
        }
    }
}

impl RenderSurface for SurfaceFrame {
    fn render_list(&mut self, items: &[ProductRecord]) {
        self.content = SurfaceContent::List(items.to_vec());
        self.focused = None;
        self.pager = None;
    }

    fn render_empty(&mut self, message: &str) {
        self.content = SurfaceContent::Empty(message.to_string());
        self.focused = None;
        self.pager = None;
    }

    fn render_pager(&mut self, page_count: usize, current: usize) {
        self.pager = Some(PagerControls {
            page_count,
            current,
        });
    }

    fn focus_item(&mut self, index: usize) {
        self.focused = Some(index);
    }
}
