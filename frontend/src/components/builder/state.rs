//! Runtime state of the form builder's root component.

use common::store::FormStore;
use yew::NodeRef;

/// The three views that read from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Builder,
    Preview,
    Json,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [ViewMode::Builder, ViewMode::Preview, ViewMode::Json];

    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Builder => "Builder",
            ViewMode::Preview => "Preview",
            ViewMode::Json => "JSON",
        }
    }

    /// Material icon name.
    pub fn icon(&self) -> &'static str {
        match self {
            ViewMode::Builder => "settings",
            ViewMode::Preview => "visibility",
            ViewMode::Json => "code",
        }
    }
}

/// State container for `FormBuilderComponent`.
///
/// Fields are `pub` because they are read by `view` and written by `update`.
pub struct FormBuilderComponent {
    /// The form being built. Every view renders from it.
    pub store: FormStore,

    pub view: ViewMode,

    pub dark_mode: bool,

    /// Whether the catalog of field kinds is unfolded in the sidebar.
    pub show_field_picker: bool,

    /// Index of the card being dragged, if a drag is in progress.
    pub dragging: Option<usize>,

    /// Index of the card currently hovered by a drag.
    pub drop_target: Option<usize>,

    /// Hidden `<input type="file">` behind the Import button.
    pub file_input_ref: NodeRef,
}

impl FormBuilderComponent {
    /// Seeded store, builder view, dark mode from the stored preference.
    pub fn new(dark_mode: bool) -> Self {
        Self {
            store: FormStore::new(),
            view: ViewMode::Builder,
            dark_mode,
            show_field_picker: false,
            dragging: None,
            drop_target: None,
            file_input_ref: NodeRef::default(),
        }
    }

    pub fn field_count_label(&self) -> String {
        match self.store.len() {
            1 => "1 field".to_string(),
            n => format!("{n} fields"),
        }
    }
}
