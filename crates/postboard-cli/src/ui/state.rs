use postboard_core::{DataStore, UserFilter, UserLookup};

use super::view::{PostView, UserOption, render_posts, render_user_options};

/// Notification shown when the initial load fails
pub const LOAD_FAILED_MESSAGE: &str =
    "Hubo un error al cargar los datos. Por favor, recarga la página.";

/// Number of frames in the loading spinner
pub const SPINNER_FRAMES: usize = 10;

/// Phase of the initial data load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// Both fetches in flight
    Loading,
    /// Data loaded and first render done
    Ready,
    /// A fetch failed; terminal for the session
    Failed,
}

/// Which display regions are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Visibility {
    /// Loading indicator
    pub loading: bool,
    /// Post card grid
    pub grid: bool,
    /// "No results" panel
    pub no_results: bool,
}

/// Author selector: options plus the selected index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSelector {
    options: Vec<UserOption>,
    selected: usize,
}

impl Default for UserSelector {
    fn default() -> Self {
        Self {
            options: render_user_options(&UserLookup::default()),
            selected: 0,
        }
    }
}

impl UserSelector {
    /// Replaces the options and resets the selection to "all users"
    pub fn set_options(&mut self, options: Vec<UserOption>) {
        self.options = options;
        self.selected = 0;
    }

    /// All options, "all users" first
    pub fn options(&self) -> &[UserOption] {
        &self.options
    }

    /// Index of the selected option
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Label of the selected option
    pub fn selected_label(&self) -> &str {
        self.options
            .get(self.selected)
            .map_or("", |option| option.label.as_str())
    }

    /// Filter value of the selected option
    pub fn selected_filter(&self) -> UserFilter {
        self.options
            .get(self.selected)
            .map_or(UserFilter::All, |option| option.value)
    }

    /// Moves the selection down one option. Returns whether it changed.
    pub fn select_next(&mut self) -> bool {
        if self.selected + 1 < self.options.len() {
            self.selected += 1;
            true
        } else {
            false
        }
    }

    /// Moves the selection up one option. Returns whether it changed.
    pub fn select_previous(&mut self) -> bool {
        if self.selected > 0 {
            self.selected -= 1;
            true
        } else {
            false
        }
    }
}

/// Main UI state
#[derive(Debug, Default)]
pub struct UiState {
    load_state: LoadState,
    visibility: Visibility,
    view: PostView,
    selector: UserSelector,
    notification: Option<String>,
    notifications_raised: usize,
    spinner_frame: usize,
    /// Index of the first visible card row
    pub grid_scroll: usize,
}

impl UiState {
    /// Current load phase
    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    /// Current region visibility
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Currently rendered view
    pub fn view(&self) -> &PostView {
        &self.view
    }

    /// Author selector
    pub fn selector(&self) -> &UserSelector {
        &self.selector
    }

    /// Mutable author selector
    pub fn selector_mut(&mut self) -> &mut UserSelector {
        &mut self.selector
    }

    /// Pending blocking notification, if any
    pub fn notification(&self) -> Option<&str> {
        self.notification.as_deref()
    }

    /// Number of notifications raised this session
    pub fn notifications_raised(&self) -> usize {
        self.notifications_raised
    }

    /// Current spinner frame index
    pub fn spinner_frame(&self) -> usize {
        self.spinner_frame
    }

    /// Advances the spinner by one frame
    pub fn advance_spinner(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES;
    }

    /// `Idle -> Loading`: show the loading indicator and force both result
    /// regions hidden.
    pub fn enter_loading(&mut self) {
        if self.load_state != LoadState::Idle {
            tracing::warn!("Ignoring Loading entry from {:?}", self.load_state);
            return;
        }
        self.load_state = LoadState::Loading;
        self.visibility = Visibility {
            loading: true,
            grid: false,
            no_results: false,
        };
        self.spinner_frame = 0;
    }

    /// `Loading -> Ready`: hide the indicator, fill the selector and render
    /// every post unfiltered.
    pub fn enter_ready(&mut self, store: &DataStore) {
        if self.load_state != LoadState::Loading {
            tracing::warn!("Ignoring Ready entry from {:?}", self.load_state);
            return;
        }
        self.visibility.loading = false;
        self.selector.set_options(render_user_options(store.users()));

        let all: Vec<_> = store.posts().iter().collect();
        self.show_view(render_posts(&all, store.users()));
        self.load_state = LoadState::Ready;
        tracing::info!("Ready with {} posts", store.posts().len());
    }

    /// `Loading -> Failed`: hide the indicator and raise the single
    /// blocking notification.
    pub fn enter_failed(&mut self) {
        if self.load_state != LoadState::Loading {
            tracing::warn!("Ignoring Failed entry from {:?}", self.load_state);
            return;
        }
        self.load_state = LoadState::Failed;
        self.visibility.loading = false;
        self.raise_notification(LOAD_FAILED_MESSAGE);
    }

    /// Replaces the whole rendered view and toggles grid/no-results to match
    pub fn show_view(&mut self, view: PostView) {
        let empty = view.is_empty();
        self.visibility.grid = !empty;
        self.visibility.no_results = empty;
        self.view = view;
        self.grid_scroll = 0;
    }

    /// Shows a blocking notification
    pub fn raise_notification(&mut self, message: &str) {
        self.notification = Some(message.to_owned());
        self.notifications_raised += 1;
    }

    /// Dismisses the pending notification
    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }
}
