//! Application state (Model in TEA pattern)

use pwcheck_core::{
    BackgroundEffectConfig, PointerColor, PointerPosition, RequestId, RequestState, ThemeKind,
};

use crate::config::Settings;

/// Lifecycle of the whole program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// The password being edited.
///
/// Debug output never shows the text; it only ever leaves this type through
/// [`PasswordInput::as_str`] on its way to the scoring request or the renderer.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PasswordInput {
    text: String,
}

impl PasswordInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Length in characters (one mask bullet per character)
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    pub fn push(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn pop(&mut self) -> Option<char> {
        self.text.pop()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl std::fmt::Debug for PasswordInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordInput")
            .field("len", &self.char_count())
            .finish()
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone)]
pub struct AppState {
    pub phase: AppPhase,

    pub password: PasswordInput,

    /// Render the password in plaintext instead of bullets
    pub password_visible: bool,

    pub request: RequestState,

    /// Most recently issued request id; responses for any other id are stale
    pub last_request_id: RequestId,

    pub theme: ThemeKind,

    /// Last pointer position, absent until the pointer first moves
    pub pointer: Option<PointerPosition>,

    /// Background tint derived from the pointer; overrides the theme background
    pub pointer_color: Option<PointerColor>,

    /// Animation clock advanced by `Message::Tick`
    pub tick: u64,

    /// Tick at which the displayed result last changed
    pub result_shown_at: Option<u64>,

    pub settings: Settings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial state honoring the startup options in `settings`
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            password: PasswordInput::default(),
            password_visible: settings.ui.start_visible,
            request: RequestState::Idle,
            last_request_id: RequestId::default(),
            theme: settings.ui.theme,
            pointer: None,
            pointer_color: None,
            tick: 0,
            result_shown_at: None,
            settings,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Issue the next request id and remember it as the latest
    pub fn issue_request_id(&mut self) -> RequestId {
        self.last_request_id = self.last_request_id.next();
        self.last_request_id
    }

    /// True when `id` belongs to the most recent submit
    pub fn is_latest_request(&self, id: RequestId) -> bool {
        id == self.last_request_id
    }

    pub fn is_loading(&self) -> bool {
        self.request.is_loading()
    }

    /// Background effect configuration for the current theme
    pub fn effect_config(&self) -> BackgroundEffectConfig {
        self.settings.background.effect_config(self.theme)
    }

    /// Ticks elapsed since the displayed result changed
    pub fn ticks_since_result(&self) -> Option<u64> {
        self.result_shown_at
            .map(|shown| self.tick.saturating_sub(shown))
    }
}
