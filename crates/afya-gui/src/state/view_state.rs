//! Per-screen view state.
//!
//! [`ViewState`] holds exactly one variant at a time. Navigating replaces the
//! whole value, so transient screen state (a half-typed compose form, a stale
//! submission result) cannot leak across screens.

use afya_model::{Drug, PostDraft, PostType};

use crate::error::ComposeError;

// =============================================================================
// SCREEN
// =============================================================================

/// The five navigable screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Posts,
    Drugs,
    Profile,
    Contact,
    Messages,
}

impl Screen {
    /// All screens in navigation bar order.
    pub const ALL: [Screen; 5] = [
        Screen::Posts,
        Screen::Drugs,
        Screen::Profile,
        Screen::Contact,
        Screen::Messages,
    ];

    /// Label shown in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            Screen::Posts => "Posts",
            Screen::Drugs => "Drugs",
            Screen::Profile => "Profile",
            Screen::Contact => "Contact",
            Screen::Messages => "Messages",
        }
    }
}

// =============================================================================
// VIEW STATE
// =============================================================================

/// Which screen is showing, with any state local to it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    /// Posts feed.
    #[default]
    Posts,
    /// Drugs catalog.
    Drugs,
    /// Post composition form.
    Compose(ComposeViewState),
    /// Profile form.
    Profile(ProfileViewState),
    /// Call log placeholder.
    Contact,
    /// Message inbox placeholder.
    Messages,
}

impl ViewState {
    /// View state for a freshly navigated-to screen.
    pub fn for_screen(screen: Screen) -> Self {
        match screen {
            Screen::Posts => ViewState::Posts,
            Screen::Drugs => ViewState::Drugs,
            Screen::Profile => ViewState::Profile(ProfileViewState::default()),
            Screen::Contact => ViewState::Contact,
            Screen::Messages => ViewState::Messages,
        }
    }

    /// An empty compose form.
    pub fn compose() -> Self {
        ViewState::Compose(ComposeViewState::default())
    }

    /// A compose form prefilled from a drug card request.
    pub fn compose_for_drug(drug: &Drug) -> Self {
        ViewState::Compose(ComposeViewState::for_drug(drug))
    }

    /// The navigation tab this view belongs to.
    ///
    /// Compose is reached from the posts feed and keeps that tab active.
    pub fn screen(&self) -> Screen {
        match self {
            ViewState::Posts | ViewState::Compose(_) => Screen::Posts,
            ViewState::Drugs => Screen::Drugs,
            ViewState::Profile(_) => Screen::Profile,
            ViewState::Contact => Screen::Contact,
            ViewState::Messages => Screen::Messages,
        }
    }

    /// Whether the shared search box is shown for this view.
    pub fn shows_search(&self) -> bool {
        matches!(self, ViewState::Posts | ViewState::Drugs)
    }
}

// =============================================================================
// COMPOSE
// =============================================================================

/// Lifecycle of a post submission.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ComposePhase {
    /// Form is editable, nothing in flight.
    #[default]
    Editing,
    /// A submission with this sequence number is in flight.
    Submitting { seq: u64 },
    /// The last submission was accepted by the store.
    Succeeded,
    /// The last attempt failed validation or submission.
    Failed { error: ComposeError },
}

/// State of the post composition form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComposeViewState {
    pub title: String,
    pub drug_name: String,
    pub content: String,
    pub location: String,
    pub image_url: String,
    pub post_type: PostType,
    pub phase: ComposePhase,
}

impl ComposeViewState {
    /// A form prefilled for requesting `drug`.
    pub fn for_drug(drug: &Drug) -> Self {
        Self {
            drug_name: drug.name.clone(),
            post_type: PostType::Request,
            ..Self::default()
        }
    }

    /// Whether any required field is blank after trimming.
    ///
    /// The image URL is optional and not checked.
    pub fn missing_required_fields(&self) -> bool {
        self.title.trim().is_empty()
            || self.drug_name.trim().is_empty()
            || self.content.trim().is_empty()
            || self.location.trim().is_empty()
    }

    /// The draft to submit, fields exactly as typed.
    ///
    /// An empty image URL becomes [`None`].
    pub fn draft(&self) -> PostDraft {
        PostDraft {
            title: self.title.clone(),
            drug_name: self.drug_name.clone(),
            content: self.content.clone(),
            location: self.location.clone(),
            image_url: (!self.image_url.is_empty()).then(|| self.image_url.clone()),
            post_type: self.post_type,
        }
    }

    /// Whether a submission is currently in flight.
    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, ComposePhase::Submitting { .. })
    }

    /// Whether the last submission succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self.phase, ComposePhase::Succeeded)
    }

    /// The error from the last failed attempt, if any.
    pub fn error(&self) -> Option<&ComposeError> {
        match &self.phase {
            ComposePhase::Failed { error } => Some(error),
            _ => None,
        }
    }

    /// Whether the submit button should accept a click.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting()
    }
}

// =============================================================================
// PROFILE
// =============================================================================

/// State of the profile form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileViewState {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}
