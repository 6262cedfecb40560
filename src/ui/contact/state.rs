use crate::ui::mvi::UiState;

/// How long the simulated submission stays in the busy state.
pub const SUBMIT_DELAY_MS: u64 = 1500;

/// The three text fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactField {
    #[default]
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Message,
            Self::Message => Self::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Message,
            Self::Email => Self::Name,
            Self::Message => Self::Email,
        }
    }
}

/// Contact form lifecycle.
///
/// There is no real network call anywhere: `Sending` is a fixed-delay busy
/// state, after which a confirmation carrying the submitted name is shown
/// and the fields are cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactFormState {
    Editing {
        name: String,
        email: String,
        message: String,
        focus: ContactField,
    },
    Sending {
        name: String,
        until_ms: u64,
    },
    Sent {
        name: String,
    },
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self::Editing {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            focus: ContactField::default(),
        }
    }
}

impl UiState for ContactFormState {}

impl ContactFormState {
    /// Whether the submit control is currently disabled.
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Sending { .. })
    }
}
