use crate::ui::contact::intent::ContactIntent;
use crate::ui::contact::state::{ContactField, ContactFormState, SUBMIT_DELAY_MS};
use crate::ui::mvi::Reducer;

pub struct ContactReducer;

impl Reducer for ContactReducer {
    type State = ContactFormState;
    type Intent = ContactIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ContactIntent::Input(ch) => edit(state, |field| field.push(ch)),
            ContactIntent::Backspace => edit(state, |field| {
                field.pop();
            }),
            ContactIntent::FocusNext => refocus(state, ContactField::next),
            ContactIntent::FocusPrev => refocus(state, ContactField::prev),
            ContactIntent::Submit { now_ms } => submit(state, now_ms),
            ContactIntent::Tick { now_ms } => match state {
                ContactFormState::Sending { name, until_ms } if now_ms >= until_ms => {
                    ContactFormState::Sent { name }
                }
                other => other,
            },
            ContactIntent::Dismiss => match state {
                ContactFormState::Sent { .. } => ContactFormState::default(),
                other => other,
            },
        }
    }
}

fn edit(state: ContactFormState, apply: impl FnOnce(&mut String)) -> ContactFormState {
    match state {
        ContactFormState::Editing {
            mut name,
            mut email,
            mut message,
            focus,
        } => {
            match focus {
                ContactField::Name => apply(&mut name),
                ContactField::Email => apply(&mut email),
                ContactField::Message => apply(&mut message),
            }
            ContactFormState::Editing {
                name,
                email,
                message,
                focus,
            }
        }
        other => other,
    }
}

fn refocus(state: ContactFormState, step: impl FnOnce(ContactField) -> ContactField) -> ContactFormState {
    match state {
        ContactFormState::Editing {
            name,
            email,
            message,
            focus,
        } => ContactFormState::Editing {
            name,
            email,
            message,
            focus: step(focus),
        },
        other => other,
    }
}

fn submit(state: ContactFormState, now_ms: u64) -> ContactFormState {
    match state {
        ContactFormState::Editing {
            name,
            email,
            message,
            focus,
        } => {
            let trimmed_name = name.trim();
            let trimmed_message = message.trim();
            if trimmed_name.is_empty() || trimmed_message.is_empty() {
                // Nothing worth sending; the gesture simply has no effect.
                return ContactFormState::Editing {
                    name,
                    email,
                    message,
                    focus,
                };
            }
            ContactFormState::Sending {
                name: trimmed_name.to_string(),
                until_ms: now_ms + SUBMIT_DELAY_MS,
            }
        }
        other => other,
    }
}
