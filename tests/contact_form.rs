use termfolio::ui::contact::{
    ContactField, ContactFormState, ContactIntent, ContactReducer, SUBMIT_DELAY_MS,
};
use termfolio::ui::mvi::Reducer;

fn filled(name: &str, email: &str, message: &str) -> ContactFormState {
    ContactFormState::Editing {
        name: name.to_string(),
        email: email.to_string(),
        message: message.to_string(),
        focus: ContactField::Name,
    }
}

fn type_text(mut state: ContactFormState, text: &str) -> ContactFormState {
    for ch in text.chars() {
        state = ContactReducer::reduce(state, ContactIntent::Input(ch));
    }
    state
}

#[test]
fn typing_goes_to_the_focused_field() {
    let state = type_text(ContactFormState::default(), "Ada");
    let state = ContactReducer::reduce(state, ContactIntent::FocusNext);
    let state = type_text(state, "ada@example.com");
    let state = ContactReducer::reduce(state, ContactIntent::FocusNext);
    let state = type_text(state, "Hello!");

    match state {
        ContactFormState::Editing {
            name,
            email,
            message,
            focus,
        } => {
            assert_eq!(name, "Ada");
            assert_eq!(email, "ada@example.com");
            assert_eq!(message, "Hello!");
            assert_eq!(focus, ContactField::Message);
        }
        other => panic!("expected Editing, got {other:?}"),
    }
}

#[test]
fn backspace_edits_the_focused_field() {
    let state = type_text(ContactFormState::default(), "Adaa");
    let state = ContactReducer::reduce(state, ContactIntent::Backspace);
    match state {
        ContactFormState::Editing { name, .. } => assert_eq!(name, "Ada"),
        other => panic!("expected Editing, got {other:?}"),
    }
}

#[test]
fn focus_cycles_through_all_three_fields() {
    let mut state = ContactFormState::default();
    for _ in 0..3 {
        state = ContactReducer::reduce(state, ContactIntent::FocusNext);
    }
    match state {
        ContactFormState::Editing { focus, .. } => assert_eq!(focus, ContactField::Name),
        other => panic!("expected Editing, got {other:?}"),
    }
}

#[test]
fn submit_trims_and_enters_busy_state() {
    let state = filled("  Ada Lovelace  ", " ada@example.com ", "  Hi there  ");
    let state = ContactReducer::reduce(state, ContactIntent::Submit { now_ms: 2000 });
    assert_eq!(
        state,
        ContactFormState::Sending {
            name: "Ada Lovelace".to_string(),
            until_ms: 2000 + SUBMIT_DELAY_MS,
        }
    );
    assert!(state.is_busy());
}

#[test]
fn submit_with_empty_name_or_message_is_ignored() {
    let blank_name = filled("   ", "a@b.c", "Hi");
    let after = ContactReducer::reduce(blank_name.clone(), ContactIntent::Submit { now_ms: 0 });
    assert_eq!(after, blank_name);

    let blank_message = filled("Ada", "a@b.c", "");
    let after = ContactReducer::reduce(blank_message.clone(), ContactIntent::Submit { now_ms: 0 });
    assert_eq!(after, blank_message);
}

#[test]
fn sending_completes_after_fixed_delay() {
    let state = filled("Ada", "a@b.c", "Hi");
    let state = ContactReducer::reduce(state, ContactIntent::Submit { now_ms: 0 });

    let still_busy = ContactReducer::reduce(state.clone(), ContactIntent::Tick { now_ms: SUBMIT_DELAY_MS - 1 });
    assert!(still_busy.is_busy());

    let done = ContactReducer::reduce(state, ContactIntent::Tick { now_ms: SUBMIT_DELAY_MS });
    assert_eq!(
        done,
        ContactFormState::Sent {
            name: "Ada".to_string()
        }
    );
}

#[test]
fn input_is_ignored_while_busy() {
    let state = ContactFormState::Sending {
        name: "Ada".to_string(),
        until_ms: 100,
    };
    let after = ContactReducer::reduce(state.clone(), ContactIntent::Input('x'));
    assert_eq!(after, state);
    let after = ContactReducer::reduce(state.clone(), ContactIntent::Submit { now_ms: 0 });
    assert_eq!(after, state);
}

#[test]
fn dismiss_clears_the_form() {
    let state = ContactFormState::Sent {
        name: "Ada".to_string(),
    };
    let state = ContactReducer::reduce(state, ContactIntent::Dismiss);
    assert_eq!(state, ContactFormState::default());
}

#[test]
fn dismiss_outside_confirmation_is_a_noop() {
    let state = filled("Ada", "a@b.c", "Hi");
    let after = ContactReducer::reduce(state.clone(), ContactIntent::Dismiss);
    assert_eq!(after, state);
}
