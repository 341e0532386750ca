//! Tests for the post composition flow.
//!
//! The update loop is driven by hand: messages go through `App::update` and
//! submission results are delivered as `ComposeMessage::Submitted`, exactly
//! as the runtime would after a task completes.

use std::sync::Arc;

use afya_gui::App;
use afya_gui::error::ComposeError;
use afya_gui::message::{ComposeMessage, Message, PostsMessage};
use afya_gui::service::perform_submit;
use afya_gui::state::{ComposePhase, ComposeViewState, Screen, ViewState};
use afya_model::{Post, PostId, PostType};
use afya_store::{MemoryStore, StoreError};

fn new_app() -> (App, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let (app, _startup) = App::with_stores(store.clone(), store.clone());
    (app, store)
}

fn send(app: &mut App, message: Message) {
    let _ = app.update(message);
}

fn open_compose(app: &mut App) {
    send(app, Message::Posts(PostsMessage::ComposeClicked));
}

fn fill_form(app: &mut App) {
    send(
        app,
        Message::Compose(ComposeMessage::TitleChanged("Need insulin".to_string())),
    );
    send(
        app,
        Message::Compose(ComposeMessage::DrugNameChanged("Insulin".to_string())),
    );
    send(
        app,
        Message::Compose(ComposeMessage::ContentChanged("Two pens, urgent".to_string())),
    );
    send(
        app,
        Message::Compose(ComposeMessage::LocationChanged("Nakuru".to_string())),
    );
}

fn compose_state(app: &App) -> &ComposeViewState {
    match &app.state.view {
        ViewState::Compose(compose) => compose,
        other => panic!("expected compose view, got {other:?}"),
    }
}

fn late_post(title: &str) -> Post {
    Post {
        id: PostId::new(),
        title: title.to_string(),
        drug_name: "Insulin".to_string(),
        content: "Two pens".to_string(),
        location: "Nakuru".to_string(),
        image_url: None,
        post_type: PostType::Request,
        created_at: chrono::Utc::now(),
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

#[test]
fn blank_form_fails_validation() {
    let (mut app, store) = new_app();
    open_compose(&mut app);

    send(&mut app, Message::Compose(ComposeMessage::SubmitClicked));

    let compose = compose_state(&app);
    assert_eq!(
        compose.phase,
        ComposePhase::Failed {
            error: ComposeError::MissingFields
        }
    );
    assert!(!compose.is_submitting());
    assert!(!compose.is_success());
    assert_eq!(store.submit_call_count(), 0);
}

#[test]
fn whitespace_only_fields_fail_validation() {
    let (mut app, store) = new_app();
    open_compose(&mut app);

    send(
        &mut app,
        Message::Compose(ComposeMessage::TitleChanged("   ".to_string())),
    );
    send(
        &mut app,
        Message::Compose(ComposeMessage::DrugNameChanged("Insulin".to_string())),
    );
    send(
        &mut app,
        Message::Compose(ComposeMessage::ContentChanged("\t".to_string())),
    );
    send(
        &mut app,
        Message::Compose(ComposeMessage::LocationChanged("Nakuru".to_string())),
    );
    send(&mut app, Message::Compose(ComposeMessage::SubmitClicked));

    assert_eq!(
        compose_state(&app).error(),
        Some(&ComposeError::MissingFields)
    );
    assert_eq!(store.submit_call_count(), 0);
}

#[test]
fn validation_error_reads_all_fields_are_required() {
    assert_eq!(
        ComposeError::MissingFields.to_string(),
        "all fields are required"
    );
}

#[test]
fn image_url_is_optional() {
    let mut compose = ComposeViewState {
        title: "Need insulin".to_string(),
        drug_name: "Insulin".to_string(),
        content: "Two pens".to_string(),
        location: "Nakuru".to_string(),
        ..ComposeViewState::default()
    };

    assert!(!compose.missing_required_fields());
    assert_eq!(compose.draft().image_url, None);

    compose.image_url = "https://example.org/pens.jpg".to_string();
    assert_eq!(
        compose.draft().image_url.as_deref(),
        Some("https://example.org/pens.jpg")
    );
}

// =============================================================================
// SUBMISSION
// =============================================================================

#[test]
fn valid_submit_enters_submitting() {
    let (mut app, _store) = new_app();
    open_compose(&mut app);
    fill_form(&mut app);

    send(&mut app, Message::Compose(ComposeMessage::SubmitClicked));

    let compose = compose_state(&app);
    assert_eq!(compose.phase, ComposePhase::Submitting { seq: 1 });
    assert!(!compose.can_submit());
    assert!(!compose.is_success());
}

#[tokio::test]
async fn successful_submission_appends_exactly_one_post() {
    let (mut app, store) = new_app();
    open_compose(&mut app);
    fill_form(&mut app);

    let draft = compose_state(&app).draft();
    send(&mut app, Message::Compose(ComposeMessage::SubmitClicked));

    let result = perform_submit(store.clone(), draft).await;
    send(
        &mut app,
        Message::Compose(ComposeMessage::Submitted { seq: 1, result }),
    );

    let compose = compose_state(&app);
    assert!(compose.is_success());
    assert!(!compose.is_submitting());

    // The feed gained the canonical post the store returned, exactly once.
    assert_eq!(app.state.posts.len(), 1);
    let stored = store.stored_posts();
    assert_eq!(stored.len(), 1);
    assert_eq!(app.state.posts.items()[0], stored[0]);
    assert_eq!(app.state.posts.items()[0].title, "Need insulin");
}

#[tokio::test]
async fn failed_submission_shows_error_and_appends_nothing() {
    let (mut app, store) = new_app();
    store.set_submit_failure(Some(StoreError::unavailable("db down")));
    open_compose(&mut app);
    fill_form(&mut app);

    let draft = compose_state(&app).draft();
    send(&mut app, Message::Compose(ComposeMessage::SubmitClicked));

    let result = perform_submit(store.clone(), draft).await;
    send(
        &mut app,
        Message::Compose(ComposeMessage::Submitted { seq: 1, result }),
    );

    let compose = compose_state(&app);
    assert_eq!(
        compose.error(),
        Some(&ComposeError::SubmissionFailed)
    );
    assert_eq!(
        ComposeError::SubmissionFailed.to_string(),
        "failed to submit post"
    );
    assert!(!compose.is_success());
    assert!(!compose.is_submitting());
    assert_eq!(app.state.posts.len(), 0);
    assert!(store.stored_posts().is_empty());
}

#[test]
fn duplicate_submit_while_in_flight_is_rejected() {
    let (mut app, _store) = new_app();
    open_compose(&mut app);
    fill_form(&mut app);

    send(&mut app, Message::Compose(ComposeMessage::SubmitClicked));
    send(&mut app, Message::Compose(ComposeMessage::SubmitClicked));

    assert_eq!(compose_state(&app).phase, ComposePhase::Submitting { seq: 1 });
    assert_eq!(app.state.submit_seq, 1);
}

#[test]
fn stale_result_is_discarded() {
    let (mut app, _store) = new_app();
    open_compose(&mut app);
    fill_form(&mut app);

    // First attempt fails, second is still in flight when the late
    // duplicate of the first arrives.
    send(&mut app, Message::Compose(ComposeMessage::SubmitClicked));
    send(
        &mut app,
        Message::Compose(ComposeMessage::Submitted {
            seq: 1,
            result: Err(StoreError::unavailable("offline")),
        }),
    );
    send(&mut app, Message::Compose(ComposeMessage::SubmitClicked));
    assert_eq!(compose_state(&app).phase, ComposePhase::Submitting { seq: 2 });

    send(
        &mut app,
        Message::Compose(ComposeMessage::Submitted {
            seq: 1,
            result: Ok(late_post("Late duplicate")),
        }),
    );

    assert_eq!(compose_state(&app).phase, ComposePhase::Submitting { seq: 2 });
    assert_eq!(app.state.posts.len(), 0);
}

#[test]
fn result_after_leaving_compose_is_dropped() {
    let (mut app, _store) = new_app();
    open_compose(&mut app);
    fill_form(&mut app);

    send(&mut app, Message::Compose(ComposeMessage::SubmitClicked));
    send(&mut app, Message::Navigate(Screen::Posts));

    send(
        &mut app,
        Message::Compose(ComposeMessage::Submitted {
            seq: 1,
            result: Ok(late_post("Orphaned")),
        }),
    );

    assert_eq!(app.state.view, ViewState::Posts);
    assert_eq!(app.state.posts.len(), 0);
}

// =============================================================================
// OUTCOME TRANSITIONS
// =============================================================================

#[test]
fn new_attempt_clears_previous_error() {
    let (mut app, _store) = new_app();
    open_compose(&mut app);

    send(&mut app, Message::Compose(ComposeMessage::SubmitClicked));
    assert!(compose_state(&app).error().is_some());

    fill_form(&mut app);
    send(&mut app, Message::Compose(ComposeMessage::SubmitClicked));

    let compose = compose_state(&app);
    assert_eq!(compose.error(), None);
    assert!(compose.is_submitting());
}

#[test]
fn validation_failure_replaces_previous_success() {
    let (mut app, _store) = new_app();
    open_compose(&mut app);
    fill_form(&mut app);

    send(&mut app, Message::Compose(ComposeMessage::SubmitClicked));
    send(
        &mut app,
        Message::Compose(ComposeMessage::Submitted {
            seq: 1,
            result: Ok(late_post("Need insulin")),
        }),
    );
    assert!(compose_state(&app).is_success());

    send(
        &mut app,
        Message::Compose(ComposeMessage::TitleChanged(String::new())),
    );
    send(&mut app, Message::Compose(ComposeMessage::SubmitClicked));

    let compose = compose_state(&app);
    assert!(!compose.is_success());
    assert_eq!(compose.error(), Some(&ComposeError::MissingFields));
}

#[test]
fn reset_returns_to_a_fresh_form() {
    let (mut app, _store) = new_app();
    open_compose(&mut app);
    fill_form(&mut app);

    send(&mut app, Message::Compose(ComposeMessage::SubmitClicked));
    send(
        &mut app,
        Message::Compose(ComposeMessage::Submitted {
            seq: 1,
            result: Ok(late_post("Need insulin")),
        }),
    );
    send(&mut app, Message::Compose(ComposeMessage::ResetClicked));

    let compose = compose_state(&app);
    assert_eq!(*compose, ComposeViewState::default());
    assert_eq!(compose.phase, ComposePhase::Editing);
}

#[test]
fn second_successful_submission_appends_again() {
    let (mut app, _store) = new_app();
    open_compose(&mut app);
    fill_form(&mut app);

    send(&mut app, Message::Compose(ComposeMessage::SubmitClicked));
    send(
        &mut app,
        Message::Compose(ComposeMessage::Submitted {
            seq: 1,
            result: Ok(late_post("First")),
        }),
    );
    send(&mut app, Message::Compose(ComposeMessage::ResetClicked));
    fill_form(&mut app);
    send(&mut app, Message::Compose(ComposeMessage::SubmitClicked));
    send(
        &mut app,
        Message::Compose(ComposeMessage::Submitted {
            seq: 2,
            result: Ok(late_post("Second")),
        }),
    );

    assert_eq!(app.state.posts.len(), 2);
    let titles: Vec<&str> = app
        .state
        .posts
        .items()
        .iter()
        .map(|post| post.title.as_str())
        .collect();
    assert_eq!(titles, ["First", "Second"]);
}
