//! Tests for domain entities and list state.

use afya_model::{Drug, ListState, Post, PostId, PostType};
use chrono::Utc;

fn make_post(title: &str) -> Post {
    Post {
        id: PostId::new(),
        title: title.to_string(),
        drug_name: "Paracetamol".to_string(),
        content: "Take twice daily".to_string(),
        location: "Nairobi".to_string(),
        image_url: None,
        post_type: PostType::Request,
        created_at: Utc::now(),
    }
}

#[test]
fn test_post_ids_are_unique() {
    assert_ne!(PostId::new(), PostId::new());
}

#[test]
fn test_post_type_defaults_to_request() {
    assert_eq!(PostType::default(), PostType::Request);
}

#[test]
fn test_post_type_labels() {
    assert_eq!(PostType::Request.to_string(), "Request");
    assert_eq!(PostType::Offer.to_string(), "Offer");
    assert_eq!(PostType::ALL.len(), 2);
}

#[test]
fn test_drug_constructor() {
    let drug = Drug::new("Ibuprofen", "Anti-inflammatory");
    assert_eq!(drug.name, "Ibuprofen");
    assert_eq!(drug.details, "Anti-inflammatory");
}

#[test]
fn test_list_state_starts_idle_and_empty() {
    let state: ListState<Post> = ListState::new();
    assert!(state.is_empty());
    assert!(!state.is_loading());
    assert!(state.error().is_none());
}

#[test]
fn test_begin_loading_clears_previous_error() {
    let mut state: ListState<Post> = ListState::new();
    state.fail("store unavailable");
    assert_eq!(state.error(), Some("store unavailable"));

    state.begin_loading();
    assert!(state.is_loading());
    assert!(state.error().is_none());
}

#[test]
fn test_replace_all_resolves_the_load() {
    let mut state = ListState::new();
    state.begin_loading();
    state.replace_all(vec![make_post("Flu tips"), make_post("Allergy season")]);

    assert!(!state.is_loading());
    assert!(state.error().is_none());
    assert_eq!(state.len(), 2);
    assert_eq!(state.items()[0].title, "Flu tips");
    assert_eq!(state.items()[1].title, "Allergy season");
}

#[test]
fn test_fail_keeps_existing_items() {
    let mut state = ListState::new();
    state.replace_all(vec![make_post("Flu tips")]);

    state.begin_loading();
    state.fail("timed out");

    assert!(!state.is_loading());
    assert_eq!(state.error(), Some("timed out"));
    assert_eq!(state.len(), 1);
}

#[test]
fn test_append_preserves_arrival_order() {
    let mut state = ListState::new();
    state.append(make_post("first"));
    state.append(make_post("second"));
    state.append(make_post("third"));

    let titles: Vec<&str> = state.items().iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["first", "second", "third"]);
}

#[test]
fn test_append_does_not_dedup() {
    let mut state = ListState::new();
    state.append(Drug::new("Paracetamol", "Pain relief"));
    state.append(Drug::new("Paracetamol", "Pain relief"));
    assert_eq!(state.len(), 2);
}
