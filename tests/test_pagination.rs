mod helpers;

use helpers::{mounted_controller, visible_ids};
use notesview::application::{NotesController, Outcome};
use notesview::domain::{Limit, PageRequest};
use notesview::util::testing::{ApiCall, ApiOperation, MockNotesApi};

#[tokio::test]
async fn given_page_and_limit_when_fetching_then_requests_exactly_that_pair() {
    // Arrange
    let api = MockNotesApi::builder().with_notes(30).build();
    let mut controller = NotesController::starting_at(api, 3, 7);

    // Act
    let outcome = controller.mount().await;

    // Assert
    assert_eq!(outcome, Outcome::Applied);
    assert_eq!(
        controller.api().calls(),
        vec![ApiCall::List(PageRequest::new(3, 7))]
    );
    assert_eq!(
        visible_ids(&controller),
        vec!["note-15", "note-16", "note-17", "note-18", "note-19", "note-20", "note-21"]
    );
}

#[tokio::test]
async fn given_twelve_notes_when_clicking_next_three_times_then_lands_on_last_page() {
    // Arrange
    let mut controller = mounted_controller(12, 5).await;
    assert_eq!(controller.view().total_pages(), 3);
    assert!(controller.view().previous_disabled());

    // Act
    let outcomes = vec![
        controller.next_page().await,
        controller.next_page().await,
        controller.next_page().await,
    ];

    // Assert
    assert_eq!(
        outcomes,
        vec![Outcome::Applied, Outcome::Applied, Outcome::Ignored]
    );
    assert_eq!(controller.view().page(), 3);
    assert!(controller.view().next_disabled());
    assert!(!controller.view().previous_disabled());
    assert_eq!(visible_ids(&controller), vec!["note-11", "note-12"]);
    assert_eq!(controller.api().calls().len(), 3);
}

#[tokio::test]
async fn given_each_page_when_fetched_then_collection_is_replaced_not_merged() {
    let mut controller = mounted_controller(12, 5).await;

    controller.next_page().await;

    assert_eq!(
        visible_ids(&controller),
        vec!["note-6", "note-7", "note-8", "note-9", "note-10"]
    );
}

#[tokio::test]
async fn given_last_page_when_going_back_then_previous_page_is_fetched() {
    let mut controller = mounted_controller(12, 5).await;
    controller.go_to_page(3).await;

    let outcome = controller.previous_page().await;

    assert_eq!(outcome, Outcome::Applied);
    assert_eq!(controller.view().page(), 2);
    assert_eq!(
        controller.api().calls().last(),
        Some(&ApiCall::List(PageRequest::new(2, 5)))
    );
}

#[tokio::test]
async fn given_page_beyond_total_when_jumping_then_nothing_is_requested() {
    let mut controller = mounted_controller(12, 5).await;

    assert_eq!(controller.go_to_page(4).await, Outcome::Ignored);
    assert_eq!(controller.go_to_page(0).await, Outcome::Ignored);

    assert_eq!(controller.view().page(), 1);
    assert_eq!(controller.api().calls().len(), 1);
}

#[tokio::test]
async fn given_failed_fetch_when_paging_then_bounds_stay_at_last_known_total() {
    // Arrange
    let mut controller = mounted_controller(12, 5).await;
    controller.api().fail(ApiOperation::List);

    // Act
    let outcome = controller.next_page().await;

    // Assert - stale rows remain, total pages unchanged
    assert_eq!(outcome, Outcome::Failed);
    assert_eq!(controller.view().total_pages(), 3);
    assert_eq!(visible_ids(&controller)[0], "note-1");

    // Recovery on the next change
    controller.api().recover(ApiOperation::List);
    assert_eq!(controller.next_page().await, Outcome::Applied);
    assert_eq!(visible_ids(&controller), vec!["note-11", "note-12"]);
}

#[tokio::test]
async fn given_limit_keystrokes_when_typing_then_fetches_per_valid_value() {
    // Arrange
    let mut controller = mounted_controller(12, 5).await;

    // Act - clear the field, then type "1", "12"
    controller.set_limit("").await;
    controller.set_limit("1").await;
    controller.set_limit("12").await;

    // Assert
    assert_eq!(controller.view().limit(), Limit::Value(12));
    assert_eq!(
        controller.api().calls(),
        vec![
            ApiCall::List(PageRequest::new(1, 5)),
            ApiCall::List(PageRequest::new(1, 1)),
            ApiCall::List(PageRequest::new(1, 12)),
        ]
    );
    assert_eq!(controller.view().total_pages(), 1);
    assert!(controller.view().next_disabled());
}

#[tokio::test]
async fn given_blank_limit_when_refreshing_then_no_malformed_request_is_sent() {
    let mut controller = mounted_controller(12, 5).await;
    controller.set_limit("").await;

    let outcome = controller.refresh().await;

    assert_eq!(outcome, Outcome::Ignored);
    assert_eq!(controller.view().limit(), Limit::Blank);
    assert_eq!(controller.api().calls().len(), 1);
}

#[tokio::test]
async fn given_empty_store_when_mounting_then_shows_no_notes() {
    let controller = mounted_controller(0, 5).await;

    assert!(controller.view().notes().is_empty());
    assert_eq!(controller.view().total_pages(), 0);
}
