use crate::helpers::{TEST_ACCESS_TOKEN, generate_random_book, spawn_book_store, stored_book};
use book_store_scenarios::book_store_data::BookStoreData;
use book_store_scenarios::scenario::run_book_lifecycle;
use claims::{assert_err, assert_ok};
use secrecy::ExposeSecret;

#[tokio::test]
async fn the_full_lifecycle_fills_every_field() {
    // Arrange
    let book_store = spawn_book_store().await;
    book_store.mount_sign_up(200).await;
    book_store.mount_log_in_success().await;
    let payload = generate_random_book();
    let book = stored_book(21, &payload);
    book_store.mount_books(&book).await;
    let mut data = BookStoreData::new();

    // Act
    let outcome = run_book_lifecycle(&book_store.client, &mut data, &payload, &payload).await;

    // Assert
    assert_ok!(outcome);
    assert!(data.valid_email_used.is_some());
    assert!(data.valid_password_used.is_some());
    assert_eq!(
        data.access_token.as_ref().unwrap().expose_secret(),
        TEST_ACCESS_TOKEN
    );
    assert!(data.sign_up_response.is_some());
    assert!(data.log_in_response.is_some());
    assert!(data.add_book_response.is_some());
    assert!(data.edit_book_response.is_some());
    assert!(data.get_book_details_by_id.is_some());
    assert_eq!(data.fetch_all_books.len(), 2);
    assert!(data.delete_book_response.is_some());
}

#[tokio::test]
async fn the_lifecycle_stops_at_the_first_rejected_step() {
    // Arrange
    let book_store = spawn_book_store().await;
    book_store.mount_sign_up(200).await;
    book_store.mount_log_in_failure().await;
    let payload = generate_random_book();
    let mut data = BookStoreData::new();

    // Act
    let outcome = run_book_lifecycle(&book_store.client, &mut data, &payload, &payload).await;

    // Assert
    let error = assert_err!(outcome);
    assert!(error.to_string().contains("`log in`"));
    assert!(data.log_in_response.is_some());
    assert!(data.access_token.is_none());
    assert!(data.add_book_response.is_none());
    assert!(data.fetch_all_books.is_empty());
}
