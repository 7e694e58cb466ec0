use crate::helpers::{generate_random_book, logged_in_data, spawn_book_store, stored_book};
use book_store_scenarios::book_store_data::BookStoreData;
use book_store_scenarios::domain::Book;
use book_store_scenarios::steps;
use claims::{assert_ok, assert_ok_eq};

#[tokio::test]
async fn add_book_records_the_created_book() {
    // Arrange
    let book_store = spawn_book_store().await;
    let payload = generate_random_book();
    let book = stored_book(7, &payload);
    book_store.mount_books(&book).await;
    let mut data = logged_in_data();

    // Act
    let outcome = steps::add_book(&book_store.client, &mut data, &payload).await;

    // Assert
    assert_ok!(outcome);
    let created: Book = data.add_book_response.as_ref().unwrap().json().unwrap();
    assert_eq!(created, book);
    assert_ok_eq!(steps::created_book_id(&data), 7);
}

#[tokio::test]
async fn add_book_without_logging_in_is_rejected() {
    // Arrange
    let book_store = spawn_book_store().await;
    let payload = generate_random_book();
    book_store.mount_books(&stored_book(1, &payload)).await;
    let mut data = BookStoreData::new();

    // Act
    let outcome = steps::add_book(&book_store.client, &mut data, &payload).await;

    // Assert
    assert_ok!(outcome);
    let response = data.add_book_response.as_ref().unwrap();
    assert_eq!(response.status().as_u16(), 403);
    let body: serde_json::Value = response.json().unwrap();
    assert_eq!(body["detail"], "Not authenticated");
}

#[tokio::test]
async fn edit_and_get_record_their_own_responses() {
    // Arrange
    let book_store = spawn_book_store().await;
    let book = stored_book(11, &generate_random_book());
    book_store.mount_books(&book).await;
    let mut data = logged_in_data();

    // Act
    steps::edit_book(&book_store.client, &mut data, book.id, &book.payload())
        .await
        .unwrap();
    steps::get_book_details_by_id(&book_store.client, &mut data, book.id)
        .await
        .unwrap();

    // Assert
    let edited: Book = data.edit_book_response.as_ref().unwrap().json().unwrap();
    let fetched: Book = data.get_book_details_by_id.as_ref().unwrap().json().unwrap();
    assert_eq!(edited, book);
    assert_eq!(fetched, book);
    assert!(data.add_book_response.is_none());
    assert!(data.delete_book_response.is_none());
}

#[tokio::test]
async fn fetch_all_books_appends_one_response_per_call() {
    // Arrange
    let book_store = spawn_book_store().await;
    let book = stored_book(3, &generate_random_book());
    book_store.mount_books(&book).await;
    let mut data = logged_in_data();

    // Act
    steps::fetch_all_books(&book_store.client, &mut data)
        .await
        .unwrap();
    data.access_token = None;
    steps::fetch_all_books(&book_store.client, &mut data)
        .await
        .unwrap();

    // Assert
    assert_eq!(data.fetch_all_books.len(), 2);
    let books: Vec<Book> = data.fetch_all_books[0].json().unwrap();
    assert_eq!(books, vec![book]);
    assert_eq!(data.fetch_all_books[1].status().as_u16(), 403);
}

#[tokio::test]
async fn looking_up_an_unknown_book_records_the_rejection() {
    // Arrange
    let book_store = spawn_book_store().await;
    wiremock::Mock::given(wiremock::matchers::path("/books/999"))
        .and(wiremock::matchers::method("GET"))
        .respond_with(
            wiremock::ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({"detail": "Book not found"})),
        )
        .mount(&book_store.server)
        .await;
    let mut data = logged_in_data();

    // Act
    let outcome = steps::get_book_details_by_id(&book_store.client, &mut data, 999).await;

    // Assert
    assert_ok!(outcome);
    let response = data.get_book_details_by_id.as_ref().unwrap();
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn delete_book_records_the_response() {
    // Arrange
    let book_store = spawn_book_store().await;
    let book = stored_book(5, &generate_random_book());
    book_store.mount_books(&book).await;
    let mut data = logged_in_data();

    // Act
    let outcome = steps::delete_book(&book_store.client, &mut data, book.id).await;

    // Assert
    assert_ok!(outcome);
    let body: serde_json::Value = data.delete_book_response.as_ref().unwrap().json().unwrap();
    assert_eq!(body["message"], "Book deleted successfully");
}
