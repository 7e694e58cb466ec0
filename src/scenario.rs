use crate::book_store_client::BookStoreClient;
use crate::book_store_data::BookStoreData;
use crate::domain::{BookPayload, Credentials};
use crate::recorded_response::RecordedResponse;
use crate::steps;
use anyhow::Context;

/// Walk a book through its whole life: sign up, log in, add it, list it,
/// edit it, look it up, delete it, list again.
///
/// Every response ends up in `data`. The run stops at the first step that
/// fails or that the book store rejects.
#[tracing::instrument(name = "Running the book lifecycle scenario", skip_all)]
pub async fn run_book_lifecycle(
    client: &BookStoreClient,
    data: &mut BookStoreData,
    book: &BookPayload,
    edited_book: &BookPayload,
) -> Result<(), anyhow::Error> {
    steps::sign_up(client, data, Credentials::generate())
        .await
        .context("Failed to sign up.")?;
    ensure_success("sign up", data.sign_up_response.as_ref())?;

    steps::log_in(client, data)
        .await
        .context("Failed to log in.")?;
    ensure_success("log in", data.log_in_response.as_ref())?;

    steps::add_book(client, data, book)
        .await
        .context("Failed to add a book.")?;
    ensure_success("add book", data.add_book_response.as_ref())?;
    let book_id = steps::created_book_id(data).context("Failed to read the created book.")?;
    tracing::info!(book_id, "book created");

    steps::fetch_all_books(client, data)
        .await
        .context("Failed to fetch all books.")?;
    ensure_success("fetch all books", data.fetch_all_books.last())?;

    steps::edit_book(client, data, book_id, edited_book)
        .await
        .context("Failed to edit the book.")?;
    ensure_success("edit book", data.edit_book_response.as_ref())?;

    steps::get_book_details_by_id(client, data, book_id)
        .await
        .context("Failed to get the book details.")?;
    ensure_success("get book details", data.get_book_details_by_id.as_ref())?;

    steps::delete_book(client, data, book_id)
        .await
        .context("Failed to delete the book.")?;
    ensure_success("delete book", data.delete_book_response.as_ref())?;

    steps::fetch_all_books(client, data)
        .await
        .context("Failed to fetch all books.")?;
    ensure_success("fetch all books", data.fetch_all_books.last())?;

    Ok(())
}

fn ensure_success(step: &str, response: Option<&RecordedResponse>) -> Result<(), anyhow::Error> {
    let response = response.with_context(|| format!("No response recorded for `{}`.", step))?;
    if !response.status().is_success() {
        anyhow::bail!(
            "`{}` was rejected with {}: {}",
            step,
            response.status(),
            response.text()
        );
    }
    Ok(())
}
