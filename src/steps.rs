//! Scenario steps.
//!
//! Each step performs one call against the book store and stores what came
//! back in the scenario's [`BookStoreData`], where later steps and assertions
//! pick it up.

use crate::book_store_client::BookStoreClient;
use crate::book_store_data::BookStoreData;
use crate::domain::{AccessToken, Book, BookPayload, Credentials};
use secrecy::ExposeSecret;

#[derive(thiserror::Error)]
pub enum StepError {
    #[error("Failed to reach the book store.")]
    Request(#[from] reqwest::Error),
    #[error("No email and password have been recorded for this scenario.")]
    MissingCredentials,
    #[error("No {0} has been recorded for this scenario.")]
    MissingResponse(&'static str),
    #[error("The book store answered with an unexpected body.")]
    UnexpectedBody(#[source] serde_json::Error),
}

impl std::fmt::Debug for StepError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

/// Register `credentials` and remember them for the login step.
///
/// The credentials are recorded before the request goes out, so they stay
/// visible even when the book store cannot be reached.
#[tracing::instrument(name = "Step: sign up", skip_all)]
pub async fn sign_up(
    client: &BookStoreClient,
    data: &mut BookStoreData,
    credentials: Credentials,
) -> Result<(), StepError> {
    data.valid_email_used = Some(credentials.email.clone());
    data.valid_password_used = Some(credentials.password.clone());
    data.sign_up_response = Some(client.sign_up(&credentials).await?);
    Ok(())
}

/// Log in with the credentials recorded by [`sign_up`].
///
/// A successful login also stores the returned access token. The response is
/// recorded even when its body turns out not to be a token.
#[tracing::instrument(name = "Step: log in", skip_all)]
pub async fn log_in(client: &BookStoreClient, data: &mut BookStoreData) -> Result<(), StepError> {
    let credentials = match (&data.valid_email_used, &data.valid_password_used) {
        (Some(email), Some(password)) => {
            Credentials::new(email.clone(), password.expose_secret().clone())
        }
        _ => return Err(StepError::MissingCredentials),
    };
    let response = client.log_in(&credentials).await?;
    if !response.status().is_success() {
        data.log_in_response = Some(response);
        return Ok(());
    }
    let token = response.json::<AccessToken>();
    data.log_in_response = Some(response);
    data.access_token = Some(token.map_err(StepError::UnexpectedBody)?.access_token);
    Ok(())
}

/// Log in with arbitrary credentials, keeping only the response.
#[tracing::instrument(name = "Step: log in with", skip_all)]
pub async fn log_in_with(
    client: &BookStoreClient,
    data: &mut BookStoreData,
    credentials: &Credentials,
) -> Result<(), StepError> {
    data.log_in_response = Some(client.log_in(credentials).await?);
    Ok(())
}

#[tracing::instrument(name = "Step: add book", skip_all)]
pub async fn add_book(
    client: &BookStoreClient,
    data: &mut BookStoreData,
    book: &BookPayload,
) -> Result<(), StepError> {
    let response = client.add_book(data.access_token.as_ref(), book).await?;
    data.add_book_response = Some(response);
    Ok(())
}

#[tracing::instrument(name = "Step: edit book", skip(client, data, book))]
pub async fn edit_book(
    client: &BookStoreClient,
    data: &mut BookStoreData,
    book_id: i64,
    book: &BookPayload,
) -> Result<(), StepError> {
    let response = client
        .edit_book(data.access_token.as_ref(), book_id, book)
        .await?;
    data.edit_book_response = Some(response);
    Ok(())
}

#[tracing::instrument(name = "Step: get book details by id", skip(client, data))]
pub async fn get_book_details_by_id(
    client: &BookStoreClient,
    data: &mut BookStoreData,
    book_id: i64,
) -> Result<(), StepError> {
    let response = client
        .get_book_by_id(data.access_token.as_ref(), book_id)
        .await?;
    data.get_book_details_by_id = Some(response);
    Ok(())
}

/// List the books and append the response to the ones already recorded.
#[tracing::instrument(name = "Step: fetch all books", skip_all)]
pub async fn fetch_all_books(
    client: &BookStoreClient,
    data: &mut BookStoreData,
) -> Result<(), StepError> {
    let response = client.fetch_all_books(data.access_token.as_ref()).await?;
    data.fetch_all_books.push(response);
    Ok(())
}

#[tracing::instrument(name = "Step: delete book", skip(client, data))]
pub async fn delete_book(
    client: &BookStoreClient,
    data: &mut BookStoreData,
    book_id: i64,
) -> Result<(), StepError> {
    let response = client
        .delete_book(data.access_token.as_ref(), book_id)
        .await?;
    data.delete_book_response = Some(response);
    Ok(())
}

/// Id of the book created by [`add_book`].
pub fn created_book_id(data: &BookStoreData) -> Result<i64, StepError> {
    let response = data
        .add_book_response
        .as_ref()
        .ok_or(StepError::MissingResponse("add book response"))?;
    let book: Book = response.json().map_err(StepError::UnexpectedBody)?;
    Ok(book.id)
}
