use crate::domain::{BookPayload, Credentials};
use crate::recorded_response::RecordedResponse;
use reqwest::{Client, RequestBuilder};
use secrecy::{ExposeSecret, Secret};

/// HTTP client for the book store API.
///
/// Error statuses are returned as recorded responses, not as errors, so that
/// scenarios can assert on rejected requests. Only transport failures and
/// timeouts surface as `reqwest::Error`.
#[derive(Clone, Debug)]
pub struct BookStoreClient {
    base_url: String,
    http_client: Client,
}

#[derive(serde::Serialize)]
struct CredentialsRequest<'a> {
    email: &'a str,
    password: &'a str,
}

impl<'a> From<&'a Credentials> for CredentialsRequest<'a> {
    fn from(credentials: &'a Credentials) -> Self {
        Self {
            email: &credentials.email,
            password: credentials.password.expose_secret(),
        }
    }
}

impl BookStoreClient {
    pub fn new(base_url: String, timeout: std::time::Duration) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[tracing::instrument(name = "Signing up", skip(self, credentials), fields(email = %credentials.email))]
    pub async fn sign_up(
        &self,
        credentials: &Credentials,
    ) -> Result<RecordedResponse, reqwest::Error> {
        let request = self
            .http_client
            .post(format!("{}/signup", self.base_url))
            .json(&CredentialsRequest::from(credentials));
        send(request).await
    }

    #[tracing::instrument(name = "Logging in", skip(self, credentials), fields(email = %credentials.email))]
    pub async fn log_in(
        &self,
        credentials: &Credentials,
    ) -> Result<RecordedResponse, reqwest::Error> {
        let request = self
            .http_client
            .post(format!("{}/login", self.base_url))
            .json(&CredentialsRequest::from(credentials));
        send(request).await
    }

    #[tracing::instrument(name = "Adding a book", skip(self, token), fields(name = %book.name))]
    pub async fn add_book(
        &self,
        token: Option<&Secret<String>>,
        book: &BookPayload,
    ) -> Result<RecordedResponse, reqwest::Error> {
        let request = self
            .http_client
            .post(format!("{}/books/", self.base_url))
            .json(book);
        send(authorize(request, token)).await
    }

    #[tracing::instrument(name = "Editing a book", skip(self, token, book))]
    pub async fn edit_book(
        &self,
        token: Option<&Secret<String>>,
        book_id: i64,
        book: &BookPayload,
    ) -> Result<RecordedResponse, reqwest::Error> {
        let request = self
            .http_client
            .put(format!("{}/books/{}", self.base_url, book_id))
            .json(book);
        send(authorize(request, token)).await
    }

    #[tracing::instrument(name = "Getting book details", skip(self, token))]
    pub async fn get_book_by_id(
        &self,
        token: Option<&Secret<String>>,
        book_id: i64,
    ) -> Result<RecordedResponse, reqwest::Error> {
        let request = self
            .http_client
            .get(format!("{}/books/{}", self.base_url, book_id));
        send(authorize(request, token)).await
    }

    #[tracing::instrument(name = "Fetching all books", skip(self, token))]
    pub async fn fetch_all_books(
        &self,
        token: Option<&Secret<String>>,
    ) -> Result<RecordedResponse, reqwest::Error> {
        let request = self.http_client.get(format!("{}/books/", self.base_url));
        send(authorize(request, token)).await
    }

    #[tracing::instrument(name = "Deleting a book", skip(self, token))]
    pub async fn delete_book(
        &self,
        token: Option<&Secret<String>>,
        book_id: i64,
    ) -> Result<RecordedResponse, reqwest::Error> {
        let request = self
            .http_client
            .delete(format!("{}/books/{}", self.base_url, book_id));
        send(authorize(request, token)).await
    }
}

fn authorize(request: RequestBuilder, token: Option<&Secret<String>>) -> RequestBuilder {
    match token {
        Some(token) => request.bearer_auth(token.expose_secret()),
        None => request,
    }
}

async fn send(request: RequestBuilder) -> Result<RecordedResponse, reqwest::Error> {
    let response = request.send().await.map_err(|e| {
        tracing::error!("Failed to reach the book store: {:?}", e);
        e
    })?;
    let recorded = RecordedResponse::capture(response).await?;
    tracing::debug!(status = %recorded.status(), "book store responded");
    Ok(recorded)
}
