//! Shared state of a single book store scenario run.

use crate::recorded_response::RecordedResponse;
use secrecy::{ExposeSecret, Secret};

/// Values handed from one scenario step to the next.
///
/// Every field starts out unset and any field may be overwritten or cleared at
/// any time. Nothing here is validated and no field depends on another.
#[derive(Clone, Debug, Default)]
pub struct BookStoreData {
    pub valid_email_used: Option<String>,
    pub valid_password_used: Option<Secret<String>>,
    pub access_token: Option<Secret<String>>,
    pub sign_up_response: Option<RecordedResponse>,
    pub log_in_response: Option<RecordedResponse>,
    pub add_book_response: Option<RecordedResponse>,
    pub edit_book_response: Option<RecordedResponse>,
    pub get_book_details_by_id: Option<RecordedResponse>,
    /// One entry per listing call, oldest first.
    pub fetch_all_books: Vec<RecordedResponse>,
    pub delete_book_response: Option<RecordedResponse>,
}

impl BookStoreData {
    pub fn new() -> Self {
        Self::default()
    }
}

fn same_secret(a: &Option<Secret<String>>, b: &Option<Secret<String>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.expose_secret() == b.expose_secret(),
        (None, None) => true,
        _ => false,
    }
}

// `Secret` has no `PartialEq`, so secrets are compared on their exposed value.
impl PartialEq for BookStoreData {
    fn eq(&self, other: &Self) -> bool {
        self.valid_email_used == other.valid_email_used
            && same_secret(&self.valid_password_used, &other.valid_password_used)
            && same_secret(&self.access_token, &other.access_token)
            && self.sign_up_response == other.sign_up_response
            && self.log_in_response == other.log_in_response
            && self.add_book_response == other.add_book_response
            && self.edit_book_response == other.edit_book_response
            && self.get_book_details_by_id == other.get_book_details_by_id
            && self.fetch_all_books == other.fetch_all_books
            && self.delete_book_response == other.delete_book_response
    }
}

impl Eq for BookStoreData {}
