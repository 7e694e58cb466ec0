mod book;
mod credentials;

pub use book::{Book, BookPayload};
pub use credentials::{AccessToken, Credentials};
