use anyhow::Context;
use book_store_scenarios::book_store_data::BookStoreData;
use book_store_scenarios::configuration::get_configuration;
use book_store_scenarios::domain::BookPayload;
use book_store_scenarios::scenario::run_book_lifecycle;
use book_store_scenarios::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("book-lifecycle".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().context("Failed to read configuration.")?;
    let client = configuration
        .book_store
        .client()
        .context("Failed to build the book store client.")?;
    tracing::info!(base_url = %client.base_url(), "running book lifecycle scenario");

    let book = BookPayload {
        name: "The Left Hand of Darkness".into(),
        author: "Ursula K. Le Guin".into(),
        published_year: 1969,
        book_summary: "An envoy on the winter planet Gethen.".into(),
    };
    let edited_book = BookPayload {
        book_summary: "An envoy learns to live on Gethen.".into(),
        ..book.clone()
    };

    let mut data = BookStoreData::new();
    let outcome = run_book_lifecycle(&client, &mut data, &book, &edited_book).await;

    tracing::info!(
        email = data.valid_email_used.as_deref().unwrap_or("<none>"),
        listings = data.fetch_all_books.len(),
        logged_in = data.access_token.is_some(),
        "scenario finished"
    );
    outcome
}
