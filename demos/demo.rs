//! Walk through a workflow's documents and print what was extracted.
//!
//! ```text
//! NANONETS_API_KEY=... RUST_LOG=nanonets=debug \
//!     cargo run --example demo -- <workflow_id> [document_id] [page_id] [new_value]
//! ```

use nanonets::{ClientBuilder, PageRef, UpdateFieldValueRequest};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), nanonets::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let Some(workflow_id) = args.next() else {
        eprintln!("usage: demo <workflow_id> [document_id] [page_id] [new_value]");
        return Ok(());
    };

    let client = ClientBuilder::from_env()?.build()?;

    let documents = client.documents().list_page(&workflow_id, 1, 10).await?;
    println!("Documents: {}", documents.len());
    for document in &documents {
        println!(
            "  {} [{}] {}",
            document.document_id, document.status, document.original_document_name
        );
    }

    let Some(document_id) = args.next() else {
        return Ok(());
    };
    let document = client.documents().get(&workflow_id, &document_id).await?;
    println!("Document {} has {} page(s)", document.document_id, document.pages.len());

    let Some(page_id) = args.next() else {
        return Ok(());
    };
    let page = client
        .documents()
        .page(&workflow_id, &document_id, &page_id)
        .await?;
    for (name, values) in &page.data.fields {
        for value in values {
            println!("  {name} = {} ({:.2})", value.value, value.confidence);
        }
    }

    // Moderation: correct the first extracted value on the page, if asked to.
    if let Some(new_value) = args.next() {
        if let Some(field) = page.data.fields.values().flatten().next() {
            client
                .moderation()
                .update_field(
                    PageRef::new(&workflow_id, &document_id, &page_id),
                    &field.field_data_id,
                    &UpdateFieldValueRequest { value: new_value },
                )
                .await?;
            println!("Updated {}", field.field_data_id);
        }
    }

    Ok(())
}
