use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    doc_extract::cli::run().await
}
