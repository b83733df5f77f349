//! Fetch public repository metadata and the first page of tags.
//!
//! ```bash
//! cargo run --example info_and_tags
//! ```

use docker_hub_client::{RegistryContext, Repository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let ctx = RegistryContext::new()?;
    let repo = Repository::new(&ctx, "library", "alpine");

    let info = repo.info().await?;
    println!("{:#}", info);

    println!("\nNow the first 5 tags");
    let tags = repo.tags().await?;
    println!("{:#}", tags);

    Ok(())
}
