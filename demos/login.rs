//! Log in and read back a private repository with the obtained token.
//!
//! ```bash
//! cargo run --example login -- <username> <password> <repository>
//! ```

use docker_hub_client::{Authenticator, RegistryContext, Repository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (username, password, repository) = match (args.next(), args.next(), args.next()) {
        (Some(u), Some(p), Some(r)) => (u, p, r),
        _ => anyhow::bail!("usage: login <username> <password> <repository>"),
    };

    let mut ctx = RegistryContext::new()?;
    let response = Authenticator::new(&ctx).login(&username, &password).await?;
    let token = response
        .token
        .ok_or_else(|| anyhow::anyhow!("login reply carried no token"))?;

    // The login call does not touch the context; the token has to be
    // stored back explicitly before authenticated requests work.
    ctx.set_auth_token(token);

    let repo = Repository::new(&ctx, &username, repository);
    println!("{:#}", repo.info().await?);

    Ok(())
}
