//! Account and profile commands.

use anyhow::Result;

use crate::api::ApiClient;

pub async fn signup(api: &ApiClient, username: &str, password: &str) -> Result<()> {
    let auth = api.signup(username, password).await?;
    println!("Account created for {username}");
    print_token_hint(&auth.token);
    Ok(())
}

pub async fn login(api: &ApiClient, username: &str, password: &str) -> Result<()> {
    let auth = api.login(username, password).await?;
    println!("Signed in as {username}");
    print_token_hint(&auth.token);
    Ok(())
}

pub async fn profile(
    api: &ApiClient,
    full_name: Option<&str>,
    avatar_url: Option<&str>,
    bio: Option<&str>,
) -> Result<()> {
    let profile = if full_name.is_some() || avatar_url.is_some() || bio.is_some() {
        api.update_profile(full_name, avatar_url, bio).await?
    } else {
        api.profile().await?
    };

    println!("{}", profile.username);
    if let Some(full_name) = &profile.full_name {
        println!("Name: {full_name}");
    }
    if let Some(bio) = &profile.bio {
        println!("Bio: {bio}");
    }
    if let Some(avatar_url) = &profile.avatar_url {
        println!("Avatar: {avatar_url}");
    }
    println!("Member since {}", profile.created_at.format("%Y-%m-%d"));
    Ok(())
}

pub async fn ping(api: &ApiClient) -> Result<()> {
    let message = api.ping().await?;
    println!("{message}");
    Ok(())
}

fn print_token_hint(token: &str) {
    println!();
    println!("Token (export it for the other commands):");
    println!("  export LADLE_TOKEN={token}");
}
