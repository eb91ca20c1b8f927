//! Auth command handlers.
//!
//! Read-side helpers over the same secret file the session store uses.
//! Tokens are only ever printed masked.

use anyhow::Result;
use mealdeck_core::session::{SecretFile, TokenStore, mask_token};

pub fn status() -> Result<()> {
    let store = SecretFile::at_default_path();
    match store.get()? {
        Some(token) if !token.is_empty() => {
            println!("Logged in (token {})", mask_token(&token));
        }
        _ => println!("Not logged in."),
    }
    Ok(())
}

pub fn logout() -> Result<()> {
    let store = SecretFile::at_default_path();
    let had_token = store.get()?.is_some();
    store.delete()?;
    if had_token {
        println!("Logged out.");
    } else {
        println!("No stored session.");
    }
    Ok(())
}
