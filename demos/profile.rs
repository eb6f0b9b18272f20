//! Profile form demo
//!
//! Simulates three reruns of a host page that keeps a user profile in a
//! `profile` namespace of the session store.
//!
//! ```bash
//! RUST_LOG=session_state=debug cargo run --example profile
//! ```

use session_state::prelude::*;
use tracing_subscriber::EnvFilter;

fn render(state: &StateStore<&MemoryStore>, saved: Option<(&str, &str)>) -> Result<()> {
    let profile = state.create_namespace("profile")?;

    profile.init("name", "")?;
    profile.init("email", "")?;
    profile.init("preferences", serde_json::json!({}))?;

    if let Some((name, email)) = saved {
        profile.set("name", name)?;
        profile.set("email", email)?;
        profile.set(
            "preferences",
            serde_json::json!({"dark_mode": true, "notifications": false}),
        )?;
    }

    let name = profile.get("name")?;
    let email = profile.get("email")?;
    let dark_mode = profile
        .get("preferences")?
        .field("dark_mode")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    println!(
        "name={:?} email={:?} dark_mode={}",
        name.as_str().unwrap_or_default(),
        email.as_str().unwrap_or_default(),
        dark_mode
    );
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // The host owns the session store; the state layer borrows it per run
    let session = MemoryStore::new();
    let state = StateStore::new(&session);

    render(&state, None)?;
    render(&state, Some(("Alice", "alice@example.com")))?;
    render(&state, None)?;

    println!("namespaces in use: {:?}", state.namespaces()?);

    state.create_namespace("profile")?.clear()?;
    println!("after reset: {} keys", session.len());
    Ok(())
}
