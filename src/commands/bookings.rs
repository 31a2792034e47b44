//! `pomade bookings` - log in and list the account's bookings

use anyhow::Result;

use crate::presentation::{output, ConcreteClient};

pub fn cmd_bookings(client: &ConcreteClient, email: &str, password: &str, json: bool) -> Result<()> {
    let auth = client.login(email, password)?;
    let Some(user) = auth.user else {
        anyhow::bail!("{}", auth.message);
    };

    let bookings = client.get_bookings(&user.id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&bookings)?);
        return Ok(());
    }

    if bookings.is_empty() {
        println!("No bookings yet for {}.", user.email);
        return Ok(());
    }

    println!("Bookings for {}:", user.email);
    for booking in &bookings {
        println!("  {}", output::render_booking(booking));
    }
    Ok(())
}
