use std::io::{BufRead, Write};

use ansi_term::Colour;
use anyhow::{bail, Result};
use tracing::debug;

use crate::auth::credential::Credential;

const MAX_LOGIN_ATTEMPTS: u32 = 3;

/// First-run flow: asks for the password twice and stores the credential.
pub async fn run_setup(credential: &Credential) -> Result<()> {
    if credential.is_set().await? {
        bail!("A password is already set. Remove the credential file to start over");
    }

    let password = prompt_line("Set a new password: ")?;
    let confirm = prompt_line("Confirm password: ")?;

    if password.is_empty() || confirm.is_empty() {
        bail!("Please fill both entries");
    }
    if password != confirm {
        bail!("Passwords do not match");
    }

    credential.set(&password).await?;
    println!(
        "{}",
        Colour::Green.paint("Password set. You can now use the tracker.")
    );
    Ok(())
}

/// Gate in front of every tracker command. Mismatched attempts are
/// recoverable and re-prompted inline; a missing credential file is fatal.
pub async fn login(credential: &Credential, password_arg: Option<&str>) -> Result<()> {
    if let Some(attempt) = password_arg {
        if credential.verify(attempt).await? {
            return Ok(());
        }
        bail!("Incorrect password");
    }

    for attempt_number in 1..=MAX_LOGIN_ATTEMPTS {
        let attempt = prompt_line("Password: ")?;
        if credential.verify(&attempt).await? {
            return Ok(());
        }
        debug!("Failed login attempt {attempt_number}");
        println!(
            "{}",
            Colour::Red.paint("Incorrect password. Please try again.")
        );
    }

    bail!("Too many failed attempts")
}

pub fn prompt_line(message: &str) -> Result<String> {
    print!("{message}");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
