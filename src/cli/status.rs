use ansi_term::Colour;
use anyhow::Result;

use crate::{
    tracker::{
        store::StateStore,
        streak::{self, CooldownStatus},
    },
    utils::{clock::Clock, time::format_days_hours},
};

use super::quotes;

/// The main display: streak numbers, cooldown state and a quote. Reads the
/// document fresh on every invocation, nothing is cached between commands.
pub async fn show_status(store: &impl StateStore, clock: &impl Clock) -> Result<()> {
    let state = store.load().await?;
    let now = clock.now();

    let current = streak::current_streak(&state, now);
    let max = streak::max_streak(&state, now);

    println!(
        "{} {current} days",
        Colour::Green.bold().paint("Current streak:")
    );
    println!("{} {max} days", Colour::Cyan.bold().paint("Max streak:"));

    match streak::cooldown(&state, now) {
        CooldownStatus::Unset => println!("Cooldown not set."),
        CooldownStatus::Active(remaining) => println!(
            "{}",
            Colour::Yellow.paint(format!(
                "Next release allowed in {}",
                format_days_hours(remaining)
            ))
        ),
        CooldownStatus::Cleared => {
            println!("{}", Colour::Green.paint("You're clear. No cooldown active."))
        }
    }

    println!();
    println!("{}", Colour::Purple.italic().paint(quotes::random_quote()));
    Ok(())
}
