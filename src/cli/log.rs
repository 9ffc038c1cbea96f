use ansi_term::Colour;
use anyhow::Result;
use tracing::debug;

use crate::{
    tracker::{
        entities::EventKind,
        store::StateStore,
        streak::{self, CooldownStatus},
    },
    utils::{clock::Clock, time::format_days_hours},
};

use super::password::prompt_line;

/// Records an urge the user rode out. Full read-modify-write of the document
/// on the spot.
pub async fn log_urge(store: &impl StateStore, clock: &impl Clock) -> Result<()> {
    let now = clock.now();
    let mut state = store.load().await?;
    state.append_event(EventKind::Urge, now);
    store.save(&state).await?;
    debug!("Logged urge at {now}");

    println!(
        "{}",
        Colour::Green.paint("Urge logged. Each one you ride out makes the next easier.")
    );
    Ok(())
}

/// Records a relapse after confirmation and restarts the cooldown.
pub async fn log_relapse(store: &impl StateStore, clock: &impl Clock, yes: bool) -> Result<()> {
    if !yes {
        let answer = prompt_line("Log a relapse? This is just data to help you improve. [y/N] ")?;
        if !matches!(answer.trim(), "y" | "Y" | "yes") {
            println!("Nothing logged.");
            return Ok(());
        }
    }

    let now = clock.now();
    let mut state = store.load().await?;
    state.append_event(EventKind::Relapse, now);
    store.save(&state).await?;
    debug!("Logged relapse at {now}");

    println!("Relapse logged. Every setback is a setup for a comeback.");
    if let CooldownStatus::Active(remaining) = streak::cooldown(&state, now) {
        println!(
            "{}",
            Colour::Yellow.paint(format!(
                "Next release allowed in {}",
                format_days_hours(remaining)
            ))
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
    use tempfile::tempdir;

    use crate::{
        tracker::{
            entities::EventKind,
            store::{StateStore, StateStoreImpl},
            streak::CooldownStatus,
        },
        utils::clock::MockClock,
    };

    const TEST_NOW: NaiveDateTime =
        NaiveDateTime::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), NaiveTime::MIN);

    #[tokio::test]
    async fn test_log_urge_appends_and_persists() -> Result<()> {
        let dir = tempdir()?;
        let store = StateStoreImpl::new(dir.path().to_owned())?;
        let mut clock = MockClock::new();
        clock.expect_now().return_const(TEST_NOW);

        super::log_urge(&store, &clock).await?;

        let state = store.load().await?;
        assert_eq!(state.logs.len(), 1);
        assert_eq!(state.logs[0].kind, EventKind::Urge);
        assert_eq!(state.last_relapse, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_log_relapse_starts_cooldown() -> Result<()> {
        let dir = tempdir()?;
        let store = StateStoreImpl::new(dir.path().to_owned())?;
        let mut clock = MockClock::new();
        clock.expect_now().return_const(TEST_NOW);

        super::log_relapse(&store, &clock, true).await?;

        let state = store.load().await?;
        assert_eq!(state.last_relapse, Some(TEST_NOW));
        assert!(matches!(
            crate::tracker::streak::cooldown(&state, TEST_NOW),
            CooldownStatus::Active(_)
        ));
        Ok(())
    }
}
