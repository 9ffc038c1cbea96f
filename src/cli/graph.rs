use ansi_term::Colour;
use anyhow::Result;

use crate::{
    tracker::{store::StateStore, streak},
    utils::clock::Clock,
};

const MAX_BAR_WIDTH: usize = 40;

/// Streak trend as horizontal bars, one row per finished streak plus the one
/// still running.
pub async fn show_graph(store: &impl StateStore, clock: &impl Clock) -> Result<()> {
    let state = store.load().await?;

    let Some(series) = streak::streak_series(&state, clock.now()) else {
        println!("Not enough data to display the streak graph. Keep tracking your progress!");
        return Ok(());
    };

    let longest = series.iter().copied().max().unwrap_or(0);
    let last = series.len() - 1;

    println!("Streak progress (days)");
    for (index, days) in series.iter().enumerate() {
        let bar = "█".repeat(bar_width(*days, longest));
        let painted = if index == last {
            Colour::Green.paint(bar)
        } else {
            Colour::Blue.paint(bar)
        };
        println!("{:>3}  {:>5}  {painted}", index + 1, days);
    }
    println!("{}", Colour::Green.paint("▲ current streak"));
    Ok(())
}

/// Scales a streak length onto the bar width. Negative entries from
/// out-of-order logs draw as empty rows rather than panicking.
fn bar_width(days: i64, longest: i64) -> usize {
    if days <= 0 || longest <= 0 {
        return 0;
    }
    (days as usize * MAX_BAR_WIDTH).div_ceil(longest as usize)
}

#[cfg(test)]
mod tests {
    use super::{bar_width, MAX_BAR_WIDTH};

    #[test]
    fn test_bar_width_scales_to_longest() {
        assert_eq!(bar_width(10, 10), MAX_BAR_WIDTH);
        assert_eq!(bar_width(5, 10), MAX_BAR_WIDTH / 2);
        assert_eq!(bar_width(1, 40), 1);
    }

    #[test]
    fn test_bar_width_handles_degenerate_series() {
        assert_eq!(bar_width(0, 10), 0);
        assert_eq!(bar_width(-3, 10), 0);
        assert_eq!(bar_width(0, 0), 0);
    }
}
