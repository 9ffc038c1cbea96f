use rand::seq::SliceRandom;

pub const MOTIVATIONAL_QUOTES: &[&str] = &[
    "You're not your past. You're building your future.",
    "Each day clean is a rep in the gym of self-mastery.",
    "You control the urge. The urge does NOT control you.",
    "Slip-ups don't define you. Comebacks do.",
    "This fight? It's shaping you into something legendary.",
    "Progress, not perfection.",
    "Every moment is a fresh start.",
    "Your future self is counting on you.",
    "Strength grows from struggle.",
    "You've overcome 100% of your worst days so far.",
];

/// Picks a quote for the current display.
pub fn random_quote() -> &'static str {
    MOTIVATIONAL_QUOTES
        .choose(&mut rand::thread_rng())
        .copied()
        .expect("Quote table should never be empty")
}
