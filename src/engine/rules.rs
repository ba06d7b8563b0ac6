//! Activity transition rules.
//!
//! Each activity checks one or two mood conditions and either runs its
//! animated branch or falls back to a "limit reached" phrase. Every
//! activity except bathing first wears down cleanliness by one point;
//! a pet at zero cleanliness refuses to do anything until bathed.

use crate::engine::state::{Attribute, PetState, MOOD_MAXIMUM, MOOD_MINIMUM};

// Feedback phrases, verbatim from the pet's repertoire.
pub const PHRASE_TOO_DIRTY: &str = "I am too dirty to do anything!";
pub const PHRASE_HATE_BATHING: &str = "I hate bathing";
pub const PHRASE_CLEAN_AS_CAN_BE: &str = "I am as clean as can be!";
pub const PHRASE_YUMMY: &str = "That was yummy";
pub const PHRASE_TOO_FULL: &str = "I am too full to eat";
pub const PHRASE_LOVE_YOU: &str = "I love you";
pub const PHRASE_NEED_SPACE: &str = "Thanks, but I need some space";
pub const PHRASE_NO_ENERGY: &str = "Sorry I have no energy, I need sleep!";
pub const PHRASE_TOO_HUNGRY: &str = "I am too hungry to play!";
pub const PHRASE_THAT_WAS_FUN: &str = "Haha that was fun";
pub const PHRASE_BEDTIME: &str = "Hmm... bedtime";
pub const PHRASE_WELL_RESTED: &str = "I feel very rested and do not want to sleep";

/// The five user-triggered activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Bathe,
    Feed,
    Love,
    Play,
    Sleep,
}

impl Activity {
    pub const ALL: [Activity; 5] = [
        Activity::Bathe,
        Activity::Feed,
        Activity::Love,
        Activity::Play,
        Activity::Sleep,
    ];

    /// Lowercase name used for string-keyed invocation.
    pub fn name(&self) -> &'static str {
        match self {
            Activity::Bathe => "bathe",
            Activity::Feed => "feed",
            Activity::Love => "love",
            Activity::Play => "play",
            Activity::Sleep => "sleep",
        }
    }

    /// Button label for the UI.
    pub fn label(&self) -> &'static str {
        match self {
            Activity::Bathe => "Bathe",
            Activity::Feed => "Feed",
            Activity::Love => "Love",
            Activity::Play => "Play",
            Activity::Sleep => "Sleep",
        }
    }

    /// Hotkey bound to this activity.
    pub fn hotkey(&self) -> char {
        match self {
            Activity::Bathe => 'b',
            Activity::Feed => 'f',
            Activity::Love => 'l',
            Activity::Play => 'p',
            Activity::Sleep => 's',
        }
    }

    pub fn from_name(name: &str) -> Option<Activity> {
        Activity::ALL.iter().copied().find(|a| a.name() == name)
    }

    /// Bathing is the one activity that does not dirty the pet.
    fn wears_down_cleanliness(&self) -> bool {
        !matches!(self, Activity::Bathe)
    }
}

/// Result of evaluating one activity rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub phrase: &'static str,
    pub animated: bool,
}

impl Outcome {
    fn animated(phrase: &'static str) -> Self {
        Self {
            phrase,
            animated: true,
        }
    }

    fn quiet(phrase: &'static str) -> Self {
        Self {
            phrase,
            animated: false,
        }
    }
}

/// Apply one activity to the pet state and return the outcome.
///
/// Runs the cleanliness gate, the matched rule branch, then a single
/// unconditional clamp. A gate refusal returns before any mutation.
pub fn apply(state: &mut PetState, activity: Activity) -> Outcome {
    if activity.wears_down_cleanliness() {
        if state.get(Attribute::Cleanliness) <= MOOD_MINIMUM {
            return Outcome::quiet(PHRASE_TOO_DIRTY);
        }
        state.adjust(Attribute::Cleanliness, -1);
    }

    let outcome = match activity {
        Activity::Bathe => {
            if state.get(Attribute::Cleanliness) < MOOD_MAXIMUM {
                state.adjust(Attribute::Happiness, -1);
                state.adjust(Attribute::Cleanliness, 3);
                Outcome::animated(PHRASE_HATE_BATHING)
            } else {
                state.adjust(Attribute::Cleanliness, 1);
                Outcome::quiet(PHRASE_CLEAN_AS_CAN_BE)
            }
        }
        Activity::Feed => {
            let hunger = state.get(Attribute::Hunger);
            if hunger > MOOD_MINIMUM && hunger <= MOOD_MAXIMUM {
                state.adjust(Attribute::Energy, 1);
                state.adjust(Attribute::Hunger, -2);
                Outcome::animated(PHRASE_YUMMY)
            } else {
                state.adjust(Attribute::Cleanliness, 1);
                Outcome::quiet(PHRASE_TOO_FULL)
            }
        }
        Activity::Love => {
            let happiness = state.get(Attribute::Happiness);
            if happiness > MOOD_MINIMUM && happiness < MOOD_MAXIMUM {
                state.adjust(Attribute::Happiness, 1);
                Outcome::animated(PHRASE_LOVE_YOU)
            } else {
                state.adjust(Attribute::Cleanliness, 1);
                Outcome::quiet(PHRASE_NEED_SPACE)
            }
        }
        Activity::Play => {
            if state.get(Attribute::Energy) <= MOOD_MINIMUM {
                state.adjust(Attribute::Cleanliness, 1);
                Outcome::quiet(PHRASE_NO_ENERGY)
            } else if state.get(Attribute::Hunger) >= MOOD_MAXIMUM {
                state.adjust(Attribute::Cleanliness, 1);
                Outcome::quiet(PHRASE_TOO_HUNGRY)
            } else {
                state.adjust(Attribute::Energy, -2);
                state.adjust(Attribute::Happiness, 1);
                state.adjust(Attribute::Hunger, 1);
                Outcome::animated(PHRASE_THAT_WAS_FUN)
            }
        }
        Activity::Sleep => {
            if state.get(Attribute::Energy) < MOOD_MAXIMUM {
                state.adjust(Attribute::Energy, 3);
                Outcome::animated(PHRASE_BEDTIME)
            } else {
                state.adjust(Attribute::Cleanliness, 1);
                Outcome::quiet(PHRASE_WELL_RESTED)
            }
        }
    };

    state.clamp_all();
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(cleanliness: i32, energy: i32, happiness: i32, hunger: i32) -> PetState {
        let mut state = PetState::new();
        state.adjust(Attribute::Cleanliness, cleanliness - 10);
        state.adjust(Attribute::Energy, energy - 10);
        state.adjust(Attribute::Happiness, happiness - 10);
        state.adjust(Attribute::Hunger, hunger - 10);
        state
    }

    #[test]
    fn test_bathe_from_initial_state() {
        let mut state = PetState::new();
        let outcome = apply(&mut state, Activity::Bathe);
        assert_eq!(outcome, Outcome::animated(PHRASE_HATE_BATHING));
        assert_eq!(state.get(Attribute::Happiness), 9);
        assert_eq!(state.get(Attribute::Cleanliness), 13);
        assert_eq!(state.get(Attribute::Energy), 10);
        assert_eq!(state.get(Attribute::Hunger), 10);
    }

    #[test]
    fn test_bathe_when_already_spotless() {
        let mut state = state_with(15, 10, 10, 10);
        let outcome = apply(&mut state, Activity::Bathe);
        assert_eq!(outcome, Outcome::quiet(PHRASE_CLEAN_AS_CAN_BE));
        // +1 clamps straight back to the maximum.
        assert_eq!(state.get(Attribute::Cleanliness), 15);
        assert_eq!(state.get(Attribute::Happiness), 10);
    }

    #[test]
    fn test_bathe_skips_the_cleanliness_gate() {
        let mut state = state_with(0, 10, 10, 10);
        let outcome = apply(&mut state, Activity::Bathe);
        assert_eq!(outcome, Outcome::animated(PHRASE_HATE_BATHING));
        assert_eq!(state.get(Attribute::Cleanliness), 3);
    }

    #[test]
    fn test_dirty_pet_refuses_every_gated_activity() {
        for activity in [Activity::Feed, Activity::Love, Activity::Play, Activity::Sleep] {
            let mut state = state_with(0, 10, 10, 10);
            let before = state;
            let outcome = apply(&mut state, activity);
            assert_eq!(outcome, Outcome::quiet(PHRASE_TOO_DIRTY));
            assert_eq!(state, before, "{:?} mutated a refused state", activity);
        }
    }

    #[test]
    fn test_feed_at_maximum_hunger() {
        let mut state = state_with(10, 10, 10, 15);
        let outcome = apply(&mut state, Activity::Feed);
        assert_eq!(outcome, Outcome::animated(PHRASE_YUMMY));
        assert_eq!(state.get(Attribute::Cleanliness), 9);
        assert_eq!(state.get(Attribute::Energy), 11);
        assert_eq!(state.get(Attribute::Hunger), 13);
    }

    #[test]
    fn test_feed_when_fully_fed() {
        let mut state = state_with(10, 10, 10, 0);
        let outcome = apply(&mut state, Activity::Feed);
        assert_eq!(outcome, Outcome::quiet(PHRASE_TOO_FULL));
        // Gate -1 plus the saturated branch's +1 cancel out.
        assert_eq!(state.get(Attribute::Cleanliness), 10);
        assert_eq!(state.get(Attribute::Energy), 10);
        assert_eq!(state.get(Attribute::Hunger), 0);
    }

    #[test]
    fn test_love_raises_happiness() {
        let mut state = PetState::new();
        let outcome = apply(&mut state, Activity::Love);
        assert_eq!(outcome, Outcome::animated(PHRASE_LOVE_YOU));
        assert_eq!(state.get(Attribute::Happiness), 11);
        assert_eq!(state.get(Attribute::Cleanliness), 9);
    }

    #[test]
    fn test_love_at_maximum_happiness() {
        let mut state = state_with(10, 10, 15, 10);
        let outcome = apply(&mut state, Activity::Love);
        assert_eq!(outcome, Outcome::quiet(PHRASE_NEED_SPACE));
        assert_eq!(state.get(Attribute::Happiness), 15);
        assert_eq!(state.get(Attribute::Cleanliness), 10);
    }

    #[test]
    fn test_love_at_zero_happiness() {
        let mut state = state_with(10, 10, 0, 10);
        let outcome = apply(&mut state, Activity::Love);
        assert_eq!(outcome, Outcome::quiet(PHRASE_NEED_SPACE));
        assert_eq!(state.get(Attribute::Happiness), 0);
    }

    #[test]
    fn test_play_with_no_energy() {
        let mut state = state_with(10, 0, 10, 10);
        let outcome = apply(&mut state, Activity::Play);
        assert_eq!(outcome, Outcome::quiet(PHRASE_NO_ENERGY));
        assert_eq!(state.get(Attribute::Cleanliness), 10);
        assert_eq!(state.get(Attribute::Energy), 0);
        assert_eq!(state.get(Attribute::Happiness), 10);
        assert_eq!(state.get(Attribute::Hunger), 10);
    }

    #[test]
    fn test_play_energy_check_wins_over_hunger() {
        let mut state = state_with(10, 0, 10, 15);
        let outcome = apply(&mut state, Activity::Play);
        assert_eq!(outcome, Outcome::quiet(PHRASE_NO_ENERGY));
    }

    #[test]
    fn test_play_when_too_hungry() {
        let mut state = state_with(10, 10, 10, 15);
        let outcome = apply(&mut state, Activity::Play);
        assert_eq!(outcome, Outcome::quiet(PHRASE_TOO_HUNGRY));
        assert_eq!(state.get(Attribute::Cleanliness), 10);
        assert_eq!(state.get(Attribute::Hunger), 15);
    }

    #[test]
    fn test_play_happy_path() {
        let mut state = PetState::new();
        let outcome = apply(&mut state, Activity::Play);
        assert_eq!(outcome, Outcome::animated(PHRASE_THAT_WAS_FUN));
        assert_eq!(state.get(Attribute::Cleanliness), 9);
        assert_eq!(state.get(Attribute::Energy), 8);
        assert_eq!(state.get(Attribute::Happiness), 11);
        assert_eq!(state.get(Attribute::Hunger), 11);
    }

    #[test]
    fn test_sleep_restores_energy() {
        let mut state = PetState::new();
        let outcome = apply(&mut state, Activity::Sleep);
        assert_eq!(outcome, Outcome::animated(PHRASE_BEDTIME));
        assert_eq!(state.get(Attribute::Energy), 13);
        assert_eq!(state.get(Attribute::Cleanliness), 9);
    }

    #[test]
    fn test_sleep_clamps_energy_at_maximum() {
        let mut state = state_with(10, 14, 10, 10);
        let outcome = apply(&mut state, Activity::Sleep);
        assert_eq!(outcome, Outcome::animated(PHRASE_BEDTIME));
        assert_eq!(state.get(Attribute::Energy), 15);
    }

    #[test]
    fn test_sleep_when_fully_rested() {
        let mut state = state_with(10, 15, 10, 10);
        let outcome = apply(&mut state, Activity::Sleep);
        assert_eq!(outcome, Outcome::quiet(PHRASE_WELL_RESTED));
        assert_eq!(state.get(Attribute::Energy), 15);
        assert_eq!(state.get(Attribute::Cleanliness), 10);
    }

    #[test]
    fn test_bounds_hold_over_long_activity_sequences() {
        let mut state = PetState::new();
        // Cycle through every activity enough times to hit every
        // saturation branch at least once.
        for round in 0..200 {
            let activity = Activity::ALL[round % Activity::ALL.len()];
            apply(&mut state, activity);
            for attr in Attribute::ALL {
                let value = state.get(attr);
                assert!(
                    (MOOD_MINIMUM..=MOOD_MAXIMUM).contains(&value),
                    "{:?} out of range after round {}: {}",
                    attr,
                    round,
                    value
                );
            }
        }
    }

    #[test]
    fn test_activity_from_name() {
        assert_eq!(Activity::from_name("bathe"), Some(Activity::Bathe));
        assert_eq!(Activity::from_name("sleep"), Some(Activity::Sleep));
        assert_eq!(Activity::from_name("juggle"), None);
        assert_eq!(Activity::from_name("Feed"), None);
    }
}
