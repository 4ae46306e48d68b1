use crate::domain::wellness::{
    classify_mood, derive_metrics, DerivedMetrics, MoodKind, TimeOfDay, WellnessInput,
};
use rand::seq::SliceRandom;
use serde::Serialize;

// Fixed tip catalog, one string per rule arm.
pub const SLEEP_DEPRIVED_TIP: &str =
    "😴 You seem sleep-deprived — aim for at least 7 hours tonight.";
pub const OVERSLEEP_TIP: &str =
    "🌅 Too much rest may cause sluggishness — try waking up earlier.";
pub const HEAVY_SCHEDULE_TIP: &str =
    "📘 Heavy schedule — divide study and work into 45-min focus blocks.";
pub const LIGHT_DAY_TIP: &str =
    "🪄 Light day — use free time for reflection or creative projects.";
pub const HIGH_STRESS_TIP: &str =
    "🧘 High stress detected. Try a 5-minute breathing or stretching break.";
pub const BALANCED_MINDSET_TIP: &str = "🌿 Balanced mindset — keep your calm rhythm going!";
pub const LOW_MOOD_TIP: &str = "🎧 Listen to uplifting music or take a short walk outside.";
pub const HIGH_ENERGY_TIP: &str =
    "⚡ Great energy! Channel it toward your most creative goals today.";
pub const NEUTRAL_MOOD_TIP: &str = "🔄 Neutral mood — perfect for consistent, steady progress.";
pub const MORNING_TIP: &str = "🌞 Start your morning with hydration and light stretching.";
pub const AFTERNOON_TIP: &str =
    "☕ Afternoon slump incoming — move around for 2 minutes to recharge.";
pub const EVENING_TIP: &str = "🌙 Evening time — slow down, reflect, and plan for tomorrow.";

pub const MAX_TIPS: usize = 3;

/// The one place randomness enters. Handlers use `ThreadRngShuffle`; tests
/// inject a deterministic implementation and assert exact tip order.
pub trait TipShuffle {
    fn shuffle(&mut self, tips: &mut Vec<&'static str>);
}

pub struct ThreadRngShuffle;

impl TipShuffle for ThreadRngShuffle {
    fn shuffle(&mut self, tips: &mut Vec<&'static str>) {
        tips.shuffle(&mut rand::thread_rng());
    }
}

/// Evaluate the five category rules in fixed order. Sleep, workload, and
/// stress contribute at most one tip each; mood and time of day always
/// contribute exactly one, so the result is never empty.
pub fn candidate_tips(input: &WellnessInput, metrics: &DerivedMetrics) -> Vec<&'static str> {
    let mut tips = Vec::with_capacity(5);

    if input.sleep_hours < 6 {
        tips.push(SLEEP_DEPRIVED_TIP);
    } else if input.sleep_hours > 9 {
        tips.push(OVERSLEEP_TIP);
    }

    if metrics.total_workload >= 8 {
        tips.push(HEAVY_SCHEDULE_TIP);
    } else if metrics.total_workload <= 3 {
        tips.push(LIGHT_DAY_TIP);
    }

    if input.stress_level >= 4 {
        tips.push(HIGH_STRESS_TIP);
    } else if input.stress_level <= 2 {
        tips.push(BALANCED_MINDSET_TIP);
    }

    tips.push(match classify_mood(&input.mood) {
        MoodKind::Low => LOW_MOOD_TIP,
        MoodKind::High => HIGH_ENERGY_TIP,
        MoodKind::Neutral => NEUTRAL_MOOD_TIP,
    });

    tips.push(match metrics.time_of_day {
        TimeOfDay::Morning => MORNING_TIP,
        TimeOfDay::Afternoon => AFTERNOON_TIP,
        TimeOfDay::Evening => EVENING_TIP,
    });

    tips
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub tips: Vec<&'static str>,
    pub focus_score: i32,
}

impl Recommendation {
    pub fn joined(&self) -> String {
        self.tips.join(" ")
    }
}

/// Derive metrics, evaluate the rules, shuffle, and keep at most
/// `MAX_TIPS` tips.
pub fn recommend(input: &WellnessInput, shuffle: &mut impl TipShuffle) -> Recommendation {
    let metrics = derive_metrics(input);
    let mut tips = candidate_tips(input, &metrics);
    shuffle.shuffle(&mut tips);
    tips.truncate(MAX_TIPS);
    Recommendation {
        tips,
        focus_score: metrics.focus_score,
    }
}
