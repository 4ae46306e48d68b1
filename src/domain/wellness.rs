use serde::Serialize;

/// Workload input shape. The current form submits class, work, and commute
/// hours separately; older clients send a single `tasks` count instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workload {
    Granular {
        class_hours: i32,
        work_hours: i32,
        commute_hours: i32,
    },
    Aggregate {
        tasks: i32,
    },
}

impl Workload {
    pub fn total(&self) -> i32 {
        match self {
            Workload::Granular {
                class_hours,
                work_hours,
                commute_hours,
            } => class_hours + work_hours + commute_hours,
            Workload::Aggregate { tasks } => *tasks,
        }
    }
}

/// One normalized wellness check-in. Values outside the expected ranges are
/// kept as-is; the scoring formulas clamp where it matters.
#[derive(Debug, Clone, PartialEq)]
pub struct WellnessInput {
    pub hour_of_day: i32,
    pub workload: Workload,
    pub sleep_hours: i32,
    pub stress_level: i32,
    pub mood: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
}

impl TimeOfDay {
    pub fn from_hour(hour: i32) -> Self {
        if hour < 12 {
            TimeOfDay::Morning
        } else if hour < 18 {
            TimeOfDay::Afternoon
        } else {
            TimeOfDay::Evening
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodKind {
    Low,
    High,
    Neutral,
}

/// Case-insensitive substring match over free-form mood text. Anything that
/// is neither tired/sad nor happy counts as neutral.
pub fn classify_mood(raw: &str) -> MoodKind {
    let mood = raw.to_lowercase();
    if mood.contains("tired") || mood.contains("sad") {
        MoodKind::Low
    } else if mood.contains("happy") {
        MoodKind::High
    } else {
        MoodKind::Neutral
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedMetrics {
    pub total_workload: i32,
    pub fatigue: i32,
    pub focus_score: i32,
    pub time_of_day: TimeOfDay,
}

/// Total over valid input: no division, no fallible arithmetic.
///
/// The focus score clamps at 0 only. `10 - fatigue` exceeds 10 whenever
/// fatigue goes negative (long sleep, light day, low stress) and every
/// deployed variant of the formula leaves that end open, so we do too.
pub fn derive_metrics(input: &WellnessInput) -> DerivedMetrics {
    let total_workload = input.workload.total();
    let fatigue = input.stress_level * 2 + total_workload - input.sleep_hours;
    let focus_score = (10 - fatigue).max(0);
    DerivedMetrics {
        total_workload,
        fatigue,
        focus_score,
        time_of_day: TimeOfDay::from_hour(input.hour_of_day),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(hour: i32, workload: Workload, sleep: i32, stress: i32, mood: &str) -> WellnessInput {
        WellnessInput {
            hour_of_day: hour,
            workload,
            sleep_hours: sleep,
            stress_level: stress,
            mood: mood.to_string(),
        }
    }

    #[test]
    fn test_time_of_day_boundaries() {
        assert_eq!(TimeOfDay::from_hour(0), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(11), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(12), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(17), TimeOfDay::Afternoon);
        assert_eq!(TimeOfDay::from_hour(18), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(23), TimeOfDay::Evening);
    }

    #[test]
    fn test_mood_classification_is_case_insensitive() {
        assert_eq!(classify_mood("Very Tired"), MoodKind::Low);
        assert_eq!(classify_mood("kind of SAD today"), MoodKind::Low);
        assert_eq!(classify_mood("So Happy!"), MoodKind::High);
        assert_eq!(classify_mood("meh"), MoodKind::Neutral);
        assert_eq!(classify_mood(""), MoodKind::Neutral);
        assert_eq!(classify_mood("neutral"), MoodKind::Neutral);
    }

    #[test]
    fn test_workload_total() {
        let granular = Workload::Granular {
            class_hours: 3,
            work_hours: 2,
            commute_hours: 1,
        };
        assert_eq!(granular.total(), 6);
        assert_eq!(Workload::Aggregate { tasks: 4 }.total(), 4);
    }

    #[test]
    fn test_derive_metrics_worked_example() {
        // hour 9, class 3 + work 2 + commute 1, sleep 5, stress 4
        let m = derive_metrics(&input(
            9,
            Workload::Granular {
                class_hours: 3,
                work_hours: 2,
                commute_hours: 1,
            },
            5,
            4,
            "tired",
        ));
        assert_eq!(m.total_workload, 6);
        assert_eq!(m.fatigue, 4 * 2 + 6 - 5);
        assert_eq!(m.focus_score, 1);
        assert_eq!(m.time_of_day, TimeOfDay::Morning);
    }

    #[test]
    fn test_focus_score_clamps_at_zero() {
        // fatigue = 5*2 + 10 - 4 = 16, focus would be -6
        let m = derive_metrics(&input(12, Workload::Aggregate { tasks: 10 }, 4, 5, ""));
        assert_eq!(m.focus_score, 0);
    }

    #[test]
    fn test_focus_score_has_no_upper_clamp() {
        // fatigue = 1*2 + 0 - 12 = -10, focus = 20
        let m = derive_metrics(&input(8, Workload::Aggregate { tasks: 0 }, 12, 1, "happy"));
        assert_eq!(m.fatigue, -10);
        assert_eq!(m.focus_score, 20);
    }
}
