use crate::domain::wellness::{WellnessInput, Workload};
use serde::Deserialize;
use serde_json::Value;

/// Raw check-in form as submitted over the wire. Form inputs arrive as
/// strings from most clients and as numbers from the rest, so every numeric
/// field is kept as a `Value` until `normalize` runs.
#[derive(Debug, Deserialize)]
pub struct RawWellnessForm {
    pub hour: Option<Value>,
    pub class_hours: Option<Value>,
    pub work_hours: Option<Value>,
    pub commute: Option<Value>,
    /// Legacy single-count workload field, consulted only when none of the
    /// granular fields are present.
    pub tasks: Option<Value>,
    pub sleep: Option<Value>,
    pub stress: Option<Value>,
    pub mood: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing or invalid fields: {}", .fields.join(", "))]
pub struct ValidationError {
    pub fields: Vec<&'static str>,
}

fn parse_int(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .map(|v| v as i32),
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i32>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().map(|f| f.trunc() as i32))
        }
        _ => None,
    }
}

fn require(missing: &mut Vec<&'static str>, name: &'static str, field: &Option<Value>) -> i32 {
    match field.as_ref().and_then(parse_int) {
        Some(v) => v,
        None => {
            missing.push(name);
            0
        }
    }
}

/// Convert a raw form into a typed `WellnessInput`, collecting every missing
/// or non-numeric required field so the caller can report them all at once.
/// `mood` is optional and defaults to the literal `"neutral"`.
pub fn normalize(form: &RawWellnessForm) -> Result<WellnessInput, ValidationError> {
    let mut missing = Vec::new();

    let hour = require(&mut missing, "hour", &form.hour);
    let sleep = require(&mut missing, "sleep", &form.sleep);
    let stress = require(&mut missing, "stress", &form.stress);

    let has_granular =
        form.class_hours.is_some() || form.work_hours.is_some() || form.commute.is_some();
    let workload = if has_granular {
        Workload::Granular {
            class_hours: require(&mut missing, "class_hours", &form.class_hours),
            work_hours: require(&mut missing, "work_hours", &form.work_hours),
            commute_hours: require(&mut missing, "commute", &form.commute),
        }
    } else if form.tasks.is_some() {
        Workload::Aggregate {
            tasks: require(&mut missing, "tasks", &form.tasks),
        }
    } else {
        missing.push("workload");
        Workload::Aggregate { tasks: 0 }
    };

    if !missing.is_empty() {
        return Err(ValidationError { fields: missing });
    }

    let mood = form
        .mood
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or("neutral")
        .to_string();

    Ok(WellnessInput {
        hour_of_day: hour,
        workload,
        sleep_hours: sleep,
        stress_level: stress,
        mood,
    })
}
