use std::collections::HashSet;

use serde_json::Value;

use crate::ir::{DAY_MINUTES, Event, LATEST_START};

use super::error::{ValidationError, ValidationErrors};

/// A field value as read from the input: an integer, or whatever was found
/// instead.
type Field = Result<i64, Invalid>;

/// A field that is not an integer. `number` keeps fractional values so `end`
/// can still be ordered against them; absent and non-numeric fields have none.
#[derive(Debug)]
struct Invalid {
    found: String,
    number: Option<f64>,
}

/// Collects every defect of one event set. The seen-id set lives only as long
/// as a single validation call.
#[derive(Default)]
struct Checker {
    seen: HashSet<i64>,
    errors: Vec<ValidationError>,
}

impl Checker {
    fn check(&mut self, index: usize, id: Field, start: Field, end: Field) {
        match id {
            Ok(id) if id >= 0 => {
                if !self.seen.insert(id) {
                    self.errors.push(ValidationError::DuplicateId { index, id });
                }
            }
            Ok(id) => self.errors.push(ValidationError::InvalidId {
                index,
                found: id.to_string(),
            }),
            Err(invalid) => self.errors.push(ValidationError::InvalidId {
                index,
                found: invalid.found,
            }),
        }

        let start_ok = matches!(start, Ok(s) if (0..=LATEST_START).contains(&s));
        if !start_ok {
            self.errors.push(ValidationError::InvalidStart {
                index,
                found: display_field(&start),
            });
        }

        // An absent or non-numeric start cannot precede any end.
        let end_ok = match (&start, &end) {
            (Ok(s), Ok(e)) => *s < *e && *e <= DAY_MINUTES,
            (Err(s), Ok(e)) => s.number.is_some_and(|start| start < *e as f64) && *e <= DAY_MINUTES,
            (_, Err(_)) => false,
        };
        if !end_ok {
            self.errors.push(ValidationError::InvalidEnd {
                index,
                found: display_field(&end),
            });
        }
    }

    fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(self.errors))
        }
    }
}

fn display_field(field: &Field) -> String {
    match field {
        Ok(value) => value.to_string(),
        Err(invalid) => invalid.found.clone(),
    }
}

/// Checks a typed event set, reporting every defect rather than the first.
pub fn validate(events: &[Event]) -> Result<(), ValidationErrors> {
    let mut checker = Checker::default();
    for (index, event) in events.iter().enumerate() {
        checker.check(index, Ok(event.id), Ok(event.start), Ok(event.end));
    }
    let result = checker.finish();
    if let Err(errors) = &result {
        log::debug!("rejected {} event(s): {} problem(s)", events.len(), errors.len());
    }
    result
}

/// Validates an untyped JSON document and converts it into events.
///
/// This is the only entry point that can produce
/// [`ValidationError::Structural`] and [`ValidationError::MalformedEvent`],
/// since a `&[Event]` is already a sequence of well-shaped records.
pub fn events_from_value(value: &Value) -> Result<Vec<Event>, ValidationErrors> {
    let Some(records) = value.as_array() else {
        return Err(ValidationErrors(vec![ValidationError::Structural {
            found: describe(value).to_string(),
        }]));
    };

    let mut checker = Checker::default();
    let mut events = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let Some(object) = record.as_object() else {
            checker.errors.push(ValidationError::MalformedEvent {
                index,
                found: describe(record).to_string(),
            });
            continue;
        };
        let id = integer_field(object.get("id"));
        let start = integer_field(object.get("start"));
        let end = integer_field(object.get("end"));
        if let (Ok(id), Ok(start), Ok(end)) = (&id, &start, &end) {
            events.push(Event::new(*id, *start, *end));
        }
        checker.check(index, id, start, end);
    }

    checker.finish().map(|()| events)
}

fn integer_field(value: Option<&Value>) -> Field {
    let Some(value) = value else {
        return Err(Invalid {
            found: "missing".to_string(),
            number: None,
        });
    };
    as_integer(value).ok_or_else(|| Invalid {
        found: value.to_string(),
        number: value.as_f64(),
    })
}

/// Accepts integral numbers, including floats such as `30.0`.
fn as_integer(value: &Value) -> Option<i64> {
    const MAX_SAFE: f64 = 9_007_199_254_740_991.0;
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.abs() <= MAX_SAFE)
            .map(|f| f as i64)
    })
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
