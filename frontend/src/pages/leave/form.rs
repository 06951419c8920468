use chrono::NaiveDate;
use leptos::*;

use crate::components::forms::{FormGate, RequiredField};
use crate::utils::date::business_days_inclusive;

pub const LEAVE_TYPES: [(&str, &str); 4] = [
    ("annual", "Annual"),
    ("sick", "Sick"),
    ("casual", "Casual"),
    ("emergency", "Emergency"),
];

#[derive(Clone)]
pub struct LeaveFormState {
    pub leave_type: RequiredField,
    pub start_date: RequiredField,
    pub end_date: RequiredField,
    pub reason: RequiredField,
    pub total_days: RwSignal<Option<u32>>,
    pub range_error: RwSignal<Option<String>>,
}

impl LeaveFormState {
    pub fn new() -> Self {
        Self {
            leave_type: RequiredField::new("Leave type"),
            start_date: RequiredField::new("Start date"),
            end_date: RequiredField::new("End date"),
            reason: RequiredField::new("Reason"),
            total_days: create_rw_signal(None),
            range_error: create_rw_signal(None),
        }
    }

    pub fn gate(&self) -> FormGate {
        FormGate::new(vec![
            self.leave_type,
            self.start_date,
            self.end_date,
            self.reason,
        ])
    }
}

impl Default for LeaveFormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Working-day total for the current inputs. An incomplete pair clears the
/// total rather than leaving a stale value; an inverted range is an error.
pub fn day_count(start_raw: &str, end_raw: &str) -> Result<Option<u32>, String> {
    if start_raw.is_empty() || end_raw.is_empty() {
        return Ok(None);
    }
    let start = parse_date(start_raw)?;
    let end = parse_date(end_raw)?;
    if start > end {
        return Err("Start date must be on or before the end date".to_string());
    }
    Ok(Some(business_days_inclusive(start, end)))
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| "Enter dates in YYYY-MM-DD format".to_string())
}
