// src/commands/summary.rs

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::collections::HashMap;
use std::path::Path;

use crate::errors::AppResult;
use crate::persistence;
use crate::types::WindowRecord;
use crate::utils::{format_minutes, parse_timestamp};

const TOP_ACTIVITY_LIMIT: usize = 5;
// Weight of a record with no successor in the log.
const LAST_RECORD_MINUTES: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineBlock {
    pub start: NaiveDateTime,
    pub minutes: u64,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub total_minutes: f64,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub top_activities: Vec<(String, f64)>,
    pub timeline: Vec<TimelineBlock>,
}

/// Builds the summary for one day. A record lasts until the next record in
/// file order, whatever day that one falls on.
pub fn summarize(records: &[WindowRecord], date: NaiveDate) -> DaySummary {
    let parsed: Vec<(NaiveDateTime, &str)> = records
        .iter()
        .filter_map(|record| match parse_timestamp(&record.timestamp) {
            Some(at) => Some((at, record.title.as_str())),
            None => {
                log::warn!("Skipping row with unreadable timestamp '{}'", record.timestamp);
                None
            }
        })
        .collect();

    let mut total_minutes = 0.0;
    let mut start_time: Option<NaiveDateTime> = None;
    let mut end_time: Option<NaiveDateTime> = None;
    let mut per_title: HashMap<String, f64> = HashMap::new();
    let mut timeline = Vec::new();

    for (index, (at, title)) in parsed.iter().enumerate() {
        if at.date() != date {
            continue;
        }
        let minutes = match parsed.get(index + 1) {
            Some((next, _)) => (*next - *at).num_milliseconds() as f64 / 60_000.0,
            None => LAST_RECORD_MINUTES,
        };

        total_minutes += minutes;
        start_time = Some(start_time.map_or(*at, |s| s.min(*at)));
        end_time = Some(end_time.map_or(*at, |e| e.max(*at)));
        *per_title.entry(title.to_string()).or_insert(0.0) += minutes;

        if minutes > 1.0 {
            timeline.push(TimelineBlock {
                start: *at,
                minutes: minutes.ceil() as u64,
                title: title.to_string(),
            });
        }
    }

    let mut top_activities: Vec<(String, f64)> = per_title.into_iter().collect();
    top_activities.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    top_activities.truncate(TOP_ACTIVITY_LIMIT);

    DaySummary { date, total_minutes, start_time, end_time, top_activities, timeline }
}

fn print_summary(summary: &DaySummary) {
    println!("\n--- Activity Summary for {} ---", summary.date.format("%A, %B %-d, %Y"));
    if summary.top_activities.is_empty() {
        println!("  No activity recorded.");
        println!("---------------------------------------------");
        return;
    }

    if let (Some(start), Some(end)) = (summary.start_time, summary.end_time) {
        println!("  First seen : {}", start.format("%H:%M"));
        println!("  Last seen  : {}", end.format("%H:%M"));
    }
    println!("  Total time : {}", format_minutes(summary.total_minutes));

    println!("\n--- Top Activities ---");
    for (title, minutes) in &summary.top_activities {
        println!("  {:<50}: {}", title, format_minutes(*minutes));
    }

    if !summary.timeline.is_empty() {
        println!("\n--- Timeline ---");
        for block in &summary.timeline {
            println!("  {} {:>4}m  {}", block.start.format("%H:%M"), block.minutes, block.title);
        }
    }
    println!("---------------------------------------------");
}

pub fn execute(data_path: &Path, date: Option<NaiveDate>, json: bool) -> AppResult<()> {
    let date = date.unwrap_or_else(|| Local::now().date_naive());
    log::debug!("Summarizing {:?} for {}", data_path, date);

    let records = persistence::read_records(data_path)?;
    let summary = summarize(&records, date);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(timestamp: &str, title: &str) -> WindowRecord {
        WindowRecord { timestamp: timestamp.to_string(), title: title.to_string(), window_identifier: 1 }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 8, d).unwrap()
    }

    #[test]
    fn durations_run_until_the_next_record() {
        let records = vec![
            row("2024-08-09T09:00:00.000000", "Editor"),
            row("2024-08-09T09:30:00.000000", "Browser"),
            row("2024-08-09T09:40:00.000000", "Editor"),
        ];
        let summary = summarize(&records, day(9));

        assert_eq!(summary.total_minutes, 41.0);
        assert_eq!(summary.top_activities, vec![("Editor".to_string(), 31.0), ("Browser".to_string(), 10.0)]);
        assert_eq!(summary.start_time, parse_timestamp("2024-08-09T09:00:00"));
        assert_eq!(summary.end_time, parse_timestamp("2024-08-09T09:40:00"));
    }

    #[test]
    fn timeline_keeps_blocks_longer_than_a_minute() {
        let records = vec![
            row("2024-08-09T09:00:00.000000", "Editor"),
            row("2024-08-09T09:00:30.000000", "Chat"),
            row("2024-08-09T09:02:45.000000", "Editor"),
        ];
        let summary = summarize(&records, day(9));

        let titles: Vec<(&str, u64)> = summary.timeline.iter().map(|b| (b.title.as_str(), b.minutes)).collect();
        assert_eq!(titles, vec![("Chat", 3)]);
    }

    #[test]
    fn only_the_requested_day_counts() {
        let records = vec![
            row("2024-08-08T23:50:00.000000", "Late"),
            row("2024-08-09T00:10:00.000000", "Early"),
        ];
        let summary = summarize(&records, day(9));
        assert_eq!(summary.top_activities, vec![("Early".to_string(), 1.0)]);

        let previous = summarize(&records, day(8));
        assert_eq!(previous.top_activities, vec![("Late".to_string(), 20.0)]);
    }

    #[test]
    fn top_activities_are_capped_at_five() {
        let records: Vec<WindowRecord> = (0..8)
            .map(|i| row(&format!("2024-08-09T10:{:02}:00.000000", i * (i + 1)), &format!("App {}", i)))
            .collect();
        let summary = summarize(&records, day(9));
        assert_eq!(summary.top_activities.len(), 5);
        assert_eq!(summary.top_activities[0].0, "App 6");
    }

    #[test]
    fn unreadable_timestamps_are_ignored() {
        let records = vec![row("not a time", "Ghost"), row("2024-08-09T09:00:00.000000", "Editor")];
        let summary = summarize(&records, day(9));
        assert_eq!(summary.top_activities, vec![("Editor".to_string(), 1.0)]);
    }

    #[test]
    fn empty_log_yields_empty_summary() {
        let summary = summarize(&[], day(9));
        assert_eq!(summary.total_minutes, 0.0);
        assert!(summary.start_time.is_none());
        assert!(summary.timeline.is_empty());
    }
}
