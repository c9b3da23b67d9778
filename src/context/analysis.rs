// src/context/analysis.rs
// Line-counting heuristics behind the context summary

use super::Slot;

/// Delimiter between per-slot segments of the summary
pub const SUMMARY_DELIMITER: &str = " | ";

/// Descriptive statistics for one uploaded file.
///
/// Keyword counts are per line and case-insensitive. A line mentioning
/// several keywords counts once under each of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotStats {
    pub lines: usize,
    pub errors: usize,
    pub failures: usize,
    pub warnings: usize,
    pub alarms: usize,
}

impl SlotStats {
    pub fn scan(text: &str) -> Self {
        let mut stats = Self::default();
        for line in text.lines() {
            stats.lines += 1;
            let lower = line.to_lowercase();
            if lower.contains("error") {
                stats.errors += 1;
            }
            if lower.contains("fail") {
                stats.failures += 1;
            }
            if lower.contains("warn") {
                stats.warnings += 1;
            }
            if lower.contains("alarm") {
                stats.alarms += 1;
            }
        }
        stats
    }

    pub fn describe(&self, slot: Slot) -> String {
        format!(
            "{}: {} lines scanned, {} error indicators, {} failure indicators, {} warning indicators, {} alarm indicators",
            slot.label(),
            self.lines,
            self.errors,
            self.failures,
            self.warnings,
            self.alarms
        )
    }
}

/// Build the summary from the slots that currently hold text.
///
/// Returns `None` when nothing has been uploaded.
pub fn summarize<'a>(slots: impl IntoIterator<Item = (Slot, &'a str)>) -> Option<String> {
    let segments: Vec<String> = slots
        .into_iter()
        .map(|(slot, text)| SlotStats::scan(text).describe(slot))
        .collect();

    if segments.is_empty() {
        None
    } else {
        Some(segments.join(SUMMARY_DELIMITER))
    }
}
