use crate::model::quran::{verse_count, QuranProgress, SURAH_VERSE_COUNTS};

/// Memorized and total ayah counts for one surah; None for an
/// out-of-range surah number.
pub fn surah_progress(progress: &QuranProgress, surah: u16) -> Option<(u32, u32)> {
    let total = verse_count(surah)?;
    let memorized = progress.get(&surah).map(|s| s.len() as u32).unwrap_or(0);
    Some((memorized, total as u32))
}

/// A surah counts as completed only when every ayah is memorized.
pub fn is_surah_completed(progress: &QuranProgress, surah: u16) -> bool {
    matches!(surah_progress(progress, surah), Some((m, t)) if m == t)
}

/// Memorized and total ayah counts across the whole text.
pub fn overall_progress(progress: &QuranProgress) -> (u32, u32) {
    let memorized = progress.values().map(|s| s.len() as u32).sum();
    let total = SURAH_VERSE_COUNTS.iter().map(|&n| n as u32).sum();
    (memorized, total)
}
