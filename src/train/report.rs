use serde::{Serialize, Deserialize};

/// Summary of one completed training run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainReport {
    /// Worker threads used.
    pub workers: usize,
    /// Epochs each worker ran.
    pub epochs_per_worker: usize,
    /// Wall-clock duration of the whole run in milliseconds.
    pub elapsed_ms: u64,
}

/// Renders a millisecond count using the largest units that apply,
/// e.g. `2m 3s 450ms`.
pub fn format_elapsed(ms: u64) -> String {
    let days = ms / 86_400_000;
    let hours = ms % 86_400_000 / 3_600_000;
    let minutes = ms % 3_600_000 / 60_000;
    let seconds = ms % 60_000 / 1_000;
    let millis = ms % 1_000;

    if ms >= 86_400_000 {
        format!("{}d {}h {}m {}s {}ms", days, hours, minutes, seconds, millis)
    } else if ms >= 3_600_000 {
        format!("{}h {}m {}s {}ms", hours, minutes, seconds, millis)
    } else if ms >= 60_000 {
        format!("{}m {}s {}ms", minutes, seconds, millis)
    } else if ms >= 1_000 {
        format!("{}s {}ms", seconds, millis)
    } else {
        format!("{}ms", millis)
    }
}
