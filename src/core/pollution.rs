/// Health category for a PM2.5 concentration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollutionStatus {
    Clean,
    SlightlyPolluted,
    Polluted,
    Harmful,
    VeryHarmful,
}

/// Exclusive upper bounds in µg/m³, checked in ascending order.
const THRESHOLDS: [(f64, PollutionStatus); 4] = [
    (12.0, PollutionStatus::Clean),
    (35.0, PollutionStatus::SlightlyPolluted),
    (55.0, PollutionStatus::Polluted),
    (150.0, PollutionStatus::Harmful),
];

impl PollutionStatus {
    pub fn classify(pm25: f64) -> Self {
        THRESHOLDS
            .iter()
            .find(|(upper, _)| pm25 < *upper)
            .map(|(_, status)| *status)
            .unwrap_or(PollutionStatus::VeryHarmful)
    }

    pub fn label(&self) -> &'static str {
        match self {
            PollutionStatus::Clean => "🟢 Clean air",
            PollutionStatus::SlightlyPolluted => "🟡 Slightly polluted",
            PollutionStatus::Polluted => "🟠 Polluted, sensitive people take care!",
            PollutionStatus::Harmful => "🔴 Harmful, better not go out without a mask!",
            PollutionStatus::VeryHarmful => "☠️ Very harmful, stay at home!",
        }
    }
}
