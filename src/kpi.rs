//! KPI label and icon lookup tables
//!
//! Process-wide immutable tables, initialized once. The icon tables are
//! ordered: partial matching walks them top to bottom and the first term
//! contained in the key wins, so entry order is part of the contract.

/// Fallback icon when no term matches.
pub const DEFAULT_ICON: &str = "insights";

/// Human-readable labels for the raw call-report metric keys.
/// Exact, case-sensitive lookup; unknown keys pass through unchanged.
pub const KPI_LABELS: &[(&str, &str)] = &[
    ("total", "Total"),
    ("inbound", "Inbound"),
    ("outbound", "Outbound"),
    ("answered_pct", "Answered %"),
    ("missed_pct", "Missed %"),
    ("vm_pct", "Voicemail %"),
    ("blocked_pct", "Blocked %"),
    ("avg_dur", "Avg Duration"),
    ("median_dur", "Median Duration"),
    ("talk_time", "Total Talk Time"),
    ("longest", "Longest Call"),
    ("peak_hour", "Peak Hour"),
];

/// Map a raw metric key to its display label, falling back to the key.
pub fn label(key: &str) -> &str {
    KPI_LABELS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .unwrap_or(key)
}

/// Ordered term → icon table with exact-then-substring resolution.
pub struct IconResolver {
    entries: &'static [(&'static str, &'static str)],
    default_icon: &'static str,
}

impl IconResolver {
    pub const fn new(
        entries: &'static [(&'static str, &'static str)],
        default_icon: &'static str,
    ) -> Self {
        Self {
            entries,
            default_icon,
        }
    }

    /// Resolve a metric key to an icon identifier.
    ///
    /// Lower-cases the key, then tries an exact term match, then the
    /// first entry (in declared order) whose term is contained in the
    /// key, then the default.
    pub fn resolve(&self, key: &str) -> &'static str {
        let key = key.to_lowercase();

        if let Some((_, icon)) = self.entries.iter().find(|(term, _)| *term == key) {
            return icon;
        }

        for (term, icon) in self.entries {
            if key.contains(term) {
                return icon;
            }
        }

        self.default_icon
    }
}

/// Icon table for the call-history report.
pub static CALL_ICONS: IconResolver = IconResolver::new(
    &[
        ("total", "functions"),
        ("inbound", "call_received"),
        ("outbound", "call_made"),
        ("time", "access_time"),
        ("answered", "check_circle"),
        ("missed", "phone_missed"),
        ("vm_pct", "voicemail"),
        ("voicemail", "voicemail"),
        ("blocked", "block"),
        ("avg", "timeline"),
        ("median", "linear_scale"),
        ("talk_time", "record_voice_over"),
        ("talk", "record_voice_over"),
        ("longest", "timer"),
        ("peak", "trending_up"),
        ("hour", "schedule"),
        ("duration", "schedule"),
        ("dur", "schedule"),
        ("owner", "person"),
        ("number", "dialpad"),
        ("location", "place"),
        ("day", "today"),
        ("date", "today"),
        ("result", "donut_large"),
        ("call", "call"),
    ],
    DEFAULT_ICON,
);

/// Icon table for the queue analytics report.
pub static QUEUE_ICONS: IconResolver = IconResolver::new(
    &[
        ("offered", "call"),
        ("answered", "check_circle"),
        ("abandoned", "phone_missed"),
        ("abandonment", "call_end"),
        ("overflow", "shuffle"),
        ("answer_rate", "percent"),
        ("rate", "percent"),
        ("wait", "hourglass_empty"),
        ("handle", "headset_mic"),
        ("agent", "support_agent"),
        ("efficiency", "speed"),
        ("queue", "queue"),
        ("peak", "trending_up"),
        ("worst", "trending_down"),
        ("interval", "schedule"),
        ("service", "verified"),
        ("trend", "show_chart"),
        ("hour", "schedule"),
        ("volume", "bar_chart"),
        ("max", "vertical_align_top"),
        ("min", "vertical_align_bottom"),
        ("avg", "timeline"),
        ("sec", "timer"),
        ("total", "functions"),
        ("call", "call"),
        ("summary", "description"),
        ("date", "today"),
        ("chart", "insert_chart"),
    ],
    DEFAULT_ICON,
);

/// Resolve an icon for a call-report metric key.
pub fn call_icon(key: &str) -> &'static str {
    CALL_ICONS.resolve(key)
}

/// Resolve an icon for a queue-report metric key.
pub fn queue_icon(key: &str) -> &'static str {
    QUEUE_ICONS.resolve(key)
}
