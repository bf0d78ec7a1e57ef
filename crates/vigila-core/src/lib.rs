//! Consolidation engine for surveillance notification extracts.
//!
//! Takes already-parsed tabular sources, reconciles their schemas,
//! collapses re-notifications of the same clinical episode, and
//! produces one consolidated table plus per-event case counts.

pub mod data_utils;
pub mod dates;
pub mod episode;
pub mod filter;
pub mod identity;
pub mod merge;
pub mod pipeline;
pub mod select;
pub mod summary;

pub use data_utils::{any_to_string, column_value_string};
pub use dates::{
    DatedFrame, append_epi_week, parse_notification_date, parse_notification_date_dayfirst,
    resolve_dates,
};
pub use episode::{EPISODE_GAP_DAYS, EpisodeFrame, episode_key, group_episodes};
pub use filter::{filter_suspected, find_classification_column};
pub use identity::{IdentityDrops, clean_identifiers, extract_digit_run};
pub use merge::merge_sources;
pub use pipeline::{ConsolidateOptions, ConsolidateOutput, run_consolidation};
pub use select::select_canonical;
pub use summary::summarize_events;
