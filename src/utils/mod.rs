mod maths_utils;
mod perf;
pub mod time_utils;

pub use maths_utils::{clamp_to, round_half_up};
pub use time_utils::{AppInstant, TimeUtils, day_label, local_today, offset_days};
