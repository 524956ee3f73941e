//! Schedule priority hint carried by a pending pod.

use std::fmt::{Display, Formatter};
use serde::Serialize;

/// Priority hint decoded from an integer-valued env var on the pod.
/// Every integer decodes to exactly one member, out-of-range values
/// fall through to `AllRandom`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum SchedulePriority {
    Ignore,
    OneNormal,
    AllNormal,
    AllSpot,
    AllRandom,
}

impl From<i64> for SchedulePriority {
    fn from(value: i64) -> Self {
        match value {
            0 => SchedulePriority::Ignore,
            1 => SchedulePriority::OneNormal,
            2 => SchedulePriority::AllNormal,
            3 => SchedulePriority::AllSpot,
            _ => SchedulePriority::AllRandom,
        }
    }
}

impl Display for SchedulePriority {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            SchedulePriority::Ignore => write!(f, "ignore"),
            SchedulePriority::OneNormal => write!(f, "one-normal"),
            SchedulePriority::AllNormal => write!(f, "all-normal"),
            SchedulePriority::AllSpot => write!(f, "all-spot"),
            SchedulePriority::AllRandom => write!(f, "all-random"),
        }
    }
}
