//! The campaign week: `Weekday`, `WeeklyHours`, and appointment `TimeSlot`s.
//!
//! Day indices follow the campaign convention: Monday = 0 … Sunday = 6.

use std::fmt;

use crate::{CampaignError, CampaignResult};

/// Number of days in a campaign week.
pub const DAYS_PER_WEEK: usize = 7;

/// No hub may open for more than this many hours on a single day.
pub const MAX_DAILY_HOURS: u32 = 12;

// ── Weekday ──────────────────────────────────────────────────────────────────

/// A day of the campaign week.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Every day, Monday first.  Week-level iteration always uses this order.
    pub const ALL: [Weekday; DAYS_PER_WEEK] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Day index, Monday = 0.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`index`](Self::index).  `None` for indices above 6.
    pub fn from_index(index: usize) -> Option<Weekday> {
        Self::ALL.get(index).copied()
    }
}

impl TryFrom<usize> for Weekday {
    type Error = CampaignError;

    fn try_from(index: usize) -> CampaignResult<Weekday> {
        Weekday::from_index(index)
            .ok_or_else(|| CampaignError::Config(format!("day index {index} is not in 0..=6")))
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Weekday::Monday    => "Mon",
            Weekday::Tuesday   => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday  => "Thu",
            Weekday::Friday    => "Fri",
            Weekday::Saturday  => "Sat",
            Weekday::Sunday    => "Sun",
        };
        f.write_str(name)
    }
}

// ── TimeSlot ─────────────────────────────────────────────────────────────────

/// Start time of one appointment, rendered as `"HH:MM"`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct TimeSlot {
    pub hour:   u32,
    pub minute: u32,
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

// ── WeeklyHours ──────────────────────────────────────────────────────────────

/// Working hours for each day of the week, Monday first.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeeklyHours {
    hours: [u32; DAYS_PER_WEEK],
}

impl WeeklyHours {
    /// Validate and store the seven daily working-hour counts.
    ///
    /// Fails with [`CampaignError::Config`] unless there are exactly seven
    /// entries and each is at most [`MAX_DAILY_HOURS`].  The weekly total is not
    /// bounded separately.
    pub fn new(hours: &[u32]) -> CampaignResult<Self> {
        let hours: [u32; DAYS_PER_WEEK] = hours.try_into().map_err(|_| {
            CampaignError::Config(format!(
                "expected {DAYS_PER_WEEK} daily working hours, got {}",
                hours.len()
            ))
        })?;
        if let Some((day, h)) = hours
            .iter()
            .enumerate()
            .find(|&(_, &h)| h > MAX_DAILY_HOURS)
        {
            return Err(CampaignError::Config(format!(
                "{} has {h} working hours; at most {MAX_DAILY_HOURS} allowed",
                Weekday::ALL[day]
            )));
        }
        Ok(Self { hours })
    }

    #[inline]
    pub fn hours(&self, day: Weekday) -> u32 {
        self.hours[day.index()]
    }

    pub fn as_array(&self) -> [u32; DAYS_PER_WEEK] {
        self.hours
    }

    pub fn total(&self) -> u32 {
        self.hours.iter().sum()
    }

    /// Appointment start times for one day.
    ///
    /// Slots begin at `first_hour:00` and repeat every `slot_minutes` minutes
    /// for each working hour of the day, e.g. 2 hours from 9:00 at 15-minute
    /// slots gives `09:00 09:15 … 10:45`.
    pub fn time_slots(&self, day: Weekday, first_hour: u32, slot_minutes: u32) -> Vec<TimeSlot> {
        let step = slot_minutes.clamp(1, 60);
        let per_hour = 60 / step;
        (0..self.hours(day))
            .flat_map(|h| {
                (0..per_hour).map(move |k| TimeSlot { hour: first_hour + h, minute: k * step })
            })
            .collect()
    }

    /// [`time_slots`](Self::time_slots) for every day, Monday first.
    pub fn week_time_slots(&self, first_hour: u32, slot_minutes: u32) -> Vec<Vec<TimeSlot>> {
        Weekday::ALL
            .iter()
            .map(|&day| self.time_slots(day, first_hour, slot_minutes))
            .collect()
    }
}
