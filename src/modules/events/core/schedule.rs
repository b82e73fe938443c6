// Pure scheduling rules over an insertion ordered list of events.
//
// Responsibilities
// - Decide whether a candidate span may join the schedule.
// - Select the events lying inside a reporting window and page through them.
// - Never perform input or output.

use crate::modules::events::core::event::{Event, EventPage};
use crate::modules::events::core::ports::EventStoreError;
use crate::shared::core::interval::{InvalidTimestamp, TimeSpan};

/// An event together with its parsed span, so stored dates are parsed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledEvent {
    pub event: Event,
    pub span: TimeSpan,
}

impl ScheduledEvent {
    pub fn new(event: Event, span: TimeSpan) -> Self {
        Self { event, span }
    }

    pub fn parse(event: Event) -> Result<Self, InvalidTimestamp> {
        let span = TimeSpan::parse(&event.start_date, &event.end_date)?;
        Ok(Self { event, span })
    }
}

/// First scheduled event, in insertion order, whose span overlaps `candidate`.
pub fn find_conflict<'a>(
    schedule: &'a [ScheduledEvent],
    candidate: &TimeSpan,
) -> Option<&'a ScheduledEvent> {
    schedule
        .iter()
        .find(|scheduled| scheduled.span.overlaps(candidate))
}

pub fn ensure_available(
    schedule: &[ScheduledEvent],
    candidate: &TimeSpan,
    start_date: &str,
    end_date: &str,
) -> Result<(), EventStoreError> {
    match find_conflict(schedule, candidate) {
        Some(conflict) => Err(EventStoreError::DateRangeUnavailable {
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
            conflicting_id: conflict.event.id.clone(),
        }),
        None => Ok(()),
    }
}

/// Events entirely inside `window`, skipping `offset` matches and keeping at most `limit`.
pub fn select_window(
    schedule: &[ScheduledEvent],
    window: &TimeSpan,
    offset: u64,
    limit: u64,
) -> EventPage {
    let offset = usize::try_from(offset).unwrap_or(usize::MAX);
    let limit = usize::try_from(limit).unwrap_or(usize::MAX);
    schedule
        .iter()
        .filter(|scheduled| window.contains(&scheduled.span))
        .skip(offset)
        .take(limit)
        .map(|scheduled| scheduled.event.clone())
        .collect::<Vec<_>>()
        .into()
}
