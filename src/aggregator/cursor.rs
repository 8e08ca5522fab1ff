//! Read-only views over a model's event sequence.

use crate::model::GcEvent;

/// Indexed, restartable view over a subset of a model's events
///
/// **Public** - returned by `GcModel::events` and its filtered variants
///
/// Views borrow the model, so the model cannot change while one is alive.
/// Order is always insertion order.
#[derive(Debug, Clone, Copy)]
pub struct EventView<'a> {
    events: &'a [GcEvent],
    indices: Option<&'a [usize]>,
}

impl<'a> EventView<'a> {
    pub(crate) fn all(events: &'a [GcEvent]) -> Self {
        Self {
            events,
            indices: None,
        }
    }

    pub(crate) fn filtered(events: &'a [GcEvent], indices: &'a [usize]) -> Self {
        Self {
            events,
            indices: Some(indices),
        }
    }

    pub fn len(&self) -> usize {
        match self.indices {
            Some(indices) => indices.len(),
            None => self.events.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Event at `position` within this view
    pub fn get(&self, position: usize) -> Option<&'a GcEvent> {
        match self.indices {
            Some(indices) => indices
                .get(position)
                .and_then(|index| self.events.get(*index)),
            None => self.events.get(position),
        }
    }

    pub fn first(&self) -> Option<&'a GcEvent> {
        self.get(0)
    }

    pub fn last(&self) -> Option<&'a GcEvent> {
        self.len().checked_sub(1).and_then(|position| self.get(position))
    }

    /// Fresh iterator from the start of the view
    pub fn iter(&self) -> EventIter<'a> {
        EventIter {
            view: *self,
            position: 0,
        }
    }
}

impl<'a> IntoIterator for EventView<'a> {
    type Item = &'a GcEvent;
    type IntoIter = EventIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over an `EventView`
#[derive(Debug, Clone)]
pub struct EventIter<'a> {
    view: EventView<'a>,
    position: usize,
}

impl<'a> Iterator for EventIter<'a> {
    type Item = &'a GcEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let event = self.view.get(self.position)?;
        self.position += 1;
        Some(event)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.view.len().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for EventIter<'_> {}
