use std::collections::VecDeque;

use super::WorldEvent;

/// Observer receiving world events synchronously as commands execute.
///
/// Implementations must not call back into the session; a command's
/// hide → mutate → show sequence is atomic.
pub trait PresentationSink {
    fn handle(&mut self, event: WorldEvent);
}

impl<S: PresentationSink + ?Sized> PresentationSink for &mut S {
    fn handle(&mut self, event: WorldEvent) {
        (**self).handle(event);
    }
}

/// Queue-backed sink for presentation layers that drain events once per
/// frame instead of reacting inline.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<WorldEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and yields all queued events in emission order.
    pub fn drain(&mut self) -> impl Iterator<Item = WorldEvent> + '_ {
        self.events.drain(..)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl PresentationSink for EventQueue {
    fn handle(&mut self, event: WorldEvent) {
        self.events.push_back(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::GridDimensions;

    #[test]
    fn queue_preserves_emission_order() {
        let mut queue = EventQueue::new();
        queue.handle(WorldEvent::WorldInitialized {
            dimensions: GridDimensions::new(2, 2),
        });
        queue.handle(WorldEvent::InventoryChanged { items: Vec::new() });

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(drained.len(), 2);
        assert!(matches!(drained[0], WorldEvent::WorldInitialized { .. }));
        assert!(matches!(drained[1], WorldEvent::InventoryChanged { .. }));
        assert!(queue.is_empty());
    }
}
