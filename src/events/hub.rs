//! Ordered intent dispatch.
//!
//! Global ECS observers make no ordering promise between listeners, so the
//! intent pipeline fans out through an explicit hub instead: one
//! [`IntentHub`] resource per intent type holds its listeners in
//! subscription order, and [`publish`] runs them front to back with full
//! `&mut World` access. [`subscribe`] returns a [`Subscription`] handle;
//! [`unsubscribe`] removes exactly the listener that handle was issued for.
//!
//! Publishing an intent type with no hub (nobody ever subscribed) is a
//! silent no-op. Handlers must not publish or subscribe to the intent type
//! they are currently handling; the hub is detached from the world while
//! its listeners run.

use bevy_ecs::prelude::*;

type Handler<E> = Box<dyn FnMut(&mut World, &E) + Send + Sync>;

/// Handle identifying one hub listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// Listener list for one intent type, in subscription order.
pub struct IntentHub<E> {
    listeners: Vec<(Subscription, Handler<E>)>,
    next_id: u64,
}

impl<E: Send + Sync + 'static> Resource for IntentHub<E> {}

impl<E> Default for IntentHub<E> {
    fn default() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 0,
        }
    }
}

impl<E> IntentHub<E> {
    /// Append a listener; it will run after every listener already present.
    pub fn subscribe(
        &mut self,
        handler: impl FnMut(&mut World, &E) + Send + Sync + 'static,
    ) -> Subscription {
        let id = Subscription(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(handler)));
        id
    }

    /// Remove the listener behind `subscription`. Returns whether anything
    /// was removed; a stale handle is a no-op.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| *id != subscription);
        self.listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

/// Subscribe a listener for `E` on this world, creating the hub on first use.
pub fn subscribe<E, F>(world: &mut World, handler: F) -> Subscription
where
    E: Send + Sync + 'static,
    F: FnMut(&mut World, &E) + Send + Sync + 'static,
{
    world
        .get_resource_or_insert_with(IntentHub::<E>::default)
        .subscribe(handler)
}

/// Drop the listener behind `subscription`.
pub fn unsubscribe<E: Send + Sync + 'static>(
    world: &mut World,
    subscription: Subscription,
) -> bool {
    match world.get_resource_mut::<IntentHub<E>>() {
        Some(mut hub) => hub.unsubscribe(subscription),
        None => false,
    }
}

/// Deliver `event` to every listener, in subscription order, synchronously.
pub fn publish<E: Send + Sync + 'static>(world: &mut World, event: E) {
    if !world.contains_resource::<IntentHub<E>>() {
        return;
    }
    world.resource_scope(|world, mut hub: Mut<IntentHub<E>>| {
        for (_, handler) in hub.listeners.iter_mut() {
            handler(world, &event);
        }
    });
}

/// Queue a publish from a system context; it runs at the next command
/// application point of the schedule.
pub fn publish_deferred<E: Send + Sync + 'static>(commands: &mut Commands, event: E) {
    commands.queue(move |world: &mut World| publish(world, event));
}
