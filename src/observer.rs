//! Typed change subscriptions.

use std::fmt;

/// Handle returned by [`Subscribers::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Handler<T> = Box<dyn FnMut(&T)>;

/// An ordered list of handlers for one event type.
///
/// Handlers run in registration order. Ids are never reused.
pub struct Subscribers<T> {
    handlers: Vec<(SubscriptionId, Handler<T>)>,
    next_id: u64,
}

impl<T> Default for Subscribers<T> {
    fn default() -> Self {
        Self {
            handlers: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> fmt::Debug for Subscribers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscribers")
            .field("len", &self.handlers.len())
            .finish()
    }
}

impl<T> Subscribers<T> {
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(&T) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Removes a handler. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(existing, _)| *existing != id);
        self.handlers.len() != before
    }

    pub fn emit(&mut self, event: &T) {
        for (_, handler) in &mut self.handlers {
            handler(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_emit_in_registration_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut subscribers = Subscribers::<u32>::default();

        let a = Rc::clone(&seen);
        subscribers.subscribe(move |v| a.borrow_mut().push(("a", *v)));
        let b = Rc::clone(&seen);
        subscribers.subscribe(move |v| b.borrow_mut().push(("b", *v)));

        subscribers.emit(&7);

        assert_eq!(*seen.borrow(), vec![("a", 7), ("b", 7)]);
    }

    #[test]
    fn test_unsubscribe() {
        let count = Rc::new(RefCell::new(0));
        let mut subscribers = Subscribers::<()>::default();

        let c = Rc::clone(&count);
        let id = subscribers.subscribe(move |_| *c.borrow_mut() += 1);

        subscribers.emit(&());
        assert!(subscribers.unsubscribe(id));
        assert!(!subscribers.unsubscribe(id));
        subscribers.emit(&());

        assert_eq!(*count.borrow(), 1);
        assert_eq!(format!("{subscribers:?}"), "Subscribers { len: 0 }");
    }
}
