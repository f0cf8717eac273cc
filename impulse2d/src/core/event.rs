//! Multicast callbacks used by entities and cameras to announce movement, rotation and zoom.

use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::Rc,
};

/// Handle returned by [EventDelegate::add], used to remove the handler again.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

/// Shared handler signature.
pub type EventHandler<A> = Rc<RefCell<dyn FnMut(&A)>>;

enum PendingOp<A: 'static> {
    Add(HandlerId, EventHandler<A>),
    Remove(HandlerId),
}

/// Ordered list of handlers invoked with the same argument.
///
/// All methods take `&self`, so a handler may add or remove handlers (itself included) on the
/// delegate that is currently dispatching. Such changes are queued and applied once the
/// outermost [EventDelegate::dispatch] returns; the running dispatch always walks the handler
/// list as it was when it started.
///
/// A handler that re-enters a dispatch which would call itself again is skipped for that nested
/// dispatch.
///
/// # Examples
///
/// ```
/// # use impulse2d::core::event::*;
/// # use std::{cell::Cell, rc::Rc};
/// let delegate = EventDelegate::<i32>::new();
/// let total = Rc::new(Cell::new(0));
/// let t = total.clone();
/// let id = delegate.add(move |v| t.set(t.get() + *v));
/// delegate.dispatch(&5);
/// assert_eq!(total.get(), 5);
/// assert!(delegate.remove(id));
/// delegate.dispatch(&5);
/// assert_eq!(total.get(), 5);
/// ```
pub struct EventDelegate<A: 'static> {
    handlers: RefCell<Vec<(HandlerId, EventHandler<A>)>>,
    pending: RefCell<Vec<PendingOp<A>>>,
    next_id: Cell<u64>,
    dispatch_depth: Cell<usize>,
}

impl<A: 'static> EventDelegate<A> {
    pub fn new() -> Self {
        EventDelegate {
            handlers: RefCell::new(Vec::new()),
            pending: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
            dispatch_depth: Cell::new(0),
        }
    }

    /// Register `handler`, it is called after all previously registered handlers.
    pub fn add<F>(&self, handler: F) -> HandlerId
    where
        F: FnMut(&A) + 'static,
    {
        self.add_shared(Rc::new(RefCell::new(handler)))
    }

    /// Register an already shared handler.
    pub fn add_shared(&self, handler: EventHandler<A>) -> HandlerId {
        let id = HandlerId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        if self.is_dispatching() {
            self.pending.borrow_mut().push(PendingOp::Add(id, handler));
        } else {
            self.handlers.borrow_mut().push((id, handler));
        }

        id
    }

    /// Unregister the handler with `id`. Returns false if no such handler is registered (or
    /// queued for registration).
    pub fn remove(&self, id: HandlerId) -> bool {
        if self.is_dispatching() {
            let known = self.handlers.borrow().iter().any(|(h, _)| *h == id)
                || self
                    .pending
                    .borrow()
                    .iter()
                    .any(|op| matches!(op, PendingOp::Add(h, _) if *h == id));
            if known {
                self.pending.borrow_mut().push(PendingOp::Remove(id));
            }
            return known;
        }

        let mut handlers = self.handlers.borrow_mut();
        match handlers.iter().position(|(h, _)| *h == id) {
            Some(i) => {
                handlers.remove(i);
                true
            }
            None => false,
        }
    }

    /// Call every registered handler in registration order with `arg`.
    pub fn dispatch(&self, arg: &A) {
        let snapshot: Vec<EventHandler<A>> = self
            .handlers
            .borrow()
            .iter()
            .map(|(_, h)| Rc::clone(h))
            .collect();

        self.dispatch_depth.set(self.dispatch_depth.get() + 1);
        for handler in snapshot {
            match handler.try_borrow_mut() {
                Ok(mut f) => (&mut *f)(arg),
                Err(_) => log::warn!("skipping handler already running in an outer dispatch"),
            }
        }
        self.dispatch_depth.set(self.dispatch_depth.get() - 1);

        if !self.is_dispatching() {
            self.apply_pending();
        }
    }

    /// Number of registered handlers, not counting queued changes.
    pub fn len(&self) -> usize {
        self.handlers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove all handlers.
    pub fn clear(&self) {
        if self.is_dispatching() {
            let ids: Vec<HandlerId> = self.handlers.borrow().iter().map(|(h, _)| *h).collect();
            let mut pending = self.pending.borrow_mut();
            pending.retain(|op| !matches!(op, PendingOp::Add(..)));
            pending.extend(ids.into_iter().map(PendingOp::Remove));
        } else {
            self.handlers.borrow_mut().clear();
        }
    }

    #[inline]
    fn is_dispatching(&self) -> bool {
        self.dispatch_depth.get() > 0
    }

    fn apply_pending(&self) {
        let ops = std::mem::take(&mut *self.pending.borrow_mut());
        let mut handlers = self.handlers.borrow_mut();
        for op in ops {
            match op {
                PendingOp::Add(id, h) => handlers.push((id, h)),
                PendingOp::Remove(id) => handlers.retain(|(h, _)| *h != id),
            }
        }
    }
}

impl<A: 'static> Default for EventDelegate<A> {
    fn default() -> Self {
        EventDelegate::new()
    }
}

impl<A: 'static> fmt::Debug for EventDelegate<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventDelegate")
            .field("handlers", &self.len())
            .field("pending", &self.pending.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_in_registration_order() {
        let delegate = EventDelegate::<u32>::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for tag in 0..3 {
            let log = log.clone();
            delegate.add(move |v| log.borrow_mut().push(tag * 10 + *v));
        }
        delegate.dispatch(&1);
        assert_eq!(*log.borrow(), vec![1, 11, 21]);
        assert_eq!(delegate.len(), 3);
    }

    #[test]
    fn handler_removes_itself() {
        let delegate = Rc::new(EventDelegate::<()>::new());
        let calls = Rc::new(Cell::new(0));
        let own_id = Rc::new(Cell::new(None));

        let d = Rc::downgrade(&delegate);
        let c = calls.clone();
        let slot = own_id.clone();
        let id = delegate.add(move |_| {
            c.set(c.get() + 1);
            if let (Some(d), Some(id)) = (d.upgrade(), slot.get()) {
                assert!(d.remove(id));
            }
        });
        own_id.set(Some(id));

        let other_calls = Rc::new(Cell::new(0));
        let oc = other_calls.clone();
        delegate.add(move |_| oc.set(oc.get() + 1));

        delegate.dispatch(&());
        assert_eq!(calls.get(), 1);
        assert_eq!(other_calls.get(), 1);
        assert_eq!(delegate.len(), 1);

        delegate.dispatch(&());
        assert_eq!(calls.get(), 1);
        assert_eq!(other_calls.get(), 2);
    }

    #[test]
    fn add_during_dispatch_is_deferred() {
        let delegate = Rc::new(EventDelegate::<()>::new());
        let late_calls = Rc::new(Cell::new(0));

        let d = Rc::downgrade(&delegate);
        let lc = late_calls.clone();
        delegate.add(move |_| {
            if let Some(d) = d.upgrade() {
                let lc = lc.clone();
                d.add(move |_| lc.set(lc.get() + 1));
            }
        });

        delegate.dispatch(&());
        assert_eq!(late_calls.get(), 0);
        assert_eq!(delegate.len(), 2);

        delegate.dispatch(&());
        assert_eq!(late_calls.get(), 1);
        assert_eq!(delegate.len(), 3);
    }

    #[test]
    fn remove_unknown_id() {
        let delegate = EventDelegate::<()>::new();
        let id = delegate.add(|_| {});
        assert!(delegate.remove(id));
        assert!(!delegate.remove(id));
        assert!(delegate.is_empty());
    }
}
