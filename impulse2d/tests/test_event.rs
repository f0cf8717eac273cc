use impulse2d::core::event::*;
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

#[test]
fn removed_handler_still_runs_in_current_dispatch() {
    let delegate = Rc::new(EventDelegate::<i32>::new());
    let log = Rc::new(RefCell::new(Vec::new()));
    let victim = Rc::new(Cell::new(None));

    let d = Rc::downgrade(&delegate);
    let l = log.clone();
    let v = victim.clone();
    delegate.add(move |x| {
        l.borrow_mut().push(("first", *x));
        if let (Some(d), Some(id)) = (d.upgrade(), v.get()) {
            d.remove(id);
        }
    });

    let l = log.clone();
    let id = delegate.add(move |x| l.borrow_mut().push(("second", *x)));
    victim.set(Some(id));

    delegate.dispatch(&1);
    delegate.dispatch(&2);
    assert_eq!(
        *log.borrow(),
        vec![("first", 1), ("second", 1), ("first", 2)]
    );
    assert_eq!(delegate.len(), 1);
}

#[test]
fn nested_dispatch_defers_until_outermost_returns() {
    let delegate = Rc::new(EventDelegate::<u32>::new());
    let log = Rc::new(RefCell::new(Vec::new()));

    let d = Rc::downgrade(&delegate);
    let l = log.clone();
    delegate.add(move |depth| {
        l.borrow_mut().push(format!("outer {depth}"));
        if *depth == 0 {
            if let Some(d) = d.upgrade() {
                let l = l.clone();
                d.add(move |depth| l.borrow_mut().push(format!("late {depth}")));
                d.dispatch(&1);
            }
        }
    });

    let l = log.clone();
    delegate.add(move |depth| l.borrow_mut().push(format!("plain {depth}")));

    delegate.dispatch(&0);
    // the first handler is busy while it dispatches, so the nested dispatch skips it
    assert_eq!(*log.borrow(), vec!["outer 0", "plain 1", "plain 0"]);
    assert_eq!(delegate.len(), 3);

    log.borrow_mut().clear();
    delegate.dispatch(&5);
    assert_eq!(*log.borrow(), vec!["outer 5", "plain 5", "late 5"]);
}

#[test]
fn remove_and_clear() {
    let delegate = EventDelegate::<()>::new();
    let calls = Rc::new(Cell::new(0));
    let c = calls.clone();
    let id = delegate.add(move |_| c.set(c.get() + 1));
    assert!(!delegate.is_empty());

    assert!(delegate.remove(id));
    assert!(!delegate.remove(id));
    delegate.dispatch(&());
    assert_eq!(calls.get(), 0);

    let shared: EventHandler<()> = Rc::new(RefCell::new(|_: &()| {}));
    delegate.add_shared(shared.clone());
    delegate.add_shared(shared);
    assert_eq!(delegate.len(), 2);
    delegate.clear();
    assert!(delegate.is_empty());
}
