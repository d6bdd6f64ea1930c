use std::cell::RefCell;
use std::rc::Rc;

pub type SubId = usize;

type Subscriber<T> = Box<dyn Fn(&T)>;

/// Observable value. Every `set`/`update` runs the subscribers synchronously,
/// even when the new value equals the old one.
///
/// Subscribers must not read or write the signal they are attached to.
#[derive(Clone)]
pub struct Signal<T: 'static>(Rc<RefCell<Inner<T>>>);

struct Inner<T> {
    value: T,
    subs: Vec<Option<Subscriber<T>>>,
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(Inner {
            value,
            subs: Vec::new(),
        })))
    }
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.borrow().value.clone()
    }
    pub fn set(&self, v: T) {
        let mut inner = self.0.borrow_mut();
        inner.value = v;
        let inner = &*inner;
        for s in inner.subs.iter().flatten() {
            s(&inner.value);
        }
    }
    pub fn update<F: FnOnce(&mut T)>(&self, f: F) {
        let mut inner = self.0.borrow_mut();
        f(&mut inner.value);
        let inner = &*inner;
        for s in inner.subs.iter().flatten() {
            s(&inner.value);
        }
    }
    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubId {
        let mut inner = self.0.borrow_mut();
        inner.subs.push(Some(Box::new(f)));
        inner.subs.len() - 1
    }
    pub fn unsubscribe(&self, id: SubId) {
        if let Some(slot) = self.0.borrow_mut().subs.get_mut(id) {
            *slot = None;
        }
    }
}

pub fn signal<T>(t: T) -> Signal<T> {
    Signal::new(t)
}

/// Fire-and-forget event channel: like [`Signal`] but without a stored value.
pub struct Emitter<T: 'static> {
    subs: RefCell<Vec<Option<Subscriber<T>>>>,
}

impl<T> Default for Emitter<T> {
    fn default() -> Self {
        Self {
            subs: RefCell::new(Vec::new()),
        }
    }
}

impl<T> Emitter<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubId {
        let mut subs = self.subs.borrow_mut();
        subs.push(Some(Box::new(f)));
        subs.len() - 1
    }

    pub fn unsubscribe(&self, id: SubId) {
        if let Some(slot) = self.subs.borrow_mut().get_mut(id) {
            *slot = None;
        }
    }

    pub fn emit(&self, value: &T) {
        for s in self.subs.borrow().iter().flatten() {
            s(value);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.subs.borrow().iter().flatten().count()
    }
}
