//! Observable values for the UI models.
//!
//! A [`Property`] holds a value and notifies its listeners synchronously
//! whenever the value actually changes. Derived values and one-way bindings
//! are plain listeners that write into another property, so the whole
//! dependency graph is updated before `set` returns.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type Listener<T> = Box<dyn FnMut(&T)>;

struct Inner<T> {
    value: T,
    listeners: Vec<Listener<T>>,
}

/// Shared, single-threaded observable value.
///
/// Cloning a `Property` yields another handle to the same cell.
pub struct Property<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Property<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Property").field(&self.inner.borrow().value).finish()
    }
}

impl<T: Default + Clone + PartialEq + 'static> Default for Property<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + PartialEq + 'static> Property<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                listeners: Vec::new(),
            })),
        }
    }

    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Stores `value` and notifies listeners. Returns `false` without
    /// notifying anyone when the value is unchanged.
    pub fn set(&self, value: T) -> bool {
        let mut listeners = {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return false;
            }
            inner.value = value.clone();
            std::mem::take(&mut inner.listeners)
        };

        // No borrow is held here, listeners may read this property.
        for listener in listeners.iter_mut() {
            listener(&value);
        }

        let mut inner = self.inner.borrow_mut();
        let added = std::mem::replace(&mut inner.listeners, listeners);
        inner.listeners.extend(added);
        true
    }

    pub fn subscribe(&self, listener: impl FnMut(&T) + 'static) {
        self.inner.borrow_mut().listeners.push(Box::new(listener));
    }

    /// One-way binding: `target` takes the current value now and follows
    /// every later change. Only a weak handle to `target` is kept.
    pub fn bind(&self, target: &Property<T>) {
        target.set(self.get());
        let target = target.downgrade();
        self.subscribe(move |value| {
            if let Some(target) = target.upgrade() {
                target.set(value.clone());
            }
        });
    }

    pub fn read_only(&self) -> ReadOnlyProperty<T> {
        ReadOnlyProperty(self.clone())
    }

    #[cfg(test)]
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    fn downgrade(&self) -> WeakProperty<T> {
        WeakProperty(Rc::downgrade(&self.inner))
    }
}

struct WeakProperty<T>(Weak<RefCell<Inner<T>>>);

impl<T> WeakProperty<T> {
    fn upgrade(&self) -> Option<Property<T>> {
        self.0.upgrade().map(|inner| Property { inner })
    }
}

/// A view of a [`Property`] that cannot be written through.
pub struct ReadOnlyProperty<T>(Property<T>);

impl<T> Clone for ReadOnlyProperty<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: fmt::Debug> fmt::Debug for ReadOnlyProperty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ReadOnlyProperty")
            .field(&self.0.inner.borrow().value)
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> ReadOnlyProperty<T> {
    pub fn get(&self) -> T {
        self.0.get()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.0.with(f)
    }

    pub fn subscribe(&self, listener: impl FnMut(&T) + 'static) {
        self.0.subscribe(listener);
    }
}

/// A value computed from two properties and kept current as either changes.
pub fn derive2<A, B, R>(
    a: &Property<A>,
    b: &Property<B>,
    f: impl Fn(&A, &B) -> R + 'static,
) -> ReadOnlyProperty<R>
where
    A: Clone + PartialEq + 'static,
    B: Clone + PartialEq + 'static,
    R: Clone + PartialEq + 'static,
{
    let out = Property::new(a.with(|a| b.with(|b| f(a, b))));
    let f = Rc::new(f);

    {
        let (f, b, out) = (Rc::clone(&f), b.downgrade(), out.downgrade());
        a.subscribe(move |a| {
            if let (Some(b), Some(out)) = (b.upgrade(), out.upgrade()) {
                out.set(b.with(|b| (*f)(a, b)));
            }
        });
    }
    {
        let (a, out) = (a.downgrade(), out.downgrade());
        b.subscribe(move |b| {
            if let (Some(a), Some(out)) = (a.upgrade(), out.upgrade()) {
                out.set(a.with(|a| (*f)(a, b)));
            }
        });
    }

    out.read_only()
}

/// Same as [`derive2`] over two read-only inputs.
pub fn derive2_ro<A, B, R>(
    a: &ReadOnlyProperty<A>,
    b: &ReadOnlyProperty<B>,
    f: impl Fn(&A, &B) -> R + 'static,
) -> ReadOnlyProperty<R>
where
    A: Clone + PartialEq + 'static,
    B: Clone + PartialEq + 'static,
    R: Clone + PartialEq + 'static,
{
    derive2(&a.0, &b.0, f)
}
