// SPDX-License-Identifier: MPL-2.0
//! Signal-backed state shared between overlay bodies and their lifecycle.
//!
//! An overlay exposes its visibility (and offset or outcome) as an
//! [`Observable`], a thin handle over a [`spark_signals::Signal`]. The
//! lifecycle reads it and writes `visible`; reacting to changes is done
//! with `spark_signals::effect`, which re-runs whenever a signal it read is
//! written. Everything runs on one UI thread.

use spark_signals::{signal, Signal};
use std::fmt;

/// A value whose writes re-run the effects that read it.
///
/// Cloning an `Observable` yields another handle to the same signal.
pub struct Observable<T: Clone + PartialEq + 'static> {
    signal: Signal<T>,
}

impl<T: Clone + PartialEq + 'static> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            signal: self.signal.clone(),
        }
    }
}

impl<T: Clone + PartialEq + fmt::Debug + 'static> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Observable").field(&self.signal.get()).finish()
    }
}

impl<T: Clone + PartialEq + Default + 'static> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + PartialEq + 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            signal: signal(value),
        }
    }

    /// Returns the current value. Inside an effect this records a dependency.
    #[must_use]
    pub fn get(&self) -> T {
        self.signal.get()
    }

    /// Reads the current value through a closure.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.signal.get())
    }

    /// Replaces the value. Writing an equal value is a no-op.
    pub fn set(&self, value: T) {
        self.update(|current| *current = value);
    }

    /// Mutates a copy of the value and writes it back if it changed.
    ///
    /// Returns whether the value changed. The write, and every effect it
    /// re-runs, completes before this returns.
    pub fn update(&self, f: impl FnOnce(&mut T)) -> bool {
        let current = self.signal.get();
        let mut next = current.clone();
        f(&mut next);
        if next == current {
            return false;
        }
        self.signal.set(next);
        true
    }

    /// The underlying signal, for callers building their own effects.
    #[must_use]
    pub fn signal(&self) -> Signal<T> {
        self.signal.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spark_signals::effect;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[test]
    fn update_reports_change() {
        let observable = Observable::new(1);
        assert!(observable.update(|value| *value += 3));
        assert!(!observable.update(|value| *value = 4));
        assert_eq!(observable.get(), 4);
    }

    #[test]
    fn clones_share_the_signal() {
        let observable = Observable::new(String::from("a"));
        let other = observable.clone();
        other.set(String::from("b"));
        assert_eq!(observable.get(), "b");
        assert_eq!(observable.with(String::len), 1);
    }

    #[test]
    fn effects_rerun_on_change() {
        let observable = Observable::new(0);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let watched = observable.clone();
        let _stop = effect(move || sink.borrow_mut().push(watched.get()));

        observable.set(2);
        observable.update(|value| *value += 3);

        assert_eq!(*seen.borrow(), vec![0, 2, 5]);
    }

    #[test]
    fn unchanged_write_does_not_rerun_effects() {
        let observable = Observable::new(7);
        let runs = Rc::new(Cell::new(0));
        let counter = Rc::clone(&runs);
        let watched = observable.clone();
        let _stop = effect(move || {
            let _ = watched.get();
            counter.set(counter.get() + 1);
        });

        observable.set(7);
        assert_eq!(runs.get(), 1);
    }
}
