// SPDX-License-Identifier: MPL-2.0
//! Scripted toast bodies driven by an explicit clock.
//!
//! Each call to [`HeadlessToasts::tick`] runs three phases in order:
//!
//! 1. toasts that were hidden on an earlier tick fire their self-close hook,
//! 2. visible toasts advance their timers and hide once they expire,
//! 3. every mounted toast re-measures its bottom offset from its predecessor.
//!
//! A hidden toast therefore stays registered until the next tick, which
//! stands in for the leave transition of a real body.

use crate::error::MountError;
use crate::host::Container;
use crate::overlay::{Overlay, ToastFactory, ToastOverlay};
use crate::state::Observable;
use crate::toast::{ToastId, ToastProps, ToastState};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// Height every headless toast reports unless configured otherwise.
pub const DEFAULT_TOAST_HEIGHT: f32 = 20.0;

struct ToastCell {
    props: ToastProps,
    state: Observable<ToastState>,
    height: f32,
    elapsed: Cell<Duration>,
    mounted: Cell<bool>,
}

impl ToastCell {
    fn measure(&self) {
        let bottom = self.props.stack.last_bottom_offset() + self.props.offset + self.height;
        self.state.update(|state| state.bottom_offset = bottom);
    }
}

struct HeadlessToast {
    cell: Rc<ToastCell>,
}

impl Overlay for HeadlessToast {
    type State = ToastState;

    fn mount(&mut self, target: &mut Container) -> Result<(), MountError> {
        target.render_root();
        self.cell.mounted.set(true);
        self.cell.state.update(|state| state.visible = true);
        self.cell.measure();
        Ok(())
    }

    fn unmount(&mut self, _target: &mut Container) {
        self.cell.mounted.set(false);
    }

    fn state(&self) -> Observable<ToastState> {
        self.cell.state.clone()
    }
}

#[derive(Default)]
struct Driver {
    cells: Vec<Rc<ToastCell>>,
}

/// Factory and clock for headless toast bodies.
///
/// Clones share the same set of toasts.
#[derive(Clone)]
pub struct HeadlessToasts {
    driver: Rc<RefCell<Driver>>,
    height: f32,
}

impl Default for HeadlessToasts {
    fn default() -> Self {
        Self {
            driver: Rc::default(),
            height: DEFAULT_TOAST_HEIGHT,
        }
    }
}

impl std::fmt::Debug for HeadlessToasts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeadlessToasts")
            .field("mounted", &self.mounted_count())
            .field("height", &self.height)
            .finish()
    }
}

impl HeadlessToasts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Height reported by toasts built after this call.
    #[must_use]
    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height.max(0.0);
        self
    }

    /// Advances every toast by `dt`.
    pub fn tick(&self, dt: Duration) {
        self.finish_transitions();

        for cell in self.live() {
            if !cell.state.with(|state| state.visible) {
                continue;
            }
            let Some(duration) = cell.props.duration else {
                continue;
            };
            let elapsed = cell.elapsed.get() + dt;
            cell.elapsed.set(elapsed);
            if elapsed >= duration {
                tracing::trace!(id = %cell.props.id, "headless toast expired");
                cell.state.update(|state| state.visible = false);
            }
        }

        self.relayout();
    }

    /// Fires the self-close hook of every mounted toast that is hidden.
    pub fn finish_transitions(&self) {
        let hidden: Vec<Rc<ToastCell>> = self
            .live()
            .into_iter()
            .filter(|cell| !cell.state.with(|state| state.visible))
            .collect();
        for cell in hidden {
            cell.props.on_self_close.fire();
        }
        self.driver
            .borrow_mut()
            .cells
            .retain(|cell| cell.mounted.get());
    }

    /// Re-measures every mounted toast in creation order.
    pub fn relayout(&self) {
        for cell in self.live() {
            cell.measure();
        }
    }

    /// Simulates a click on the dismiss button. Returns `false` if the
    /// toast is unknown or not closable.
    pub fn dismiss(&self, id: ToastId) -> bool {
        let Some(cell) = self.find(id) else {
            return false;
        };
        if !cell.props.closable {
            return false;
        }
        cell.state.update(|state| state.visible = false);
        true
    }

    /// Overrides the measured offset of a toast until the next relayout.
    pub fn set_bottom_offset(&self, id: ToastId, bottom: f32) -> bool {
        let Some(cell) = self.find(id) else {
            return false;
        };
        cell.state.update(|state| state.bottom_offset = bottom);
        true
    }

    /// Props the toast with `id` was built from.
    #[must_use]
    pub fn props(&self, id: ToastId) -> Option<ToastProps> {
        self.find(id).map(|cell| cell.props.clone())
    }

    #[must_use]
    pub fn is_mounted(&self, id: ToastId) -> bool {
        self.find(id).is_some_and(|cell| cell.mounted.get())
    }

    #[must_use]
    pub fn mounted_count(&self) -> usize {
        self.live().len()
    }

    fn find(&self, id: ToastId) -> Option<Rc<ToastCell>> {
        self.driver
            .borrow()
            .cells
            .iter()
            .find(|cell| cell.props.id == id)
            .cloned()
    }

    /// Mounted cells, cloned out so no borrow is held while they run hooks.
    fn live(&self) -> Vec<Rc<ToastCell>> {
        self.driver
            .borrow()
            .cells
            .iter()
            .filter(|cell| cell.mounted.get())
            .cloned()
            .collect()
    }
}

impl ToastFactory for HeadlessToasts {
    fn build(&self, props: ToastProps) -> ToastOverlay {
        let cell = Rc::new(ToastCell {
            props,
            state: Observable::default(),
            height: self.height,
            elapsed: Cell::new(Duration::ZERO),
            mounted: Cell::new(false),
        });
        self.driver.borrow_mut().cells.push(Rc::clone(&cell));
        Box::new(HeadlessToast { cell })
    }
}
