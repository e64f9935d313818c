//! Observable state cells.
//!
//! A write to a [`MutableState`] schedules a frame on its runtime so the
//! host knows the UI is dirty. [`State`] is the read-only view handed to
//! consumers. Single-threaded by construction; values are cloned out on
//! read.

use std::cell::RefCell;
use std::rc::Rc;

use crate::runtime::RuntimeHandle;

struct StateCell<T> {
    value: RefCell<T>,
    runtime: RuntimeHandle,
}

pub struct MutableState<T: Clone + 'static> {
    cell: Rc<StateCell<T>>,
}

impl<T: Clone + 'static> MutableState<T> {
    pub fn with_runtime(initial: T, runtime: RuntimeHandle) -> Self {
        Self {
            cell: Rc::new(StateCell {
                value: RefCell::new(initial),
                runtime,
            }),
        }
    }

    pub fn value(&self) -> T {
        self.cell.value.borrow().clone()
    }

    pub fn set_value(&self, value: T) {
        *self.cell.value.borrow_mut() = value;
        self.cell.runtime.schedule();
    }

    /// Swap in `value` and return the previous one.
    pub fn replace(&self, value: T) -> T {
        let previous = std::mem::replace(&mut *self.cell.value.borrow_mut(), value);
        self.cell.runtime.schedule();
        previous
    }

    pub fn as_state(&self) -> State<T> {
        State {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T: Clone + 'static> Clone for MutableState<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

/// Read-only view of a [`MutableState`], sharing its storage.
pub struct State<T: Clone + 'static> {
    cell: Rc<StateCell<T>>,
}

impl<T: Clone + 'static> State<T> {
    pub fn get(&self) -> T {
        self.cell.value.borrow().clone()
    }
}

impl<T: Clone + 'static> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}
