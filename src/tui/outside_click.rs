//! Outside-click listener registry.
//!
//! An open popover subscribes here so mouse presses elsewhere on the screen
//! can close it. The subscription is an RAII guard: dropping it (on close,
//! or when the picker itself is dropped) detaches the listener, so a picker
//! can never leave a stale listener behind.

use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerId(u64);

type ListenerSet = RefCell<BTreeSet<ListenerId>>;

/// Set of currently attached outside-click listeners
#[derive(Debug, Default)]
pub struct OutsideClickListeners {
    attached: Rc<ListenerSet>,
    next_id: Cell<u64>,
}

impl OutsideClickListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a new listener; it stays attached until the guard is dropped
    pub fn subscribe(&self) -> OutsideClickSubscription {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.attached.borrow_mut().insert(id);
        debug!("OUTSIDE_CLICK: attached listener {:?} ({} active)", id, self.len());
        OutsideClickSubscription {
            id,
            attached: Rc::downgrade(&self.attached),
        }
    }

    pub fn is_attached(&self, id: ListenerId) -> bool {
        self.attached.borrow().contains(&id)
    }

    pub fn len(&self) -> usize {
        self.attached.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.attached.borrow().is_empty()
    }
}

/// Guard for one attached listener
pub struct OutsideClickSubscription {
    id: ListenerId,
    attached: Weak<ListenerSet>,
}

impl OutsideClickSubscription {
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl fmt::Debug for OutsideClickSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutsideClickSubscription")
            .field("id", &self.id)
            .finish()
    }
}

impl Drop for OutsideClickSubscription {
    fn drop(&mut self) {
        if let Some(attached) = self.attached.upgrade() {
            attached.borrow_mut().remove(&self.id);
            debug!("OUTSIDE_CLICK: detached listener {:?}", self.id);
        }
    }
}
