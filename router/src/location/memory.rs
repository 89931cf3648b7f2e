use super::{LocationChange, NavigationProvider, State};
use core::fmt;
use std::{cell::RefCell, convert::Infallible, rc::Rc};

struct Entry {
    path: String,
    state: State,
}

struct MemoryHistoryInner {
    entries: Vec<Entry>,
    index: usize,
    listeners: Vec<Rc<dyn Fn()>>,
}

/// An in-memory history stack.
///
/// Behaves like the browser's session history: pushing drops any forward
/// entries, and [`back`](Self::back), [`forward`](Self::forward) and
/// [`go`](Self::go) notify every `popstate` listener. Clones share the same
/// stack.
#[derive(Clone)]
pub struct MemoryHistory(Rc<RefCell<MemoryHistoryInner>>);

impl fmt::Debug for MemoryHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.0.borrow();
        f.debug_struct("MemoryHistory")
            .field(
                "entries",
                &inner.entries.iter().map(|e| &e.path).collect::<Vec<_>>(),
            )
            .field("index", &inner.index)
            .finish_non_exhaustive()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl MemoryHistory {
    /// Creates a history with a single entry at `path`, carrying no state.
    pub fn new(path: impl Into<String>) -> Self {
        Self(Rc::new(RefCell::new(MemoryHistoryInner {
            entries: vec![Entry {
                path: path.into(),
                state: State::default(),
            }],
            index: 0,
            listeners: Vec::new(),
        })))
    }

    pub fn len(&self) -> usize {
        self.0.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().entries.is_empty()
    }

    /// Position of the current entry in the stack.
    pub fn index(&self) -> usize {
        self.0.borrow().index
    }

    pub fn back(&self) -> bool {
        self.go(-1)
    }

    pub fn forward(&self) -> bool {
        self.go(1)
    }

    /// Moves `delta` entries through the stack and fires `popstate`.
    ///
    /// Returns `false`, without firing, if the target entry does not exist.
    pub fn go(&self, delta: isize) -> bool {
        let listeners = {
            let mut inner = self.0.borrow_mut();
            let target = match inner.index.checked_add_signed(delta) {
                Some(target)
                    if delta != 0 && target < inner.entries.len() =>
                {
                    target
                }
                _ => return false,
            };
            inner.index = target;
            inner.listeners.clone()
        };
        for listener in listeners {
            listener();
        }
        true
    }
}

impl NavigationProvider for MemoryHistory {
    type Error = Infallible;

    fn current_path(&self) -> Result<String, Self::Error> {
        let inner = self.0.borrow();
        Ok(inner
            .entries
            .get(inner.index)
            .map(|entry| entry.path.clone())
            .unwrap_or_default())
    }

    fn current_state(&self) -> Result<State, Self::Error> {
        let inner = self.0.borrow();
        Ok(inner
            .entries
            .get(inner.index)
            .map(|entry| entry.state.clone())
            .unwrap_or_default())
    }

    fn push(&self, change: &LocationChange) -> Result<(), Self::Error> {
        let mut inner = self.0.borrow_mut();
        let entry = Entry {
            path: change.value.clone(),
            state: change.state.clone(),
        };
        let index = inner.index;
        if change.replace {
            if let Some(current) = inner.entries.get_mut(index) {
                *current = entry;
            }
        } else {
            inner.entries.truncate(index + 1);
            inner.entries.push(entry);
            inner.index = inner.entries.len() - 1;
        }
        Ok(())
    }

    fn on_pop_state(
        &self,
        listener: Box<dyn Fn()>,
    ) -> Result<(), Self::Error> {
        self.0.borrow_mut().listeners.push(Rc::from(listener));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn push(history: &MemoryHistory, path: &str) {
        history
            .push(&LocationChange {
                value: path.into(),
                ..Default::default()
            })
            .unwrap();
    }

    #[test]
    fn push_then_traverse() {
        let history = MemoryHistory::new("/");
        push(&history, "/orders");
        push(&history, "/orders/1");
        assert_eq!(history.len(), 3);
        assert_eq!(history.current_path().unwrap(), "/orders/1");

        assert!(history.back());
        assert_eq!(history.current_path().unwrap(), "/orders");
        assert!(history.go(-1));
        assert_eq!(history.current_path().unwrap(), "/");
        assert!(!history.back());
        assert!(history.go(2));
        assert_eq!(history.current_path().unwrap(), "/orders/1");
        assert!(!history.forward());
        assert!(!history.go(0));
    }

    #[test]
    fn push_drops_forward_entries() {
        let history = MemoryHistory::new("/");
        push(&history, "/a");
        push(&history, "/b");
        history.back();
        push(&history, "/c");
        assert_eq!(history.len(), 3);
        assert!(!history.forward());
        history.back();
        assert_eq!(history.current_path().unwrap(), "/a");
    }

    #[test]
    fn replace_keeps_length() {
        let history = MemoryHistory::new("/");
        history
            .push(&LocationChange {
                value: "/orders".into(),
                replace: true,
                state: [("status", "NEW")].into_iter().collect(),
            })
            .unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history.current_path().unwrap(), "/orders");
        assert!(!history.current_state().unwrap().is_empty());
    }

    #[test]
    fn traversal_notifies_listeners_but_push_does_not() {
        let history = MemoryHistory::new("/");
        let fired = Rc::new(Cell::new(0));
        history
            .on_pop_state(Box::new({
                let fired = Rc::clone(&fired);
                move || fired.set(fired.get() + 1)
            }))
            .unwrap();

        push(&history, "/a");
        assert_eq!(fired.get(), 0);
        history.back();
        assert_eq!(fired.get(), 1);
        history.back();
        assert_eq!(fired.get(), 1);
        history.forward();
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn listeners_may_read_history() {
        let history = MemoryHistory::new("/");
        push(&history, "/a");
        let seen = Rc::new(RefCell::new(String::new()));
        history
            .on_pop_state(Box::new({
                let history = history.clone();
                let seen = Rc::clone(&seen);
                move || {
                    *seen.borrow_mut() = history.current_path().unwrap();
                }
            }))
            .unwrap();
        history.back();
        assert_eq!(seen.borrow().as_str(), "/");
    }
}
