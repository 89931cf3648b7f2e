#![allow(dead_code)]

use futures::{channel::oneshot, executor::LocalPool};
use orders_router::*;
use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    rc::Rc,
};

pub type TestRouter = Router<MemoryHistory, MemoryOutlet<VirtualElement>>;

pub struct Harness {
    pub pool: LocalPool,
    pub outlet: MemoryOutlet<VirtualElement>,
    pub history: MemoryHistory,
    pub router: TestRouter,
}

impl Harness {
    pub fn new(path: &str) -> Self {
        Self::with_options(path, RouterOptions::default())
    }

    pub fn with_options(path: &str, options: RouterOptions) -> Self {
        let pool = LocalPool::new();
        let outlet = MemoryOutlet::new();
        let history = MemoryHistory::new(path);
        let router = Router::with_options(
            outlet.clone(),
            history.clone(),
            pool.spawner(),
            options,
        )
        .unwrap();
        Self {
            pool,
            outlet,
            history,
            router,
        }
    }

    pub fn route(&self, pattern: &'static str, tag: &'static str) -> &Self {
        self.router
            .add_route(pattern, VirtualElementFactory::new(tag), ready());
        self
    }

    pub fn run(&mut self) {
        self.pool.run_until_stalled();
    }

    pub fn mounted_view(&self) -> VirtualElement {
        assert_eq!(self.outlet.child_count(), 1, "exactly one mounted view");
        self.outlet.first().unwrap()
    }

    pub fn push(&self, path: &str) {
        self.history
            .push(&LocationChange {
                value: path.into(),
                ..Default::default()
            })
            .unwrap();
    }
}

/// A loader whose completions are handed out one call at a time.
///
/// Each call takes the oldest held completion, or finishes at once if none
/// is held.
#[derive(Clone, Default)]
pub struct Gate {
    held: Rc<RefCell<VecDeque<oneshot::Receiver<Result<(), LoadError>>>>>,
    calls: Rc<Cell<usize>>,
}

impl Gate {
    pub fn hold(&self) -> oneshot::Sender<Result<(), LoadError>> {
        let (tx, rx) = oneshot::channel();
        self.held.borrow_mut().push_back(rx);
        tx
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn loader(&self) -> impl Loader {
        let gate = self.clone();
        move || {
            gate.calls.set(gate.calls.get() + 1);
            let held = gate.held.borrow_mut().pop_front();
            async move {
                match held {
                    Some(rx) => rx.await.unwrap_or_else(|_| {
                        Err(LoadError::new("loader abandoned"))
                    }),
                    None => Ok(()),
                }
            }
        }
    }
}

pub fn failing() -> impl Loader {
    || async { Err::<(), _>(LoadError::new("chunk failed to load")) }
}
