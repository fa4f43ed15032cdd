use std::{io, rc::Rc};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ObserverError {
    #[error("Observer could not write its output: {0}")]
    Output(#[from] io::Error),
    #[error("Observer failed: {0}")]
    Failed(String),
}

pub type ObserverResult = Result<(), ObserverError>;

pub trait Observer<S: Subject<E>, E: Clone> {
    fn update(&self, source: &S, event: E) -> ObserverResult;
}

/// Observers are shared with the caller, which keeps its own `Rc` to be able
/// to unregister them later.
pub type SharedObservers<S, E> = Vec<Rc<dyn Observer<S, E>>>;

pub trait Subject<E: Clone>: Sized {
    fn register_observer(&mut self, observer: Rc<dyn Observer<Self, E>>);

    /// Removes every registration of `observer`, compared by identity.
    fn unregister_observer(&mut self, observer: Rc<dyn Observer<Self, E>>);

    /// Delivers `event` in registration order and stops at the first failure.
    fn notify_observers(&self, event: E) -> ObserverResult;
}
