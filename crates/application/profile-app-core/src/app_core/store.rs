use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::FormState;

use super::{events::FormEvent, reducer::apply_event};

pub struct FormStore<E> {
    inner: Arc<Mutex<FormState<E>>>,
}

impl<E> Clone for FormStore<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E> FormStore<E> {
    pub fn new(state: FormState<E>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, FormState<E>> {
        // Reducers never panic mid-update, so a poisoned state is still whole.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn apply(&self, ev: FormEvent<E>) {
        apply_event(&mut self.lock(), ev);
    }

    pub fn read<R>(&self, f: impl FnOnce(&FormState<E>) -> R) -> R {
        f(&self.lock())
    }

    pub(crate) fn with_state_mut<R>(&self, f: impl FnOnce(&mut FormState<E>) -> R) -> R {
        f(&mut self.lock())
    }
}

impl<E: Clone> FormStore<E> {
    pub fn state(&self) -> FormState<E> {
        self.lock().clone()
    }
}
