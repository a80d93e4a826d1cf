use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

// Writers never panic between a check and the write that follows it, so the
// data behind a poisoned lock is still consistent.
pub(crate) fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
