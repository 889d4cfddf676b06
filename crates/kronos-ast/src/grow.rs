//! The "doubling array with failure-safe growth" pattern, shared by every
//! construct that accumulates a `Vec<Node>` one element at a time: list
//! literals, map literals, block bodies, and the top-level statement list.
//!
//! Plain `Vec::push` already grows geometrically, so this only adds value
//! for the one thing the data model promises that `push` alone does not:
//! a checked reservation step callers can turn into a structured
//! `AllocationFailure` instead of an abort, so that "every accumulated
//! element on this path is dropped before the error propagates" stays true
//! even when growth itself is what failed.

use std::collections::TryReserveError;

/// Initial capacity used the first time a growable node buffer is created,
/// matching the literal parsers' documented starting capacity.
pub const INITIAL_CAPACITY: usize = 4;

/// Reserve room for one more element, doubling the buffer when it is full,
/// then push. Returns the reservation error untouched so callers can turn it
/// into their own error type and unwind — `buf` is left untouched by a
/// failed reservation, so the caller's existing elements are still there to
/// be dropped by the normal `Vec` destructor.
pub fn push_growing<T>(buf: &mut Vec<T>, item: T) -> Result<(), TryReserveError> {
    if buf.len() == buf.capacity() {
        let target = (buf.capacity().max(INITIAL_CAPACITY / 2)) * 2;
        buf.try_reserve(target - buf.len())?;
    }
    buf.push(item);
    Ok(())
}
