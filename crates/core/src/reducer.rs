//! Versioned state snapshots evolved by pure, command-driven transitions.

/// A versioned state snapshot.
pub trait Snapshot {
    /// Monotonically increasing version of the snapshot.
    ///
    /// Typically the number of commands applied since construction.
    fn version(&self) -> u64;
}

/// Reducer semantics (pure, deterministic).
///
/// - **Input**: the current snapshot, a tagged command and an environment value
///   (ambient inputs such as the current calendar day).
/// - **Output**: a brand new snapshot.
///
/// Reducers must not perform IO or side effects, and must not mutate `self`.
/// Callers observe either the old snapshot or the new one, never a partial update.
pub trait Reducer: Snapshot + Sized {
    type Command: Clone + core::fmt::Debug;
    type Env;

    /// Compute the snapshot that results from applying `command`.
    fn reduce(&self, command: &Self::Command, env: &Self::Env) -> Self;
}

/// Apply a command to a snapshot in place and return the new version.
///
/// This is the canonical dispatch step: reduce, then swap the result in.
pub fn dispatch<R: Reducer>(state: &mut R, command: &R::Command, env: &R::Env) -> u64 {
    let next = state.reduce(command, env);
    *state = next;
    state.version()
}
