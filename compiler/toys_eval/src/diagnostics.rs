//! Call frame tracking.
//!
//! `CallStack` records the function each active call is running. The depth
//! limit is checked on `push`, and `capture` snapshots the frames into the
//! backtrace attached to an escaping error.

use crate::errors::{stack_exhausted, EvalError};

/// Default bound on nested calls.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

#[derive(Clone, Debug)]
pub struct CallFrame {
    pub name: String,
}

/// Live call stack for the interpreter.
#[derive(Clone, Debug)]
pub struct CallStack {
    frames: Vec<CallFrame>,
    max_depth: Option<usize>,
}

impl CallStack {
    /// `max_depth` of `None` means unbounded; host stack growth is then the
    /// only limit.
    pub fn new(max_depth: Option<usize>) -> Self {
        CallStack {
            frames: Vec::new(),
            max_depth,
        }
    }

    /// Push a call frame, checking the depth limit.
    ///
    /// On overflow the frame is not pushed.
    pub fn push(&mut self, name: &str) -> Result<(), EvalError> {
        if let Some(max) = self.max_depth {
            if self.frames.len() >= max {
                return Err(stack_exhausted(max));
            }
        }
        self.frames.push(CallFrame {
            name: name.to_string(),
        });
        Ok(())
    }

    /// Pop the most recent call frame.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the stack is empty.
    pub fn pop(&mut self) {
        debug_assert!(!self.frames.is_empty(), "CallStack::pop on empty stack");
        self.frames.pop();
    }

    /// Current call depth.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Drop every frame, keeping the depth limit.
    pub fn clear(&mut self) {
        self.frames.clear();
    }

    /// Function names of the active calls, most recent first.
    pub fn capture(&self) -> Vec<String> {
        self.frames
            .iter()
            .rev()
            .map(|frame| frame.name.clone())
            .collect()
    }

    /// Attach a backtrace from this stack to `err`, keeping any backtrace
    /// it already carries.
    pub fn attach_backtrace(&self, err: EvalError) -> EvalError {
        err.with_backtrace(|| self.capture())
    }
}

impl Default for CallStack {
    fn default() -> Self {
        Self::new(Some(DEFAULT_MAX_CALL_DEPTH))
    }
}
