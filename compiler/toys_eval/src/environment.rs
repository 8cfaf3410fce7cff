//! Scope chain for variable bindings.
//!
//! Scopes live in an arena (`Vec<Scope>`) and refer to their parent by
//! index. Scope 0 is the root and holds globals for the whole run. Entering
//! a call pushes a scope; leaving truncates the arena back to where it was,
//! which is the only point where scopes are freed.

use rustc_hash::FxHashMap;

use crate::value::Value;

/// Index of a scope in the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

impl ScopeId {
    /// The global scope.
    pub const ROOT: ScopeId = ScopeId(0);
}

#[derive(Clone, Debug, Default)]
struct Scope {
    bindings: FxHashMap<String, Value>,
    parent: Option<ScopeId>,
}

/// Saved state for [`Environment::leave`].
#[must_use = "a frame must be passed back to `Environment::leave`"]
#[derive(Debug)]
pub struct Frame {
    len: usize,
    saved: ScopeId,
}

/// The chain of scopes visible to the code being evaluated.
#[derive(Clone, Debug)]
pub struct Environment {
    scopes: Vec<Scope>,
    current: ScopeId,
}

impl Environment {
    /// An environment holding only an empty root scope.
    pub fn new() -> Self {
        Environment {
            scopes: vec![Scope::default()],
            current: ScopeId::ROOT,
        }
    }

    #[inline]
    pub fn current(&self) -> ScopeId {
        self.current
    }

    /// Number of live scopes, root included.
    #[inline]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Innermost scope on the current chain that binds `name`.
    pub fn find(&self, name: &str) -> Option<ScopeId> {
        let mut id = Some(self.current);
        while let Some(scope_id) = id {
            let scope = &self.scopes[scope_id.0];
            if scope.bindings.contains_key(name) {
                return Some(scope_id);
            }
            id = scope.parent;
        }
        None
    }

    pub fn lookup(&self, name: &str) -> Option<&Value> {
        let owner = self.find(name)?;
        self.scopes[owner.0].bindings.get(name)
    }

    /// Rebind `name` in the scope that owns it, or create it in the current
    /// scope if nothing on the chain binds it.
    pub fn assign(&mut self, name: &str, value: Value) {
        let owner = self.find(name).unwrap_or(self.current);
        self.scopes[owner.0]
            .bindings
            .insert(name.to_string(), value);
    }

    /// Bind `name` in the current scope, shadowing any outer binding.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.scopes[self.current.0]
            .bindings
            .insert(name.into(), value);
    }

    /// Bind `name` in the root scope.
    pub fn define_global(&mut self, name: impl Into<String>, value: Value) {
        self.scopes[ScopeId::ROOT.0]
            .bindings
            .insert(name.into(), value);
    }

    /// Push a fresh scope whose parent is `parent` and make it current.
    pub fn enter(&mut self, parent: ScopeId) -> Frame {
        let frame = Frame {
            len: self.scopes.len(),
            saved: self.current,
        };
        self.scopes.push(Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        });
        self.current = ScopeId(frame.len);
        frame
    }

    /// Drop every scope pushed since `frame` was taken and restore the scope
    /// that was current then.
    pub fn leave(&mut self, frame: Frame) {
        debug_assert!(frame.len <= self.scopes.len(), "frames left out of order");
        self.scopes.truncate(frame.len);
        self.current = frame.saved;
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
