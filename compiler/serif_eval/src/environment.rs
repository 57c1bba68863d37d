//! Two-tier variable environment.
//!
//! The global tier is shared by every call frame of a run; the local tier
//! belongs to one frame. The scope depth counts nested calls: at depth 0
//! only the global tier is visible.

use rustc_hash::FxHashMap;

use crate::shared::Shared;
use crate::value::CopyMemo;
use crate::Value;

/// Name-to-value bindings of one tier.
pub type Tier = FxHashMap<String, Value>;

/// Variable environment.
///
/// `Clone` deep-copies both tiers (closures capture their environment this
/// way). A call frame instead shares the caller's global
/// tier, see [`Environment::call_frame`].
#[derive(Debug, Default)]
pub struct Environment {
    global: Shared<Tier>,
    local: Tier,
    depth: usize,
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    /// Number of calls enclosing this environment.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Resolve `name` by the read rule.
    ///
    /// At depth 0 only the global tier is consulted. Inside a call a local
    /// binding shadows a global one.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if self.depth > 0 {
            if let Some(value) = self.local.get(name) {
                return Some(value.clone());
            }
        }
        self.global.borrow().get(name).cloned()
    }

    /// Store `value` under `name` by the write rule.
    ///
    /// At depth 0 the write always goes to the global tier. Inside a call
    /// an existing local is updated first, then an existing global; a new
    /// name becomes a local and never escapes to the global tier.
    pub fn assign(&mut self, name: &str, value: Value) {
        if self.depth == 0 {
            self.global.borrow_mut().insert(name.to_owned(), value);
            return;
        }
        if let Some(slot) = self.local.get_mut(name) {
            *slot = value;
            return;
        }
        if let Some(slot) = self.global.borrow_mut().get_mut(name) {
            *slot = value;
            return;
        }
        self.local.insert(name.to_owned(), value);
    }

    /// Bind `name` in the local tier, shadowing any existing binding.
    pub fn define_local(&mut self, name: impl Into<String>, value: Value) {
        self.local.insert(name.into(), value);
    }

    /// Bind `name` in the global tier, visible to every frame sharing it.
    pub fn define_global(&self, name: impl Into<String>, value: Value) {
        self.global.borrow_mut().insert(name.into(), value);
    }

    pub fn global(&self, name: &str) -> Option<Value> {
        self.global.borrow().get(name).cloned()
    }

    pub fn local(&self, name: &str) -> Option<Value> {
        self.local.get(name).cloned()
    }

    /// Whether `name` is bound in either tier, regardless of depth.
    pub fn contains(&self, name: &str) -> bool {
        self.local.contains_key(name) || self.global.borrow().contains_key(name)
    }

    /// Globally bound names, sorted.
    pub fn global_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.global.borrow().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Whether both environments write to the same global tier.
    pub fn shares_globals_with(&self, other: &Environment) -> bool {
        self.global.ptr_eq(&other.global)
    }

    /// Environment for running a closure body called from `self`.
    ///
    /// Shares this environment's global tier, starts from a copy of the
    /// closure's captured local tier and sits one call deeper.
    pub fn call_frame(&self, captured: &Environment) -> Environment {
        Environment {
            global: self.global.clone(),
            local: captured.local.clone(),
            depth: self.depth.saturating_add(1),
        }
    }
}

/// Deep copy: every array in either tier gets fresh storage. Arrays that
/// alias one another in `self` alias one another in the copy.
impl Clone for Environment {
    fn clone(&self) -> Self {
        let mut memo = CopyMemo::default();
        let global = copy_tier(&self.global.borrow(), &mut memo);
        let local = copy_tier(&self.local, &mut memo);
        Environment {
            global: Shared::new(global),
            local,
            depth: self.depth,
        }
    }
}

fn copy_tier(tier: &Tier, memo: &mut CopyMemo) -> Tier {
    tier.iter()
        .map(|(name, value)| (name.clone(), value.deep_copy_in(memo)))
        .collect()
}
