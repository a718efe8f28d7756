use std::ops::{Deref, DerefMut};

use super::types::BlockNode;

/// The construct a rule is currently running inside of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentKind {
    Root,
    Container,
    Paragraph,
}

/// Mutable state of one block-level parse pass.
#[derive(Debug)]
pub struct BlockState {
    /// Cursor: the next line to parse.
    pub line: usize,
    /// Lazy continuation boundary: no block may extend to or past this line.
    pub line_max: usize,
    pub parent: ParentKind,
    /// Output token stream.
    pub tokens: Vec<BlockNode>,
}

impl BlockState {
    pub fn new(line_max: usize) -> Self {
        Self {
            line: 0,
            line_max,
            parent: ParentKind::Root,
            tokens: Vec::new(),
        }
    }

    pub fn push(&mut self, node: BlockNode) {
        self.tokens.push(node);
    }

    /// Overrides the continuation boundary and parent for the guard's lifetime.
    ///
    /// The previous values come back when the guard drops, on every exit path.
    /// The release and dev profiles abort on panic, so restoring during an
    /// unwind only applies where unwinding is enabled, as under the test
    /// harness.
    pub fn override_boundary(&mut self, line_max: usize, parent: ParentKind) -> BoundaryGuard<'_> {
        let saved_line_max = std::mem::replace(&mut self.line_max, line_max);
        let saved_parent = std::mem::replace(&mut self.parent, parent);
        BoundaryGuard {
            state: self,
            saved_line_max,
            saved_parent,
        }
    }
}

/// Restores `line_max` and `parent` on drop. Derefs to the guarded state.
#[derive(Debug)]
pub struct BoundaryGuard<'s> {
    state: &'s mut BlockState,
    saved_line_max: usize,
    saved_parent: ParentKind,
}

impl Deref for BoundaryGuard<'_> {
    type Target = BlockState;

    fn deref(&self) -> &BlockState {
        self.state
    }
}

impl DerefMut for BoundaryGuard<'_> {
    fn deref_mut(&mut self) -> &mut BlockState {
        self.state
    }
}

impl Drop for BoundaryGuard<'_> {
    fn drop(&mut self) {
        self.state.line_max = self.saved_line_max;
        self.state.parent = self.saved_parent;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_restores_boundary_on_drop() {
        let mut state = BlockState::new(10);
        {
            let mut guard = state.override_boundary(3, ParentKind::Container);
            assert_eq!(guard.line_max, 3);
            assert_eq!(guard.parent, ParentKind::Container);
            guard.line = 4;
        }
        assert_eq!(state.line_max, 10);
        assert_eq!(state.parent, ParentKind::Root);
        // cursor moves are not rolled back
        assert_eq!(state.line, 4);
    }

    #[test]
    fn guard_restores_boundary_on_unwind() {
        let mut state = BlockState::new(10);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = state.override_boundary(1, ParentKind::Paragraph);
            panic!("rule failed");
        }));
        assert!(result.is_err());
        assert_eq!(state.line_max, 10);
        assert_eq!(state.parent, ParentKind::Root);
    }

    #[test]
    fn nested_guards_unwind_in_order() {
        let mut state = BlockState::new(8);
        {
            let mut outer = state.override_boundary(5, ParentKind::Container);
            {
                let inner = outer.override_boundary(2, ParentKind::Paragraph);
                assert_eq!(inner.line_max, 2);
            }
            assert_eq!(outer.line_max, 5);
            assert_eq!(outer.parent, ParentKind::Container);
        }
        assert_eq!(state.line_max, 8);
    }
}
