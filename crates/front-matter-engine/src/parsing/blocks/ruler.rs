use crate::parsing::rope::view::DocumentView;

use super::state::BlockState;

/// A block-level rule.
///
/// `run` tries to claim `start_line`. With `silent` set it only reports
/// whether it would claim the line: no tokens, no cursor moves, no
/// callbacks. Otherwise a claiming rule pushes its tokens and advances
/// `state.line` past what it consumed.
pub trait BlockRule {
    fn run(
        &mut self,
        view: &dyn DocumentView,
        state: &mut BlockState,
        start_line: usize,
        end_line: usize,
        silent: bool,
    ) -> bool;
}

/// Constructs whose start a rule may claim when probed in silent mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleChain {
    Paragraph,
    Reference,
    Blockquote,
    List,
}

impl RuleChain {
    pub const ALL: [RuleChain; 4] = [
        RuleChain::Paragraph,
        RuleChain::Reference,
        RuleChain::Blockquote,
        RuleChain::List,
    ];
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RulerError {
    #[error("Rule not found: {0}")]
    UnknownRule(String),
    #[error("Rule already registered: {0}")]
    DuplicateRule(String),
}

struct RuleEntry<'a> {
    name: String,
    rule: Box<dyn BlockRule + 'a>,
    alt: Vec<RuleChain>,
}

/// Ordered list of block rules; earlier rules get the first chance at a line.
#[derive(Default)]
pub struct BlockRuler<'a> {
    rules: Vec<RuleEntry<'a>>,
}

impl std::fmt::Debug for BlockRuler<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

impl<'a> BlockRuler<'a> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule at the lowest priority.
    pub fn push(
        &mut self,
        name: &str,
        rule: impl BlockRule + 'a,
        alt: &[RuleChain],
    ) -> Result<(), RulerError> {
        self.ensure_unique(name)?;
        self.append(name, rule, alt);
        Ok(())
    }

    /// Inserts a rule directly ahead of the rule named `anchor`.
    pub fn insert_before(
        &mut self,
        anchor: &str,
        name: &str,
        rule: impl BlockRule + 'a,
        alt: &[RuleChain],
    ) -> Result<(), RulerError> {
        self.ensure_unique(name)?;
        let index = self
            .position(anchor)
            .ok_or_else(|| RulerError::UnknownRule(anchor.to_string()))?;
        self.insert_at(index, name, rule, alt);
        Ok(())
    }

    pub(crate) fn append(&mut self, name: &str, rule: impl BlockRule + 'a, alt: &[RuleChain]) {
        let index = self.rules.len();
        self.insert_at(index, name, rule, alt);
    }

    pub(crate) fn insert_at(
        &mut self,
        index: usize,
        name: &str,
        rule: impl BlockRule + 'a,
        alt: &[RuleChain],
    ) {
        debug_assert!(self.position(name).is_none(), "duplicate rule {name}");
        self.rules.insert(
            index,
            RuleEntry {
                name: name.to_string(),
                rule: Box::new(rule),
                alt: alt.to_vec(),
            },
        );
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.rules.iter().position(|e| e.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|e| e.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Alternative chains a rule declared at registration.
    pub fn chains_of(&self, name: &str) -> Option<&[RuleChain]> {
        self.rules
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.alt.as_slice())
    }

    /// All rules, in priority order.
    pub fn rules_mut<'s>(&'s mut self) -> impl Iterator<Item = &'s mut (dyn BlockRule + 'a)> {
        self.rules.iter_mut().map(|e| e.rule.as_mut())
    }

    /// Rules allowed to interrupt the construct named by `chain`, in priority order.
    pub fn alternatives<'s>(
        &'s mut self,
        chain: RuleChain,
    ) -> impl Iterator<Item = &'s mut (dyn BlockRule + 'a)> {
        self.rules
            .iter_mut()
            .filter(move |e| e.alt.contains(&chain))
            .map(|e| e.rule.as_mut())
    }

    fn ensure_unique(&self, name: &str) -> Result<(), RulerError> {
        if self.position(name).is_some() {
            return Err(RulerError::DuplicateRule(name.to_string()));
        }
        Ok(())
    }
}
