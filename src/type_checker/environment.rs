use std::{collections::HashMap, fmt::Display};

use log::debug;

use crate::ast::types::ValueType;

/// Handle to an environment in a [`SymbolTable`]. Handles are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(pub usize);

impl ScopeId {
    pub const GLOBAL: ScopeId = ScopeId(0);
}

impl Display for ScopeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Nested scopes are numbered from 0 in the order they were opened
        match self.0 {
            0 => write!(f, "global"),
            n => write!(f, "{}", n - 1),
        }
    }
}

/// The variables declared directly in one scope.
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    pub variable_lookup: HashMap<String, ValueType>,
    pub id: ScopeId,
    pub parent: Option<ScopeId>,
}

impl Environment {
    pub fn new(id: ScopeId, parent: Option<ScopeId>) -> Self {
        Environment {
            variable_lookup: HashMap::new(),
            id,
            parent,
        }
    }

    /// Registers `variable_name`, replacing any earlier declaration in this scope.
    pub fn declare_variable(&mut self, variable_name: String, variable_type: ValueType) {
        self.variable_lookup.insert(variable_name, variable_type);
    }

    pub fn get_variable(&self, variable_name: &str) -> Option<ValueType> {
        self.variable_lookup.get(variable_name).copied()
    }

    pub fn contains(&self, variable_name: &str) -> bool {
        self.variable_lookup.contains_key(variable_name)
    }
}

/// Arena of every environment opened during one parse.
///
/// `environment_path` lists the scopes currently open, global first. Only
/// those are visible to lookups; closed environments stay in the arena.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolTable {
    environments: Vec<Environment>,
    environment_path: Vec<ScopeId>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        SymbolTable::new()
    }
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            environments: vec![Environment::new(ScopeId::GLOBAL, None)],
            environment_path: vec![ScopeId::GLOBAL],
        }
    }

    /// Opens a fresh, empty scope nested in the current one.
    pub fn enter_scope(&mut self) -> ScopeId {
        let id = ScopeId(self.environments.len());
        self.environments.push(Environment::new(id, Some(self.current_scope())));
        self.environment_path.push(id);

        debug!("entered scope {} at depth {}", id, self.depth());
        id
    }

    /// Closes the innermost scope. The global scope is never closed.
    pub fn exit_scope(&mut self) -> Option<ScopeId> {
        if self.environment_path.len() <= 1 {
            return None;
        }

        let id = self.environment_path.pop();
        if let Some(id) = id {
            debug!("exited scope {}", id);
        }
        id
    }

    pub fn current_scope(&self) -> ScopeId {
        self.environment_path.last().copied().unwrap_or(ScopeId::GLOBAL)
    }

    /// Number of open scopes, including global.
    pub fn depth(&self) -> usize {
        self.environment_path.len()
    }

    pub fn environment(&self, id: ScopeId) -> Option<&Environment> {
        self.environments.get(id.0)
    }

    pub fn environments(&self) -> &[Environment] {
        &self.environments
    }

    pub fn open_scopes(&self) -> &[ScopeId] {
        &self.environment_path
    }

    fn current_environment_mut(&mut self) -> &mut Environment {
        let id = self.current_scope();
        &mut self.environments[id.0]
    }

    pub fn add_variable(&mut self, name: String, var_type: ValueType) {
        self.current_environment_mut().declare_variable(name, var_type);
    }

    /// Only the innermost scope counts; outer declarations may be shadowed.
    pub fn is_declared_in_current_scope(&self, name: &str) -> bool {
        self.environment(self.current_scope())
            .is_some_and(|environment| environment.contains(name))
    }

    /// Searches the open scopes from innermost to global.
    pub fn fetch_variable_type(&self, name: &str) -> Option<ValueType> {
        self.environment_path
            .iter()
            .rev()
            .filter_map(|id| self.environment(*id))
            .find_map(|environment| environment.get_variable(name))
    }

    pub fn is_visible(&self, name: &str) -> bool {
        self.fetch_variable_type(name).is_some()
    }
}
