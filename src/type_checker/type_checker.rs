use log::warn;

use crate::{
    ast::types::ValueType,
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::environment::{ScopeId, SymbolTable};

/// Scope and type state for one parse.
///
/// Owns the symbol table and the semantic errors found so far. Errors are
/// recorded, never returned, so parsing can carry on past them.
#[derive(Debug, Default)]
pub struct TypeChecker {
    pub symbols: SymbolTable,
    pub errors: Vec<Error>,
}

impl TypeChecker {
    pub fn new() -> Self {
        TypeChecker::default()
    }

    pub fn error(&mut self, error: ErrorImpl, position: Position) {
        let error = Error::new(error, position);
        warn!("{}", error);
        self.errors.push(error);
    }

    pub fn enter_scope(&mut self) -> ScopeId {
        self.symbols.enter_scope()
    }

    pub fn exit_scope(&mut self) -> Option<ScopeId> {
        self.symbols.exit_scope()
    }

    /// Records an error if `identifier` is already declared in the current scope.
    pub fn check_var_declared(&mut self, identifier: &str, position: Position) {
        if self.symbols.is_declared_in_current_scope(identifier) {
            self.error(
                ErrorImpl::VariableAlreadyDeclared {
                    variable: String::from(identifier),
                },
                position,
            );
        }
    }

    /// Records an error unless `identifier` is visible from the current scope.
    pub fn check_var_use(&mut self, identifier: &str, position: Position) -> bool {
        if self.symbols.is_visible(identifier) {
            return true;
        }

        self.error(
            ErrorImpl::VariableNotDeclared {
                variable: String::from(identifier),
            },
            position,
        );
        false
    }

    /// Records a mismatch when both types are known, numeric and different.
    ///
    /// Unknown types pass: an undeclared name has already been reported.
    pub fn check_type_match(&mut self, expected: Option<ValueType>, received: Option<ValueType>, position: Position) {
        let (Some(expected), Some(received)) = (expected, received) else {
            return;
        };

        if expected.is_numeric() && received.is_numeric() && expected != received {
            self.error(
                ErrorImpl::TypeMatchError {
                    expected: expected.to_string(),
                    received: received.to_string(),
                },
                position,
            );
        }
    }

    pub fn add_variable(&mut self, name: String, var_type: ValueType) {
        self.symbols.add_variable(name, var_type);
    }

    pub fn get_variable_type(&self, name: &str) -> Option<ValueType> {
        self.symbols.fetch_variable_type(name)
    }

    pub fn finish(self) -> (SymbolTable, Vec<Error>) {
        (self.symbols, self.errors)
    }
}
