use ssharpc_util::Symbol;
use thiserror::Error;

/// Semantic errors. All are fatal — emission stops at the first one and
/// nothing is written.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TranslateError {
    /// NameError: two `FuncDef`s declare the same name.
    #[error("function '{0}' is already defined")]
    DuplicateFunction(Symbol),

    /// NameError: a function is named `if`, the reserved word.
    #[error("'if' cannot be used as a function name")]
    ReservedFunctionName,

    /// NameError: a `Params` list repeats a parameter name.
    #[error("duplicate parameter name '{0}'")]
    DuplicateParam(Symbol),

    /// NameError: a parameter name collides with an existing function name.
    #[error("parameter '{0}' collides with a function of the same name")]
    ParamFunctionCollision(Symbol),

    /// ScopeError: an `Identifier` node names something outside the
    /// current function's parameter set.
    #[error("undefined variable '{0}'")]
    UndefinedVariable(Symbol),

    /// ArityError / NameError: a call names a function not in the
    /// function table.
    #[error("call to undefined function '{0}'")]
    UndefinedFunction(Symbol),

    /// ArityError: a call's argument count doesn't match the declared
    /// arity.
    #[error("'{name}' expects {expected} argument(s), got {found}")]
    ArityMismatch {
        name: Symbol,
        expected: usize,
        found: usize,
    },

    /// ArityError: `main` was declared with one or more parameters.
    #[error("'main' must take zero parameters")]
    MainHasParams,

    /// LinkError: no function named `main` survives to the end of
    /// translation.
    #[error("no 'main' function defined")]
    MissingMain,
}
