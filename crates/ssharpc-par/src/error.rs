use ssharpc_util::Span;
use thiserror::Error;

/// Parse errors. All are fatal: once one of these is returned, the parser
/// does not attempt to recover or continue.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected a function definition")]
    ExpectedFunctionDefinition,

    #[error("unexpected tokens after the final function definition")]
    UnexpectedTrailingTokens,

    #[error("missing function body")]
    MissingFunctionBody,

    #[error("missing closing ')'")]
    MissingClosingParen,

    #[error("missing closing '}}'")]
    MissingClosingBrace,

    #[error("invalid expression inside '(...)'")]
    InvalidParenthesizedExpr,

    #[error("'{{...}}' must contain an expression")]
    EmptyBlockBody,

    #[error("missing second operand after binary operator")]
    MissingSecondOperand,

    #[error("trailing comma in argument list")]
    TrailingComma,

    #[error("missing '(' after function call name")]
    MissingCallOpenParen,

    #[error("missing closing ')' after function call arguments")]
    MissingCallCloseParen,

    #[error("missing '(' after 'if'")]
    MissingIfOpenParen,

    #[error("missing if condition")]
    MissingIfCondition,

    #[error("missing closing ')' after if condition")]
    MissingIfCloseParen,

    #[error("missing if branch")]
    MissingIfThenBranch,

    #[error("missing else branch")]
    MissingIfElseBranch,

    #[error("unexpected end of input")]
    UnexpectedEof { span: Span },
}
