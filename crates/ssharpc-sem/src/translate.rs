//! The fused semantic analyzer and emitter: one recursive traversal of the
//! AST that both validates scoping/arity and produces the C fragment for
//! each node. Analysis and emission are never separated into two
//! passes — a node's C text is only ever built once its own checks pass.

use crate::error::TranslateError;
use crate::functable::FuncTable;
use crate::scope::VarScope;
use ssharpc_par::{Node, Params};
use ssharpc_util::Symbol;

fn mangle(name: Symbol) -> String {
    if name.as_str() == "main" {
        "main".to_string()
    } else {
        format!("_ssharp_{name}")
    }
}

pub struct Translator {
    functions: FuncTable,
}

impl Translator {
    pub fn new() -> Self {
        Self {
            functions: FuncTable::new(),
        }
    }

    pub fn functions(&self) -> &FuncTable {
        &self.functions
    }

    /// `Source(l, r)`: `l` must be translated before `r` so `l`'s
    /// function-table insert is visible when `r` is checked.
    pub fn translate_source(&mut self, node: &Node) -> Result<String, TranslateError> {
        match node {
            Node::Source(left, right) => {
                let left_text = self.translate_source(left)?;
                let right_text = self.translate_source(right)?;
                Ok(format!("{left_text}\n{right_text}"))
            }
            Node::FuncDef { .. } => self.translate_fdef(node),
            _ => unreachable!("SOURCE only ever contains FuncDef/Source nodes"),
        }
    }

    fn translate_fdef(&mut self, node: &Node) -> Result<String, TranslateError> {
        let Node::FuncDef {
            name,
            params,
            body,
            ..
        } = node
        else {
            unreachable!()
        };
        let name = *name;

        if name.as_str() == "if" {
            return Err(TranslateError::ReservedFunctionName);
        }

        let arity = params.names.len();
        if !self.functions.declare(name, arity) {
            return Err(TranslateError::DuplicateFunction(name));
        }

        if name.as_str() == "main" && arity != 0 {
            return Err(TranslateError::MainHasParams);
        }

        // The scope is built (and its own duplicate-parameter check run)
        // before params are emitted against the function table, so a
        // repeated parameter name is reported as `DuplicateParam` even when
        // that same name also collides with an existing function.
        let scope = VarScope::from_params(params.names.iter().map(|(sym, _)| *sym))
            .map_err(TranslateError::DuplicateParam)?;

        // Param/function-name collisions are checked against the table
        // *after* `name` itself has just been inserted above: a function
        // whose own name matches one of its parameters rejects itself.
        let param_list = self.translate_params(params)?;

        let body_text = self.translate_expr(body, &scope)?;

        let ret_type = if name.as_str() == "main" { "int" } else { "u" };
        let mangled = mangle(name);

        Ok(format!(
            "{ret_type} {mangled}({param_list}) {{\n\t return {body_text};\n}}"
        ))
    }

    fn translate_params(&self, params: &Params) -> Result<String, TranslateError> {
        let mut pieces = Vec::with_capacity(params.names.len());
        for (sym, _) in &params.names {
            if self.functions.contains(*sym) {
                return Err(TranslateError::ParamFunctionCollision(*sym));
            }
            pieces.push(format!("u _ssharp_{sym}"));
        }
        Ok(pieces.join(","))
    }

    fn translate_expr(&mut self, node: &Node, scope: &VarScope) -> Result<String, TranslateError> {
        match node {
            Node::BrProg(inner) => {
                let inner_text = self.translate_expr(inner, scope)?;
                Ok(format!("({inner_text})"))
            }
            Node::Prog(left, right) => {
                let left_text = self.translate_expr(left, scope)?;
                let right_text = self.translate_expr(right, scope)?;
                Ok(format!("{left_text},{right_text}"))
            }
            Node::If {
                cond,
                then_branch,
                else_branch,
            } => {
                let cond_text = self.translate_expr(cond, scope)?;
                let then_text = self.translate_expr(then_branch, scope)?;
                let else_text = self.translate_expr(else_branch, scope)?;
                Ok(format!(
                    "(({cond_text}) ? \n\t{then_text}\n\t : {else_text})"
                ))
            }
            Node::BinOp { op, left, right } => {
                let left_text = self.translate_expr(left, scope)?;
                let right_text = self.translate_expr(right, scope)?;
                Ok(format!("({left_text}{}{right_text})", op.as_str()))
            }
            Node::UnOp { op, operand } => {
                let operand_text = self.translate_expr(operand, scope)?;
                Ok(format!("{}({operand_text})", op.as_str()))
            }
            Node::Number(value) => Ok(value.to_string()),
            Node::Identifier(sym, _) => {
                if !scope.contains(*sym) {
                    return Err(TranslateError::UndefinedVariable(*sym));
                }
                Ok(mangle(*sym))
            }
            Node::FuncCall { name, args, .. } => {
                let arity = self
                    .functions
                    .arity_of(*name)
                    .ok_or(TranslateError::UndefinedFunction(*name))?;
                if arity != args.items.len() {
                    return Err(TranslateError::ArityMismatch {
                        name: *name,
                        expected: arity,
                        found: args.items.len(),
                    });
                }
                let mut pieces = Vec::with_capacity(args.items.len());
                for arg in &args.items {
                    pieces.push(self.translate_expr(arg, scope)?);
                }
                Ok(format!("_ssharp_{name}({})", pieces.join(",")))
            }
            Node::Source(..) | Node::FuncDef { .. } => {
                unreachable!("function bodies never contain Source/FuncDef nodes")
            }
        }
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}
