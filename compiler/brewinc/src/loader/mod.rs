//! Program loader: turns the parser's JSON document into a [`Program`].
//!
//! Every node is an object with an `elem_type` discriminant plus named
//! attributes, mirroring the parser's own node shape:
//!
//! ```text
//! {"elem_type": "fcall", "name": "print", "args": [
//!     {"elem_type": "string", "val": "hello"}
//! ]}
//! ```
//!
//! A missing attribute and an explicit `null` both mean "absent". An
//! attribute the node kind does not use is an error, so a misspelled key
//! cannot silently drop part of the program.

use serde::Deserialize;
use serde_json::{Map, Value as Json};
use tracing::debug;

use brewin_ir::{
    BinaryOp, CallExpr, Expr, FunctionDef, Name, Program, Stmt, StringInterner, UnaryOp,
};

/// Why a document could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("malformed program document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown {context} node `{elem_type}`")]
    UnknownNode {
        context: &'static str,
        elem_type: String,
    },
    #[error("`{node}` node is missing attribute `{attr}`")]
    MissingAttribute { node: String, attr: &'static str },
    #[error("`{node}` node has unknown attribute `{attr}`")]
    UnknownAttribute { node: String, attr: String },
    #[error("`{node}` attribute `{attr}` must be {expected}")]
    WrongAttributeType {
        node: String,
        attr: &'static str,
        expected: &'static str,
    },
    #[error("integer literal `{value}` does not fit in 64 bits")]
    IntOutOfRange { value: String },
}

/// One node of the document before lowering.
#[derive(Debug, Deserialize)]
struct RawNode {
    elem_type: String,
    #[serde(flatten)]
    attrs: Map<String, Json>,
}

impl RawNode {
    /// Remove an attribute; `null` reads as absent.
    fn take(&mut self, attr: &'static str) -> Option<Json> {
        self.attrs.remove(attr).filter(|v| !v.is_null())
    }

    fn required(&mut self, attr: &'static str) -> Result<Json, LoadError> {
        self.take(attr).ok_or_else(|| LoadError::MissingAttribute {
            node: self.elem_type.clone(),
            attr,
        })
    }

    fn wrong_type(&self, attr: &'static str, expected: &'static str) -> LoadError {
        LoadError::WrongAttributeType {
            node: self.elem_type.clone(),
            attr,
            expected,
        }
    }

    fn string(&mut self, attr: &'static str) -> Result<String, LoadError> {
        match self.required(attr)? {
            Json::String(s) => Ok(s),
            _ => Err(self.wrong_type(attr, "a string")),
        }
    }

    fn node(&mut self, attr: &'static str) -> Result<RawNode, LoadError> {
        let value = self.required(attr)?;
        self.parse_node(attr, value)
    }

    fn opt_node(&mut self, attr: &'static str) -> Result<Option<RawNode>, LoadError> {
        self.take(attr)
            .map(|value| self.parse_node(attr, value))
            .transpose()
    }

    fn nodes(&mut self, attr: &'static str) -> Result<Vec<RawNode>, LoadError> {
        let value = self.required(attr)?;
        self.parse_nodes(attr, value)
    }

    fn opt_nodes(&mut self, attr: &'static str) -> Result<Option<Vec<RawNode>>, LoadError> {
        self.take(attr)
            .map(|value| self.parse_nodes(attr, value))
            .transpose()
    }

    /// Check that every attribute was consumed.
    fn finish(self) -> Result<(), LoadError> {
        match self.attrs.into_iter().next() {
            Some((attr, _)) => Err(LoadError::UnknownAttribute {
                node: self.elem_type,
                attr,
            }),
            None => Ok(()),
        }
    }

    fn parse_node(&self, attr: &'static str, value: Json) -> Result<RawNode, LoadError> {
        if !value.is_object() {
            return Err(self.wrong_type(attr, "a node"));
        }
        Ok(serde_json::from_value(value)?)
    }

    fn parse_nodes(&self, attr: &'static str, value: Json) -> Result<Vec<RawNode>, LoadError> {
        match value {
            Json::Array(items) => items
                .into_iter()
                .map(|item| self.parse_node(attr, item))
                .collect(),
            _ => Err(self.wrong_type(attr, "a list of nodes")),
        }
    }
}

/// Load a program document, interning every name into `interner`.
pub fn load_program(source: &str, interner: &mut StringInterner) -> Result<Program, LoadError> {
    let root: RawNode = serde_json::from_str(source)?;
    let program = Lowerer { interner }.program(root)?;
    debug!(functions = program.functions.len(), "loaded program");
    Ok(program)
}

/// Converts raw nodes into IR.
struct Lowerer<'i> {
    interner: &'i mut StringInterner,
}

impl Lowerer<'_> {
    fn name(&mut self, node: &mut RawNode, attr: &'static str) -> Result<Name, LoadError> {
        let s = node.string(attr)?;
        Ok(self.interner.intern(&s))
    }

    fn program(&mut self, mut node: RawNode) -> Result<Program, LoadError> {
        if node.elem_type != "program" {
            return Err(LoadError::UnknownNode {
                context: "top-level",
                elem_type: node.elem_type,
            });
        }
        let functions = node
            .nodes("functions")?
            .into_iter()
            .map(|f| self.function(f))
            .collect::<Result<_, _>>()?;
        node.finish()?;
        Ok(Program::new(functions))
    }

    fn function(&mut self, mut node: RawNode) -> Result<FunctionDef, LoadError> {
        if node.elem_type != "func" {
            return Err(LoadError::UnknownNode {
                context: "function",
                elem_type: node.elem_type,
            });
        }
        let name = self.name(&mut node, "name")?;
        let params = node
            .opt_nodes("args")?
            .unwrap_or_default()
            .into_iter()
            .map(|arg| self.param(arg))
            .collect::<Result<_, _>>()?;
        let body = self.block(&mut node, "statements")?;
        node.finish()?;
        Ok(FunctionDef::new(name, params, body))
    }

    fn param(&mut self, mut node: RawNode) -> Result<Name, LoadError> {
        if node.elem_type != "arg" {
            return Err(LoadError::UnknownNode {
                context: "parameter",
                elem_type: node.elem_type,
            });
        }
        let name = self.name(&mut node, "name")?;
        node.finish()?;
        Ok(name)
    }

    /// A statement list; absent means empty.
    fn block(&mut self, node: &mut RawNode, attr: &'static str) -> Result<Vec<Stmt>, LoadError> {
        node.opt_nodes(attr)?
            .unwrap_or_default()
            .into_iter()
            .map(|s| self.statement(s))
            .collect()
    }

    fn statement(&mut self, mut node: RawNode) -> Result<Stmt, LoadError> {
        let stmt = match node.elem_type.as_str() {
            "fcall" => Stmt::Call(self.call(&mut node)?),
            "=" => Stmt::Assign {
                name: self.name(&mut node, "name")?,
                expr: self.expression(node.node("expression")?)?,
            },
            "vardef" => Stmt::VarDef {
                name: self.name(&mut node, "name")?,
            },
            "if" => Stmt::If {
                condition: self.expression(node.node("condition")?)?,
                statements: self.block(&mut node, "statements")?,
                else_statements: self.else_block(&mut node)?,
            },
            "for" => Stmt::For {
                init: Box::new(self.statement(node.node("init")?)?),
                condition: self.expression(node.node("condition")?)?,
                update: Box::new(self.statement(node.node("update")?)?),
                statements: self.block(&mut node, "statements")?,
            },
            "return" => Stmt::Return {
                expr: node
                    .opt_node("expression")?
                    .map(|e| self.expression(e))
                    .transpose()?,
            },
            _ => {
                return Err(LoadError::UnknownNode {
                    context: "statement",
                    elem_type: node.elem_type,
                })
            }
        };
        node.finish()?;
        Ok(stmt)
    }

    /// The optional else branch, under `else-statements` or `else_statements`.
    fn else_block(&mut self, node: &mut RawNode) -> Result<Option<Vec<Stmt>>, LoadError> {
        let stmts = match node.opt_nodes("else-statements")? {
            Some(stmts) => Some(stmts),
            None => node.opt_nodes("else_statements")?,
        };
        stmts
            .map(|stmts| {
                stmts
                    .into_iter()
                    .map(|s| self.statement(s))
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()
    }

    fn call(&mut self, node: &mut RawNode) -> Result<CallExpr, LoadError> {
        let name = self.name(node, "name")?;
        let args = node
            .opt_nodes("args")?
            .unwrap_or_default()
            .into_iter()
            .map(|a| self.expression(a))
            .collect::<Result<_, _>>()?;
        Ok(CallExpr::new(name, args))
    }

    fn expression(&mut self, mut node: RawNode) -> Result<Expr, LoadError> {
        let expr = match node.elem_type.as_str() {
            "int" => Expr::Int(int_literal(&mut node)?),
            "string" => Expr::Str(node.string("val")?),
            "bool" => match node.required("val")? {
                Json::Bool(b) => Expr::Bool(b),
                _ => return Err(node.wrong_type("val", "a boolean")),
            },
            "nil" => Expr::Nil,
            "var" => Expr::Var(self.name(&mut node, "name")?),
            "fcall" => Expr::Call(self.call(&mut node)?),
            other => {
                if let Some(op) = UnaryOp::from_symbol(other) {
                    Expr::unary(op, self.expression(node.node("op1")?)?)
                } else if let Some(op) = BinaryOp::from_symbol(other) {
                    let left = self.expression(node.node("op1")?)?;
                    let right = self.expression(node.node("op2")?)?;
                    Expr::binary(op, left, right)
                } else {
                    return Err(LoadError::UnknownNode {
                        context: "expression",
                        elem_type: node.elem_type,
                    });
                }
            }
        };
        node.finish()?;
        Ok(expr)
    }
}

fn int_literal(node: &mut RawNode) -> Result<i64, LoadError> {
    match node.required("val")? {
        Json::Number(n) => n.as_i64().ok_or_else(|| LoadError::IntOutOfRange {
            value: n.to_string(),
        }),
        _ => Err(node.wrong_type("val", "an integer")),
    }
}
