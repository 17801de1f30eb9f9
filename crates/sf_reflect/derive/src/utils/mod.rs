mod string_expr;

pub(crate) use string_expr::{JoinedExpr, StringExpr};
