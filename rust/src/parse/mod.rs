pub mod assignable;
pub mod binding;
pub mod decl;
pub mod expr;
pub mod host;
pub mod literal;
pub mod lval;
pub mod object;
pub mod operator;
pub mod parser;
pub mod reserved;
pub mod signature;
pub mod stmt;
#[cfg(test)]
mod tests;
pub mod toplevel;
