mod binding;
mod expr;
mod lval;
