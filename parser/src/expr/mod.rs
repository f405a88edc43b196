//! The expression grammar, one file per precedence level (lowest first),
//! plus a handful of shared sub-productions (comprehensions, slices, call
//! arguments, parameter lists, `yield`). Every function here is an `impl
//! Parser` method so the cascade reads as a single call chain from
//! `Parser::test` down to `Parser::atom`.

mod and_test;
mod arith;
mod atom;
mod bitand;
mod bitor;
mod bitxor;
mod call_args;
mod comparison;
mod comprehension;
mod conditional;
mod factor;
mod lambda;
mod not_test;
mod or_test;
mod params;
mod power;
mod shift;
mod slice;
mod term;
mod trailer;
mod yield_expr;
