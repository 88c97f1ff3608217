//! Wuffs IR - shared front-end types
//!
//! This crate contains the data structures shared by the Wuffs lexer,
//! parser and renderer:
//! - `Name` handles for interned spellings
//! - `Key`, `Id` and `Token` for lexer output, with static key metadata
//! - `TokenMap`, the per-compilation intern table
//! - AST sum types for declarations, statements and expressions
//! - the base-38 codec used by `packageid` declarations
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: spellings become `Name(u32)`; the lexical class
//!   travels next to it as a closed `Key` enum
//! - **Explicit Context**: the `TokenMap` is passed by reference, never global
//! - **Own the Tree**: AST nodes own their children and never change after
//!   construction

pub mod ast;
pub mod base38;
mod name;
mod token;

pub use name::Name;
pub use token::{
    AssocOp, BinaryOp, Id, InternError, Key, KeyFlags, Token, TokenMap, UnaryOp,
    BUILTIN_IDENTS, MAX_TOKENS,
};
