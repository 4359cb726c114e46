//! # Language Module
//! 
//! Language specific operations such as detokenization are in the submodules.
//! At present there is one, `bbc`, for Acorn BBC BASIC V.

pub mod bbc;
