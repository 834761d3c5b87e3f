//! The lexical module is responsible for converting raw text into a stream of
//! classified spans the host renders as highlighted output.

pub mod token_stream;

pub mod token;

pub mod dialect;

pub mod keyword;
