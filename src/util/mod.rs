pub mod channel;
pub mod parse;
pub mod text;
