mod check;
mod parse;
mod validate;
