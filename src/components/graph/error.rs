use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
	#[error("syntax error\n{0}")]
	Syntax(String),
}
