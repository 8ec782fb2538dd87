pub mod error;
pub mod eval;
pub mod lexeme;
pub mod normalize;
pub mod parser;

pub use error::{EvalError, ParseError};
pub use eval::{is_allowed, safe_eval, try_eval};
pub use normalize::{compact, normalize, strip_whitespace};
pub use parser::{parse, ParseNode};
