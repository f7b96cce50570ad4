use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error(transparent)]
    Font(#[from] minifont_core::Error),

    #[error("failed to write font artifacts: {0}")]
    Io(#[from] std::io::Error),
}

impl CompileError {
    pub(crate) fn syntax(line: usize, message: impl Into<String>) -> Self {
        CompileError::Syntax {
            line,
            message: message.into(),
        }
    }
}
