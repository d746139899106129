use thiserror::Error;

/// All errors returned by `objhooks-core`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Neither operand knows how to perform the operation.
    ///
    /// `rhs` is `None` for unary operations.
    #[error("unsupported operand type(s) for {op}: {lhs}{}", .rhs.map(|r| format!(" and {r}")).unwrap_or_default())]
    UnsupportedOperand {
        op: &'static str,
        lhs: &'static str,
        rhs: Option<&'static str>,
    },

    /// The attribute is neither declared nor previously written.
    #[error("no attribute named '{name}'")]
    AttributeNotFound { name: String },

    /// Attributes can never be removed.
    #[error("attribute '{name}' cannot be deleted: no attribute should be deleted")]
    DeletionNotPermitted { name: String },
}

/// Convenience alias used throughout `objhooks-core`.
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_binary_message() {
        let err = CoreError::UnsupportedOperand {
            op: "*",
            lhs: "Vector",
            rhs: Some("str"),
        };
        assert_eq!(
            err.to_string(),
            "unsupported operand type(s) for *: Vector and str"
        );
    }

    #[test]
    fn test_unsupported_unary_message() {
        let err = CoreError::UnsupportedOperand {
            op: "unary -",
            lhs: "str",
            rhs: None,
        };
        assert_eq!(err.to_string(), "unsupported operand type(s) for unary -: str");
    }

    #[test]
    fn test_deletion_message_names_attribute() {
        let err = CoreError::DeletionNotPermitted {
            name: "contents".into(),
        };
        assert!(err.to_string().contains("'contents'"));
    }
}
