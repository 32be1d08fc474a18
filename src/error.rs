/// Ways a removal from a [`GenericStack`](crate::GenericStack) can fail.
///
/// The unchecked operations (`pop`, `pop_n`) panic with the `Display` form of
/// these values; the `try_` variants hand them back instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StackError {
    /// Asked for more elements than the stack holds.
    #[error("stack underflow: requested {requested} element(s), but only {len} present")]
    Underflow { requested: usize, len: usize },
    /// The `pop_n` destination can't hold the requested elements.
    #[error("destination too short: requested {required} element(s), but it holds {len}")]
    DestinationTooShort { required: usize, len: usize },
}

/// Abort the current operation on a broken precondition.
#[cold]
#[track_caller]
pub(crate) fn fail(err: StackError) -> ! {
    panic!("{err}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn underflow_message() {
        let err = StackError::Underflow {
            requested: 3,
            len: 1,
        };
        assert_eq!(
            err.to_string(),
            "stack underflow: requested 3 element(s), but only 1 present"
        );
    }

    #[test]
    #[should_panic(expected = "destination too short")]
    fn fail_panics_with_message() {
        fail(StackError::DestinationTooShort { required: 2, len: 0 });
    }
}
