/// Lifecycle of a single request-driven screen.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum FlowState<T> {
    #[default]
    Idle,
    Loading,
    Succeeded(T),
    Failed(String),
}

impl<T> FlowState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FlowState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FlowState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn succeeded(&self) -> Option<&T> {
        match self {
            FlowState::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    pub fn from_result(result: Result<T, String>) -> Self {
        match result {
            Ok(value) => FlowState::Succeeded(value),
            Err(message) => FlowState::Failed(message),
        }
    }
}

/// What the forgot-password screen needs after a request went through.
#[derive(Clone, Debug, PartialEq)]
pub struct ResetRequestReceipt {
    pub email: String,
    /// Blocking notice carrying the development token. Never set outside
    /// development builds.
    pub dev_notice: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_state_accessors() {
        let idle: FlowState<()> = FlowState::default();
        assert_eq!(idle, FlowState::Idle);
        assert!(!idle.is_loading());

        let failed: FlowState<()> = FlowState::from_result(Err("nope".to_string()));
        assert_eq!(failed.error(), Some("nope"));
        assert_eq!(failed.succeeded(), None);

        let done = FlowState::from_result(Ok(7));
        assert_eq!(done.succeeded(), Some(&7));
        assert_eq!(done.error(), None);
    }
}
