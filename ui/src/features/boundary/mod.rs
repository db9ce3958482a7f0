//! Render-failure state machine backing
//! [`ErrorBoundary`](crate::components::shared::ErrorBoundary).

use std::cell::RefCell;
use std::rc::Rc;

use crate::console_error;
use crate::services::errors::ErrorCategory;
use crate::services::navigation::Navigator;
use crate::utils::platform;

/// Route the boundary returns to on reset.
pub const ROOT_ROUTE: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureReport {
    pub message: String,
    /// Structural trace, when the framework supplied one.
    pub trace: Option<String>,
    pub category: ErrorCategory,
}

impl FailureReport {
    pub fn render(message: impl Into<String>, trace: Option<String>) -> Self {
        Self {
            message: message.into(),
            trace: trace.filter(|t| !t.trim().is_empty()),
            category: ErrorCategory::Render,
        }
    }
}

/// Prefix the framework puts on captured render errors.
const CAPTURED_PREFIX: &str = "Encountered error: ";

/// Splits a captured error's text into the headline and the remaining
/// diagnostic lines, which serve as the trace.
pub fn report_from_captured(text: &str) -> FailureReport {
    let (head, rest) = text.split_once('\n').unwrap_or((text, ""));
    let message = head.strip_prefix(CAPTURED_PREFIX).unwrap_or(head).trim();
    FailureReport::render(message, Some(rest.to_string()))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BoundaryState {
    #[default]
    Normal,
    Failed(FailureReport),
}

impl BoundaryState {
    /// Records the first failure. Returns `true` only on the transition out
    /// of `Normal`, so callers log each failure exactly once.
    pub fn fail(&mut self, report: FailureReport) -> bool {
        match self {
            BoundaryState::Normal => {
                *self = BoundaryState::Failed(report);
                true
            }
            BoundaryState::Failed(_) => false,
        }
    }

    /// Back to `Normal`; yields the route to hard-navigate to.
    pub fn reset(&mut self) -> &'static str {
        *self = BoundaryState::Normal;
        ROOT_ROUTE
    }

    pub fn report(&self) -> Option<&FailureReport> {
        match self {
            BoundaryState::Failed(report) => Some(report),
            BoundaryState::Normal => None,
        }
    }
}

/// Shared handle over one boundary's state, used by both the error handler
/// and the fallback's reset button.
#[derive(Debug, Clone, Default)]
pub struct BoundaryController {
    state: Rc<RefCell<BoundaryState>>,
}

impl BoundaryController {
    /// Records a captured render failure. Logs only on the transition into
    /// the failed state; later captures of the same failure are silent.
    pub fn capture(&self, captured: &str) -> FailureReport {
        let report = report_from_captured(captured);
        if self.state.borrow_mut().fail(report.clone()) {
            console_error!(format!("[ErrorBoundary] Render failure: {}", report.message));
            if let Some(trace) = &report.trace {
                console_error!(format!("[ErrorBoundary] Trace: {trace}"));
            }
        }
        report
    }

    /// Back to normal, then a full page load of the root route.
    pub fn reset(&self, navigator: Option<&dyn Navigator>) {
        let route = self.state.borrow_mut().reset();
        match navigator {
            Some(navigator) => navigator.hard_navigate(route),
            None => platform::hard_navigate(route),
        }
    }

    pub fn state(&self) -> BoundaryState {
        self.state.borrow().clone()
    }
}
