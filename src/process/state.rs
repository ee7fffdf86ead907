use std::fmt::{Display, Formatter};

/// Visual state of a control across one submission cycle.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ProcessState {
    Idle,
    Processing,
    Errored,
    Succeeded,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProcessError {
    StatePoisoned(&'static str),
    InvalidTransition {
        from: ProcessState,
        to: ProcessState,
    },
}

impl Display for ProcessError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessError::StatePoisoned(context) => {
                write!(f, "element state lock poisoned while {context}")
            }
            ProcessError::InvalidTransition { from, to } => {
                write!(f, "invalid process state transition: {from:?} -> {to:?}")
            }
        }
    }
}

impl std::error::Error for ProcessError {}

pub type ProcessResult<T> = Result<T, ProcessError>;

pub(super) fn transition(current: ProcessState, next: ProcessState) -> ProcessResult<ProcessState> {
    if current == next {
        return Ok(next);
    }

    let allowed = matches!(
        (current, next),
        (ProcessState::Idle, ProcessState::Processing)
            | (ProcessState::Errored, ProcessState::Processing)
            | (ProcessState::Succeeded, ProcessState::Processing)
            | (ProcessState::Processing, ProcessState::Errored)
            | (ProcessState::Processing, ProcessState::Succeeded)
            | (_, ProcessState::Idle)
    );
    if !allowed {
        return Err(ProcessError::InvalidTransition {
            from: current,
            to: next,
        });
    }
    Ok(next)
}
