//! Recording runner for unit tests

use crate::error::CaurResult;
use crate::process::runner::{CommandRunner, CommandSpec};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

type Hook = Box<dyn Fn(&CommandSpec)>;

/// Records every command instead of running it
///
/// Exit codes default to 0 and can be set per program. A hook can simulate
/// side effects such as `git clone` populating a directory.
#[derive(Default)]
pub(crate) struct RecordingRunner {
    calls: RefCell<Vec<CommandSpec>>,
    exit_codes: HashMap<String, i32>,
    programs: HashSet<String>,
    hook: Option<Hook>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_exit_code(mut self, program: &str, code: i32) -> Self {
        self.exit_codes.insert(program.to_string(), code);
        self
    }

    pub fn with_program(mut self, program: &str) -> Self {
        self.programs.insert(program.to_string());
        self
    }

    pub fn with_hook(mut self, hook: impl Fn(&CommandSpec) + 'static) -> Self {
        self.hook = Some(Box::new(hook));
        self
    }

    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.borrow().clone()
    }

    pub fn programs_run(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|c| c.program.clone())
            .collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, spec: &CommandSpec) -> CaurResult<i32> {
        self.calls.borrow_mut().push(spec.clone());
        if let Some(hook) = &self.hook {
            hook(spec);
        }
        Ok(self.exit_codes.get(&spec.program).copied().unwrap_or(0))
    }

    fn has_program(&self, name: &str) -> bool {
        self.programs.contains(name)
    }
}
