//! Orchestration engine seam
//!
//! The engine receives the ordered declaration sequence and owns everything
//! after that: diffing against applied state, planning, and the remote
//! provider calls. This crate never observes that cycle; it only registers
//! declarations and treats a registration failure as fatal for the pass.

use crate::resource::Declaration;
use anyhow::Result;

/// Receiver for resource declarations, in emission order
pub trait Engine {
    /// Register one declaration for this synchronization pass
    ///
    /// An error aborts the remaining graph construction; the builder wraps
    /// it with the offending resource key.
    fn register(&mut self, declaration: Declaration) -> Result<()>;
}

/// Engine that records declarations in the order they were registered
///
/// Backs `orgsync plan` and the builder tests; a real engine would forward
/// each declaration to the provider instead.
#[derive(Debug, Default)]
pub struct RecordingEngine {
    declarations: Vec<Declaration>,
}

impl RecordingEngine {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// The declarations registered so far, in emission order
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// Consume the recorder and return the ordered declarations
    pub fn into_declarations(self) -> Vec<Declaration> {
        self.declarations
    }
}

impl Engine for RecordingEngine {
    fn register(&mut self, declaration: Declaration) -> Result<()> {
        self.declarations.push(declaration);
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use anyhow::bail;

    /// Engine that fails when asked to register a specific key
    #[derive(Debug)]
    pub struct FailingEngine {
        pub fail_on: String,
        pub registered: Vec<Declaration>,
    }

    impl FailingEngine {
        pub fn new(fail_on: &str) -> Self {
            Self {
                fail_on: fail_on.to_string(),
                registered: Vec::new(),
            }
        }
    }

    impl Engine for FailingEngine {
        fn register(&mut self, declaration: Declaration) -> Result<()> {
            if declaration.key == self.fail_on {
                bail!("provider rejected declaration");
            }
            self.registered.push(declaration);
            Ok(())
        }
    }
}
