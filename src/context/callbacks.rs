/*!
General callbacks associated with a context.

Callbacks which read the bindings of a search at a solution are given directly to [solve](crate::procedures::solve), and those here persist across searches.

# Callback types

Callbacks may be mutable functions.
Still, information passed from the context is non-mutable.
*/

use super::{Context, Counters};

/// Checked before each attempt to use a clause, with the counters of the search so far.
/// The search stops if the callback returns true.
pub type CallbackTerminate = dyn FnMut(&Counters) -> bool;

impl Context {
    /// Sets the terminate callback, replacing any previous callback.
    pub fn set_callback_terminate(&mut self, callback: Box<CallbackTerminate>) {
        self.callback_terminate = Some(callback);
    }

    /// Removes the terminate callback, if set.
    pub fn clear_callback_terminate(&mut self) {
        self.callback_terminate = None;
    }

    pub fn check_callback_terminate(&mut self) -> bool {
        match &mut self.callback_terminate {
            Some(callback) => callback(&self.counters),
            None => false,
        }
    }
}
