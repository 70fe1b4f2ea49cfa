/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [term database](crate::db::term)
    pub const TERM_DB: &str = "term_db";

    /// Logs related to the [trail](crate::db::trail), i.e. bindings and their undoing
    pub const TRAIL: &str = "trail";

    /// Logs related to [unification](crate::procedures::unify)
    pub const UNIFICATION: &str = "unification";

    /// Logs related to [instantiation](crate::procedures::freshen)
    pub const FRESHEN: &str = "freshen";

    /// Logs related to the [solve procedure](crate::procedures::solve)
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to the [configuration](crate::config)
    pub const CONFIG: &str = "config";
}
