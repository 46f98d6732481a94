//! Server endpoints
//!
//! Parameterized targets are plain concatenations: the server reads the raw
//! query string as the parameter, so nothing is URL-encoded here.

use crate::types::Branch;

/// Next message of the running command
pub const NEXT_MESSAGE: &str = "/get_msg";

/// List of publishable branches
pub const GET_BRANCHES: &str = "/get_branches";

/// Update dependencies
pub const UPDATE: &str = "/update";

/// Launch Natural Selection 2
pub const NS2: &str = "/ns2";

/// Launch the editor
pub const EDITOR: &str = "/editor";

/// Pick a project directory, finishes with `old` or `new`
pub const FIND_PROJECT: &str = "/find_project";

/// Initialise a new project in the picked directory
pub const CREATE_PROJECT: &str = "/create_project";

/// Add a workshop dependency by mod id
pub fn need(mod_id: &str) -> String {
    format!("/need?{mod_id}")
}

/// Publish a branch to the workshop
pub fn publish(branch: &Branch) -> String {
    format!("/publish?{branch}")
}
