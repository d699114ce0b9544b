//! Project record and request payload

use serde::{Deserialize, Serialize};

/// A row of the "TestProjects" table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i32,
    pub name: String,
}

/// Create/update request body.
///
/// Only the name is meaningful. Clients may send a full Project including an
/// id; unknown fields are dropped during deserialization, so a client-supplied
/// id never reaches the database. The id is generated on create and taken
/// from the path on update.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectPayload {
    pub name: String,
}
