//! People: contacts tracked in PipelineDeals.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::flag;
use crate::clients::RestClient;
use crate::rest::resource::fmt_instance;
use crate::rest::{Collection, Resource, ResourceError};

/// A person record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Person(Map<String, Value>);

impl Resource for Person {
    const NAME: &'static str = "Person";

    fn from_fields(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_instance(self, f)
    }
}

/// The `people` collection.
///
/// Creation sends two flags as query parameters, set with the builder
/// methods:
///
/// - `check_for_duplicates` (default `false`)
/// - `deliver_assignment_email` (default `true`)
///
/// ```rust,ignore
/// let person = client
///     .people()
///     .check_for_duplicates(true)
///     .deliver_assignment_email(false)
///     .create(&json!({"first_name": "Ada", "last_name": "Lovelace"}))?;
/// ```
#[derive(Clone, Copy, Debug)]
pub struct PersonCollection<'a> {
    client: &'a RestClient,
    check_for_duplicates: bool,
    deliver_assignment_email: bool,
}

impl<'a> PersonCollection<'a> {
    /// Creates the collection with default flags.
    #[must_use]
    pub const fn new(client: &'a RestClient) -> Self {
        Self {
            client,
            check_for_duplicates: false,
            deliver_assignment_email: true,
        }
    }

    /// Asks the server to reject likely duplicates on create.
    #[must_use]
    pub const fn check_for_duplicates(mut self, enabled: bool) -> Self {
        self.check_for_duplicates = enabled;
        self
    }

    /// Controls whether the assigned user is emailed on create.
    #[must_use]
    pub const fn deliver_assignment_email(mut self, enabled: bool) -> Self {
        self.deliver_assignment_email = enabled;
        self
    }
}

impl Collection for PersonCollection<'_> {
    type Instance = Person;

    const API_PATH: &'static str = "people";
    const NAME_SPACE: &'static str = "person";

    fn client(&self) -> &RestClient {
        self.client
    }

    fn create(&self, attrs: &impl Serialize) -> Result<Person, ResourceError> {
        let params = vec![
            ("check_for_duplicates".to_string(), flag(self.check_for_duplicates)),
            ("deliver_assignment_email".to_string(), flag(self.deliver_assignment_email)),
        ];
        self.create_with_params(params, attrs)
    }
}
