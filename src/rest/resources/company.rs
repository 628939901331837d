//! Companies.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::flag;
use crate::clients::RestClient;
use crate::rest::resource::fmt_instance;
use crate::rest::{Collection, Resource, ResourceError};

/// A company record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Company(Map<String, Value>);

impl Resource for Company {
    const NAME: &'static str = "Company";

    fn from_fields(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_instance(self, f)
    }
}

/// The `companies` collection.
///
/// Creation sends `check_for_duplicates` (default `false`).
#[derive(Clone, Copy, Debug)]
pub struct CompanyCollection<'a> {
    client: &'a RestClient,
    check_for_duplicates: bool,
}

impl<'a> CompanyCollection<'a> {
    /// Creates the collection with default flags.
    #[must_use]
    pub const fn new(client: &'a RestClient) -> Self {
        Self {
            client,
            check_for_duplicates: false,
        }
    }

    /// Asks the server to reject likely duplicates on create.
    #[must_use]
    pub const fn check_for_duplicates(mut self, enabled: bool) -> Self {
        self.check_for_duplicates = enabled;
        self
    }
}

impl Collection for CompanyCollection<'_> {
    type Instance = Company;

    const API_PATH: &'static str = "companies";
    const NAME_SPACE: &'static str = "company";

    fn client(&self) -> &RestClient {
        self.client
    }

    fn create(&self, attrs: &impl Serialize) -> Result<Company, ResourceError> {
        let params = vec![("check_for_duplicates".to_string(), flag(self.check_for_duplicates))];
        self.create_with_params(params, attrs)
    }
}
