//! Deals.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::RestClient;
use crate::rest::resource::fmt_instance;
use crate::rest::{Collection, Resource};

/// A deal record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deal(Map<String, Value>);

impl Resource for Deal {
    const NAME: &'static str = "Deal";

    fn from_fields(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl fmt::Display for Deal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_instance(self, f)
    }
}

/// The `deals` collection. Uses every default [`Collection`] method.
#[derive(Clone, Copy, Debug)]
pub struct DealCollection<'a> {
    client: &'a RestClient,
}

impl<'a> DealCollection<'a> {
    /// Creates the collection.
    #[must_use]
    pub const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }
}

impl Collection for DealCollection<'_> {
    type Instance = Deal;

    const API_PATH: &'static str = "deals";
    const NAME_SPACE: &'static str = "deal";

    fn client(&self) -> &RestClient {
        self.client
    }
}
