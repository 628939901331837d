//! PipelineDeals resources.
//!
//! Each resource comes as a pair: an instance type wrapping one JSON object,
//! and a collection implementing [`Collection`](crate::rest::Collection)
//! against its endpoint.
//!
//! | collection            | instance    | endpoint    | namespace |
//! |-----------------------|-------------|-------------|-----------|
//! | [`PersonCollection`]  | [`Person`]  | `people`    | `person`  |
//! | [`CompanyCollection`] | [`Company`] | `companies` | `company` |
//! | [`DealCollection`]    | [`Deal`]    | `deals`     | `deal`    |
//!
//! Collections are obtained from the client:
//!
//! ```rust,ignore
//! let people = client.people().check_for_duplicates(true);
//! let person = people.create(&json!({"first_name": "Ada"}))?;
//! ```

mod company;
mod deal;
mod person;

pub use company::{Company, CompanyCollection};
pub use deal::{Deal, DealCollection};
pub use person::{Person, PersonCollection};

/// Renders a create flag the way the API expects it.
pub(crate) fn flag(value: bool) -> String {
    value.to_string()
}
