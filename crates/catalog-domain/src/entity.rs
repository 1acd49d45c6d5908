//! Base contract shared by every aggregate

use std::fmt::{Debug, Display};
use std::hash::Hash;

use crate::validation::Notification;

/// An aggregate with a stable identity and an attached validation notification.
///
/// Repositories and the searchable collection are generic over this trait.
pub trait Entity: Clone + Debug + Send + Sync + 'static {
    /// Identity type
    type Id: Clone + Debug + Display + PartialEq + Eq + Hash + Send + Sync + 'static;

    /// Name used in error messages (e.g. "Category Not Found using ID ...")
    const NAME: &'static str;

    fn entity_id(&self) -> &Self::Id;

    fn notification(&self) -> &Notification;
}
