/// A request to change state: create an entity under a pre-assigned id,
/// patch one by id, or move the user between roles and sections.
pub trait Intent: Send + 'static {}
