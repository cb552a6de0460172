/// An owned snapshot holding everything the views render.
///
/// `Default` lets a container take the current snapshot by value while reducing.
pub trait State: Clone + PartialEq + Default + Send + 'static {}
