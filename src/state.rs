/// A lightweight, serializable snapshot of a window's geometry and scroll offset.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
///
/// This is useful for restoring UI state across frames (e.g. after the host rebuilds its view)
/// without coupling the engine to any specific UI framework.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowState {
    pub height: f64,
    pub scroll_top: f64,
}
